//! The playfield of a Minesweeper game.
//!
//! A field is parsed from the input with mines and empty tiles only, then labeled in a single pass by [`compute_counts`][m_cc]. Everything interesting about a record happens here.
//!
//! [m_cc]: struct.Field.html#method.compute_counts "compute_counts — labels every safe tile with its neighboring mine count"

use core::{
    fmt::{self, Display, Formatter},
    ops::{Index, IndexMut},
    num::NonZeroUsize,
};
#[cfg(feature = "serialization")]
use serde::{
    Serialize, Deserialize,
    ser::{Serializer, SerializeStruct},
    de::{self, Deserializer, Visitor, MapAccess, SeqAccess},
};
use crate::{
    Tile,
    RowIter, FieldRowsIter,
};

/// Represents a playfield.
///
/// Fields are matrices of [tiles][tile] stored in row-major order. The dimensions are fixed when the field is created and the field always holds exactly `width * height` tiles.
///
/// [tile]: enum.Tile.html "Tile — a tile on a Minesweeper field"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    dimensions: FieldDimensions,
    storage: Vec<Tile>,
}
/// The dimensions of a field.
///
/// The first element specifies the width (the number of columns), while the second one specifies the height (number of rows). As required by `NonZeroUsize`, a field cannot be smaller than 1x1.
pub type FieldDimensions = [NonZeroUsize; 2];
/// The coordinates of a tile on a field.
///
/// The first element specifies the column index (X coordinate), while the second one specifies the row index (Y coordinate). The coordinates `[0, 0]` correspond to the top left corner.
pub type FieldCoordinates = [usize; 2];

/// Offsets of the neighbors of a tile in clockwise order, starting from top-left: ↖, ↑, ↗, →, ↘, ↓, ↙, ←.
const NEIGHBOR_OFFSETS: [[isize; 2]; 8] = [
    [-1, -1], [0, -1], [1, -1],
    [1, 0],
    [1, 1], [0, 1], [-1, 1],
    [-1, 0],
];

impl Field {
    /// Creates a field filled with empty tiles, with the given dimensions.
    #[inline]
    #[must_use = "this performs a memory allocation as big as the area of the field"]
    pub fn empty(dimensions: FieldDimensions) -> Self {
        let (width, height) = (dimensions[0].get(), dimensions[1].get());
        Self {
            storage: vec![Tile::default(); width * height],
            dimensions,
        }
    }
    /// Creates a field with the specified dimensions from the specified `Vec` of tiles, given in [row-major order][rmo], or `None` if the amount of tiles doesn't match the area.
    ///
    /// [rmo]: https://en.wikipedia.org/wiki/Row-_and_column-major_order "Row- and column-major order — Wikipedia"
    #[must_use]
    pub fn from_dimensions_and_storage(dimensions: FieldDimensions, storage: Vec<Tile>) -> Option<Self> {
        let area = dimensions[0].get() * dimensions[1].get();
        if storage.len() == area {
            Some(Self {dimensions, storage})
        } else {
            None
        }
    }
    /// Returns the width and height of the field.
    #[inline(always)]
    pub const fn dimensions(&self) -> FieldDimensions {
        self.dimensions
    }
    /// Row-major access to all tiles at once, for filling a field row by row.
    #[inline(always)]
    pub(crate) fn storage_mut(&mut self) -> &mut [Tile] {
        &mut self.storage
    }
    /// Returns the number of columns.
    #[inline(always)]
    pub const fn width(&self) -> usize {
        self.dimensions[0].get()
    }
    /// Returns the number of rows.
    #[inline(always)]
    pub const fn height(&self) -> usize {
        self.dimensions[1].get()
    }

    /// Returns the tile at the column `coordinates[0]` and row `coordinates[1]`, both starting at zero, or `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, coordinates: FieldCoordinates) -> Option<&Tile> {
        let [x, y] = coordinates;
        if x >= self.width() || y >= self.height() {return None};
        self.storage.get(x + y * self.width())
    }
    /// Returns a mutable reference to the tile at the column `coordinates[0]` and row `coordinates[1]`, both starting at zero, or `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get_mut(&mut self, coordinates: FieldCoordinates) -> Option<&mut Tile> {
        let [x, y] = coordinates;
        if x >= self.width() || y >= self.height() {return None};
        let width = self.width();
        self.storage.get_mut(x + y * width)
    }
    /// Detects whether a location is a mine, or `None` if it's out of bounds.
    #[inline]
    pub fn is_mine(&self, coordinates: FieldCoordinates) -> Option<bool> {
        self.get(coordinates).map(|tile| tile.is_mine())
    }
    /// Returns the coordinates of the neighbor of `location` in the direction of `offset`, or `None` if that would leave the field.
    ///
    /// Coordinates never wrap around the edges.
    fn neighbor(&self, location: FieldCoordinates, offset: [isize; 2]) -> Option<FieldCoordinates> {
        let x = location[0].checked_add_signed(offset[0])?;
        let y = location[1].checked_add_signed(offset[1])?;
        if x < self.width() && y < self.height() {
            Some([x, y])
        } else {None}
    }
    /// Counts all neighboring mines around a spot.
    ///
    /// All directly and diagonally adjacent mines are considered neighboring; positions outside of the field contribute nothing. The tile itself is never counted, so the result is in `0..=8`.
    #[must_use = "this is a lookup of up to 8 tiles"]
    #[allow(clippy::cast_possible_truncation)]
    pub fn count_neighboring_mines(&self, location: FieldCoordinates) -> u8 {
        NEIGHBOR_OFFSETS.iter()
            .filter_map(|&offset| self.neighbor(location, offset))
            .filter(|&coords| self.is_mine(coords) == Some(true))
            .count() as u8 // At most 8, the length of NEIGHBOR_OFFSETS.
    }
    /// Labels every tile which isn't a mine with the amount of mines around it.
    ///
    /// Mines stay mines. Counting only looks at whether neighbors are mines, so the order in which tiles get labeled doesn't matter. Counts are final: the field is meant to be labeled exactly once, right after its content is parsed.
    pub fn compute_counts(&mut self) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self[[x, y]].is_mine() {continue};
                let count = self.count_neighboring_mines([x, y]);
                self[[x, y]] = Tile::Count(count);
            }
        }
    }
    /// Returns the amount of mines on the field.
    #[must_use = "traversing the entire field is obscenely expensive"]
    pub fn count_mines(&self) -> usize {
        self.storage.iter().filter(|tile| tile.is_mine()).count()
    }
    /// Renders the mine layout the field was parsed from, with `*` for mines and `.` for everything else, one line per row.
    ///
    /// Computed counts are ignored, so this reproduces the original input of the field whether it has been labeled or not.
    #[must_use]
    pub fn layout(&self) -> String {
        let mut result = String::with_capacity((self.width() + 1) * self.height());
        for row in self.rows() {
            result.extend(row.map(Tile::layout_symbol));
            result.push('\n');
        }
        result
    }

    /// Returns an iterator over a single row.
    ///
    /// Said iterator can then also be indexed, thus serving as a versatile reference to a specific row.
    ///
    /// # Panics
    /// Panics if the specified row is out of range.
    #[inline(always)]
    pub fn row(&self, row: usize) -> RowIter<'_> {
        RowIter::new(self, row)
    }
    /// Returns an iterator over the field's rows.
    #[inline(always)]
    pub fn rows(&self) -> FieldRowsIter<'_> {
        FieldRowsIter::new(self)
    }
}
impl Index<FieldCoordinates> for Field {
    type Output = Tile;
    /// Returns the tile at the column `index[0]` and row `index[1]`, both starting at zero.
    ///
    /// # Panics
    /// Index checking is enabled for this method. For a version which returns an `Option` instead of panicking if the index is out of bounds, see `get`.
    #[inline(always)]
    fn index(&self, coordinates: FieldCoordinates) -> &Self::Output {
        self.get(coordinates).expect("index out of bounds")
    }
}
impl IndexMut<FieldCoordinates> for Field {
    /// Returns the tile at the column `index[0]` and row `index[1]`, both starting at zero.
    ///
    /// # Panics
    /// Index checking is enabled for this method. For a version which returns an `Option` instead of panicking if the index is out of bounds, see `get_mut`.
    #[inline(always)]
    fn index_mut(&mut self, coordinates: FieldCoordinates) -> &mut Self::Output {
        self.get_mut(coordinates).expect("index out of bounds")
    }
}
impl Display for Field {
    /// Writes one line per row, each terminated by a newline: `*` for mines, digits for counted tiles and `.` for tiles which haven't been counted.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", tile)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serialization")]
impl Serialize for Field {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
       let mut s = s.serialize_struct("Field", 2)?;
       s.serialize_field("dimensions", &self.dimensions)?;
       s.serialize_field("storage", &self.storage)?;
       s.end()
    }
}
#[cfg(feature = "serialization")]
impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        const FIELDS: &[&str] = &["dimensions", "storage"];
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum StructField { Dimensions, Storage }

        // Goes through from_dimensions_and_storage so that a mismatched area is rejected.
        fn build<E: de::Error>(dimensions: FieldDimensions, storage: Vec<Tile>) -> Result<Field, E> {
            let len = storage.len();
            Field::from_dimensions_and_storage(dimensions, storage)
                .ok_or_else(|| de::Error::invalid_length(len, &"as many tiles as the area of the field"))
        }

        struct FieldVisitor;
        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("struct Field")
            }

            fn visit_seq<V: SeqAccess<'de>>(self, mut seq: V) -> Result<Self::Value, V::Error> {
                let dimensions = seq.next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let storage = seq.next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                build(dimensions, storage)
            }

            fn visit_map<V: MapAccess<'de>>(self, mut map: V) -> Result<Self::Value, V::Error> {
                let mut dimensions: Option<FieldDimensions> = None;
                let mut storage: Option<Vec<Tile>> = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        StructField::Dimensions => {
                            if dimensions.is_some() {
                                return Err(de::Error::duplicate_field("dimensions"));
                            }
                            dimensions = Some(map.next_value()?);
                        }
                        StructField::Storage => {
                            if storage.is_some() {
                                return Err(de::Error::duplicate_field("storage"));
                            }
                            storage = Some(map.next_value()?);
                        }
                    }
                }
                let dimensions = dimensions.ok_or_else(|| de::Error::missing_field("dimensions"))?;
                let storage = storage.ok_or_else(|| de::Error::missing_field("storage"))?;
                build(dimensions, storage)
            }
        }
        d.deserialize_struct("Field", FIELDS, FieldVisitor)
    }
}
