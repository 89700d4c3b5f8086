//! Tiles, the cells a field is made of.

use core::fmt::{self, Display, Formatter};
#[cfg(feature = "serialization")]
use serde::{
    ser::Serializer,
    de::{self, Deserializer, Visitor, EnumAccess, VariantAccess},
    Serialize, Deserialize,
};

/// The symbol which marks a tile without a mine in the input.
pub const SAFE_SYMBOL: char = '.';
/// The symbol which marks a mine, both in the input and in the output.
pub const MINE_SYMBOL: char = '*';
/// The largest amount of mines a tile can be surrounded by.
pub const MAX_NEIGHBORING_MINES: u8 = 8;

/// A tile on a Minesweeper field.
///
/// A freshly parsed field only contains `Empty` and `Mine` tiles. After [`compute_counts`][cc] runs, every `Empty` tile becomes a `Count`, while mines stay mines forever.
///
/// [cc]: struct.Field.html#method.compute_counts "compute_counts — labels every safe tile with its neighboring mine count"
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// A tile without a mine whose neighboring mine count is not known yet.
    Empty,
    /// A tile which has a mine inside.
    Mine,
    /// A tile without a mine, labeled with the amount of mines around it, in `0..=8`.
    Count(u8),
}
impl Tile {
    /// Parses an input symbol, returning `None` for anything but `.` and `*`.
    ///
    /// Counts are never accepted as input.
    #[inline]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            SAFE_SYMBOL => Some(Self::Empty),
            MINE_SYMBOL => Some(Self::Mine),
            _ => None,
        }
    }
    /// Returns the character this tile is printed as: `.` for an empty tile, `*` for a mine and the decimal digit for a count.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Self::Empty => SAFE_SYMBOL,
            Self::Mine => MINE_SYMBOL,
            Self::Count(n) => char::from_digit(u32::from(n), 10).unwrap_or('?'),
        }
    }
    /// Returns the symbol the tile had in the input, ignoring any computed count.
    #[inline]
    pub const fn layout_symbol(self) -> char {
        if self.is_mine() { MINE_SYMBOL } else { SAFE_SYMBOL }
    }
    /// Returns `true` if the tile contains a mine, `false` otherwise.
    #[inline]
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
    /// Returns the neighboring mine count, or `None` for mines and for tiles which haven't been counted yet.
    #[inline]
    pub const fn count(self) -> Option<u8> {
        if let Self::Count(n) = self { Some(n) } else { None }
    }
}
impl Default for Tile {
    /// Returns the `Empty` variant.
    #[inline(always)]
    fn default() -> Self {
        Self::Empty
    }
}
impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(feature = "serialization")]
impl Serialize for Tile {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => s.serialize_unit_variant("Tile", 0, "Empty"),
            Self::Mine => s.serialize_unit_variant("Tile", 1, "Mine"),
            Self::Count(n) => s.serialize_newtype_variant("Tile", 2, "Count", n),
        }
    }
}
#[cfg(feature = "serialization")]
impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        const VARIANTS: &[&str] = &["Empty", "Mine", "Count"];
        #[derive(Deserialize)]
        #[serde(field_identifier)]
        enum Variant { Empty, Mine, Count }

        struct TileVisitor;
        impl<'de> Visitor<'de> for TileVisitor {
            type Value = Tile;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("enum Tile")
            }
            fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Tile, A::Error> {
                let (variant, access) = data.variant()?;
                match variant {
                    Variant::Empty => access.unit_variant().map(|()| Tile::Empty),
                    Variant::Mine => access.unit_variant().map(|()| Tile::Mine),
                    Variant::Count => {
                        let n: u8 = access.newtype_variant()?;
                        if n > MAX_NEIGHBORING_MINES {
                            return Err(de::Error::invalid_value(
                                de::Unexpected::Unsigned(u64::from(n)),
                                &"a neighboring mine count in 0..=8",
                            ));
                        }
                        Ok(Tile::Count(n))
                    }
                }
            }
        }
        d.deserialize_enum("Tile", VARIANTS, TileVisitor)
    }
}
