//! Bounds applied to untrusted input.

#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};

/// The largest field height accepted by default.
pub const DEFAULT_MAX_ROWS: usize = 100;
/// The largest field width accepted by default.
pub const DEFAULT_MAX_COLUMNS: usize = 100;
/// The default ceiling on the number of fields in one stream.
#[allow(clippy::cast_sign_loss)]
pub const DEFAULT_MAX_FIELDS: usize = i32::MAX as usize;

/// Limits which keep a malformed or endless stream from running away.
///
/// The defaults accept fields of up to 100×100 tiles and up to 2³¹−1 fields per stream. Embedders which read their configuration from a file can deserialize this struct directly when the `serialization` feature is enabled; missing keys take their default values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct Limits {
    /// The largest allowed amount of rows in a field.
    pub max_rows: usize,
    /// The largest allowed amount of columns in a field.
    pub max_columns: usize,
    /// The largest amount of fields processed before giving up with [`Error::TooManyFields`][tmf].
    ///
    /// [tmf]: enum.Error.html#variant.TooManyFields
    pub max_fields: usize,
}
impl Limits {
    /// Replaces the row limit.
    #[inline]
    #[must_use]
    pub const fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }
    /// Replaces the column limit.
    #[inline]
    #[must_use]
    pub const fn with_max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns;
        self
    }
    /// Replaces the field ceiling.
    #[inline]
    #[must_use]
    pub const fn with_max_fields(mut self, max_fields: usize) -> Self {
        self.max_fields = max_fields;
        self
    }
}
impl Default for Limits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_columns: DEFAULT_MAX_COLUMNS,
            max_fields: DEFAULT_MAX_FIELDS,
        }
    }
}

#[cfg(all(test, feature = "serialization"))]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let limits: Limits = serde_json::from_str(r#"{"max_fields": 3}"#).unwrap();
        assert_eq!(limits, Limits::default().with_max_fields(3));
    }
}
