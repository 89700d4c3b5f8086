//! The error type shared by parsing, reading and the stream driver.

use std::{
    error,
    fmt::{self, Display, Formatter},
    io,
};

/// Shorthand for results carrying the crate's [`Error`][err].
///
/// [err]: enum.Error.html "Error — everything that can go wrong while processing a stream"
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// One of the two field dimensions, used to report which bound was violated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The height of the field, i.e. the first number of a dimension line.
    Rows,
    /// The width of the field, i.e. the second number of a dimension line.
    Columns,
}
impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rows => "rows",
            Self::Columns => "columns",
        })
    }
}

/// Everything that can go wrong while processing a stream of fields.
///
/// Every error aborts the whole stream. The end of the stream, whether it's the `0 0` sentinel or the input simply running out between records, is not an error and is reported through [`Header`][header] instead.
///
/// Row and column numbers are 1-based, counted from the start of the field they belong to.
///
/// [header]: enum.Header.html "Header — the outcome of reading a dimension line"
#[derive(Debug)]
pub enum Error {
    /// The dimension line does not start with two integers.
    Format {
        /// The offending line.
        line: String,
    },
    /// A dimension is negative, zero or above the configured limit.
    DimensionRange {
        /// The dimension which is out of range.
        axis: Axis,
        /// The value found in the input.
        value: i64,
        /// The largest allowed value.
        max: usize,
    },
    /// Content was requested before a dimension line was read.
    DimensionsUndefined,
    /// A content line is shorter or longer than the field is wide.
    LineLength {
        /// The row of the field the line was meant to be.
        row: usize,
        /// The offending line, cut short if it is very long.
        line: String,
        /// The width of the field.
        expected: usize,
        /// The amount of symbols in the line, including any part which was skipped unread.
        actual: usize,
    },
    /// A content line contains something other than `.` and `*`.
    InvalidSymbol {
        /// The row of the field the line was meant to be.
        row: usize,
        /// The position of the symbol within the line.
        column: usize,
        /// The symbol itself; bytes which aren't valid UTF-8 show up as `char::REPLACEMENT_CHARACTER`.
        symbol: char,
        /// The offending line, cut short if it is very long.
        line: String,
    },
    /// The input ended in the middle of a field.
    PrematureEnd {
        /// The amount of rows the dimension line promised.
        expected: usize,
        /// The amount of rows actually present.
        actual: usize,
    },
    /// The stream holds more fields than the configured ceiling allows.
    TooManyFields {
        /// The configured ceiling.
        limit: usize,
    },
    /// Reading the input or writing the output failed.
    Io(io::Error),
}
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format { line } => write!(
                f, "bad field dimensions '{}': expected two integers separated by a space", line,
            ),
            Self::DimensionRange { axis, value, max } => write!(
                f, "wrong field dimensions: {} is {}, allowed 0 < {} <= {}", axis, value, axis, max,
            ),
            Self::DimensionsUndefined => f.write_str("field dimensions must be defined first"),
            Self::LineLength { row, line, expected, actual } => write!(
                f, "bad field line {} '{}': {} symbols long, must be exactly {}", row, line, actual, expected,
            ),
            Self::InvalidSymbol { row, column, symbol, line } => write!(
                f, "bad symbol {:?} in field line {} '{}' at column {}: only '.' and '*' are allowed",
                symbol, row, line, column,
            ),
            Self::PrematureEnd { expected, actual } => write!(
                f, "unexpected end of input: field has {} of {} rows", actual, expected,
            ),
            Self::TooManyFields { limit } => write!(
                f, "too many fields: at most {} can be processed", limit,
            ),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
impl From<io::Error> for Error {
    #[inline]
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
