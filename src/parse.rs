//! Parsers for the two kinds of input lines: dimension lines and field rows.
//!
//! Both work on a single line with the line terminator already stripped and know nothing about where the line came from. Stitching lines into records is the job of the [`FieldReader`][reader].
//!
//! [reader]: struct.FieldReader.html "FieldReader — reads fields from a line-oriented stream"

use core::num::NonZeroUsize;
use crate::{
    Axis, Error, Result,
    FieldDimensions, Limits, Tile,
};

/// The outcome of reading a dimension line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Header {
    /// A field with the given dimensions follows.
    Field(FieldDimensions),
    /// The `0 0` sentinel, ending the stream.
    Sentinel,
    /// The input ended cleanly before another dimension line. Never produced by [`parse_dimensions`][pd], only by readers.
    ///
    /// [pd]: fn.parse_dimensions.html "parse_dimensions — parses a dimension line"
    Exhausted,
}

/// Parses a dimension line: the number of rows followed by the number of columns, separated by whitespace.
///
/// Anything after the two numbers is ignored. `0 0` yields [`Header::Sentinel`][sentinel]; any other zero, a negative number or a number above the limits is an [`Error::DimensionRange`][range].
///
/// [sentinel]: enum.Header.html#variant.Sentinel
/// [range]: enum.Error.html#variant.DimensionRange
pub fn parse_dimensions(line: &str, limits: &Limits) -> Result<Header> {
    let format_error = || Error::Format { line: preview(line) };
    let mut tokens = line.split_whitespace()
        .map(str::parse::<i64>);
    let rows = tokens.next().and_then(|t| t.ok()).ok_or_else(format_error)?;
    let columns = tokens.next().and_then(|t| t.ok()).ok_or_else(format_error)?;

    if rows == 0 && columns == 0 {
        return Ok(Header::Sentinel);
    }
    let height = check_dimension(Axis::Rows, rows, limits.max_rows)?;
    let width = check_dimension(Axis::Columns, columns, limits.max_columns)?;
    Ok(Header::Field([width, height]))
}

fn check_dimension(axis: Axis, value: i64, max: usize) -> Result<NonZeroUsize> {
    usize::try_from(value).ok()
        .filter(|&v| v <= max)
        .and_then(NonZeroUsize::new)
        .ok_or(Error::DimensionRange { axis, value, max })
}

/// The longest stretch of an offending line kept in an error message, in characters.
pub const LINE_PREVIEW_LENGTH: usize = 120;

/// Copies `line` for an error message, cutting it short after [`LINE_PREVIEW_LENGTH`][lpl] characters.
///
/// [lpl]: constant.LINE_PREVIEW_LENGTH.html
fn preview(line: &str) -> String {
    match line.char_indices().nth(LINE_PREVIEW_LENGTH) {
        Some((end, _)) => format!("{}...", &line[..end]),
        None => line.to_owned(),
    }
}

/// Parses one row of a field into `out`, which must be exactly as long as the field is wide.
///
/// `row` is the 1-based row number used in error messages. The line must have exactly `out.len()` symbols, each of them `.` or `*`; nothing is truncated or padded. The line is raw input: bytes which aren't valid UTF-8 count as one symbol per invalid sequence and are reported as [`Error::InvalidSymbol`][is] with `char::REPLACEMENT_CHARACTER`.
///
/// [is]: enum.Error.html#variant.InvalidSymbol
pub fn parse_row(line: &[u8], row: usize, out: &mut [Tile]) -> Result<()> {
    let line = String::from_utf8_lossy(line);
    let actual = line.chars().count();
    if actual != out.len() {
        return Err(Error::LineLength {
            row,
            line: preview(&line),
            expected: out.len(),
            actual,
        });
    }
    for (column, (symbol, tile)) in line.chars().zip(out.iter_mut()).enumerate() {
        *tile = Tile::from_symbol(symbol).ok_or_else(|| Error::InvalidSymbol {
            row,
            column: column + 1,
            symbol,
            line: preview(&line),
        })?;
    }
    Ok(())
}
