//! Reading fields record by record from a line-oriented stream.

use std::io::{BufRead, Read};
use tracing::trace;
use crate::{
    Error, Result,
    Field, Header, Limits,
    parse_dimensions, parse_row,
};

/// The most bytes of a dimension line which are looked at. The rest of a longer line is skipped.
pub const HEADER_LINE_CAPACITY: usize = 64;
/// Room for a `\r\n` terminator on top of the width of a field row.
const LINE_TERMINATOR_ALLOWANCE: usize = 2;

/// Reads fields from a line-oriented stream, one record at a time.
///
/// A record is a dimension line followed by as many rows as the dimension line promises. [`read_header`][m_rh] parses the dimension line and allocates the pending field, then [`read_content`][m_rc] fills it in. The reader never holds more than one field, and never buffers more of a line than the field can use: the excess of an overlong row is counted and skipped, not stored.
///
/// Lines may end with `\n`, `\r\n`, or nothing at all at the end of the input. A `\r` right before the end of the input is dropped as well.
///
/// [m_rh]: #method.read_header "read_header — reads a dimension line and allocates the field it announces"
/// [m_rc]: #method.read_content "read_content — reads the rows of the pending field"
pub struct FieldReader<R> {
    input: R,
    limits: Limits,
    buffer: Vec<u8>,
    line_number: usize,
    fields: usize,
    pending: Option<Field>,
}
impl<R: BufRead> FieldReader<R> {
    /// Creates a reader over `input` which enforces the given limits.
    pub fn new(input: R, limits: Limits) -> Self {
        Self {
            input,
            limits,
            buffer: Vec::new(),
            line_number: 0,
            fields: 0,
            pending: None,
        }
    }
    /// Returns the number of lines consumed so far.
    #[inline(always)]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }
    /// Returns the number of fields announced so far.
    #[inline(always)]
    pub const fn fields(&self) -> usize {
        self.fields
    }
    /// Returns the limits this reader enforces.
    #[inline(always)]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Reads at most `capacity` bytes of the next line into the internal buffer, stripping the terminator.
    ///
    /// Returns `None` at the end of the input, otherwise the amount of bytes of the line which didn't fit and were skipped.
    fn next_line(&mut self, capacity: usize) -> Result<Option<usize>> {
        self.buffer.clear();
        let limit = u64::try_from(capacity).unwrap_or(u64::MAX);
        let read = (&mut self.input).take(limit).read_until(b'\n', &mut self.buffer)?;
        if read == 0 {
            return Ok(None);
        }
        let overflow = if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            0
        } else if read == capacity {
            self.skip_rest_of_line()?
        } else {0}; // The input ended without a terminator.
        if overflow == 0 && self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }
        self.line_number += 1;
        Ok(Some(overflow))
    }

    /// Consumes the input up to and including the next `\n` without storing it, returning the amount of bytes before the terminator.
    fn skip_rest_of_line(&mut self) -> Result<usize> {
        let mut skipped = 0_usize;
        let mut last = None;
        loop {
            let available = self.input.fill_buf()?;
            if available.is_empty() {
                return Ok(skipped);
            }
            if let Some(end) = available.iter().position(|&b| b == b'\n') {
                let before = if end > 0 { available.get(end - 1).copied() } else { last };
                // The terminator may be `\r\n`.
                let content = skipped + end - usize::from(before == Some(b'\r'));
                self.input.consume(end + 1);
                return Ok(content);
            }
            let len = available.len();
            last = available.last().copied();
            skipped += len;
            self.input.consume(len);
        }
    }

    /// Reads a dimension line.
    ///
    /// For [`Header::Field`][hf], an empty field of the announced size becomes pending and has to be filled by [`read_content`][m_rc]. Running out of input here is not an error and yields [`Header::Exhausted`][he].
    ///
    /// # Errors
    /// Besides the errors of [`parse_dimensions`][pd], fails with [`Error::TooManyFields`][tmf] if the line announces a field beyond `limits.max_fields`. Nothing is allocated for that field.
    ///
    /// [hf]: enum.Header.html#variant.Field
    /// [he]: enum.Header.html#variant.Exhausted
    /// [m_rc]: #method.read_content "read_content — reads the rows of the pending field"
    /// [pd]: fn.parse_dimensions.html "parse_dimensions — parses a dimension line"
    /// [tmf]: enum.Error.html#variant.TooManyFields
    pub fn read_header(&mut self) -> Result<Header> {
        self.pending = None;
        if self.next_line(HEADER_LINE_CAPACITY)?.is_none() {
            return Ok(Header::Exhausted);
        }
        let header = parse_dimensions(&String::from_utf8_lossy(&self.buffer), &self.limits)?;
        trace!(line = self.line_number, ?header, "read dimension line");
        if let Header::Field(dimensions) = header {
            if self.fields == self.limits.max_fields {
                return Err(Error::TooManyFields { limit: self.limits.max_fields });
            }
            self.fields += 1;
            self.pending = Some(Field::empty(dimensions));
        }
        Ok(header)
    }

    /// Reads the rows of the pending field and hands it over.
    ///
    /// # Errors
    /// Fails with [`Error::DimensionsUndefined`][du] if no dimension line announced a field, with [`Error::PrematureEnd`][pe] if the input ends before the last row, and with the row errors of [`parse_row`][pr] otherwise. The length reported for an overlong row includes the skipped part.
    ///
    /// [du]: enum.Error.html#variant.DimensionsUndefined
    /// [pe]: enum.Error.html#variant.PrematureEnd
    /// [pr]: fn.parse_row.html "parse_row — parses one row of a field"
    pub fn read_content(&mut self) -> Result<Field> {
        let mut field = self.pending.take().ok_or(Error::DimensionsUndefined)?;
        let (width, height) = (field.width(), field.height());
        for y in 0..height {
            let Some(overflow) = self.next_line(width + LINE_TERMINATOR_ALLOWANCE)? else {
                return Err(Error::PrematureEnd { expected: height, actual: y });
            };
            let start = y * width;
            let row = &mut field.storage_mut()[start..start + width];
            parse_row(&self.buffer, y + 1, row).map_err(|e| match e {
                Error::LineLength { row, line, expected, actual } => {
                    Error::LineLength { row, line, expected, actual: actual + overflow }
                }
                other => other,
            })?;
        }
        Ok(field)
    }

    /// Reads a whole record, returning `None` at the sentinel or at the end of the input.
    pub fn read_field(&mut self) -> Result<Option<Field>> {
        match self.read_header()? {
            Header::Field(_) => self.read_content().map(Some),
            Header::Sentinel | Header::Exhausted => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(input: &str) -> FieldReader<&[u8]> {
        FieldReader::new(input.as_bytes(), Limits::default())
    }

    #[test]
    fn content_needs_a_header_first() {
        let mut r = reader("..\n");
        assert!(matches!(r.read_content(), Err(Error::DimensionsUndefined)));
    }

    #[test]
    fn content_is_consumed_once() {
        let mut r = reader("1 2\n*.\n");
        assert!(matches!(r.read_header().unwrap(), Header::Field(_)));
        let field = r.read_content().unwrap();
        assert_eq!(field.layout(), "*.\n");
        assert!(matches!(r.read_content(), Err(Error::DimensionsUndefined)));
        assert_eq!(r.read_header().unwrap(), Header::Exhausted);
        assert_eq!(r.line_number(), 2);
    }

    #[test]
    fn three_ways_to_stop() {
        assert_eq!(reader("").read_header().unwrap(), Header::Exhausted);
        assert_eq!(reader("0 0\n").read_header().unwrap(), Header::Sentinel);

        let mut r = reader("3 2\n..\n*.");
        r.read_header().unwrap();
        assert!(matches!(r.read_content(), Err(Error::PrematureEnd { expected: 3, actual: 2 })));
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let mut r = reader("2 2\r\n.*\r\n..\r\n0 0\r\n");
        let field = r.read_field().unwrap().unwrap();
        assert_eq!(field.layout(), ".*\n..\n");
        assert!(r.read_field().unwrap().is_none());
    }

    #[test]
    fn last_row_may_lack_a_newline() {
        let mut r = reader("1 3\n.*.");
        assert_eq!(r.read_field().unwrap().unwrap().layout(), ".*.\n");
    }

    #[test]
    fn lone_carriage_return_at_the_end() {
        let mut r = reader("1 3\n.*.\r");
        assert_eq!(r.read_field().unwrap().unwrap().layout(), ".*.\n");
        assert_eq!(r.read_header().unwrap(), Header::Exhausted);
    }

    #[test]
    fn overlong_rows_are_skipped_not_stored() {
        let mut input = b"1 1\n".to_vec();
        input.extend(std::iter::repeat(b'.').take(1_000_000));
        input.extend_from_slice(b"\r\n0 0\n");
        let mut r = FieldReader::new(&input[..], Limits::default());
        r.read_header().unwrap();
        match r.read_content().unwrap_err() {
            Error::LineLength { row, line, expected, actual } => {
                assert_eq!((row, expected, actual), (1, 1, 1_000_000));
                assert!(line.len() <= 1 + LINE_TERMINATOR_ALLOWANCE, "{line:?}");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(r.buffer.capacity() < 1_000, "the row must not be buffered");
        assert_eq!(r.read_header().unwrap(), Header::Sentinel);
    }

    #[test]
    fn long_dimension_lines_ignore_the_tail() {
        let input = format!("2 1 {}\n.\n*\n", "x".repeat(10_000));
        let mut r = reader(&input);
        assert_eq!(r.read_field().unwrap().unwrap().layout(), ".\n*\n");
    }

    #[test]
    fn the_ceiling_is_checked_before_allocating() {
        let mut r = FieldReader::new(&b"1 1\n.\n1 1\n*\n"[..], Limits::default().with_max_fields(1));
        assert!(r.read_field().unwrap().is_some());
        assert!(matches!(r.read_header(), Err(Error::TooManyFields { limit: 1 })));
        assert_eq!(r.fields(), 1);
        assert!(r.pending.is_none());
        assert!(matches!(r.read_content(), Err(Error::DimensionsUndefined)));
    }

    #[test]
    fn non_utf8_rows_are_bad_symbols() {
        let mut r = FieldReader::new(&b"1 4\n.\xff..\n0 0\n"[..], Limits::default());
        let err = r.read_field().unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol { row: 1, column: 2, .. }), "{err}");
    }
}
