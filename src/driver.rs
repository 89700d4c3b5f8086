//! The stream driver: reads every field of a stream, labels it and writes it out.

use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use crate::{
    Result,
    Field, FieldReader, Limits,
};

/// Processes a whole stream of fields, writing one labeled block per field to `output`.
///
/// Fields are numbered from 1 in input order. Processing stops normally at the `0 0` sentinel or when the input runs out between two records, and the amount of fields written is returned. Any error aborts the entire stream; blocks already written stay written.
///
/// # Errors
/// Every parsing error of the current record is returned as is. A stream with more than `limits.max_fields` records fails with [`Error::TooManyFields`][tmf] as soon as the dimension line of the extra record is read, before anything is allocated for it.
///
/// [tmf]: enum.Error.html#variant.TooManyFields
#[instrument(skip_all, fields(max_fields = limits.max_fields))]
pub fn process<R: BufRead, W: Write>(input: R, mut output: W, limits: &Limits) -> Result<usize> {
    let mut reader = FieldReader::new(input, *limits);
    let mut written = 0_usize;
    while let Some(mut field) = reader.read_field()? {
        written += 1;
        field.compute_counts();
        debug!(
            index = written,
            width = field.width(),
            height = field.height(),
            mines = field.count_mines(),
            "labeled field"
        );
        write_field(&mut output, written, &field)?;
    }
    output.flush()?;
    info!(fields = written, lines = reader.line_number(), "stream processed");
    Ok(written)
}

/// Writes one output block: the `Field #n:` header, the rows of the field and a blank separator line.
pub fn write_field<W: Write>(mut output: W, index: usize, field: &Field) -> Result<()> {
    write!(output, "Field #{}:\n{}\n", index, field)?;
    Ok(())
}

/// Processes an in-memory stream with the default limits and returns the output as a string.
pub fn process_str(input: &str) -> Result<String> {
    let mut output = Vec::new();
    process(input.as_bytes(), &mut output, &Limits::default())?;
    // Only ASCII is ever written.
    Ok(String::from_utf8_lossy(&output).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn blocks_are_numbered_in_order() {
        let output = process_str("1 1\n*\n1 1\n.\n0 0\n").unwrap();
        assert_eq!(output, "Field #1:\n*\n\nField #2:\n0\n\n");
    }

    #[test]
    fn the_ceiling_admits_exactly_max_fields() {
        let input = "1 1\n.\n1 1\n*\n0 0\n";
        let limits = Limits::default().with_max_fields(2);
        let mut output = Vec::new();
        assert_eq!(process(input.as_bytes(), &mut output, &limits).unwrap(), 2);

        let limits = Limits::default().with_max_fields(1);
        let mut output = Vec::new();
        let err = process(input.as_bytes(), &mut output, &limits).unwrap_err();
        assert!(matches!(err, Error::TooManyFields { limit: 1 }));
        assert_eq!(output, b"Field #1:\n0\n\n");
    }

    #[test]
    fn nothing_after_the_sentinel_is_read() {
        let output = process_str("1 1\n.\n0 0\nnot a header\n").unwrap();
        assert_eq!(output, "Field #1:\n0\n\n");
    }

    #[test]
    fn errors_stop_the_stream() {
        let mut output = Vec::new();
        let err = process("1 1\n.\n2 2\n..\n".as_bytes(), &mut output, &Limits::default()).unwrap_err();
        assert!(matches!(err, Error::PrematureEnd { expected: 2, actual: 1 }));
        assert_eq!(output, b"Field #1:\n0\n\n");
    }
}
