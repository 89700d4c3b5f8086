//! End-to-end runs of the stream driver on small hand-written inputs.

use minefield::{process, process_str, Axis, Error, Limits};

fn run(input: &str) -> Result<String, Error> {
    process_str(input)
}

#[test]
fn classic_four_by_four() {
    assert_eq!(
        run("4 4\n..*.\n*...\n....\n.**.\n0 0\n").unwrap(),
        "Field #1:\n12*1\n*211\n2321\n1**1\n\n",
    );
}

#[test]
fn three_by_five() {
    assert_eq!(
        run("3 5\n**...\n.....\n.*...\n0 0\n").unwrap(),
        "Field #1:\n**100\n33200\n1*100\n\n",
    );
}

#[test]
fn two_fields_in_one_stream() {
    assert_eq!(
        run("4 4\n*...\n....\n.*..\n....\n3 5\n**...\n.....\n.*...\n0 0\n").unwrap(),
        "Field #1:\n*100\n2210\n1*10\n1110\n\nField #2:\n**100\n33200\n1*100\n\n",
    );
}

#[test]
fn sentinel_only_stream_is_empty() {
    assert_eq!(run("0 0\n").unwrap(), "");
}

#[test]
fn empty_input_is_not_an_error() {
    assert_eq!(run("").unwrap(), "");
}

#[test]
fn missing_sentinel_after_a_complete_field() {
    assert_eq!(run("1 1\n.\n").unwrap(), "Field #1:\n0\n\n");
    assert_eq!(run("1 1\n*\n").unwrap(), "Field #1:\n*\n\n");
}

#[test]
fn negative_rows() {
    let err = run("-1 4\n..*.\n*...\n....\n.**.\n").unwrap_err();
    assert!(matches!(err, Error::DimensionRange { axis: Axis::Rows, value: -1, .. }), "{err}");
}

#[test]
fn too_many_columns() {
    let err = run("4 101\n..*.\n*...\n....\n.**.\n").unwrap_err();
    assert!(matches!(err, Error::DimensionRange { axis: Axis::Columns, value: 101, max: 100 }), "{err}");
}

#[test]
fn invalid_symbol_in_the_third_row() {
    let err = run("4 4\n..*.\n*...\n.A..\n.**.\n").unwrap_err();
    assert!(matches!(err, Error::InvalidSymbol { row: 3, column: 2, symbol: 'A', .. }), "{err}");
    assert!(err.to_string().contains(".A.."));
}

#[test]
fn overlong_second_row() {
    let err = run("4 4\n..*.\n*............\n....\n.**.\n").unwrap_err();
    assert!(matches!(err, Error::LineLength { row: 2, expected: 4, actual: 13, .. }), "{err}");
}

#[test]
fn garbage_dimension_line() {
    let err = run("four by four\n").unwrap_err();
    assert!(matches!(err, Error::Format { .. }), "{err}");
}

#[test]
fn truncated_field() {
    let err = run("3 3\n...\n").unwrap_err();
    assert!(matches!(err, Error::PrematureEnd { expected: 3, actual: 1 }), "{err}");
}

#[test]
fn output_of_failed_streams_keeps_finished_blocks() {
    let mut output = Vec::new();
    let result = process("1 2\n*.\n1 2\n*x\n".as_bytes(), &mut output, &Limits::default());
    assert!(result.is_err());
    assert_eq!(String::from_utf8(output).unwrap(), "Field #1:\n*1\n\n");
}

#[test]
fn non_utf8_byte_is_a_bad_symbol() {
    let err = process(&b"1 4\n.\xff..\n0 0\n"[..], Vec::new(), &Limits::default()).unwrap_err();
    assert!(
        matches!(err, Error::InvalidSymbol { row: 1, column: 2, symbol: char::REPLACEMENT_CHARACTER, .. }),
        "{err}",
    );
}

#[test]
fn endless_row_is_counted_not_buffered() {
    let mut input = b"1 1\n".to_vec();
    input.resize(input.len() + 5_000_000, b'*');
    let err = process(&input[..], Vec::new(), &Limits::default()).unwrap_err();
    match err {
        Error::LineLength { row, line, expected, actual } => {
            assert_eq!((row, expected, actual), (1, 1, 5_000_000));
            assert!(line.len() < 100, "error kept {} bytes of the line", line.len());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn carriage_return_before_end_of_input() {
    assert_eq!(run("1 3\n.*.\r").unwrap(), "Field #1:\n1*1\n\n");
    assert_eq!(run("1 3\r\n.*.\r\n0 0\r").unwrap(), "Field #1:\n1*1\n\n");
}

#[test]
fn largest_field_is_labeled() {
    // A mine in the top left corner of an otherwise empty 100x100 field.
    let mut input = String::from("100 100\n*");
    input.push_str(&".".repeat(99));
    input.push('\n');
    for _ in 1..100 {
        input.push_str(&".".repeat(100));
        input.push('\n');
    }
    input.push_str("0 0\n");

    let output = run(&input).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1 + 100 + 1);
    assert_eq!(lines[0], "Field #1:");
    assert_eq!(lines[1], format!("*1{}", "0".repeat(98)));
    assert_eq!(lines[2], format!("11{}", "0".repeat(98)));
    assert!(lines[3..101].iter().all(|row| *row == "0".repeat(100)));
    assert_eq!(lines[101], "");
}
