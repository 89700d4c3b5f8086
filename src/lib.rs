//! Labels Minesweeper fields read from a text stream.
//!
//! The input is a sequence of records. Each record is a dimension line with the number of rows and columns, followed by that many rows of `.` (no mine) and `*` (mine). The stream ends with the `0 0` sentinel or simply when the input runs out between two records. For every field, each tile without a mine is replaced by the amount of mines among its up to eight neighbors:
//!
//! ```
//! let output = minefield::process_str("4 4\n..*.\n*...\n....\n.**.\n0 0\n").unwrap();
//! assert_eq!(output, "Field #1:\n12*1\n*211\n2321\n1**1\n\n");
//! ```
//!
//! The pieces can also be used on their own: [`parse_dimensions`][pd] and [`parse_row`][pr] parse single lines, [`FieldReader`][fr] turns a stream into fields, and [`Field::compute_counts`][cc] labels a field.
//!
//! # Feature gates
//! - `serialization` — enable support for serialization (**enabled by default**, disable to speed up compilation)
//!
//!   Enables the dependency on `serde`, which allows one to serialize and deserialize fields, tiles and [`Limits`][limits]. Deserialized fields are checked for a consistent size.
//!
//! [pd]: fn.parse_dimensions.html "parse_dimensions — parses a dimension line"
//! [pr]: fn.parse_row.html "parse_row — parses one row of a field"
//! [fr]: struct.FieldReader.html "FieldReader — reads fields from a line-oriented stream"
//! [cc]: struct.Field.html#method.compute_counts "compute_counts — labels every safe tile with its neighboring mine count"
//! [limits]: struct.Limits.html "Limits — bounds applied to untrusted input"

#![warn(clippy::pedantic, clippy::cargo, clippy::nursery)]

mod driver;
pub use driver::*;
mod error;
pub use error::*;
mod field;
pub use field::*;
pub mod iter;
pub use iter::*;
mod limits;
pub use limits::*;
mod parse;
pub use parse::*;
mod reader;
pub use reader::*;
mod tile;
pub use tile::*;
