//! csvgrid - in-memory CSV tables
//!
//! Loads a delimited text file into a random-access table and supports:
//! - Field lookup by row index and column name
//! - Row search by value
//! - Order-preserving row removal
//! - Byte-exact serialization back to delimited text
//!
//! The dialect is deliberately plain: `\n`-separated lines, a single
//! delimiter character, no quoting or escaping. The first line is the
//! header and fixes the field count; every data row must match it or
//! parsing fails.
//!
//! ```
//! use csvgrid::{Delimiter, Table};
//!
//! let table = Table::parse("name,age\nAlice,30\nBob,25\n", Delimiter::Comma)?;
//! assert_eq!(table.field(0, "age")?, "30");
//! assert_eq!(table.search_row("Bob", "name")?, Some(1));
//! assert_eq!(table.render(), "name,age\nAlice,30\nBob,25");
//! # Ok::<(), csvgrid::Error>(())
//! ```

mod error;
mod model;
mod parser;
mod render;
mod scanner;
mod tokenizer;

pub use error::Error;
pub use model::{Delimiter, Table};
pub use scanner::{scan_lines, LineStats};
pub use tokenizer::Tokenizer;
