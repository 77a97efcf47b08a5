//! Table construction from delimited text
//!
//! The first line is the header and fixes the field count for the
//! table's lifetime; every following line must tokenize to exactly that
//! many fields or construction fails with [`Error::MalformedRow`].

use std::path::Path;

use crate::error::Error;
use crate::model::{Delimiter, Table};
use crate::scanner::scan_lines;
use crate::tokenizer::Tokenizer;

impl Table {
    /// Parse delimited text into a table.
    ///
    /// Lines are `\n`-terminated; the final line may omit its
    /// terminator, and one trailing blank line is tolerated. Blank
    /// lines anywhere else are malformed rows like any other
    /// field-count mismatch. Empty input fails with
    /// [`Error::MissingHeader`].
    pub fn parse(content: &str, delimiter: Delimiter) -> Result<Table, Error> {
        // One trailing newline is the final line's terminator, not an
        // extra empty row.
        let content = content.strip_suffix('\n').unwrap_or(content);

        let stats = scan_lines(content);
        let delim = delimiter.char();

        let mut lines = content.split_inclusive('\n').enumerate();

        let Some((_, header_line)) = lines.next() else {
            return Err(Error::MissingHeader);
        };

        let columns: Vec<String> = Tokenizer::new(header_line, delim)
            .map(str::to_string)
            .collect();
        let expected = columns.len();

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(stats.line_count.saturating_sub(1));

        for (index, line) in lines {
            let row: Vec<String> = Tokenizer::new(line, delim).map(str::to_string).collect();

            if row.len() != expected {
                return Err(Error::MalformedRow {
                    line: index + 1,
                    expected,
                    found: row.len(),
                });
            }

            rows.push(row);
        }

        tracing::debug!(
            rows = rows.len(),
            fields = expected,
            "parsed table"
        );

        Ok(Table::new(columns, rows, delimiter))
    }

    /// Read a file fully into memory and parse it.
    ///
    /// The delimiter is picked from the file extension (`.tsv` → tab,
    /// `.psv` → pipe, anything else → comma).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Table, Error> {
        let path = path.as_ref();

        let delimiter = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Delimiter::from_extension)
            .unwrap_or_default();

        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), ?delimiter, "loaded file");

        Table::parse(&content, delimiter)
    }
}
