//! Table data model
//!
//! Owns the parsed header and the row/field matrix, and implements the
//! operations with real invariants:
//! - every row holds exactly `num_fields()` values
//! - column lookup is first-match-wins over the header, in order
//! - row removal shifts later rows down, preserving order

use crate::error::Error;

/// Supported field delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// In-memory table parsed from delimited text.
///
/// Construct with [`Table::parse`] or [`Table::from_path`]. The table
/// owns every header name and field value; dropping it releases
/// everything. The field count is fixed by the header at construction
/// and never changes; the row count only shrinks (via
/// [`Table::remove_row`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    delimiter: Delimiter,
}

impl Table {
    /// Invariant: every row in `rows` has `columns.len()` values.
    /// The parser is the only caller and checks this per line.
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<String>>, delimiter: Delimiter) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self {
            columns,
            rows,
            delimiter,
        }
    }

    /// Number of columns, fixed by the header line.
    pub fn num_fields(&self) -> usize {
        self.columns.len()
    }

    /// Current number of data rows (the header is not a row).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header names, in column order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// One row's values, or `None` past the end.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Delimiter this table was parsed with (and will serialize with).
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Resolve a column name to its index.
    ///
    /// Linear scan, byte-exact comparison, first match wins (duplicate
    /// header names resolve to the leftmost occurrence).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Look up one field by row index and column name.
    pub fn field(&self, row: usize, column_name: &str) -> Result<&str, Error> {
        let col = self
            .column_index(column_name)
            .ok_or_else(|| Error::ColumnNotFound(column_name.to_string()))?;

        let row = self.rows.get(row).ok_or(Error::RowOutOfRange {
            index: row,
            rows: self.rows.len(),
        })?;

        Ok(&row[col])
    }

    /// Find the first row whose `column_name` value equals `value`.
    ///
    /// `Ok(None)` means no row matched; an unknown column is an error,
    /// not a miss.
    pub fn search_row(&self, value: &str, column_name: &str) -> Result<Option<usize>, Error> {
        let col = self
            .column_index(column_name)
            .ok_or_else(|| Error::ColumnNotFound(column_name.to_string()))?;

        Ok(self.rows.iter().position(|row| row[col] == value))
    }

    /// Remove one row, shifting every later row down by one.
    ///
    /// Relative order of the remaining rows is preserved. O(num_rows)
    /// per removal; fine for batch editing of modest tables.
    pub fn remove_row(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.rows.len() {
            return Err(Error::RowOutOfRange {
                index,
                rows: self.rows.len(),
            });
        }

        self.rows.remove(index);
        tracing::trace!(index, remaining = self.rows.len(), "removed row");
        Ok(())
    }
}
