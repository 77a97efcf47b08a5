//! Error types for table construction, lookup, and I/O.

use std::fmt;

/// Error type for every fallible table operation.
///
/// Lookup failures are explicit: an unknown column name or an
/// out-of-range row index is reported, never papered over with an
/// empty-string default.
#[derive(Debug)]
pub enum Error {
    /// File open, read, or write failure.
    Io(std::io::Error),
    /// Input had no lines, so there is no header to parse.
    MissingHeader,
    /// A data row's field count does not match the header's.
    MalformedRow {
        /// 1-based line number in the source text.
        line: usize,
        /// Field count declared by the header.
        expected: usize,
        /// Field count found on this line.
        found: usize,
    },
    /// Lookup by a column name the header does not declare.
    ColumnNotFound(String),
    /// Row index at or past the current row count.
    RowOutOfRange {
        index: usize,
        rows: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::MissingHeader => write!(f, "empty input: no header line"),
            Error::MalformedRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "malformed row at line {}: expected {} fields, found {}",
                line, expected, found
            ),
            Error::ColumnNotFound(name) => write!(f, "no column named {:?}", name),
            Error::RowOutOfRange { index, rows } => {
                write!(f, "row index {} out of range (table has {} rows)", index, rows)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_malformed_row() {
        let err = Error::MalformedRow {
            line: 3,
            expected: 4,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "malformed row at line 3: expected 4 fields, found 2"
        );
    }

    #[test]
    fn test_display_column_not_found() {
        let err = Error::ColumnNotFound("age".to_string());
        assert_eq!(err.to_string(), "no column named \"age\"");
    }

    #[test]
    fn test_display_row_out_of_range() {
        let err = Error::RowOutOfRange { index: 9, rows: 2 };
        assert_eq!(err.to_string(), "row index 9 out of range (table has 2 rows)");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io);
        assert!(err.source().is_some());
    }
}
