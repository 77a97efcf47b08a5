//! Serialization back to delimited text
//!
//! Reproduces the input dialect byte-exactly: names and values joined
//! by the table's delimiter, lines separated by `\n`, no trailing
//! newline after the last row. There is no quoting or escaping — a
//! value containing the delimiter or a newline will not round-trip,
//! which is an accepted limitation of the dialect, not something the
//! serializer papers over.

use std::fmt;
use std::path::Path;

use crate::error::Error;
use crate::model::Table;

impl Table {
    /// Total output size: every name and value plus one separator
    /// (delimiter or newline) each, minus the absent final newline.
    fn rendered_len(&self) -> usize {
        let header: usize = self.columns().iter().map(|c| c.len() + 1).sum();
        let body: usize = (0..self.num_rows())
            .filter_map(|i| self.row(i))
            .flat_map(|row| row.iter())
            .map(|v| v.len() + 1)
            .sum();

        (header + body).saturating_sub(1)
    }

    /// Render the table to a single string.
    pub fn render(&self) -> String {
        let delim = self.delimiter().char();
        let mut out = String::with_capacity(self.rendered_len());

        for (i, name) in self.columns().iter().enumerate() {
            if i > 0 {
                out.push(delim);
            }
            out.push_str(name);
        }

        for i in 0..self.num_rows() {
            out.push('\n');
            // row index is in range by construction
            let row = self.row(i).unwrap_or_default();
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    out.push(delim);
                }
                out.push_str(value);
            }
        }

        out
    }

    /// Render and write the full text to `path`.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        std::fs::write(path, self.render())?;
        tracing::debug!(path = %path.display(), rows = self.num_rows(), "wrote table");
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
