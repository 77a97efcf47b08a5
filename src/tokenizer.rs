//! Line tokenization
//!
//! Splits a single line into delimiter-separated tokens without
//! allocating: every token borrows from the input line. The cursor is
//! explicit (an `Iterator`), so tokenizing two lines at once is fine.

/// Borrowing token iterator over one line.
///
/// A delimiter ends the current token and is consumed. A `\n` also ends
/// the current token, but additionally exhausts the iterator, so a line
/// with a trailing newline yields the same tokens as one without — no
/// spurious empty trailing field. A `\r` sitting directly before the
/// end of a token's line is stripped from that token.
///
/// ```
/// use csvgrid::Tokenizer;
///
/// let tokens: Vec<&str> = Tokenizer::new("a,b,c\n", ',').collect();
/// assert_eq!(tokens, vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    rest: &'a str,
    delimiter: char,
    exhausted: bool,
}

impl<'a> Tokenizer<'a> {
    /// Start scanning `line` with the given field delimiter.
    pub fn new(line: &'a str, delimiter: char) -> Self {
        Self {
            rest: line,
            delimiter,
            exhausted: false,
        }
    }
}

/// Strip a carriage return left over from a `\r\n` line ending.
fn trim_cr(token: &str) -> &str {
    token.strip_suffix('\r').unwrap_or(token)
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.exhausted {
            return None;
        }

        let boundary = self
            .rest
            .char_indices()
            .find(|&(_, c)| c == self.delimiter || c == '\n');

        match boundary {
            // Field delimiter: emit the token, keep scanning past it.
            Some((i, c)) if c == self.delimiter => {
                let token = &self.rest[..i];
                self.rest = &self.rest[i + c.len_utf8()..];
                Some(token)
            }
            // Newline terminates the whole line.
            Some((i, _)) => {
                self.exhausted = true;
                Some(trim_cr(&self.rest[..i]))
            }
            // No boundary left: final token runs to the end of the buffer.
            None => {
                self.exhausted = true;
                Some(trim_cr(self.rest))
            }
        }
    }
}
