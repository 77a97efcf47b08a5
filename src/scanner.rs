//! Line pre-scan
//!
//! One cheap pass over the source to learn how many lines it has and how
//! wide the widest one is, so the parser and serializer can size their
//! allocations up front.

/// Result of pre-scanning a source buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    /// Number of lines the parser will see. A final line without a
    /// trailing `\n` still counts.
    pub line_count: usize,
    /// Byte length of the longest line, excluding the line break.
    pub max_line_len: usize,
}

/// Count lines and the longest line width in one pass.
pub fn scan_lines(content: &str) -> LineStats {
    let mut stats = LineStats::default();

    for line in content.lines() {
        stats.line_count += 1;
        stats.max_line_len = stats.max_line_len.max(line.len());
    }

    stats
}
