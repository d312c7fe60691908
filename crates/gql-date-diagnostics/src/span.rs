//! Byte spans and locations inside a coerced input string

use serde::{Deserialize, Serialize};
use std::fmt;

/// A span in the input text, represented as a byte range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a zero-width span at a position
    #[inline]
    pub const fn point(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Location of a failure inside the input text
///
/// Coerced values are single tokens, so only a column is tracked. The
/// column counts characters, not bytes, and is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Column number (1-based)
    pub column: usize,
    /// Byte offset from start (0-based)
    pub offset: usize,
    /// Length in bytes
    pub length: usize,
}

impl SourceLocation {
    pub const fn new(column: usize, offset: usize, length: usize) -> Self {
        Self {
            column,
            offset,
            length,
        }
    }

    /// Create from a span and the input it points into
    pub fn from_span(span: Span, source: &str) -> Self {
        Self {
            column: offset_to_column(source, span.start),
            offset: span.start,
            length: span.len(),
        }
    }

    pub const fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.length)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}", self.column)
    }
}

/// Convert a byte offset to a 1-based character column
pub fn offset_to_column(source: &str, offset: usize) -> usize {
    source
        .char_indices()
        .take_while(|(i, _)| *i < offset)
        .count()
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_column() {
        assert_eq!(offset_to_column("2015-13-01", 0), 1);
        assert_eq!(offset_to_column("2015-13-01", 5), 6);
        // multi-byte characters count once
        assert_eq!(offset_to_column("é2015", 2), 2);
        assert_eq!(offset_to_column("abc", 10), 4);
    }

    #[test]
    fn test_location_from_span() {
        let loc = SourceLocation::from_span(Span::new(4, 5), "2015x12-01");
        assert_eq!(loc, SourceLocation::new(5, 4, 1));
        assert_eq!(loc.span(), Span::new(4, 5));
        assert_eq!(loc.to_string(), "column 5");
    }
}
