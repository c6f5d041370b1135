//! Position and location tracking for GIB source text
//!
//! The lexer produces tokens paired with byte-offset ranges into the source.
//! Before an error is surfaced, byte ranges are converted to line/column
//! positions using [`SourceLocation`], which pre-computes line start offsets
//! once and answers queries with an O(log n) binary search.
//!
//! Internally positions are 0-based. Errors reported to callers carry a
//! [`Marker`] in the 1-based convention users expect from editors: 1-based
//! line, 1-based start column, end column = start column + token length.

use std::fmt;
use std::ops::Range;

/// A position in source text (0-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span in source text (start and end positions, 0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    /// Create a new SourceLocation from source text
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let column = byte_offset - self.line_starts[line];

        Position::new(line, column)
    }

    /// Convert a byte range to a location
    pub fn range_to_location(&self, range: &Range<usize>) -> Location {
        Location::new(
            self.byte_to_position(range.start),
            self.byte_to_position(range.end),
        )
    }

    /// Convert a byte range directly to a user-facing marker
    pub fn range_to_marker(&self, range: &Range<usize>) -> Marker {
        Marker::from_location(self.range_to_location(range))
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/// The source span attached to every parse failure, in the 1-based
/// line/column convention of the original file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Marker {
    pub fn new(start_line: usize, start_column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Convert an internal 0-based location into a 1-based marker
    pub fn from_location(location: Location) -> Self {
        Self {
            start_line: location.start.line + 1,
            start_column: location.start.column + 1,
            end_line: location.end.line + 1,
            end_column: location.end.column + 1,
        }
    }

    /// Marker for failures that have no meaningful span (e.g. I/O errors)
    pub fn start_of_file() -> Self {
        Self::new(1, 1, 1, 1)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_line == self.end_line {
            write!(
                f,
                "{}:{}-{}",
                self.start_line, self.start_column, self.end_column
            )
        } else {
            write!(
                f,
                "{}:{}-{}:{}",
                self.start_line, self.start_column, self.end_line, self.end_column
            )
        }
    }
}
