//! Text range, line table and region types for source location tracking.
//!
//! Tokens carry absolute byte offsets. Line and column information is only
//! derived on demand, from the line breaks the scanner has seen so far.

use std::fmt;
use std::ops::Range;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = u32;

/// A text range with start and end positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextRange {
    /// The byte offset where this range starts (inclusive).
    pub pos: TextPos,
    /// The byte offset where this range ends (exclusive).
    pub end: TextPos,
}

impl TextRange {
    /// Create a new text range.
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= pos);
        Self { pos, end }
    }

    /// Create an empty range at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self { pos, end: pos }
    }

    /// The length of this range in bytes.
    #[inline]
    pub fn len(&self) -> TextPos {
        self.end - self.pos
    }

    /// Whether this range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// Convert to a byte range.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.pos as usize..self.end as usize
    }

    /// Whether this range contains a position.
    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.pos && pos < self.end
    }

    /// Return a new range covering both this range and the other.
    pub fn cover(&self, other: &TextRange) -> TextRange {
        TextRange::new(self.pos.min(other.pos), self.end.max(other.end))
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.pos, self.end)
    }
}

/// A 1-based line/column region used for display.
///
/// A region whose start and end coincide is a point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SourceRegion {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl SourceRegion {
    /// A single-position region.
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start_line: line,
            start_column: column,
            end_line: line,
            end_column: column,
        }
    }

    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Whether this region is a single position.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.start_line == self.end_line && self.start_column == self.end_column
    }
}

impl fmt::Display for SourceRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "{}:{}", self.start_line, self.start_column)
        } else {
            write!(
                f,
                "{}:{}-{}:{}",
                self.start_line, self.start_column, self.end_line, self.end_column
            )
        }
    }
}

/// Append-only table of the `'\n'` offsets seen by a single forward pass.
///
/// Unlike a line map built up front, the table only knows about the prefix of
/// the source that has been consumed. Offsets beyond the last recorded break
/// resolve against the last known line.
#[derive(Debug, Clone, Default)]
pub struct LineTable {
    /// Byte offsets of each `'\n'`, strictly increasing.
    breaks: Vec<TextPos>,
}

impl LineTable {
    pub fn new() -> Self {
        Self { breaks: Vec::new() }
    }

    /// Build a complete table from source text.
    pub fn from_text(text: &str) -> Self {
        let breaks = memchr::memchr_iter(b'\n', text.as_bytes())
            .map(|i| i as TextPos)
            .collect();
        Self { breaks }
    }

    /// Record a line break at `offset`.
    ///
    /// Offsets must arrive in increasing order; a repeated offset is ignored.
    pub fn push(&mut self, offset: TextPos) {
        match self.breaks.last() {
            Some(&last) if last >= offset => {
                debug_assert_eq!(last, offset, "line breaks must be recorded in order");
            }
            _ => self.breaks.push(offset),
        }
    }

    /// Number of line breaks recorded so far.
    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    /// All recorded break offsets.
    pub fn breaks(&self) -> &[TextPos] {
        &self.breaks
    }

    /// 0-based line index and byte offset of the line start for `offset`.
    ///
    /// A `'\n'` belongs to the line it terminates.
    fn locate(&self, offset: TextPos) -> (u32, TextPos) {
        let line = self.breaks.partition_point(|&b| b < offset);
        let line_start = if line == 0 { 0 } else { self.breaks[line - 1] + 1 };
        (line as u32, line_start)
    }

    /// 1-based line and column of a single offset.
    pub fn line_and_column(&self, offset: TextPos) -> (u32, u32) {
        let (line, line_start) = self.locate(offset);
        (line + 1, offset - line_start + 1)
    }

    /// Resolve a `[start, end)` span into a display region.
    ///
    /// The end of the region is the last character of the span, so a
    /// one-character token starts and ends on the same column. An empty span
    /// resolves to a point.
    pub fn region(&self, start: TextPos, end: TextPos) -> SourceRegion {
        let (start_line, start_column) = self.line_and_column(start);
        if end <= start {
            return SourceRegion::point(start_line, start_column);
        }
        let (end_line, end_column) = self.line_and_column(end - 1);
        SourceRegion::new(start_line, start_column, end_line, end_column)
    }

    /// Resolve a [`TextRange`] into a display region.
    pub fn region_of(&self, range: TextRange) -> SourceRegion {
        self.region(range.pos, range.end)
    }
}
