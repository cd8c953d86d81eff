//! Source positions for syntax nodes.

use std::fmt;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = u32;

/// A half-open range of source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextRange {
    /// Start offset (inclusive).
    pub pos: TextPos,
    /// End offset (exclusive).
    pub end: TextPos,
}

impl TextRange {
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

    #[inline]
    pub fn len(&self) -> TextPos {
        self.end - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// Whether `other` lies entirely inside this range.
    #[inline]
    pub fn contains_range(&self, other: TextRange) -> bool {
        self.pos <= other.pos && other.end <= self.end
    }

    /// The smallest range covering both `self` and `other`.
    pub fn cover(&self, other: TextRange) -> TextRange {
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
