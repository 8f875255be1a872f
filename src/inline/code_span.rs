//! Code span resolution.
//!
//! Code spans have highest precedence among inline elements. A span is a
//! single backtick, at least one non-backtick byte, and the next backtick.
//! Spans do not nest, and nothing inside one is ever formatted.

use smallvec::SmallVec;

use crate::Range;

/// A resolved code span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpan {
    /// Position of the opening backtick.
    pub open: u32,
    /// Position of the closing backtick.
    pub close: u32,
}

impl CodeSpan {
    /// Get the content range (between the backticks).
    #[inline]
    pub fn content_range(&self) -> Range {
        Range::new(self.open + 1, self.close)
    }

    /// Position just past the closing backtick.
    #[inline]
    pub fn end(&self) -> usize {
        self.close as usize + 1
    }
}

/// Pair backtick positions left to right into code spans.
///
/// Two adjacent backticks enclose nothing, so the first of them stays
/// literal and the second may open a span instead.
pub fn pair_backticks(ticks: &[u32]) -> SmallVec<[CodeSpan; 4]> {
    let mut spans = SmallVec::new();
    let mut k = 0;
    while k + 1 < ticks.len() {
        let (open, close) = (ticks[k], ticks[k + 1]);
        if close > open + 1 {
            spans.push(CodeSpan { open, close });
            k += 2;
        } else {
            k += 1;
        }
    }
    spans
}
