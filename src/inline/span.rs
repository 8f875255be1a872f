//! Matched inline spans and the per-segment span table.

use crate::Range;

/// What a matched span renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// `` `code` ``, content written verbatim.
    Code,
    /// `***text***`
    StrongEmphasis,
    /// `**text**`
    Strong,
    /// `*text*`
    Emphasis,
    /// `[label](url)`; the label is the inner range.
    Link {
        /// URL destination.
        url: Range,
    },
    /// `[^label]`
    FootnoteRef,
    /// `~~text~~`
    Strikethrough,
    /// `==text==`
    Highlight,
}

/// A span matched in a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineSpan {
    pub kind: SpanKind,
    /// Opening delimiter through closing delimiter.
    pub outer: Range,
    /// Content between the delimiters.
    pub inner: Range,
}

impl InlineSpan {
    #[inline]
    pub fn new(kind: SpanKind, start: usize, inner_start: usize, inner_end: usize, end: usize) -> Self {
        Self {
            kind,
            outer: Range::from_usize(start, end),
            inner: Range::from_usize(inner_start, inner_end),
        }
    }

    /// Position of the opening delimiter.
    #[inline]
    pub fn start(&self) -> usize {
        self.outer.start_usize()
    }

    /// Position just past the closing delimiter.
    #[inline]
    pub fn end(&self) -> usize {
        self.outer.end_usize()
    }

    /// Whether later passes look inside the content.
    #[inline]
    pub fn is_container(&self) -> bool {
        !matches!(self.kind, SpanKind::Code | SpanKind::FootnoteRef)
    }
}

/// Every span matched so far in one segment, looked up by opening position.
///
/// Spans never overlap: two spans are either disjoint or one lies inside
/// the other's content.
#[derive(Debug)]
pub struct SpanTable {
    spans: Vec<InlineSpan>,
    /// Index into `spans` plus one, per byte; zero where no span opens.
    opening: Vec<u32>,
}

impl SpanTable {
    pub fn new(len: usize) -> Self {
        Self {
            spans: Vec::new(),
            opening: vec![0; len],
        }
    }

    /// Record a span. Its opening byte must not open another span.
    pub fn insert(&mut self, span: InlineSpan) {
        debug_assert_eq!(self.opening[span.start()], 0);
        self.spans.push(span);
        self.opening[span.start()] = self.spans.len() as u32;
    }

    /// The span opening at `pos`, if any.
    #[inline]
    pub fn at(&self, pos: usize) -> Option<InlineSpan> {
        match self.opening.get(pos).copied().unwrap_or(0) {
            0 => None,
            slot => Some(self.spans[slot as usize - 1]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_size() {
        assert!(std::mem::size_of::<InlineSpan>() <= 32);
    }

    #[test]
    fn test_container_kinds() {
        assert!(!InlineSpan::new(SpanKind::Code, 0, 1, 2, 3).is_container());
        assert!(!InlineSpan::new(SpanKind::FootnoteRef, 0, 2, 3, 4).is_container());
        assert!(InlineSpan::new(SpanKind::Strong, 0, 2, 3, 5).is_container());
        let link = InlineSpan::new(SpanKind::Link { url: Range::new(4, 5) }, 0, 1, 2, 6);
        assert!(link.is_container());
    }

    #[test]
    fn test_table_lookup() {
        let mut table = SpanTable::new(10);
        assert!(table.is_empty());
        table.insert(InlineSpan::new(SpanKind::Strong, 2, 4, 5, 7));
        assert_eq!(table.at(2).map(|s| s.end()), Some(7));
        assert_eq!(table.at(3), None);
        assert_eq!(table.at(42), None);
        assert!(!table.is_empty());
    }
}
