//! One nesting level of a segment, as a formatting pass sees it.
//!
//! A level is the content of a region with every span already matched
//! there collapsed into a single opaque token. Delimiters are only paired
//! within one level, so a pass can never close a span inside a tag that
//! an earlier pass produced, and every result stays well-formed.

use smallvec::SmallVec;

use super::span::SpanTable;

#[derive(Debug, Clone, Copy)]
struct Token {
    pos: u32,
    /// An earlier match opening at `pos`.
    span: bool,
}

/// The tokens of one region, left to right.
pub struct Level<'a> {
    text: &'a [u8],
    tokens: SmallVec<[Token; 64]>,
}

impl<'a> Level<'a> {
    /// Collect the level of `start..end`.
    pub fn collect(text: &'a [u8], table: &SpanTable, start: usize, end: usize) -> Self {
        let mut tokens = SmallVec::new();
        let mut pos = start;
        while pos < end {
            let span = table.at(pos);
            tokens.push(Token {
                pos: pos as u32,
                span: span.is_some(),
            });
            pos = span.map_or(pos + 1, |s| s.end());
        }
        Self { text, tokens }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Byte position of token `k`.
    #[inline]
    pub fn pos(&self, k: usize) -> usize {
        self.tokens[k].pos as usize
    }

    /// Positions of the earlier matches on this level.
    pub fn span_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.tokens.iter().filter(|t| t.span).map(|t| t.pos as usize)
    }

    /// Whether token `k` is the unmatched byte `b`.
    #[inline]
    pub fn free(&self, k: usize, b: u8) -> bool {
        self.tokens
            .get(k)
            .is_some_and(|t| !t.span && self.text[t.pos as usize] == b)
    }

    /// Whether token `k` is an unmatched byte satisfying `pred`.
    #[inline]
    pub fn free_if(&self, k: usize, pred: impl Fn(u8) -> bool) -> bool {
        self.tokens
            .get(k)
            .is_some_and(|t| !t.span && pred(self.text[t.pos as usize]))
    }

    /// Whether `width` unmatched `b` bytes start at token `k`.
    ///
    /// Unmatched tokens are consecutive bytes, so this is a run in the text.
    #[inline]
    pub fn run(&self, k: usize, b: u8, width: usize) -> bool {
        (k..k + width).all(|i| self.free(i, b))
    }

    /// Whether tokens `from..to` are unmatched bytes.
    #[inline]
    pub fn is_plain(&self, from: usize, to: usize) -> bool {
        self.tokens[from..to].iter().all(|t| !t.span)
    }

    /// Table of the next token satisfying `pred`, so a closer search never
    /// rescans the level.
    pub fn next_table(&self, pred: impl Fn(usize) -> bool) -> NextTable {
        let n = self.len();
        let mut next = vec![n as u32; n];
        for k in (0..n).rev() {
            next[k] = if pred(k) {
                k as u32
            } else if k + 1 < n {
                next[k + 1]
            } else {
                n as u32
            };
        }
        NextTable(next)
    }
}

/// Next-occurrence lookup built by [`Level::next_table`].
pub struct NextTable(Vec<u32>);

impl NextTable {
    /// First matching token at or after `k`.
    #[inline]
    pub fn from(&self, k: usize) -> Option<usize> {
        let next = *self.0.get(k)? as usize;
        (next < self.0.len()).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::span::{InlineSpan, SpanKind};

    #[test]
    fn test_spans_collapse_to_one_token() {
        let text = b"a **b** c";
        let mut table = SpanTable::new(text.len());
        table.insert(InlineSpan::new(SpanKind::Strong, 2, 4, 5, 7));
        let level = Level::collect(text, &table, 0, text.len());
        assert_eq!(level.len(), 5);
        assert_eq!(level.pos(3), 7);
        assert_eq!(level.span_positions().collect::<Vec<_>>(), vec![2]);
        assert!(!level.free(2, b'*'));
        assert!(level.is_plain(0, 2));
        assert!(!level.is_plain(0, 3));
    }

    #[test]
    fn test_runs() {
        let text = b"x***y";
        let table = SpanTable::new(text.len());
        let level = Level::collect(text, &table, 0, text.len());
        assert!(level.run(1, b'*', 3));
        assert!(!level.run(2, b'*', 3));
        assert!(!level.run(4, b'*', 1));
    }

    #[test]
    fn test_next_table() {
        let text = b"a]b]c";
        let table = SpanTable::new(text.len());
        let level = Level::collect(text, &table, 0, text.len());
        let next = level.next_table(|k| level.free(k, b']'));
        assert_eq!(next.from(0), Some(1));
        assert_eq!(next.from(2), Some(3));
        assert_eq!(next.from(4), None);
        assert_eq!(next.from(9), None);
    }
}
