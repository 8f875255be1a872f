//! Link and footnote-reference matching.
//!
//! Footnote references are `[^word]` and are matched before links, so
//! `[^1](x)` is a reference followed by text. Links are `[label](url)`
//! with a non-empty label free of `]` and a non-empty URL free of `)`.
//! A URL is taken verbatim and cannot hold a span matched earlier.

use smallvec::SmallVec;

use super::level::Level;
use super::span::{InlineSpan, SpanKind};
use crate::Range;

#[inline]
fn is_label_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Match every `[^label]` on a level.
pub fn find_footnote_refs(level: &Level<'_>) -> SmallVec<[InlineSpan; 4]> {
    let mut found = SmallVec::new();

    let mut k = 0;
    while k < level.len() {
        if !(level.free(k, b'[') && level.free(k + 1, b'^')) {
            k += 1;
            continue;
        }
        let mut close = k + 2;
        while level.free_if(close, is_label_byte) {
            close += 1;
        }
        if close == k + 2 || !level.free(close, b']') {
            k += 1;
            continue;
        }
        found.push(InlineSpan::new(
            SpanKind::FootnoteRef,
            level.pos(k),
            level.pos(k) + 2,
            level.pos(close),
            level.pos(close) + 1,
        ));
        k = close + 1;
    }

    found
}

/// Match every `[label](url)` on a level.
pub fn find_links(level: &Level<'_>) -> SmallVec<[InlineSpan; 4]> {
    let mut found = SmallVec::new();
    let brackets = level.next_table(|k| level.free(k, b']'));
    let parens = level.next_table(|k| level.free(k, b')'));

    let mut k = 0;
    while k < level.len() {
        if !level.free(k, b'[') {
            k += 1;
            continue;
        }
        let Some(label_end) = brackets.from(k + 1) else {
            break;
        };
        if label_end == k + 1 || !level.free(label_end + 1, b'(') {
            k += 1;
            continue;
        }
        let url_start = label_end + 2;
        let Some(url_end) = parens.from(url_start) else {
            break;
        };
        if url_end == url_start || !level.is_plain(url_start, url_end) {
            k += 1;
            continue;
        }

        found.push(InlineSpan::new(
            SpanKind::Link {
                url: Range::from_usize(level.pos(url_start), level.pos(url_end)),
            },
            level.pos(k),
            level.pos(k) + 1,
            level.pos(label_end),
            level.pos(url_end) + 1,
        ));
        k = url_end + 1;
    }

    found
}
