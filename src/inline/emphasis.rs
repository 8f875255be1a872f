//! Single-star italic.
//!
//! Runs after `***` and `**` have been matched, so the stars still free on
//! a level are the ones those passes left over. A free `*` next to another
//! free `*` belongs to a run and never delimits italic. The closer is the
//! next lone `*` on the same level, so italic may wrap strong spans.

use smallvec::SmallVec;

use super::level::Level;
use super::span::{InlineSpan, SpanKind};

/// Match every `*italic*` span on a level.
pub fn find_emphasis(level: &Level<'_>) -> SmallVec<[InlineSpan; 4]> {
    let mut found = SmallVec::new();
    let lone = |k: usize| {
        level.free(k, b'*')
            && !(k > 0 && level.free(k - 1, b'*'))
            && !level.free(k + 1, b'*')
    };
    let closers = level.next_table(lone);

    let mut k = 0;
    while k < level.len() {
        if !lone(k) {
            k += 1;
            continue;
        }
        // A lone star is never followed by a star, so content is non-empty
        let Some(close) = closers.from(k + 1) else {
            break;
        };
        found.push(InlineSpan::new(
            SpanKind::Emphasis,
            level.pos(k),
            level.pos(k) + 1,
            level.pos(close),
            level.pos(close) + 1,
        ));
        k = close + 1;
    }

    found
}
