//! Same-marker spans: `***`, `**`, `~~` and `==`.
//!
//! The opener is a run of `width` markers; the closer is the next such run
//! on the same level after at least one content token. Pairing is left to
//! right and non-greedy, so `==a== ==b==` is two spans.

use smallvec::SmallVec;

use super::level::Level;
use super::span::{InlineSpan, SpanKind};

/// Match every `marker` × `width` span on a level.
pub fn find_paired(
    level: &Level<'_>,
    marker: u8,
    width: usize,
    kind: SpanKind,
) -> SmallVec<[InlineSpan; 4]> {
    let mut found = SmallVec::new();
    let closers = level.next_table(|k| level.run(k, marker, width));

    let mut k = 0;
    while k < level.len() {
        if !level.run(k, marker, width) {
            k += 1;
            continue;
        }
        // No closer from here means none for any later opener either
        let Some(close) = closers.from(k + width + 1) else {
            break;
        };
        found.push(InlineSpan::new(
            kind,
            level.pos(k),
            level.pos(k) + width,
            level.pos(close),
            level.pos(close) + width,
        ));
        k = close + width;
    }

    found
}
