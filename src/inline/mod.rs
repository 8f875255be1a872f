//! Inline formatter for reply lines.
//!
//! Each segment goes through three phases:
//! 1. Mark Collection: single pass counting delimiters, with code spans
//!    resolved first so nothing inside them can match
//! 2. Span Resolution: ordered passes (`***`, `**`, `*`, footnote
//!    reference, link, `~~`, `==`), each seeing the matches of the earlier
//!    ones as opaque tags and pairing delimiters only within one nesting
//!    level, see [`level`]
//! 3. Span Rendering: walk the span table, formatting content recursively
//!
//! Placeholder tokens split a line into segments that are formatted
//! independently, so no span ever reaches across a code block.

mod code_span;
mod emphasis;
mod level;
mod links;
pub mod marks;
mod paired;
pub mod span;

pub use span::{InlineSpan, SpanKind};

use smallvec::SmallVec;

use crate::Options;
use crate::limits;
use crate::render::HtmlWriter;
use level::Level;
use marks::MarkIndex;
use span::SpanTable;

/// Formats inline constructs within one render call.
pub struct InlineFormatter<'o> {
    options: &'o Options,
    /// Placeholder delimiter of the fence table, if any fence was lifted.
    sentinel: Option<char>,
}

impl<'o> InlineFormatter<'o> {
    /// Create a new inline formatter.
    pub fn new(options: &'o Options, sentinel: Option<char>) -> Self {
        Self { options, sentinel }
    }

    /// Format a heading, quote, task or list-item body, or a plain line.
    pub fn format(&self, text: &str, out: &mut HtmlWriter) {
        let Some(sentinel) = self.sentinel.filter(|&s| text.contains(s)) else {
            self.format_segment(text, out);
            return;
        };

        let mut buf = [0u8; 4];
        let sentinel_str: &str = sentinel.encode_utf8(&mut buf);
        for (i, part) in text.split(sentinel).enumerate() {
            if i % 2 == 0 {
                self.format_segment(part, out);
            } else {
                // Placeholder tokens pass through untouched
                out.write_raw(sentinel_str);
                out.write_raw(part);
                out.write_raw(sentinel_str);
            }
        }
    }

    /// Format a plain line, rendering `**Label:** value` as a labeled line.
    ///
    /// Returns true if the line became a labeled-line block.
    pub fn format_plain(&self, text: &str, out: &mut HtmlWriter) -> bool {
        match split_labeled(text) {
            Some((label, value)) => {
                out.info_label_start();
                self.format(label, out);
                out.info_value_start();
                self.format(value, out);
                out.info_end();
                true
            }
            None => {
                self.format(text, out);
                false
            }
        }
    }

    fn format_segment(&self, segment: &str, out: &mut HtmlWriter) {
        if segment.is_empty() {
            return;
        }
        let index = MarkIndex::build(segment.as_bytes());
        if index.is_plain() {
            out.write_text(segment);
            return;
        }
        let spans = SpanRenderer {
            text: segment,
            table: resolve(segment.as_bytes(), &index, self.options),
        };
        spans.render(0, segment.len(), 0, out);
    }
}

/// Split `**Label:** value` into its label and value.
///
/// The label is non-empty and free of `:`.
pub fn split_labeled(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("**")?;
    let colon = rest.find(':')?;
    if colon == 0 {
        return None;
    }
    let value = rest[colon..].strip_prefix(":**")?;
    Some((&rest[..colon], value.trim_start()))
}

/// A formatting pass, in the order the passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    StrongEmphasis,
    Strong,
    Emphasis,
    FootnoteRef,
    Link,
    Strikethrough,
    Highlight,
}

impl Pass {
    const ORDER: [Pass; 7] = [
        Pass::StrongEmphasis,
        Pass::Strong,
        Pass::Emphasis,
        Pass::FootnoteRef,
        Pass::Link,
        Pass::Strikethrough,
        Pass::Highlight,
    ];

    /// Whether the segment has the delimiters this pass needs.
    fn may_match(self, index: &MarkIndex) -> bool {
        match self {
            Pass::StrongEmphasis => index.triple_stars >= 2,
            Pass::Strong => index.double_stars >= 2,
            Pass::Emphasis => index.stars >= 2,
            Pass::FootnoteRef => index.footnote_opens > 0 && index.close_brackets > 0,
            Pass::Link => index.open_brackets > 0 && index.close_brackets > 0 && index.close_parens > 0,
            Pass::Strikethrough => index.double_tildes >= 2,
            Pass::Highlight => index.double_equals >= 2,
        }
    }

    fn find(self, level: &Level<'_>) -> SmallVec<[InlineSpan; 4]> {
        match self {
            Pass::StrongEmphasis => paired::find_paired(level, b'*', 3, SpanKind::StrongEmphasis),
            Pass::Strong => paired::find_paired(level, b'*', 2, SpanKind::Strong),
            Pass::Emphasis => emphasis::find_emphasis(level),
            Pass::FootnoteRef => links::find_footnote_refs(level),
            Pass::Link => links::find_links(level),
            Pass::Strikethrough => paired::find_paired(level, b'~', 2, SpanKind::Strikethrough),
            Pass::Highlight => paired::find_paired(level, b'=', 2, SpanKind::Highlight),
        }
    }
}

/// Run every pass over a segment and collect the matched spans.
fn resolve(text: &[u8], index: &MarkIndex, options: &Options) -> SpanTable {
    let mut table = SpanTable::new(text.len());
    for span in &index.code_spans {
        let content = span.content_range();
        table.insert(InlineSpan::new(
            SpanKind::Code,
            span.open as usize,
            content.start_usize(),
            content.end_usize(),
            span.end(),
        ));
    }

    for pass in Pass::ORDER {
        if pass == Pass::FootnoteRef && !options.footnote_refs {
            continue;
        }
        if pass.may_match(index) {
            run_pass(text, &mut table, pass, 0, text.len(), 0);
        }
    }
    table
}

/// Run one pass over the level of `start..end` and every level below it.
fn run_pass(text: &[u8], table: &mut SpanTable, pass: Pass, start: usize, end: usize, depth: usize) {
    let level = Level::collect(text, table, start, end);
    let found = pass.find(&level);

    if depth + 1 < limits::MAX_INLINE_NESTING {
        for pos in level.span_positions() {
            let Some(span) = table.at(pos) else { continue };
            if span.is_container() {
                let inner = span.inner;
                run_pass(text, table, pass, inner.start_usize(), inner.end_usize(), depth + 1);
            }
        }
    }

    for span in found {
        table.insert(span);
    }
}

/// Recursive span renderer over one segment.
struct SpanRenderer<'a> {
    text: &'a str,
    table: SpanTable,
}

impl SpanRenderer<'_> {
    /// Render `start..end`, formatting spans and writing the rest as text.
    fn render(&self, start: usize, end: usize, depth: usize, out: &mut HtmlWriter) {
        if depth >= limits::MAX_INLINE_NESTING || self.table.is_empty() {
            out.write_text(&self.text[start..end]);
            return;
        }

        let mut literal = start;
        let mut pos = start;

        while pos < end {
            match self.table.at(pos) {
                Some(span) => {
                    out.write_text(&self.text[literal..pos]);
                    self.emit(&span, depth, out);
                    pos = span.end();
                    literal = pos;
                }
                None => pos += 1,
            }
        }

        out.write_text(&self.text[literal..end]);
    }

    fn emit(&self, span: &InlineSpan, depth: usize, out: &mut HtmlWriter) {
        let inner = span.inner;
        let (start, end) = (inner.start_usize(), inner.end_usize());
        match span.kind {
            SpanKind::Code => out.inline_code(inner.str_of(self.text)),
            SpanKind::FootnoteRef => out.footnote_ref(inner.str_of(self.text)),
            SpanKind::StrongEmphasis => {
                out.strong_start();
                out.em_start();
                self.render(start, end, depth + 1, out);
                out.em_end();
                out.strong_end();
            }
            SpanKind::Strong => {
                out.strong_start();
                self.render(start, end, depth + 1, out);
                out.strong_end();
            }
            SpanKind::Emphasis => {
                out.em_start();
                self.render(start, end, depth + 1, out);
                out.em_end();
            }
            SpanKind::Link { url } => {
                out.link_start(url.str_of(self.text));
                self.render(start, end, depth + 1, out);
                out.link_end();
            }
            SpanKind::Strikethrough => {
                out.del_start();
                self.render(start, end, depth + 1, out);
                out.del_end();
            }
            SpanKind::Highlight => {
                out.mark_start();
                self.render(start, end, depth + 1, out);
                out.mark_end();
            }
        }
    }
}
