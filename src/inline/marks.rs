//! Mark collection for inline formatting.
//!
//! A single pass counts the delimiters that can take part in a span,
//! skipping code spans. A formatting pass whose delimiters are missing is
//! never run, so plain text costs one scan.

use smallvec::SmallVec;

use super::code_span::{CodeSpan, pair_backticks};

/// Lookup table for bytes that can take part in an inline span.
/// Returns true if the character might be a delimiter.
pub static SPECIAL_CHARS: [bool; 256] = {
    let mut table = [false; 256];
    table[b'`' as usize] = true; // Code span
    table[b'*' as usize] = true; // Emphasis
    table[b'[' as usize] = true; // Link / footnote
    table[b']' as usize] = true;
    table[b')' as usize] = true;
    table[b'~' as usize] = true; // Strikethrough
    table[b'=' as usize] = true; // Highlight
    table
};

/// Delimiter counts for one text segment.
///
/// Overlapping runs count once per start, so `***` counts one triple and
/// two doubles.
#[derive(Debug, Default)]
pub struct MarkIndex {
    /// Resolved code spans, in order.
    pub code_spans: SmallVec<[CodeSpan; 4]>,
    pub stars: u32,
    pub double_stars: u32,
    pub triple_stars: u32,
    pub double_tildes: u32,
    pub double_equals: u32,
    pub open_brackets: u32,
    /// `[^` pairs.
    pub footnote_opens: u32,
    pub close_brackets: u32,
    pub close_parens: u32,
}

impl MarkIndex {
    /// Scan text and collect marks.
    pub fn build(text: &[u8]) -> Self {
        let ticks: SmallVec<[u32; 8]> = memchr::memchr_iter(b'`', text).map(|p| p as u32).collect();
        let mut index = Self {
            code_spans: pair_backticks(&ticks),
            ..Self::default()
        };

        let len = text.len();
        let mut pos = 0;
        let mut next_span = 0;

        while pos < len {
            // Delimiters inside code spans never match
            if let Some(span) = index.code_spans.get(next_span) {
                if pos == span.open as usize {
                    pos = span.end();
                    next_span += 1;
                    continue;
                }
            }

            let b = text[pos];
            if !SPECIAL_CHARS[b as usize] {
                pos += 1;
                continue;
            }

            let next = text.get(pos + 1).copied();
            match b {
                b'*' => {
                    index.stars += 1;
                    if next == Some(b'*') {
                        index.double_stars += 1;
                        if text.get(pos + 2) == Some(&b'*') {
                            index.triple_stars += 1;
                        }
                    }
                }
                b'~' if next == Some(b'~') => index.double_tildes += 1,
                b'=' if next == Some(b'=') => index.double_equals += 1,
                b'[' => {
                    index.open_brackets += 1;
                    if next == Some(b'^') {
                        index.footnote_opens += 1;
                    }
                }
                b']' => index.close_brackets += 1,
                b')' => index.close_parens += 1,
                _ => {}
            }
            pos += 1;
        }

        index
    }

    /// Whether the segment holds nothing any pass could match.
    pub fn is_plain(&self) -> bool {
        self.code_spans.is_empty()
            && self.stars < 2
            && self.double_tildes < 2
            && self.double_equals < 2
            && (self.open_brackets == 0 || self.close_brackets == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_runs() {
        let index = MarkIndex::build(b"***a** *b*");
        assert_eq!(index.stars, 7);
        assert_eq!(index.double_stars, 3);
        assert_eq!(index.triple_stars, 1);
    }

    #[test]
    fn test_marks_inside_code_are_skipped() {
        let index = MarkIndex::build(b"`**x**` and **y**");
        assert_eq!(index.code_spans.len(), 1);
        assert_eq!(index.double_stars, 2);
    }

    #[test]
    fn test_link_delimiters() {
        let index = MarkIndex::build(b"[a](b) ~~c~~ ==d== [^1]");
        assert_eq!(index.open_brackets, 2);
        assert_eq!(index.footnote_opens, 1);
        assert_eq!(index.close_brackets, 2);
        assert_eq!(index.close_parens, 1);
        assert_eq!(index.double_tildes, 2);
        assert_eq!(index.double_equals, 2);
    }

    #[test]
    fn test_plain_segments() {
        assert!(MarkIndex::build(b"2 * 3 = 6").is_plain());
        assert!(MarkIndex::build(b"just text]").is_plain());
        assert!(!MarkIndex::build(b"a *b*").is_plain());
        assert!(!MarkIndex::build(b"`x`").is_plain());
    }
}
