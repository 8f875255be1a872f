//! Fenced code extraction.
//!
//! Fences are lifted out of the reply before any block or inline rule runs.
//! Each fence is replaced by a placeholder token `S<index>S`, where `S` is a
//! private-use character that does not occur anywhere in the reply, so a
//! token can never collide with reply text. The table is resolved back into
//! code-block markup after paragraph assembly.

use std::borrow::Cow;

use memchr::memmem;
use rustc_hash::FxHashSet;

use crate::Options;
use crate::cursor::Cursor;
use crate::render::HtmlWriter;

const FENCE: &[u8] = b"```";

/// A fenced code block lifted out of the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFence {
    /// Language tag, or the configured default when the fence has none.
    pub language: String,
    /// Fence interior with only its outer blank lines removed.
    pub body: String,
}

/// Fences extracted from one reply, addressable by placeholder index.
#[derive(Debug, Default)]
pub struct FenceTable {
    sentinel: Option<char>,
    fences: Vec<CodeFence>,
}

impl FenceTable {
    /// The placeholder delimiter, if any fence was extracted.
    #[inline]
    pub fn sentinel(&self) -> Option<char> {
        self.sentinel
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fences.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fences.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&CodeFence> {
        self.fences.get(index)
    }

    /// Check whether `text` carries at least one placeholder.
    #[inline]
    pub fn has_placeholder(&self, text: &str) -> bool {
        self.sentinel.is_some_and(|s| text.contains(s))
    }

    /// Write `html` to `writer`, replacing every placeholder with its code block.
    pub fn resolve_into(&self, html: &str, writer: &mut HtmlWriter, options: &Options) {
        let Some(sentinel) = self.sentinel else {
            writer.write_raw(html);
            return;
        };

        let mut resolved = 0usize;
        for (i, part) in html.split(sentinel).enumerate() {
            if i % 2 == 0 {
                writer.write_raw(part);
                continue;
            }
            match part.parse::<usize>().ok().and_then(|n| Some((n, self.fences.get(n)?))) {
                Some((index, fence)) => {
                    let id = format!("{}{}", options.code_id_prefix, index);
                    writer.code_block(&fence.language, &id, &options.copy_label, &fence.body);
                    resolved += 1;
                }
                None => {
                    // Unreachable while the sentinel is absent from the reply.
                    let mut buf = [0u8; 4];
                    writer.write_raw(sentinel.encode_utf8(&mut buf));
                    writer.write_raw(part);
                }
            }
        }
        debug_assert_eq!(resolved, self.fences.len(), "every placeholder resolves exactly once");
    }
}

/// Lift fenced code out of `raw`.
///
/// Returns the reply with each fence replaced by a placeholder token, plus
/// the table of extracted fences in source order. An opening delimiter with
/// no closing delimiter stays literal text.
pub fn extract<'a>(raw: &'a str, default_language: &str) -> (Cow<'a, str>, FenceTable) {
    let bytes = raw.as_bytes();
    let finder = memmem::Finder::new(FENCE);

    let Some(first) = finder.find(bytes) else {
        return (Cow::Borrowed(raw), FenceTable::default());
    };
    let Some(sentinel) = pick_sentinel(raw) else {
        log::debug!("no free placeholder character, fences rendered as text");
        return (Cow::Borrowed(raw), FenceTable::default());
    };

    let mut out = String::with_capacity(raw.len());
    let mut fences = Vec::new();
    let mut copied = 0;
    let mut search = first;

    while let Some(rel) = finder.find(&bytes[search..]) {
        let open = search + rel;
        let mut cursor = Cursor::new_at(bytes, open + FENCE.len());

        let lang_start = cursor.offset();
        cursor.skip_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let lang_end = cursor.offset();
        cursor.eat(b'\n');
        let body_start = cursor.offset();

        let Some(body_len) = cursor.find_bytes(FENCE) else {
            log::trace!("unterminated fence at byte {open} kept as text");
            break;
        };
        let close = body_start + body_len;

        let language = if lang_end > lang_start {
            &raw[lang_start..lang_end]
        } else {
            default_language
        };

        out.push_str(&raw[copied..open]);
        push_token(&mut out, sentinel, fences.len());
        fences.push(CodeFence {
            language: language.to_string(),
            body: trim_blank_lines(&raw[body_start..close]).to_string(),
        });

        copied = close + FENCE.len();
        search = copied;
    }

    if fences.is_empty() {
        return (Cow::Borrowed(raw), FenceTable::default());
    }
    out.push_str(&raw[copied..]);

    log::debug!("extracted {} code fence(s)", fences.len());
    (
        Cow::Owned(out),
        FenceTable {
            sentinel: Some(sentinel),
            fences,
        },
    )
}

fn push_token(out: &mut String, sentinel: char, index: usize) {
    use std::fmt::Write;
    // Writing into a String cannot fail.
    let _ = write!(out, "{sentinel}{index}{sentinel}");
}

/// First private-use character absent from the reply.
fn pick_sentinel(raw: &str) -> Option<char> {
    let used: FxHashSet<char> = raw.chars().filter(|&c| is_private_use(c)).collect();
    ('\u{E000}'..='\u{F8FF}')
        .chain('\u{F0000}'..='\u{FFFFD}')
        .find(|c| !used.contains(c))
}

#[inline]
fn is_private_use(c: char) -> bool {
    matches!(c, '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}')
}

/// Strip whitespace-only lines from both ends of a fence interior.
///
/// Indentation of the first kept line and trailing spaces of the last kept
/// line are preserved.
fn trim_blank_lines(body: &str) -> &str {
    let mut start = 0;
    while let Some(nl) = body[start..].find('\n') {
        if !body[start..start + nl].trim().is_empty() {
            break;
        }
        start += nl + 1;
    }

    let rest = &body[start..];
    if rest.trim().is_empty() {
        return "";
    }

    let content_end = start + rest.trim_end().len();
    let mut end = body[content_end..]
        .find('\n')
        .map_or(body.len(), |p| content_end + p);
    if body[..end].ends_with('\r') {
        end -= 1;
    }
    &body[start..end]
}
