//! Line records and block-level event types.

use crate::Range;

/// Type of list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Numbered items (`1.` or `1)`), labels kept as written.
    Ordered,
    /// Bullet items (`-`, `*`, `+`, `•`), rendered with a `•` glyph.
    Unordered,
}

/// Classification of one reply line.
///
/// Text ranges point into the placeholder-bearing reply and are already
/// trimmed of the marker and surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRecord {
    /// `#` to `######` heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
        text: Range,
    },
    /// `---`, `___` or `***` (three or more).
    Rule,
    /// `>` quote, or `>>` for the nested-style variant.
    Quote { nested: bool, text: Range },
    /// `- [ ] text` / `- [x] text`.
    TaskItem { checked: bool, text: Range },
    /// `2. text` or `2) text`; `marker` covers `2.`.
    OrderedItem { marker: Range, text: Range },
    /// `- text`, `* text`, `+ text` or `• text`.
    UnorderedItem { text: Range },
    /// Whitespace-only line.
    Blank,
    /// Anything else; left for the inline formatter.
    Plain(Range),
}

impl LineRecord {
    /// The list container this line belongs in, if it is a list item.
    #[inline]
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Self::OrderedItem { .. } => Some(ListKind::Ordered),
            Self::UnorderedItem { .. } => Some(ListKind::Unordered),
            _ => None,
        }
    }
}

/// Events emitted by the block parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent {
    /// A heading line.
    Heading { level: u8, text: Range },
    /// A horizontal rule.
    Rule,
    /// A single-level quote line.
    Quote { nested: bool, text: Range },
    /// Opening wrapper of a list container.
    ListStart(ListKind),
    /// Closing wrapper of a list container.
    ListEnd(ListKind),
    /// Item of the open ordered list.
    OrderedItem { marker: Range, text: Range },
    /// Item of the open unordered list.
    UnorderedItem { text: Range },
    /// Standalone checkbox block (never inside a list container).
    TaskItem { checked: bool, text: Range },
    /// Paragraph break signal from a blank line.
    Break,
    /// Unclassified text for inline formatting.
    Plain(Range),
}
