//! Block parser implementation.

use crate::Range;
use crate::cursor::Cursor;
use crate::limits;

use super::event::{BlockEvent, LineRecord, ListKind};

/// UTF-8 encoding of `•`.
const BULLET: &[u8] = "•".as_bytes();

/// The single list container open during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ListState {
    open: Option<ListKind>,
}

impl ListState {
    /// Make `kind` the open container, closing a container of the other kind.
    fn enter(&mut self, kind: ListKind, events: &mut Vec<BlockEvent>) {
        if self.open == Some(kind) {
            return;
        }
        self.close(events);
        events.push(BlockEvent::ListStart(kind));
        self.open = Some(kind);
    }

    /// Close the open container, if any.
    fn close(&mut self, events: &mut Vec<BlockEvent>) {
        if let Some(kind) = self.open.take() {
            events.push(BlockEvent::ListEnd(kind));
        }
    }
}

/// Line-oriented block parser over placeholder-bearing reply text.
pub struct BlockParser<'a> {
    /// Reply text with fences already replaced by placeholders.
    text: &'a str,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Parse all lines and collect events.
    pub fn parse(&self, events: &mut Vec<BlockEvent>) {
        let mut lists = ListState::default();
        let mut offset = 0;

        for line in self.text.split('\n') {
            let range = Range::from_usize(offset, offset + line.len());
            offset += line.len() + 1;

            let record = self.classify(range);
            match record.list_kind() {
                Some(kind) => lists.enter(kind, events),
                None => lists.close(events),
            }
            events.push(match record {
                LineRecord::Blank => BlockEvent::Break,
                LineRecord::Heading { level, text } => BlockEvent::Heading { level, text },
                LineRecord::Rule => BlockEvent::Rule,
                LineRecord::Quote { nested, text } => BlockEvent::Quote { nested, text },
                LineRecord::TaskItem { checked, text } => BlockEvent::TaskItem { checked, text },
                LineRecord::OrderedItem { marker, text } => BlockEvent::OrderedItem { marker, text },
                LineRecord::UnorderedItem { text } => BlockEvent::UnorderedItem { text },
                LineRecord::Plain(text) => BlockEvent::Plain(text),
            });
        }

        // Close any list still open at end of input
        lists.close(events);
    }

    /// Classify one line. First match wins, in priority order.
    pub fn classify(&self, line: Range) -> LineRecord {
        let trimmed = line.trimmed(self.text);
        if trimmed.is_empty() {
            return LineRecord::Blank;
        }
        let bytes = trimmed.slice(self.text.as_bytes());
        let base = trimmed.start_usize();

        try_heading(bytes, base)
            .or_else(|| try_rule(bytes))
            .or_else(|| try_quote(bytes, base))
            .or_else(|| try_task(bytes, base))
            .or_else(|| try_ordered(bytes, base))
            .or_else(|| try_unordered(bytes, base))
            .unwrap_or(LineRecord::Plain(trimmed))
    }
}

/// Range from the cursor to the end of the trimmed line.
#[inline]
fn rest_range(cursor: &Cursor<'_>, bytes: &[u8], base: usize) -> Range {
    Range::from_usize(base + cursor.offset(), base + bytes.len())
}

/// `#`..`######` followed by whitespace.
fn try_heading(bytes: &[u8], base: usize) -> Option<LineRecord> {
    let mut cursor = Cursor::new(bytes);
    let level = cursor.skip_while(|b| b == b'#');
    if level == 0 || level > limits::MAX_HEADING_LEVEL {
        return None;
    }
    if cursor.skip_whitespace() == 0 {
        return None;
    }
    Some(LineRecord::Heading {
        level: level as u8,
        text: rest_range(&cursor, bytes, base),
    })
}

/// Three or more of one of `-`, `_`, `*` and nothing else.
fn try_rule(bytes: &[u8]) -> Option<LineRecord> {
    let marker = match bytes.first() {
        Some(&b @ (b'-' | b'_' | b'*')) => b,
        _ => return None,
    };
    (bytes.len() >= 3 && bytes.iter().all(|&b| b == marker)).then_some(LineRecord::Rule)
}

/// `>` quote; `>>` marks the nested-style variant. A marker with no text
/// after it is a plain line.
fn try_quote(bytes: &[u8], base: usize) -> Option<LineRecord> {
    let mut cursor = Cursor::new(bytes);
    if !cursor.eat(b'>') {
        return None;
    }
    let nested = cursor.eat(b'>');
    cursor.skip_whitespace();
    if cursor.is_eof() {
        return None;
    }
    Some(LineRecord::Quote {
        nested,
        text: rest_range(&cursor, bytes, base),
    })
}

/// `-`/`*`/`+`, optional whitespace, `[ ]`/`[x]`/`[X]`, whitespace, text.
fn try_task(bytes: &[u8], base: usize) -> Option<LineRecord> {
    let mut cursor = Cursor::new(bytes);
    if !matches!(cursor.peek(), Some(b'-' | b'*' | b'+')) {
        return None;
    }
    cursor.bump();
    cursor.skip_whitespace();
    if !cursor.eat(b'[') {
        return None;
    }
    let checked = match cursor.peek()? {
        b' ' => false,
        b'x' | b'X' => true,
        _ => return None,
    };
    cursor.bump();
    if !cursor.eat(b']') || cursor.skip_whitespace() == 0 || cursor.is_eof() {
        return None;
    }
    Some(LineRecord::TaskItem {
        checked,
        text: rest_range(&cursor, bytes, base),
    })
}

/// Digits, `.` or `)`, whitespace, text.
fn try_ordered(bytes: &[u8], base: usize) -> Option<LineRecord> {
    let mut cursor = Cursor::new(bytes);
    let digits = cursor.skip_while(|b| b.is_ascii_digit());
    if digits == 0 || digits > limits::MAX_LIST_MARKER_DIGITS {
        return None;
    }
    if !cursor.eat(b'.') && !cursor.eat(b')') {
        return None;
    }
    let marker = Range::from_usize(base, base + cursor.offset());
    if cursor.skip_whitespace() == 0 || cursor.is_eof() {
        return None;
    }
    Some(LineRecord::OrderedItem {
        marker,
        text: rest_range(&cursor, bytes, base),
    })
}

/// `-`, `*`, `+` or `•`, whitespace, text.
fn try_unordered(bytes: &[u8], base: usize) -> Option<LineRecord> {
    let mut cursor = Cursor::new(bytes);
    if !cursor.eat_bytes(BULLET) {
        if !matches!(cursor.peek(), Some(b'-' | b'*' | b'+')) {
            return None;
        }
        cursor.bump();
    }
    if cursor.skip_whitespace() == 0 || cursor.is_eof() {
        return None;
    }
    Some(LineRecord::UnorderedItem {
        text: rest_range(&cursor, bytes, base),
    })
}
