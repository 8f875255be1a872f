//! Block-level classifier for reply text.
//!
//! The block parser is line-oriented and recognizes, per trimmed line:
//! - ATX headings
//! - Horizontal rules
//! - Single-level quotes
//! - Task items
//! - Ordered and unordered list items
//! - Blank lines (paragraph breaks)
//!
//! At most one list container is open at a time. It is closed by a blank
//! line, by any non-list line, by an item of the other list kind, and at
//! the end of input.

mod event;
mod parser;

pub use event::{BlockEvent, LineRecord, ListKind};
pub use parser::BlockParser;

/// Parse placeholder-bearing reply text into block events.
pub fn parse_blocks(text: &str) -> Vec<BlockEvent> {
    let mut events = Vec::with_capacity((text.len() / 32).max(16));
    BlockParser::new(text).parse(&mut events);
    events
}
