//! replymark: markdown-subset to HTML renderer for assistant chat replies
//!
//! Replies are rendered in four forward stages:
//! 1. Fence extraction lifts fenced code out behind placeholder tokens
//! 2. Block classification walks the text line by line
//! 3. Inline formatting runs on every line body, never on code
//! 4. Paragraph assembly groups lines and resolves the placeholders
//!
//! # Design Principles
//! - No regex: byte-level scanning with delimiters counted up front
//! - No backtracking: closers are found through next-occurrence tables
//! - Fail-open: anything malformed stays literal text, nothing is dropped
//! - Pure: no state outlives a call

pub mod assemble;
pub mod block;
pub mod cursor;
pub mod escape;
pub mod fence;
pub mod inline;
pub mod limits;
pub mod range;
pub mod render;

// Re-export primary types
pub use assemble::ParagraphAssembler;
pub use block::{BlockEvent, BlockParser, LineRecord, ListKind};
pub use fence::{CodeFence, FenceTable};
pub use inline::InlineFormatter;
pub use range::Range;
pub use render::HtmlWriter;

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Escape `<`, `>`, `&` and `"` in reply text and code bodies.
    /// Attribute values are escaped regardless.
    pub escape_html: bool,
    /// Render `[^label]` as a footnote reference marker.
    pub footnote_refs: bool,
    /// Language label for fences without a tag.
    pub default_language: String,
    /// Prefix of code element ids; the fence index is appended.
    pub code_id_prefix: String,
    /// Caption of the copy control on code blocks.
    pub copy_label: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            escape_html: true,
            footnote_refs: true,
            default_language: "text".to_string(),
            code_id_prefix: "code-".to_string(),
            copy_label: "Copy".to_string(),
        }
    }
}

/// Render a reply to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = replymark::to_html("# Hello\n\nWorld");
/// assert!(html.contains("<h1 class=\"ai-header h1\">Hello</h1>"));
/// assert!(html.contains("<p class=\"ai-paragraph\">World</p>"));
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Render a reply to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len(), options.escape_html);
    render_to_writer(input, &mut writer, options);
    writer.into_string()
}

/// Render a reply into an HtmlWriter.
fn render_to_writer(input: &str, writer: &mut HtmlWriter, options: &Options) {
    writer.response_start();

    if input.len() > limits::MAX_INPUT_LEN {
        log::warn!("reply of {} bytes exceeds addressable size, rendered as text", input.len());
        writer.paragraph_start();
        writer.write_text(input);
        writer.paragraph_end();
        writer.response_end();
        return;
    }

    let (text, fences) = fence::extract(input, &options.default_language);
    let events = block::parse_blocks(&text);
    log::trace!("{} block events for {} bytes", events.len(), text.len());

    let mut assembler = ParagraphAssembler::with_capacity_for(text.len());
    render_block_events(&text, &events, &fences, &mut assembler, options);
    let body = assembler.finish();

    fences.resolve_into(&body, writer, options);
    writer.response_end();
}

/// Render block events into lines for the assembler.
fn render_block_events(
    text: &str,
    events: &[BlockEvent],
    fences: &FenceTable,
    assembler: &mut ParagraphAssembler,
    options: &Options,
) {
    let inline = InlineFormatter::new(options, fences.sentinel());
    let mut line = HtmlWriter::new(options.escape_html);

    for event in events {
        let block = match *event {
            BlockEvent::Heading { level, text: body } => {
                line.heading_start(level);
                inline.format(body.str_of(text), &mut line);
                line.heading_end(level);
                true
            }
            BlockEvent::Rule => {
                line.thematic_break();
                true
            }
            BlockEvent::Quote { nested, text: body } => {
                line.blockquote_start(nested);
                inline.format(body.str_of(text), &mut line);
                line.blockquote_end();
                true
            }
            BlockEvent::ListStart(ListKind::Ordered) => {
                line.ol_start();
                true
            }
            BlockEvent::ListStart(ListKind::Unordered) => {
                line.ul_start();
                true
            }
            BlockEvent::ListEnd(kind) => {
                match kind {
                    ListKind::Ordered => line.ol_end(),
                    ListKind::Unordered => line.ul_end(),
                }
                log::trace!("closed {kind:?} list");
                true
            }
            BlockEvent::OrderedItem { marker, text: body } => {
                line.li_start(marker.str_of(text));
                inline.format(body.str_of(text), &mut line);
                line.li_end();
                true
            }
            BlockEvent::UnorderedItem { text: body } => {
                line.li_start("•");
                inline.format(body.str_of(text), &mut line);
                line.li_end();
                true
            }
            BlockEvent::TaskItem { checked, text: body } => {
                line.task_start(checked);
                inline.format(body.str_of(text), &mut line);
                line.task_end();
                true
            }
            BlockEvent::Break => {
                assembler.push_break();
                continue;
            }
            BlockEvent::Plain(range) => {
                let plain = range.str_of(text);
                inline.format_plain(plain, &mut line) || fences.has_placeholder(plain)
            }
        };
        assembler.push_line(line.take_string(), block);
    }
}
