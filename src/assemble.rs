//! Paragraph assembly.
//!
//! Rendered lines arrive one at a time, each flagged as block markup or
//! inline text, with break markers from blank lines in between. Lines are
//! grouped between breaks. A group of inline text becomes one paragraph; a
//! group holding any block markup is written unwrapped.

use crate::render::HtmlWriter;

/// Groups rendered lines into paragraphs.
pub struct ParagraphAssembler {
    body: HtmlWriter,
    group: Vec<String>,
    has_block: bool,
}

impl ParagraphAssembler {
    /// Create an assembler sized for a reply of `input_len` bytes.
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            // Lines are already escaped, the body only concatenates markup
            body: HtmlWriter::with_capacity_for(input_len, false),
            group: Vec::with_capacity(8),
            has_block: false,
        }
    }

    /// Add a rendered line to the current group.
    ///
    /// `block` marks a heading, rule, quote, list markup, task, labeled
    /// line, or a line carrying a code placeholder.
    #[inline]
    pub fn push_line(&mut self, html: String, block: bool) {
        self.has_block |= block;
        self.group.push(html);
    }

    /// End the current group.
    #[inline]
    pub fn push_break(&mut self) {
        self.flush_group();
    }

    fn flush_group(&mut self) {
        if self.group.is_empty() {
            return;
        }
        if !self.body.is_empty() {
            self.body.newline();
        }

        let wrap = !self.has_block;
        if wrap {
            self.body.paragraph_start();
        }
        for (i, line) in self.group.iter().enumerate() {
            if i > 0 {
                self.body.newline();
            }
            self.body.write_raw(line);
        }
        if wrap {
            self.body.paragraph_end();
        }

        self.group.clear();
        self.has_block = false;
    }

    /// Flush the last group and return the assembled body.
    pub fn finish(mut self) -> String {
        self.flush_group();
        self.body.into_string()
    }
}
