//! HTML output writer for rendered replies.
//!
//! Every tag the renderer emits goes through one of the helpers below, so
//! the class vocabulary the chat client styles against lives in one place.

use crate::escape;

/// HTML output writer with a reusable buffer.
///
/// # Example
/// ```
/// use replymark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64, true);
/// writer.paragraph_start();
/// writer.write_text("Hello <World>");
/// writer.paragraph_end();
///
/// assert_eq!(writer.into_string(), "<p class=\"ai-paragraph\">Hello &lt;World&gt;</p>");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
    escape_html: bool,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new(escape_html: bool) -> Self {
        Self {
            out: Vec::with_capacity(1024),
            escape_html,
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Reply markup runs well above input size because of the class
    /// attributes, so reserve half again.
    #[inline]
    pub fn with_capacity_for(input_len: usize, escape_html: bool) -> Self {
        Self {
            out: Vec::with_capacity(input_len + input_len / 2 + 64),
            escape_html,
        }
    }

    /// Write a static string (compile-time known markup).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_raw(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a single ASCII byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        debug_assert!(b.is_ascii());
        self.out.push(b);
    }

    /// Write reply text, escaping it when the writer escapes HTML.
    #[inline]
    pub fn write_text(&mut self, text: &str) {
        if self.escape_html {
            escape::escape_text_into(&mut self.out, text.as_bytes());
        } else {
            self.out.extend_from_slice(text.as_bytes());
        }
    }

    /// Write text that must always be escaped (labels from configuration).
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        escape::escape_text_into(&mut self.out, text.as_bytes());
    }

    /// Write an attribute value with full escaping.
    #[inline]
    pub fn write_attr(&mut self, value: &str) {
        escape::escape_attr_into(&mut self.out, value);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Take the current output, leaving the writer empty for the next line.
    #[inline]
    pub fn take_string(&mut self) -> String {
        let out = std::mem::take(&mut self.out);
        // SAFETY: only `&str` content and ASCII markup are ever written
        unsafe { String::from_utf8_unchecked(out) }
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: only `&str` content and ASCII markup are ever written
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    // --- Block elements ---

    /// `<div class="formatted-response">`
    #[inline]
    pub fn response_start(&mut self) {
        self.write_str("<div class=\"formatted-response\">");
    }

    /// `</div>` closing the response container.
    #[inline]
    pub fn response_end(&mut self) {
        self.write_str("</div>");
    }

    /// `<p class="ai-paragraph">`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str("<p class=\"ai-paragraph\">");
    }

    /// `</p>`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>");
    }

    /// `<hN class="ai-header hN">`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("<h");
        self.write_byte(b'0' + level);
        self.write_str(" class=\"ai-header h");
        self.write_byte(b'0' + level);
        self.write_str("\">");
    }

    /// `</hN>`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("</h");
        self.write_byte(b'0' + level);
        self.write_byte(b'>');
    }

    /// `<hr class="section-divider">`
    #[inline]
    pub fn thematic_break(&mut self) {
        self.write_str("<hr class=\"section-divider\">");
    }

    #[inline]
    pub fn blockquote_start(&mut self, nested: bool) {
        if nested {
            self.write_str("<blockquote class=\"ai-quote nested\">");
        } else {
            self.write_str("<blockquote class=\"ai-quote\">");
        }
    }

    #[inline]
    pub fn blockquote_end(&mut self) {
        self.write_str("</blockquote>");
    }

    #[inline]
    pub fn ol_start(&mut self) {
        self.write_str("<ol class=\"ai-ordered-list\">");
    }

    #[inline]
    pub fn ol_end(&mut self) {
        self.write_str("</ol>");
    }

    #[inline]
    pub fn ul_start(&mut self) {
        self.write_str("<ul class=\"ai-unordered-list\">");
    }

    #[inline]
    pub fn ul_end(&mut self) {
        self.write_str("</ul>");
    }

    /// List item start with its visible marker label.
    #[inline]
    pub fn li_start(&mut self, marker: &str) {
        self.write_str("<li class=\"ai-list-item\"><span class=\"list-marker\">");
        self.write_text(marker);
        self.write_str("</span> ");
    }

    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>");
    }

    /// Task block start; the text that follows sits in `task-text`.
    pub fn task_start(&mut self, checked: bool) {
        if checked {
            self.write_str(
                "<div class=\"task-item completed\"><span class=\"checkbox checked\">✓</span> ",
            );
        } else {
            self.write_str("<div class=\"task-item\"><span class=\"checkbox\">○</span> ");
        }
        self.write_str("<span class=\"task-text\">");
    }

    #[inline]
    pub fn task_end(&mut self) {
        self.write_str("</span></div>");
    }

    /// Labeled line start; the label text follows.
    #[inline]
    pub fn info_label_start(&mut self) {
        self.write_str("<div class=\"info-line\"><span class=\"info-label\">");
    }

    /// Close the label (after its colon) and open the value.
    #[inline]
    pub fn info_value_start(&mut self) {
        self.write_str(":</span> <span class=\"info-value\">");
    }

    #[inline]
    pub fn info_end(&mut self) {
        self.write_str("</span></div>");
    }

    /// A complete code block with its copy control.
    ///
    /// The button's `data-copy-target` names the `<code>` element holding
    /// exactly `body`, which is never inline-formatted.
    pub fn code_block(&mut self, language: &str, id: &str, copy_label: &str, body: &str) {
        self.write_str("<div class=\"code-block\"><div class=\"code-header\"><span class=\"language-label\">");
        self.write_attr(language);
        self.write_str("</span><button type=\"button\" class=\"copy-button\" data-copy-target=\"");
        self.write_attr(id);
        self.write_str("\">");
        self.write_escaped_text(copy_label);
        self.write_str("</button></div><pre><code id=\"");
        self.write_attr(id);
        self.write_str("\" class=\"language-");
        self.write_attr(language);
        self.write_str("\">");
        self.write_text(body);
        self.write_str("</code></pre></div>");
    }

    // --- Inline elements ---

    /// `<code class="inline-code">content</code>`
    #[inline]
    pub fn inline_code(&mut self, content: &str) {
        self.write_str("<code class=\"inline-code\">");
        self.write_text(content);
        self.write_str("</code>");
    }

    #[inline]
    pub fn em_start(&mut self) {
        self.write_str("<em>");
    }

    #[inline]
    pub fn em_end(&mut self) {
        self.write_str("</em>");
    }

    #[inline]
    pub fn strong_start(&mut self) {
        self.write_str("<strong>");
    }

    #[inline]
    pub fn strong_end(&mut self) {
        self.write_str("</strong>");
    }

    /// Link opening in a new browsing context.
    #[inline]
    pub fn link_start(&mut self, url: &str) {
        self.write_str("<a href=\"");
        self.write_attr(url);
        self.write_str("\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"ai-link\">");
    }

    /// Close a link, appending the external-link glyph to its label.
    #[inline]
    pub fn link_end(&mut self) {
        self.write_str(" ↗</a>");
    }

    #[inline]
    pub fn del_start(&mut self) {
        self.write_str("<del class=\"strikethrough\">");
    }

    #[inline]
    pub fn del_end(&mut self) {
        self.write_str("</del>");
    }

    #[inline]
    pub fn mark_start(&mut self) {
        self.write_str("<mark class=\"highlight\">");
    }

    #[inline]
    pub fn mark_end(&mut self) {
        self.write_str("</mark>");
    }

    /// `<sup class="footnote-ref">label</sup>`
    #[inline]
    pub fn footnote_ref(&mut self, label: &str) {
        self.write_str("<sup class=\"footnote-ref\">");
        self.write_text(label);
        self.write_str("</sup>");
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_basic() {
        let mut w = HtmlWriter::new(true);
        w.write_str("<p>");
        w.write_text("Hello");
        w.write_str("</p>");
        assert_eq!(w.into_string(), "<p>Hello</p>");
    }

    #[test]
    fn test_writer_escape_toggle() {
        let mut escaped = HtmlWriter::new(true);
        escaped.write_text("<b>");
        assert_eq!(escaped.into_string(), "&lt;b&gt;");

        let mut raw = HtmlWriter::new(false);
        raw.write_text("<b>");
        assert_eq!(raw.into_string(), "<b>");
    }

    #[test]
    fn test_heading() {
        let mut w = HtmlWriter::new(true);
        w.heading_start(3);
        w.write_text("Title");
        w.heading_end(3);
        assert_eq!(w.into_string(), "<h3 class=\"ai-header h3\">Title</h3>");
    }

    #[test]
    fn test_list_item_marker() {
        let mut w = HtmlWriter::new(true);
        w.li_start("2.");
        w.write_text("two");
        w.li_end();
        assert_eq!(
            w.into_string(),
            "<li class=\"ai-list-item\"><span class=\"list-marker\">2.</span> two</li>"
        );
    }

    #[test]
    fn test_link_escapes_href_even_when_raw() {
        let mut w = HtmlWriter::new(false);
        w.link_start("https://x.test/\"onmouseover=\"");
        w.write_text("x");
        w.link_end();
        let html = w.into_string();
        assert!(html.starts_with("<a href=\"https://x.test/&quot;onmouseover=&quot;\""));
        assert!(html.ends_with("x ↗</a>"));
    }

    #[test]
    fn test_code_block_surface() {
        let mut w = HtmlWriter::new(true);
        w.code_block("rust", "code-0", "Copy", "let a = 1 < 2;");
        let html = w.into_string();
        assert!(html.contains("<span class=\"language-label\">rust</span>"));
        assert!(html.contains("data-copy-target=\"code-0\""));
        assert!(html.contains("<code id=\"code-0\" class=\"language-rust\">let a = 1 &lt; 2;</code>"));
    }

    #[test]
    fn test_take_string_resets() {
        let mut w = HtmlWriter::new(true);
        w.thematic_break();
        assert_eq!(w.take_string(), "<hr class=\"section-divider\">");
        assert!(w.is_empty());
        w.blockquote_start(true);
        assert_eq!(w.take_string(), "<blockquote class=\"ai-quote nested\">");
    }
}
