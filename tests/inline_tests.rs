use replymark::{Options, to_html, to_html_with_options};

fn para(input: &str) -> String {
    let html = to_html(input);
    html.strip_prefix("<div class=\"formatted-response\"><p class=\"ai-paragraph\">")
        .and_then(|rest| rest.strip_suffix("</p></div>"))
        .unwrap_or_else(|| panic!("not a single paragraph: {html}"))
        .to_string()
}

// Emphasis

#[test]
fn bold_in_paragraph() {
    assert_eq!(
        to_html("Hello **world**"),
        "<div class=\"formatted-response\"><p class=\"ai-paragraph\">Hello <strong>world</strong></p></div>"
    );
}

#[test]
fn spaced_double_star_stays_literal() {
    assert_eq!(para("a ** b"), "a ** b");
}

#[test]
fn bold_italic() {
    assert_eq!(para("***both***"), "<strong><em>both</em></strong>");
}

#[test]
fn mixed_emphasis() {
    assert_eq!(
        para("*a* **b** ***c***"),
        "<em>a</em> <strong>b</strong> <strong><em>c</em></strong>"
    );
}

#[test]
fn unclosed_bold_is_literal() {
    assert_eq!(para("**bold without end"), "**bold without end");
}

#[test]
fn lone_star_is_literal() {
    assert_eq!(para("a*b"), "a*b");
    assert_eq!(para("5 * 3 = 15"), "5 * 3 = 15");
}

#[test]
fn italic_around_bold() {
    assert_eq!(para("*a **b** c*"), "<em>a <strong>b</strong> c</em>");
    assert_eq!(
        para("Please *see **this** now*."),
        "Please <em>see <strong>this</strong> now</em>."
    );
}

#[test]
fn bold_italic_inside_bold() {
    assert_eq!(
        para("**a ***b*** c**"),
        "<strong>a <strong><em>b</em></strong> c</strong>"
    );
}

#[test]
fn italic_skips_double_star_runs() {
    assert_eq!(para("*a ** b*"), "<em>a ** b</em>");
}

#[test]
fn emphasis_does_not_cross_lines() {
    assert_eq!(para("one **a\nb** two"), "one **a\nb** two");
}

// Code spans

#[test]
fn code_span() {
    assert_eq!(
        para("Run `cargo test` first"),
        "Run <code class=\"inline-code\">cargo test</code> first"
    );
}

#[test]
fn code_span_content_is_not_formatted() {
    assert_eq!(
        para("`**x** [a](b) ~~c~~`"),
        "<code class=\"inline-code\">**x** [a](b) ~~c~~</code>"
    );
}

#[test]
fn code_span_escapes_html() {
    assert_eq!(
        para("`<div>`"),
        "<code class=\"inline-code\">&lt;div&gt;</code>"
    );
}

#[test]
fn empty_code_span_is_literal() {
    assert_eq!(para("a `` b"), "a `` b");
}

// Links

#[test]
fn link_opens_in_new_context() {
    assert_eq!(
        para("Read [the guide](https://example.com/guide)."),
        "Read <a href=\"https://example.com/guide\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"ai-link\">the guide ↗</a>."
    );
}

#[test]
fn link_label_is_formatted() {
    assert!(para("[**docs**](https://docs.rs)").contains("class=\"ai-link\"><strong>docs</strong> ↗</a>"));
}

#[test]
fn link_url_is_attribute_escaped() {
    let html = para("[x](https://a.test/?q=\"y\")");
    assert!(html.contains("href=\"https://a.test/?q=&quot;y&quot;\""));
}

#[test]
fn broken_links_are_literal() {
    assert_eq!(para("[label] (url)"), "[label] (url)");
    assert_eq!(para("[](https://x.test)"), "[](https://x.test)");
    assert_eq!(para("[open](https://x.test"), "[open](https://x.test");
}

// Strikethrough and highlight

#[test]
fn strikethrough() {
    assert_eq!(
        para("~~old~~ plan"),
        "<del class=\"strikethrough\">old</del> plan"
    );
}

#[test]
fn highlight() {
    assert_eq!(
        para("the ==key== point"),
        "the <mark class=\"highlight\">key</mark> point"
    );
}

#[test]
fn single_tilde_and_equals_are_literal() {
    assert_eq!(para("~5 minutes, a = b"), "~5 minutes, a = b");
}

#[test]
fn strikethrough_wraps_bold() {
    assert_eq!(
        para("~~**gone**~~"),
        "<del class=\"strikethrough\"><strong>gone</strong></del>"
    );
}

// Footnote references

#[test]
fn footnote_reference() {
    assert_eq!(
        para("As shown[^1] before"),
        "As shown<sup class=\"footnote-ref\">1</sup> before"
    );
}

#[test]
fn footnote_reference_before_parenthesis_is_not_a_link() {
    assert_eq!(
        para("[^1](https://x.test)"),
        "<sup class=\"footnote-ref\">1</sup>(https://x.test)"
    );
}

#[test]
fn footnote_references_can_be_disabled() {
    let options = Options {
        footnote_refs: false,
        ..Options::default()
    };
    assert_eq!(
        to_html_with_options("see[^a]", &options),
        "<div class=\"formatted-response\"><p class=\"ai-paragraph\">see[^a]</p></div>"
    );
}

// Labeled lines

#[test]
fn labeled_line() {
    assert_eq!(
        to_html("**Status:** In progress"),
        "<div class=\"formatted-response\"><div class=\"info-line\"><span class=\"info-label\">Status:</span> <span class=\"info-value\">In progress</span></div></div>"
    );
}

#[test]
fn labeled_line_value_is_formatted() {
    assert!(to_html("**Docs:** [here](https://x.test)").contains(
        "<span class=\"info-value\"><a href=\"https://x.test\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"ai-link\">here ↗</a></span>"
    ));
}

#[test]
fn labeled_line_group_is_not_wrapped() {
    let html = to_html("**Owner:** ops\n**Due:** Friday");
    assert!(!html.contains("ai-paragraph"));
    assert_eq!(html.matches("<div class=\"info-line\">").count(), 2);
}

#[test]
fn bold_with_colon_mid_line_is_plain_bold() {
    assert_eq!(para("Note **Name:** x"), "Note <strong>Name:</strong> x");
}

#[test]
fn labeled_line_only_for_plain_lines() {
    let html = to_html("- **Owner:** ops");
    assert!(!html.contains("info-line"));
    assert!(html.contains("<strong>Owner:</strong> ops"));
}
