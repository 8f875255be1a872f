use replymark::{Options, to_html, to_html_with_options};

fn raw() -> Options {
    Options {
        escape_html: false,
        ..Options::default()
    }
}

#[test]
fn reply_text_is_escaped_by_default() {
    assert_eq!(
        to_html("<script>alert(\"x\") && 1</script>"),
        "<div class=\"formatted-response\"><p class=\"ai-paragraph\">&lt;script&gt;alert(&quot;x&quot;) &amp;&amp; 1&lt;/script&gt;</p></div>"
    );
}

#[test]
fn headings_and_items_are_escaped() {
    let html = to_html("# a <b>\n- c & d\n> <i>");
    assert!(html.contains(">a &lt;b&gt;</h1>"));
    assert!(html.contains("</span> c &amp; d</li>"));
    assert!(html.contains(">&lt;i&gt;</blockquote>"));
}

#[test]
fn raw_mode_passes_html_through() {
    assert_eq!(
        to_html_with_options("a <b>bold</b> & **c**", &raw()),
        "<div class=\"formatted-response\"><p class=\"ai-paragraph\">a <b>bold</b> & <strong>c</strong></p></div>"
    );
}

#[test]
fn link_href_is_escaped_in_raw_mode() {
    let html = to_html_with_options("[x](https://a.test/\"onclick=\"y)", &raw());
    assert!(html.contains("href=\"https://a.test/&quot;onclick=&quot;y\""));
}

#[test]
fn copy_label_and_id_prefix_are_escaped() {
    let options = Options {
        code_id_prefix: "a\"b-".to_string(),
        copy_label: "<Copy>".to_string(),
        ..raw()
    };
    let html = to_html_with_options("```\nx\n```", &options);
    assert!(html.contains("data-copy-target=\"a&quot;b-0\""));
    assert!(html.contains(">&lt;Copy&gt;</button>"));
}

#[test]
fn entities_in_reply_are_escaped_once() {
    assert!(to_html("&amp; &lt;").contains("&amp;amp; &amp;lt;"));
}

#[test]
fn unicode_passes_through() {
    assert!(to_html("Grüße → 日本語 🎉").contains("Grüße → 日本語 🎉"));
}
