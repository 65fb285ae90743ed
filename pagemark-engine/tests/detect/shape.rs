//! Tag-shape gating: which markup may surround scorable text.

use pagemark_engine::looks_like_markdown;

#[test]
fn test_paragraph_wrapped_markdown_is_markdown() {
    assert!(looks_like_markdown(
        "<p># Standup</p><p>- alice: done\n- bob: blocked</p>"
    ));
}

#[test]
fn test_div_and_br_wrapped_markdown_is_markdown() {
    assert!(looks_like_markdown(
        "<div># Agenda<br>item **one**<br>item *two*</div>"
    ));
}

#[test]
fn test_inline_tags_mixed_into_markdown_still_count() {
    // Editors convert spans one at a time; a half-converted paragraph keeps
    // its raw markers.
    assert!(looks_like_markdown(
        "<p><strong>Q3</strong> goals</p><p># Roadmap\nsee `scope.md`</p>"
    ));
}

#[test]
fn test_structural_markup_is_genuine_html() {
    assert!(!looks_like_markdown(
        "<h1>Title</h1><p>body with **stars** and `ticks`</p>"
    ));
    assert!(!looks_like_markdown(
        "<ul><li>- doubled marker</li><li>- another</li></ul>"
    ));
    assert!(!looks_like_markdown(
        "<blockquote><p>> quoted twice</p></blockquote>"
    ));
}

#[test]
fn test_widget_tags_are_structural() {
    assert!(!looks_like_markdown(
        "<p># Note for <mention-component>sam</mention-component>\n**urgent**</p>"
    ));
}

#[test]
fn test_anchor_tag_is_structural() {
    // A real link element means an editor produced this, even if the text
    // around it carries markers.
    assert!(!looks_like_markdown(
        r#"<p># Title with <a href="https://x.io">link</a> and **bold**</p>"#
    ));
}

#[test]
fn test_blank_and_whitespace_content_is_never_markdown() {
    assert!(!looks_like_markdown(""));
    assert!(!looks_like_markdown("   \n\t"));
    assert!(!looks_like_markdown("<p></p>"));
    assert!(!looks_like_markdown("<div><span>  </span></div>"));
}

#[test]
fn test_plain_prose_paragraphs_are_not_markdown() {
    assert!(!looks_like_markdown(
        "<p>The deploy finished at noon.</p><p>No alerts since.</p>"
    ));
}
