//! Block element tests (HTML → Markdown)

use pagemark_engine::render;

#[test]
fn test_heading_ladder() {
    assert_eq!(render("<h1>One</h1>"), "# One");
    assert_eq!(render("<h2>Two</h2>"), "## Two");
    assert_eq!(render("<h3>Three</h3>"), "### Three");
    assert_eq!(render("<h4>Four</h4>"), "#### Four");
    assert_eq!(render("<h5>Five</h5>"), "##### Five");
    assert_eq!(render("<h6>Six</h6>"), "###### Six");
}

#[test]
fn test_heading_with_inline_markup() {
    assert_eq!(
        render("<h2>The <em>second</em> pass</h2>"),
        "## The *second* pass"
    );
}

#[test]
fn test_paragraphs_separate_with_blank_line() {
    assert_eq!(render("<p>first</p><p>second</p>"), "first\n\nsecond");
}

#[test]
fn test_empty_paragraphs_do_not_stack_blank_lines() {
    let out = render("<p>a</p><p></p><p>   </p><p>b</p>");
    assert_eq!(out, "a\n\nb");
}

#[test]
fn test_bullet_list() {
    assert_eq!(
        render("<ul><li>retry the job</li><li>rotate the key</li></ul>"),
        "- retry the job\n- rotate the key"
    );
}

#[test]
fn test_ordered_list_counts_items() {
    assert_eq!(
        render("<ol><li>build</li><li>tag</li><li>publish</li></ol>"),
        "1. build\n2. tag\n3. publish"
    );
}

#[test]
fn test_list_item_with_inline_markup() {
    assert_eq!(
        render("<ul><li>run <code>fmt</code> <strong>first</strong></li></ul>"),
        "- run `fmt` **first**"
    );
}

#[test]
fn test_nested_list_flattens_to_siblings() {
    // Nesting depth is not preserved; the inner items surface as their own
    // lines so no content is lost.
    assert_eq!(
        render("<ul><li>outer<ul><li>inner</li></ul></li></ul>"),
        "- outer\n- inner"
    );
}

#[test]
fn test_task_list_items() {
    let html = r#"<ul><li><input type="checkbox" checked>shipped</li><li><input type="checkbox">pending</li></ul>"#;
    assert_eq!(render(html), "- [x] shipped\n- [ ] pending");
}

#[test]
fn test_blockquote_single_paragraph() {
    assert_eq!(
        render("<blockquote><p>fix the cause, not the symptom</p></blockquote>"),
        "> fix the cause, not the symptom"
    );
}

#[test]
fn test_blockquote_multi_paragraph_keeps_quoted_blank_line() {
    assert_eq!(
        render("<blockquote><p>one</p><p>two</p></blockquote>"),
        "> one\n> \n> two"
    );
}

#[test]
fn test_code_block_with_code_child() {
    assert_eq!(
        render("<pre><code>let x = 1;\nlet y = 2;</code></pre>"),
        "```\nlet x = 1;\nlet y = 2;\n```"
    );
}

#[test]
fn test_code_block_without_code_child() {
    assert_eq!(render("<pre>raw text</pre>"), "```\nraw text\n```");
}

#[test]
fn test_code_block_keeps_marker_characters() {
    // Inside a fence nothing is Markdown, so inner backticks and stars stay.
    assert_eq!(
        render("<pre><code>a * b\n`quoted`</code></pre>"),
        "```\na * b\n`quoted`\n```"
    );
}

#[test]
fn test_horizontal_rule_between_sections() {
    assert_eq!(
        render("<p>above</p><hr><p>below</p>"),
        "above\n\n---\n\nbelow"
    );
}

#[test]
fn test_line_break_keeps_hard_break_spaces() {
    assert_eq!(render("<p>line one<br>line two</p>"), "line one  \nline two");
}

#[test]
fn test_mixed_document_spacing() {
    let html = "<h2>Plan</h2><p>context</p><ul><li>a</li><li>b</li></ul>";
    assert_eq!(render(html), "## Plan\n\ncontext\n\n- a\n- b");
}
