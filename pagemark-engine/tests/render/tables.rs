//! Table tests (HTML → Markdown)
//!
//! Table markup here stays on one line: the HTML parser keeps whitespace
//! text nodes it finds between table sections, and pretty-printed fixtures
//! would leak that whitespace into the rendered rows.

use pagemark_engine::render;

#[test]
fn test_head_and_body() {
    let html = "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
                <tbody><tr><td>1</td><td>2</td></tr></tbody></table>";
    assert_eq!(render(html), "| A | B |\n| --- | --- |\n| 1 | 2 |");
}

#[test]
fn test_multiple_body_rows() {
    let html = "<table><thead><tr><th>Stage</th><th>p99</th></tr></thead>\
                <tbody><tr><td>parse</td><td>4ms</td></tr>\
                <tr><td>render</td><td>2ms</td></tr></tbody></table>";
    assert_eq!(
        render(html),
        "| Stage | p99 |\n| --- | --- |\n| parse | 4ms |\n| render | 2ms |"
    );
}

#[test]
fn test_bare_rows_get_no_separator() {
    // The parser wraps bare rows in tbody; without a thead there is no
    // header separator to emit.
    let html = "<table><tr><td>only</td><td>body</td></tr></table>";
    assert_eq!(render(html), "| only | body |");
}

#[test]
fn test_header_only_table() {
    let html = "<table><thead><tr><th>Lonely</th></tr></thead></table>";
    assert_eq!(render(html), "| Lonely |\n| --- |");
}

#[test]
fn test_cells_keep_inline_markup() {
    let html = "<table><tbody><tr><td><strong>bold</strong></td>\
                <td><code>code</code></td></tr></tbody></table>";
    assert_eq!(render(html), "| **bold** | `code` |");
}

#[test]
fn test_cell_content_is_trimmed() {
    let html = "<table><tbody><tr><td>  padded  </td><td>x</td></tr></tbody></table>";
    assert_eq!(render(html), "| padded | x |");
}

#[test]
fn test_separator_width_tracks_header_columns() {
    let html = "<table><thead><tr><th>a</th><th>b</th><th>c</th></tr></thead>\
                <tbody><tr><td>1</td><td>2</td><td>3</td></tr></tbody></table>";
    assert_eq!(
        render(html),
        "| a | b | c |\n| --- | --- | --- |\n| 1 | 2 | 3 |"
    );
}

#[test]
fn test_table_between_paragraphs() {
    let html = "<p>before</p>\
                <table><thead><tr><th>K</th></tr></thead><tbody><tr><td>v</td></tr></tbody></table>\
                <p>after</p>";
    assert_eq!(render(html), "before\n\n| K |\n| --- |\n| v |\n\nafter");
}
