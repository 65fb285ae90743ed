//! Pattern scoring on realistic pasted content.

use pagemark_engine::{looks_like_markdown, looks_like_markdown_with, DetectionRules};

#[test]
fn test_pasted_readme_excerpt_is_markdown() {
    let text = "\
# pagemark

Converts page content between HTML and Markdown.

## Install

```
cargo install pagemark
```

- zero config
- no daemon";
    assert!(looks_like_markdown(text));
}

#[test]
fn test_commit_message_with_stray_asterisk_is_prose() {
    assert!(!looks_like_markdown(
        "fix: handle p*q overflow in eval\n\nthe old code truncated silently"
    ));
}

#[test]
fn test_release_checklist_is_markdown() {
    let text = "\
**Release checklist**

1. bump the version
2. tag the commit
3. push to the registry";
    assert!(looks_like_markdown(text));
}

#[test]
fn test_single_quote_line_is_prose() {
    assert!(!looks_like_markdown("> forwarded without comment"));
}

#[test]
fn test_quote_plus_emphasis_is_markdown() {
    assert!(looks_like_markdown(
        "> ship it\n\nsigned off by **both** reviewers"
    ));
}

#[test]
fn test_identifier_heavy_prose_is_not_italic() {
    // Underscores inside identifiers and bare multiplication stars are not
    // emphasis, and a single dash line is below the list threshold.
    assert!(!looks_like_markdown(
        "- set max_retry_count to 3*backoff in the worker loop"
    ));
}

#[test]
fn test_link_plus_heading_is_markdown() {
    assert!(looks_like_markdown(
        "### Incident 42\nfull notes in [the postmortem](https://wiki.internal/pm/42)"
    ));
}

#[test]
fn test_code_fence_plus_list_is_markdown() {
    let text = "steps:\n- patch\n- verify\n\n```\nkubectl rollout status api\n```";
    assert!(looks_like_markdown(text));
}

#[test]
fn test_stricter_rules_demand_more_evidence() {
    let text = "# Title\nSome **bold** text";
    assert!(looks_like_markdown(text));
    let strict = DetectionRules {
        min_signals: 3,
        min_list_lines: 2,
    };
    assert!(!looks_like_markdown_with(text, &strict));
}
