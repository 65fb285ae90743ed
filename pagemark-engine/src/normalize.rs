//! Normalization pipeline
//!
//! The storage-facing composition of the other modules: decide whether
//! submitted content is Markdown in disguise and, if so, converge it onto
//! canonical HTML by rendering the parsed tree to Markdown and compiling
//! that back. Content judged genuine HTML passes through byte-identical.
//!
//! The two-hop path (render, then compile) also covers half-converted
//! fragments: where an editor already converted *some* spans (`<strong>`
//! here, a raw `**` there), the output comes out uniformly formatted instead
//! of double-formatted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::detect::{looks_like_markdown_with, DetectionRules};
use crate::markdown::compiler::{compile_markdown_with, CompileOptions};
use crate::markdown::renderer::render;
use crate::EMPTY_PARAGRAPH;

/// First thing that looks like an element tag; used by [`ensure_html`] to
/// tell raw prose from content that already carries markup.
static ELEMENT_PROBE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<[a-z][\s\S]*>").expect("element probe pattern"));

/// Knobs for one normalization run; the defaults are the canonical behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizeOptions {
    pub detection: DetectionRules,
    pub compile: CompileOptions,
}

/// Normalizes submitted content to canonical HTML with default options.
pub fn normalize(content: &str) -> String {
    normalize_with(content, &NormalizeOptions::default())
}

/// Normalizes submitted content to canonical HTML.
///
/// Empty input and the empty-paragraph sentinel pass through unchanged, as
/// does anything the classifier judges to be genuine HTML. Only content that
/// scores as Markdown-in-disguise is rewritten.
pub fn normalize_with(content: &str, options: &NormalizeOptions) -> String {
    if content.is_empty() || content == EMPTY_PARAGRAPH {
        return content.to_string();
    }
    if !looks_like_markdown_with(content, &options.detection) {
        return content.to_string();
    }
    canonical_from_markdown(&render(content), &options.compile)
}

/// Compiles derived Markdown into the stored HTML form. Storage must never
/// hold an empty string for this field, so blank compiler output becomes the
/// sentinel.
fn canonical_from_markdown(markdown: &str, compile: &CompileOptions) -> String {
    let html = compile_markdown_with(markdown, compile);
    if html.trim().is_empty() {
        EMPTY_PARAGRAPH.to_string()
    } else {
        html
    }
}

/// Guards a free-text value on its way into an HTML field.
///
/// Content that already contains an element tag is passed through; anything
/// else is escaped and wrapped in a paragraph. Blank input becomes the
/// sentinel. This is an entry guard for callers that accept arbitrary text,
/// not a substitute for [`normalize`].
pub fn ensure_html(content: &str) -> String {
    if content.trim().is_empty() {
        return EMPTY_PARAGRAPH.to_string();
    }
    if ELEMENT_PROBE.is_match(content) {
        return content.to_string();
    }
    let escaped = content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;");
    format!("<p>{escaped}</p>")
}
