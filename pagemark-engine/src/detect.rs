//! Markdown-pattern classifier
//!
//! Decides whether an HTML-looking blob is really Markdown that leaked into
//! storage through a thin wrapper. Clients paste Markdown into plain-text
//! fields, editors wrap it in a `<p>` or sprinkle `<strong>` over parts of
//! it, and the result reaches the backend as nominally-HTML content whose
//! *text* still carries Markdown syntax.
//!
//! The call is conservative, in two layers:
//!
//! - Shape: content containing any real structural tag (`table`, `ul`,
//!   `h2`, ...) is genuine HTML, full stop. Only plain text and allow-listed
//!   wrapper/inline tags go on to scoring.
//! - Score: one Markdown-ish pattern is not evidence (prose is full of stray
//!   asterisks and leading dashes); two distinct pattern categories are
//!   required before content is reclassified.
//!
//! Signal patterns accept only forms the Markdown compiler actually
//! consumes. Pseudo-syntax the compiler leaves literal (a space-edged
//! `**a **`, a spaced `[t](u v)` target) must not count: converted output
//! carries such text verbatim, and counting it would classify that output
//! all over again on the next pass.
//!
//! Misclassifying genuine HTML as Markdown would rewrite a document that was
//! already fine, so every ambiguous case resolves to "not Markdown".

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dom;

/// Wrapper and inline tags an editor may have already produced around or
/// inside Markdown text. Anything outside this list is structural.
const TAG_ALLOW_LIST: &[&str] = &["p", "div", "span", "strong", "b", "em", "i", "br"];

/// A line that is a heading: 1-6 `#`, whitespace, content.
static HEADING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}[ \t]+\S").expect("heading pattern"));

/// A line that is a bullet item: `-`/`*`/`+`, whitespace, content.
static BULLET_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*+][ \t]+\S").expect("bullet pattern"));

/// A line that is a numbered item: digits, `.`, whitespace, content.
static NUMBERED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[ \t]+\S").expect("numbered item pattern"));

/// A line that is a quote: `>`, whitespace, content.
static QUOTE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^>[ \t]+\S").expect("quote pattern"));

/// `**bold**` or `__bold__`, non-nested, inner text not starting or ending
/// with whitespace. A space-edged pair like `**a **` stays literal through
/// the compiler, so it does not count.
static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*[^*\s](?:[^*]*[^*\s])?\*\*|__[^_\s](?:[^_]*[^_\s])?__")
        .expect("bold pattern")
});

/// `*italic*` candidate: single stars, inner text not star-delimited and not
/// starting or ending with whitespace. Word-boundary checks happen outside
/// the regex (no lookaround in the regex crate).
static STAR_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*[^*\s](?:[^*]*[^*\s])?\*").expect("star italic pattern"));

/// `_italic_` candidate, same shape as [`STAR_SPAN`].
static UNDERSCORE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_[^_\s](?:[^_]*[^_\s])?_").expect("underscore italic pattern"));

/// `[text](url)` inline link. The destination takes no whitespace and no
/// parentheses; a spaced target like `[t](u v)` stays literal through the
/// compiler, so it does not count.
static LINK_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]+\]\([^()\s]+\)").expect("link pattern"));

/// `` `code` `` span on a single line.
static CODE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`[^`\n]+`").expect("inline code pattern"));

/// Fenced code block: triple backticks, an info line, a closing fence on a
/// later line.
static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```[^\n]*\n.*?```").expect("code fence pattern"));

/// Thresholds for the classifier decision. The defaults are the canonical
/// behavior; they exist as data so deployments can tighten the call without
/// forking the rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionRules {
    /// Distinct pattern categories required before text counts as Markdown.
    pub min_signals: usize,
    /// Marker lines required before the list category counts at all.
    pub min_list_lines: usize,
}

impl Default for DetectionRules {
    fn default() -> Self {
        Self {
            min_signals: 2,
            min_list_lines: 2,
        }
    }
}

/// One recognizable Markdown pattern category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Heading,
    List,
    Blockquote,
    Bold,
    Italic,
    Link,
    InlineCode,
    CodeBlock,
}

/// Fixed-size set of matched categories; scratch state for one call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SignalSet(u8);

impl SignalSet {
    fn insert(&mut self, signal: Signal) {
        self.0 |= 1 << signal as u8;
    }

    fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[cfg(test)]
    fn contains(self, signal: Signal) -> bool {
        self.0 & (1 << signal as u8) != 0
    }
}

/// Classifies content with the default thresholds.
pub fn looks_like_markdown(raw_markup: &str) -> bool {
    looks_like_markdown_with(raw_markup, &DetectionRules::default())
}

/// Classifies content: does this nominally-HTML text actually carry Markdown?
///
/// Pure and total; any parse oddity or ambiguity resolves to `false`.
pub fn looks_like_markdown_with(raw_markup: &str, rules: &DetectionRules) -> bool {
    let root = dom::parse_html(raw_markup);
    let flattened = dom::flattened_text(&root);
    if flattened.trim().is_empty() {
        return false;
    }

    let tags = dom::tag_names(&root);
    let candidate = if tags.is_empty() {
        // Plain text: score it exactly as submitted.
        raw_markup
    } else if tags.iter().all(|tag| TAG_ALLOW_LIST.contains(&tag.as_str())) {
        // Only wrapper/inline tags: score the text with the wrappers
        // dissolved and block boundaries turned into line breaks.
        flattened.as_str()
    } else {
        return false;
    };

    matched_signals(candidate, rules).len() >= rules.min_signals
}

fn matched_signals(text: &str, rules: &DetectionRules) -> SignalSet {
    let mut signals = SignalSet::default();
    let mut list_lines = 0;

    for line in text.lines() {
        let line = line.trim_start();
        if HEADING_LINE.is_match(line) {
            signals.insert(Signal::Heading);
        }
        if BULLET_LINE.is_match(line) || NUMBERED_LINE.is_match(line) {
            list_lines += 1;
        }
        if QUOTE_LINE.is_match(line) {
            signals.insert(Signal::Blockquote);
        }
    }
    if list_lines >= rules.min_list_lines {
        signals.insert(Signal::List);
    }

    if BOLD_SPAN.is_match(text) {
        signals.insert(Signal::Bold);
    }
    if has_italic_span(text) {
        signals.insert(Signal::Italic);
    }
    if LINK_SPAN.is_match(text) {
        signals.insert(Signal::Link);
    }
    if CODE_SPAN.is_match(text) {
        signals.insert(Signal::InlineCode);
    }
    if CODE_FENCE.is_match(text) {
        signals.insert(Signal::CodeBlock);
    }

    signals
}

/// Italic detection. Bold spans are blanked out first so their delimiters
/// cannot half-match, then candidates must not touch a word character on
/// either side: `5*3*2` and `snake_case_name` stay prose.
fn has_italic_span(text: &str) -> bool {
    let stripped = BOLD_SPAN.replace_all(text, " ");
    span_clear_of_words(&stripped, &STAR_SPAN) || span_clear_of_words(&stripped, &UNDERSCORE_SPAN)
}

fn span_clear_of_words(text: &str, pattern: &Regex) -> bool {
    pattern.find_iter(text).any(|hit| {
        let before = text[..hit.start()].chars().next_back();
        let after = text[hit.end()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
