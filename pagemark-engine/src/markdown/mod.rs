//! Markdown format implementation
//!
//! This module owns both directions of the Markdown boundary: rendering a
//! parsed HTML tree *to* Markdown (export, and the first hop of
//! normalization) and compiling Markdown *to* HTML (the second hop).
//!
//! # Library Choice
//!
//! We use the `comrak` crate for the Markdown → HTML direction. This choice
//! is based on:
//! - CommonMark compliance with the GFM extensions we need (tables,
//!   strikethrough, task lists)
//! - Robust and well-maintained
//! - No reason to hand-roll a Markdown parser for one call site
//!
//! The HTML → Markdown direction is written here rather than delegated: the
//! rules are element-local, the context handling is the whole point, and the
//! output dialect has to line up exactly with what the compiler accepts back.
//!
//! # Element Mapping Table
//!
//! | HTML element          | Markdown produced                  | Notes                                      |
//! |-----------------------|------------------------------------|--------------------------------------------|
//! | h1–h6                 | `# text` … `###### text`           | level from tag name, inner text trimmed    |
//! | p                     | text in its own block              | trimmed, blank-line separated              |
//! | strong, b             | `**text**`                         |                                            |
//! | em, i                 | `*text*`                           |                                            |
//! | del, s, strike        | `~~text~~`                         | needs the strikethrough extension back in  |
//! | code                  | `` `text` ``                       | bare inside `pre`, the fence quotes there  |
//! | pre                   | fenced block                       | triple backticks, inner text trimmed       |
//! | a                     | `[text](href)`                     | missing `href` becomes an empty target     |
//! | img                   | `![alt](src)`                      | no children, attributes only              |
//! | ul, ol                | item lines                         | wrapper seeds a leading blank line         |
//! | li                    | `- text` or `N. text`              | ordinal counts preceding `li` siblings     |
//! | blockquote            | `> ` prefixed lines                |                                            |
//! | br                    | two trailing spaces + newline      | Markdown hard break                        |
//! | hr                    | `---`                              |                                            |
//! | table/thead/tbody/tr  | pipe rows, `---` separator         | separator follows header rows only         |
//! | input\[type=checkbox\] | `[x] ` / `[ ] `                   | presence of `checked` decides              |
//! | widget wrappers       | inner text                         | mention/label/image placeholder tags       |
//! | anything else         | inner text                         | nothing is ever dropped                    |
//!
//! # Lossy Conversions
//!
//! - Markdown metacharacters in prose are not escaped (a literal `*` stays a
//!   literal `*`); round-tripping such text can change its meaning.
//! - Nested lists flatten: item markers survive, indentation does not.
//! - Attributes with no Markdown slot (classes, ids, styles) are dropped.

pub mod compiler;
pub mod renderer;

pub use compiler::{compile_markdown, compile_markdown_with, CompileOptions};
pub use renderer::{render, render_tree};

/// Assembles a standalone Markdown document from stored HTML, optionally
/// prefixed with a `# title` heading. This is the export entry point used
/// when a page leaves the system as a Markdown file.
pub fn export_document(title: Option<&str>, html: &str) -> String {
    let body = renderer::render(html);
    match title {
        Some(title) => format!("# {title}\n\n{body}").trim().to_string(),
        None => body,
    }
}
