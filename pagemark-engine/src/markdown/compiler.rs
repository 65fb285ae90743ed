//! Markdown compilation (Markdown → HTML)
//!
//! Thin wrapper over comrak that pins the extension set the pipeline relies
//! on. The renderer emits `~~strikethrough~~`, task-list checkboxes and pipe
//! tables, so those extensions stay on unconditionally; hard line breaks are
//! a knob because they change how pasted prose reflows.

use comrak::{markdown_to_html, ComrakOptions};
use serde::{Deserialize, Serialize};

/// Knobs for the Markdown → HTML step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Render single newlines as `<br />` so line breaks inside a paragraph
    /// survive the trip into HTML. On by default: the engine's inputs are
    /// editor documents where authors mean their line breaks.
    pub hardbreaks: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { hardbreaks: true }
    }
}

/// Compiles Markdown to HTML with the default options.
pub fn compile_markdown(markdown: &str) -> String {
    compile_markdown_with(markdown, &CompileOptions::default())
}

/// Compiles Markdown to HTML. Total: comrak accepts any input text.
pub fn compile_markdown_with(markdown: &str, options: &CompileOptions) -> String {
    markdown_to_html(markdown, &comrak_options(options))
}

fn comrak_options(options: &CompileOptions) -> ComrakOptions<'static> {
    let mut comrak = ComrakOptions::default();
    comrak.extension.table = true;
    comrak.extension.strikethrough = true;
    comrak.extension.tasklist = true;
    comrak.render.hardbreaks = options.hardbreaks;
    comrak
}
