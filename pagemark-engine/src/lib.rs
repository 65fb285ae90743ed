//! HTML/Markdown normalization for page content
//!
//!     This crate keeps the rich-text fields of a page store in one canonical
//!     shape: HTML. Clients and importers routinely hand us Markdown (or HTML
//!     with Markdown still inside it), and this is the layer that notices and
//!     converges it.
//!
//!     TLDR: For integrators:
//!         - Call normalize() on anything headed for an HTML field. Real HTML passes
//!           through byte identical, disguised Markdown gets converted.
//!         - Call ensure_html() on free text from sources that never send markup
//!           (titles pasted into bodies, plain-text API clients).
//!         - The classifier is conservative on purpose: it takes two distinct kinds
//!           of Markdown evidence before it will rewrite anything. A lone "5*3" or a
//!           single dash bullet is left alone.
//!         - Everything is total. No operation here returns an error; worst case the
//!           input comes back unchanged.
//!
//! Architecture
//!
//!     The pipeline is three small stages, each in its own module so it can be
//!     tested in isolation:
//!
//!     detect      decides whether content is Markdown in disguise. Works on the
//!                 parsed tree: structural tags mean real HTML, a small allowlist of
//!                 wmrapper tags means "look at the text inside".
//!     markdown    the two converters. renderer walks an html5ever tree and emits
//!                 Markdown text; compiler hands Markdown to comrak and gets HTML
//!                 back. Running both in sequence is what makes half-converted
//!                 content come out uniform.
//!     normalize   the composition, plus the entry guard ensure_html() and the
//!                 empty-paragraph sentinel rules.
//!
//!     dom is the shared substrate: parsing, attribute access, text flattening.
//!     Nothing outside it touches html5ever node internals directly.
//!
//!     This is a pure lib. It powers pagemark-cli but is shell agnostic, no code
//!     here prints, reads env vars or otherwise supposes a shell environment.
//!
//!     The file structure :
//!     .
//!     ├── dom.rs                  # html5ever parsing + tree helpers
//!     ├── detect.rs               # Markdown-in-disguise classifier
//!     ├── markdown
//!     │   ├── renderer.rs         # HTML tree -> Markdown text
//!     │   ├── compiler.rs         # Markdown text -> HTML (comrak)
//!     │   └── mod.rs              # element mapping notes + export_document
//!     ├── normalize.rs            # pipeline + ensure_html + sentinel
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── render                  # renderer against fixture documents
//!     ├── detect                  # classifier judgement calls
//!     ├── normalize               # end to end pipeline + properties
//!     └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we
//!     need to include these in the mod.
//!
//! Library Choices
//!
//!     We never hand-parse either format. html5ever does the HTML side (it is the
//!     Servo parser, so whatever soup a client pastes in, the tree we walk is the
//!     tree a browser would build) and comrak does the Markdown side with the
//!     GitHub extensions turned on (tables, strikethrough, task lists). The one
//!     direction we implement ourselves is tree -> Markdown, because that walk is
//!     where all the product decisions live: which widget tags flatten to their
//!     label, how checkboxes render, what unknown elements degrade to. A generic
//!     converter crate would fight us on exactly those points.

pub mod detect;
pub mod dom;
pub mod markdown;
pub mod normalize;

pub use detect::{looks_like_markdown, looks_like_markdown_with, DetectionRules};
pub use markdown::compiler::{compile_markdown, compile_markdown_with, CompileOptions};
pub use markdown::renderer::{render, render_tree};
pub use markdown::export_document;
pub use normalize::{ensure_html, normalize, normalize_with, NormalizeOptions};

/// Canonical stand-in for "this field is intentionally empty".
///
/// Storage never holds a bare empty string for an HTML field; writers put
/// this sentinel there instead, and every entry point in this crate treats
/// it the same as empty input.
pub const EMPTY_PARAGRAPH: &str = "<p></p>";
