//! Markdown rendering (HTML → Markdown export)
//!
//! Walks a parsed markup tree and emits Markdown.
//! Pipeline: HTML string → rcdom tree → post-order walk → Markdown string
//!
//! Each element renders its children first into `child_text`, then applies
//! its own tag rule to wrap or transform that text. Unknown tags pass their
//! content through untouched, so no text is ever dropped and the walk is
//! total: any tree html5ever can build renders to *some* Markdown.
//!
//! The handful of rules that depend on where a node sits (a `<code>` inside
//! `<pre>`, a `<tr>` inside `<thead>`, the ordinal of an `<li>`) do not chase
//! parent pointers; the parent pushes a [`RenderContext`] down instead. The
//! tree stays immutable and shareable.
//!
//! Text nodes render as their literal text. Markdown metacharacters in prose
//! (a stray `*`, a literal backtick) are left alone; escaping them would also
//! mangle content that really is Markdown, which is the main audience of this
//! renderer. Callers that need byte-exact round trips should keep the
//! original HTML.

use crate::dom;
use crate::EMPTY_PARAGRAPH;
use markup5ever_rcdom::{Handle, NodeData};
use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of three or more newlines are squeezed to a blank line before the
/// result is returned.
static EXCESS_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("newline collapse pattern"));

/// The closed set of tags with a rendering rule. Everything else falls into
/// `Unknown` and passes its content through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Heading(u8),
    Paragraph,
    Bold,
    Italic,
    Strikethrough,
    Code,
    Preformatted,
    Anchor,
    Image,
    BulletList,
    OrderedList,
    ListItem,
    Blockquote,
    LineBreak,
    Rule,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableCell,
    Input,
    /// Editor widget wrappers whose content survives but whose tag does not.
    Widget,
    /// `div`/`span`: pure grouping, no Markdown counterpart.
    Container,
    Unknown,
}

impl TagKind {
    fn from_name(tag: &str) -> TagKind {
        match tag {
            "h1" => TagKind::Heading(1),
            "h2" => TagKind::Heading(2),
            "h3" => TagKind::Heading(3),
            "h4" => TagKind::Heading(4),
            "h5" => TagKind::Heading(5),
            "h6" => TagKind::Heading(6),
            "p" => TagKind::Paragraph,
            "strong" | "b" => TagKind::Bold,
            "em" | "i" => TagKind::Italic,
            "del" | "s" | "strike" => TagKind::Strikethrough,
            "code" => TagKind::Code,
            "pre" => TagKind::Preformatted,
            "a" => TagKind::Anchor,
            "img" => TagKind::Image,
            "ul" => TagKind::BulletList,
            "ol" => TagKind::OrderedList,
            "li" => TagKind::ListItem,
            "blockquote" => TagKind::Blockquote,
            "br" => TagKind::LineBreak,
            "hr" => TagKind::Rule,
            "table" => TagKind::Table,
            "thead" => TagKind::TableHead,
            "tbody" => TagKind::TableBody,
            "tr" => TagKind::TableRow,
            "td" | "th" => TagKind::TableCell,
            "input" => TagKind::Input,
            "mention-component" | "label" | "image-component" => TagKind::Widget,
            "div" | "span" => TagKind::Container,
            _ => TagKind::Unknown,
        }
    }
}

/// Which flavor of list the nearest wrapper is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Ordered,
}

/// Ambient facts a node needs from its ancestors, threaded down the walk
/// instead of read back through parent pointers.
#[derive(Debug, Clone, Copy, Default)]
struct RenderContext {
    /// Inside `<pre>`: inline code stays bare, the fence does the quoting.
    in_pre: bool,
    /// Nearest list wrapper, set by `ul`/`ol` for their items.
    list: Option<ListKind>,
    /// 1-based position among `li` siblings; 0 when not assigned by a list.
    item_number: usize,
    /// Inside `<thead>`: rows append the `---` separator line.
    in_header_row: bool,
}

/// Renders an HTML string to Markdown.
///
/// Total over any input: html5ever recovers from malformed markup and every
/// tag has a rule or the pass-through fallback. The empty string and the
/// empty-paragraph sentinel render to the empty string.
pub fn render(html: &str) -> String {
    if html.is_empty() || html == EMPTY_PARAGRAPH {
        return String::new();
    }
    render_tree(&dom::parse_html(html))
}

/// Renders an already-parsed tree to Markdown. Entry point for callers that
/// hold a tree from [`crate::dom::parse_html`].
pub fn render_tree(root: &Handle) -> String {
    let markdown = render_node(root, RenderContext::default());
    let collapsed = EXCESS_NEWLINES.replace_all(&markdown, "\n\n");
    collapsed.trim().to_string()
}

fn render_node(node: &Handle, cx: RenderContext) -> String {
    match &node.data {
        NodeData::Text { contents } => contents.borrow().to_string(),
        NodeData::Element { name, .. } => render_element(name.local.as_ref(), node, cx),
        NodeData::Document => render_children(node, cx),
        NodeData::Comment { .. }
        | NodeData::Doctype { .. }
        | NodeData::ProcessingInstruction { .. } => String::new(),
    }
}

fn render_children(node: &Handle, cx: RenderContext) -> String {
    let mut out = String::new();
    for child in node.children.borrow().iter() {
        out.push_str(&render_node(child, cx));
    }
    out
}

fn render_element(tag: &str, node: &Handle, cx: RenderContext) -> String {
    match TagKind::from_name(tag) {
        TagKind::Heading(level) => {
            let text = render_children(node, cx);
            format!("\n{} {}\n", "#".repeat(level as usize), text.trim())
        }
        TagKind::Paragraph => {
            let text = render_children(node, cx);
            format!("\n{}\n", text.trim())
        }
        TagKind::Bold => format!("**{}**", render_children(node, cx)),
        TagKind::Italic => format!("*{}*", render_children(node, cx)),
        TagKind::Strikethrough => format!("~~{}~~", render_children(node, cx)),
        TagKind::Code => {
            let text = render_children(node, cx);
            if cx.in_pre {
                text
            } else {
                format!("`{text}`")
            }
        }
        TagKind::Preformatted => {
            let text = render_children(node, RenderContext { in_pre: true, ..cx });
            format!("\n```\n{}\n```\n", text.trim())
        }
        TagKind::Anchor => {
            let text = render_children(node, cx);
            let href = dom::attr(node, "href").unwrap_or_default();
            format!("[{text}]({href})")
        }
        TagKind::Image => {
            let alt = dom::attr(node, "alt").unwrap_or_default();
            let src = dom::attr(node, "src").unwrap_or_default();
            format!("![{alt}]({src})")
        }
        TagKind::BulletList => format!("\n{}", render_list(node, ListKind::Bullet, cx)),
        TagKind::OrderedList => format!("\n{}", render_list(node, ListKind::Ordered, cx)),
        TagKind::ListItem => {
            let text = render_children(node, cx);
            let marker = match cx.list {
                Some(ListKind::Ordered) if cx.item_number > 0 => format!("{}.", cx.item_number),
                _ => "-".to_string(),
            };
            format!("{} {}\n", marker, text.trim())
        }
        TagKind::Blockquote => {
            let text = render_children(node, cx);
            let quoted = text
                .trim()
                .split('\n')
                .map(|line| format!("> {line}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("\n{quoted}\n")
        }
        TagKind::LineBreak => "  \n".to_string(),
        TagKind::Rule => "\n---\n".to_string(),
        TagKind::Table => {
            let text = render_children(node, cx);
            format!("\n{text}\n")
        }
        TagKind::TableHead => render_children(
            node,
            RenderContext {
                in_header_row: true,
                ..cx
            },
        ),
        TagKind::TableBody => render_children(
            node,
            RenderContext {
                in_header_row: false,
                ..cx
            },
        ),
        TagKind::TableRow => render_row(node, cx),
        TagKind::Input => {
            if dom::attr(node, "type").as_deref() == Some("checkbox") {
                if dom::has_attr(node, "checked") {
                    "[x] ".to_string()
                } else {
                    "[ ] ".to_string()
                }
            } else {
                render_children(node, cx)
            }
        }
        TagKind::TableCell | TagKind::Widget | TagKind::Container | TagKind::Unknown => {
            render_children(node, cx)
        }
    }
}

/// Renders a list wrapper's children, assigning each direct `li` child its
/// 1-based ordinal. Other children (whitespace, stray markup) render with the
/// surrounding context and do not advance the count.
fn render_list(node: &Handle, kind: ListKind, cx: RenderContext) -> String {
    let mut out = String::new();
    let mut ordinal = 0;
    for child in node.children.borrow().iter() {
        if dom::element_name(child) == Some("li") {
            ordinal += 1;
            let item_cx = RenderContext {
                list: Some(kind),
                item_number: ordinal,
                ..cx
            };
            out.push_str(&render_node(child, item_cx));
        } else {
            out.push_str(&render_node(child, cx));
        }
    }
    out
}

/// Assembles one table row from its `td`/`th` children. Rows inside `<thead>`
/// are followed by the `---` separator line Markdown tables require.
fn render_row(node: &Handle, cx: RenderContext) -> String {
    let mut cells = Vec::new();
    for child in node.children.borrow().iter() {
        if matches!(dom::element_name(child), Some("td") | Some("th")) {
            cells.push(render_children(child, cx).trim().to_string());
        }
    }
    let mut row = format!("| {} |\n", cells.join(" | "));
    if cx.in_header_row {
        let separator = vec!["---"; cells.len()];
        row.push_str(&format!("| {} |\n", separator.join(" | ")));
    }
    row
}
