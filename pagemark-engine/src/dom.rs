//! Markup tree access layer
//!
//! Wraps html5ever/rcdom behind the small vocabulary the rest of the crate
//! needs: parse a string into a tree, read tag names and attributes, flatten
//! text content, and collect the set of tags present. html5ever gives us
//! browser-grade error recovery, so parsing is total; malformed input just
//! produces the tree a browser would have built.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::collections::HashSet;

/// Parses an HTML fragment (or full document) into an rcdom tree and returns
/// the document node. Never fails; recovery mirrors what a browser does.
pub fn parse_html(html: &str) -> Handle {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    dom.document
}

/// Lower-cased element name, or `None` for non-element nodes.
pub fn element_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Looks up an attribute value on an element node.
pub fn attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attribute| attribute.name.local.as_ref() == attr_name)
            .map(|attribute| attribute.value.to_string()),
        _ => None,
    }
}

/// True when the attribute is present at all, regardless of its value.
/// HTML boolean attributes (`checked`, `disabled`, ...) carry their meaning
/// by presence, so `checked=""` still counts.
pub fn has_attr(node: &Handle, attr_name: &str) -> bool {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .any(|attribute| attribute.name.local.as_ref() == attr_name),
        _ => false,
    }
}

/// Text content of the whole subtree with a line break preserved between
/// block-level segments. `<br>` also contributes a line break. Inline markup
/// dissolves into the surrounding text.
pub fn flattened_text(root: &Handle) -> String {
    let mut out = String::new();
    collect_text(root, &mut out);
    out
}

fn collect_text(node: &Handle, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { name, .. } => {
            let tag = name.local.as_ref();
            if tag == "br" {
                out.push('\n');
                return;
            }
            let block = is_block_tag(tag);
            if block && !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
            if block && !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
        }
        _ => {
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
        }
    }
}

fn is_block_tag(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "ul"
            | "ol"
            | "li"
            | "blockquote"
            | "pre"
            | "table"
            | "thead"
            | "tbody"
            | "tr"
            | "td"
            | "th"
            | "hr"
    )
}

/// Distinct tag names appearing anywhere in the tree.
///
/// html5ever always supplies the `html`/`head`/`body` scaffolding when a bare
/// fragment is parsed as a document; those never count as content tags here.
pub fn tag_names(root: &Handle) -> HashSet<String> {
    let mut names = HashSet::new();
    collect_tag_names(root, &mut names);
    names
}

fn collect_tag_names(node: &Handle, names: &mut HashSet<String>) {
    if let NodeData::Element { name, .. } = &node.data {
        let tag = name.local.as_ref();
        if !matches!(tag, "html" | "head" | "body") {
            names.insert(tag.to_string());
        }
    }
    for child in node.children.borrow().iter() {
        collect_tag_names(child, names);
    }
}
