//! DOM query helpers over `markup5ever_rcdom`
//!
//! Small document-order traversal utilities covering exactly the lookups
//! the extraction layer needs: class-token collection, `textContent`-style
//! text gathering, parent access, and element-only child iteration.
//! Fragments are one entity's worth of markup, so every query is a plain
//! linear scan with no indexing structure.

use markup5ever_rcdom::{Handle, NodeData};

/// Collect every element below `root` whose `class` attribute contains
/// `class_name` as a whitespace-separated token, in document order.
pub fn elements_by_class(root: &Handle, class_name: &str) -> Vec<Handle> {
    let mut found = Vec::new();
    for child in root.children.borrow().iter() {
        collect_by_class(child, class_name, &mut found);
    }
    found
}

fn collect_by_class(node: &Handle, class_name: &str, found: &mut Vec<Handle>) {
    if has_class(node, class_name) {
        found.push(node.clone());
    }
    for child in node.children.borrow().iter() {
        collect_by_class(child, class_name, found);
    }
}

/// Whether `node` is an element carrying `class_name` as a class token.
pub fn has_class(node: &Handle, class_name: &str) -> bool {
    attribute(node, "class")
        .map_or(false, |value| value.split_whitespace().any(|token| token == class_name))
}

/// An element attribute's value.
pub fn attribute(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Concatenated text of every descendant text node, unnormalized.
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, text: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        text.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, text);
    }
}

/// The parent node, if still alive.
pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(|weak| weak.upgrade());
    node.parent.set(weak);
    parent
}

/// Element-only children, in document order.
pub fn element_children(node: &Handle) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| matches!(&child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// Whether `node` is an element with the given local name.
pub fn is_element_named(node: &Handle, tag: &str) -> bool {
    matches!(&node.data, NodeData::Element { name, .. } if name.local.as_ref() == tag)
}

/// Whether any descendant element has the given local name.
pub fn has_descendant_tag(node: &Handle, tag: &str) -> bool {
    node.children
        .borrow()
        .iter()
        .any(|child| is_element_named(child, tag) || has_descendant_tag(child, tag))
}
