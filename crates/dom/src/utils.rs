use crate::types::{Id, Node};

pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// Set or replace an attribute. The stored key keeps its original casing on
/// replace; lookups are case-insensitive either way.
pub fn set_attr(node: &mut Node, name: &str, value: Option<String>) {
    if let Node::Element { attributes, .. } = node {
        match attributes.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
            Some((_, v)) => *v = value,
            None => attributes.push((name.to_string(), value)),
        }
    }
}

pub fn remove_attr(node: &mut Node, name: &str) -> bool {
    if let Node::Element { attributes, .. } = node {
        let before = attributes.len();
        attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        return attributes.len() != before;
    }
    false
}

/// Inline style declarations of an element; empty for any other node kind.
pub fn element_style(node: &Node) -> &[(String, String)] {
    match node {
        Node::Element { style, .. } => style,
        _ => &[],
    }
}

/// Last declaration wins, matching how a declaration list cascades onto
/// itself.
pub fn style_value<'a>(node: &'a Node, property: &str) -> Option<&'a str> {
    match node {
        Node::Element { style, .. } => style
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(property))
            .map(|(_, v)| v.as_str()),
        _ => None,
    }
}

pub fn set_style(node: &mut Node, property: &str, value: &str) {
    if let Node::Element { style, .. } = node {
        match style.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(property)) {
            Some((_, v)) => *v = value.to_string(),
            None => style.push((property.to_string(), value.to_string())),
        }
    }
}

pub fn remove_style(node: &mut Node, property: &str) -> bool {
    if let Node::Element { style, .. } = node {
        let before = style.len();
        style.retain(|(k, _)| !k.eq_ignore_ascii_case(property));
        return style.len() != before;
    }
    false
}

/// Collect the ids of elements carrying a `placeholder` attribute, in
/// document order. Tag filtering happens later; the selection itself is
/// attribute-driven.
pub fn collect_placeholder_candidates(node: &Node, out: &mut Vec<Id>) {
    match node {
        Node::Element { children, .. } => {
            if has_attr(node, "placeholder") {
                out.push(node.id());
            }
            for c in children {
                collect_placeholder_candidates(c, out);
            }
        }
        Node::Document { children, .. } => {
            for c in children {
                collect_placeholder_candidates(c, out);
            }
        }
        _ => {}
    }
}
