use crate::types::Node;
use crate::utils::attr;
use std::fmt::Write;

const PREVIEW_STYLES: usize = 4;
const PREVIEW_CHARS: usize = 40;

/// Indented one-line-per-node dump of a subtree. Meant for demos and test
/// failure output, not serialization.
pub fn outline(root: &Node) -> Vec<String> {
    let mut out = Vec::new();
    walk(root, 0, &mut out);
    out
}

fn walk(node: &Node, depth: usize, out: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Document { children, .. } => {
            out.push(format!("{indent}#document"));
            for c in children {
                walk(c, depth + 1, out);
            }
        }
        Node::Element {
            name,
            style,
            children,
            ..
        } => {
            let mut line = format!("{indent}<{name}");
            if let Some(id) = attr(node, "id") {
                let _ = write!(&mut line, " id={id}");
            }
            if let Some(class) = attr(node, "class") {
                let _ = write!(&mut line, " class={class}");
            }
            for marker in ["for", "data-placeholder-for", "data-placeholder"] {
                if let Some(v) = attr(node, marker) {
                    let _ = write!(&mut line, " {marker}={v}");
                }
            }
            if !style.is_empty() {
                let _ = write!(&mut line, r#" style="{}""#, first_styles(style));
            }
            line.push('>');
            out.push(line);
            for c in children {
                walk(c, depth + 1, out);
            }
        }
        Node::Text { text, .. } => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                let preview: String = trimmed.chars().take(PREVIEW_CHARS).collect();
                out.push(format!("{indent}\"{preview}\""));
            }
        }
        Node::Comment { .. } => {}
    }
}

fn first_styles(style: &[(String, String)]) -> String {
    let mut out = String::new();
    for (i, (k, v)) in style.iter().take(PREVIEW_STYLES).enumerate() {
        if i != 0 {
            out.push(' ');
        }
        let _ = write!(&mut out, "{k}: {v};");
    }
    if style.len() > PREVIEW_STYLES {
        out.push_str(" …");
    }
    out
}
