//! Overlay lifecycle: creation, idempotent re-attach, and the DOM-side
//! helpers the event machine shares.

use crate::capability::{Environment, should_emulate};
use crate::config::Options;
use crate::events::{ChangeDetection, EventBinding, OverlayState};
use crate::geometry::{OverlayRect, overlay_rect};
use css::passthrough;
use dom::{
    DomTree, Id, Node, attr, element_style, remove_attr, remove_style, set_attr, set_style,
    style_value,
};
use std::collections::HashMap;

/// Style class while the target is unfocused.
pub const IDLE_CLASS: &str = "placeholder";
/// Style class while the target is focused (unless `focus_clear` hides the
/// overlay outright).
pub const FOCUS_CLASS: &str = "placeholder-focus";
/// Marker attribute on the overlay carrying the target's element id.
pub const MARKER_ATTR: &str = "data-placeholder-for";
/// Copy of the consumed placeholder text, kept on the target for external
/// reuse after the native attribute is removed.
pub const SAVED_TEXT_ATTR: &str = "data-placeholder";

const DEFAULT_OVERLAY_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("cursor", "text"),
    ("overflow", "hidden"),
];

const SUPPORTED_TYPES: &[&str] = &[
    "text", "password", "email", "datetime", "number", "search", "tel", "url",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayHandle {
    pub node: Id,
    pub target: Id,
}

/// Owns the target-identifier → overlay mapping and the per-target event
/// bindings. Re-attach goes through this mapping, never through a document
/// re-query.
#[derive(Clone, Debug, Default)]
pub struct OverlayStore {
    overlays: HashMap<String, OverlayHandle>,
    bindings: HashMap<Id, EventBinding>,
    generated_ids: u64,
}

impl OverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay_for(&self, element_id: &str) -> Option<OverlayHandle> {
        self.overlays.get(element_id).copied()
    }

    pub fn binding(&self, target: Id) -> Option<&EventBinding> {
        self.bindings.get(&target)
    }

    pub(crate) fn binding_mut(&mut self, target: Id) -> Option<&mut EventBinding> {
        self.bindings.get_mut(&target)
    }

    pub fn target_of_overlay(&self, overlay: Id) -> Option<Id> {
        self.bindings
            .values()
            .find(|b| b.overlay == overlay)
            .map(|b| b.target)
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    // Monotonic, so rapid consecutive attaches can never collide.
    fn next_element_id(&mut self) -> String {
        self.generated_ids += 1;
        format!("placeholder-{}", self.generated_ids)
    }
}

/// Result of one [`emulate`] invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Native rendering suffices; the selection was left untouched.
    Native,
    /// `attached` targets now carry an overlay (created or repositioned),
    /// `skipped` were rejected (unsupported type, unknown node, no parent).
    Emulated { attached: usize, skipped: usize },
}

/// Entry operation: run placeholder emulation over a selection of candidate
/// elements.
///
/// Invoking this twice for the same target repositions the existing overlay
/// instead of creating a second one; event bindings from the first attach
/// stay valid. One target's failure never aborts the rest of the selection.
pub fn emulate(
    dom: &mut DomTree,
    targets: &[Id],
    env: &Environment,
    options: &Options,
    store: &mut OverlayStore,
) -> Outcome {
    if targets.is_empty() {
        return Outcome::Emulated {
            attached: 0,
            skipped: 0,
        };
    }
    if !should_emulate(env, options) {
        log::trace!(target: "placeholder.attach", "native support, selection returned unchanged");
        return Outcome::Native;
    }

    let mut attached = 0;
    let mut skipped = 0;
    for &target in targets {
        if attach(dom, target, env, options, store) {
            attached += 1;
        } else {
            skipped += 1;
        }
    }
    Outcome::Emulated { attached, skipped }
}

fn attach(
    dom: &mut DomTree,
    target: Id,
    env: &Environment,
    options: &Options,
    store: &mut OverlayStore,
) -> bool {
    let Some(node) = dom.node(target) else {
        log::trace!(target: "placeholder.attach", "node {target:?} not in document, skipped");
        return false;
    };
    if !supported_input(node) {
        log::trace!(target: "placeholder.attach", "node {target:?} is not an emulatable input, skipped");
        return false;
    }

    let existing_id = attr(node, "id")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let placeholder_text = attr(node, "placeholder").unwrap_or("").to_string();
    let style = element_style(node);
    let rect = overlay_rect(style);
    let line_height = passthrough(style, "line-height").map(str::to_string);
    let font_size = passthrough(style, "font-size").map(str::to_string);

    let element_id = match existing_id {
        Some(id) => id,
        None => {
            let generated = store.next_element_id();
            match dom.node_mut(target) {
                Some(n) => set_attr(n, "id", Some(generated.clone())),
                None => return false,
            }
            generated
        }
    };

    if store.overlays.contains_key(&element_id) {
        return reset_overlay(dom, store, &element_id);
    }

    // First attach: keep the text reachable before the native attribute goes.
    if let Some(n) = dom.node_mut(target) {
        set_attr(n, SAVED_TEXT_ATTR, Some(placeholder_text.clone()));
    }

    let overlay_id = dom.alloc_id();
    let text_id = dom.alloc_id();
    let mut overlay = Node::Element {
        id: overlay_id,
        name: "label".to_string(),
        attributes: vec![
            (MARKER_ATTR.to_string(), Some(element_id.clone())),
            ("for".to_string(), Some(element_id.clone())),
            ("class".to_string(), Some(IDLE_CLASS.to_string())),
        ],
        style: Vec::new(),
        children: vec![Node::Text {
            id: text_id,
            text: placeholder_text,
        }],
    };

    for (property, value) in DEFAULT_OVERLAY_STYLE {
        set_style(&mut overlay, property, value);
    }
    for (property, value) in &options.style {
        set_style(&mut overlay, property, value);
    }
    // The overlay's own box must not shift the computed alignment.
    set_style(&mut overlay, "margin", "0");
    set_style(&mut overlay, "padding", "0");
    if let Some(lh) = line_height {
        set_style(&mut overlay, "line-height", &lh);
    }
    if let Some(fs) = font_size {
        set_style(&mut overlay, "font-size", &fs);
    }
    apply_rect(&mut overlay, rect);

    if !dom.insert_before(target, overlay) {
        log::trace!(target: "placeholder.attach", "node {target:?} has no parent, skipped");
        return false;
    }

    let value_empty = live_value(dom, target).is_empty();
    store.bindings.insert(
        target,
        EventBinding {
            target,
            overlay: overlay_id,
            focus_clear: options.focus_clear,
            change_detection: ChangeDetection::for_environment(env),
            state: if value_empty {
                OverlayState::IdleEmpty
            } else {
                OverlayState::IdleFilled
            },
        },
    );
    store
        .overlays
        .insert(element_id.clone(), OverlayHandle { node: overlay_id, target });

    if let Some(n) = dom.node_mut(target) {
        remove_attr(n, "placeholder");
    }
    if !value_empty {
        set_overlay_visible(dom, overlay_id, false);
    }

    log::trace!(target: "placeholder.attach", "overlay {overlay_id:?} attached for #{element_id}");
    true
}

// Re-attach path: geometry and visibility refresh only, no event rebind.
fn reset_overlay(dom: &mut DomTree, store: &mut OverlayStore, element_id: &str) -> bool {
    let Some(handle) = store.overlays.get(element_id).copied() else {
        return false;
    };
    let Some(rect) = dom.node(handle.target).map(|n| overlay_rect(element_style(n))) else {
        return false;
    };

    if let Some(overlay) = dom.node_mut(handle.node) {
        apply_rect(overlay, rect);
    }
    set_overlay_class(dom, handle.node, IDLE_CLASS);

    let value_empty = live_value(dom, handle.target).is_empty();
    set_overlay_visible(dom, handle.node, value_empty);
    if let Some(binding) = store.bindings.get_mut(&handle.target) {
        binding.state = if value_empty {
            OverlayState::IdleEmpty
        } else {
            OverlayState::IdleFilled
        };
    }

    log::trace!(target: "placeholder.attach", "overlay for #{element_id} repositioned");
    true
}

fn supported_input(node: &Node) -> bool {
    let Node::Element { name, .. } = node else {
        return false;
    };
    if !name.eq_ignore_ascii_case("input") {
        return false;
    }
    match attr(node, "type").map(str::trim).filter(|t| !t.is_empty()) {
        None => true, // missing type defaults to text
        Some(t) => SUPPORTED_TYPES.iter().any(|s| t.eq_ignore_ascii_case(s)),
    }
}

fn apply_rect(overlay: &mut Node, rect: OverlayRect) {
    set_style(overlay, "left", &px(rect.left));
    set_style(overlay, "top", &px(rect.top));
    set_style(overlay, "width", &px(rect.width));
    set_style(overlay, "height", &px(rect.height));
}

fn px(v: f32) -> String {
    format!("{v}px")
}

pub(crate) fn live_value(dom: &DomTree, target: Id) -> String {
    dom.node(target)
        .and_then(|n| attr(n, "value"))
        .unwrap_or("")
        .to_string()
}

pub(crate) fn set_overlay_visible(dom: &mut DomTree, overlay: Id, visible: bool) {
    if let Some(node) = dom.node_mut(overlay) {
        if visible {
            remove_style(node, "display");
        } else {
            set_style(node, "display", "none");
        }
    }
}

pub(crate) fn set_overlay_class(dom: &mut DomTree, overlay: Id, class: &str) {
    if let Some(node) = dom.node_mut(overlay) {
        set_attr(node, "class", Some(class.to_string()));
    }
}

/// Is the overlay currently shown? Missing overlays read as hidden.
pub fn overlay_visible(dom: &DomTree, overlay: Id) -> bool {
    dom.node(overlay)
        .is_some_and(|n| style_value(n, "display") != Some("none"))
}
