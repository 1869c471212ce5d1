//! The per-target state machine driving overlay visibility and class.
//!
//! Handlers are not closures over the overlay; signals are delivered to a
//! single dispatch entry and resolved through the store's bindings, so the
//! target → overlay association stays explicit.

use crate::capability::Environment;
use crate::overlay::{
    FOCUS_CLASS, IDLE_CLASS, OverlayStore, live_value, set_overlay_class, set_overlay_visible,
};
use dom::{DomTree, Id};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayState {
    /// Unfocused, value empty: overlay shown with the idle class.
    IdleEmpty,
    /// Unfocused, value present: overlay hidden.
    IdleFilled,
    /// Focused: hidden under `focus_clear`, focus-class otherwise.
    Focused,
}

/// How value changes reach the machine, fixed per target at bind time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeDetection {
    /// The host delivers `Input` signals for edits.
    InputEvent,
    /// The host only notifies on property writes; reacts solely to the
    /// `value` property.
    PropertyObservation,
}

impl ChangeDetection {
    pub fn for_environment(env: &Environment) -> Self {
        if env.reliable_value_events() {
            ChangeDetection::InputEvent
        } else {
            ChangeDetection::PropertyObservation
        }
    }
}

/// One target's wiring, created on first attach and live for the target's
/// document lifetime. There is no unbind.
#[derive(Clone, Debug)]
pub struct EventBinding {
    pub target: Id,
    pub overlay: Id,
    pub focus_clear: bool,
    pub change_detection: ChangeDetection,
    pub state: OverlayState,
}

/// Host signals the machine reacts to. `Focus`, `Blur`, `Input` and
/// `PropertyChange` address the target node; `ContextMenu` addresses the
/// overlay node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    Focus,
    Blur,
    Input,
    PropertyChange { property: String },
    ContextMenu,
}

/// Deliver one host signal. Returns whether the signal was consumed; for
/// `ContextMenu` a `true` result means the host should suppress its default
/// menu. Unknown nodes are ignored silently.
pub fn dispatch(dom: &mut DomTree, store: &mut OverlayStore, node: Id, signal: Signal) -> bool {
    // A secondary click lands on the overlay; it activates the target the
    // same way a primary click would.
    let (node, signal) = match signal {
        Signal::ContextMenu => {
            let Some(target) = store.target_of_overlay(node) else {
                return false;
            };
            log::trace!(target: "placeholder.events", "context menu on overlay forwarded to {target:?}");
            (target, Signal::Focus)
        }
        other => (node, other),
    };

    let value_empty = live_value(dom, node).is_empty();
    let Some(binding) = store.binding_mut(node) else {
        return false;
    };
    log::trace!(target: "placeholder.events", "{signal:?} for {node:?} (value_empty: {value_empty})");

    match signal {
        Signal::Focus => {
            binding.state = OverlayState::Focused;
            if binding.focus_clear {
                set_overlay_visible(dom, binding.overlay, false);
            } else {
                set_overlay_class(dom, binding.overlay, FOCUS_CLASS);
                set_overlay_visible(dom, binding.overlay, value_empty);
            }
            true
        }
        Signal::Blur => {
            // Reappearance after defocus is unconditional on `focus_clear`.
            binding.state = if value_empty {
                OverlayState::IdleEmpty
            } else {
                OverlayState::IdleFilled
            };
            set_overlay_class(dom, binding.overlay, IDLE_CLASS);
            set_overlay_visible(dom, binding.overlay, value_empty);
            true
        }
        Signal::Input => {
            value_changed(dom, binding, value_empty);
            true
        }
        Signal::PropertyChange { property } => {
            if binding.change_detection != ChangeDetection::PropertyObservation {
                return false;
            }
            if property != "value" {
                return false;
            }
            value_changed(dom, binding, value_empty);
            true
        }
        Signal::ContextMenu => false, // rewritten to Focus above
    }
}

// Visibility law: visible iff the value is empty and the target is not in a
// focus_clear-suppressed focus.
fn value_changed(dom: &mut DomTree, binding: &mut EventBinding, value_empty: bool) {
    if binding.state != OverlayState::Focused {
        binding.state = if value_empty {
            OverlayState::IdleEmpty
        } else {
            OverlayState::IdleFilled
        };
    }
    let suppressed = binding.state == OverlayState::Focused && binding.focus_clear;
    set_overlay_visible(dom, binding.overlay, value_empty && !suppressed);
}
