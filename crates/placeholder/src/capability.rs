//! Host capability detection.
//!
//! The host is consumed as data: which properties a freshly created input
//! element recognizes, and whether value-change events fire reliably for
//! programmatic edits. Detection is a pure query evaluated per call; a
//! cached answer could go stale if the environment changes between calls.

use crate::config::Options;
use std::collections::BTreeSet;

/// Host profile the engine runs against.
#[derive(Clone, Debug)]
pub struct Environment {
    input_properties: BTreeSet<String>,
    reliable_value_events: bool,
}

impl Environment {
    pub fn new(
        input_properties: impl IntoIterator<Item = String>,
        reliable_value_events: bool,
    ) -> Self {
        Self {
            input_properties: input_properties.into_iter().collect(),
            reliable_value_events,
        }
    }

    /// A host that renders placeholders natively and delivers `input`
    /// events for every value change.
    pub fn modern() -> Self {
        Self::new(
            ["type", "value", "placeholder"].map(String::from),
            true,
        )
    }

    /// A host without native placeholder rendering whose value-change
    /// notification only covers property writes, not all edits.
    pub fn legacy() -> Self {
        Self::new(["type", "value"].map(String::from), false)
    }

    /// Does a freshly created input element on this host recognize
    /// `property`?
    pub fn recognizes_input_property(&self, property: &str) -> bool {
        self.input_properties.contains(property)
    }

    pub fn reliable_value_events(&self) -> bool {
        self.reliable_value_events
    }
}

/// Probe for native placeholder rendering. Pure query, no side effects.
pub fn native_placeholder_support(env: &Environment) -> bool {
    env.recognizes_input_property("placeholder")
}

/// Emulation proceeds when the host lacks native support, or when the
/// caller forces it with `cross_mode`.
pub fn should_emulate(env: &Environment, options: &Options) -> bool {
    !native_placeholder_support(env) || options.cross_mode
}
