//! Headless DOM substrate for the placeholder overlay engine.
//!
//! Documents are built programmatically: there is no HTML parser here.
//! The tree carries exactly what the overlay engine needs (element names,
//! attributes, inline style declarations, structural identity) and nothing
//! else.

mod debug;
mod tree;
mod types;
mod utils;

pub use debug::outline;
pub use tree::DomTree;
pub use types::{Id, Node, NodeId};
pub use utils::{
    attr, collect_placeholder_candidates, element_style, has_attr, remove_attr, remove_style,
    set_attr, set_style, style_value,
};
