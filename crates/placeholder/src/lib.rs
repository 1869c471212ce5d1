//! # placeholder
//!
//! Emulates the native text-input placeholder hint for hosts that do not
//! render it (or when a caller forces emulation anyway) by inserting a
//! synthetic `<label>` overlay in front of each target input and keeping it
//! in sync with the input's value and focus state.
//!
//! The crate decomposes into four cooperating pieces:
//! - [`Environment`] / [`native_placeholder_support`]: capability detection,
//!   re-probed on every call rather than cached
//! - [`overlay_rect`]: pure geometry from the target's box model
//! - [`OverlayStore`] / [`emulate`]: overlay lifecycle, idempotent across
//!   repeated invocations on the same target
//! - [`dispatch`]: the focus/blur/value-change state machine
//!
//! ## Design Principles
//!
//! Everything degrades silently: empty selections, unsupported element
//! types and malformed style values skip rather than fail, because the
//! worst case is a misplaced hint, not broken input handling.
//!
//! The target ↔ overlay association lives in the [`OverlayStore`] mapping,
//! not in DOM re-queries or handler closures, so ownership (one target
//! drives exactly one overlay) is structural.

mod capability;
mod config;
mod events;
mod geometry;
mod overlay;

pub use capability::{Environment, native_placeholder_support, should_emulate};
pub use config::Options;
pub use events::{ChangeDetection, EventBinding, OverlayState, Signal, dispatch};
pub use geometry::{OverlayRect, overlay_rect};
pub use overlay::{
    FOCUS_CLASS, IDLE_CLASS, MARKER_ATTR, Outcome, OverlayHandle, OverlayStore, SAVED_TEXT_ATTR,
    emulate, overlay_visible,
};
