//! Style value parsing and box metrics.
//!
//! Everything here operates on flat `(property, value)` declaration lists
//! and is deliberately forgiving: a missing or unparsable length reads as
//! zero so overlay positioning stays stable under stylesheets that never
//! reset the box model.

mod metrics;
mod values;

pub use metrics::{BoxMetrics, box_metrics, content_size, offset_position, passthrough};
pub use values::{Length, parse_length, px_or_zero};
