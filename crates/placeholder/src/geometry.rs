use css::{box_metrics, content_size, offset_position};

/// Overlay rectangle in CSS px, in the same coordinate space as the
/// target's offset position (relative to its nearest positioned ancestor).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Compute the overlay rectangle for a target from its declarations.
///
/// Deterministic pure function of the declarations passed in; nothing is
/// cached, so it reflects live styling at call time. Each box metric reads
/// as zero when absent or non-numeric.
pub fn overlay_rect(style: &[(String, String)]) -> OverlayRect {
    let metrics = box_metrics(style);
    let (left, top) = offset_position(style);
    let (width, height) = content_size(style);

    OverlayRect {
        left: left + metrics.margin_left + metrics.padding_left + metrics.border_left_width,
        top: top + metrics.margin_top + metrics.padding_top + metrics.border_top_width,
        width,
        height,
    }
}
