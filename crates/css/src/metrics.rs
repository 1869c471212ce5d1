use crate::values::px_or_zero;

/// Top/left-side box metrics in CSS px, the sides that matter for aligning
/// an overlay with an element's content box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxMetrics {
    pub margin_top: f32,
    pub margin_left: f32,
    pub padding_top: f32,
    pub padding_left: f32,
    pub border_top_width: f32,
    pub border_left_width: f32,
}

impl BoxMetrics {
    pub fn zero() -> Self {
        BoxMetrics {
            margin_top: 0.0,
            margin_left: 0.0,
            padding_top: 0.0,
            padding_left: 0.0,
            border_top_width: 0.0,
            border_left_width: 0.0,
        }
    }
}

// Last declaration wins, property names compared ASCII case-insensitively.
fn lookup<'a>(style: &'a [(String, String)], property: &str) -> Option<&'a str> {
    style
        .iter()
        .rev()
        .find(|(k, _)| k.eq_ignore_ascii_case(property))
        .map(|(_, v)| v.as_str())
}

/// Fold an element's declarations into its top/left box metrics. Every read
/// goes through the zero-normalization policy.
pub fn box_metrics(style: &[(String, String)]) -> BoxMetrics {
    BoxMetrics {
        margin_top: px_or_zero(lookup(style, "margin-top")),
        margin_left: px_or_zero(lookup(style, "margin-left")),
        padding_top: px_or_zero(lookup(style, "padding-top")),
        padding_left: px_or_zero(lookup(style, "padding-left")),
        border_top_width: px_or_zero(lookup(style, "border-top-width")),
        border_left_width: px_or_zero(lookup(style, "border-left-width")),
    }
}

/// Offset position relative to the nearest positioned ancestor: `(left, top)`.
pub fn offset_position(style: &[(String, String)]) -> (f32, f32) {
    (
        px_or_zero(lookup(style, "left")),
        px_or_zero(lookup(style, "top")),
    )
}

/// Content box size: `(width, height)`.
pub fn content_size(style: &[(String, String)]) -> (f32, f32) {
    (
        px_or_zero(lookup(style, "width")),
        px_or_zero(lookup(style, "height")),
    )
}

/// Raw value lookup for properties copied verbatim rather than parsed
/// (`line-height`, `font-size`).
pub fn passthrough<'a>(style: &'a [(String, String)], property: &str) -> Option<&'a str> {
    lookup(style, property)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn folds_declarations_into_metrics() {
        let style = decls(&[
            ("margin-left", "4px"),
            ("margin-top", "2px"),
            ("padding-left", "6px"),
            ("border-left-width", "1px"),
        ]);
        let m = box_metrics(&style);
        assert_eq!(m.margin_left, 4.0);
        assert_eq!(m.margin_top, 2.0);
        assert_eq!(m.padding_left, 6.0);
        assert_eq!(m.padding_top, 0.0);
        assert_eq!(m.border_left_width, 1.0);
        assert_eq!(m.border_top_width, 0.0);
    }

    #[test]
    fn unparsable_metrics_read_as_zero() {
        let style = decls(&[("margin-left", "auto"), ("padding-top", "thick")]);
        let m = box_metrics(&style);
        assert_eq!(m.margin_left, 0.0);
        assert_eq!(m.padding_top, 0.0);
    }

    #[test]
    fn last_declaration_wins() {
        let style = decls(&[("left", "5px"), ("left", "9px")]);
        assert_eq!(offset_position(&style), (9.0, 0.0));
    }

    #[test]
    fn content_size_reads_width_and_height() {
        let style = decls(&[("width", "100px"), ("height", "20px")]);
        assert_eq!(content_size(&style), (100.0, 20.0));
    }

    #[test]
    fn passthrough_returns_the_raw_string() {
        let style = decls(&[("line-height", "1.4"), ("font-size", "13px")]);
        assert_eq!(passthrough(&style, "line-height"), Some("1.4"));
        assert_eq!(passthrough(&style, "font-size"), Some("13px"));
        assert_eq!(passthrough(&style, "color"), None);
    }
}
