/// CSS length value, currently only `px`,
/// but keep this extensible for `em`, `%`, etc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
}

/// Parse a px length (`"12px"`, bare `"12"`). Fractional parts are
/// truncated; box metrics are whole-px reads.
pub fn parse_length(value: &str) -> Option<Length> {
    let v = value.trim();
    let v = v.strip_suffix("px").unwrap_or(v).trim();
    let n = v.parse::<f32>().ok()?;
    if !n.is_finite() {
        return None;
    }
    Some(Length::Px(n.trunc()))
}

/// The zero-normalization policy: absent or non-numeric values contribute
/// nothing to an offset instead of poisoning the whole rectangle.
pub fn px_or_zero(value: Option<&str>) -> f32 {
    match value.and_then(parse_length) {
        Some(Length::Px(v)) => v,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_px_and_bare_numbers() {
        assert_eq!(parse_length("12px"), Some(Length::Px(12.0)));
        assert_eq!(parse_length("  7  "), Some(Length::Px(7.0)));
        assert_eq!(parse_length("-3px"), Some(Length::Px(-3.0)));
        assert_eq!(parse_length("px"), None);
        assert_eq!(parse_length("12em"), None);
    }

    #[test]
    fn truncates_fractional_px() {
        assert_eq!(parse_length("12.9px"), Some(Length::Px(12.0)));
        assert_eq!(parse_length("-1.5px"), Some(Length::Px(-1.0)));
    }

    #[test]
    fn non_numeric_reads_as_zero() {
        assert_eq!(px_or_zero(Some("auto")), 0.0);
        assert_eq!(px_or_zero(Some("inherit")), 0.0);
        assert_eq!(px_or_zero(Some("")), 0.0);
        assert_eq!(px_or_zero(None), 0.0);
        assert_eq!(px_or_zero(Some("10px")), 10.0);
    }
}
