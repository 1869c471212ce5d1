/// Per-invocation options. Absent configuration is never an error; the
/// defaults apply field by field.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Force emulation even when the host renders placeholders natively.
    pub cross_mode: bool,

    /// On focus, hide the overlay entirely instead of switching it to the
    /// focused style class.
    pub focus_clear: bool,

    /// Caller style overrides, merged over the default overlay style
    /// (`position: absolute; cursor: text; overflow: hidden`). Computed
    /// geometry always wins over overrides for position and size.
    pub style: Vec<(String, String)>,
}
