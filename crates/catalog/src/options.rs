/// Sentinel filter value meaning "do not filter on this field".
pub const ANY: &str = "any";

/// One entry of a filter drop-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption<'a> {
    /// Value submitted with the filter form: an identifier, or [`ANY`].
    pub value: &'a str,
    /// Human-readable text.
    pub label: &'a str,
}
