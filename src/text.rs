//! Text normalization shared by the parsers.

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Turn a column or field label into a record key.
///
/// `"Sale  Date "` becomes `"sale_date"`.
pub fn normalize_field_name(label: &str) -> String {
    collapse_whitespace(label).to_lowercase().replace(' ', "_")
}

/// Everything after the first `:` of a `"Label: value"` cell, trimmed.
///
/// Returns an empty string when the cell has no colon.
pub fn label_value(text: &str) -> &str {
    text.split_once(':').map_or("", |(_, value)| value.trim())
}
