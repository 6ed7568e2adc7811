//! Scalar "Label: value" cells (PIN, status, year built, ...).

use crate::page::Page;
use crate::record::Record;
use crate::text::{collapse_whitespace, label_value};

/// A labelled cell and the record key its value is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabel {
    pub label: &'static str,
    pub key: &'static str,
    /// Collapse internal whitespace of the value (multi-line cells).
    pub collapse: bool,
}

const fn label(label: &'static str, key: &'static str) -> FieldLabel {
    FieldLabel {
        label,
        key,
        collapse: false,
    }
}

/// Labels in priority order. "Adjusted Year Built:" precedes "Year Built:"
/// since the latter is a substring of the former.
pub const FIELD_LABELS: &[FieldLabel] = &[
    label("PIN/Schedule", "pin"),
    label("status:", "status"),
    label("AIN/Parcel ID:", "ain"),
    label("Property Type:", "property_type"),
    FieldLabel {
        label: "Neighborhood:",
        key: "neighborhood",
        collapse: true,
    },
    label("Subdivision Name:", "subdivision_name"),
    label("Adjusted Year Built:", "adjusted_year_built"),
    label("Year Built:", "year_built"),
];

/// Match one cell's trimmed text against [`FIELD_LABELS`].
pub fn match_cell(text: &str) -> Option<(&'static str, String)> {
    let field = FIELD_LABELS.iter().find(|f| text.contains(f.label))?;
    let value = label_value(text);
    let value = if field.collapse {
        collapse_whitespace(value)
    } else {
        value.to_string()
    };
    Some((field.key, value))
}

/// Scan every cell of `page` and store labelled values in `record`.
///
/// Cells are visited in document order, so an inner cell overrides the
/// layout cell that wraps it.
pub fn extract_fields(page: &Page, record: &mut Record) {
    for text in page.cell_texts() {
        if let Some((key, value)) = match_cell(&text) {
            record.insert(key, value);
        }
    }
}
