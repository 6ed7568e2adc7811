//! Header-based table classification.
//!
//! Assessor pages carry a dozen tables with no ids or stable classes; the
//! only reliable signal is the text of each table's `tableheaders` row.
//!
//! # Architecture
//!
//! - [`ClassificationRule`]: required header substrings, a structural guard,
//!   the [`Strategy`] to parse with, and the record key to store under
//! - [`RULES`]: the rule set, in priority order
//! - [`TableClassifier`]: checks rules in order, first match wins
//!
//! Order matters: "Item"/"Areas" tables both mention "Quality", and tax
//! tables are checked before mill levy tables.

use crate::page::Table;
use crate::table::{ColumnMode, Strategy};

/// One routing rule: "a header containing all of `required` is a `key` table".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    /// Short name for logs.
    pub name: &'static str,
    /// Record key the parsed table is stored under.
    pub key: &'static str,
    /// Substrings that must all appear in the header text.
    pub required: &'static [&'static str],
    /// Reject tables that contain another table (layout wrappers).
    pub forbid_nested: bool,
    pub strategy: Strategy,
}

impl ClassificationRule {
    /// Whether `table`, whose header row reads `header`, belongs to this rule.
    pub fn matches(&self, header: &str, table: &Table<'_>) -> bool {
        self.required.iter().all(|needle| header.contains(needle))
            && !(self.forbid_nested && table.has_nested_table())
    }
}

const fn rule(
    name: &'static str,
    key: &'static str,
    required: &'static [&'static str],
    strategy: Strategy,
) -> ClassificationRule {
    ClassificationRule {
        name,
        key,
        required,
        forbid_nested: false,
        strategy,
    }
}

const fn flat_rule(
    name: &'static str,
    key: &'static str,
    required: &'static [&'static str],
    mode: ColumnMode,
) -> ClassificationRule {
    ClassificationRule {
        name,
        key,
        required,
        forbid_nested: true,
        strategy: Strategy::MultiColumn(mode),
    }
}

/// The assessor's table shapes, highest priority first.
pub const RULES: &[ClassificationRule] = &[
    rule("owners", "owners", &["Owner Name(s)"], Strategy::SingleColumn),
    rule(
        "parcel_maps",
        "assessor_parcel_maps",
        &["Assessor Parcel Maps Associated"],
        Strategy::SingleColumn,
    ),
    rule(
        "land",
        "land_characteristics",
        &["Land Characteristics"],
        Strategy::SingleColumn,
    ),
    rule(
        "property_description",
        "property_description",
        &["Block", "Lot", "Key"],
        Strategy::MultiColumn(ColumnMode::PropertyDescription),
    ),
    rule(
        "inventory_items",
        "property_inventory_1",
        &["Item", "Quality"],
        Strategy::MultiColumn(ColumnMode::Default),
    ),
    rule(
        "inventory_areas",
        "property_inventory_2",
        &["Areas", "Quality"],
        Strategy::MultiColumn(ColumnMode::Default),
    ),
    rule(
        "inventory_adjustments",
        "property_inventory_3",
        &["Adjustment Code", "Adjustment SqFt"],
        Strategy::MultiColumn(ColumnMode::Default),
    ),
    rule(
        "sales",
        "sales_history",
        &["Sale Date", "Sale Amount"],
        Strategy::MultiColumn(ColumnMode::Default),
    ),
    flat_rule("tax", "tax_information", &["Payable"], ColumnMode::TaxInfo),
    flat_rule(
        "mill_levy",
        "mill_levy_information",
        &["Mill Levy"],
        ColumnMode::MillLevy,
    ),
];

/// Routes tables to parsing rules.
///
/// Rules are checked in registration order. First match wins.
pub struct TableClassifier {
    rules: Vec<ClassificationRule>,
}

impl TableClassifier {
    /// Create a classifier with the assessor's rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(RULES.to_vec())
    }

    pub fn with_rules(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Find the rule for `table`.
    ///
    /// Returns `None` if the table has no header row or no rule matches.
    pub fn classify(&self, table: &Table<'_>) -> Option<&ClassificationRule> {
        let header = table.header_text()?;
        let rule = self.rules.iter().find(|rule| rule.matches(&header, table))?;
        tracing::debug!("Matched table rule: {}", rule.name);
        Some(rule)
    }
}

impl Default for TableClassifier {
    fn default() -> Self {
        Self::new()
    }
}
