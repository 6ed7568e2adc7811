//! Assembles a [`Record`] from a parsed page.
//!
//! # Example
//!
//! ```rust
//! use assessor::PropertyExtractor;
//!
//! let html = r#"<table>
//!     <tr class="tableheaders"><td>Owner Name(s)</td></tr>
//!     <tr><td>SMITH JOHN</td></tr>
//! </table>"#;
//!
//! let record = PropertyExtractor::new().extract_html(html).unwrap();
//! assert_eq!(record.text("owners"), Some("SMITH JOHN"));
//! ```

use crate::classify::TableClassifier;
use crate::config::ColumnPolicy;
use crate::error::{ExtractError, Result};
use crate::fields::extract_fields;
use crate::page::{Page, Table};
use crate::record::Record;
use crate::table::address::{self, PROPERTY_LABEL};

/// Turns assessor pages into records.
///
/// Stateless apart from its rule set and column policy; one extractor can
/// serve any number of pages.
pub struct PropertyExtractor {
    classifier: TableClassifier,
    column_policy: ColumnPolicy,
}

impl PropertyExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            classifier: TableClassifier::new(),
            column_policy: ColumnPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_column_policy(mut self, policy: ColumnPolicy) -> Self {
        self.column_policy = policy;
        self
    }

    /// Parse `html` and extract its record.
    pub fn extract_html(&self, html: &str) -> Result<Record> {
        self.extract(&Page::parse(html))
    }

    /// Extract scalar fields and every recognized table from `page`.
    pub fn extract(&self, page: &Page) -> Result<Record> {
        let mut record = Record::new();
        extract_fields(page, &mut record);

        for table in page.tables() {
            self.extract_table(&table, &mut record)?;
            extract_addresses(&table, &mut record);
        }

        tracing::debug!(keys = record.len(), "extracted record");
        Ok(record)
    }

    fn extract_table(&self, table: &Table<'_>, record: &mut Record) -> Result<()> {
        let Some(rule) = self.classifier.classify(table) else {
            return Ok(());
        };

        match rule.strategy.parse(rule.key, table) {
            Ok(value) => record.insert(rule.key, value),
            // A layout table borrows the header of the data table it wraps;
            // the inner table fills the key when its turn comes.
            Err(err @ ExtractError::ColumnMismatch { .. }) if table.has_nested_table() => {
                tracing::debug!("Skipping wrapper of table {}: {}", rule.key, err);
            }
            Err(err @ ExtractError::ColumnMismatch { .. })
                if self.column_policy == ColumnPolicy::SkipTable =>
            {
                tracing::warn!("Skipping table {}: {}", rule.key, err);
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }
}

impl Default for PropertyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Address tables are recognized by content, not by header row.
fn extract_addresses(table: &Table<'_>, record: &mut Record) {
    if !table.text().contains(PROPERTY_LABEL) || table.has_nested_table() {
        return;
    }
    let addresses = address::parse(table);
    record.insert("property_address", addresses.property);
    record.insert("mailing_address", addresses.mailing);
}
