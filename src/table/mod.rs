//! Layout-specific table parsers.
//!
//! Each classified table is handed to one [`Strategy`]:
//!
//! | Strategy | Output | Used for |
//! |----------|--------|----------|
//! | [`Strategy::SingleColumn`] | [`RecordValue::Text`] | owners, parcel maps, land |
//! | [`ColumnMode::Default`] | [`RecordValue::Rows`] | inventory, sales history |
//! | [`ColumnMode::PropertyDescription`] | [`RecordValue::Rows`] | block/lot/key table |
//! | [`ColumnMode::TaxInfo`] | [`RecordValue::Fields`] | paired-row tax table |
//! | [`ColumnMode::MillLevy`] | [`RecordValue::Fields`] | mill levy table |
//!
//! Address tables are not routed by header, so [`address`] is called
//! directly by the extractor.

pub mod address;
pub mod multi_column;
pub mod single_column;

use crate::error::Result;
use crate::page::Table;
use crate::record::RecordValue;
use multi_column::Footer;

/// Layout of a multi-column table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnMode {
    /// Header row names the columns; every later row is one record.
    Default,
    /// Like `Default`, but the last row is a footer and is dropped.
    PropertyDescription,
    /// Rows come in (field, value) pairs; both read from the second cell.
    TaxInfo,
    /// Each row is `field | value`.
    MillLevy,
}

/// How a classified table is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    SingleColumn,
    MultiColumn(ColumnMode),
}

impl Strategy {
    /// Parse `table`; `key` only labels errors.
    pub fn parse(self, key: &str, table: &Table<'_>) -> Result<RecordValue> {
        match self {
            Self::SingleColumn => Ok(single_column::parse(table).into()),
            Self::MultiColumn(ColumnMode::Default) => {
                multi_column::parse_rows(key, table, Footer::Keep).map(Into::into)
            }
            Self::MultiColumn(ColumnMode::PropertyDescription) => {
                multi_column::parse_rows(key, table, Footer::Drop).map(Into::into)
            }
            Self::MultiColumn(ColumnMode::TaxInfo) => {
                Ok(multi_column::parse_tax_info(table).into())
            }
            Self::MultiColumn(ColumnMode::MillLevy) => {
                Ok(multi_column::parse_mill_levy(table).into())
            }
        }
    }
}
