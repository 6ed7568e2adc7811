//! `assessor` - Property-assessment record extraction
//!
//! # Features
//!
//! - **Table classification**: routes each table on an assessor page to a
//!   parser from its header-row text and nesting
//! - **Layout parsers**: single-column lists, header-keyed rows, paired-row
//!   tax tables, mill levy tables, and address blocks
//! - **Field scan**: `Label: value` cells such as PIN and year built
//! - **Fetching**: current and historical pages over `reqwest`
//!
//! # Example
//!
//! ```rust,no_run
//! use assessor::AssessorClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AssessorClient::new()?;
//!     let record = client.get_property_history("300123456", "2015").await?;
//!     println!("{}", record.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod fields;
pub mod http_client;
pub mod page;
pub mod record;
pub mod table;
pub mod text;

pub use classify::{ClassificationRule, TableClassifier, RULES};
pub use config::{AssessorConfig, ColumnPolicy};
pub use error::{ExtractError, Result};
pub use extract::PropertyExtractor;
pub use http_client::AssessorClient;
pub use page::{Page, Table, TableRow};
pub use record::{FieldMap, Record, RecordValue, Row};
pub use table::{ColumnMode, Strategy};

/// Version of assessor
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
