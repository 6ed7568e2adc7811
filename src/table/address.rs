//! Property and mailing address block.
//!
//! The assessor renders both addresses in one two-column table. A labelled
//! row starts a block; rows with an empty label continue whichever block was
//! started last:
//!
//! ```text
//! Property Address: | 123 Main St
//!                   | Golden, CO
//! Mailing Address:  | PO Box 1
//! ```

use crate::page::Table;
use crate::text::collapse_whitespace;

pub const PROPERTY_LABEL: &str = "Property Address:";
pub const MAILING_LABEL: &str = "Mailing Address:";

/// Which block continuation rows belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Property,
    Mailing,
}

/// The two addresses read from an address table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addresses {
    pub property: String,
    pub mailing: String,
}

/// Walk the rows and return `(property, mailing)` addresses.
///
/// Rows with fewer than two cells are skipped. Continuation rows seen
/// before any label are ignored.
pub fn parse(table: &Table<'_>) -> Addresses {
    let mut property = Vec::new();
    let mut mailing = Vec::new();
    let mut block = None;

    for row in table.rows() {
        let cells = row.cells();
        let [label, value, ..] = cells.as_slice() else {
            continue;
        };

        if label.contains(PROPERTY_LABEL) {
            block = Some(Block::Property);
        } else if label.contains(MAILING_LABEL) {
            block = Some(Block::Mailing);
        } else if !label.is_empty() {
            continue;
        }

        match block {
            Some(Block::Property) => property.push(value.clone()),
            Some(Block::Mailing) => mailing.push(value.clone()),
            None => {}
        }
    }

    Addresses {
        property: collapse_whitespace(&property.join(" ")),
        mailing: collapse_whitespace(&mailing.join(" ")),
    }
}
