//! Extraction errors.

use thiserror::Error;

/// Errors raised while turning a page into a [`Record`](crate::Record).
///
/// Most structural surprises (missing header row, short rows in key/value
/// tables) are skipped silently. Only a column count that disagrees with the
/// header row is reported, since the rows can no longer be keyed reliably.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("table `{key}`: row {row} has {found} cells, header has {expected}")]
    ColumnMismatch {
        key: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
