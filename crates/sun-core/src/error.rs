//! Error types for runtime lookups
//!
//! The default accessors never fail: a miss is logged and resolved to a
//! fallback. These errors only surface through the `try_*` accessors.

use thiserror::Error;

/// Lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SunError {
    #[error("Cannot find key {key} in table {table}")]
    MissingKey { table: &'static str, key: String },

    #[error("Cannot find value {value} in inverse table {table}")]
    MissingValue { table: &'static str, value: String },
}

impl SunError {
    /// Name of the table the lookup ran against
    pub fn table(&self) -> &'static str {
        match self {
            SunError::MissingKey { table, .. } | SunError::MissingValue { table, .. } => *table,
        }
    }
}

/// Result type for lookup operations
pub type SunResult<T> = Result<T, SunError>;
