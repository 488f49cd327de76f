//! Store error types for brand-store.

use thiserror::Error;

/// Errors from strategy store operations.
///
/// Each variant carries the description of the underlying failure. Nothing
/// is retried.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Appending a strategy failed. The store is left as it was.
    #[error("Error exporting strategy to CSV: {0}")]
    Export(String),

    /// Reading saved strategies back failed.
    #[error("Error reading strategy store: {0}")]
    Read(String),
}
