//! Cross-cutting error types for Brandkit.
//!
//! The generator itself never fails: lookup misses resolve to fallbacks.
//! `CoreError` covers input validation done by the shell before it calls the
//! generator. Store failures live in `brand-store`.

use thiserror::Error;

/// Errors that can be raised around the core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required input is missing or empty.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A named type has no registered schema.
    #[error("Unknown schema type: {0}")]
    UnknownSchema(String),
}

impl CoreError {
    /// Check the two inputs the shell must supply before generating.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `name` is empty or no
    /// target-market tag is selected. A whitespace-only name is accepted.
    pub fn check_required<S: AsRef<str>>(name: &str, target_market: &[S]) -> Result<(), Self> {
        if name.is_empty() {
            return Err(Self::Validation("Please enter a business name".to_string()));
        }
        if target_market.is_empty() {
            return Err(Self::Validation(
                "Please select at least one target market".to_string(),
            ));
        }
        Ok(())
    }
}
