//! # brand-store
//!
//! Append-only CSV store for saved brand strategies.
//!
//! One header row, then one row per saved strategy. Rows are never rewritten
//! or removed. See [`StrategyStore`] for the write and read paths.

mod error;
mod store;

pub use error::StoreError;
pub use store::{ExportReceipt, StrategyStore};
