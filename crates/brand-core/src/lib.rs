//! # brand-core
//!
//! Core types and the rule-based strategy generator for Brandkit.
//!
//! This crate provides the foundational pieces shared by every Brandkit crate:
//! - Closed enums for category, price point, budget level, and archetype
//! - `ReferenceTables`, the immutable lookup data built once at startup
//! - Entity structs for every generated value and the flat store record
//! - `StrategyGenerator`, a stateless pipeline over the tables
//! - Validation errors, CLI response types, and JSON Schema export

pub mod entities;
pub mod enums;
pub mod errors;
pub mod generator;
pub mod responses;
pub mod schema;
pub mod tables;

pub use generator::StrategyGenerator;
pub use tables::ReferenceTables;
