//! Shared module - Common types and utilities
//!
//! This module contains types that are shared across all features.
//! It has ZERO external dependencies beyond serde.

pub mod models;

// Re-exports for convenience
pub use models::*;
