//! SICCL encoding
//!
//! Turns walker output into `(caller, callee, variable, mutex)` integer
//! tuples over dense id tables, with an optional shared-variable filter.

pub mod domain;
pub mod infrastructure;

pub use domain::{DenseIdTable, IdTables, SicclTuple};
pub use infrastructure::{EncodeOutput, SharedVariableFilter, SicclEncoder};
