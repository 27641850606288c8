//! SICCL encoding domain models

pub mod id_table;
pub mod tuple;

pub use id_table::{DenseIdTable, IdTables};
pub use tuple::SicclTuple;
