pub mod error;
pub mod tree_walker;

pub use error::*;
pub use tree_walker::*;
