/// Concurrency fact domain models
pub mod lock_state;
pub mod models;
pub mod scope;

pub use lock_state::*;
pub use models::*;
pub use scope::*;
