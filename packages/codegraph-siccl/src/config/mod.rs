//! Configuration System
//!
//! One configuration struct drives the whole conversion:
//!
//! ```rust,ignore
//! use codegraph_siccl::config::{ExtractionConfig, SpawnErrorPolicy};
//!
//! // Builder
//! let config = ExtractionConfig::default()
//!     .with_entry_function("run")
//!     .with_spawn_error_policy(SpawnErrorPolicy::Skip);
//!
//! // YAML (missing fields fall back to defaults)
//! let config = ExtractionConfig::from_yaml_str("entry_function: run\n")?;
//! ```

pub mod error;
pub mod extraction_config;
pub mod policy;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use extraction_config::{ExtractionConfig, SharedCriterion, SharedFilterConfig};
pub use policy::{RootEdgePolicy, SpawnErrorPolicy};
pub use validation::Validatable;
