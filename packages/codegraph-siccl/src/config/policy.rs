//! Extraction policies
//!
//! Small closed choices that change walker behavior without changing
//! the fact model.

use super::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// What the walker does with a thread-constructor call it cannot read a
/// target function from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnErrorPolicy {
    /// Fail the whole traversal with `MalformedSpawnPattern`
    Abort,

    /// Log a warning, record nothing for the call, keep walking
    Skip,
}

impl SpawnErrorPolicy {
    const VALID: &'static [&'static str] = &["abort", "skip"];

    /// Parse policy from string
    pub fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            _ => Err(ConfigError::unknown_variant_with_suggestion(
                "spawn error policy",
                s,
                Self::VALID,
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }
}

impl Default for SpawnErrorPolicy {
    fn default() -> Self {
        Self::Abort
    }
}

impl std::fmt::Display for SpawnErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which function the synthetic root edge `("", f)` points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootEdgePolicy {
    /// The function containing the first thread-constructor assignment
    SpawningFunction,

    /// The first function definition seen in the traversal
    FirstDefinedFunction,
}

impl RootEdgePolicy {
    const VALID: &'static [&'static str] = &["spawning_function", "first_defined_function"];

    /// Parse policy from string
    pub fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "spawning_function" => Ok(Self::SpawningFunction),
            "first_defined_function" => Ok(Self::FirstDefinedFunction),
            _ => Err(ConfigError::unknown_variant_with_suggestion(
                "root edge policy",
                s,
                Self::VALID,
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpawningFunction => "spawning_function",
            Self::FirstDefinedFunction => "first_defined_function",
        }
    }
}

impl Default for RootEdgePolicy {
    fn default() -> Self {
        Self::SpawningFunction
    }
}

impl std::fmt::Display for RootEdgePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
