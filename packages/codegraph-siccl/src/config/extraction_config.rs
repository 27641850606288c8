//! Extraction configuration
//!
//! Controls which source shapes the walker treats as thread spawns and lock
//! operations, how it reacts to malformed spawns, and whether the encoded
//! output goes through the shared-variable filter.

use super::error::{ConfigError, ConfigResult};
use super::policy::{RootEdgePolicy, SpawnErrorPolicy};
use super::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Walker + encoder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Entry function name; augmented assignments inside it always produce
    /// write facts
    pub entry_function: String,

    /// Bare call names recognised as thread constructors
    pub thread_constructors: Vec<String>,

    /// Method name that marks a mutex as held (`lock.acquire()`)
    pub acquire_method: String,

    /// Method name that marks a mutex as released (`lock.release()`)
    pub release_method: String,

    /// Reaction to a thread-constructor call without a usable target
    pub spawn_error_policy: SpawnErrorPolicy,

    /// Target of the synthetic root edge
    pub root_edge_policy: RootEdgePolicy,

    /// Shared-variable post-filter (None = disabled)
    pub shared_filter: Option<SharedFilterConfig>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            entry_function: "main".to_string(),
            thread_constructors: vec!["Thread".to_string()],
            acquire_method: "acquire".to_string(),
            release_method: "release".to_string(),
            spawn_error_policy: SpawnErrorPolicy::default(),
            root_edge_policy: RootEdgePolicy::default(),
            shared_filter: None,
        }
    }
}

impl ExtractionConfig {
    /// Load and validate configuration from YAML text
    ///
    /// Missing fields fall back to defaults.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Export configuration as YAML text
    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn with_entry_function(mut self, name: impl Into<String>) -> Self {
        self.entry_function = name.into();
        self
    }

    pub fn with_thread_constructors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.thread_constructors = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_lock_methods(
        mut self,
        acquire: impl Into<String>,
        release: impl Into<String>,
    ) -> Self {
        self.acquire_method = acquire.into();
        self.release_method = release.into();
        self
    }

    pub fn with_spawn_error_policy(mut self, policy: SpawnErrorPolicy) -> Self {
        self.spawn_error_policy = policy;
        self
    }

    pub fn with_root_edge_policy(mut self, policy: RootEdgePolicy) -> Self {
        self.root_edge_policy = policy;
        self
    }

    pub fn with_shared_filter(mut self, filter: SharedFilterConfig) -> Self {
        self.shared_filter = Some(filter);
        self
    }

    /// Is `name` one of the configured thread constructors?
    pub fn is_thread_constructor(&self, name: &str) -> bool {
        self.thread_constructors.iter().any(|c| c == name)
    }
}

impl Validatable for ExtractionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.entry_function.is_empty() {
            return Err(ConfigError::empty_field(
                "entry_function",
                "Set it to the name of the program entry point (e.g. 'main')",
            ));
        }
        if self.thread_constructors.is_empty() {
            return Err(ConfigError::empty_field(
                "thread_constructors",
                "At least one constructor name (e.g. 'Thread') is required",
            ));
        }
        if self.thread_constructors.iter().any(String::is_empty) {
            return Err(ConfigError::Validation(
                "thread_constructors contains an empty name".to_string(),
            ));
        }
        if self.acquire_method.is_empty() {
            return Err(ConfigError::empty_field("acquire_method", "e.g. 'acquire'"));
        }
        if self.release_method.is_empty() {
            return Err(ConfigError::empty_field("release_method", "e.g. 'release'"));
        }
        if self.acquire_method == self.release_method {
            return Err(ConfigError::MethodCollision {
                method: self.acquire_method.clone(),
            });
        }
        self.shared_filter.validate()
    }

    fn config_name(&self) -> &'static str {
        "ExtractionConfig"
    }
}

/// Criterion deciding whether a variable counts as shared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharedCriterion {
    /// Written by at least two distinct spawned functions
    DistinctSpawnedFunctions,

    /// Written under at least two distinct mutex ids
    DistinctMutexIds,
}

impl SharedCriterion {
    const VALID: &'static [&'static str] = &["distinct_spawned_functions", "distinct_mutex_ids"];

    /// Parse criterion from string
    pub fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "distinct_spawned_functions" => Ok(Self::DistinctSpawnedFunctions),
            "distinct_mutex_ids" => Ok(Self::DistinctMutexIds),
            _ => Err(ConfigError::unknown_variant_with_suggestion(
                "shared criterion",
                s,
                Self::VALID,
            )),
        }
    }
}

impl Default for SharedCriterion {
    fn default() -> Self {
        Self::DistinctSpawnedFunctions
    }
}

/// Shared-variable post-filter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedFilterConfig {
    /// How "shared" is decided
    pub criterion: SharedCriterion,

    /// Keep only the first tuple of each run of consecutive tuples with the
    /// same callee
    pub one_per_thread_run: bool,
}

impl Default for SharedFilterConfig {
    fn default() -> Self {
        Self {
            criterion: SharedCriterion::default(),
            one_per_thread_run: true,
        }
    }
}

impl Validatable for SharedFilterConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "SharedFilterConfig"
    }
}
