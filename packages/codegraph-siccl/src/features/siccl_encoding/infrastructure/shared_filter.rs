//! Shared-variable post-filter
use std::collections::{HashMap, HashSet};

use crate::config::{SharedCriterion, SharedFilterConfig};
use crate::features::siccl_encoding::domain::SicclTuple;

/// Narrows a tuple sequence to variables that look shared between threads
///
/// Never mutates its input; every stage builds a fresh `Vec`.
#[derive(Debug, Clone, Default)]
pub struct SharedVariableFilter {
    config: SharedFilterConfig,
}

impl SharedVariableFilter {
    pub fn new(config: SharedFilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SharedFilterConfig {
        &self.config
    }

    pub fn apply(&self, tuples: &[SicclTuple]) -> Vec<SicclTuple> {
        let shared = self.shared_variables(tuples);
        let kept: Vec<SicclTuple> = tuples
            .iter()
            .filter(|t| shared.contains(&t.variable))
            .copied()
            .collect();

        if self.config.one_per_thread_run {
            first_of_each_callee_run(&kept)
        } else {
            kept
        }
    }

    /// Variable ids that meet the configured criterion
    fn shared_variables(&self, tuples: &[SicclTuple]) -> HashSet<u32> {
        let mut roles: HashMap<u32, HashSet<u32>> = HashMap::new();
        for t in tuples {
            let role = match self.config.criterion {
                SharedCriterion::DistinctSpawnedFunctions => t.callee,
                SharedCriterion::DistinctMutexIds => t.mutex,
            };
            roles.entry(t.variable).or_default().insert(role);
        }

        roles
            .into_iter()
            .filter(|(_, seen)| seen.len() >= 2)
            .map(|(variable, _)| variable)
            .collect()
    }
}

fn first_of_each_callee_run(tuples: &[SicclTuple]) -> Vec<SicclTuple> {
    let mut previous = None;
    let mut out = Vec::with_capacity(tuples.len());
    for t in tuples {
        if previous != Some(t.callee) {
            out.push(*t);
        }
        previous = Some(t.callee);
    }
    out
}
