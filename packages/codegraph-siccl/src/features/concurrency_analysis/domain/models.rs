//! Core fact models produced by the tree walker
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a variable was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessType {
    /// Plain assignment (e.g., x = 1)
    Write,
    /// Augmented assignment (e.g., x += 1)
    ReadWrite,
}

impl AccessType {
    /// Check if this access also reads the previous value
    pub fn is_read(&self) -> bool {
        matches!(self, AccessType::ReadWrite)
    }
}

/// Position of the held mutex in first-seen order, 0 when none is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MutexOrdinal(pub u32);

impl MutexOrdinal {
    /// No mutex held
    pub const NONE: MutexOrdinal = MutexOrdinal(0);

    /// Ordinal for the mutex at 0-based `index` of the state table
    pub fn from_index(index: usize) -> Self {
        MutexOrdinal(index as u32 + 1)
    }
}

impl fmt::Display for MutexOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `spawner` started a thread running `spawned`
///
/// The synthetic root edge has an empty `spawner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnEdge {
    pub spawner: String,
    pub spawned: String,
}

impl SpawnEdge {
    pub fn new(spawner: impl Into<String>, spawned: impl Into<String>) -> Self {
        Self {
            spawner: spawner.into(),
            spawned: spawned.into(),
        }
    }

    /// Synthetic root edge `("", entry)`
    pub fn root(entry: impl Into<String>) -> Self {
        Self::new("", entry)
    }

    pub fn is_root(&self) -> bool {
        self.spawner.is_empty()
    }
}

/// `function` wrote `variable` while holding the mutex at `mutex_ordinal`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WriteFact {
    pub function: String,
    pub variable: String,
    pub mutex_ordinal: MutexOrdinal,
    pub access_type: AccessType,
}

impl WriteFact {
    pub fn new(
        function: impl Into<String>,
        variable: impl Into<String>,
        mutex_ordinal: MutexOrdinal,
    ) -> Self {
        Self {
            function: function.into(),
            variable: variable.into(),
            mutex_ordinal,
            access_type: AccessType::Write,
        }
    }

    pub fn with_access_type(mut self, access_type: AccessType) -> Self {
        self.access_type = access_type;
        self
    }
}

/// Raw facts from one traversal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOutput {
    /// Spawn edges in discovery order (root edge first when present)
    pub spawn_edges: Vec<SpawnEdge>,
    /// Write facts in discovery order
    pub write_facts: Vec<WriteFact>,
    /// Names declared `global` anywhere, first-seen order
    pub declared_globals: Vec<String>,
}

impl WalkOutput {
    pub fn is_empty(&self) -> bool {
        self.spawn_edges.is_empty() && self.write_facts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutex_ordinal() {
        assert_eq!(MutexOrdinal::default(), MutexOrdinal::NONE);
        assert_eq!(MutexOrdinal::from_index(0), MutexOrdinal(1));
        assert_eq!(serde_json::to_string(&MutexOrdinal(3)).unwrap(), "3");
    }

    #[test]
    fn test_root_edge() {
        let root = SpawnEdge::root("main");
        assert!(root.is_root());
        assert_eq!(root.spawned, "main");
        assert!(!SpawnEdge::new("main", "worker").is_root());
    }

    #[test]
    fn test_walk_output() {
        let output = WalkOutput {
            spawn_edges: vec![],
            write_facts: vec![
                WriteFact::new("worker", "x", MutexOrdinal::NONE),
                WriteFact::new("main", "y", MutexOrdinal(1)).with_access_type(AccessType::ReadWrite),
            ],
            declared_globals: vec![],
        };
        assert!(output.write_facts[1].access_type.is_read());
        assert!(!output.is_empty());
    }
}
