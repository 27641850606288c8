//! Flow-order mutex model
//!
//! One insertion-ordered table of mutex states plus a single "last held"
//! slot. Nested or interleaved acquisitions collapse onto the most recent
//! acquire; any release empties the slot.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::models::MutexOrdinal;

/// Binary mutex state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutexState {
    Held,
    Released,
}

/// Mutex states in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutexStateTable {
    states: IndexMap<String, MutexState>,
    last_held: Option<String>,
}

impl MutexStateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `name.acquire()`
    pub fn acquire(&mut self, name: &str) {
        self.states.insert(name.to_string(), MutexState::Held);
        self.last_held = Some(name.to_string());
    }

    /// `name.release()`; unseen names are registered as released
    pub fn release(&mut self, name: &str) {
        self.states.insert(name.to_string(), MutexState::Released);
        self.last_held = None;
    }

    /// Ordinal of the mutex currently in the held slot
    pub fn current_ordinal(&self) -> MutexOrdinal {
        match self.last_held.as_deref() {
            Some(name) if self.state_of(name) == Some(MutexState::Held) => {
                self.ordinal_of(name).unwrap_or(MutexOrdinal::NONE)
            }
            _ => MutexOrdinal::NONE,
        }
    }

    pub fn state_of(&self, name: &str) -> Option<MutexState> {
        self.states.get(name).copied()
    }

    /// 1-based ordinal of `name`, if it was ever seen
    pub fn ordinal_of(&self, name: &str) -> Option<MutexOrdinal> {
        self.states.get_index_of(name).map(MutexOrdinal::from_index)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
