//! Dense id tables
//!
//! First-seen-order bijections from keys to `0..len`. The position of a key
//! in the underlying `IndexSet` is its id, so ids are dense by construction
//! and never reassigned.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::hash::Hash;

use crate::features::concurrency_analysis::MutexOrdinal;

/// First-seen-order bijection `K ↔ 0..len`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DenseIdTable<K: Hash + Eq> {
    keys: IndexSet<K>,
}

impl<K: Hash + Eq> Default for DenseIdTable<K> {
    fn default() -> Self {
        Self {
            keys: IndexSet::new(),
        }
    }
}

impl<K: Hash + Eq> DenseIdTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `key`, assigning the next free id on first sight
    pub fn resolve<Q>(&mut self, key: &Q) -> u32
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let index = match self.keys.get_index_of(key) {
            Some(index) => index,
            None => self.keys.insert_full(key.to_owned()).0,
        };
        index as u32
    }

    /// Id of `key` without assigning one
    pub fn get<Q>(&self, key: &Q) -> Option<u32>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.keys.get_index_of(key).map(|index| index as u32)
    }

    /// Reverse lookup
    pub fn key_of(&self, id: u32) -> Option<&K> {
        self.keys.get_index(id as usize)
    }

    /// Keys in id order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// Next id to be assigned
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// The three id namespaces shared by every tuple an encoder emits
///
/// Keep one `IdTables` alive across encodings to accumulate a shared
/// namespace; start from `IdTables::default()` to isolate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTables {
    pub functions: DenseIdTable<String>,
    pub variables: DenseIdTable<String>,
    /// Keyed by ordinal value, not mutex name
    pub mutexes: DenseIdTable<MutexOrdinal>,
}

impl IdTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn function_id(&self, name: &str) -> Option<u32> {
        self.functions.get(name)
    }

    pub fn variable_id(&self, name: &str) -> Option<u32> {
        self.variables.get(name)
    }

    pub fn mutex_id(&self, ordinal: MutexOrdinal) -> Option<u32> {
        self.mutexes.get(&ordinal)
    }

    pub fn function_name(&self, id: u32) -> Option<&str> {
        self.functions.key_of(id).map(String::as_str)
    }

    pub fn variable_name(&self, id: u32) -> Option<&str> {
        self.variables.key_of(id).map(String::as_str)
    }

    pub fn mutex_ordinal(&self, id: u32) -> Option<MutexOrdinal> {
        self.mutexes.key_of(id).copied()
    }
}
