//! ID-normalizing encoder
//!
//! Joins spawn edges against write facts and rewrites every name into a dense
//! integer id. Tables are taken by value and handed back, so the caller
//! decides whether successive encodings share a namespace.

use tracing::debug;

use crate::features::concurrency_analysis::{SpawnEdge, WriteFact};
use crate::features::siccl_encoding::domain::{IdTables, SicclTuple};

/// Result of one encoding pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOutput {
    pub tables: IdTables,
    pub tuples: Vec<SicclTuple>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SicclEncoder;

impl SicclEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Emit one tuple per (edge, fact owned by the edge's callee) pair
    ///
    /// Edges form the outer loop, facts the inner one; both keep input order.
    /// Mutex ids are keyed by ordinal, so distinct mutexes sharing an ordinal
    /// collapse to one id.
    pub fn encode(
        &self,
        mut tables: IdTables,
        edges: &[SpawnEdge],
        facts: &[WriteFact],
    ) -> EncodeOutput {
        let mut tuples = Vec::new();

        for edge in edges {
            let caller = tables.functions.resolve(edge.spawner.as_str());
            let callee = tables.functions.resolve(edge.spawned.as_str());

            for fact in facts.iter().filter(|f| f.function == edge.spawned) {
                let variable = tables.variables.resolve(fact.variable.as_str());
                let mutex = tables.mutexes.resolve(&fact.mutex_ordinal);
                tuples.push(SicclTuple::new(caller, callee, variable, mutex));
            }
        }

        debug!(
            edges = edges.len(),
            facts = facts.len(),
            tuples = tuples.len(),
            functions = tables.functions.len(),
            "encoded SICCL tuples"
        );

        EncodeOutput { tables, tuples }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::concurrency_analysis::MutexOrdinal;

    fn fact(function: &str, variable: &str, ordinal: u32) -> WriteFact {
        WriteFact::new(function, variable, MutexOrdinal(ordinal))
    }

    #[test]
    fn test_worker_under_lock_single_tuple() {
        let edges = vec![SpawnEdge::root("main"), SpawnEdge::new("main", "worker")];
        let facts = vec![fact("worker", "shared", 1)];

        let out = SicclEncoder::new().encode(IdTables::new(), &edges, &facts);

        assert_eq!(out.tuples.len(), 1);
        let t = out.tuples[0];
        assert_eq!(out.tables.function_name(t.caller), Some("main"));
        assert_eq!(out.tables.function_name(t.callee), Some("worker"));
        assert_eq!(out.tables.variable_name(t.variable), Some("shared"));
        assert_eq!(out.tables.mutex_ordinal(t.mutex), Some(MutexOrdinal(1)));
        // root edge assigns "" and "main" before "worker"
        assert_eq!(out.tables.function_id(""), Some(0));
        assert_eq!(t.as_array(), [1, 2, 0, 0]);
    }

    #[test]
    fn test_facts_outside_spawned_functions_dropped() {
        let edges = vec![SpawnEdge::root("main"), SpawnEdge::new("main", "worker")];
        let facts = vec![fact("helper", "x", 0), fact("worker", "y", 0)];

        let out = SicclEncoder::new().encode(IdTables::new(), &edges, &facts);

        assert_eq!(out.tuples.len(), 1);
        assert_eq!(out.tables.variable_id("x"), None);
        assert_eq!(out.tables.function_id("helper"), None);
    }

    #[test]
    fn test_distinct_mutexes_same_ordinal_collapse() {
        let edges = vec![SpawnEdge::new("main", "a"), SpawnEdge::new("main", "b")];
        // different mutex names in each function, both first-registered
        let facts = vec![fact("a", "v", 1), fact("b", "v", 1)];

        let out = SicclEncoder::new().encode(IdTables::new(), &edges, &facts);

        assert_eq!(out.tuples.len(), 2);
        assert_eq!(out.tuples[0].mutex, out.tuples[1].mutex);
        assert_eq!(out.tables.mutexes.len(), 1);
    }

    #[test]
    fn test_unheld_facts_map_to_ordinal_zero() {
        let edges = vec![SpawnEdge::new("main", "w")];
        let facts = vec![fact("w", "a", 0), fact("w", "b", 2)];

        let out = SicclEncoder::new().encode(IdTables::new(), &edges, &facts);

        assert_eq!(out.tables.mutex_ordinal(out.tuples[0].mutex), Some(MutexOrdinal::NONE));
        assert_eq!(out.tables.mutex_ordinal(out.tuples[1].mutex), Some(MutexOrdinal(2)));
    }

    #[test]
    fn test_edge_order_outer_fact_order_inner() {
        let edges = vec![SpawnEdge::new("m", "w"), SpawnEdge::new("n", "w")];
        let facts = vec![fact("w", "x", 0), fact("w", "y", 0)];

        let out = SicclEncoder::new().encode(IdTables::new(), &edges, &facts);

        let caller_var: Vec<(&str, &str)> = out
            .tuples
            .iter()
            .map(|t| {
                (
                    out.tables.function_name(t.caller).unwrap(),
                    out.tables.variable_name(t.variable).unwrap(),
                )
            })
            .collect();
        assert_eq!(caller_var, vec![("m", "x"), ("m", "y"), ("n", "x"), ("n", "y")]);
    }

    #[test]
    fn test_shared_tables_continue_from_high_water_mark() {
        let encoder = SicclEncoder::new();
        let first = encoder.encode(
            IdTables::new(),
            &[SpawnEdge::new("main", "w1")],
            &[fact("w1", "a", 0)],
        );
        let second = encoder.encode(
            first.tables,
            &[SpawnEdge::new("boot", "w2")],
            &[fact("w2", "b", 1)],
        );

        assert_eq!(second.tuples, vec![SicclTuple::new(2, 3, 1, 1)]);
        assert_eq!(second.tables.function_id("main"), Some(0));
    }

    #[test]
    fn test_empty_inputs() {
        let out = SicclEncoder::new().encode(IdTables::new(), &[], &[fact("w", "x", 0)]);
        assert!(out.tuples.is_empty());
        assert!(out.tables.functions.is_empty());
    }
}
