//! Tuple decoding helpers and assertions

use codegraph_siccl::{IdTables, SicclTuple};

/// `(caller, callee, variable, mutex ordinal)` with names resolved
pub type NamedTuple = (String, String, String, u32);

/// Map every id in `tuples` back through `tables`
pub fn decode(tables: &IdTables, tuples: &[SicclTuple]) -> Vec<NamedTuple> {
    tuples
        .iter()
        .map(|t| {
            (
                name(tables.function_name(t.caller), "caller", t),
                name(tables.function_name(t.callee), "callee", t),
                name(tables.variable_name(t.variable), "variable", t),
                tables
                    .mutex_ordinal(t.mutex)
                    .unwrap_or_else(|| panic!("mutex id {} unknown in {t}", t.mutex))
                    .0,
            )
        })
        .collect()
}

fn name(resolved: Option<&str>, role: &str, tuple: &SicclTuple) -> String {
    resolved
        .unwrap_or_else(|| panic!("{role} id unknown in {tuple}"))
        .to_string()
}

/// Build a `NamedTuple` from string slices
pub fn named(caller: &str, callee: &str, variable: &str, ordinal: u32) -> NamedTuple {
    (
        caller.to_string(),
        callee.to_string(),
        variable.to_string(),
        ordinal,
    )
}

/// Every id in every table is in `0..len`, with no gaps
pub fn assert_dense(tables: &IdTables) {
    for (i, key) in tables.functions.keys().enumerate() {
        assert_eq!(tables.function_id(key), Some(i as u32), "function '{key}'");
    }
    for (i, key) in tables.variables.keys().enumerate() {
        assert_eq!(tables.variable_id(key), Some(i as u32), "variable '{key}'");
    }
    for (i, key) in tables.mutexes.keys().enumerate() {
        assert_eq!(tables.mutex_id(*key), Some(i as u32), "ordinal {key}");
    }
}

/// Every tuple references ids present in `tables`
pub fn assert_ids_in_range(tables: &IdTables, tuples: &[SicclTuple]) {
    for t in tuples {
        assert!((t.caller as usize) < tables.functions.len(), "caller out of range in {t}");
        assert!((t.callee as usize) < tables.functions.len(), "callee out of range in {t}");
        assert!((t.variable as usize) < tables.variables.len(), "variable out of range in {t}");
        assert!((t.mutex as usize) < tables.mutexes.len(), "mutex out of range in {t}");
    }
}
