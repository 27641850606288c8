//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations

pub mod parsing;

// Spawn edges + write facts from one walk over a syntax tree
pub mod concurrency_analysis;

// Dense ids and (caller, callee, variable, mutex) tuples
pub mod siccl_encoding;
