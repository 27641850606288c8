/*
 * Codegraph SICCL - Concurrency Sharing Topology Extraction
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span)
 * - config/      : Extraction configuration (YAML + builder)
 * - features/    : Vertical slices (parsing → concurrency_analysis → siccl_encoding)
 * - usecases/    : SicclConverter (parse → walk → encode → filter)
 *
 * Output is a sequence of (caller, callee, variable, mutex) id tuples
 * consumed by an external program synthesizer.
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::should_implement_trait)] // Config enums expose inherent from_str

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (parsing, fact extraction, encoding)
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

/// Usecase layer (SicclConverter)
pub mod usecases;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{
    ExtractionConfig, RootEdgePolicy, SharedCriterion, SharedFilterConfig, SpawnErrorPolicy,
};
pub use errors::{Result, SicclError};
pub use features::concurrency_analysis::{SpawnEdge, TreeWalker, WalkOutput, WriteFact};
pub use features::parsing::{SyntaxNode, TreeSitterParser};
pub use features::siccl_encoding::{IdTables, SharedVariableFilter, SicclEncoder, SicclTuple};
pub use usecases::SicclConverter;
