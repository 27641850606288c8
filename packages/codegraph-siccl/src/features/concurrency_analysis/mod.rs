/// Concurrency Analysis Feature
///
/// Extracts thread-spawn edges and mutex-annotated variable writes from a
/// syntax tree.
///
/// ## Features
/// - **Spawn edges**: `t = Thread(target=f)` → `(current, f)`, preceded by
///   a synthetic root edge
/// - **Write facts**: writes to globals / parameters / entry-function
///   augmented targets, tagged with the held mutex ordinal
/// - **Lock model**: flow-order, single held slot
///
/// ## Architecture
/// - **Domain**: SpawnEdge, WriteFact, MutexOrdinal, MutexStateTable, ScopeContext
/// - **Infrastructure**: TreeWalker
/// - **Application**: ExtractFactsUseCase
/// - **Ports**: FactExtractorPort trait
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-export application layer (primary interface)
pub use application::*;

// Re-export domain types
pub use domain::*;

// Re-export infrastructure (internal use - prefer application layer)
#[doc(hidden)]
pub use infrastructure::*;

pub use ports::*;
