/// Fact extractor port trait
use crate::features::concurrency_analysis::{Result, WalkOutput};
use crate::features::parsing::SyntaxNode;

/// Port trait for concurrency fact extractors
///
/// Allows swapping the flow-order heuristic for a different lock model
/// without touching the encoder.
pub trait FactExtractorPort {
    /// Extract spawn edges and write facts from one syntax tree
    fn extract(&self, root: &SyntaxNode) -> Result<WalkOutput>;
}
