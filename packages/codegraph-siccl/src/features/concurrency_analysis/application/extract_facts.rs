//! Fact extraction use case
//!
//! Runs a fresh `TreeWalker` per tree so no state leaks between source
//! units.

use crate::config::ExtractionConfig;
use crate::features::concurrency_analysis::{FactExtractorPort, Result, TreeWalker, WalkOutput};
use crate::features::parsing::SyntaxNode;

/// Extract concurrency facts from syntax trees
pub struct ExtractFactsUseCase {
    config: ExtractionConfig,
}

impl ExtractFactsUseCase {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }
}

impl Default for ExtractFactsUseCase {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

impl FactExtractorPort for ExtractFactsUseCase {
    fn extract(&self, root: &SyntaxNode) -> Result<WalkOutput> {
        TreeWalker::new(&self.config).traverse(root)
    }
}
