//! SICCL conversion service
//!
//! ```text
//! source ─▶ Parser ─▶ SyntaxNode ─▶ TreeWalker ─▶ WalkOutput
//!                                                    │
//!            Vec<SicclTuple> ◀─ (filter) ◀─ SicclEncoder ◀─ IdTables
//! ```
//!
//! The converter owns its `IdTables`, so successive conversions on one
//! instance share a single id namespace. Call `reset_tables` (or build a new
//! converter) to isolate them.
//!
//! # Example
//!
//! ```rust,ignore
//! use codegraph_siccl::SicclConverter;
//!
//! let mut converter = SicclConverter::new();
//! let tuples = converter.convert(source)?;
//! println!("{}", SicclConverter::to_json(&tuples)?);
//! ```

use tracing::{debug, info};

use crate::config::{ExtractionConfig, Validatable};
use crate::errors::Result;
use crate::features::concurrency_analysis::{ExtractFactsUseCase, FactExtractorPort, WalkOutput};
use crate::features::parsing::{ParseFileUseCase, Parser, SyntaxNode, TreeSitterParser};
use crate::features::siccl_encoding::{IdTables, SharedVariableFilter, SicclEncoder, SicclTuple};

const DEFAULT_FILE_PATH: &str = "<source>";

/// Source text in, `(caller, callee, variable, mutex)` tuples out
pub struct SicclConverter<P: Parser = TreeSitterParser> {
    parse: ParseFileUseCase<P>,
    extract: ExtractFactsUseCase,
    encoder: SicclEncoder,
    filter: Option<SharedVariableFilter>,
    tables: IdTables,
}

impl SicclConverter<TreeSitterParser> {
    /// Python converter with the default configuration
    pub fn new() -> Self {
        Self::build(TreeSitterParser::python(), ExtractionConfig::default())
    }

    /// Python converter with a validated configuration
    pub fn with_config(config: ExtractionConfig) -> Result<Self> {
        Self::with_parser(TreeSitterParser::python(), config)
    }

    /// Array-of-arrays JSON, e.g. `[[0,1,0,0],[0,2,0,1]]`
    pub fn to_json(tuples: &[SicclTuple]) -> Result<String> {
        Ok(serde_json::to_string(tuples)?)
    }
}

impl<P: Parser> SicclConverter<P> {
    /// Converter over any `Parser` implementation
    pub fn with_parser(parser: P, config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(parser, config))
    }

    fn build(parser: P, config: ExtractionConfig) -> Self {
        let filter = config.shared_filter.clone().map(SharedVariableFilter::new);
        Self {
            parse: ParseFileUseCase::new(parser),
            extract: ExtractFactsUseCase::new(config),
            encoder: SicclEncoder::new(),
            filter,
            tables: IdTables::default(),
        }
    }

    /// Start from previously accumulated tables
    pub fn with_tables(mut self, tables: IdTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        self.extract.config()
    }

    pub fn tables(&self) -> &IdTables {
        &self.tables
    }

    /// Drop all ids; the next conversion starts at 0 again
    pub fn reset_tables(&mut self) {
        self.tables = IdTables::default();
    }

    pub fn into_tables(self) -> IdTables {
        self.tables
    }

    pub fn convert(&mut self, source: &str) -> Result<Vec<SicclTuple>> {
        self.convert_file(source, DEFAULT_FILE_PATH)
    }

    /// Like `convert`, with `file_path` reported in parse errors
    pub fn convert_file(&mut self, source: &str, file_path: &str) -> Result<Vec<SicclTuple>> {
        let parsed = self.parse.execute(source, file_path)?;
        let tuples = self.convert_tree(&parsed.root)?;
        info!(file_path, tuples = tuples.len(), "converted source unit");
        Ok(tuples)
    }

    pub fn convert_tree(&mut self, root: &SyntaxNode) -> Result<Vec<SicclTuple>> {
        let walk = self.extract_facts(root)?;
        Ok(self.encode(&walk))
    }

    /// Raw walker output without encoding
    pub fn extract_facts(&self, root: &SyntaxNode) -> Result<WalkOutput> {
        Ok(self.extract.extract(root)?)
    }

    fn encode(&mut self, walk: &WalkOutput) -> Vec<SicclTuple> {
        debug!(
            spawn_edges = ?walk.spawn_edges,
            write_facts = ?walk.write_facts,
            "walker facts"
        );

        let tables = std::mem::take(&mut self.tables);
        let out = self
            .encoder
            .encode(tables, &walk.spawn_edges, &walk.write_facts);
        self.tables = out.tables;

        match &self.filter {
            Some(filter) => {
                let kept = filter.apply(&out.tuples);
                debug!(before = out.tuples.len(), after = kept.len(), "applied shared-variable filter");
                kept
            }
            None => out.tuples,
        }
    }
}
