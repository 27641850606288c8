//! Parse file use case

use crate::errors::Result;
use crate::features::parsing::domain::ParsedTree;
use crate::features::parsing::ports::Parser;

/// Parse file use case
pub struct ParseFileUseCase<P: Parser> {
    parser: P,
}

impl<P: Parser> ParseFileUseCase<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Execute the parse operation
    pub fn execute(&self, source: &str, file_path: &str) -> Result<ParsedTree> {
        self.parser.parse(source, file_path)
    }

    /// Underlying parser
    pub fn parser(&self) -> &P {
        &self.parser
    }
}
