//! Parsing Feature
//!
//! Turns source text into the closed `SyntaxNode` tree the concurrency
//! extractor walks.
//!
//! ## Structure
//! - `domain/` - ParsedTree, SyntaxNode models
//! - `ports/` - Parser trait
//! - `application/` - ParseFileUseCase
//! - `infrastructure/` - TreeSitterParser (Python lowering)

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::ParseFileUseCase;
pub use domain::{Keyword, ParseError, ParsedTree, SyntaxNode};

#[doc(hidden)]
pub use infrastructure::TreeSitterParser;
pub use ports::Parser;
