//! Tree-sitter backed parsing

mod lowering;
mod parser;

pub use parser::TreeSitterParser;
