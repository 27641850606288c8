//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::{Parser as TSParser, Tree};

use super::lowering::{node_span, PythonLowering};
use crate::errors::{Result, SicclError};
use crate::features::parsing::domain::{ParseError, ParsedTree};
use crate::features::parsing::ports::Parser;
use crate::shared::models::Span;

/// Tree-sitter based parser
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy)]
pub enum TreeSitterLanguage {
    Python,
}

impl TreeSitterParser {
    /// Create a Python parser
    pub fn python() -> Self {
        Self {
            language: TreeSitterLanguage::Python,
        }
    }

    /// Get the tree-sitter language
    fn get_ts_language(&self) -> tree_sitter::Language {
        match self.language {
            TreeSitterLanguage::Python => tree_sitter_python::language(),
        }
    }

    /// Convert tree-sitter tree to our domain model
    fn convert_tree(&self, tree: &Tree, source: &str, file_path: &str) -> ParsedTree {
        let root_node = tree.root_node();
        let root = match self.language {
            TreeSitterLanguage::Python => PythonLowering::new(source).lower_module(&root_node),
        };

        let mut errors = Vec::new();
        if root_node.has_error() {
            self.collect_errors(&root_node, &mut errors);
        }

        ParsedTree::new(
            root,
            source.to_string(),
            file_path.to_string(),
            self.language_name().to_string(),
        )
        .with_errors(errors)
    }

    /// Collect parse errors
    fn collect_errors(&self, node: &tree_sitter::Node, errors: &mut Vec<ParseError>) {
        if node.is_error() || node.is_missing() {
            let message = if node.is_missing() {
                format!("Missing {:?}", node.kind())
            } else {
                "Unexpected syntax".to_string()
            };
            errors.push(ParseError {
                message,
                span: node_span(node),
            });
        }

        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                self.collect_errors(&child, errors);
            }
        }
    }
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedTree> {
        let mut parser = TSParser::new();
        parser.set_language(&self.get_ts_language()).map_err(|e| {
            SicclError::parse_error(file_path, Span::zero(), format!("Failed to set language: {}", e))
        })?;

        let tree = parser.parse(source, None).ok_or_else(|| {
            SicclError::parse_error(file_path, Span::zero(), "Failed to parse source code")
        })?;

        let parsed = self.convert_tree(&tree, source, file_path);
        if let Some(error) = parsed.first_error() {
            return Err(SicclError::parse_error(
                file_path,
                error.span,
                error.message.clone(),
            ));
        }

        tracing::debug!(
            file_path,
            lines = parsed.line_count(),
            "parsed source unit"
        );
        Ok(parsed)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        match self.language {
            TreeSitterLanguage::Python => matches!(ext, "py" | "pyi"),
        }
    }

    fn language_name(&self) -> &'static str {
        match self.language {
            TreeSitterLanguage::Python => "python",
        }
    }
}
