//! Python CST → SyntaxNode lowering
//!
//! Maps the handful of tree-sitter-python node kinds the extractor reads onto
//! dedicated variants and folds everything else into `SyntaxNode::Other`.

use tree_sitter::Node;

use crate::features::parsing::domain::{Keyword, SyntaxNode};
use crate::shared::models::Span;

/// Span of a tree-sitter node (1-based lines, 0-based columns)
pub(super) fn node_span(node: &Node) -> Span {
    Span::new(
        node.start_position().row as u32 + 1,
        node.start_position().column as u32,
        node.end_position().row as u32 + 1,
        node.end_position().column as u32,
    )
}

/// Named, non-extra children (comments are extras)
fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .filter(|c| !c.is_extra())
        .collect()
}

pub(super) struct PythonLowering<'s> {
    source: &'s str,
}

impl<'s> PythonLowering<'s> {
    pub(super) fn new(source: &'s str) -> Self {
        Self { source }
    }

    pub(super) fn lower_module(&self, node: &Node) -> SyntaxNode {
        SyntaxNode::Module {
            body: self.lower_children(node),
        }
    }

    fn text(&self, node: &Node) -> String {
        node.utf8_text(self.source.as_bytes())
            .unwrap_or_default()
            .to_string()
    }

    fn lower_children(&self, node: &Node) -> Vec<SyntaxNode> {
        named_children(node)
            .iter()
            .map(|child| self.lower(child))
            .collect()
    }

    fn lower(&self, node: &Node) -> SyntaxNode {
        match node.kind() {
            "function_definition" => self.lower_function(node),
            "global_statement" => SyntaxNode::Global {
                names: named_children(node)
                    .iter()
                    .filter(|c| c.kind() == "identifier")
                    .map(|c| self.text(c))
                    .collect(),
                span: node_span(node),
            },
            "expression_statement" if node.named_child_count() == 1 => {
                match node.named_child(0) {
                    Some(inner) => self.lower(&inner),
                    None => self.lower_other(node),
                }
            }
            "assignment" => self.lower_assignment(node),
            "augmented_assignment" => self.lower_aug_assignment(node),
            "call" => self.lower_call(node),
            "attribute" => self.lower_attribute(node),
            "identifier" => SyntaxNode::Name {
                id: self.text(node),
                span: node_span(node),
            },
            "decorated_definition" => self.lower_decorated(node),
            _ => self.lower_other(node),
        }
    }

    fn lower_other(&self, node: &Node) -> SyntaxNode {
        SyntaxNode::Other {
            kind: node.kind().to_string(),
            children: self.lower_children(node),
            span: node_span(node),
        }
    }

    fn lower_function(&self, node: &Node) -> SyntaxNode {
        let Some(name) = node.child_by_field_name("name") else {
            return self.lower_other(node);
        };
        let params = node
            .child_by_field_name("parameters")
            .map(|p| self.lower_params(&p))
            .unwrap_or_default();
        let body = node
            .child_by_field_name("body")
            .map(|b| self.lower_children(&b))
            .unwrap_or_default();

        SyntaxNode::FunctionDef {
            name: self.text(&name),
            params,
            body,
            decorators: Vec::new(),
            span: node_span(node),
        }
    }

    /// Positional-or-keyword parameter names
    ///
    /// Names before `/` are positional-only and names after `*`/`*args` are
    /// keyword-only; neither belongs to the list.
    fn lower_params(&self, params: &Node) -> Vec<String> {
        let mut names = Vec::new();
        for param in named_children(params) {
            match param.kind() {
                "identifier" => names.push(self.text(&param)),
                "default_parameter" | "typed_default_parameter" => {
                    if let Some(name) = param
                        .child_by_field_name("name")
                        .filter(|n| n.kind() == "identifier")
                    {
                        names.push(self.text(&name));
                    }
                }
                "typed_parameter" => match param.named_child(0) {
                    Some(inner) if inner.kind() == "identifier" => names.push(self.text(&inner)),
                    Some(inner) if inner.kind() == "list_splat_pattern" => break,
                    _ => {}
                },
                "positional_separator" => names.clear(),
                "keyword_separator" | "list_splat_pattern" => break,
                _ => {}
            }
        }
        names
    }

    fn lower_assignment(&self, node: &Node) -> SyntaxNode {
        // `x: int = 1` is an annotated assignment, a different statement kind
        if node.child_by_field_name("type").is_some() {
            return self.lower_other(node);
        }

        let mut targets = Vec::new();
        let mut current = *node;
        loop {
            let Some(left) = current.child_by_field_name("left") else {
                return self.lower_other(node);
            };
            targets.push(self.lower(&left));

            match current.child_by_field_name("right") {
                Some(right)
                    if right.kind() == "assignment"
                        && right.child_by_field_name("type").is_none() =>
                {
                    current = right;
                }
                Some(right) => {
                    return SyntaxNode::Assign {
                        targets,
                        value: Box::new(self.lower(&right)),
                        span: node_span(node),
                    };
                }
                None => return self.lower_other(node),
            }
        }
    }

    fn lower_aug_assignment(&self, node: &Node) -> SyntaxNode {
        match (
            node.child_by_field_name("left"),
            node.child_by_field_name("right"),
        ) {
            (Some(left), Some(right)) => SyntaxNode::AugAssign {
                target: Box::new(self.lower(&left)),
                value: Box::new(self.lower(&right)),
                span: node_span(node),
            },
            _ => self.lower_other(node),
        }
    }

    fn lower_call(&self, node: &Node) -> SyntaxNode {
        let Some(function) = node.child_by_field_name("function") else {
            return self.lower_other(node);
        };

        let mut args = Vec::new();
        let mut keywords = Vec::new();
        if let Some(arguments) = node.child_by_field_name("arguments") {
            if arguments.kind() == "argument_list" {
                for arg in named_children(&arguments) {
                    match arg.kind() {
                        "keyword_argument" => {
                            if let (Some(name), Some(value)) = (
                                arg.child_by_field_name("name"),
                                arg.child_by_field_name("value"),
                            ) {
                                keywords.push(Keyword::new(self.text(&name), self.lower(&value)));
                            }
                        }
                        "dictionary_splat" => {
                            if let Some(value) = arg.named_child(0) {
                                keywords.push(Keyword::unpacked(self.lower(&value)));
                            }
                        }
                        _ => args.push(self.lower(&arg)),
                    }
                }
            } else {
                // f(x for x in xs)
                args.push(self.lower(&arguments));
            }
        }

        SyntaxNode::Call {
            func: Box::new(self.lower(&function)),
            args,
            keywords,
            span: node_span(node),
        }
    }

    fn lower_attribute(&self, node: &Node) -> SyntaxNode {
        match (
            node.child_by_field_name("object"),
            node.child_by_field_name("attribute"),
        ) {
            (Some(object), Some(attr)) => SyntaxNode::Attribute {
                value: Box::new(self.lower(&object)),
                attr: self.text(&attr),
                span: node_span(node),
            },
            _ => self.lower_other(node),
        }
    }

    /// Decorators of a function belong to the function itself and are
    /// walked after its body; other decorated definitions keep the
    /// definition first, decorators after
    fn lower_decorated(&self, node: &Node) -> SyntaxNode {
        let decorators: Vec<SyntaxNode> = named_children(node)
            .iter()
            .filter(|c| c.kind() == "decorator")
            .map(|c| self.lower(c))
            .collect();

        let definition = node.child_by_field_name("definition").map(|d| self.lower(&d));
        match definition {
            Some(function @ SyntaxNode::FunctionDef { .. }) => function.with_decorators(decorators),
            definition => SyntaxNode::Other {
                kind: node.kind().to_string(),
                children: definition.into_iter().chain(decorators).collect(),
                span: node_span(node),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lower_source(source: &str) -> Vec<SyntaxNode> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .unwrap();
        let tree = parser.parse(source, None).unwrap();
        match PythonLowering::new(source).lower_module(&tree.root_node()) {
            SyntaxNode::Module { body } => body,
            other => panic!("expected module, got {:?}", other),
        }
    }

    fn params_of(node: &SyntaxNode) -> Vec<String> {
        match node {
            SyntaxNode::FunctionDef { params, .. } => params.clone(),
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_function_params_kinds() {
        let body = lower_source("def f(a, b=1, c: int = 2, d: str, *args, e, **kw):\n    pass\n");
        assert_eq!(params_of(&body[0]), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_positional_only_params_excluded() {
        let body = lower_source("def f(a, /, b, *, c):\n    pass\n");
        assert_eq!(params_of(&body[0]), vec!["b"]);
    }

    #[test]
    fn test_chained_assignment_flattens() {
        let body = lower_source("a = b = 1\n");
        match &body[0] {
            SyntaxNode::Assign { targets, .. } => {
                let names: Vec<_> = targets.iter().filter_map(|t| t.as_name()).collect();
                assert_eq!(names, vec!["a", "b"]);
            }
            other => panic!("expected assign, got {:?}", other),
        }
    }

    #[test]
    fn test_annotated_assignment_is_other() {
        let body = lower_source("x: int = 1\n");
        assert!(matches!(&body[0], SyntaxNode::Other { kind, .. } if kind == "assignment"));
    }

    #[test]
    fn test_thread_call_keywords() {
        let body = lower_source("t = Thread(target=worker, args=(x,))\n");
        let SyntaxNode::Assign { value, .. } = &body[0] else {
            panic!("expected assign, got {:?}", body[0]);
        };
        let SyntaxNode::Call { func, keywords, .. } = value.as_ref() else {
            panic!("expected call, got {:?}", value);
        };
        assert_eq!(func.as_name(), Some("Thread"));
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0].arg.as_deref(), Some("target"));
        assert_eq!(keywords[0].value.as_name(), Some("worker"));
    }

    #[test]
    fn test_method_call_and_global() {
        let body = lower_source("def g():\n    global counter, total\n    lock.acquire()\n");
        let SyntaxNode::FunctionDef { body, .. } = &body[0] else {
            panic!("expected function");
        };
        assert_eq!(
            body[0],
            SyntaxNode::Global {
                names: vec!["counter".to_string(), "total".to_string()],
                span: body[0].span(),
            }
        );
        let SyntaxNode::Call { func, .. } = &body[1] else {
            panic!("expected call, got {:?}", body[1]);
        };
        assert!(matches!(func.as_ref(), SyntaxNode::Attribute { attr, .. } if attr == "acquire"));
    }

    #[test]
    fn test_comments_skipped_and_spans() {
        let body = lower_source("# header\nx += 1\n");
        assert_eq!(body.len(), 1);
        assert!(matches!(&body[0], SyntaxNode::AugAssign { .. }));
        assert_eq!(body[0].span().start_line, 2);
    }

    #[test]
    fn test_decorated_function_keeps_decorators() {
        let body = lower_source("@traced(guard.acquire())\ndef worker(data):\n    data = 1\n");
        let function = &body[0];
        let SyntaxNode::FunctionDef {
            name, decorators, ..
        } = function
        else {
            panic!("expected function, got {:?}", function);
        };
        assert_eq!(name, "worker");
        assert_eq!(decorators.len(), 1);

        // body statement first, decorator last
        let children = function.children();
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0], SyntaxNode::Assign { .. }));
        let SyntaxNode::Other { kind, children: inner, .. } = children[1] else {
            panic!("expected decorator, got {:?}", children[1]);
        };
        assert_eq!(kind, "decorator");
        let SyntaxNode::Call { args, .. } = &inner[0] else {
            panic!("expected call, got {:?}", inner[0]);
        };
        assert!(matches!(&args[0], SyntaxNode::Call { func, .. }
            if matches!(func.as_ref(), SyntaxNode::Attribute { attr, .. } if attr == "acquire")));
    }

    #[test]
    fn test_decorated_class_is_other() {
        let body = lower_source("@dataclass\nclass Point:\n    pass\n");
        let SyntaxNode::Other { kind, children, .. } = &body[0] else {
            panic!("expected other, got {:?}", body[0]);
        };
        assert_eq!(kind, "decorated_definition");
        assert!(matches!(&children[0], SyntaxNode::Other { kind, .. } if kind == "class_definition"));
        assert!(matches!(&children[1], SyntaxNode::Other { kind, .. } if kind == "decorator"));
    }
}
