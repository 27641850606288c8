//! Language-neutral syntax tree
//!
//! Closed set of node variants covering the statements and expressions the
//! concurrency extractor reads. Everything else lowers to `Other`, which
//! keeps its children so nested definitions, calls and assignments are
//! still reachable.

use std::collections::VecDeque;

use crate::shared::models::Span;

/// Keyword argument of a call (`target=worker`); `arg` is `None` for `**kwargs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub arg: Option<String>,
    pub value: SyntaxNode,
}

impl Keyword {
    pub fn new(arg: impl Into<String>, value: SyntaxNode) -> Self {
        Self {
            arg: Some(arg.into()),
            value,
        }
    }

    /// `**value`
    pub fn unpacked(value: SyntaxNode) -> Self {
        Self { arg: None, value }
    }
}

/// Syntax node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// Root of one source unit
    Module { body: Vec<SyntaxNode> },

    /// `@decorators def name(params): body`
    FunctionDef {
        name: String,
        params: Vec<String>,
        body: Vec<SyntaxNode>,
        /// Visited after the body, inside the function's scope
        decorators: Vec<SyntaxNode>,
        span: Span,
    },

    /// `global a, b`
    Global { names: Vec<String>, span: Span },

    /// `t1 = t2 = value`
    Assign {
        targets: Vec<SyntaxNode>,
        value: Box<SyntaxNode>,
        span: Span,
    },

    /// `target op= value`
    AugAssign {
        target: Box<SyntaxNode>,
        value: Box<SyntaxNode>,
        span: Span,
    },

    /// `func(args, keywords)`
    Call {
        func: Box<SyntaxNode>,
        args: Vec<SyntaxNode>,
        keywords: Vec<Keyword>,
        span: Span,
    },

    /// `value.attr`
    Attribute {
        value: Box<SyntaxNode>,
        attr: String,
        span: Span,
    },

    /// Plain identifier
    Name { id: String, span: Span },

    /// Any other construct; only its children matter
    Other {
        kind: String,
        children: Vec<SyntaxNode>,
        span: Span,
    },
}

impl SyntaxNode {
    pub fn module(body: Vec<SyntaxNode>) -> Self {
        SyntaxNode::Module { body }
    }

    pub fn function_def<S: Into<String>>(
        name: impl Into<String>,
        params: impl IntoIterator<Item = S>,
        body: Vec<SyntaxNode>,
    ) -> Self {
        SyntaxNode::FunctionDef {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            body,
            decorators: Vec::new(),
            span: Span::zero(),
        }
    }

    pub fn global<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        SyntaxNode::Global {
            names: names.into_iter().map(Into::into).collect(),
            span: Span::zero(),
        }
    }

    pub fn assign(targets: Vec<SyntaxNode>, value: SyntaxNode) -> Self {
        SyntaxNode::Assign {
            targets,
            value: Box::new(value),
            span: Span::zero(),
        }
    }

    pub fn aug_assign(target: SyntaxNode, value: SyntaxNode) -> Self {
        SyntaxNode::AugAssign {
            target: Box::new(target),
            value: Box::new(value),
            span: Span::zero(),
        }
    }

    pub fn call(func: SyntaxNode, args: Vec<SyntaxNode>, keywords: Vec<Keyword>) -> Self {
        SyntaxNode::Call {
            func: Box::new(func),
            args,
            keywords,
            span: Span::zero(),
        }
    }

    /// `receiver.method()`
    pub fn method_call(receiver: impl Into<String>, method: impl Into<String>) -> Self {
        Self::call(Self::attribute(Self::name(receiver), method), vec![], vec![])
    }

    pub fn attribute(value: SyntaxNode, attr: impl Into<String>) -> Self {
        SyntaxNode::Attribute {
            value: Box::new(value),
            attr: attr.into(),
            span: Span::zero(),
        }
    }

    pub fn name(id: impl Into<String>) -> Self {
        SyntaxNode::Name {
            id: id.into(),
            span: Span::zero(),
        }
    }

    pub fn other(kind: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode::Other {
            kind: kind.into(),
            children,
            span: Span::zero(),
        }
    }

    /// Integer literal placeholder
    pub fn literal(text: impl Into<String>) -> Self {
        Self::other(text, vec![])
    }

    /// Attach decorators to a function definition; other nodes are returned
    /// unchanged
    pub fn with_decorators(mut self, new_decorators: Vec<SyntaxNode>) -> Self {
        if let SyntaxNode::FunctionDef { decorators, .. } = &mut self {
            *decorators = new_decorators;
        }
        self
    }

    /// Replace the span of this node
    pub fn with_span(mut self, new_span: Span) -> Self {
        match &mut self {
            SyntaxNode::Module { .. } => {}
            SyntaxNode::FunctionDef { span, .. }
            | SyntaxNode::Global { span, .. }
            | SyntaxNode::Assign { span, .. }
            | SyntaxNode::AugAssign { span, .. }
            | SyntaxNode::Call { span, .. }
            | SyntaxNode::Attribute { span, .. }
            | SyntaxNode::Name { span, .. }
            | SyntaxNode::Other { span, .. } => *span = new_span,
        }
        self
    }

    /// Source span (modules span nothing in particular)
    pub fn span(&self) -> Span {
        match self {
            SyntaxNode::Module { .. } => Span::zero(),
            SyntaxNode::FunctionDef { span, .. }
            | SyntaxNode::Global { span, .. }
            | SyntaxNode::Assign { span, .. }
            | SyntaxNode::AugAssign { span, .. }
            | SyntaxNode::Call { span, .. }
            | SyntaxNode::Attribute { span, .. }
            | SyntaxNode::Name { span, .. }
            | SyntaxNode::Other { span, .. } => *span,
        }
    }

    /// Identifier if this is a plain name
    pub fn as_name(&self) -> Option<&str> {
        match self {
            SyntaxNode::Name { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Direct children in source-visit order
    ///
    /// Assignments yield targets before the value, calls yield the callee
    /// before positional and keyword arguments, functions yield the body
    /// before decorators.
    pub fn children(&self) -> Vec<&SyntaxNode> {
        match self {
            SyntaxNode::Module { body } => body.iter().collect(),
            SyntaxNode::FunctionDef {
                body, decorators, ..
            } => body.iter().chain(decorators.iter()).collect(),
            SyntaxNode::Global { .. } | SyntaxNode::Name { .. } => Vec::new(),
            SyntaxNode::Assign { targets, value, .. } => targets
                .iter()
                .chain(std::iter::once(value.as_ref()))
                .collect(),
            SyntaxNode::AugAssign { target, value, .. } => vec![target.as_ref(), value.as_ref()],
            SyntaxNode::Call {
                func,
                args,
                keywords,
                ..
            } => std::iter::once(func.as_ref())
                .chain(args.iter())
                .chain(keywords.iter().map(|k| &k.value))
                .collect(),
            SyntaxNode::Attribute { value, .. } => vec![value.as_ref()],
            SyntaxNode::Other { children, .. } => children.iter().collect(),
        }
    }

    /// Every plain name in this subtree, breadth-first (the node itself first)
    pub fn walk_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut queue: VecDeque<&SyntaxNode> = VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            if let SyntaxNode::Name { id, .. } = node {
                names.push(id.as_str());
            }
            queue.extend(node.children());
        }
        names
    }
}
