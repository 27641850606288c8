//! TreeWalker - single-pass concurrency fact extractor
//!
//! ## Algorithm
//! One depth-first visit of the syntax tree:
//! 1. `def f(params)` opens a new lexical scope for its body
//! 2. `global a, b` adds names to the declared-global set (whole-unit union)
//! 3. `m.acquire()` / `m.release()` update the flow-order mutex model
//! 4. `t = Thread(target=f)` records a spawn edge (root edge first)
//! 5. `x = ...` / `x += ...` record a write fact for every qualifying name
//!    in the target
//!
//! A write qualifies when the name is a declared global or a parameter of
//! the current function; augmented writes also qualify anywhere inside the
//! entry function.
//!
//! The mutex model is a heuristic: one "held" slot, updated in visit order,
//! with no relation between a release and any particular earlier acquire.

use indexmap::IndexSet;
use tracing::{debug, trace, warn};

use super::error::{ExtractionError, Result};
use crate::config::{ExtractionConfig, RootEdgePolicy, SpawnErrorPolicy};
use crate::features::concurrency_analysis::domain::*;
use crate::features::parsing::domain::{Keyword, SyntaxNode};
use crate::shared::models::Span;

/// Walker state for one traversal
///
/// Consumed by `traverse`, so every traversal starts fresh.
pub struct TreeWalker<'c> {
    config: &'c ExtractionConfig,
    globals: IndexSet<String>,
    mutexes: MutexStateTable,
    first_defined: Option<String>,
    spawn_edges: Vec<SpawnEdge>,
    write_facts: Vec<WriteFact>,
}

impl<'c> TreeWalker<'c> {
    pub fn new(config: &'c ExtractionConfig) -> Self {
        Self {
            config,
            globals: IndexSet::new(),
            mutexes: MutexStateTable::new(),
            first_defined: None,
            spawn_edges: Vec::new(),
            write_facts: Vec::new(),
        }
    }

    /// Walk `root` once and return the collected facts
    pub fn traverse(mut self, root: &SyntaxNode) -> Result<WalkOutput> {
        self.visit(root, ScopeContext::module_level())?;

        debug!(
            spawn_edges = self.spawn_edges.len(),
            write_facts = self.write_facts.len(),
            globals = self.globals.len(),
            mutexes = self.mutexes.len(),
            "traversal complete"
        );

        Ok(WalkOutput {
            spawn_edges: self.spawn_edges,
            write_facts: self.write_facts,
            declared_globals: self.globals.into_iter().collect(),
        })
    }

    fn visit<'t>(&mut self, node: &'t SyntaxNode, scope: ScopeContext<'t>) -> Result<()> {
        match node {
            SyntaxNode::FunctionDef { name, params, .. } => {
                if self.first_defined.is_none() {
                    self.first_defined = Some(name.clone());
                }
                self.visit_children(node, ScopeContext::function(name, params))
            }
            SyntaxNode::Global { names, .. } => {
                for name in names {
                    self.globals.insert(name.clone());
                }
                Ok(())
            }
            SyntaxNode::Call { func, .. } => {
                self.record_lock_transition(func);
                self.visit_children(node, scope)
            }
            SyntaxNode::Assign { targets, value, .. } => {
                self.record_spawn(targets, value, scope)?;
                for target in targets {
                    self.record_writes(target, AccessType::Write, scope);
                }
                self.visit_children(node, scope)
            }
            SyntaxNode::AugAssign { target, .. } => {
                self.record_writes(target, AccessType::ReadWrite, scope);
                self.visit_children(node, scope)
            }
            SyntaxNode::Module { .. }
            | SyntaxNode::Attribute { .. }
            | SyntaxNode::Name { .. }
            | SyntaxNode::Other { .. } => self.visit_children(node, scope),
        }
    }

    fn visit_children<'t>(&mut self, node: &'t SyntaxNode, scope: ScopeContext<'t>) -> Result<()> {
        for child in node.children() {
            self.visit(child, scope)?;
        }
        Ok(())
    }

    /// `<name>.acquire()` / `<name>.release()`
    fn record_lock_transition(&mut self, func: &SyntaxNode) {
        let SyntaxNode::Attribute { value, attr, .. } = func else {
            return;
        };
        let Some(mutex) = value.as_name() else {
            return;
        };

        if *attr == self.config.acquire_method {
            self.mutexes.acquire(mutex);
            trace!(mutex, ordinal = %self.mutexes.current_ordinal(), "mutex acquired");
        } else if *attr == self.config.release_method {
            self.mutexes.release(mutex);
            trace!(mutex, "mutex released");
        }
    }

    /// `<name> = <Constructor>(<kw>=<function>, ...)`
    fn record_spawn(
        &mut self,
        targets: &[SyntaxNode],
        value: &SyntaxNode,
        scope: ScopeContext<'_>,
    ) -> Result<()> {
        if targets.first().and_then(SyntaxNode::as_name).is_none() {
            return Ok(());
        }
        let SyntaxNode::Call {
            func,
            keywords,
            span,
            ..
        } = value
        else {
            return Ok(());
        };
        if !func
            .as_name()
            .is_some_and(|ctor| self.config.is_thread_constructor(ctor))
        {
            return Ok(());
        }

        match spawn_target(keywords) {
            Ok(spawned) => {
                if self.spawn_edges.is_empty() {
                    let root = SpawnEdge::root(self.root_target(scope));
                    trace!(spawned = %root.spawned, "root edge");
                    self.spawn_edges.push(root);
                }
                trace!(spawner = scope.function, spawned, "spawn edge");
                self.spawn_edges.push(SpawnEdge::new(scope.function, spawned));
                Ok(())
            }
            Err(reason) => self.malformed_spawn(scope, *span, reason),
        }
    }

    fn root_target<'a>(&'a self, scope: ScopeContext<'a>) -> &'a str {
        match self.config.root_edge_policy {
            RootEdgePolicy::SpawningFunction => scope.function,
            RootEdgePolicy::FirstDefinedFunction => {
                self.first_defined.as_deref().unwrap_or(scope.function)
            }
        }
    }

    fn malformed_spawn(&self, scope: ScopeContext<'_>, span: Span, reason: String) -> Result<()> {
        let error = ExtractionError::malformed_spawn(scope.function, span, reason);
        match self.config.spawn_error_policy {
            SpawnErrorPolicy::Abort => Err(error),
            SpawnErrorPolicy::Skip => {
                warn!(%error, "skipping thread constructor call");
                Ok(())
            }
        }
    }

    fn record_writes(&mut self, target: &SyntaxNode, access_type: AccessType, scope: ScopeContext<'_>) {
        let in_entry = access_type.is_read() && scope.function == self.config.entry_function;

        for name in target.walk_names() {
            if !(self.globals.contains(name) || scope.has_param(name) || in_entry) {
                continue;
            }
            let ordinal = self.mutexes.current_ordinal();
            trace!(function = scope.function, variable = name, %ordinal, "write fact");
            self.write_facts.push(
                WriteFact::new(scope.function, name, ordinal).with_access_type(access_type),
            );
        }
    }
}

/// Function named by the first keyword argument
fn spawn_target(keywords: &[Keyword]) -> std::result::Result<&str, String> {
    let first = keywords
        .first()
        .ok_or_else(|| "thread constructor call has no keyword argument".to_string())?;
    first.value.as_name().ok_or_else(|| match &first.arg {
        Some(arg) => format!("keyword argument '{}' does not name a function", arg),
        None => "first keyword argument is an unpacked mapping".to_string(),
    })
}
