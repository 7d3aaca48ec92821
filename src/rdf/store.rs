//! Knowledge base implementation
//!
//! An ordered, in-memory list of statements. Every operation is a full
//! scan; insertion order is preserved and nothing is ever sorted.
//!
//! A knowledge base is not synchronized. Callers sharing one across threads
//! must serialize access themselves (e.g. behind a `RwLock`).

use super::query::Query;
use super::types::{NamedNode, Statement};
use tracing::debug;

/// Name used when a knowledge base is created with an empty name
pub const DEFAULT_KB_NAME: &str = "kb";

/// Graph assigned on insert to statements that carry none
pub const DEFAULT_GRAPH: &str = "default-graph";

/// Named collection of statements
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    name: String,
    statements: Vec<Statement>,
    default_graph: NamedNode,
}

impl KnowledgeBase {
    /// Create an empty knowledge base
    pub fn new(name: impl Into<String>) -> Self {
        let mut name = name.into();
        if name.is_empty() {
            name = DEFAULT_KB_NAME.to_string();
        }
        Self {
            name,
            statements: Vec::new(),
            default_graph: NamedNode::new(DEFAULT_GRAPH),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored statements, in insertion order
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn default_graph(&self) -> &NamedNode {
        &self.default_graph
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Add statements, skipping those already present.
    ///
    /// Statements without a graph are stored under the default graph, and
    /// the duplicate check is made against that resolved graph.
    pub fn insert(&mut self, stmts: &[Statement]) {
        let mut inserted = 0usize;
        for stmt in stmts {
            let graph = stmt
                .graph()
                .cloned()
                .unwrap_or_else(|| self.default_graph.clone());

            let exists = !self
                .select()
                .graph(Some(graph.clone()))
                .subject(stmt.subject().clone())
                .predicate(stmt.predicate().clone())
                .object(stmt.object().clone())
                .results()
                .is_empty();

            if !exists {
                self.statements.push(stmt.with_graph(graph));
                inserted += 1;
            }
        }
        debug!(kb = %self.name, requested = stmts.len(), inserted, "insert");
    }

    /// Remove every stored statement matching one of `stmts`.
    ///
    /// A statement without a graph is not defaulted: it matches in every
    /// graph, the default graph included.
    pub fn delete(&mut self, stmts: &[Statement]) {
        let mut removed = 0usize;
        for stmt in stmts {
            let mut query = self.select();
            if let Some(graph) = stmt.graph() {
                query = query.graph(Some(graph.clone()));
            }
            let mut matches = query
                .subject(stmt.subject().clone())
                .predicate(stmt.predicate().clone())
                .object(stmt.object().clone())
                .result_indexes();

            // highest index first so earlier positions stay valid
            matches.sort_unstable_by(|a, b| b.cmp(a));
            for idx in matches {
                self.statements.remove(idx);
                removed += 1;
            }
        }
        debug!(kb = %self.name, requested = stmts.len(), removed, "delete");
    }

    /// Start a new query bound to this knowledge base
    pub fn select(&self) -> Query<'_> {
        Query::new().bind(self)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new(DEFAULT_KB_NAME)
    }
}
