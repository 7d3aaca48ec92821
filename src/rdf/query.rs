//! Composable statement queries
//!
//! A [`Query`] is a builder for a boolean predicate over [`Statement`]s.
//! Leaf matchers (`graph`, `subject`, `predicate`, `object`) are AND-ed
//! together; [`Query::or`] folds the next matcher into the previous one and
//! [`Query::group`] opens a nested scope that counts as a single matcher of
//! its parent.
//!
//! Scopes live in an arena owned by the query. A group matcher only stores
//! the index of its scope, so matchers added to the group after it was
//! opened are still seen when the parent is evaluated.
//!
//! ```rust
//! use triplekit::rdf::{KnowledgeBase, NamedNode, Statement};
//!
//! let mut kb = KnowledgeBase::new("people");
//! kb.insert(&[Statement::new("max".into(), "knows".into(), NamedNode::new("mara"), None)]);
//!
//! let hits = kb
//!     .select()
//!     .group()
//!     .subject("max")
//!     .object(NamedNode::new("mara"))
//!     .end_group()
//!     .or()
//!     .subject("bill")
//!     .results();
//! assert_eq!(hits.len(), 1);
//! ```

use super::store::KnowledgeBase;
use super::types::{NamedNode, Node, Statement};
use std::mem;

/// How the next leaf matcher joins the scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Combinator {
    #[default]
    And,
    Or,
}

#[derive(Debug, Clone)]
enum Matcher {
    /// `None` matches only statements without a graph
    Graph(Option<NamedNode>),
    Subject(NamedNode),
    Predicate(NamedNode),
    Object(Node),
    /// Full evaluation of the scope at this arena index
    Group(usize),
    Either(Box<Matcher>, Box<Matcher>),
}

#[derive(Debug, Clone, Default)]
struct Scope {
    parent: Option<usize>,
    conjuncts: Vec<Matcher>,
    next: Combinator,
}

/// Statement query, optionally bound to a knowledge base
#[derive(Debug, Clone)]
pub struct Query<'a> {
    base: Option<&'a KnowledgeBase>,
    scopes: Vec<Scope>,
    current: usize,
}

impl<'a> Query<'a> {
    /// Create an unbound query that matches every statement
    pub fn new() -> Self {
        Self {
            base: None,
            scopes: vec![Scope::default()],
            current: 0,
        }
    }

    /// Open a nested group
    pub fn group(mut self) -> Self {
        let child = self.scopes.len();
        self.scopes.push(Scope {
            parent: Some(self.current),
            ..Scope::default()
        });
        self.push(Matcher::Group(child));
        self.current = child;
        self
    }

    /// Close the current group. A no-op on the root scope.
    pub fn end_group(mut self) -> Self {
        if let Some(parent) = self.scopes[self.current].parent {
            self.current = parent;
        }
        self
    }

    /// OR the next matcher with the one added just before it
    pub fn or(mut self) -> Self {
        self.scopes[self.current].next = Combinator::Or;
        self
    }

    /// Match the statement graph; `None` matches unscoped statements only
    pub fn graph(mut self, node: Option<NamedNode>) -> Self {
        self.push(Matcher::Graph(node));
        self
    }

    pub fn subject(mut self, node: impl Into<NamedNode>) -> Self {
        self.push(Matcher::Subject(node.into()));
        self
    }

    pub fn predicate(mut self, node: impl Into<NamedNode>) -> Self {
        self.push(Matcher::Predicate(node.into()));
        self
    }

    pub fn object(mut self, node: impl Into<Node>) -> Self {
        self.push(Matcher::Object(node.into()));
        self
    }

    /// Bind a knowledge base as the source for [`results`](Self::results)
    /// and [`result_indexes`](Self::result_indexes)
    pub fn bind(mut self, base: &'a KnowledgeBase) -> Self {
        self.base = Some(base);
        self
    }

    /// Evaluate the current scope against a single statement
    pub fn evaluate(&self, stmt: &Statement) -> bool {
        self.evaluate_scope(self.current, stmt)
    }

    /// Matching statements of the bound knowledge base, in store order.
    /// Empty when unbound.
    pub fn results(&self) -> Vec<&'a Statement> {
        match self.base {
            Some(base) => self.results_from(base.statements()),
            None => Vec::new(),
        }
    }

    pub fn results_from<'s>(&self, stmts: &'s [Statement]) -> Vec<&'s Statement> {
        stmts.iter().filter(|stmt| self.evaluate(stmt)).collect()
    }

    /// Positions of matching statements in the bound knowledge base
    pub fn result_indexes(&self) -> Vec<usize> {
        match self.base {
            Some(base) => self.result_indexes_from(base.statements()),
            None => Vec::new(),
        }
    }

    pub fn result_indexes_from(&self, stmts: &[Statement]) -> Vec<usize> {
        stmts
            .iter()
            .enumerate()
            .filter(|(_, stmt)| self.evaluate(stmt))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn push(&mut self, matcher: Matcher) {
        let scope = &mut self.scopes[self.current];
        match mem::take(&mut scope.next) {
            Combinator::And => scope.conjuncts.push(matcher),
            // an empty scope is `true`, and `true || x` stays `true`
            Combinator::Or => {
                if let Some(prev) = scope.conjuncts.pop() {
                    scope
                        .conjuncts
                        .push(Matcher::Either(Box::new(prev), Box::new(matcher)));
                }
            }
        }
    }

    fn evaluate_scope(&self, idx: usize, stmt: &Statement) -> bool {
        self.scopes[idx]
            .conjuncts
            .iter()
            .all(|m| self.evaluate_matcher(m, stmt))
    }

    fn evaluate_matcher(&self, matcher: &Matcher, stmt: &Statement) -> bool {
        match matcher {
            Matcher::Graph(node) => stmt.graph() == node.as_ref(),
            Matcher::Subject(node) => stmt.subject() == node,
            Matcher::Predicate(node) => stmt.predicate() == node,
            Matcher::Object(node) => stmt.object() == node,
            Matcher::Group(idx) => self.evaluate_scope(*idx, stmt),
            Matcher::Either(left, right) => {
                self.evaluate_matcher(left, stmt) || self.evaluate_matcher(right, stmt)
            }
        }
    }
}

impl Default for Query<'_> {
    fn default() -> Self {
        Self::new()
    }
}
