//! RDF type definitions
//!
//! Nodes are immutable values: a statement is built from a subject and a
//! predicate (always named nodes), an object of any node kind and an
//! optional named graph. Equality is structural; nodes of different kinds
//! never compare equal.

use std::fmt;

/// Language assigned to localized literals created without one
pub const DEFAULT_LANGUAGE: &str = "default";

/// Absolute IRI abbreviated as `a` in Turtle
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Named node (IRI)
///
/// The IRI is an opaque string; no well-formedness check is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedNode {
    iri: String,
}

impl NamedNode {
    /// Create a new named node from an IRI string
    pub fn new(iri: impl Into<String>) -> Self {
        Self { iri: iri.into() }
    }

    /// Get the IRI string
    pub fn iri(&self) -> &str {
        &self.iri
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iri)
    }
}

impl From<&str> for NamedNode {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

impl From<String> for NamedNode {
    fn from(iri: String) -> Self {
        Self::new(iri)
    }
}

/// Literal tagged with a language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalizedLiteral {
    value: String,
    language: String,
}

impl LocalizedLiteral {
    /// Create a literal with a language tag; an empty tag becomes
    /// [`DEFAULT_LANGUAGE`].
    pub fn new(value: impl Into<String>, language: impl Into<String>) -> Self {
        let mut language = language.into();
        if language.is_empty() {
            language = DEFAULT_LANGUAGE.to_string();
        }
        Self {
            value: value.into(),
            language,
        }
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the language tag
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl fmt::Display for LocalizedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Literal tagged with a datatype IRI
///
/// The value is kept as text. The Turtle codec only ever produces textual
/// values, so richer payloads are not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedLiteral {
    value: String,
    datatype: NamedNode,
}

impl TypedLiteral {
    /// Create a typed literal
    pub fn new(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self {
            value: value.into(),
            datatype,
        }
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the datatype
    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }
}

impl fmt::Display for TypedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Any node that can appear as a statement object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Named node (IRI)
    Named(NamedNode),
    /// Language-tagged literal
    Localized(LocalizedLiteral),
    /// Datatype-tagged literal
    Typed(TypedLiteral),
}

/// Display-only rendering: the raw IRI or the raw literal value.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Named(n) => write!(f, "{}", n),
            Node::Localized(l) => write!(f, "{}", l),
            Node::Typed(t) => write!(f, "{}", t),
        }
    }
}

impl From<NamedNode> for Node {
    fn from(node: NamedNode) -> Self {
        Node::Named(node)
    }
}

impl From<LocalizedLiteral> for Node {
    fn from(lit: LocalizedLiteral) -> Self {
        Node::Localized(lit)
    }
}

impl From<TypedLiteral> for Node {
    fn from(lit: TypedLiteral) -> Self {
        Node::Typed(lit)
    }
}

/// Statement (subject-predicate-object, optionally scoped to a named graph)
///
/// Two statements are equal when subject, predicate and object are equal
/// and either both graphs are absent or both are present and equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    subject: NamedNode,
    predicate: NamedNode,
    object: Node,
    graph: Option<NamedNode>,
}

impl Statement {
    /// Create a new statement
    pub fn new(
        subject: NamedNode,
        predicate: NamedNode,
        object: impl Into<Node>,
        graph: Option<NamedNode>,
    ) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
            graph,
        }
    }

    pub fn subject(&self) -> &NamedNode {
        &self.subject
    }

    pub fn predicate(&self) -> &NamedNode {
        &self.predicate
    }

    pub fn object(&self) -> &Node {
        &self.object
    }

    /// Get the graph, `None` if the statement is not scoped
    pub fn graph(&self) -> Option<&NamedNode> {
        self.graph.as_ref()
    }

    /// Copy of this statement placed into `graph`
    pub fn with_graph(&self, graph: NamedNode) -> Self {
        Self {
            graph: Some(graph),
            ..self.clone()
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.graph {
            Some(graph) => write!(
                f,
                "{} - {} - {} (g: {})",
                self.subject, self.predicate, self.object, graph
            ),
            None => write!(
                f,
                "{} - {} - {} (g: -)",
                self.subject, self.predicate, self.object
            ),
        }
    }
}
