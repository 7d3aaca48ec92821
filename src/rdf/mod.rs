//! RDF knowledge base for triplekit
//!
//! This module provides:
//! - RDF statements (subject-predicate-object with an optional named graph)
//! - An in-memory, insertion-ordered knowledge base
//! - A composable query builder with AND / OR / groups
//! - Prefix namespaces
//! - Turtle serialization
//!
//! # Example
//!
//! ```rust
//! use triplekit::rdf::{KnowledgeBase, LocalizedLiteral, NamedNode, Parser, Statement, TurtleParser};
//!
//! let mut kb = KnowledgeBase::new("people");
//!
//! let alice = NamedNode::new("http://example.org/people#alice");
//! let name = NamedNode::new("http://xmlns.com/foaf/0.1#name");
//! let stmt = Statement::new(alice.clone(), name, LocalizedLiteral::new("Alice", "en"), None);
//! kb.insert(&[stmt]);
//!
//! // Query statements
//! let results = kb.select().subject(alice).results();
//! assert_eq!(results.len(), 1);
//!
//! // Statements without a graph land in the default graph
//! let ttl = TurtleParser::default().marshal(kb.statements()).unwrap();
//! assert!(ttl.starts_with("@base <default-graph> ."));
//! ```

mod namespace;
mod query;
mod serialization;
mod store;
mod types;

pub use types::{
    LocalizedLiteral, NamedNode, Node, Statement, TypedLiteral, DEFAULT_LANGUAGE, RDF_TYPE,
};

pub use store::{KnowledgeBase, DEFAULT_GRAPH, DEFAULT_KB_NAME};

pub use query::Query;

pub use namespace::{Namespace, DEFAULT_PREFIXES};

pub use serialization::{
    ConfigError, ConfigResult, ParseError, ParseResult, Parser, SerializeError, SerializeResult,
    TurtleOptions, TurtleParser,
};
