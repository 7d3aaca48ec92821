//! triplekit
//!
//! A small in-memory RDF knowledge base with a composable query builder and a
//! Turtle codec.
//!
//! # Features
//!
//! - Statements made of named nodes, localized literals and typed literals,
//!   each optionally scoped to a named graph
//! - Duplicate-free, insertion-ordered knowledge base with bulk insert/delete
//! - Queries combining graph / subject / predicate / object matchers with
//!   AND, OR and nested groups
//! - Turtle marshal/unmarshal with prefix substitution, pretty printing and
//!   `@base` handling
//! - Codec options loadable from YAML or JSON
//!
//! Everything lives in memory and every operation is a linear scan.
//!
//! ## Example Usage
//!
//! ```rust
//! use triplekit::{KnowledgeBase, NamedNode, Parser, TurtleOptions, TurtleParser};
//!
//! let parser = TurtleParser::new(TurtleOptions::new().with_substitute(true));
//! let stmts = parser
//!     .unmarshal("@base <http://t> .\n@prefix : <http://t#> .\n:max :knows :mara , :bill .")
//!     .unwrap();
//!
//! let mut kb = KnowledgeBase::new("people");
//! kb.insert(&stmts);
//! assert_eq!(kb.len(), 2);
//!
//! let knows_mara = kb
//!     .select()
//!     .subject("http://t#max")
//!     .object(NamedNode::new("http://t#mara"))
//!     .results();
//! assert_eq!(knows_mara.len(), 1);
//!
//! let ttl = parser.marshal(kb.statements()).unwrap();
//! assert!(ttl.contains(":max :knows :bill , :mara ."));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod logging;
pub mod rdf;

// Re-export main types for convenience
pub use rdf::{
    KnowledgeBase, LocalizedLiteral, NamedNode, Namespace, Node, ParseError, ParseResult, Parser,
    Query, SerializeError, SerializeResult, Statement, TurtleOptions, TurtleParser, TypedLiteral,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
