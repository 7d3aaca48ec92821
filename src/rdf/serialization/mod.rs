//! RDF serialization formats
//!
//! Every format implements [`Parser`], a two-way text codec over
//! [`Statement`]s. Only Turtle is provided.

mod options;
mod turtle;

pub use options::{ConfigError, ConfigResult, TurtleOptions};
pub use turtle::TurtleParser;

use super::Statement;
use thiserror::Error;

/// Parse errors
///
/// All of them abort the whole call; no partial result is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A clause or predicate group lacks a leading IRI token
    #[error("Malformed clause: {0}")]
    MalformedClause(String),

    /// An object is neither a literal nor an IRI
    #[error("Malformed object: {0}")]
    MalformedObject(String),

    /// More than one `@base` directive
    #[error("Found {0} '@base <...> .' directives, expected at most one")]
    AmbiguousBaseDirective(usize),

    /// A base IRI is required but no directive was found
    #[error("No '@base <...> .' directive found")]
    MissingBaseDirective,

    /// A base IRI is required, there is no directive and no subject to
    /// fall back on
    #[error("No '@base <...> .' directive and no subject to use as base IRI")]
    NoSubjectForBaseIri,
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Serialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    /// The target format cannot express this kind of node
    #[error("Cannot marshal node of unknown kind: {0}")]
    UnsupportedNodeKind(String),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// Text codec for statements
pub trait Parser {
    /// Render statements as text
    fn marshal(&self, stmts: &[Statement]) -> SerializeResult<String>;

    /// Read statements from text
    fn unmarshal(&self, text: &str) -> ParseResult<Vec<Statement>>;
}
