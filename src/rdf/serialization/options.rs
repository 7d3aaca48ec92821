//! Turtle codec configuration
//!
//! Options can be built in code or loaded from YAML/JSON. Missing keys fall
//! back to their defaults, so `{}` is a valid document.

use crate::rdf::Namespace;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid YAML document
    #[error("Invalid YAML options: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid JSON document
    #[error("Invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Turtle parser configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleOptions {
    /// Marshal IRIs as `prefix:local` and emit `@prefix` directives
    pub substitute: bool,
    /// Extra prefixes; they override the built-in defaults
    pub namespace: Namespace,
    /// Marshal one predicate / object per line with subject comments
    pub pretty_print: bool,
    /// Fail Unmarshal when no base IRI can be determined
    pub require_base_iri: bool,
    /// Use the first subject as base IRI when there is no `@base`
    pub fallback_to_first_subject_for_base_iri: bool,
}

impl TurtleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_substitute(mut self, substitute: bool) -> Self {
        self.substitute = substitute;
        self
    }

    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    pub fn with_require_base_iri(mut self, require: bool) -> Self {
        self.require_base_iri = require;
        self
    }

    pub fn with_fallback_to_first_subject(mut self, fallback: bool) -> Self {
        self.fallback_to_first_subject_for_base_iri = fallback;
        self
    }

    /// Load options from a YAML document
    pub fn from_yaml_str(input: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Load options from a JSON document
    pub fn from_json_str(input: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load options from a file; `.json` files are read as JSON, anything
    /// else as YAML
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&input),
            _ => Self::from_yaml_str(&input),
        }
    }
}
