//! RDF namespace and prefix management
//!
//! A namespace maps a short prefix to an IRI stem. Stems are stored without
//! the trailing `#`; the Turtle codec adds it when composing or abbreviating
//! IRIs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prefixes every Turtle session starts from
pub const DEFAULT_PREFIXES: &[(&str, &str)] = &[
    ("xsd", "http://www.w3.org/2001/XMLSchema"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema"),
    ("owl", "http://www.w3.org/2002/07/owl"),
    ("sesame", "http://www.openrdf.org/schema/sesame"),
    ("fn", "http://www.w3.org/2005/xpath-functions"),
    ("foaf", "http://xmlns.com/foaf/0.1"),
    ("dc", "http://purl.org/dc/elements/1.1"),
    ("hint", "http://www.bigdata.com/queryHints"),
    ("bd", "http://www.bigdata.com/rdf"),
    ("bds", "http://www.bigdata.com/rdf/search"),
];

/// Prefix → IRI stem mapping
///
/// Keys are kept sorted so listing and substitution are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace {
    prefixes: BTreeMap<String, String>,
}

impl Namespace {
    /// Create a namespace pre-populated with [`DEFAULT_PREFIXES`]
    pub fn new() -> Self {
        let mut ns = Self::empty();
        for (prefix, stem) in DEFAULT_PREFIXES {
            ns.set(*prefix, *stem);
        }
        ns
    }

    /// Create a namespace without any prefixes
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the stem for a prefix
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(|s| s.as_str())
    }

    /// Add or overwrite a prefix
    pub fn set(&mut self, prefix: impl Into<String>, stem: impl Into<String>) {
        self.prefixes.insert(prefix.into(), stem.into());
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.contains_key(prefix)
    }

    /// All prefixes, sorted ascending
    pub fn list_keys(&self) -> Vec<String> {
        self.prefixes.keys().cloned().collect()
    }

    /// All stems, in the order of their prefixes
    pub fn list_values(&self) -> Vec<String> {
        self.prefixes.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Iterate `(prefix, stem)` pairs in prefix order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `other` into a copy of this namespace.
    ///
    /// Neither side is modified; on conflicting prefixes `other` wins.
    pub fn include(&self, other: &Namespace) -> Namespace {
        let mut merged = self.clone();
        for (prefix, stem) in other.iter() {
            merged.set(prefix, stem);
        }
        merged
    }
}

impl FromIterator<(String, String)> for Namespace {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            prefixes: iter.into_iter().collect(),
        }
    }
}
