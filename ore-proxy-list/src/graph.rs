//! RDF graph - a collection of triples with fixed-pattern queries
//!
//! The `Graph` type uses `Vec<Triple>` to preserve duplicates (bag
//! semantics). Call `dedupe()` explicitly if you want set semantics.
//! Query support is limited to the pattern shapes list reconstruction
//! needs: any combination of fixed and wildcard positions.

use crate::{Term, Triple};
use std::collections::BTreeMap;

/// A collection of RDF triples
///
/// # Design Decisions
///
/// - **Vec storage**: preserves duplicates and insertion order.
/// - **Explicit deduplication**: call `dedupe()` for set semantics.
/// - **Deterministic output**: call `sort()` before formatting for stable
///   SPO-lexicographic ordering.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// The triples in this graph
    triples: Vec<Triple>,
    /// Prefix mappings for formatting (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Iterate over triples matching a pattern
    ///
    /// `None` in a position is a wildcard; `Some(term)` must match exactly.
    pub fn matching<'a>(
        &'a self,
        s: Option<&'a Term>,
        p: Option<&'a Term>,
        o: Option<&'a Term>,
    ) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(move |t| t.matches(s, p, o))
    }

    /// Objects of all triples with the given subject and predicate
    pub fn objects<'a>(&'a self, s: &'a Term, p: &'a Term) -> impl Iterator<Item = &'a Term> {
        self.matching(Some(s), Some(p), None).map(|t| &t.o)
    }

    /// Subjects of all triples with the given predicate and object
    pub fn subjects_with<'a>(
        &'a self,
        p: &'a Term,
        o: &'a Term,
    ) -> impl Iterator<Item = &'a Term> {
        self.matching(None, Some(p), Some(o)).map(|t| &t.s)
    }

    /// Sort triples by SPO for deterministic output
    pub fn sort(&mut self) {
        self.triples.sort();
    }

    /// Remove duplicate triples (apply set semantics)
    ///
    /// Preserves one occurrence of each triple; sorts as a side effect.
    pub fn dedupe(&mut self) {
        self.triples.sort();
        self.triples.dedup();
    }

    /// Get a reference to the triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Get all triples (consuming the graph)
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
            prefixes: BTreeMap::new(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}
