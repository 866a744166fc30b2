//! RDF term types: IRI, blank node, and plain literal
//!
//! Terms are the building blocks of triples. Proxy lists only ever emit
//! IRIs and blank nodes; the literal variant exists so input coercion can
//! classify (and reject) arbitrary node kinds.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Blank node identifier
///
/// Blank node IDs are stable within a graph but have no global meaning.
/// Freshly generated IDs use the scheme `ore-<ulid>`, so no two calls to
/// [`BlankId::fresh`] ever produce the same identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Create a blank node ID from a label
    ///
    /// The label should NOT include the `_:` prefix.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Create a fresh, never-before-seen blank node ID
    pub fn fresh() -> Self {
        let ulid = ulid::Ulid::new();
        Self(Arc::from(
            format!("ore-{}", ulid.to_string().to_lowercase()).as_str(),
        ))
    }

    /// Get the label (without `_:` prefix)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the full N-Triples representation (`_:label`)
    pub fn to_ntriples(&self) -> String {
        format!("_:{}", self.0)
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// An RDF term (subject, predicate, or object position)
///
/// # Invariants
///
/// - `Term::Iri` always contains an **expanded** IRI, never a prefixed form.
/// - The predicate position of a triple can only be `Term::Iri`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    /// Blank node with stable identifier
    BlankNode(BlankId),

    /// Full expanded IRI (e.g., "http://example.org/agg")
    Iri(Arc<str>),

    /// Plain string literal (xsd:string lexical form)
    Literal(Arc<str>),
}

impl Term {
    /// Create an IRI term from an expanded IRI string
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// Create a blank node term
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::BlankNode(BlankId::new(label))
    }

    /// Create a blank node term with a fresh, unique identifier
    pub fn fresh_blank() -> Self {
        Term::BlankNode(BlankId::fresh())
    }

    /// Create a plain string literal
    pub fn string(value: impl AsRef<str>) -> Self {
        Term::Literal(Arc::from(value.as_ref()))
    }

    /// Check if this is an IRI term
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Check if this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Try to get as IRI string
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get as blank node ID
    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Term::BlankNode(id) => Some(id),
            _ => None,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(id) => write!(f, "{}", id),
            Term::Literal(value) => write!(f, "\"{}\"", value),
        }
    }
}
