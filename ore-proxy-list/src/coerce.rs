//! Centralized input coercion for proxy lists
//!
//! This module is the single source of truth for classifying caller input
//! into aggregator and element terms, so the construction and append paths
//! cannot drift apart.
//!
//! ## Rules
//!
//! - **Aggregator**: an IRI-like string (RFC 3986 scheme prefix) becomes an
//!   IRI term; an existing IRI or blank node term passes through unchanged.
//!   Anything else fails with `InvalidAggregator`.
//! - **Element**: only an existing IRI term is proxiable. Strings are not
//!   promoted, and blank nodes and literals are rejected with
//!   `UnproxiableElement`.

use crate::{BlankId, Error, Result, Term};

/// Caller input for a node position, before validation
///
/// A tagged type instead of runtime type inspection: callers hand over
/// either a raw string or an already-built term, and the coercion rules
/// decide what each may become.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeInput {
    /// A raw string, possibly an IRI
    Str(String),
    /// An already-constructed RDF term
    Term(Term),
}

impl From<&str> for NodeInput {
    fn from(value: &str) -> Self {
        NodeInput::Str(value.to_string())
    }
}

impl From<String> for NodeInput {
    fn from(value: String) -> Self {
        NodeInput::Str(value)
    }
}

impl From<Term> for NodeInput {
    fn from(value: Term) -> Self {
        NodeInput::Term(value)
    }
}

impl From<&Term> for NodeInput {
    fn from(value: &Term) -> Self {
        NodeInput::Term(value.clone())
    }
}

impl From<BlankId> for NodeInput {
    fn from(value: BlankId) -> Self {
        NodeInput::Term(Term::BlankNode(value))
    }
}

/// Coerce input into an aggregator term
///
/// Accepts IRI-like strings and existing IRI or blank node terms.
pub fn to_aggregator(input: impl Into<NodeInput>) -> Result<Term> {
    match input.into() {
        NodeInput::Str(s) if looks_like_iri(&s) => Ok(Term::iri(s)),
        NodeInput::Str(s) => Err(Error::invalid_aggregator(format!(
            "string {s:?} is not an IRI"
        ))),
        NodeInput::Term(t @ (Term::Iri(_) | Term::BlankNode(_))) => Ok(t),
        NodeInput::Term(t) => Err(Error::invalid_aggregator(format!(
            "term {t} is not a resource"
        ))),
    }
}

/// Coerce input into a proxiable element term
///
/// Only existing IRI terms are accepted.
pub fn to_element(input: impl Into<NodeInput>) -> Result<Term> {
    match input.into() {
        NodeInput::Term(t @ Term::Iri(_)) => Ok(t),
        NodeInput::Term(t) => Err(Error::unproxiable_element(format!(
            "term {t} is not an IRI"
        ))),
        NodeInput::Str(s) => Err(Error::unproxiable_element(format!(
            "string {s:?} is not an IRI term"
        ))),
    }
}

/// Check for an RFC 3986 scheme prefix: `ALPHA *(ALPHA / DIGIT / "+" / "-" / ".") ":"`
fn looks_like_iri(s: &str) -> bool {
    let Some((scheme, rest)) = s.split_once(':') else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregator_from_iri_string() {
        let agg = to_aggregator("http://example.org/agg").unwrap();
        assert_eq!(agg, Term::iri("http://example.org/agg"));

        let urn = to_aggregator("urn:uuid:1234").unwrap();
        assert!(urn.is_iri());
    }

    #[test]
    fn test_aggregator_from_terms() {
        let iri = Term::iri("http://example.org/agg");
        assert_eq!(to_aggregator(iri.clone()).unwrap(), iri);

        let blank = Term::blank("agg0");
        assert_eq!(to_aggregator(blank.clone()).unwrap(), blank);

        assert_eq!(to_aggregator(BlankId::new("agg1")).unwrap(), Term::blank("agg1"));
    }

    #[test]
    fn test_aggregator_rejections() {
        assert!(matches!(
            to_aggregator("not an iri"),
            Err(Error::InvalidAggregator(_))
        ));
        assert!(matches!(
            to_aggregator(Term::string("literal")),
            Err(Error::InvalidAggregator(_))
        ));
        // scheme must start with a letter
        assert!(matches!(
            to_aggregator("1http://x"),
            Err(Error::InvalidAggregator(_))
        ));
    }

    #[test]
    fn test_element_accepts_only_iri_terms() {
        let iri = Term::iri("http://example.org/1");
        assert_eq!(to_element(iri.clone()).unwrap(), iri);

        assert!(matches!(
            to_element("http://example.org/1"),
            Err(Error::UnproxiableElement(_))
        ));
        assert!(matches!(
            to_element(Term::blank("b0")),
            Err(Error::UnproxiableElement(_))
        ));
        assert!(matches!(
            to_element(Term::string("plain")),
            Err(Error::UnproxiableElement(_))
        ));
    }

    #[test]
    fn test_looks_like_iri() {
        assert!(looks_like_iri("http://example.org"));
        assert!(looks_like_iri("urn:x"));
        assert!(looks_like_iri("z39.50r://host"));
        assert!(!looks_like_iri("no-scheme"));
        assert!(!looks_like_iri(":missing-scheme"));
        assert!(!looks_like_iri("trailing:"));
        assert!(!looks_like_iri("spa ce:x"));
    }
}
