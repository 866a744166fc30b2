//! RDF triple - a single (subject, predicate, object) statement

use crate::Term;
use serde::{Deserialize, Serialize};

/// A single RDF statement
///
/// Fields are public: triples are plain data and the graph layer matches on
/// them directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject term (IRI or blank node)
    pub s: Term,
    /// Predicate term (always an IRI)
    pub p: Term,
    /// Object term
    pub o: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }

    /// Test this triple against a pattern
    ///
    /// `None` in a position matches any term; `Some(t)` requires equality.
    pub fn matches(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>) -> bool {
        s.map_or(true, |s| &self.s == s)
            && p.map_or(true, |p| &self.p == p)
            && o.map_or(true, |o| &self.o == o)
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}
