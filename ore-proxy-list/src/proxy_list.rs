//! ORE-style ordered list facade
//!
//! `ProxyList` owns the authoritative in-memory element sequence; the
//! triple-set form is a derived, disposable projection built just in time
//! by [`ProxyList::to_graph`].

use crate::coerce::{to_aggregator, to_element};
use crate::{generate, materialize, Graph, NodeInput, Result, Term};

/// An ordered list of IRI elements owned by an aggregator resource
///
/// The element vector is the single source of truth. Mutation happens only
/// through [`push`](ProxyList::push) and [`concat`](ProxyList::concat);
/// every [`to_graph`](ProxyList::to_graph) call rebuilds the triple set
/// from current state with fresh proxies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyList {
    aggregator: Term,
    elements: Vec<Term>,
}

impl ProxyList {
    /// Create an empty list owned by `aggregator`
    ///
    /// Accepts an IRI-like string or an existing IRI / blank node term;
    /// anything else fails with `InvalidAggregator`.
    pub fn new(aggregator: impl Into<NodeInput>) -> Result<Self> {
        Ok(Self {
            aggregator: to_aggregator(aggregator)?,
            elements: Vec::new(),
        })
    }

    /// Reconstruct a list from an existing proxy-list graph
    ///
    /// Propagates the materializer's structural errors (`AmbiguousFirst`,
    /// `AmbiguousNext`, `MalformedChain`).
    pub fn from_graph(aggregator: impl Into<NodeInput>, graph: &Graph) -> Result<Self> {
        let aggregator = to_aggregator(aggregator)?;
        let elements = materialize(&aggregator, graph)?;
        Ok(Self {
            aggregator,
            elements,
        })
    }

    /// The resource that owns this list
    pub fn aggregator(&self) -> &Term {
        &self.aggregator
    }

    /// Append an element
    ///
    /// Only IRI terms are proxiable; on `UnproxiableElement` the list is
    /// left unmodified. Duplicates are permitted and preserved in order.
    pub fn push(&mut self, element: impl Into<NodeInput>) -> Result<()> {
        let element = to_element(element)?;
        self.elements.push(element);
        Ok(())
    }

    /// Append pre-validated elements in order, returning `&mut self` for
    /// chaining
    pub fn concat(&mut self, elements: impl IntoIterator<Item = Term>) -> &mut Self {
        self.elements.extend(elements);
        self
    }

    /// Iterate elements in stored order
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.elements.iter()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True iff the list has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Build the proxy-list graph for the current state
    ///
    /// A fresh snapshot on every call: later mutation never touches a
    /// previously returned graph, and proxies are never reused between
    /// calls.
    pub fn to_graph(&self) -> Graph {
        generate(&self.aggregator, &self.elements)
    }
}

impl<'a> IntoIterator for &'a ProxyList {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for ProxyList {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn uri(n: usize) -> Term {
        Term::iri(format!("http://example.org/{n}"))
    }

    #[test]
    fn test_new_from_string_and_terms() {
        let list = ProxyList::new("http://example.org/agg").unwrap();
        assert_eq!(list.aggregator(), &Term::iri("http://example.org/agg"));
        assert!(list.is_empty());

        assert!(ProxyList::new(Term::blank("agg")).is_ok());
        assert!(matches!(
            ProxyList::new("not an iri"),
            Err(Error::InvalidAggregator(_))
        ));
        assert!(matches!(
            ProxyList::new(Term::string("moomin")),
            Err(Error::InvalidAggregator(_))
        ));
    }

    #[test]
    fn test_push_accepts_iri_terms_only() {
        let mut list = ProxyList::new("http://example.org/agg").unwrap();

        list.push(uri(0)).unwrap();
        assert_eq!(list.len(), 1);

        // IRI-shaped strings are still not terms
        assert!(matches!(
            list.push("http://google.com"),
            Err(Error::UnproxiableElement(_))
        ));
        assert!(matches!(
            list.push(Term::blank("b0")),
            Err(Error::UnproxiableElement(_))
        ));
        // failed pushes leave the list unmodified
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_push_allows_duplicates() {
        let mut list = ProxyList::new("http://example.org/agg").unwrap();
        list.push(uri(0)).unwrap();
        list.push(uri(0)).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_concat_chains() {
        let mut list = ProxyList::new("http://example.org/agg").unwrap();
        list.concat([uri(0), uri(1)]).concat([uri(2)]);
        assert_eq!(list.len(), 3);

        let collected: Vec<_> = list.iter().cloned().collect();
        assert_eq!(collected, vec![uri(0), uri(1), uri(2)]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut list = ProxyList::new("http://example.org/agg").unwrap();
        list.concat([uri(0), uri(1)]);

        assert_eq!(list.iter().count(), 2);
        assert_eq!(list.iter().count(), 2);

        let mut seen = Vec::new();
        for element in &list {
            seen.push(element.clone());
        }
        assert_eq!(seen, vec![uri(0), uri(1)]);
    }

    #[test]
    fn test_to_graph_is_a_snapshot() {
        let mut list = ProxyList::new("http://example.org/agg").unwrap();
        list.push(uri(0)).unwrap();

        let before = list.to_graph();
        list.push(uri(1)).unwrap();
        let after = list.to_graph();

        assert_eq!(before.len(), 4);
        assert_eq!(after.len(), 4 * 2 + 2);
    }

    #[test]
    fn test_from_graph_round_trip() {
        let mut list = ProxyList::new("http://example.org/agg").unwrap();
        list.concat((0..5).map(uri));

        let rebuilt = ProxyList::from_graph("http://example.org/agg", &list.to_graph()).unwrap();
        assert_eq!(rebuilt, list);
    }

    #[test]
    fn test_from_empty_graph() {
        let list = ProxyList::from_graph("http://example.org/agg", &Graph::new()).unwrap();
        assert!(list.is_empty());
    }
}
