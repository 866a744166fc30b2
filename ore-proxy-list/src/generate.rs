//! Graph generation: ordered element sequence -> proxy-linked triples
//!
//! Every call allocates fresh blank proxies, so two generations of the same
//! sequence are structurally equivalent but never share identifiers.

use crate::{Graph, Term};
use ore_vocab::{iana, ore};

/// Serialize an ordered element sequence into a canonical proxy-list graph
///
/// One fresh blank proxy is minted per element and linked with
/// `ore:proxyIn` / `ore:proxyFor`; the chain is stitched with `iana:next`
/// and `iana:prev`, the head marked with `iana:first` and the tail with
/// `iana:last`. An empty sequence yields an empty graph (zero statements).
///
/// For `n >= 1` elements the output holds exactly `4n + 2` statements.
pub fn generate(aggregator: &Term, elements: &[Term]) -> Graph {
    let mut graph = Graph::new();
    graph.add_prefix("ore", ore::NS);
    graph.add_prefix("iana", iana::NS);

    let mut proxy: Option<Term> = None;

    for element in elements {
        let previous_proxy = proxy;
        let current = Term::fresh_blank();

        graph.add_triple(current.clone(), Term::iri(ore::PROXY_IN), aggregator.clone());
        graph.add_triple(current.clone(), Term::iri(ore::PROXY_FOR), element.clone());

        match previous_proxy {
            None => {
                graph.add_triple(aggregator.clone(), Term::iri(iana::FIRST), current.clone());
            }
            Some(previous) => {
                graph.add_triple(previous.clone(), Term::iri(iana::NEXT), current.clone());
                graph.add_triple(current.clone(), Term::iri(iana::PREV), previous);
            }
        }

        proxy = Some(current);
    }

    if let Some(tail) = proxy {
        graph.add_triple(aggregator.clone(), Term::iri(iana::LAST), tail);
    }

    tracing::trace!(
        elements = elements.len(),
        statements = graph.len(),
        "generated proxy list graph"
    );
    graph
}
