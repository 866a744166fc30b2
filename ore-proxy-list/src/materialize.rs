//! List materialization: proxy-linked triples -> ordered element sequence
//!
//! Reconstruction treats the graph as a singly linked chain driven entirely
//! by `iana:first` and `iana:next`. `iana:prev` and `iana:last` are
//! write-only metadata and are never consulted here; [`last_element`] reads
//! `iana:last` but only as a standalone query helper.

use crate::{Error, Graph, Result, Term};
use ore_vocab::{iana, ore};

/// Reconstruct the ordered element sequence for an aggregator
///
/// Locates the head via `(aggregator, iana:first, ?p) . (?p, ore:proxyFor,
/// ?v)`, then follows `iana:next` hops proxy-to-proxy, resolving each proxy
/// through `ore:proxyFor`. A missing head means an empty list, not an
/// error. The walk tracks the current proxy rather than its value, so
/// repeated elements occupy distinct chain positions and round-trip
/// faithfully.
///
/// The walk is bounded by the number of distinct proxy nodes in the graph:
/// a chain longer than that can only revisit a proxy, and fails with
/// [`Error::MalformedChain`] instead of looping.
pub fn materialize(aggregator: &Term, graph: &Graph) -> Result<Vec<Term>> {
    let Some((mut proxy, value)) = first_solution(aggregator, graph)? else {
        return Ok(Vec::new());
    };

    let bound = proxy_count(graph);
    let mut elements = vec![value];

    while let Some((next_proxy, next_value)) = next_hop(graph, &proxy)? {
        if elements.len() >= bound {
            return Err(Error::malformed_chain(format!(
                "next chain from {aggregator} exceeds the {bound} proxies in the graph"
            )));
        }
        proxy = next_proxy;
        elements.push(next_value);
    }

    tracing::trace!(len = elements.len(), "materialized proxy list");
    Ok(elements)
}

/// Element proxied by the aggregator's `iana:first` proxy, if any
///
/// Fails with [`Error::AmbiguousFirst`] when more than one distinct
/// (proxy, element) solution exists.
pub fn first_element(aggregator: &Term, graph: &Graph) -> Result<Option<Term>> {
    Ok(first_solution(aggregator, graph)?.map(|(_, value)| value))
}

/// Element proxied by the aggregator's `iana:last` proxy, if any
///
/// Query helper only; list reconstruction never reads `iana:last`.
/// Fails with [`Error::AmbiguousLast`] on more than one solution.
pub fn last_element(aggregator: &Term, graph: &Graph) -> Result<Option<Term>> {
    let mut solutions = proxied_values(aggregator, graph, iana::LAST);
    if solutions.len() > 1 {
        return Err(Error::ambiguous_last(format!(
            "{aggregator} has {} last proxies",
            solutions.len()
        )));
    }
    Ok(solutions.pop().map(|(_, value)| value))
}

/// The single (proxy, value) head solution, if any
fn first_solution(aggregator: &Term, graph: &Graph) -> Result<Option<(Term, Term)>> {
    let mut solutions = proxied_values(aggregator, graph, iana::FIRST);
    if solutions.len() > 1 {
        return Err(Error::ambiguous_first(format!(
            "{aggregator} has {} first proxies",
            solutions.len()
        )));
    }
    Ok(solutions.pop())
}

/// Distinct (proxy, value) solutions for
/// `(aggregator, predicate, ?proxy) . (?proxy, ore:proxyFor, ?value)`
///
/// Solutions are deduplicated so repeated identical triples in the bag
/// never masquerade as ambiguity.
fn proxied_values(aggregator: &Term, graph: &Graph, predicate: &str) -> Vec<(Term, Term)> {
    let predicate = Term::iri(predicate);
    let proxy_for = Term::iri(ore::PROXY_FOR);

    let mut solutions = Vec::new();
    for proxy in graph.objects(aggregator, &predicate) {
        for value in graph.objects(proxy, &proxy_for) {
            solutions.push((proxy.clone(), value.clone()));
        }
    }
    solutions.sort();
    solutions.dedup();
    solutions
}

/// The (proxy, value) pair following `current_proxy` in the chain, if any
///
/// Matches `(current_proxy, iana:next, ?np) . (?np, ore:proxyFor, ?nv)` and
/// fails with [`Error::AmbiguousNext`] when more than one distinct binding
/// exists. A next proxy without an `ore:proxyFor` yields no solution and
/// ends the chain.
fn next_hop(graph: &Graph, current_proxy: &Term) -> Result<Option<(Term, Term)>> {
    let proxy_for = Term::iri(ore::PROXY_FOR);
    let next = Term::iri(iana::NEXT);

    let mut solutions = Vec::new();
    for next_proxy in graph.objects(current_proxy, &next) {
        for next_value in graph.objects(next_proxy, &proxy_for) {
            solutions.push((next_proxy.clone(), next_value.clone()));
        }
    }
    solutions.sort();
    solutions.dedup();

    if solutions.len() > 1 {
        return Err(Error::ambiguous_next(format!(
            "{current_proxy} has {} next candidates",
            solutions.len()
        )));
    }
    Ok(solutions.pop())
}

/// Number of distinct proxy nodes (subjects of `ore:proxyFor`)
fn proxy_count(graph: &Graph) -> usize {
    let proxy_for = Term::iri(ore::PROXY_FOR);
    let mut proxies: Vec<&Term> = graph
        .matching(None, Some(&proxy_for), None)
        .map(|t| &t.s)
        .collect();
    proxies.sort();
    proxies.dedup();
    proxies.len()
}
