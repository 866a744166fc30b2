//! ORE-style RDF ordered lists
//!
//! This crate maintains an ordered list of IRI elements and converts it
//! losslessly to and from the OAI-ORE aggregation proxy encoding: each
//! element gets an anonymous proxy node linked to its neighbors with
//! `iana:first` / `iana:next` / `iana:prev` / `iana:last`, and to the
//! owning aggregation with `ore:proxyIn` / `ore:proxyFor`.
//!
//! # Key Design Principles
//!
//! 1. **The element vector is the source of truth** - the graph form is a
//!    just-in-time projection rebuilt on every request, never cached.
//!
//! 2. **Singly linked reconstruction** - parsing follows only `iana:first`
//!    and `iana:next`; `iana:prev` and `iana:last` are write-only metadata.
//!
//! 3. **Fresh proxies per generation** - proxy blank nodes are never reused
//!    across calls; two generations of the same list are structurally
//!    equivalent but identifier-distinct.
//!
//! 4. **Bounded parsing** - chain walks are capped at the number of proxy
//!    nodes in the graph, so cyclic or corrupted input fails with
//!    [`Error::MalformedChain`] instead of hanging.
//!
//! # Example
//!
//! ```
//! use ore_proxy_list::{ProxyList, Term};
//!
//! let mut list = ProxyList::new("http://example.org/agg")?;
//! list.push(Term::iri("http://example.org/a"))?;
//! list.push(Term::iri("http://example.org/b"))?;
//!
//! // Derive the proxy-linked graph (4n + 2 statements)
//! let graph = list.to_graph();
//! assert_eq!(graph.len(), 10);
//!
//! // And reconstruct the same order from it
//! let rebuilt = ProxyList::from_graph("http://example.org/agg", &graph)?;
//! assert!(rebuilt.iter().eq(list.iter()));
//! # Ok::<(), ore_proxy_list::Error>(())
//! ```

mod coerce;
mod error;
mod generate;
mod graph;
mod materialize;
mod proxy_list;
mod term;
mod triple;

pub use coerce::{to_aggregator, to_element, NodeInput};
pub use error::{Error, Result};
pub use generate::generate;
pub use graph::Graph;
pub use materialize::{first_element, last_element, materialize};
pub use proxy_list::ProxyList;
pub use term::{BlankId, Term};
pub use triple::Triple;
