//! Error types for ore-proxy-list

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Proxy list error type
///
/// Every failure mode is synchronous; there are no transient errors to
/// retry. Parse-time structural errors never return a partial sequence.
#[derive(Error, Debug)]
pub enum Error {
    /// Aggregator input is not an IRI-like string or resource term
    #[error("Invalid aggregator: {0}")]
    InvalidAggregator(String),

    /// Element input is not an IRI term
    #[error("Unproxiable element: {0}")]
    UnproxiableElement(String),

    /// More than one first proxy reachable from the aggregator
    #[error("Ambiguous list head: {0}")]
    AmbiguousFirst(String),

    /// More than one last proxy reachable from the aggregator
    #[error("Ambiguous list tail: {0}")]
    AmbiguousLast(String),

    /// More than one next proxy from a single chain position
    #[error("Ambiguous next link: {0}")]
    AmbiguousNext(String),

    /// Chain walk exceeded the proxy count, suspected cycle
    #[error("Malformed proxy chain: {0}")]
    MalformedChain(String),
}

impl Error {
    /// Create an invalid aggregator error
    pub fn invalid_aggregator(msg: impl Into<String>) -> Self {
        Error::InvalidAggregator(msg.into())
    }

    /// Create an unproxiable element error
    pub fn unproxiable_element(msg: impl Into<String>) -> Self {
        Error::UnproxiableElement(msg.into())
    }

    /// Create an ambiguous first error
    pub fn ambiguous_first(msg: impl Into<String>) -> Self {
        Error::AmbiguousFirst(msg.into())
    }

    /// Create an ambiguous last error
    pub fn ambiguous_last(msg: impl Into<String>) -> Self {
        Error::AmbiguousLast(msg.into())
    }

    /// Create an ambiguous next error
    pub fn ambiguous_next(msg: impl Into<String>) -> Self {
        Error::AmbiguousNext(msg.into())
    }

    /// Create a malformed chain error
    pub fn malformed_chain(msg: impl Into<String>) -> Self {
        Error::MalformedChain(msg.into())
    }
}
