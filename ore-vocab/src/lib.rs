//! RDF Vocabulary Constants for ORE Aggregations
//!
//! This crate provides a centralized location for the vocabulary IRIs used
//! when encoding ordered aggregations with the OAI-ORE proxy pattern.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `ore` - OAI-ORE vocabulary (http://www.openarchives.org/ore/terms/)
//! - `iana` - IANA link relations (http://www.iana.org/assignments/relation/)

/// OAI-ORE vocabulary constants
pub mod ore {
    /// ORE namespace IRI
    pub const NS: &str = "http://www.openarchives.org/ore/terms/";

    /// ore:Aggregation class IRI
    pub const AGGREGATION: &str = "http://www.openarchives.org/ore/terms/Aggregation";

    /// ore:Proxy class IRI
    pub const PROXY: &str = "http://www.openarchives.org/ore/terms/Proxy";

    /// ore:aggregates IRI (aggregation membership)
    pub const AGGREGATES: &str = "http://www.openarchives.org/ore/terms/aggregates";

    /// ore:isAggregatedBy IRI (inverse of ore:aggregates)
    pub const IS_AGGREGATED_BY: &str = "http://www.openarchives.org/ore/terms/isAggregatedBy";

    /// ore:proxyFor IRI (proxy -> the resource it stands in for)
    pub const PROXY_FOR: &str = "http://www.openarchives.org/ore/terms/proxyFor";

    /// ore:proxyIn IRI (proxy -> the aggregation it belongs to)
    pub const PROXY_IN: &str = "http://www.openarchives.org/ore/terms/proxyIn";
}

/// IANA link-relation constants (list ordering)
pub mod iana {
    /// IANA relation namespace IRI
    pub const NS: &str = "http://www.iana.org/assignments/relation/";

    /// iana:first IRI (aggregation -> head proxy)
    pub const FIRST: &str = "http://www.iana.org/assignments/relation/first";

    /// iana:last IRI (aggregation -> tail proxy)
    pub const LAST: &str = "http://www.iana.org/assignments/relation/last";

    /// iana:next IRI (proxy -> following proxy)
    pub const NEXT: &str = "http://www.iana.org/assignments/relation/next";

    /// iana:prev IRI (proxy -> preceding proxy)
    pub const PREV: &str = "http://www.iana.org/assignments/relation/prev";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_live_in_their_namespaces() {
        assert!(ore::PROXY_FOR.starts_with(ore::NS));
        assert!(ore::PROXY_IN.starts_with(ore::NS));
        assert!(iana::FIRST.starts_with(iana::NS));
        assert!(iana::NEXT.starts_with(iana::NS));
        assert!(iana::PREV.starts_with(iana::NS));
        assert!(iana::LAST.starts_with(iana::NS));
    }
}
