//! Query parameters and result pages for the station list endpoint.

use serde::Serialize;

use super::types::StationData;

/// The API silently caps `limit` at this value.
pub const MAX_LIMIT: u32 = 10_000;

/// Filters the station API applies server-side (name and federal state).
///
/// Does not include paging; callers add `limit`/`offset` via [`StationFilter::page`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct StationFilter {
    /// Wildcard name patterns. Repeated patterns are OR-ed by the API.
    pub searchstring: Vec<String>,
    /// Federal state identifiers, passed through verbatim.
    pub federalstate: Vec<String>,
}

impl StationFilter {
    /// Attach a page window to this filter.
    pub fn page(&self, limit: u32, offset: u32) -> StationQuery {
        StationQuery {
            filter: self.clone(),
            limit: limit.min(MAX_LIMIT),
            offset,
        }
    }
}

/// A complete request to the station list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StationQuery {
    #[serde(flatten)]
    pub filter: StationFilter,
    pub limit: u32,
    pub offset: u32,
}

impl StationQuery {
    /// Query-string pairs, repeated keys for multi-valued filters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        params.extend(
            self.filter
                .searchstring
                .iter()
                .map(|s| ("searchstring", s.clone())),
        );
        params.extend(
            self.filter
                .federalstate
                .iter()
                .map(|s| ("federalstate", s.clone())),
        );
        params
    }

    /// Stable string form, used as a memo key.
    pub fn cache_key(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// One page of results from a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage<T> {
    /// Total number of matches for the query, ignoring paging.
    pub total: u32,
    /// Items on this page, in upstream order.
    pub items: Vec<T>,
}

impl<T> ResultPage<T> {
    /// The "no matching records" page.
    pub fn empty() -> Self {
        Self {
            total: 0,
            items: Vec::new(),
        }
    }
}

/// A page of station records.
pub type StationPage = ResultPage<StationData>;

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> StationFilter {
        StationFilter {
            searchstring: vec!["*berlin*".into(), "*hamburg*".into()],
            federalstate: vec!["berlin".into()],
        }
    }

    #[test]
    fn params_repeat_multi_valued_keys() {
        let params = filter().page(20, 40).to_params();
        assert_eq!(
            params,
            vec![
                ("limit", "20".to_string()),
                ("offset", "40".to_string()),
                ("searchstring", "*berlin*".to_string()),
                ("searchstring", "*hamburg*".to_string()),
                ("federalstate", "berlin".to_string()),
            ]
        );
    }

    #[test]
    fn empty_filter_only_pages() {
        let params = StationFilter::default().page(1, 0).to_params();
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(filter().page(50_000, 0).limit, MAX_LIMIT);
    }

    #[test]
    fn cache_key_distinguishes_pages() {
        let a = filter().page(20, 0).cache_key();
        let b = filter().page(20, 20).cache_key();
        assert_ne!(a, b);
        assert_eq!(a, filter().page(20, 0).cache_key());
        assert!(a.contains("\"offset\":0"));
    }
}
