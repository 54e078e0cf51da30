//! User-supplied filter criteria for the station list.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use super::attribute::StationAttribute;

/// How multiple attribute conditions combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    /// Every requested attribute must be set.
    #[default]
    And,
    /// At least one requested attribute must be set.
    Or,
}

impl Combinator {
    /// Parse `and`/`or`, case-insensitively. Anything else is `And`.
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("or") {
            Combinator::Or
        } else {
            Combinator::And
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
        }
    }
}

/// Filters for one station list render.
///
/// Built once per request from the query string and never mutated
/// afterwards. Equality is structural, which is what the page-index reset
/// rule compares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text name tokens, unwrapped. Empty means no name filter.
    pub name_query: Vec<String>,
    /// Federal state identifiers, trimmed but otherwise verbatim.
    pub states: Vec<String>,
    /// Requested boolean attributes, in request order.
    pub attributes: Vec<StationAttribute>,
    pub combinator: Combinator,
}

impl FilterCriteria {
    /// Build criteria from raw query-string pairs.
    ///
    /// Recognised keys: `query` (whitespace-separated name tokens),
    /// `states` and `attributes` (repeatable), `mode` (`and`/`or`).
    /// Unknown attribute identifiers are dropped, since they name no flag.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = FilterCriteria::default();

        for (key, value) in pairs {
            match key {
                "query" => {
                    for token in value.split_whitespace() {
                        criteria.name_query.push(token.to_string());
                    }
                }
                "states" => {
                    let state = value.trim();
                    if !state.is_empty() && !criteria.states.iter().any(|s| s == state) {
                        criteria.states.push(state.to_string());
                    }
                }
                "attributes" => {
                    if let Ok(attribute) = value.parse::<StationAttribute>()
                        && !criteria.attributes.contains(&attribute)
                    {
                        criteria.attributes.push(attribute);
                    }
                }
                "mode" => criteria.combinator = Combinator::parse_lenient(value),
                _ => {}
            }
        }

        criteria
    }

    /// Inverse of [`FilterCriteria::from_pairs`], for building links.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.name_query.is_empty() {
            pairs.push(("query", self.name_query.join(" ")));
        }
        pairs.extend(self.states.iter().map(|s| ("states", s.clone())));
        pairs.extend(self.attributes.iter().map(|a| ("attributes", a.id().to_string())));
        if self.combinator != Combinator::default() {
            pairs.push(("mode", self.combinator.as_str().to_string()));
        }
        pairs
    }

    /// Whether the local attribute filter applies.
    pub fn has_attribute_filter(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Whether any filter is set at all.
    pub fn is_empty(&self) -> bool {
        self.name_query.is_empty() && self.states.is_empty() && self.attributes.is_empty()
    }

    /// URL-safe fingerprint. Equal criteria always give equal tokens.
    pub fn token(&self) -> String {
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(pairs: &[(&str, &str)]) -> FilterCriteria {
        FilterCriteria::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn empty_query_string() {
        let criteria = parse(&[]);
        assert!(criteria.is_empty());
        assert!(!criteria.has_attribute_filter());
        assert_eq!(criteria.combinator, Combinator::And);
    }

    #[test]
    fn query_splits_on_whitespace() {
        let criteria = parse(&[("query", "  berlin   hbf ")]);
        assert_eq!(criteria.name_query, vec!["berlin", "hbf"]);
    }

    #[test]
    fn blank_query_is_no_filter() {
        let criteria = parse(&[("query", "   ")]);
        assert!(criteria.name_query.is_empty());
    }

    #[test]
    fn repeated_states_and_attributes() {
        let criteria = parse(&[
            ("states", "berlin"),
            ("states", " bayern "),
            ("states", "berlin"),
            ("attributes", "hasWiFi"),
            ("attributes", "hasParking"),
            ("attributes", "hasWiFi"),
            ("attributes", "hasTeleporter"),
            ("mode", "OR"),
        ]);

        assert_eq!(criteria.states, vec!["berlin", "bayern"]);
        assert_eq!(
            criteria.attributes,
            vec![StationAttribute::WiFi, StationAttribute::Parking]
        );
        assert_eq!(criteria.combinator, Combinator::Or);
        assert!(criteria.has_attribute_filter());
    }

    #[test]
    fn unknown_states_pass_through() {
        let criteria = parse(&[("states", "atlantis")]);
        assert_eq!(criteria.states, vec!["atlantis"]);
    }

    #[test]
    fn unknown_mode_defaults_to_and() {
        assert_eq!(parse(&[("mode", "xor")]).combinator, Combinator::And);
    }

    #[test]
    fn pairs_roundtrip() {
        let criteria = parse(&[
            ("query", "köln messe"),
            ("states", "nordrhein-westfalen"),
            ("attributes", "hasDBLounge"),
            ("mode", "or"),
        ]);
        let pairs = criteria.to_pairs();
        let back = FilterCriteria::from_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        assert_eq!(back, criteria);
    }

    #[test]
    fn token_tracks_equality() {
        let a = parse(&[("query", "berlin")]);
        let b = parse(&[("query", "berlin")]);
        let c = parse(&[("query", "berlin"), ("states", "berlin")]);

        assert_eq!(a.token(), b.token());
        assert_ne!(a.token(), c.token());
        assert!(
            a.token()
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
        );
    }
}
