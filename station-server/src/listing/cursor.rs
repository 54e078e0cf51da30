//! Page-index reset when filters change.

use crate::domain::FilterCriteria;

/// A page index bound to the criteria it was computed for.
///
/// A page index only means something for the filter that produced it.
/// Navigation links carry the criteria fingerprint alongside the index;
/// when a request arrives whose criteria differ from that fingerprint, the
/// index is stale and the listing restarts at page 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    pub criteria: FilterCriteria,
    pub index: usize,
}

impl PageCursor {
    /// Start at page 0 of `criteria`.
    pub fn new(criteria: FilterCriteria) -> Self {
        Self { criteria, index: 0 }
    }

    /// Rebuild a cursor from request state.
    ///
    /// `previous_token` is the fingerprint the requested index was issued
    /// for. A token that does not match `criteria` resets the index; with no
    /// token there is no previous render to compare against and the
    /// requested index is used as is.
    pub fn resume(
        previous_token: Option<&str>,
        criteria: FilterCriteria,
        requested_index: usize,
    ) -> Self {
        let index = match previous_token {
            Some(token) if token != criteria.token() => 0,
            _ => requested_index,
        };
        Self { criteria, index }
    }

    /// Move to `criteria` at `index`. Different criteria reset the index to 0.
    pub fn navigate(&mut self, criteria: FilterCriteria, index: usize) {
        if criteria == self.criteria {
            self.index = index;
        } else {
            self.criteria = criteria;
            self.index = 0;
        }
    }

    /// Fingerprint to embed in links for this cursor.
    pub fn token(&self) -> String {
        self.criteria.token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(pairs: &[(&str, &str)]) -> FilterCriteria {
        FilterCriteria::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn same_criteria_keep_index() {
        let berlin = criteria(&[("query", "berlin")]);
        let cursor = PageCursor::resume(Some(&berlin.token()), berlin.clone(), 3);
        assert_eq!(cursor.index, 3);
    }

    #[test]
    fn changed_criteria_reset_index() {
        let before = criteria(&[("query", "berlin")]);
        let after = criteria(&[("query", "berlin"), ("states", "berlin")]);

        let cursor = PageCursor::resume(Some(&before.token()), after, 3);
        assert_eq!(cursor.index, 0);
    }

    #[test]
    fn missing_token_trusts_index() {
        let cursor = PageCursor::resume(None, criteria(&[]), 5);
        assert_eq!(cursor.index, 5);
    }

    #[test]
    fn garbage_token_resets_index() {
        let cursor = PageCursor::resume(Some("not-a-token"), criteria(&[]), 5);
        assert_eq!(cursor.index, 0);
    }

    #[test]
    fn navigate_resets_on_change() {
        let mut cursor = PageCursor::new(criteria(&[("query", "köln")]));
        cursor.navigate(criteria(&[("query", "köln")]), 3);
        assert_eq!(cursor.index, 3);

        cursor.navigate(criteria(&[("query", "köln"), ("attributes", "hasWiFi")]), 3);
        assert_eq!(cursor.index, 0);
        assert_eq!(cursor.criteria.attributes.len(), 1);
    }
}
