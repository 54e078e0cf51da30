//! Filter criteria to upstream query parameters.

use crate::domain::FilterCriteria;
use crate::stada::StationFilter;

/// Translate criteria into the filters the upstream applies natively.
///
/// Name tokens become `*token*` patterns, one `searchstring` each; the
/// upstream OR-s repeated patterns. States pass through unchanged, so an
/// invalid state surfaces as an upstream rejection. Attributes are not
/// represented here: the upstream cannot filter on them. Paging is added
/// by the caller.
pub fn translate(criteria: &FilterCriteria) -> StationFilter {
    let searchstring = criteria
        .name_query
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(|token| format!("*{}*", token))
        .collect();

    let federalstate = criteria
        .states
        .iter()
        .map(|state| state.trim())
        .filter(|state| !state.is_empty())
        .map(str::to_string)
        .collect();

    StationFilter {
        searchstring,
        federalstate,
    }
}
