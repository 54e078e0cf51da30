//! Local attribute filter.

use crate::domain::{Combinator, StationAttribute};
use crate::stada::StationData;

/// Whether `station` satisfies the attribute filter.
///
/// Missing or non-boolean flags count as `false`. The listing only calls
/// this with at least one attribute; an empty list gives `true` under `And`
/// and `false` under `Or`.
pub fn matches(
    station: &StationData,
    attributes: &[StationAttribute],
    combinator: Combinator,
) -> bool {
    match combinator {
        Combinator::And => attributes.iter().all(|a| a.is_set(station)),
        Combinator::Or => attributes.iter().any(|a| a.is_set(station)),
    }
}
