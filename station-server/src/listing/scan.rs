//! Batch scan for attribute-filtered listings.
//!
//! The upstream cannot filter on boolean attributes, so when any are
//! requested we walk every station that matches the native filters, one
//! batch at a time, and keep the ones that pass locally.

use tracing::debug;

use crate::domain::{Combinator, StationAttribute};
use crate::stada::{MAX_LIMIT, StationData, StationFilter};
use crate::upstream::UpstreamError;

use super::evaluate::matches;
use super::source::StationSource;

/// Collect every station matching `filter` natively and `attributes` locally.
///
/// Issues one `limit=1` probe to learn the candidate count, then one call
/// per `batch_size` window in increasing offset order, each awaited before
/// the next is sent. Matches keep upstream order. Any failed call aborts
/// the scan and the partial result is dropped.
pub async fn scan<S: StationSource>(
    source: &S,
    filter: &StationFilter,
    attributes: &[StationAttribute],
    combinator: Combinator,
    batch_size: u32,
) -> Result<Vec<StationData>, UpstreamError> {
    let batch_size = batch_size.clamp(1, MAX_LIMIT);

    let total = source.fetch_stations(&filter.page(1, 0)).await?.total;

    let mut matched = Vec::new();
    let mut batches = 0usize;
    let mut offset = 0u32;

    while offset < total {
        let page = source.fetch_stations(&filter.page(batch_size, offset)).await?;
        batches += 1;

        matched.extend(
            page.items
                .into_iter()
                .filter(|station| matches(station, attributes, combinator)),
        );

        offset = match offset.checked_add(batch_size) {
            Some(next) => next,
            None => break,
        };
    }

    debug!(
        total,
        batches,
        matched = matched.len(),
        "attribute scan complete"
    );

    Ok(matched)
}
