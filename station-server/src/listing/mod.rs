//! Station listing: filtering, scanning and paging.
//!
//! This module answers one question for the UI: "what is on page N of the
//! stations matching these filters, and how many pages are there?"
//!
//! Name and federal-state filters are applied by the upstream, so the
//! common case is a single request for exactly the page shown. Boolean
//! attribute filters are not supported upstream; when any are requested we
//! scan every native match in batches, filter locally, and slice the
//! result.

mod config;
mod cursor;
mod evaluate;
mod paginate;
mod scan;
mod source;
mod translate;


use tracing::debug;

use crate::domain::FilterCriteria;
use crate::upstream::UpstreamError;

pub use config::ListingConfig;
pub use cursor::PageCursor;
pub use evaluate::matches;
pub use paginate::{PageResult, PageWindow, compute_window, paginate, paginate_local, total_pages};
pub use scan::scan;
pub use source::StationSource;
pub use translate::translate;

/// Compute page `page_index` for `criteria`.
///
/// Without attribute filters this is one upstream call. With them, every
/// native match is scanned first; see [`scan`]. Upstream failures propagate
/// unchanged, while "nothing matched" is an empty result, not an error.
pub async fn get_page<S: StationSource>(
    source: &S,
    criteria: &FilterCriteria,
    page_index: usize,
    config: &ListingConfig,
) -> Result<PageResult, UpstreamError> {
    let filter = translate(criteria);

    if !criteria.has_attribute_filter() {
        debug!(page_index, "native listing");
        return paginate(source, &filter, page_index, config.page_size).await;
    }

    debug!(
        page_index,
        attributes = criteria.attributes.len(),
        combinator = criteria.combinator.as_str(),
        "attribute listing"
    );

    let candidates = scan(
        source,
        &filter,
        &criteria.attributes,
        criteria.combinator,
        config.batch_size,
    )
    .await?;

    Ok(paginate_local(candidates, page_index, config.page_size))
}
