//! The seam between the listing core and the station data upstream.

use std::future::Future;

use crate::stada::{StadaClient, StationPage, StationQuery};
use crate::upstream::UpstreamError;

/// Something that can answer paged station queries.
///
/// The listing core only ever talks to the upstream through this trait, so
/// it does not know (or care) whether responses are memoized.
pub trait StationSource {
    /// Fetch one page of stations matching `query`.
    ///
    /// Must return an empty page, not an error, when nothing matches.
    fn fetch_stations(
        &self,
        query: &StationQuery,
    ) -> impl Future<Output = Result<StationPage, UpstreamError>> + Send;
}

impl StationSource for StadaClient {
    async fn fetch_stations(&self, query: &StationQuery) -> Result<StationPage, UpstreamError> {
        StadaClient::fetch_stations(self, query).await
    }
}
