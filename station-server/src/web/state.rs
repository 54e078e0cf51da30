//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedStadaClient;
use crate::fasta::FastaClient;
use crate::listing::ListingConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached station data client
    pub stations: Arc<CachedStadaClient>,

    /// Facility status client (never cached)
    pub facilities: Arc<FastaClient>,

    /// Paging and scan tunables
    pub listing: Arc<ListingConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: CachedStadaClient, facilities: FastaClient, listing: ListingConfig) -> Self {
        Self {
            stations: Arc::new(stations),
            facilities: Arc::new(facilities),
            listing: Arc::new(listing),
        }
    }
}
