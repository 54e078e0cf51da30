//! Tunables for the station listing.

/// Configuration parameters for paging and scanning.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Stations per rendered page.
    pub page_size: usize,

    /// Stations fetched per upstream call while scanning for attribute
    /// matches. Trades request count against payload size; any positive
    /// value gives the same result.
    pub batch_size: u32,

    /// Number of page links shown in the navigation window.
    pub window: usize,
}

impl ListingConfig {
    /// Create a new configuration. Zero sizes are raised to one.
    pub fn new(page_size: usize, batch_size: u32, window: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            batch_size: batch_size.max(1),
            window: window.max(1),
        }
    }

    /// Pages shown either side of the current one.
    pub fn half_window(&self) -> usize {
        self.window / 2
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            batch_size: 100,
            window: 5,
        }
    }
}
