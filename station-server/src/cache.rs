//! Caching layer for station data API responses.
//!
//! Station master data changes rarely, and an attribute-filtered listing
//! re-reads every candidate batch on each page turn. Memoizing pages per
//! query turns those repeat scans into cache hits.
//!
//! Facility status is real-time and is not cached here.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::StationNumber;
use crate::listing::StationSource;
use crate::stada::{StadaClient, StationData, StationPage, StationQuery};
use crate::upstream::UpstreamError;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries. Zero disables caching.
    pub ttl: Duration,

    /// Maximum number of cached entries per cache.
    pub max_capacity: u64,
}

impl CacheConfig {
    /// Cache entries for `secs` seconds; 0 turns caching off.
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Duration::from_secs(secs);
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero() && self.max_capacity > 0
    }

    fn build<K, V>(&self) -> Option<MokaCache<K, V>>
    where
        K: std::hash::Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        self.is_enabled().then(|| {
            MokaCache::builder()
                .time_to_live(self.ttl)
                .max_capacity(self.max_capacity)
                .build()
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3600),
            max_capacity: 1000,
        }
    }
}

/// Station source with memoized pages.
///
/// Wraps any [`StationSource`]; when the inner source is the real
/// [`StadaClient`], single-station lookups are cached as well.
pub struct CachedStadaClient<S = StadaClient> {
    inner: S,
    /// Station pages, keyed by [`StationQuery::cache_key`].
    pages: Option<MokaCache<String, StationPage>>,
    /// Single stations, including "no such station".
    stations: Option<MokaCache<StationNumber, Option<StationData>>>,
}

impl<S> CachedStadaClient<S> {
    /// Create a new cached source.
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        Self {
            inner,
            pages: config.build(),
            stations: config.build(),
        }
    }

    /// Access the underlying source for operations that bypass the cache.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Approximate number of cached entries.
    pub fn entry_count(&self) -> u64 {
        let pages = self.pages.as_ref().map_or(0, |c| c.entry_count());
        let stations = self.stations.as_ref().map_or(0, |c| c.entry_count());
        pages + stations
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        if let Some(pages) = &self.pages {
            pages.invalidate_all();
        }
        if let Some(stations) = &self.stations {
            stations.invalidate_all();
        }
    }
}

impl<S: StationSource + Sync> StationSource for CachedStadaClient<S> {
    async fn fetch_stations(&self, query: &StationQuery) -> Result<StationPage, UpstreamError> {
        let Some(pages) = &self.pages else {
            return self.inner.fetch_stations(query).await;
        };

        let key = query.cache_key();
        if let Some(page) = pages.get(&key).await {
            debug!(limit = query.limit, offset = query.offset, "station page cache hit");
            return Ok(page);
        }

        let page = self.inner.fetch_stations(query).await?;
        pages.insert(key, page.clone()).await;

        Ok(page)
    }
}

impl CachedStadaClient<StadaClient> {
    /// Fetch a single station, using the cache if available.
    pub async fn station(&self, number: StationNumber) -> Result<Option<StationData>, UpstreamError> {
        let Some(stations) = &self.stations else {
            return self.inner.station(number).await;
        };

        if let Some(station) = stations.get(&number).await {
            debug!(%number, "station cache hit");
            return Ok(station);
        }

        let station = self.inner.station(number).await?;
        stations.insert(number, station.clone()).await;

        Ok(station)
    }
}
