//! Station data (StaDa) API client.

use tracing::debug;

use crate::domain::StationNumber;
use crate::upstream::{ApiClient, ApiConfig, UpstreamError};

use super::query::{StationPage, StationQuery};
use super::types::{ResultEnvelope, StationData};

const STATIONS_RESOURCE: &str = "station-data/v2/stations";

/// Client for the station data API.
#[derive(Debug, Clone)]
pub struct StadaClient {
    api: ApiClient,
}

impl StadaClient {
    /// Create a new station data client.
    pub fn new(config: &ApiConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }

    /// Fetch one page of stations matching `query`.
    ///
    /// An upstream 404 means nothing matched and yields an empty page.
    pub async fn fetch_stations(&self, query: &StationQuery) -> Result<StationPage, UpstreamError> {
        let params = query.to_params();
        let envelope: Option<ResultEnvelope<StationData>> =
            self.api.get_json(STATIONS_RESOURCE, &params).await?;

        let page = match envelope {
            Some(envelope) => StationPage {
                total: envelope.total,
                items: envelope.result,
            },
            None => StationPage::empty(),
        };

        debug!(
            limit = query.limit,
            offset = query.offset,
            total = page.total,
            items = page.items.len(),
            "fetched station page"
        );

        Ok(page)
    }

    /// Fetch a single station. `None` if the station does not exist.
    pub async fn station(&self, number: StationNumber) -> Result<Option<StationData>, UpstreamError> {
        let resource = format!("{}/{}", STATIONS_RESOURCE, number);
        let envelope: Option<ResultEnvelope<StationData>> =
            self.api.get_json(&resource, &[]).await?;

        Ok(envelope.and_then(|e| e.result.into_iter().next()))
    }
}
