//! Facility status (FaSta) API client.

use crate::domain::StationNumber;
use crate::upstream::{ApiClient, ApiConfig, UpstreamError};

use super::types::{FacilityState, FacilityStatus, FacilityType, StationFacilities};

/// Filters for the facility list endpoint. Empty vectors mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityQuery {
    pub types: Vec<FacilityType>,
    pub states: Vec<FacilityState>,
    pub station: Option<StationNumber>,
}

impl FacilityQuery {
    /// Query-string pairs, repeated keys for multi-valued filters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params: Vec<(&'static str, String)> = Vec::new();
        params.extend(self.types.iter().map(|t| ("type", t.as_str().to_string())));
        params.extend(self.states.iter().map(|s| ("state", s.as_str().to_string())));
        if let Some(station) = self.station {
            params.push(("stationnumber", station.to_string()));
        }
        params
    }
}

/// Client for the facility status API.
#[derive(Debug, Clone)]
pub struct FastaClient {
    api: ApiClient,
}

impl FastaClient {
    /// Create a new facility status client.
    pub fn new(config: &ApiConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }

    /// All facilities of a station. `None` if the API knows no such station.
    pub async fn station_facilities(
        &self,
        number: StationNumber,
    ) -> Result<Option<StationFacilities>, UpstreamError> {
        let resource = format!("fasta/v2/stations/{}", number);
        self.api.get_json(&resource, &[]).await
    }

    /// Facilities matching `query`. Nothing matched yields an empty list.
    pub async fn facilities(
        &self,
        query: &FacilityQuery,
    ) -> Result<Vec<FacilityStatus>, UpstreamError> {
        let params = query.to_params();
        let facilities: Option<Vec<FacilityStatus>> =
            self.api.get_json("fasta/v2/facilities", &params).await?;
        Ok(facilities.unwrap_or_default())
    }

    /// A single facility by equipment number.
    pub async fn facility(
        &self,
        equipment_number: u64,
    ) -> Result<Option<FacilityStatus>, UpstreamError> {
        let resource = format!("fasta/v2/facilities/{}", equipment_number);
        self.api.get_json(&resource, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facility_query_params() {
        let query = FacilityQuery {
            types: vec![FacilityType::Elevator],
            states: vec![FacilityState::Inactive, FacilityState::Unknown],
            station: Some(StationNumber::new(1071).unwrap()),
        };

        assert_eq!(
            query.to_params(),
            vec![
                ("type", "ELEVATOR".to_string()),
                ("state", "INACTIVE".to_string()),
                ("state", "UNKNOWN".to_string()),
                ("stationnumber", "1071".to_string()),
            ]
        );
    }

    #[test]
    fn empty_query_has_no_params() {
        assert!(FacilityQuery::default().to_params().is_empty());
    }
}
