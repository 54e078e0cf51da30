//! Data transfer objects for web requests and responses.

use serde::Serialize;

use crate::domain::{FilterCriteria, StationAttribute, StationNumber};
use crate::fasta::{FacilityQuery, FacilityState, FacilityType};
use crate::listing::{PageCursor, PageResult, PageWindow};
use crate::stada::StationData;

/// Parameters shared by the HTML and JSON station listings.
///
/// `query`, `states`, `attributes` and `mode` are the filter; `page` is the
/// zero-based page index and `filter` the fingerprint of the criteria that
/// index was issued for.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    pub cursor: PageCursor,
}

impl ListRequest {
    /// Parse raw query-string pairs. Only a malformed `page` is rejected.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, String> {
        let criteria = FilterCriteria::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let mut token = None;
        let mut index = 0;
        for (key, value) in pairs {
            match key.as_str() {
                "filter" => token = Some(value.as_str()),
                "page" => {
                    index = value
                        .trim()
                        .parse()
                        .map_err(|_| format!("Invalid page index: {}", value))?;
                }
                _ => {}
            }
        }

        Ok(Self {
            cursor: PageCursor::resume(token, criteria, index),
        })
    }
}

/// A station row in list results.
#[derive(Debug, Serialize)]
pub struct StationSummary {
    /// Station number
    pub number: u32,

    pub name: String,

    /// Federal state as reported by the API
    pub federal_state: String,

    /// Station category (1..7)
    pub category: i32,

    pub price_category: i32,

    /// Attributes that are set for this station
    pub attributes: Vec<StationAttribute>,

    /// `yes`, `no` or `partial`
    pub stepless_access: Option<&'static str>,

    /// Mobility service description
    pub mobility_service: Option<String>,
}

impl StationSummary {
    pub fn from_station(station: &StationData) -> Self {
        Self {
            number: station.number,
            name: station.name.clone(),
            federal_state: station.federal_state.clone(),
            category: station.category,
            price_category: station.price_category,
            attributes: StationAttribute::ALL
                .into_iter()
                .filter(|a| a.is_set(station))
                .collect(),
            stepless_access: station.has_stepless_access.map(|s| s.as_str()),
            mobility_service: station
                .has_mobility_service
                .as_ref()
                .map(|m| m.label().to_string()),
        }
    }
}

/// Response for the JSON station listing.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    /// Fingerprint to send back as `filter` when paging
    pub filter: String,

    pub total_pages: usize,

    /// Zero-based index of the returned page
    pub page_index: usize,

    /// Page links to show; absent with fewer than two pages
    pub window: Option<PageWindow>,

    pub elements: Vec<StationSummary>,
}

impl PageResponse {
    pub fn new(cursor: &PageCursor, page: &PageResult, window: Option<PageWindow>) -> Self {
        Self {
            filter: cursor.token(),
            total_pages: page.total_pages,
            page_index: page.page_index,
            window,
            elements: page.elements.iter().map(StationSummary::from_station).collect(),
        }
    }
}

/// Parse facility list filters: `type`, `state` (repeatable) and `station`.
pub fn facility_query(pairs: &[(String, String)]) -> Result<FacilityQuery, String> {
    let mut query = FacilityQuery::default();

    for (key, value) in pairs {
        match key.as_str() {
            "type" => query.types.push(
                FacilityType::parse(value).ok_or_else(|| format!("Invalid facility type: {}", value))?,
            ),
            "state" => query.states.push(
                FacilityState::parse(value)
                    .ok_or_else(|| format!("Invalid facility state: {}", value))?,
            ),
            "station" => {
                query.station = Some(StationNumber::parse(value).map_err(|e| e.to_string())?);
            }
            _ => {}
        }
    }

    Ok(query)
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
