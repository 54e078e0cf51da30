//! Facility status (FaSta) API response DTOs.

use serde::{Deserialize, Serialize};

/// Kind of facility. The API only tracks public elevators and escalators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FacilityType {
    Escalator,
    Elevator,
}

impl FacilityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityType::Escalator => "ESCALATOR",
            FacilityType::Elevator => "ELEVATOR",
        }
    }

    /// Parse the wire name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ESCALATOR" => Some(FacilityType::Escalator),
            "ELEVATOR" => Some(FacilityType::Elevator),
            _ => None,
        }
    }
}

/// Operational state of a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FacilityState {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

impl FacilityState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityState::Active => "ACTIVE",
            FacilityState::Inactive => "INACTIVE",
            FacilityState::Unknown => "UNKNOWN",
        }
    }

    /// Parse the wire name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Some(FacilityState::Active),
            "INACTIVE" => Some(FacilityState::Inactive),
            "UNKNOWN" => Some(FacilityState::Unknown),
            _ => None,
        }
    }
}

/// A public elevator or escalator at a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityStatus {
    /// Unique identifier of the facility.
    pub equipmentnumber: u64,

    /// Number of the station the facility belongs to.
    pub stationnumber: u32,

    #[serde(rename = "type")]
    pub kind: FacilityType,

    pub state: FacilityState,

    /// Free-text location, e.g. "zu Gleis 3/4".
    #[serde(default)]
    pub description: Option<String>,

    /// Detailed description of the state.
    #[serde(default, rename = "stateExplanation")]
    pub state_explanation: Option<String>,

    #[serde(default)]
    pub operatorname: Option<String>,

    /// Longitude (WGS84).
    #[serde(default, rename = "geocoordX")]
    pub geocoord_x: Option<f64>,

    /// Latitude (WGS84).
    #[serde(default, rename = "geocoordY")]
    pub geocoord_y: Option<f64>,
}

impl FacilityStatus {
    /// `(longitude, latitude)`, if both are present and non-zero.
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        match (self.geocoord_x, self.geocoord_y) {
            (Some(x), Some(y)) if x != 0.0 && y != 0.0 => Some((x, y)),
            _ => None,
        }
    }
}

/// All facilities of one station.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationFacilities {
    pub stationnumber: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub facilities: Vec<FacilityStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_station_facilities() {
        let station: StationFacilities = serde_json::from_value(json!({
            "stationnumber": 1071,
            "name": "Berlin Hauptbahnhof",
            "facilities": [
                {
                    "equipmentnumber": 10466890,
                    "type": "ELEVATOR",
                    "description": "zu Gleis 1/2",
                    "geocoordX": 13.3689,
                    "geocoordY": 52.5250,
                    "state": "ACTIVE",
                    "stationnumber": 1071
                },
                {
                    "equipmentnumber": 10466891,
                    "type": "ESCALATOR",
                    "state": "MAINTENANCE",
                    "stationnumber": 1071
                }
            ]
        }))
        .unwrap();

        assert_eq!(station.facilities.len(), 2);
        let elevator = &station.facilities[0];
        assert_eq!(elevator.kind, FacilityType::Elevator);
        assert_eq!(elevator.state, FacilityState::Active);
        assert_eq!(elevator.lon_lat(), Some((13.3689, 52.5250)));

        let escalator = &station.facilities[1];
        assert_eq!(escalator.state, FacilityState::Unknown);
        assert_eq!(escalator.lon_lat(), None);
    }

    #[test]
    fn missing_facilities_default_to_empty() {
        let station: StationFacilities =
            serde_json::from_value(json!({ "stationnumber": 4 })).unwrap();
        assert!(station.facilities.is_empty());
    }

    #[test]
    fn parse_wire_names() {
        assert_eq!(FacilityType::parse("elevator"), Some(FacilityType::Elevator));
        assert_eq!(FacilityType::parse("ramp"), None);
        assert_eq!(FacilityState::parse(" inactive "), Some(FacilityState::Inactive));
        assert_eq!(FacilityState::Inactive.as_str(), "INACTIVE");
    }
}
