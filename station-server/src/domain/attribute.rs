//! Boolean station attributes that can be filtered on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::stada::StationData;

/// Error returned when parsing an unknown attribute identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station attribute: {0}")]
pub struct InvalidAttribute(pub String);

/// A boolean facility flag of a station.
///
/// Each variant maps to exactly one field of [`StationData`]. The wire
/// identifier is the upstream JSON field name, which is also what the filter
/// form submits.
///
/// # Examples
///
/// ```
/// use station_server::domain::StationAttribute;
///
/// let wifi: StationAttribute = "hasWiFi".parse().unwrap();
/// assert_eq!(wifi, StationAttribute::WiFi);
/// assert_eq!(wifi.label(), "WiFi");
///
/// assert!("hasSteplessAccess".parse::<StationAttribute>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StationAttribute {
    BicycleParking,
    CarRental,
    DbLounge,
    LocalPublicTransport,
    LockerSystem,
    LostAndFound,
    Parking,
    PublicFacilities,
    RailwayMission,
    TaxiRank,
    TravelCenter,
    TravelNecessities,
    WiFi,
}

impl StationAttribute {
    /// Every attribute, in display order.
    pub const ALL: [StationAttribute; 13] = [
        StationAttribute::BicycleParking,
        StationAttribute::CarRental,
        StationAttribute::DbLounge,
        StationAttribute::LocalPublicTransport,
        StationAttribute::LockerSystem,
        StationAttribute::LostAndFound,
        StationAttribute::Parking,
        StationAttribute::PublicFacilities,
        StationAttribute::RailwayMission,
        StationAttribute::TaxiRank,
        StationAttribute::TravelCenter,
        StationAttribute::TravelNecessities,
        StationAttribute::WiFi,
    ];

    /// Upstream field name.
    pub fn id(&self) -> &'static str {
        match self {
            StationAttribute::BicycleParking => "hasBicycleParking",
            StationAttribute::CarRental => "hasCarRental",
            StationAttribute::DbLounge => "hasDBLounge",
            StationAttribute::LocalPublicTransport => "hasLocalPublicTransport",
            StationAttribute::LockerSystem => "hasLockerSystem",
            StationAttribute::LostAndFound => "hasLostAndFound",
            StationAttribute::Parking => "hasParking",
            StationAttribute::PublicFacilities => "hasPublicFacilities",
            StationAttribute::RailwayMission => "hasRailwayMission",
            StationAttribute::TaxiRank => "hasTaxiRank",
            StationAttribute::TravelCenter => "hasTravelCenter",
            StationAttribute::TravelNecessities => "hasTravelNecessities",
            StationAttribute::WiFi => "hasWiFi",
        }
    }

    /// Human-readable column/checkbox label.
    pub fn label(&self) -> &'static str {
        match self {
            StationAttribute::BicycleParking => "Bicycle Parking",
            StationAttribute::CarRental => "Car Rental",
            StationAttribute::DbLounge => "DB Lounge",
            StationAttribute::LocalPublicTransport => "Local Public Transport",
            StationAttribute::LockerSystem => "Locker System",
            StationAttribute::LostAndFound => "Lost and Found",
            StationAttribute::Parking => "Parking",
            StationAttribute::PublicFacilities => "Public Facilities",
            StationAttribute::RailwayMission => "Railway Mission",
            StationAttribute::TaxiRank => "Taxi Rank",
            StationAttribute::TravelCenter => "Travel Center",
            StationAttribute::TravelNecessities => "Travel Necessities",
            StationAttribute::WiFi => "WiFi",
        }
    }

    /// The flag as decoded from the upstream. `None` when absent or not a boolean.
    pub fn value(&self, station: &StationData) -> Option<bool> {
        match self {
            StationAttribute::BicycleParking => station.has_bicycle_parking,
            StationAttribute::CarRental => station.has_car_rental,
            StationAttribute::DbLounge => station.has_db_lounge,
            StationAttribute::LocalPublicTransport => station.has_local_public_transport,
            StationAttribute::LockerSystem => station.has_locker_system,
            StationAttribute::LostAndFound => station.has_lost_and_found,
            StationAttribute::Parking => station.has_parking,
            StationAttribute::PublicFacilities => station.has_public_facilities,
            StationAttribute::RailwayMission => station.has_railway_mission,
            StationAttribute::TaxiRank => station.has_taxi_rank,
            StationAttribute::TravelCenter => station.has_travel_center,
            StationAttribute::TravelNecessities => station.has_travel_necessities,
            StationAttribute::WiFi => station.has_wifi,
        }
    }

    /// Whether the station has this attribute. Missing counts as `false`.
    pub fn is_set(&self, station: &StationData) -> bool {
        self.value(station) == Some(true)
    }
}

impl FromStr for StationAttribute {
    type Err = InvalidAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        StationAttribute::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| InvalidAttribute(s.to_string()))
    }
}

impl fmt::Display for StationAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for StationAttribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for StationAttribute {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
