//! Facility status (FaSta) API client.
//!
//! Reports the live operational state of public elevators and escalators
//! at stations, with geocoordinates for placing them on a map.

mod client;
mod types;

pub use client::{FacilityQuery, FastaClient};
pub use types::{FacilityState, FacilityStatus, FacilityType, StationFacilities};
