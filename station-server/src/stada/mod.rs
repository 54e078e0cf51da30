//! Station data (StaDa) API client.
//!
//! Provides paged station listings filtered by name pattern and federal
//! state, and full station records by number.
//!
//! Key characteristics of the API:
//! - `searchstring` supports `*` and `?` wildcards; repeated parameters are OR-ed
//! - `federalstate` takes lowercase hyphenated state names, no wildcards
//! - "nothing matched" is reported as HTTP 404, not as an empty result

mod client;
mod query;
mod types;

pub use client::StadaClient;
pub use query::{MAX_LIMIT, ResultPage, StationFilter, StationPage, StationQuery};
pub use types::{
    Address, DbInformation, EvaNumber, LocalServiceStaff, Location, MobilityService,
    MobilityServiceStaff, ProductLine, Ril100Identifier, Schedule, ScheduleRange, ServiceCentre,
    StationData, StationManagement, SteamPermission, SteplessAccess, TimePeriod,
    TimetableOffice, TransportAuthority, WirelessLan,
};
