//! Domain types for the station browser.
//!
//! Validated identifiers and the filter model. Types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod attribute;
mod criteria;
mod federal_state;
mod station_number;

pub use attribute::{InvalidAttribute, StationAttribute};
pub use criteria::{Combinator, FilterCriteria};
pub use federal_state::FederalState;
pub use station_number::{InvalidStationNumber, StationNumber};
