//! Station number type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station number: {reason}")]
pub struct InvalidStationNumber {
    reason: &'static str,
}

/// The station data API's unique identifier for a station.
///
/// Station numbers are positive integers. The facility status API uses the
/// same numbering, so one value addresses a station in both.
///
/// # Examples
///
/// ```
/// use station_server::domain::StationNumber;
///
/// let berlin = StationNumber::parse("1071").unwrap();
/// assert_eq!(berlin.get(), 1071);
///
/// assert!(StationNumber::parse("0").is_err());
/// assert!(StationNumber::parse("abc").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationNumber(u32);

impl StationNumber {
    /// Create from a raw number. Zero is rejected.
    pub fn new(n: u32) -> Result<Self, InvalidStationNumber> {
        if n == 0 {
            return Err(InvalidStationNumber {
                reason: "must be positive",
            });
        }
        Ok(StationNumber(n))
    }

    /// Parse from a decimal string, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationNumber> {
        let n = s.trim().parse::<u32>().map_err(|_| InvalidStationNumber {
            reason: "must be a decimal number",
        })?;
        Self::new(n)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationNumber({})", self.0)
    }
}

impl fmt::Display for StationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any positive number survives a display/parse roundtrip
        #[test]
        fn roundtrip(n in 1u32..) {
            let number = StationNumber::new(n).unwrap();
            prop_assert_eq!(StationNumber::parse(&number.to_string()).unwrap(), number);
        }
    }
}
