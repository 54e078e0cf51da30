//! Station data API response DTOs.
//!
//! These types map directly to the `station-data/v2` JSON responses.
//! The API omits whole sections for small stations, so almost everything
//! is defaulted. Boolean facility flags are decoded leniently: anything that
//! is not a JSON boolean becomes `None` instead of failing the whole page.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Deserializer};

/// Envelope shared by every list endpoint of the station data API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultEnvelope<T> {
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default = "Vec::new")]
    pub result: Vec<T>,
}

/// A `HH:MM`–`HH:MM` opening period.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimePeriod {
    pub from_time: String,
    pub to_time: String,
}

impl TimePeriod {
    /// Parse both ends. Returns `None` if either is not a valid `H:MM`/`HH:MM` time.
    pub fn bounds(&self) -> Option<(NaiveTime, NaiveTime)> {
        let from = NaiveTime::parse_from_str(self.from_time.trim(), "%H:%M").ok()?;
        let to = NaiveTime::parse_from_str(self.to_time.trim(), "%H:%M").ok()?;
        Some((from, to))
    }

    /// Whether `time` falls inside this period.
    ///
    /// Periods whose end is before their start wrap past midnight.
    /// `00:00`–`00:00` is treated as open all day.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let Some((from, to)) = self.bounds() else {
            return false;
        };
        if from == to {
            return true;
        }
        if from < to {
            from <= time && time < to
        } else {
            time >= from || time < to
        }
    }
}

/// A weekly schedule, one period per day plus public holidays.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub monday: Option<TimePeriod>,
    pub tuesday: Option<TimePeriod>,
    pub wednesday: Option<TimePeriod>,
    pub thursday: Option<TimePeriod>,
    pub friday: Option<TimePeriod>,
    pub saturday: Option<TimePeriod>,
    pub sunday: Option<TimePeriod>,
    pub holiday: Option<TimePeriod>,
}

impl Schedule {
    /// The period for a given weekday, if the station publishes one.
    pub fn day(&self, weekday: Weekday) -> Option<&TimePeriod> {
        match weekday {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }

    /// Whether the schedule is open at the given weekday and time.
    pub fn is_open(&self, weekday: Weekday, time: NaiveTime) -> bool {
        self.day(weekday).is_some_and(|p| p.contains(time))
    }

    /// Rows for display, in week order, holiday last.
    pub fn rows(&self) -> Vec<(&'static str, &TimePeriod)> {
        [
            ("monday", &self.monday),
            ("tuesday", &self.tuesday),
            ("wednesday", &self.wednesday),
            ("thursday", &self.thursday),
            ("friday", &self.friday),
            ("saturday", &self.saturday),
            ("sunday", &self.sunday),
            ("holiday", &self.holiday),
        ]
        .into_iter()
        .filter_map(|(day, period)| period.as_ref().map(|p| (day, p)))
        .collect()
    }
}

/// A weekly schedule with up to two periods per day (mobility service staff).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScheduleRange {
    pub monday1: Option<TimePeriod>,
    pub monday2: Option<TimePeriod>,
    pub tuesday1: Option<TimePeriod>,
    pub tuesday2: Option<TimePeriod>,
    pub wednesday1: Option<TimePeriod>,
    pub wednesday2: Option<TimePeriod>,
    pub thursday1: Option<TimePeriod>,
    pub thursday2: Option<TimePeriod>,
    pub friday1: Option<TimePeriod>,
    pub friday2: Option<TimePeriod>,
    pub saturday1: Option<TimePeriod>,
    pub saturday2: Option<TimePeriod>,
    pub sunday1: Option<TimePeriod>,
    pub sunday2: Option<TimePeriod>,
}

impl ScheduleRange {
    /// Rows for display, in week order; a day may appear twice.
    pub fn rows(&self) -> Vec<(&'static str, &TimePeriod)> {
        [
            ("monday", &self.monday1),
            ("monday", &self.monday2),
            ("tuesday", &self.tuesday1),
            ("tuesday", &self.tuesday2),
            ("wednesday", &self.wednesday1),
            ("wednesday", &self.wednesday2),
            ("thursday", &self.thursday1),
            ("thursday", &self.thursday2),
            ("friday", &self.friday1),
            ("friday", &self.friday2),
            ("saturday", &self.saturday1),
            ("saturday", &self.saturday2),
            ("sunday", &self.sunday1),
            ("sunday", &self.sunday2),
        ]
        .into_iter()
        .filter_map(|(day, period)| period.as_ref().map(|p| (day, p)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub city: String,
    pub house_number: Option<String>,
    pub street: String,
    pub zipcode: String,
}

impl Address {
    /// Single-line postal form, e.g. "Europaplatz 1 10557 Berlin".
    pub fn one_line(&self) -> String {
        let street = match &self.house_number {
            Some(n) => format!("{} {}", self.street, n),
            None => self.street.clone(),
        };
        format!("{} {} {}", street, self.zipcode, self.city)
            .trim()
            .to_string()
    }
}

/// GeoJSON point. Coordinates are `[longitude, latitude, altitude?]` in WGS84.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Location {
    pub coordinates: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Location {
    /// `(longitude, latitude)`, if both are present.
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        match self.coordinates.as_slice() {
            [lon, lat, ..] => Some((*lon, *lat)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalDepartment {
    pub number: u32,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StationManagement {
    pub number: u32,
    pub name: String,
}

/// A 3-S-Centre: a 24/7 service centre responsible for a group of stations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceCentre {
    pub number: u32,
    pub name: String,
    pub address: Option<Address>,
    pub internal_fax_number: Option<String>,
    pub internal_phone_number: Option<String>,
    pub public_fax_number: Option<String>,
    pub public_phone_number: Option<String>,
    pub regionalbereich: Option<RegionalDepartment>,
    pub station_management: Option<StationManagement>,
}

/// Local public-sector body responsible for short-distance public transport.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportAuthority {
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaNumber {
    pub number: u64,
    pub geographic_coordinates: Option<Location>,
    pub is_main: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SteamPermission {
    Restricted,
    Unrestricted,
    EntryBan,
}

impl SteamPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            SteamPermission::Restricted => "restricted",
            SteamPermission::Unrestricted => "unrestricted",
            SteamPermission::EntryBan => "entryBan",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ril100Identifier {
    pub ril_identifier: String,
    pub is_main: bool,
    pub steam_permission: Option<SteamPermission>,
    pub geographic_coordinates: Option<Location>,
    pub primary_location_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DbInformation {
    pub availability: Option<Schedule>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocalServiceStaff {
    pub availability: Option<Schedule>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MobilityAvailability {
    pub availability: Option<ScheduleRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MobilityServiceStaff {
    pub availability: Option<MobilityAvailability>,
    pub service_on_behalf: bool,
    pub staff_on_site: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimetableOffice {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WirelessLan {
    pub amount: u32,
    pub install_date: Option<String>,
    pub product: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductLine {
    pub product_line: String,
    pub segment: String,
}

/// Stepless access is a tri-state on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteplessAccess {
    Yes,
    No,
    Partial,
}

impl SteplessAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            SteplessAccess::Yes => "yes",
            SteplessAccess::No => "no",
            SteplessAccess::Partial => "partial",
        }
    }
}

/// Mobility service availability. The wire value is free German text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MobilityService {
    No,
    /// Only available when booked in advance.
    ByAppointment,
    /// Available; advance registration requested.
    RegistrationRequested,
    Other(String),
}

impl MobilityService {
    fn from_wire(s: &str) -> Self {
        match s {
            "no" => MobilityService::No,
            "Nur nach Voranmeldung unter 030 65 21 28 88 (Ortstarif)" => {
                MobilityService::ByAppointment
            }
            "Ja, um Voranmeldung unter 030 65 21 28 88 (Ortstarif) wird gebeten" => {
                MobilityService::RegistrationRequested
            }
            other => MobilityService::Other(other.to_string()),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, MobilityService::No)
    }

    pub fn label(&self) -> &str {
        match self {
            MobilityService::No => "no",
            MobilityService::ByAppointment => "only by appointment",
            MobilityService::RegistrationRequested => "advance registration is requested",
            MobilityService::Other(s) => s,
        }
    }
}

/// A single station record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StationData {
    /// Unique station number.
    pub number: u32,
    pub name: String,
    /// Station category (-1..7). -1 and 0 are not in production.
    pub category: i32,
    pub price_category: i32,
    pub federal_state: String,
    pub ifopt: Option<String>,

    #[serde(rename = "DBinformation")]
    pub db_information: Option<DbInformation>,
    pub aufgabentraeger: Option<TransportAuthority>,
    pub eva_numbers: Vec<EvaNumber>,
    pub ril100_identifiers: Vec<Ril100Identifier>,
    pub mailing_address: Option<Address>,
    pub local_service_staff: Option<LocalServiceStaff>,
    pub mobility_service_staff: Option<MobilityServiceStaff>,
    pub regionalbereich: Option<RegionalDepartment>,
    pub station_management: Option<StationManagement>,
    pub szentrale: Option<ServiceCentre>,
    pub time_table_office: Option<TimetableOffice>,
    pub wireless_lan: Option<WirelessLan>,
    pub product_line: Option<ProductLine>,

    #[serde(deserialize_with = "lenient_bool")]
    pub has_bicycle_parking: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_car_rental: Option<bool>,
    #[serde(rename = "hasDBLounge", deserialize_with = "lenient_bool")]
    pub has_db_lounge: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_local_public_transport: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_locker_system: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_lost_and_found: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_parking: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_public_facilities: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_railway_mission: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_taxi_rank: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_travel_center: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_travel_necessities: Option<bool>,
    #[serde(rename = "hasWiFi", deserialize_with = "lenient_bool")]
    pub has_wifi: Option<bool>,

    #[serde(deserialize_with = "lenient_stepless")]
    pub has_stepless_access: Option<SteplessAccess>,
    #[serde(deserialize_with = "lenient_mobility")]
    pub has_mobility_service: Option<MobilityService>,
}

impl StationData {
    /// The main EVA entry, if the station has one.
    pub fn main_eva(&self) -> Option<&EvaNumber> {
        self.eva_numbers.iter().find(|e| e.is_main)
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

fn lenient_stepless<'de, D>(deserializer: D) -> Result<Option<SteplessAccess>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value.as_str() {
        Some("yes") => Some(SteplessAccess::Yes),
        Some("no") => Some(SteplessAccess::No),
        Some("partial") => Some(SteplessAccess::Partial),
        _ => None,
    })
}

fn lenient_mobility<'de, D>(deserializer: D) -> Result<Option<MobilityService>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(MobilityService::from_wire))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_minimal_station() {
        let station: StationData = serde_json::from_value(json!({
            "number": 1071,
            "name": "Berlin Hbf",
            "federalState": "Berlin",
            "hasWiFi": true,
            "hasDBLounge": false,
        }))
        .unwrap();

        assert_eq!(station.number, 1071);
        assert_eq!(station.name, "Berlin Hbf");
        assert_eq!(station.has_wifi, Some(true));
        assert_eq!(station.has_db_lounge, Some(false));
        assert_eq!(station.has_parking, None);
        assert!(station.eva_numbers.is_empty());
    }

    #[test]
    fn non_boolean_flags_decode_as_none() {
        let station: StationData = serde_json::from_value(json!({
            "number": 1,
            "hasParking": "yes",
            "hasTaxiRank": null,
            "hasCarRental": 1,
        }))
        .unwrap();

        assert_eq!(station.has_parking, None);
        assert_eq!(station.has_taxi_rank, None);
        assert_eq!(station.has_car_rental, None);
    }

    #[test]
    fn tri_state_and_mobility_service() {
        let station: StationData = serde_json::from_value(json!({
            "number": 2,
            "hasSteplessAccess": "partial",
            "hasMobilityService": "Nur nach Voranmeldung unter 030 65 21 28 88 (Ortstarif)",
        }))
        .unwrap();

        assert_eq!(station.has_stepless_access, Some(SteplessAccess::Partial));
        assert_eq!(
            station.has_mobility_service,
            Some(MobilityService::ByAppointment)
        );
        assert_eq!(
            station.has_mobility_service.unwrap().label(),
            "only by appointment"
        );
    }

    #[test]
    fn envelope_with_nested_sections() {
        let page: ResultEnvelope<StationData> = serde_json::from_value(json!({
            "limit": 1,
            "offset": 0,
            "total": 5400,
            "result": [{
                "number": 1071,
                "name": "Berlin Hbf",
                "evaNumbers": [{
                    "number": 8011160,
                    "isMain": true,
                    "geographicCoordinates": {
                        "type": "Point",
                        "coordinates": [13.369549, 52.525589]
                    }
                }],
                "ril100Identifiers": [{
                    "rilIdentifier": "BL",
                    "isMain": true,
                    "steamPermission": "entryBan",
                    "primaryLocationCode": "DE01071"
                }],
                "mailingAddress": {
                    "city": "Berlin",
                    "street": "Europaplatz",
                    "houseNumber": "1",
                    "zipcode": "10557"
                }
            }]
        }))
        .unwrap();

        assert_eq!(page.total, 5400);
        let station = &page.result[0];
        let eva = station.main_eva().unwrap();
        assert_eq!(eva.number, 8011160);
        assert_eq!(
            eva.geographic_coordinates.as_ref().unwrap().lon_lat(),
            Some((13.369549, 52.525589))
        );
        assert_eq!(
            station.ril100_identifiers[0].steam_permission,
            Some(SteamPermission::EntryBan)
        );
        assert_eq!(
            station.mailing_address.as_ref().unwrap().one_line(),
            "Europaplatz 1 10557 Berlin"
        );
    }

    #[test]
    fn time_period_contains() {
        let period = TimePeriod {
            from_time: "06:00".into(),
            to_time: "22:30".into(),
        };
        let t = |s| NaiveTime::parse_from_str(s, "%H:%M").unwrap();

        assert!(period.contains(t("06:00")));
        assert!(period.contains(t("12:00")));
        assert!(!period.contains(t("22:30")));
        assert!(!period.contains(t("05:59")));
    }

    #[test]
    fn time_period_wraps_midnight() {
        let period = TimePeriod {
            from_time: "22:00".into(),
            to_time: "02:00".into(),
        };
        let t = |s| NaiveTime::parse_from_str(s, "%H:%M").unwrap();

        assert!(period.contains(t("23:15")));
        assert!(period.contains(t("01:00")));
        assert!(!period.contains(t("12:00")));
    }

    #[test]
    fn invalid_period_is_closed() {
        let period = TimePeriod {
            from_time: "later".into(),
            to_time: "22:00".into(),
        };
        assert!(period.bounds().is_none());
        assert!(!period.contains(NaiveTime::MIN));
    }

    #[test]
    fn schedule_lookup_by_weekday() {
        let schedule: Schedule = serde_json::from_value(json!({
            "monday": { "fromTime": "00:00", "toTime": "00:00" },
            "sunday": { "fromTime": "10:00", "toTime": "18:00" }
        }))
        .unwrap();
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let night = NaiveTime::from_hms_opt(20, 0, 0).unwrap();

        assert!(schedule.is_open(Weekday::Mon, night));
        assert!(schedule.is_open(Weekday::Sun, noon));
        assert!(!schedule.is_open(Weekday::Sun, night));
        assert!(!schedule.is_open(Weekday::Tue, noon));
        assert_eq!(schedule.rows().len(), 2);
        assert_eq!(schedule.rows()[0].0, "monday");
    }
}
