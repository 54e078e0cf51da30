//! Map markers for the station detail page.
//!
//! Builds the pins, centre and viewport the client-side map renders, plus
//! deep links into external map services.

use serde::Serialize;

use crate::fasta::{FacilityState, FacilityStatus, FacilityType, StationFacilities};
use crate::stada::StationData;

/// Viewport padding around each pin, in degrees.
const PAD_LON: f64 = 0.002;
const PAD_LAT: f64 = 0.001;

const MAIN_STATION_COLOR: &str = "#3fb1ce";
const OTHER_STATION_COLOR: &str = "#3f59ce";

/// Pin colour for a facility state.
pub fn facility_color(state: FacilityState) -> &'static str {
    match state {
        FacilityState::Active => "#378725",
        FacilityState::Inactive => "#bc0d0d",
        FacilityState::Unknown => "#cccccc",
    }
}

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Rectangular viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: LonLat,
    pub north_east: LonLat,
}

impl Bounds {
    /// The padded box around a single point.
    fn around(point: LonLat) -> Self {
        Self {
            south_west: LonLat::new(point.lon - PAD_LON, point.lat - PAD_LAT),
            north_east: LonLat::new(point.lon + PAD_LON, point.lat + PAD_LAT),
        }
    }

    /// Grow to include `point` plus padding.
    fn extend(&mut self, point: LonLat) {
        let padded = Self::around(point);
        self.south_west.lon = self.south_west.lon.min(padded.south_west.lon);
        self.south_west.lat = self.south_west.lat.min(padded.south_west.lat);
        self.north_east.lon = self.north_east.lon.max(padded.north_east.lon);
        self.north_east.lat = self.north_east.lat.max(padded.north_east.lat);
    }

    pub fn contains(&self, point: LonLat) -> bool {
        (self.south_west.lon..=self.north_east.lon).contains(&point.lon)
            && (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
    }
}

/// What a pin marks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PinKind {
    Facility {
        equipment: u64,
        facility: FacilityType,
        state: FacilityState,
        description: Option<String>,
    },
    Station {
        eva: u64,
        ril100: String,
        is_main: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pin {
    pub location: LonLat,
    pub color: &'static str,
    #[serde(flatten)]
    pub kind: PinKind,
}

impl Pin {
    fn facility(facility: &FacilityStatus) -> Option<Self> {
        let (lon, lat) = facility.lon_lat()?;
        Some(Self {
            location: LonLat::new(lon, lat),
            color: facility_color(facility.state),
            kind: PinKind::Facility {
                equipment: facility.equipmentnumber,
                facility: facility.kind,
                state: facility.state,
                description: facility.description.clone(),
            },
        })
    }
}

/// Everything the detail page map needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Option<LonLat>,
    pub bounds: Option<Bounds>,
    pub pins: Vec<Pin>,
}

impl MapView {
    /// Build markers for `station` and its facilities.
    ///
    /// Facilities without coordinates get no pin. EVA numbers and RIL100
    /// identifiers are paired by position; a pair whose main flags disagree
    /// is skipped, as is an EVA entry with no counterpart.
    pub fn build(station: &StationData, facilities: Option<&StationFacilities>) -> Self {
        let center = station
            .main_eva()
            .and_then(|eva| eva.geographic_coordinates.as_ref())
            .and_then(|location| location.lon_lat())
            .map(|(lon, lat)| LonLat::new(lon, lat));

        let mut pins: Vec<Pin> = facilities
            .map(|f| f.facilities.iter().filter_map(Pin::facility).collect())
            .unwrap_or_default();

        for (eva, ril) in station.eva_numbers.iter().zip(&station.ril100_identifiers) {
            if eva.is_main != ril.is_main {
                continue;
            }
            let Some((lon, lat)) = eva
                .geographic_coordinates
                .as_ref()
                .and_then(|location| location.lon_lat())
            else {
                continue;
            };

            pins.push(Pin {
                location: LonLat::new(lon, lat),
                color: if eva.is_main {
                    MAIN_STATION_COLOR
                } else {
                    OTHER_STATION_COLOR
                },
                kind: PinKind::Station {
                    eva: eva.number,
                    ril100: ril.ril_identifier.clone(),
                    is_main: eva.is_main,
                },
            });
        }

        let mut bounds = center
            .or_else(|| pins.first().map(|pin| pin.location))
            .map(Bounds::around);
        if let Some(bounds) = bounds.as_mut() {
            for pin in &pins {
                bounds.extend(pin.location);
            }
        }

        Self {
            center,
            bounds,
            pins,
        }
    }
}

/// External map services a coordinate can be opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MapService {
    OpenStreetMap,
    Google,
    Apple,
    Bing,
    /// The platform's default handler for `geo:` URIs.
    Native,
}

impl MapService {
    pub const ALL: [MapService; 5] = [
        MapService::OpenStreetMap,
        MapService::Google,
        MapService::Apple,
        MapService::Bing,
        MapService::Native,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MapService::OpenStreetMap => "OpenStreetMap",
            MapService::Google => "Google Maps",
            MapService::Apple => "Apple Maps",
            MapService::Bing => "Bing Maps",
            MapService::Native => "Karten-App",
        }
    }

    /// Deep link showing `point`.
    pub fn url(&self, point: LonLat) -> String {
        let LonLat { lon, lat } = point;
        match self {
            MapService::OpenStreetMap => {
                format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}")
            }
            MapService::Google => format!("https://www.google.com/maps?q={lat},{lon}"),
            MapService::Apple => format!("https://maps.apple.com/?ll={lat},{lon}"),
            MapService::Bing => format!("https://www.bing.com/maps?cp={lat}~{lon}"),
            MapService::Native => format!("geo:{lat},{lon}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stada::{EvaNumber, Location, Ril100Identifier};

    fn location(lon: f64, lat: f64) -> Option<Location> {
        Some(Location {
            coordinates: vec![lon, lat],
            kind: "Point".into(),
        })
    }

    fn eva(number: u64, lon: f64, lat: f64, is_main: bool) -> EvaNumber {
        EvaNumber {
            number,
            geographic_coordinates: location(lon, lat),
            is_main,
        }
    }

    fn ril(id: &str, is_main: bool) -> Ril100Identifier {
        Ril100Identifier {
            ril_identifier: id.into(),
            is_main,
            ..Default::default()
        }
    }

    fn facility(equipment: u64, state: FacilityState, coords: Option<(f64, f64)>) -> FacilityStatus {
        FacilityStatus {
            equipmentnumber: equipment,
            stationnumber: 1071,
            kind: FacilityType::Elevator,
            state,
            description: None,
            state_explanation: None,
            operatorname: None,
            geocoord_x: coords.map(|c| c.0),
            geocoord_y: coords.map(|c| c.1),
        }
    }

    fn berlin() -> StationData {
        StationData {
            number: 1071,
            name: "Berlin Hbf".into(),
            eva_numbers: vec![eva(8011160, 13.369, 52.525, true), eva(8089021, 13.370, 52.526, false)],
            ril100_identifiers: vec![ril("BL", true), ril("BLS", false)],
            ..Default::default()
        }
    }

    #[test]
    fn centre_is_main_eva() {
        let view = MapView::build(&berlin(), None);
        assert_eq!(view.center, Some(LonLat::new(13.369, 52.525)));
    }

    #[test]
    fn station_pins_coloured_by_main_flag() {
        let view = MapView::build(&berlin(), None);
        let colors: Vec<_> = view.pins.iter().map(|p| p.color).collect();
        assert_eq!(colors, vec![MAIN_STATION_COLOR, OTHER_STATION_COLOR]);
    }

    #[test]
    fn mismatched_pairs_are_skipped() {
        let mut station = berlin();
        station.ril100_identifiers = vec![ril("BL", true), ril("BLS", true)];

        let view = MapView::build(&station, None);
        assert_eq!(view.pins.len(), 1);
    }

    #[test]
    fn unpaired_eva_is_skipped() {
        let mut station = berlin();
        station.ril100_identifiers.truncate(1);

        let view = MapView::build(&station, None);
        assert_eq!(view.pins.len(), 1);
    }

    #[test]
    fn facility_pins_use_state_colours() {
        let facilities = StationFacilities {
            stationnumber: 1071,
            name: "Berlin Hbf".into(),
            facilities: vec![
                facility(1, FacilityState::Active, Some((13.368, 52.524))),
                facility(2, FacilityState::Inactive, Some((13.371, 52.527))),
                facility(3, FacilityState::Unknown, None),
            ],
        };

        let view = MapView::build(&berlin(), Some(&facilities));

        let facility_colors: Vec<_> = view
            .pins
            .iter()
            .filter(|p| matches!(p.kind, PinKind::Facility { .. }))
            .map(|p| p.color)
            .collect();
        assert_eq!(facility_colors, vec!["#378725", "#bc0d0d"]);
    }

    #[test]
    fn bounds_cover_every_pin() {
        let facilities = StationFacilities {
            stationnumber: 1071,
            name: String::new(),
            facilities: vec![facility(1, FacilityState::Active, Some((13.40, 52.50)))],
        };

        let view = MapView::build(&berlin(), Some(&facilities));
        let bounds = view.bounds.unwrap();

        for pin in &view.pins {
            assert!(bounds.contains(pin.location));
        }
        assert!((bounds.north_east.lon - (13.40 + PAD_LON)).abs() < 1e-9);
        assert!((bounds.south_west.lat - (52.50 - PAD_LAT)).abs() < 1e-9);
    }

    #[test]
    fn bounds_without_main_eva_start_at_first_pin() {
        let station = StationData {
            eva_numbers: vec![eva(1, 10.0, 50.0, false)],
            ril100_identifiers: vec![ril("X", false)],
            ..Default::default()
        };

        let view = MapView::build(&station, None);

        assert_eq!(view.center, None);
        assert_eq!(view.bounds, Some(Bounds::around(LonLat::new(10.0, 50.0))));
    }

    #[test]
    fn nothing_to_show() {
        let view = MapView::build(&StationData::default(), None);
        assert_eq!(view.center, None);
        assert_eq!(view.bounds, None);
        assert!(view.pins.is_empty());
    }

    #[test]
    fn service_urls() {
        let point = LonLat::new(13.369, 52.525);
        assert_eq!(
            MapService::OpenStreetMap.url(point),
            "https://www.openstreetmap.org/?mlat=52.525&mlon=13.369"
        );
        assert_eq!(MapService::Google.url(point), "https://www.google.com/maps?q=52.525,13.369");
        assert_eq!(MapService::Apple.url(point), "https://maps.apple.com/?ll=52.525,13.369");
        assert_eq!(MapService::Bing.url(point), "https://www.bing.com/maps?cp=52.525~13.369");
        assert_eq!(MapService::Native.url(point), "geo:52.525,13.369");
    }
}
