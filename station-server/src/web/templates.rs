//! Askama templates for the web frontend.

use askama::Template;
use chrono::{NaiveTime, Weekday};
use reqwest::Url;

use crate::domain::{Combinator, FederalState, FilterCriteria, StationAttribute};
use crate::fasta::{FacilityState, FacilityStatus, StationFacilities};
use crate::listing::{PageCursor, PageResult, PageWindow};
use crate::map::{MapService, MapView};
use crate::stada::{Location, StationData, TimePeriod};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Station list with filter form and page navigation.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form: FilterFormView,
    pub columns: Vec<&'static str>,
    pub rows: Vec<StationRowView>,
    pub nav: Option<NavView>,
}

impl IndexTemplate {
    pub fn new(cursor: &PageCursor, page: &PageResult, window: Option<&PageWindow>) -> Self {
        let criteria = &cursor.criteria;
        Self {
            form: FilterFormView::new(criteria),
            columns: StationAttribute::ALL.iter().map(|a| a.label()).collect(),
            rows: page
                .elements
                .iter()
                .map(|s| StationRowView::new(s, criteria))
                .collect(),
            nav: window.map(|w| NavView::new(criteria, w)),
        }
    }
}

/// Station detail page.
#[derive(Template)]
#[template(path = "station.html")]
pub struct StationTemplate {
    pub station: StationDetailView,
    pub facilities: Vec<FacilityRowView>,
    pub map_links: Vec<MapLinkView>,
    /// `MapView` as JSON for the client-side map.
    pub map_json: String,
}

impl StationTemplate {
    /// Build the page; `weekday` and `time` drive the "open now" badge.
    pub fn new(
        station: &StationData,
        facilities: &StationFacilities,
        map: &MapView,
        weekday: Weekday,
        time: NaiveTime,
    ) -> Self {
        let map_json = serde_json::to_string(map)
            .unwrap_or_else(|_| "null".to_string())
            // keep the payload from closing its <script> element
            .replace("</", "<\\/");

        Self {
            station: StationDetailView::new(station, weekday, time),
            facilities: facilities.facilities.iter().map(FacilityRowView::new).collect(),
            map_links: map
                .center
                .map(|center| {
                    MapService::ALL
                        .iter()
                        .map(|service| MapLinkView {
                            label: service.label(),
                            url: service.url(center),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            map_json,
        }
    }
}

/// Generic error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub title: String,
    pub message: String,
}

/// Shown when a station is unknown to either API.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A checkbox or option in the filter form.
#[derive(Debug, Clone)]
pub struct ChoiceView {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Current state of the filter form.
#[derive(Debug, Clone)]
pub struct FilterFormView {
    pub query: String,
    pub states: Vec<ChoiceView>,
    pub attributes: Vec<ChoiceView>,
    pub mode_or: bool,
}

impl FilterFormView {
    pub fn new(criteria: &FilterCriteria) -> Self {
        Self {
            query: criteria.name_query.join(" "),
            states: FederalState::ALL
                .iter()
                .map(|s| ChoiceView {
                    id: s.id(),
                    label: s.label(),
                    selected: criteria.states.iter().any(|c| c == s.id()),
                })
                .collect(),
            attributes: StationAttribute::ALL
                .iter()
                .map(|a| ChoiceView {
                    id: a.id(),
                    label: a.label(),
                    selected: criteria.attributes.contains(a),
                })
                .collect(),
            mode_or: criteria.combinator == Combinator::Or,
        }
    }
}

/// One attribute cell in the station table.
#[derive(Debug, Clone)]
pub struct FlagView {
    pub set: bool,
    /// The column is part of the active filter.
    pub filtered: bool,
}

/// Station row view model for templates.
#[derive(Debug, Clone)]
pub struct StationRowView {
    pub url: String,
    pub name: String,
    pub federal_state: String,
    pub flags: Vec<FlagView>,
    pub stepless_access: &'static str,
    pub mobility_service: String,
    pub category: i32,
    pub price_category: i32,
    pub name_filtered: bool,
    pub state_filtered: bool,
}

impl StationRowView {
    pub fn new(station: &StationData, criteria: &FilterCriteria) -> Self {
        Self {
            url: format!("/station/{}", station.number),
            name: station.name.clone(),
            federal_state: station.federal_state.clone(),
            flags: StationAttribute::ALL
                .iter()
                .map(|a| FlagView {
                    set: a.is_set(station),
                    filtered: criteria.attributes.contains(a),
                })
                .collect(),
            stepless_access: station.has_stepless_access.map_or("", |s| s.as_str()),
            mobility_service: station
                .has_mobility_service
                .as_ref()
                .map(|m| m.label().to_string())
                .unwrap_or_default(),
            category: station.category,
            price_category: station.price_category,
            name_filtered: !criteria.name_query.is_empty(),
            state_filtered: !criteria.states.is_empty(),
        }
    }
}

/// A numbered page link.
#[derive(Debug, Clone)]
pub struct PageLinkView {
    /// One-based page number for display.
    pub number: usize,
    pub url: String,
    pub current: bool,
}

/// Page navigation below the station table.
#[derive(Debug, Clone)]
pub struct NavView {
    pub back_url: String,
    pub forward_url: String,
    pub links: Vec<PageLinkView>,
    /// e.g. "3–7 / 270"
    pub caption: String,
}

impl NavView {
    pub fn new(criteria: &FilterCriteria, window: &PageWindow) -> Self {
        Self {
            back_url: list_url(criteria, window.jump_back()),
            forward_url: list_url(criteria, window.jump_forward()),
            links: window
                .visible
                .iter()
                .map(|&index| PageLinkView {
                    number: index + 1,
                    url: list_url(criteria, index),
                    current: index == window.current,
                })
                .collect(),
            caption: format!(
                "{}–{} / {}",
                window.first() + 1,
                window.last() + 1,
                window.total_pages
            ),
        }
    }
}

/// Link to page `index` of the listing for `criteria`.
///
/// Carries the criteria fingerprint so a later filter change resets paging.
pub fn list_url(criteria: &FilterCriteria, index: usize) -> String {
    let mut pairs = criteria.to_pairs();
    pairs.push(("filter", criteria.token()));
    pairs.push(("page", index.to_string()));

    match Url::parse_with_params("http://localhost/", &pairs) {
        Ok(url) => format!("/?{}", url.query().unwrap_or_default()),
        Err(_) => "/".to_string(),
    }
}

/// One row of an opening-hours table.
#[derive(Debug, Clone)]
pub struct ScheduleRowView {
    pub day: &'static str,
    pub from: String,
    pub to: String,
}

impl ScheduleRowView {
    fn rows(rows: Vec<(&'static str, &TimePeriod)>) -> Vec<Self> {
        rows.into_iter()
            .map(|(day, period)| Self {
                day,
                from: period.from_time.clone(),
                to: period.to_time.clone(),
            })
            .collect()
    }
}

/// An EVA number or RIL100 identifier row.
#[derive(Debug, Clone)]
pub struct IdentifierRowView {
    pub identifier: String,
    pub is_main: bool,
    pub coordinates: String,
    pub location_code: String,
    pub steam_permission: String,
}

fn coordinates(location: Option<&Location>) -> String {
    location
        .and_then(|l| l.lon_lat())
        .map(|(lon, lat)| format!("{lon}\u{a0}{lat}"))
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct ContactView {
    pub name: String,
    pub email: String,
}

/// Flattened station record for the detail page.
#[derive(Debug, Clone)]
pub struct StationDetailView {
    pub number: u32,
    pub name: String,
    pub category: i32,
    pub price_category: i32,
    pub federal_state: String,
    pub ifopt: Option<String>,
    pub address: Option<String>,
    pub authority: Option<String>,
    pub product_line: Option<String>,
    pub timetable_office: Option<ContactView>,
    pub management: Option<String>,
    pub service_centre: Option<String>,
    pub service_centre_phone: Option<String>,
    pub wifi: Option<String>,
    pub attributes: Vec<&'static str>,
    pub stepless_access: Option<&'static str>,
    pub mobility_service: Option<String>,
    pub eva: Vec<IdentifierRowView>,
    pub ril100: Vec<IdentifierRowView>,
    pub db_information: Vec<ScheduleRowView>,
    /// `open` or `closed` right now; `None` when no hours are published.
    pub db_information_now: Option<&'static str>,
    pub local_staff: Vec<ScheduleRowView>,
    pub mobility_staff: Vec<ScheduleRowView>,
    pub mobility_on_behalf: bool,
    pub mobility_on_site: bool,
}

impl StationDetailView {
    pub fn new(station: &StationData, weekday: Weekday, time: NaiveTime) -> Self {
        let db_schedule = station
            .db_information
            .as_ref()
            .and_then(|i| i.availability.as_ref());
        let local_schedule = station
            .local_service_staff
            .as_ref()
            .and_then(|s| s.availability.as_ref());
        let mobility = station.mobility_service_staff.as_ref();

        Self {
            number: station.number,
            name: station.name.clone(),
            category: station.category,
            price_category: station.price_category,
            federal_state: station.federal_state.clone(),
            ifopt: station.ifopt.clone(),
            address: station.mailing_address.as_ref().map(|a| a.one_line()),
            authority: station
                .aufgabentraeger
                .as_ref()
                .map(|a| format!("{} ({})", a.name, a.short_name)),
            product_line: station
                .product_line
                .as_ref()
                .map(|p| format!("{} / {}", p.product_line, p.segment)),
            timetable_office: station
                .time_table_office
                .as_ref()
                .map(|o| ContactView {
                    name: o.name.clone(),
                    email: o.email.clone(),
                }),
            management: station
                .station_management
                .as_ref()
                .map(|m| format!("#{} {}", m.number, m.name)),
            service_centre: station
                .szentrale
                .as_ref()
                .map(|s| format!("#{} {}", s.number, s.name)),
            service_centre_phone: station
                .szentrale
                .as_ref()
                .and_then(|s| s.public_phone_number.clone()),
            wifi: station.wireless_lan.as_ref().map(|w| {
                let mut parts = Vec::new();
                if let Some(product) = &w.product {
                    parts.push(product.clone());
                }
                parts.push(format!("{} access points", w.amount));
                if let Some(date) = &w.install_date {
                    parts.push(format!("since {date}"));
                }
                parts.join(", ")
            }),
            attributes: StationAttribute::ALL
                .iter()
                .filter(|a| a.is_set(station))
                .map(|a| a.label())
                .collect(),
            stepless_access: station.has_stepless_access.map(|s| s.as_str()),
            mobility_service: station
                .has_mobility_service
                .as_ref()
                .map(|m| m.label().to_string()),
            eva: station
                .eva_numbers
                .iter()
                .map(|e| IdentifierRowView {
                    identifier: e.number.to_string(),
                    is_main: e.is_main,
                    coordinates: coordinates(e.geographic_coordinates.as_ref()),
                    location_code: String::new(),
                    steam_permission: String::new(),
                })
                .collect(),
            ril100: station
                .ril100_identifiers
                .iter()
                .map(|r| IdentifierRowView {
                    identifier: r.ril_identifier.clone(),
                    is_main: r.is_main,
                    coordinates: coordinates(r.geographic_coordinates.as_ref()),
                    location_code: r.primary_location_code.clone(),
                    steam_permission: r
                        .steam_permission
                        .map(|p| p.as_str().to_string())
                        .unwrap_or_default(),
                })
                .collect(),
            db_information: db_schedule
                .map(|s| ScheduleRowView::rows(s.rows()))
                .unwrap_or_default(),
            db_information_now: db_schedule.map(|s| {
                if s.is_open(weekday, time) {
                    "open"
                } else {
                    "closed"
                }
            }),
            local_staff: local_schedule
                .map(|s| ScheduleRowView::rows(s.rows()))
                .unwrap_or_default(),
            mobility_staff: mobility
                .and_then(|m| m.availability.as_ref())
                .and_then(|a| a.availability.as_ref())
                .map(|s| ScheduleRowView::rows(s.rows()))
                .unwrap_or_default(),
            mobility_on_behalf: mobility.is_some_and(|m| m.service_on_behalf),
            mobility_on_site: mobility.is_some_and(|m| m.staff_on_site),
        }
    }
}

/// Facility row for the detail page.
#[derive(Debug, Clone)]
pub struct FacilityRowView {
    pub equipment: u64,
    pub kind: &'static str,
    pub state: &'static str,
    /// CSS class for the state badge.
    pub state_class: &'static str,
    pub description: String,
    pub explanation: String,
}

impl FacilityRowView {
    pub fn new(facility: &FacilityStatus) -> Self {
        Self {
            equipment: facility.equipmentnumber,
            kind: facility.kind.as_str(),
            state: facility.state.as_str(),
            state_class: match facility.state {
                FacilityState::Active => "active",
                FacilityState::Inactive => "inactive",
                FacilityState::Unknown => "unknown",
            },
            description: facility.description.clone().unwrap_or_default(),
            explanation: facility.state_explanation.clone().unwrap_or_default(),
        }
    }
}

/// Deep link into an external map service.
#[derive(Debug, Clone)]
pub struct MapLinkView {
    pub label: &'static str,
    pub url: String,
}
