//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::{Datelike, Local};
use futures::future::{join, try_join};
use tower_http::services::ServeDir;
use tracing::{debug, error, info, warn};

use crate::domain::StationNumber;
use crate::fasta::{FacilityStatus, StationFacilities};
use crate::listing::{PageCursor, PageResult, PageWindow, compute_window, get_page};
use crate::map::MapView;
use crate::stada::StationData;
use crate::upstream::UpstreamError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/station/:id", get(station_page))
        .route("/api/stations", get(api_stations))
        .route("/api/stations/:id/map", get(api_station_map))
        .route("/api/facilities", get(api_facilities))
        .route("/api/facilities/:equipment", get(api_facility))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_page)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn render(template: &impl Template) -> Result<Response, AppError> {
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html).into_response())
}

/// Resolve the requested page of the station list.
async fn load_page(
    state: &AppState,
    params: &[(String, String)],
) -> Result<(PageCursor, PageResult, Option<PageWindow>), AppError> {
    let request = ListRequest::from_pairs(params).map_err(|message| AppError::BadRequest { message })?;
    let cursor = request.cursor;

    info!(
        page = cursor.index,
        query = cursor.criteria.name_query.len(),
        states = cursor.criteria.states.len(),
        attributes = cursor.criteria.attributes.len(),
        "listing stations"
    );

    let page = get_page(
        state.stations.as_ref(),
        &cursor.criteria,
        cursor.index,
        &state.listing,
    )
    .await?;
    let window = compute_window(page.page_index, page.total_pages, state.listing.window);

    Ok((cursor, page, window))
}

/// Station list with filter form.
async fn index_page(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, PageError> {
    let (cursor, page, window) = load_page(&state, &params).await?;
    Ok(render(&IndexTemplate::new(&cursor, &page, window.as_ref()))?)
}

/// Station list as JSON.
async fn api_stations(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<PageResponse>, AppError> {
    let (cursor, page, window) = load_page(&state, &params).await?;
    Ok(Json(PageResponse::new(&cursor, &page, window)))
}

fn parse_station(id: &str) -> Result<StationNumber, AppError> {
    StationNumber::parse(id).map_err(|e| AppError::BadRequest {
        message: format!("{}: {}", e, id),
    })
}

fn no_station(number: StationNumber) -> AppError {
    AppError::NotFound {
        message: format!("No station with number {}", number),
    }
}

/// Station detail page.
///
/// Station data and facility status are fetched concurrently; a station
/// unknown to either API is a 404.
async fn station_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    let number = parse_station(&id)?;
    info!(%number, "station details");

    let (station, facilities) = try_join(
        state.stations.station(number),
        state.facilities.station_facilities(number),
    )
    .await?;

    let (Some(station), Some(facilities)) = (station, facilities) else {
        return Err(no_station(number).into());
    };

    let map = MapView::build(&station, Some(&facilities));
    let now = Local::now();
    let template = StationTemplate::new(&station, &facilities, &map, now.weekday(), now.time());

    Ok(render(&template)?)
}

/// Map markers for a station.
///
/// Only the station record is required; if facility status cannot be
/// loaded the map carries the station pin alone.
async fn api_station_map(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MapView>, AppError> {
    let number = parse_station(&id)?;

    let (station, facilities) = join(
        state.stations.station(number),
        state.facilities.station_facilities(number),
    )
    .await;
    let station = station?.ok_or_else(|| no_station(number))?;

    Ok(Json(map_view(number, &station, facilities)))
}

fn map_view(
    number: StationNumber,
    station: &StationData,
    facilities: Result<Option<StationFacilities>, UpstreamError>,
) -> MapView {
    let facilities = facilities.unwrap_or_else(|e| {
        warn!(%number, error = %e, "facility status unavailable, map without facilities");
        None
    });
    MapView::build(station, facilities.as_ref())
}

/// Facility status, optionally filtered by type, state and station.
async fn api_facilities(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<FacilityStatus>>, AppError> {
    let query = facility_query(&params).map_err(|message| AppError::BadRequest { message })?;
    let facilities = state.facilities.facilities(&query).await?;
    Ok(Json(facilities))
}

/// A single facility by equipment number.
async fn api_facility(
    State(state): State<AppState>,
    Path(equipment): Path<u64>,
) -> Result<Json<FacilityStatus>, AppError> {
    let facility = state
        .facilities
        .facility(equipment)
        .await?
        .ok_or_else(|| AppError::NotFound {
            message: format!("No facility with number {}", equipment),
        })?;
    Ok(Json(facility))
}

async fn not_found_page() -> PageError {
    AppError::NotFound {
        message: "There is nothing at this address.".to_string(),
    }
    .into()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    /// An upstream API failed; the message is for the log, not the user.
    Upstream { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest { message } | AppError::NotFound { message } => message.clone(),
            AppError::Upstream { .. } => {
                "The station data service is currently unavailable. Please try again later."
                    .to_string()
            }
            AppError::Internal { .. } => "Something went wrong.".to_string(),
        }
    }

    fn log(&self) {
        match self {
            AppError::BadRequest { message } | AppError::NotFound { message } => {
                debug!(status = %self.status(), "{message}")
            }
            AppError::Upstream { message } => warn!(status = %self.status(), "{message}"),
            AppError::Internal { message } => error!(status = %self.status(), "{message}"),
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.public_message(),
        });
        (status, body).into_response()
    }
}

/// [`AppError`] rendered as an HTML page, for routes a browser navigates to.
#[derive(Debug)]
pub struct PageError(AppError);

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        PageError(e)
    }
}

impl From<UpstreamError> for PageError {
    fn from(e: UpstreamError) -> Self {
        PageError(e.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let PageError(error) = self;
        error.log();
        let status = error.status();

        let body = match &error {
            AppError::NotFound { message } => askama_axum::into_response(&NotFoundTemplate {
                message: message.clone(),
            }),
            other => askama_axum::into_response(&ErrorTemplate {
                status: status.as_u16(),
                title: status.canonical_reason().unwrap_or("Error").to_string(),
                message: other.public_message(),
            }),
        };

        (status, body).into_response()
    }
}
