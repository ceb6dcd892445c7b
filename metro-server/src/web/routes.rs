//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::domain::{Direction, LineId, StationName};
use crate::feed::FeedError;
use crate::presets::{Preset, PresetError};
use crate::resolver::{
    RouteSelection, ResolveError, arrivals_at, next_arrivals_on, resolve_route, resolve_route_on,
};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .route("/arrivals/:station", get(station_board))
        .route("/route", get(route_next))
        .route("/presets/:user", get(list_presets).post(save_preset))
        .route(
            "/presets/:user/:name",
            get(get_preset).delete(delete_preset),
        )
        .route("/presets/:user/:name/next", get(preset_next))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by name fragment.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let stations = state.topology.search_stations(&req.q, limit);
    Json(StationSearchResponse { stations })
}

/// Resolve a user-supplied station name, answering 404 with near-miss
/// suggestions when it matches nothing.
fn resolve_station(state: &AppState, input: &str) -> Result<StationName, AppError> {
    state
        .topology
        .resolve_station(input)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown station: {input}"),
            suggestions: state.topology.search_stations(input, 5),
        })
}

/// Parse a direction filter from its query-string form.
fn parse_direction(input: &str) -> Result<Direction, AppError> {
    match input {
        "ascending" => Ok(Direction::Ascending),
        "descending" => Ok(Direction::Descending),
        other => Err(AppError::BadRequest {
            message: format!("invalid direction: {other} (expected ascending or descending)"),
        }),
    }
}

/// Full arrival board for a station, optionally filtered by line and
/// direction.
async fn station_board(
    State(state): State<AppState>,
    Path(station): Path<String>,
    Query(req): Query<ArrivalsRequest>,
) -> Result<Json<ArrivalsResponse>, AppError> {
    let station = resolve_station(&state, &station)?;

    let line_filter = match &req.line {
        Some(raw) => {
            let line = LineId::parse(raw).map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?;
            state
                .topology
                .stations_of(&line)
                .map_err(ResolveError::from)?;
            Some(line)
        }
        None => None,
    };
    let direction_filter = req.direction.as_deref().map(parse_direction).transpose()?;

    let raw = state.feed.station_arrivals(&station).await?;
    let mut arrivals = arrivals_at(&state.topology, &state.directions, &station, &raw)?;

    if let Some(line) = &line_filter {
        arrivals.retain(|a| &a.line == line);
    }
    if let Some(direction) = direction_filter {
        arrivals.retain(|a| a.direction == direction);
    }

    let arrivals = arrivals
        .iter()
        .map(|a| ArrivalResult::from_arrival(a, &state.directions))
        .collect();
    Ok(Json(ArrivalsResponse { station, arrivals }))
}

/// Default and cap for next-trains queries.
const DEFAULT_ROUTE_LIMIT: usize = 3;
const MAX_ROUTE_LIMIT: usize = 20;

/// The next trains from one station toward another.
async fn route_next(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let origin = resolve_station(&state, &req.from)?;
    let destination = resolve_station(&state, &req.to)?;
    let limit = req.limit.unwrap_or(DEFAULT_ROUTE_LIMIT).min(MAX_ROUTE_LIMIT);

    let selection = resolve_route(&state.topology, &origin, &destination)?;
    run_route(&state, origin, destination, selection, limit).await
}

/// Fetch the origin board and answer a resolved route query.
async fn run_route(
    state: &AppState,
    origin: StationName,
    destination: StationName,
    selection: RouteSelection,
    limit: usize,
) -> Result<Json<RouteResponse>, AppError> {
    let raw = state.feed.station_arrivals(&origin).await?;
    let arrivals = next_arrivals_on(
        &state.topology,
        &state.directions,
        &origin,
        &destination,
        &selection,
        &raw,
        limit,
    )?;

    let arrivals = arrivals
        .iter()
        .map(|a| ArrivalResult::from_arrival(a, &state.directions))
        .collect();
    Ok(Json(RouteResponse {
        origin,
        destination,
        line: selection.line,
        direction: selection.direction,
        stations_between: selection.stations_between,
        arrivals,
    }))
}

/// List a user's presets.
async fn list_presets(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<PresetListResponse>, AppError> {
    let presets = state
        .presets
        .list(&user)
        .await?
        .into_iter()
        .map(PresetResult::from)
        .collect();
    Ok(Json(PresetListResponse { presets }))
}

/// Save a preset, validating that the route can actually be ridden.
async fn save_preset(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(req): Json<SavePresetRequest>,
) -> Result<(StatusCode, Json<PresetResult>), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "preset name must not be empty".to_string(),
        });
    }

    let origin = resolve_station(&state, &req.origin)?;
    let destination = resolve_station(&state, &req.destination)?;

    let line = match &req.line {
        Some(raw) => {
            let line = LineId::parse(raw).map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?;
            resolve_route_on(&state.topology, &line, &origin, &destination)?;
            Some(line)
        }
        None => {
            resolve_route(&state.topology, &origin, &destination)?;
            None
        }
    };

    let preset = Preset {
        name: req.name,
        origin,
        destination,
        line,
    };
    state.presets.save(&user, preset.clone()).await?;
    Ok((StatusCode::CREATED, Json(PresetResult::from(preset))))
}

/// Fetch one preset.
async fn get_preset(
    State(state): State<AppState>,
    Path((user, name)): Path<(String, String)>,
) -> Result<Json<PresetResult>, AppError> {
    let preset = state
        .presets
        .get(&user, &name)
        .await?
        .ok_or_else(|| AppError::NotFound {
            message: format!("no preset named {name}"),
            suggestions: Vec::new(),
        })?;
    Ok(Json(PresetResult::from(preset)))
}

/// Delete one preset.
async fn delete_preset(
    State(state): State<AppState>,
    Path((user, name)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    if state.presets.delete(&user, &name).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            message: format!("no preset named {name}"),
            suggestions: Vec::new(),
        })
    }
}

/// Query options for running a preset.
#[derive(Debug, serde::Deserialize)]
struct PresetNextRequest {
    limit: Option<usize>,
}

/// Run a saved preset: the next trains on its route.
async fn preset_next(
    State(state): State<AppState>,
    Path((user, name)): Path<(String, String)>,
    Query(req): Query<PresetNextRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let preset = state
        .presets
        .get(&user, &name)
        .await?
        .ok_or_else(|| AppError::NotFound {
            message: format!("no preset named {name}"),
            suggestions: Vec::new(),
        })?;
    let limit = req.limit.unwrap_or(DEFAULT_ROUTE_LIMIT).min(MAX_ROUTE_LIMIT);

    let selection = match &preset.line {
        Some(line) => {
            resolve_route_on(&state.topology, line, &preset.origin, &preset.destination)?
        }
        None => resolve_route(&state.topology, &preset.origin, &preset.destination)?,
    };
    run_route(&state, preset.origin, preset.destination, selection, limit).await
}

/// Application error type for web responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
    },
    NotFound {
        message: String,
        suggestions: Vec<StationName>,
    },
    Upstream {
        message: String,
    },
    Internal {
        message: String,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message, suggestions) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, Vec::new()),
            AppError::NotFound {
                message,
                suggestions,
            } => (StatusCode::NOT_FOUND, message, suggestions),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message, Vec::new()),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, Vec::new())
            }
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse {
            error: message,
            suggestions,
        });
        (status, body).into_response()
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        match &err {
            ResolveError::UnknownStation(_)
            | ResolveError::UnknownLine(_)
            | ResolveError::NoDirectConnection { .. } => AppError::NotFound {
                message: err.to_string(),
                suggestions: Vec::new(),
            },
            ResolveError::StationNotOnLine { .. } | ResolveError::DegenerateRoute(_) => {
                AppError::BadRequest {
                    message: err.to_string(),
                }
            }
            // A feed record the normalizer cannot interpret is the
            // upstream's fault, not the caller's.
            ResolveError::Normalize(_) => AppError::Upstream {
                message: err.to_string(),
            },
        }
    }
}

impl From<FeedError> for AppError {
    fn from(err: FeedError) -> Self {
        AppError::Upstream {
            message: err.to_string(),
        }
    }
}

impl From<PresetError> for AppError {
    fn from(err: PresetError) -> Self {
        AppError::Internal {
            message: err.to_string(),
        }
    }
}
