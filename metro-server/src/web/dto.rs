//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Countdown, Direction, LineId, NormalizedArrival, StationName};
use crate::presets::Preset;
use crate::topology::DirectionMapping;

/// Query options for an arrival board.
#[derive(Debug, Deserialize)]
pub struct ArrivalsRequest {
    /// Restrict to a single line (e.g., "2호선")
    pub line: Option<String>,

    /// Restrict to "ascending" or "descending"
    pub direction: Option<String>,
}

/// One train on an arrival board.
#[derive(Debug, Serialize)]
pub struct ArrivalResult {
    /// Line the train runs on
    pub line: LineId,

    /// Normalized travel direction
    pub direction: Direction,

    /// Network-specific direction label (e.g., "상행", "내선")
    pub direction_label: Option<String>,

    /// Terminal station of the train
    pub destination: StationName,

    /// Structured countdown
    pub countdown: Countdown,

    /// Human-readable countdown (e.g., "3분 20초")
    pub eta: String,

    /// Train identifier
    pub trip: String,

    /// Whether the train runs an express service
    pub is_express: bool,
}

impl ArrivalResult {
    /// Build one board row, attaching the line's own label for the
    /// resolved direction.
    pub fn from_arrival(arrival: &NormalizedArrival, mapping: &DirectionMapping) -> Self {
        Self {
            line: arrival.line.clone(),
            direction: arrival.direction,
            direction_label: mapping
                .label(&arrival.line, arrival.direction)
                .map(str::to_string),
            destination: arrival.destination.clone(),
            countdown: arrival.countdown,
            eta: arrival.countdown.to_string(),
            trip: arrival.trip.to_string(),
            is_express: arrival.is_express,
        }
    }
}

/// Arrival board for one station.
#[derive(Debug, Serialize)]
pub struct ArrivalsResponse {
    /// Canonical station name after resolution
    pub station: StationName,

    /// Board rows ordered soonest first
    pub arrivals: Vec<ArrivalResult>,
}

/// Query for the next trains between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Maximum trains to return (defaults to 3)
    pub limit: Option<usize>,
}

/// Next-trains answer for a direct route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Canonical origin
    pub origin: StationName,

    /// Canonical destination
    pub destination: StationName,

    /// Line the route uses
    pub line: LineId,

    /// Travel direction on that line
    pub direction: Direction,

    /// Stations strictly between origin and destination
    pub stations_between: usize,

    /// Matching trains, soonest first
    pub arrivals: Vec<ArrivalResult>,
}

/// Request to save a preset.
#[derive(Debug, Deserialize)]
pub struct SavePresetRequest {
    /// Preset name (e.g., "출근")
    pub name: String,

    /// Origin station name
    pub origin: String,

    /// Destination station name
    pub destination: String,

    /// Optional line pin
    pub line: Option<String>,
}

/// A preset in API responses.
#[derive(Debug, Serialize)]
pub struct PresetResult {
    pub name: String,
    pub origin: StationName,
    pub destination: StationName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineId>,
}

impl From<Preset> for PresetResult {
    fn from(preset: Preset) -> Self {
        Self {
            name: preset.name,
            origin: preset.origin,
            destination: preset.destination,
            line: preset.line,
        }
    }
}

/// A user's saved presets.
#[derive(Debug, Serialize)]
pub struct PresetListResponse {
    pub presets: Vec<PresetResult>,
}

/// Query for station-name search.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query (station name fragment)
    pub q: String,

    /// Maximum results (default 10)
    pub limit: Option<usize>,
}

/// Station search results.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationName>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    /// Near-miss station names for unknown-station errors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<StationName>,
}
