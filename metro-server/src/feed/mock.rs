//! Mock feed client for development without an API key.
//!
//! Loads sample arrival boards from JSON files and serves them as if
//! they were live responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{RawArrival, StationName};

use super::convert::convert_response;
use super::error::FeedError;
use super::types::RealtimeArrivalResponse;

/// Mock feed client serving boards from JSON fixture files.
///
/// Expects files named `{station}.json` (e.g. `강남.json`), each
/// containing a `realtimeStationArrival` response body.
#[derive(Clone)]
pub struct MockFeedClient {
    boards: Arc<RwLock<HashMap<StationName, RealtimeArrivalResponse>>>,
}

impl MockFeedClient {
    /// Load all fixtures from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, FeedError> {
        let data_dir = data_dir.as_ref();
        let mut boards = HashMap::new();

        let entries = std::fs::read_dir(data_dir)
            .map_err(|e| FeedError::MockData(format!("failed to read {data_dir:?}: {e}")))?;

        for entry in entries {
            let entry =
                entry.map_err(|e| FeedError::MockData(format!("failed to read entry: {e}")))?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let station = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| StationName::parse(s).ok())
                .ok_or_else(|| FeedError::MockData(format!("invalid filename: {path:?}")))?;

            let json = std::fs::read_to_string(&path)
                .map_err(|e| FeedError::MockData(format!("failed to read {path:?}: {e}")))?;

            let board: RealtimeArrivalResponse = serde_json::from_str(&json)
                .map_err(|e| FeedError::MockData(format!("failed to parse {path:?}: {e}")))?;

            boards.insert(station, board);
        }

        if boards.is_empty() {
            return Err(FeedError::MockData(format!(
                "no mock board files found in {data_dir:?}"
            )));
        }

        Ok(Self {
            boards: Arc::new(RwLock::new(boards)),
        })
    }

    /// Fetch the mock arrival board for a station.
    ///
    /// Stations without a fixture get an empty board, mirroring the
    /// live API's "no data" case.
    pub async fn station_arrivals(
        &self,
        station: &StationName,
    ) -> Result<Vec<RawArrival>, FeedError> {
        let boards = self.boards.read().await;
        Ok(boards
            .get(station)
            .map(convert_response)
            .unwrap_or_default())
    }

    /// Stations with fixture data.
    pub async fn available_stations(&self) -> Vec<StationName> {
        let boards = self.boards.read().await;
        boards.keys().cloned().collect()
    }
}
