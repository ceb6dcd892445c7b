//! Live arrival feed boundary.
//!
//! The Seoul Open Data `realtimeStationArrival` API is the single
//! source of live train positions. This module owns everything that
//! touches it: response DTOs, conversion into [`crate::domain::RawArrival`]
//! records, the HTTP client, and a file-backed mock for development.
//! The resolution engine itself never fetches network data.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{FeedClient, FeedConfig};
pub use convert::{convert_response, convert_row, line_for_subway_id};
pub use error::FeedError;
pub use mock::MockFeedClient;
pub use types::{RealtimeArrivalResponse, RealtimeArrivalRow, StatusEnvelope};

use crate::cache::CachedFeedClient;
use crate::domain::{RawArrival, StationName};

/// Where live records come from: the real (cached) API or fixtures.
pub enum FeedSource {
    Live(CachedFeedClient),
    Mock(MockFeedClient),
}

impl FeedSource {
    /// Fetch the raw arrival board for a station.
    pub async fn station_arrivals(
        &self,
        station: &StationName,
    ) -> Result<Vec<RawArrival>, FeedError> {
        match self {
            FeedSource::Live(client) => client.station_arrivals(station).await,
            FeedSource::Mock(client) => client.station_arrivals(station).await,
        }
    }
}
