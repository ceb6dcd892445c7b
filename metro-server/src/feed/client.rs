//! Seoul Open Data real-time arrival HTTP client.
//!
//! Fetches `realtimeStationArrival` boards. The Seoul API carries the
//! key in the URL path and reports failures through both HTTP status
//! codes and an in-body status envelope; both are checked here.

use crate::domain::{RawArrival, StationName};

use super::convert::convert_response;
use super::error::FeedError;
use super::types::RealtimeArrivalResponse;

/// Default base URL for the Seoul Open Data subway API.
const DEFAULT_BASE_URL: &str = "http://swopenAPI.seoul.go.kr/api/subway";

/// Default maximum rows per station board.
const DEFAULT_MAX_ROWS: u32 = 20;

/// Envelope code for "no matching data" — an empty board, not a
/// failure.
const CODE_NO_DATA: &str = "INFO-200";

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Seoul Open Data API key.
    pub api_key: String,
    /// Base URL for the API (overridable for testing).
    pub base_url: String,
    /// Maximum rows to request per board.
    pub max_rows: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_rows: DEFAULT_MAX_ROWS,
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the maximum rows per board.
    pub fn with_max_rows(mut self, rows: u32) -> Self {
        self.max_rows = rows;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Live arrival feed client.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    max_rows: u32,
}

impl FeedClient {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            max_rows: config.max_rows,
        })
    }

    /// Fetch the live arrival board for a station.
    ///
    /// Returns raw records for the engine to normalize. A "no data"
    /// envelope yields an empty vec — trains simply are not running.
    pub async fn station_arrivals(
        &self,
        station: &StationName,
    ) -> Result<Vec<RawArrival>, FeedError> {
        let url = format!(
            "{}/{}/json/realtimeStationArrival/0/{}/{}",
            self.base_url,
            self.api_key,
            self.max_rows,
            station.as_str(),
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(FeedError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16() as i64,
                message: body,
            });
        }

        let body = response.text().await?;

        let board: RealtimeArrivalResponse =
            serde_json::from_str(&body).map_err(|e| FeedError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        // The API signals failures in-body with HTTP 200.
        if let Some(envelope) = &board.error_message {
            let envelope_status = envelope.status.unwrap_or(200);
            if envelope_status != 200 {
                if envelope.code.as_deref() == Some(CODE_NO_DATA) {
                    return Ok(Vec::new());
                }
                return Err(FeedError::Api {
                    status: envelope_status,
                    message: envelope
                        .message
                        .clone()
                        .unwrap_or_else(|| "unknown API error".to_string()),
                });
            }
        }

        Ok(convert_response(&board))
    }
}
