//! Caching layer for live feed responses.
//!
//! The upstream API is polled by every query, but live boards only
//! change every few seconds. A short-TTL cache keyed by station name
//! absorbs bursts of queries for the same station without serving
//! stale countdowns for long. The resolution engine stays stateless;
//! caching lives entirely at this fetch boundary.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{RawArrival, StationName};
use crate::feed::{FeedClient, FeedError};

/// Cached board entry.
type BoardEntry = Arc<Vec<RawArrival>>;

/// Configuration for the feed cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached boards.
    pub ttl: Duration,

    /// Maximum number of cached station boards.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(15),
            max_capacity: 500,
        }
    }
}

/// Feed client with per-station response caching.
pub struct CachedFeedClient {
    client: FeedClient,
    boards: MokaCache<StationName, BoardEntry>,
}

impl CachedFeedClient {
    /// Create a new cached client.
    pub fn new(client: FeedClient, config: &CacheConfig) -> Self {
        let boards = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, boards }
    }

    /// Fetch a station's arrival board, using the cache if fresh.
    ///
    /// Errors are not cached: a failed fetch is retried on the next
    /// query.
    pub async fn station_arrivals(
        &self,
        station: &StationName,
    ) -> Result<Vec<RawArrival>, FeedError> {
        if let Some(cached) = self.boards.get(station).await {
            return Ok(cached.as_ref().clone());
        }

        let arrivals = self.client.station_arrivals(station).await?;
        self.boards
            .insert(station.clone(), Arc::new(arrivals.clone()))
            .await;

        Ok(arrivals)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &FeedClient {
        &self.client
    }

    /// Number of cached boards (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.boards.entry_count()
    }

    /// Drop all cached boards.
    pub fn invalidate_all(&self) {
        self.boards.invalidate_all();
    }
}
