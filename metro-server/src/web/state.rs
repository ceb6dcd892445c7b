//! Application state for the web layer.

use std::sync::Arc;

use crate::feed::FeedSource;
use crate::presets::PresetStore;
use crate::topology::{DirectionMapping, Topology};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station and line topology
    pub topology: Arc<Topology>,

    /// Direction-code mapping for the network
    pub directions: Arc<DirectionMapping>,

    /// Arrival feed (live cached client or fixtures)
    pub feed: Arc<FeedSource>,

    /// Per-user saved routes
    pub presets: PresetStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        topology: Topology,
        directions: DirectionMapping,
        feed: FeedSource,
        presets: PresetStore,
    ) -> Self {
        Self {
            topology: Arc::new(topology),
            directions: Arc::new(directions),
            feed: Arc::new(feed),
            presets,
        }
    }
}
