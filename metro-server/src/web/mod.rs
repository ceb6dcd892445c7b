//! Web layer for the arrivals server.
//!
//! Provides HTTP endpoints for arrival boards, direct-route queries,
//! and per-user presets.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
