//! Resolver error taxonomy.
//!
//! Every failure is a distinct, named variant; none is ever coerced
//! into an empty result. An empty result is reserved exclusively for
//! "no trains currently in the feed".

use crate::domain::{LineId, StationName};
use crate::normalize::NormalizeError;
use crate::topology::{UnknownLine, UnknownStation};

/// Failures when resolving arrivals or routes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A queried station name has no entry in the topology.
    #[error(transparent)]
    UnknownStation(#[from] UnknownStation),

    /// A queried line id has no entry in the topology.
    #[error(transparent)]
    UnknownLine(#[from] UnknownLine),

    /// The station belongs to the network but not to this specific
    /// line's sequence.
    #[error("station {station} is not on line {line}")]
    StationNotOnLine { line: LineId, station: StationName },

    /// Origin and destination are the same station.
    #[error("origin and destination are both {0}")]
    DegenerateRoute(StationName),

    /// The two stations share no line; a direct route cannot be
    /// resolved (transfers are out of scope).
    #[error("no direct line connects {origin} and {destination}")]
    NoDirectConnection {
        origin: StationName,
        destination: StationName,
    },

    /// A feed record for the queried station failed normalization.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
