//! Direction and line resolution.
//!
//! Given two stations, determine which line to ride and which of its
//! two canonical directions travels from the first toward the second.
//! Interchange pairs connected by more than one shared line are broken
//! deterministically: fewest stations between the two indices wins,
//! with remaining ties going to the line declared earliest at
//! topology-load time.

use tracing::debug;

use crate::domain::{Direction, LineId, StationName};
use crate::topology::Topology;

use super::error::ResolveError;

/// A resolved direct route: the chosen line and travel direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSelection {
    pub line: LineId,
    pub direction: Direction,
    /// Stations strictly between origin and destination on the chosen
    /// line (the tie-break measure).
    pub stations_between: usize,
}

/// Resolve the travel direction from `origin` toward `destination` on
/// a specific line.
pub fn resolve_direction(
    topology: &Topology,
    line: &LineId,
    origin: &StationName,
    destination: &StationName,
) -> Result<Direction, ResolveError> {
    if origin == destination {
        return Err(ResolveError::DegenerateRoute(origin.clone()));
    }

    // Surfaces UnknownLine before per-station checks.
    topology.stations_of(line)?;

    let origin_idx = topology
        .index_of(line, origin)
        .ok_or_else(|| ResolveError::StationNotOnLine {
            line: line.clone(),
            station: origin.clone(),
        })?;
    let dest_idx = topology
        .index_of(line, destination)
        .ok_or_else(|| ResolveError::StationNotOnLine {
            line: line.clone(),
            station: destination.clone(),
        })?;

    if origin_idx < dest_idx {
        Ok(Direction::Ascending)
    } else {
        Ok(Direction::Descending)
    }
}

/// Resolve a route with the line already chosen by the caller.
pub fn resolve_route_on(
    topology: &Topology,
    line: &LineId,
    origin: &StationName,
    destination: &StationName,
) -> Result<RouteSelection, ResolveError> {
    let direction = resolve_direction(topology, line, origin, destination)?;
    let origin_idx = topology
        .index_of(line, origin)
        .ok_or_else(|| ResolveError::StationNotOnLine {
            line: line.clone(),
            station: origin.clone(),
        })?;
    let dest_idx = topology
        .index_of(line, destination)
        .ok_or_else(|| ResolveError::StationNotOnLine {
            line: line.clone(),
            station: destination.clone(),
        })?;
    Ok(RouteSelection {
        line: line.clone(),
        direction,
        stations_between: origin_idx.abs_diff(dest_idx) - 1,
    })
}

/// Choose the line and direction for a direct route between two
/// stations anywhere in the network.
pub fn resolve_route(
    topology: &Topology,
    origin: &StationName,
    destination: &StationName,
) -> Result<RouteSelection, ResolveError> {
    if origin == destination {
        return Err(ResolveError::DegenerateRoute(origin.clone()));
    }

    let shared = topology.shared_lines(origin, destination)?;
    if shared.is_empty() {
        return Err(ResolveError::NoDirectConnection {
            origin: origin.clone(),
            destination: destination.clone(),
        });
    }

    // `shared` is already in declaration order, so a strict `<` on the
    // span keeps the earliest-declared line on ties.
    let mut best: Option<(usize, RouteSelection)> = None;
    for line in shared {
        let origin_idx = topology
            .index_of(&line, origin)
            .expect("shared line contains origin");
        let dest_idx = topology
            .index_of(&line, destination)
            .expect("shared line contains destination");

        let span = origin_idx.abs_diff(dest_idx);
        let direction = if origin_idx < dest_idx {
            Direction::Ascending
        } else {
            Direction::Descending
        };

        let candidate = RouteSelection {
            line,
            direction,
            stations_between: span - 1,
        };

        match &best {
            Some((best_span, _)) if span >= *best_span => {}
            _ => best = Some((span, candidate)),
        }
    }

    let (_, selection) = best.expect("shared set is non-empty");
    debug!(
        line = %selection.line,
        direction = %selection.direction,
        between = selection.stations_between,
        "resolved route {origin} -> {destination}"
    );
    Ok(selection)
}
