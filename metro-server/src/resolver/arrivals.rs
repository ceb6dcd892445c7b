//! Arrival and route queries over a live feed snapshot.
//!
//! Every query is computed fresh from the caller-supplied raw records
//! and the immutable topology. Nothing persists across calls: live
//! arrival data goes stale in seconds, so there is no useful state to
//! keep here.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Direction, LineId, NormalizedArrival, RawArrival, StationName, TripId};
use crate::normalize::normalize;
use crate::topology::{DirectionMapping, Topology};

use super::direction::{RouteSelection, resolve_route};
use super::error::ResolveError;

/// All upcoming arrivals at a station, ordered soonest-first.
///
/// Records for other stations are ignored. Repeated observations of
/// the same trip are deduplicated with the last-seen record winning
/// (feeds repeat a train across polling windows with fresher
/// countdowns). The full ordered set is returned; truncation is a
/// presentation concern.
pub fn arrivals_at(
    topology: &Topology,
    mapping: &DirectionMapping,
    station: &StationName,
    raw_feed: &[RawArrival],
) -> Result<Vec<NormalizedArrival>, ResolveError> {
    topology.lines_of(station)?;

    let mut arrivals: Vec<NormalizedArrival> = Vec::new();
    let mut seen: HashMap<TripId, usize> = HashMap::new();

    for raw in raw_feed {
        if &raw.station != station {
            continue;
        }
        let arrival = normalize(raw, mapping)?;
        match seen.get(&arrival.trip) {
            // Last-seen record for a trip wins, but keeps its slot so
            // ties in countdown rank stay in first-observation order.
            Some(&idx) => arrivals[idx] = arrival,
            None => {
                seen.insert(arrival.trip.clone(), arrivals.len());
                arrivals.push(arrival);
            }
        }
    }

    arrivals.sort_by_key(|a| a.countdown.rank());
    debug!(station = %station, count = arrivals.len(), "resolved arrivals");
    Ok(arrivals)
}

/// The next `limit` arrivals from `origin` heading toward
/// `destination`.
///
/// Resolves the shared line and travel direction, then filters the
/// origin's arrivals to that line and direction, dropping trains whose
/// terminal lies strictly before the destination (they would never
/// reach it). An empty result is the valid "no trains right now"
/// outcome, not an error.
pub fn next_arrivals(
    topology: &Topology,
    mapping: &DirectionMapping,
    origin: &StationName,
    destination: &StationName,
    raw_feed: &[RawArrival],
    limit: usize,
) -> Result<Vec<NormalizedArrival>, ResolveError> {
    let selection = resolve_route(topology, origin, destination)?;
    next_arrivals_on(topology, mapping, origin, destination, &selection, raw_feed, limit)
}

/// As [`next_arrivals`], but with the line and direction already
/// resolved (used when a caller pins the line explicitly).
pub fn next_arrivals_on(
    topology: &Topology,
    mapping: &DirectionMapping,
    origin: &StationName,
    destination: &StationName,
    selection: &RouteSelection,
    raw_feed: &[RawArrival],
    limit: usize,
) -> Result<Vec<NormalizedArrival>, ResolveError> {
    let all = arrivals_at(topology, mapping, origin, raw_feed)?;

    let mut matched: Vec<NormalizedArrival> = all
        .into_iter()
        .filter(|a| a.line == selection.line && a.direction == selection.direction)
        .filter(|a| {
            reaches_destination(topology, &selection.line, selection.direction, destination, a)
        })
        .collect();
    matched.truncate(limit);
    Ok(matched)
}

/// Whether a train's terminal station lies at or beyond the requested
/// destination along the travel direction.
///
/// A terminal that is not on the chosen line (through-running onto
/// another operator's track) cannot be judged, so the train is kept.
fn reaches_destination(
    topology: &Topology,
    line: &LineId,
    direction: Direction,
    destination: &StationName,
    arrival: &NormalizedArrival,
) -> bool {
    let Some(dest_idx) = topology.index_of(line, destination) else {
        return true;
    };
    let Some(terminal_idx) = topology.index_of(line, &arrival.destination) else {
        return true;
    };
    match direction {
        Direction::Ascending => terminal_idx >= dest_idx,
        Direction::Descending => terminal_idx <= dest_idx,
    }
}
