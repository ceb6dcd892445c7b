//! Static network topology: lines, ordered station sequences, and the
//! derived station → lines inverse.
//!
//! Built once at startup via [`TopologyBuilder`] and immutable
//! afterwards; every query reads it without synchronization. The order
//! in which lines are declared is preserved and doubles as the fixed
//! preference order for interchange tie-breaking.

mod directions;
mod error;
pub mod seoul;

use std::collections::HashMap;

pub use directions::DirectionMapping;
pub use error::{TopologyError, UnknownLine, UnknownStation};

use crate::domain::{LineId, StationName};

/// The full network map: line → ordered stations plus station → lines.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Lines in declaration order (the tie-break preference order).
    line_order: Vec<LineId>,
    /// Ordered station sequence per line.
    sequences: HashMap<LineId, Vec<StationName>>,
    /// Station position within each line, for O(1) index lookups.
    positions: HashMap<LineId, HashMap<StationName, usize>>,
    /// Lines serving each station, in line declaration order.
    memberships: HashMap<StationName, Vec<LineId>>,
}

impl Topology {
    /// Lines serving a station, in declaration order.
    pub fn lines_of(&self, station: &StationName) -> Result<&[LineId], UnknownStation> {
        self.memberships
            .get(station)
            .map(|v| v.as_slice())
            .ok_or_else(|| UnknownStation(station.clone()))
    }

    /// The ordered station sequence of a line. Index order defines the
    /// line's ascending direction.
    pub fn stations_of(&self, line: &LineId) -> Result<&[StationName], UnknownLine> {
        self.sequences
            .get(line)
            .map(|v| v.as_slice())
            .ok_or_else(|| UnknownLine(line.clone()))
    }

    /// Lines serving both stations, in declaration order. An empty
    /// result means no direct (transfer-free) connection exists.
    pub fn shared_lines(
        &self,
        a: &StationName,
        b: &StationName,
    ) -> Result<Vec<LineId>, UnknownStation> {
        let lines_a = self.lines_of(a)?;
        let lines_b = self.lines_of(b)?;
        Ok(lines_a
            .iter()
            .filter(|line| lines_b.contains(line))
            .cloned()
            .collect())
    }

    /// Position of a station within a line's sequence, if it is on
    /// that line.
    pub fn index_of(&self, line: &LineId, station: &StationName) -> Option<usize> {
        self.positions.get(line)?.get(station).copied()
    }

    /// Whether the station exists anywhere in the network.
    pub fn contains_station(&self, station: &StationName) -> bool {
        self.memberships.contains_key(station)
    }

    /// Declaration index of a line; lower is preferred when breaking
    /// interchange ties.
    pub fn line_preference(&self, line: &LineId) -> Option<usize> {
        self.line_order.iter().position(|l| l == line)
    }

    /// All lines in declaration order.
    pub fn lines(&self) -> &[LineId] {
        &self.line_order
    }

    /// Number of stations in the network (interchanges counted once).
    pub fn station_count(&self) -> usize {
        self.memberships.len()
    }

    /// Resolve user input to a known station name.
    ///
    /// Tries the exact name, then with a trailing "역" stripped, then
    /// with "역" appended. Users type "강남역" while the topology says
    /// "강남" — but "서울역" is itself a canonical name, so the exact
    /// match must win.
    pub fn resolve_station(&self, input: &str) -> Option<StationName> {
        let name = StationName::parse(input).ok()?;
        if self.contains_station(&name) {
            return Some(name);
        }
        if let Some(stripped) = name.as_str().strip_suffix('역') {
            if let Ok(candidate) = StationName::parse(stripped) {
                if self.contains_station(&candidate) {
                    return Some(candidate);
                }
            }
        }
        let suffixed = StationName::parse(&format!("{}역", name.as_str())).ok()?;
        self.contains_station(&suffixed).then_some(suffixed)
    }

    /// Substring search over known station names, for "did you mean"
    /// suggestions. Results are sorted and capped at `limit`.
    pub fn search_stations(&self, query: &str, limit: usize) -> Vec<StationName> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let mut matches: Vec<StationName> = self
            .memberships
            .keys()
            .filter(|s| s.as_str().contains(query) || query.contains(s.as_str()))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        matches.truncate(limit);
        matches
    }
}

/// Builder for the network topology. Validates on `build`.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    lines: Vec<(LineId, Vec<StationName>)>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a line with its ordered station sequence. Declaration
    /// order is the interchange tie-break preference order.
    pub fn line(mut self, id: &str, stations: &[&str]) -> Self {
        let id = LineId::parse(id).expect("line id literals must be non-empty");
        let stations = stations
            .iter()
            .map(|s| StationName::parse(s).expect("station literals must be non-empty"))
            .collect();
        self.lines.push((id, stations));
        self
    }

    /// Validate and build the immutable topology.
    pub fn build(self) -> Result<Topology, TopologyError> {
        let mut line_order = Vec::with_capacity(self.lines.len());
        let mut sequences = HashMap::new();
        let mut positions: HashMap<LineId, HashMap<StationName, usize>> = HashMap::new();
        let mut memberships: HashMap<StationName, Vec<LineId>> = HashMap::new();

        for (id, stations) in self.lines {
            if sequences.contains_key(&id) {
                return Err(TopologyError::DuplicateLine(id));
            }
            if stations.len() < 2 {
                return Err(TopologyError::TooFewStations(id));
            }

            let mut index = HashMap::with_capacity(stations.len());
            for (i, station) in stations.iter().enumerate() {
                if index.insert(station.clone(), i).is_some() {
                    return Err(TopologyError::DuplicateStation {
                        line: id,
                        station: station.clone(),
                    });
                }
                memberships.entry(station.clone()).or_default().push(id.clone());
            }

            line_order.push(id.clone());
            positions.insert(id.clone(), index);
            sequences.insert(id, stations);
        }

        Ok(Topology {
            line_order,
            sequences,
            positions,
            memberships,
        })
    }
}
