//! Topology error types.

use crate::domain::{LineId, StationName};

/// Load-time validation failure. Malformed topology is a fatal startup
/// error, never a per-query failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// A line was declared more than once.
    #[error("line {0} is declared more than once")]
    DuplicateLine(LineId),

    /// A line's sequence contains the same station twice.
    #[error("line {line} lists station {station} more than once")]
    DuplicateStation { line: LineId, station: StationName },

    /// A line needs at least two stations to define a direction.
    #[error("line {0} must have at least two stations")]
    TooFewStations(LineId),
}

/// Lookup failure: the station name has no entry in the topology.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station: {0}")]
pub struct UnknownStation(pub StationName);

/// Lookup failure: the line id has no entry in the topology.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line: {0}")]
pub struct UnknownLine(pub LineId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let line = LineId::parse("2호선").unwrap();
        let station = StationName::parse("강남").unwrap();

        let err = TopologyError::DuplicateLine(line.clone());
        assert_eq!(err.to_string(), "line 2호선 is declared more than once");

        let err = TopologyError::DuplicateStation {
            line: line.clone(),
            station: station.clone(),
        };
        assert_eq!(err.to_string(), "line 2호선 lists station 강남 more than once");

        let err = TopologyError::TooFewStations(line);
        assert_eq!(err.to_string(), "line 2호선 must have at least two stations");

        let err = UnknownStation(station);
        assert_eq!(err.to_string(), "unknown station: 강남");

        let err = UnknownLine(LineId::parse("99호선").unwrap());
        assert_eq!(err.to_string(), "unknown line: 99호선");
    }
}
