//! Per-user commute presets.
//!
//! A preset names an (origin, destination) pair, optionally pinned to
//! a line, so a saved "출근" route can be run as a single query.
//! Storage is one JSON file per user under a presets directory.

mod store;

use serde::{Deserialize, Serialize};

pub use store::{PresetError, PresetStore};

use crate::domain::{LineId, StationName};

/// A saved route for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// User-chosen preset name, e.g. "출근".
    pub name: String,
    /// Origin station.
    pub origin: StationName,
    /// Destination station.
    pub destination: StationName,
    /// Optional line pin; when absent the resolver chooses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_json_round_trip() {
        let preset = Preset {
            name: "출근".to_string(),
            origin: StationName::parse("정자").unwrap(),
            destination: StationName::parse("강남").unwrap(),
            line: Some(LineId::parse("신분당선").unwrap()),
        };

        let json = serde_json::to_string(&preset).unwrap();
        let back: Preset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, preset);
    }

    #[test]
    fn preset_without_line_omits_field() {
        let preset = Preset {
            name: "퇴근".to_string(),
            origin: StationName::parse("강남").unwrap(),
            destination: StationName::parse("정자").unwrap(),
            line: None,
        };

        let json = serde_json::to_string(&preset).unwrap();
        assert!(!json.contains("line"));
        let back: Preset = serde_json::from_str(&json).unwrap();
        assert_eq!(back.line, None);
    }
}
