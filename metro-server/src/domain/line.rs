//! Line identifier and travel direction types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// A metro line identifier, e.g. "2호선" or "신분당선".
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Parse a line identifier. The input is trimmed; empty is rejected.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidLineId {
                reason: "must not be empty",
            });
        }
        Ok(LineId(trimmed.to_string()))
    }

    /// Returns the line id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the two canonical travel orientations along a line.
///
/// `Ascending` means travel in increasing index order of the line's
/// station sequence; `Descending` is the reverse traversal. Raw feed
/// direction codes (상행/하행, or 내선/외선 on the circular line) are
/// mapped onto these two values per line at the normalization seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// The opposite orientation.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_lines() {
        assert!(LineId::parse("2호선").is_ok());
        assert!(LineId::parse("신분당선").is_ok());
        assert_eq!(LineId::parse(" 9호선 ").unwrap().as_str(), "9호선");
    }

    #[test]
    fn reject_empty_line() {
        assert!(LineId::parse("").is_err());
        assert!(LineId::parse("  ").is_err());
    }

    #[test]
    fn direction_opposite() {
        assert_eq!(Direction::Ascending.opposite(), Direction::Descending);
        assert_eq!(Direction::Descending.opposite(), Direction::Ascending);
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Ascending.to_string(), "ascending");
        assert_eq!(Direction::Descending.to_string(), "descending");
    }

    #[test]
    fn direction_serde() {
        assert_eq!(
            serde_json::to_string(&Direction::Ascending).unwrap(),
            "\"ascending\""
        );
        let d: Direction = serde_json::from_str("\"descending\"").unwrap();
        assert_eq!(d, Direction::Descending);
    }
}
