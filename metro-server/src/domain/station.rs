//! Station name type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A canonical metro station name.
///
/// The Seoul Open Data feed and the topology both identify stations by
/// their exact Korean name without the "역" suffix ("강남", not "강남역").
/// This type guarantees the name is non-empty and has no surrounding
/// whitespace.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationName;
///
/// let gangnam = StationName::parse("강남").unwrap();
/// assert_eq!(gangnam.as_str(), "강남");
///
/// // Whitespace is trimmed
/// assert_eq!(StationName::parse(" 강남 ").unwrap().as_str(), "강남");
///
/// // Empty input is rejected
/// assert!(StationName::parse("").is_err());
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name from a string.
    ///
    /// The input is trimmed; an empty result is rejected.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be empty",
            });
        }
        Ok(StationName(trimmed.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parsing never panics on arbitrary input.
        #[test]
        fn parse_never_panics(s in ".*") {
            let _ = StationName::parse(&s);
        }

        /// A parsed name equals the trimmed input.
        #[test]
        fn parsed_is_trimmed(s in "[가-힣A-Za-z0-9]{1,12}") {
            let name = StationName::parse(&s).unwrap();
            prop_assert_eq!(name.as_str(), s.trim());
        }

        /// Whitespace-only input is always rejected.
        #[test]
        fn whitespace_rejected(s in "[ \t\n]{0,8}") {
            prop_assert!(StationName::parse(&s).is_err());
        }
    }
}
