//! Live arrival types: raw feed records and their normalized form.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::line::{Direction, LineId};
use super::station::StationName;

/// A train/trip identifier from the live feed, passed through verbatim.
///
/// One physical train run keeps its trip id across polling windows, so
/// this is the deduplication key for repeated feed observations.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(String);

impl TripId {
    pub fn new(s: impl Into<String>) -> Self {
        TripId(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Countdown rank sentinel for a train at the platform.
const RANK_ARRIVED: i64 = -2;
/// Countdown rank sentinel for a train about to arrive.
const RANK_APPROACHING: i64 = -1;
/// Seconds per remaining stop when the feed gives no time estimate.
/// This is the upstream provider's own heuristic for distant trains.
const SECONDS_PER_STOP: i64 = 120;

/// A comparable "time until arrival" measure.
///
/// Numeric countdowns are seconds. Proximity statuses map to fixed
/// sentinel ranks below any real countdown, so a train at the platform
/// sorts before one that is 60 seconds out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Countdown {
    /// Train is at the platform.
    Arrived,
    /// Train is entering or just left the previous station.
    Approaching,
    /// Train is `n` stations away, with no seconds estimate.
    StopsAway(u32),
    /// Estimated seconds until arrival.
    Seconds(u32),
}

impl Countdown {
    /// A totally ordered numeric rank; lower means arriving sooner.
    ///
    /// Sentinels sort before every numeric countdown. `StopsAway` is
    /// projected onto the seconds axis at 120 s per stop so it
    /// interleaves sensibly with real estimates.
    pub fn rank(self) -> i64 {
        match self {
            Countdown::Arrived => RANK_ARRIVED,
            Countdown::Approaching => RANK_APPROACHING,
            Countdown::Seconds(s) => s as i64,
            Countdown::StopsAway(n) => n as i64 * SECONDS_PER_STOP,
        }
    }

    /// The numeric seconds estimate, if the feed supplied one.
    pub fn seconds(self) -> Option<u32> {
        match self {
            Countdown::Seconds(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Arrived => f.write_str("도착"),
            Countdown::Approaching => f.write_str("접근"),
            Countdown::StopsAway(n) => write!(f, "{n}번째 전역"),
            Countdown::Seconds(s) => {
                let (mins, secs) = (s / 60, s % 60);
                if mins > 0 {
                    write!(f, "{mins}분 {secs}초")
                } else {
                    write!(f, "{secs}초")
                }
            }
        }
    }
}

/// The raw countdown field of a feed record: either an estimated
/// seconds value or an unparsed proximity status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCountdown {
    Seconds(u32),
    Status(String),
}

/// A loosely structured live train-position record from the feed.
///
/// The direction code and countdown status are carried through as raw
/// strings; the normalizer is the single seam that interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArrival {
    /// Station the record is about.
    pub station: StationName,
    /// Line the train runs on.
    pub line: LineId,
    /// Raw direction code, e.g. "상행" or "내선". Not globally
    /// consistent across line families.
    pub direction_code: String,
    /// Terminal station of this train.
    pub destination: StationName,
    /// Raw countdown measure.
    pub countdown: RawCountdown,
    /// Trip identifier (dedup key).
    pub trip: TripId,
    /// Whether this is an express (급행) service.
    pub is_express: bool,
}

/// A fully validated arrival, produced per query and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedArrival {
    pub station: StationName,
    pub line: LineId,
    pub direction: Direction,
    pub destination: StationName,
    pub countdown: Countdown,
    pub trip: TripId,
    pub is_express: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_ordering() {
        // [180s, arrived, 60s, approaching] must sort to
        // [arrived, approaching, 60s, 180s].
        let mut countdowns = vec![
            Countdown::Seconds(180),
            Countdown::Arrived,
            Countdown::Seconds(60),
            Countdown::Approaching,
        ];
        countdowns.sort_by_key(|c| c.rank());
        assert_eq!(
            countdowns,
            vec![
                Countdown::Arrived,
                Countdown::Approaching,
                Countdown::Seconds(60),
                Countdown::Seconds(180),
            ]
        );
    }

    #[test]
    fn stops_away_interleaves_with_seconds() {
        assert_eq!(Countdown::StopsAway(2).rank(), 240);
        assert!(Countdown::Seconds(180).rank() < Countdown::StopsAway(2).rank());
        assert!(Countdown::StopsAway(1).rank() < Countdown::Seconds(180).rank());
    }

    #[test]
    fn sentinels_sort_before_zero_seconds() {
        assert!(Countdown::Arrived.rank() < Countdown::Seconds(0).rank());
        assert!(Countdown::Approaching.rank() < Countdown::Seconds(0).rank());
        assert!(Countdown::Arrived.rank() < Countdown::Approaching.rank());
    }

    #[test]
    fn display_formats() {
        assert_eq!(Countdown::Arrived.to_string(), "도착");
        assert_eq!(Countdown::Approaching.to_string(), "접근");
        assert_eq!(Countdown::Seconds(45).to_string(), "45초");
        assert_eq!(Countdown::Seconds(185).to_string(), "3분 5초");
        assert_eq!(Countdown::StopsAway(3).to_string(), "3번째 전역");
    }

    #[test]
    fn seconds_accessor() {
        assert_eq!(Countdown::Seconds(90).seconds(), Some(90));
        assert_eq!(Countdown::Arrived.seconds(), None);
        assert_eq!(Countdown::StopsAway(2).seconds(), None);
    }

    #[test]
    fn trip_id_display() {
        let trip = TripId::new("3245");
        assert_eq!(trip.to_string(), "3245");
        assert_eq!(format!("{:?}", trip), "TripId(3245)");
    }
}
