//! Arrival normalization.
//!
//! The single seam where loosely-structured feed records become
//! validated [`NormalizedArrival`] values. Direction codes resolve
//! through the line-aware [`DirectionMapping`]; countdown statuses map
//! onto sentinel ranks. Unrecognized input is rejected, never guessed
//! at or dropped — data-shape drift from the upstream feed must
//! surface as an error.

use crate::domain::{Countdown, LineId, NormalizedArrival, RawArrival, RawCountdown};
use crate::topology::DirectionMapping;

/// Failure to normalize a raw feed record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// The direction code has no mapping for this line.
    #[error("unmappable direction code {code:?} for line {line}")]
    UnmappableDirection { line: LineId, code: String },

    /// The countdown status string is not in the known vocabulary.
    #[error("unrecognized arrival status: {0:?}")]
    UnrecognizedStatus(String),
}

/// Convert a raw feed record into a normalized arrival.
pub fn normalize(
    raw: &RawArrival,
    mapping: &DirectionMapping,
) -> Result<NormalizedArrival, NormalizeError> {
    let direction = mapping.resolve(&raw.line, &raw.direction_code).ok_or_else(|| {
        NormalizeError::UnmappableDirection {
            line: raw.line.clone(),
            code: raw.direction_code.clone(),
        }
    })?;

    let countdown = match &raw.countdown {
        RawCountdown::Seconds(s) => Countdown::Seconds(*s),
        RawCountdown::Status(status) => parse_status(status)
            .ok_or_else(|| NormalizeError::UnrecognizedStatus(status.clone()))?,
    };

    Ok(NormalizedArrival {
        station: raw.station.clone(),
        line: raw.line.clone(),
        direction,
        destination: raw.destination.clone(),
        countdown,
        trip: raw.trip.clone(),
        is_express: raw.is_express,
    })
}

/// Map a proximity status string (the feed's `arvlMsg2` vocabulary)
/// onto a countdown measure.
///
/// "당역" messages mean the train is at this station, "전역" messages
/// that it is at the previous one, and "N번째 전역" that it is N
/// stations away.
fn parse_status(status: &str) -> Option<Countdown> {
    let status = status.trim();

    if let Some(n) = parse_stops_away(status) {
        return Some(Countdown::StopsAway(n));
    }

    if status.contains("당역 진입") || status.contains("당역 도착") || status == "도착" {
        return Some(Countdown::Arrived);
    }

    if status.contains("전역 출발")
        || status.contains("전역 도착")
        || status.contains("전역 접근")
        || status.contains("접근")
    {
        return Some(Countdown::Approaching);
    }

    None
}

/// Extract N from "[N]번째 전역" style messages, e.g. "3번째 전역 (구의)".
fn parse_stops_away(status: &str) -> Option<u32> {
    let idx = status.find("번째 전역")?;
    let prefix = &status[..idx];
    let digits: String = prefix
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, StationName, TripId};
    use crate::topology::seoul::seoul_directions;

    fn raw(direction_code: &str, countdown: RawCountdown) -> RawArrival {
        RawArrival {
            station: StationName::parse("강남").unwrap(),
            line: LineId::parse("2호선").unwrap(),
            direction_code: direction_code.to_string(),
            destination: StationName::parse("성수").unwrap(),
            countdown,
            trip: TripId::new("2087"),
            is_express: false,
        }
    }

    #[test]
    fn numeric_countdown_passes_through() {
        let arrival = normalize(&raw("내선", RawCountdown::Seconds(180)), &seoul_directions())
            .unwrap();
        assert_eq!(arrival.countdown, Countdown::Seconds(180));
        assert_eq!(arrival.direction, Direction::Ascending);
        assert_eq!(arrival.trip, TripId::new("2087"));
    }

    #[test]
    fn arrived_statuses() {
        let mapping = seoul_directions();
        for status in ["당역 진입", "당역 도착", "도착"] {
            let arrival = normalize(
                &raw("외선", RawCountdown::Status(status.to_string())),
                &mapping,
            )
            .unwrap();
            assert_eq!(arrival.countdown, Countdown::Arrived, "status {status:?}");
        }
    }

    #[test]
    fn approaching_statuses() {
        let mapping = seoul_directions();
        for status in ["전역 출발", "전역 도착", "전역 접근", "강남 접근"] {
            let arrival = normalize(
                &raw("내선", RawCountdown::Status(status.to_string())),
                &mapping,
            )
            .unwrap();
            assert_eq!(arrival.countdown, Countdown::Approaching, "status {status:?}");
        }
    }

    #[test]
    fn stops_away_status() {
        let arrival = normalize(
            &raw("내선", RawCountdown::Status("3번째 전역 (구의)".to_string())),
            &seoul_directions(),
        )
        .unwrap();
        assert_eq!(arrival.countdown, Countdown::StopsAway(3));
    }

    #[test]
    fn stops_away_with_bracket_prefix() {
        let arrival = normalize(
            &raw("내선", RawCountdown::Status("[5]번째 전역".to_string())),
            &seoul_directions(),
        )
        .unwrap();
        assert_eq!(arrival.countdown, Countdown::StopsAway(5));
    }

    #[test]
    fn unknown_status_is_error() {
        let err = normalize(
            &raw("내선", RawCountdown::Status("운행 종료".to_string())),
            &seoul_directions(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            NormalizeError::UnrecognizedStatus("운행 종료".to_string())
        );
    }

    #[test]
    fn unmappable_direction_is_error() {
        let err = normalize(&raw("순환", RawCountdown::Seconds(60)), &seoul_directions())
            .unwrap_err();
        assert_eq!(
            err,
            NormalizeError::UnmappableDirection {
                line: LineId::parse("2호선").unwrap(),
                code: "순환".to_string(),
            }
        );
    }

    #[test]
    fn express_flag_passes_through() {
        let mut record = raw("내선", RawCountdown::Seconds(60));
        record.is_express = true;
        let arrival = normalize(&record, &seoul_directions()).unwrap();
        assert!(arrival.is_express);
    }

    #[test]
    fn parse_stops_away_edge_cases() {
        assert_eq!(parse_stops_away("3번째 전역"), Some(3));
        assert_eq!(parse_stops_away("12번째 전역 도착"), Some(12));
        assert_eq!(parse_stops_away("번째 전역"), None);
        assert_eq!(parse_stops_away("전역 출발"), None);
    }
}
