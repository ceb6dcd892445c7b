//! Conversion from Seoul Open Data DTOs to raw arrival records.
//!
//! Rows the engine cannot use at all (no station, no trip id) are
//! skipped with a warning rather than failing the whole board; the
//! stricter semantic checks happen later, at the normalization seam.

use tracing::warn;

use crate::domain::{LineId, RawArrival, RawCountdown, StationName, TripId};

use super::types::{RealtimeArrivalResponse, RealtimeArrivalRow};

/// Map the API's numeric `subwayId` to a line name.
pub fn line_for_subway_id(subway_id: &str) -> Option<LineId> {
    let name = match subway_id {
        "1001" => "1호선",
        "1002" => "2호선",
        "1003" => "3호선",
        "1004" => "4호선",
        "1005" => "5호선",
        "1006" => "6호선",
        "1007" => "7호선",
        "1008" => "8호선",
        "1009" => "9호선",
        "1063" => "경의중앙선",
        "1065" => "공항철도",
        "1067" => "경춘선",
        "1075" => "수인분당선",
        "1077" => "신분당선",
        "1081" => "경강선",
        "1092" => "우이신설선",
        _ => return None,
    };
    Some(LineId::parse(name).expect("line table entries are non-empty"))
}

/// Convert a full API response into raw arrival records.
pub fn convert_response(response: &RealtimeArrivalResponse) -> Vec<RawArrival> {
    response
        .realtime_arrival_list
        .iter()
        .filter_map(convert_row)
        .collect()
}

/// Convert a single row, or `None` if it lacks the fields the engine
/// needs to identify the record at all.
pub fn convert_row(row: &RealtimeArrivalRow) -> Option<RawArrival> {
    let station = row
        .statn_nm
        .as_deref()
        .and_then(|s| StationName::parse(s).ok());
    let Some(station) = station else {
        warn!("skipping arrival row with no station name");
        return None;
    };

    let line = row.subway_id.as_deref().and_then(line_for_subway_id);
    let Some(line) = line else {
        warn!(
            station = %station,
            subway_id = row.subway_id.as_deref().unwrap_or(""),
            "skipping arrival row with unknown subway id"
        );
        return None;
    };

    let trip = row
        .btrain_no
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let Some(trip) = trip else {
        warn!(station = %station, line = %line, "skipping arrival row with no train number");
        return None;
    };

    let destination = row
        .bstatn_nm
        .as_deref()
        .and_then(|s| StationName::parse(s).ok());
    let Some(destination) = destination else {
        warn!(station = %station, line = %line, "skipping arrival row with no destination");
        return None;
    };

    // barvlDt is a stringly-typed seconds value; "0" (or garbage) means
    // the proximity status carries the real information.
    let seconds = row
        .barvl_dt
        .as_deref()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&s| s > 0);

    let countdown = match seconds {
        Some(s) => RawCountdown::Seconds(s),
        None => RawCountdown::Status(row.arvl_msg2.clone().unwrap_or_default()),
    };

    Some(RawArrival {
        station,
        line,
        direction_code: row.updn_line.clone().unwrap_or_default(),
        destination,
        countdown,
        trip: TripId::new(trip),
        is_express: row.btrain_sttus.as_deref() == Some("급행"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RealtimeArrivalRow {
        RealtimeArrivalRow {
            subway_id: Some("1002".into()),
            statn_nm: Some("강남".into()),
            updn_line: Some("내선".into()),
            bstatn_nm: Some("성수".into()),
            barvl_dt: Some("180".into()),
            arvl_msg2: Some("3분 후 (역삼)".into()),
            btrain_no: Some("2087".into()),
            btrain_sttus: Some("일반".into()),
        }
    }

    #[test]
    fn convert_full_row() {
        let raw = convert_row(&row()).unwrap();
        assert_eq!(raw.station, StationName::parse("강남").unwrap());
        assert_eq!(raw.line, LineId::parse("2호선").unwrap());
        assert_eq!(raw.direction_code, "내선");
        assert_eq!(raw.countdown, RawCountdown::Seconds(180));
        assert_eq!(raw.trip, TripId::new("2087"));
        assert!(!raw.is_express);
    }

    #[test]
    fn zero_seconds_falls_back_to_status() {
        let mut r = row();
        r.barvl_dt = Some("0".into());
        r.arvl_msg2 = Some("전역 출발".into());
        let raw = convert_row(&r).unwrap();
        assert_eq!(raw.countdown, RawCountdown::Status("전역 출발".into()));
    }

    #[test]
    fn unparsable_seconds_falls_back_to_status() {
        let mut r = row();
        r.barvl_dt = Some("abc".into());
        let raw = convert_row(&r).unwrap();
        assert!(matches!(raw.countdown, RawCountdown::Status(_)));
    }

    #[test]
    fn express_flag() {
        let mut r = row();
        r.btrain_sttus = Some("급행".into());
        assert!(convert_row(&r).unwrap().is_express);
    }

    #[test]
    fn skip_row_without_station() {
        let mut r = row();
        r.statn_nm = None;
        assert!(convert_row(&r).is_none());
    }

    #[test]
    fn skip_row_without_train_number() {
        let mut r = row();
        r.btrain_no = Some("  ".into());
        assert!(convert_row(&r).is_none());
    }

    #[test]
    fn skip_row_with_unknown_subway_id() {
        let mut r = row();
        r.subway_id = Some("9999".into());
        assert!(convert_row(&r).is_none());
    }

    #[test]
    fn subway_id_table() {
        assert_eq!(
            line_for_subway_id("1009"),
            Some(LineId::parse("9호선").unwrap())
        );
        assert_eq!(
            line_for_subway_id("1077"),
            Some(LineId::parse("신분당선").unwrap())
        );
        assert_eq!(line_for_subway_id(""), None);
    }

    #[test]
    fn convert_response_filters_bad_rows() {
        let mut bad = row();
        bad.btrain_no = None;
        let response = RealtimeArrivalResponse {
            error_message: None,
            realtime_arrival_list: vec![row(), bad],
        };
        assert_eq!(convert_response(&response).len(), 1);
    }
}
