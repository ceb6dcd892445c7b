//! Seoul Open Data API response DTOs.
//!
//! These types map directly to the `realtimeStationArrival` JSON
//! responses. `Option` is used liberally because the API omits fields
//! rather than sending null in many cases.

use serde::Deserialize;

/// Response from `realtimeStationArrival`.
///
/// Successful responses carry `realtimeArrivalList`; failures (and the
/// "no data" case) carry only the `errorMessage` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RealtimeArrivalResponse {
    /// Status envelope. Present even on success for some deployments.
    #[serde(rename = "errorMessage")]
    pub error_message: Option<StatusEnvelope>,

    /// Live arrival rows for the queried station.
    #[serde(rename = "realtimeArrivalList", default)]
    pub realtime_arrival_list: Vec<RealtimeArrivalRow>,
}

/// The API's status envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusEnvelope {
    /// HTTP-like status; 200 means success.
    pub status: Option<i64>,

    /// Machine-readable result code, e.g. "INFO-000" or "INFO-200".
    pub code: Option<String>,

    /// Human-readable message.
    pub message: Option<String>,
}

/// One live train-position row.
#[derive(Debug, Clone, Deserialize)]
pub struct RealtimeArrivalRow {
    /// Numeric line identifier, e.g. "1002" for 2호선.
    #[serde(rename = "subwayId")]
    pub subway_id: Option<String>,

    /// Station the row is about.
    #[serde(rename = "statnNm")]
    pub statn_nm: Option<String>,

    /// Raw direction code: 상행/하행, or 내선/외선 on 2호선.
    #[serde(rename = "updnLine")]
    pub updn_line: Option<String>,

    /// Terminal station of this train.
    #[serde(rename = "bstatnNm")]
    pub bstatn_nm: Option<String>,

    /// Estimated seconds until arrival, as a string. "0" means the
    /// API only knows a proximity status.
    #[serde(rename = "barvlDt")]
    pub barvl_dt: Option<String>,

    /// Human-readable proximity status, e.g. "전역 출발" or
    /// "3번째 전역 (구의)".
    #[serde(rename = "arvlMsg2")]
    pub arvl_msg2: Option<String>,

    /// Train number; stable for one physical run.
    #[serde(rename = "btrainNo")]
    pub btrain_no: Option<String>,

    /// Train class: "일반" or "급행".
    #[serde(rename = "btrainSttus")]
    pub btrain_sttus: Option<String>,
}
