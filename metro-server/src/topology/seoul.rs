//! Bundled Seoul Metro network definition.
//!
//! Trunk sections of lines 1-9 plus 신분당선 and 수인분당선. Each
//! sequence is listed so that increasing index order matches the 상행
//! travel direction (내선 for the circular 2호선), which makes the
//! canonical `Ascending` direction line up with the feed's own labels.
//!
//! Declaration order matters: it is the fixed preference order used to
//! break ties when an interchange pair shares more than one line.

use crate::domain::Direction;

use super::{DirectionMapping, Topology, TopologyBuilder};

/// Build the bundled Seoul network topology.
///
/// The data is static and validated at build time; a failure here is a
/// programming error in the tables below, so the caller treats it as
/// fatal at startup.
pub fn seoul_network() -> Result<Topology, super::TopologyError> {
    TopologyBuilder::new()
        .line(
            "1호선",
            &[
                "인천", "부평", "구로", "신도림", "영등포", "노량진", "용산", "서울역", "시청",
                "종각", "종로3가", "동대문", "청량리", "회기", "광운대",
            ],
        )
        .line(
            "2호선",
            &[
                "시청", "을지로입구", "을지로3가", "동대문역사문화공원", "신당", "왕십리",
                "한양대", "뚝섬", "성수", "건대입구", "구의", "강변", "잠실나루", "잠실",
                "잠실새내", "종합운동장", "삼성", "선릉", "역삼", "강남", "교대", "서초", "방배",
                "사당", "낙성대", "서울대입구", "신림", "신대방", "구로디지털단지", "대림",
                "신도림", "문래", "영등포구청", "당산", "합정", "홍대입구", "신촌", "이대",
                "아현", "충정로",
            ],
        )
        .line(
            "3호선",
            &[
                "오금", "수서", "도곡", "매봉", "양재", "남부터미널", "교대", "고속터미널",
                "잠원", "신사", "압구정", "옥수", "약수", "동대입구", "충무로", "종로3가",
                "경복궁", "독립문", "불광", "연신내", "구파발", "대화",
            ],
        )
        .line(
            "4호선",
            &[
                "오이도", "안산", "금정", "사당", "동작", "이촌", "삼각지", "숙대입구", "서울역",
                "회현", "명동", "충무로", "동대문역사문화공원", "동대문", "혜화",
                "성신여대입구", "창동", "노원", "당고개",
            ],
        )
        .line(
            "5호선",
            &[
                "상일동", "천호", "왕십리", "종로3가", "광화문", "충정로", "공덕", "마포",
                "여의나루", "여의도", "신길", "영등포시장", "영등포구청", "양평", "오목교",
                "목동", "신정", "까치산", "화곡", "우장산", "발산", "마곡", "송정", "김포공항",
                "방화",
            ],
        )
        .line(
            "6호선",
            &[
                "봉화산", "태릉입구", "석계", "동묘앞", "신당", "청구", "약수", "이태원",
                "삼각지", "공덕", "대흥", "광흥창", "상수", "합정", "망원", "마포구청",
                "월드컵경기장", "디지털미디어시티", "증산", "새절", "응암",
            ],
        )
        .line(
            "7호선",
            &[
                "부평구청", "온수", "가산디지털단지", "대림", "이수", "고속터미널", "반포",
                "논현", "강남구청", "청담", "뚝섬유원지", "건대입구", "군자", "상봉",
                "태릉입구", "노원", "도봉산", "장암",
            ],
        )
        .line(
            "8호선",
            &[
                "모란", "남한산성입구", "산성", "복정", "장지", "문정", "가락시장", "석촌",
                "잠실", "천호", "암사",
            ],
        )
        .line(
            "9호선",
            &[
                "종합운동장", "선정릉", "언주", "신논현", "고속터미널", "동작", "노량진",
                "샛강", "여의도", "국회의사당", "당산", "선유도", "염창", "등촌", "가양",
                "양천향교", "마곡나루", "신방화", "공항시장", "김포공항", "개화",
            ],
        )
        .line(
            "신분당선",
            &[
                "광교", "광교중앙", "상현", "성복", "수지구청", "동천", "미금", "정자", "판교",
                "청계산입구", "양재시민의숲", "양재", "강남", "신논현", "논현", "신사",
            ],
        )
        .line(
            "수인분당선",
            &[
                "수원", "매교", "기흥", "죽전", "오리", "미금", "정자", "수내", "서현", "이매",
                "야탑", "모란", "태평", "복정", "수서", "대모산입구", "개포동", "도곡", "한티",
                "선릉", "선정릉", "강남구청", "압구정로데오", "서울숲", "왕십리",
            ],
        )
        .build()
}

/// Direction-code mapping for the Seoul feed.
///
/// Every line reports 상행/하행 except the circular 2호선, which
/// reports 내선/외선.
pub fn seoul_directions() -> DirectionMapping {
    DirectionMapping::new()
        .default_code("상행", Direction::Ascending)
        .default_code("하행", Direction::Descending)
        .line_code("2호선", "내선", Direction::Ascending)
        .line_code("2호선", "외선", Direction::Descending)
}
