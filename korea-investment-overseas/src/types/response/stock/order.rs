#![allow(non_snake_case)]
pub mod Header {
    use getset::Getters;
    use reqwest::header::HeaderMap;
    use serde::{Deserialize, Serialize};

    #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
    pub struct Stock {
        /// 거래ID(요청한 tr_id)
        #[getset(get = "pub")]
        tr_id: String,
        /// 연속 거래 여부(F or M: 다음 데이터 있음 / D or E: 마지막 데이터)
        #[getset(get = "pub")]
        #[serde(default)]
        tr_cont: String,
        /// Global UID(거래고유번호)
        #[getset(get = "pub")]
        #[serde(default)]
        gt_uid: String,
    }

    impl Stock {
        /// 응답 HTTP 헤더에서 추출. 없는 값은 빈 문자열
        pub fn from_headers(headers: &HeaderMap) -> Self {
            let get = |key: &str| {
                headers
                    .get(key)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            };
            Self {
                tr_id: get("tr_id"),
                tr_cont: get("tr_cont"),
                gt_uid: get("gt_uid"),
            }
        }

        pub fn has_next(&self) -> bool {
            matches!(self.tr_cont.as_str(), "F" | "M")
        }
    }
}

pub mod Body {
    use super::Output;
    use crate::Error;
    use getset::Getters;
    use serde::{Deserialize, Serialize};

    /// 해외주식 주문
    #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
    pub struct Order {
        /// 0: 성공, 0 이외의 값: 실패
        #[getset(get = "pub")]
        rt_cd: String,
        /// 응답코드
        #[getset(get = "pub")]
        #[serde(default)]
        msg_cd: String,
        /// 응답메시지
        #[getset(get = "pub")]
        #[serde(default)]
        msg1: String,
        /// 응답 상세
        #[getset(get = "pub")]
        output: Option<Output::Order>,
    }

    impl Order {
        pub fn is_success(&self) -> bool {
            self.rt_cd == "0"
        }

        /// rt_cd만으로 성공 여부를 판단. HTTP 상태 코드와는 무관
        pub fn into_result(self) -> Result<Output::Order, Error> {
            if !self.is_success() {
                return Err(Error::BrokerRejected {
                    msg_cd: self.msg_cd,
                    msg1: self.msg1,
                });
            }
            self.output.ok_or(Error::MissingOutput)
        }
    }
}

pub mod Output {
    use crate::types::time::parse_order_time;
    use crate::Error;
    use getset::Getters;
    use serde::{Deserialize, Serialize};

    /// 해외주식 주문
    #[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
    #[serde(rename_all = "UPPERCASE", default)]
    pub struct Order {
        /// 주문시 한국투자증권 시스템에서 지정된 영업점코드
        #[getset(get = "pub")]
        krx_rwdg_ord_orgno: String,
        /// 주문번호(주문시 한국투자증권 시스템에서 채번된 주문번호)
        #[getset(get = "pub")]
        odno: String,
        /// 주문시각(시분초HHMMSS). 날짜 없음
        #[getset(get = "pub")]
        ord_tmd: String,
    }

    impl Order {
        pub fn order_time(&self) -> Result<chrono::NaiveTime, Error> {
            parse_order_time(&self.ord_tmd)
        }
    }
}

/// 주문 응답 헤더와 주문 상세
#[derive(Debug, Clone, PartialEq, getset::Getters)]
#[getset(get = "pub")]
pub struct Confirmation {
    header: Header::Stock,
    output: Output::Order,
}

impl Confirmation {
    pub fn new(header: Header::Stock, output: Output::Order) -> Self {
        Self { header, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use reqwest::header::{HeaderMap, HeaderValue};

    #[test]
    fn test_success_response() {
        let raw = r#"{"rt_cd":"0","msg_cd":"X","msg1":"ok","output":{"ODNO":"123","ORD_TMD":"093015"}}"#;
        let body: Body::Order = serde_json::from_str(raw).unwrap();
        let output = body.into_result().unwrap();
        assert_eq!(output.odno(), "123");
        assert_eq!(output.ord_tmd(), "093015");
        assert_eq!(output.krx_rwdg_ord_orgno(), "");
        assert_eq!(
            output.order_time().unwrap(),
            chrono::NaiveTime::from_hms_opt(9, 30, 15).unwrap()
        );
    }

    #[test]
    fn test_full_output_keys() {
        let raw = r#"{"rt_cd":"0","msg_cd":"APBK0013","msg1":"주문 전송 완료 되었습니다.",
            "output":{"KRX_RWDG_ORD_ORGNO":"01790","ODNO":"0030138295","ORD_TMD":"224508"}}"#;
        let output = serde_json::from_str::<Body::Order>(raw)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(output.krx_rwdg_ord_orgno(), "01790");
        assert_eq!(output.odno(), "0030138295");
    }

    #[test]
    fn test_rejected_response() {
        let raw = r#"{"rt_cd":"1","msg_cd":"APBK1664","msg1":"모의투자 주문처리가 안되었습니다","output":{"ODNO":"999"}}"#;
        let body: Body::Order = serde_json::from_str(raw).unwrap();
        assert!(!body.is_success());
        match body.into_result() {
            Err(Error::BrokerRejected { msg_cd, msg1 }) => {
                assert_eq!(msg_cd, "APBK1664");
                assert_eq!(msg1, "모의투자 주문처리가 안되었습니다");
            }
            other => panic!("expected BrokerRejected, got {:?}", other),
        }
    }

    #[test]
    fn test_success_without_output() {
        let body: Body::Order = serde_json::from_str(r#"{"rt_cd":"0","msg_cd":"","msg1":""}"#).unwrap();
        assert!(matches!(body.into_result(), Err(Error::MissingOutput)));
    }

    #[test]
    fn test_header_from_http_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("tr_id", HeaderValue::from_static("TTTT1002U"));
        headers.insert("tr_cont", HeaderValue::from_static("D"));
        headers.insert("gt_uid", HeaderValue::from_static("abc-123"));
        let header = Header::Stock::from_headers(&headers);
        assert_eq!(header.tr_id(), "TTTT1002U");
        assert_eq!(header.gt_uid(), "abc-123");
        assert!(!header.has_next());

        let header: Header::Stock = serde_json::from_str(r#"{"tr_id":"VTTT1001U","tr_cont":"M","gt_uid":"x"}"#).unwrap();
        assert!(header.has_next());
    }
}
