use crate::types::{CustomerType, TrId};
use getset::{Getters, Setters};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// 해외주식 주문 요청 헤더
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
pub struct Header {
    /// "Bearer {token}"
    #[getset(get = "pub", set = "pub")]
    authorization: String,
    #[getset(get = "pub", set = "pub")]
    appkey: String,
    #[getset(get = "pub", set = "pub")]
    appsecret: String,
    #[getset(get = "pub")]
    tr_id: TrId,
    /// 개인은 P. 없으면 키 자체를 생략
    #[getset(get = "pub", set = "pub")]
    #[serde(default)]
    custtype: Option<CustomerType>,
    /// POST 본문에 대한 hashkey
    #[getset(get = "pub", set = "pub")]
    hashkey: String,
}

impl Header {
    pub fn new(
        authorization: String,
        appkey: String,
        appsecret: String,
        tr_id: TrId,
        hashkey: String,
    ) -> Self {
        Self {
            authorization,
            appkey,
            appsecret,
            tr_id,
            custtype: None,
            hashkey,
        }
    }

    /// HTTP 헤더 목록. custtype이 없으면 포함하지 않음
    pub fn into_iter(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("authorization", self.authorization.clone()),
            ("appkey", self.appkey.clone()),
            ("appsecret", self.appsecret.clone()),
            ("tr_id", self.tr_id.into()),
        ];
        if let Some(custtype) = self.custtype {
            headers.push(("custtype", custtype.into()));
        }
        headers.push(("hashkey", self.hashkey.clone()));
        headers
    }
}

#[allow(non_snake_case)]
pub mod Body {
    use crate::types::{ExchangeCode, Price, Quantity, SellOrderDivision};
    use getset::Getters;
    use serde::{Deserialize, Deserializer, Serialize};
    use std::str::FromStr;

    /// 해외주식 주문 본문. POST 본문의 키는 대문자여야 함
    #[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    pub struct Order {
        /// 종합계좌번호(계좌번호 체계(8-2)의 앞 8자리)
        #[getset(get = "pub")]
        cano: String,
        /// 계좌상품코드(계좌번호 체계(8-2)의 뒤 2자리)
        #[getset(get = "pub")]
        acnt_prdt_cd: String,
        /// 해외거래소코드
        #[getset(get = "pub")]
        ovrs_excg_cd: ExchangeCode,
        /// 상품번호(종목 심볼)
        #[getset(get = "pub")]
        pdno: String,
        /// 주문수량
        #[getset(get = "pub")]
        ord_qty: Quantity,
        /// 1주당 주문단가
        #[getset(get = "pub")]
        ovrs_ord_unpr: Price,
        /// 주문서버구분코드("0")
        #[getset(get = "pub")]
        ord_svr_dvsn_cd: String,
        /// 주문구분
        #[getset(get = "pub")]
        #[serde(deserialize_with = "order_division_code")]
        ord_dvsn: String,
    }

    /// 매도 코드표(00, 31~34)가 매수 코드표를 포함하므로 그 안의 코드만 허용
    fn order_division_code<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        SellOrderDivision::from_str(&code).map_err(serde::de::Error::custom)?;
        Ok(code)
    }

    impl Order {
        #[allow(clippy::too_many_arguments)]
        pub(crate) fn new(
            cano: String,
            acnt_prdt_cd: String,
            ovrs_excg_cd: ExchangeCode,
            pdno: String,
            ord_qty: Quantity,
            ovrs_ord_unpr: Price,
            ord_svr_dvsn_cd: String,
            ord_dvsn: String,
        ) -> Self {
            Self {
                cano,
                acnt_prdt_cd,
                ovrs_excg_cd,
                pdno,
                ord_qty,
                ovrs_ord_unpr,
                ord_svr_dvsn_cd,
                ord_dvsn,
            }
        }

        pub fn get_json_string(&self) -> Result<String, serde_json::Error> {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::order::OrderRequest;
    use crate::types::{
        Account, BuyOrderDivision, Environment, ExchangeCode, Market, OrderDivision, Price,
        Quantity,
    };

    fn request() -> OrderRequest {
        OrderRequest::new(
            Environment::Real,
            Market::Us,
            ExchangeCode::Nasdaq,
            Account::new("12345678", "01").unwrap(),
            "TSLA",
            Quantity::try_from("5").unwrap(),
            Price::try_from("201.10").unwrap(),
            OrderDivision::Buy(BuyOrderDivision::Limit),
        )
        .unwrap()
    }

    #[test]
    fn test_body_wire_keys() {
        let value = serde_json::to_value(request().body()).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            [
                "ACNT_PRDT_CD",
                "CANO",
                "ORD_DVSN",
                "ORD_QTY",
                "ORD_SVR_DVSN_CD",
                "OVRS_EXCG_CD",
                "OVRS_ORD_UNPR",
                "PDNO",
            ]
        );
        assert_eq!(object["OVRS_EXCG_CD"], "NASD");
        assert_eq!(object["ORD_QTY"], "5");
        assert_eq!(object["OVRS_ORD_UNPR"], "201.10");
        assert_eq!(object["ORD_SVR_DVSN_CD"], "0");
        assert_eq!(object["ORD_DVSN"], "00");
    }

    #[test]
    fn test_body_rejects_unknown_order_division() {
        let json = request().body().get_json_string().unwrap();
        assert!(serde_json::from_str::<Body::Order>(&json).is_ok());

        let unknown = json.replace(r#""ORD_DVSN":"00""#, r#""ORD_DVSN":"99""#);
        assert_ne!(unknown, json);
        assert!(serde_json::from_str::<Body::Order>(&unknown).is_err());

        let session = json.replace(r#""ORD_DVSN":"00""#, r#""ORD_DVSN":"34""#);
        let decoded: Body::Order = serde_json::from_str(&session).unwrap();
        assert_eq!(decoded.ord_dvsn(), "34");
    }

    #[test]
    fn test_header_omits_empty_custtype() {
        let header = request().header("t", "k", "s", None, "h".to_string());
        let value = serde_json::to_value(&header).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("custtype"));
        assert_eq!(object["tr_id"], "TTTT1002U");
        assert_eq!(object["authorization"], "Bearer t");
        assert_eq!(object["hashkey"], "h");
        assert!(header.into_iter().iter().all(|(k, _)| *k != "custtype"));

        let header = request().header("t", "k", "s", Some(CustomerType::Personal), "h".into());
        let value = serde_json::to_value(&header).unwrap();
        assert_eq!(value["custtype"], "P");
        assert!(header.into_iter().contains(&("custtype", "P".to_string())));
    }
}
