use crate::types::order::OrderRequest;
use crate::types::request::stock::order::Header as RequestHeader;
use crate::types::response::stock::order::{Body, Confirmation, Header};
use crate::types::session::TradingSession;
use crate::types::{
    Account, BuyOrderDivision, CustomerType, Environment, ExchangeCode, OrderDivision, Price,
    Quantity, SellOrderDivision,
};
use crate::{auth, Error};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, info, warn};

const ORDER_PATH: &str = "/uapi/overseas-stock/v1/trading/order";

#[derive(Clone)]
pub struct Oversea {
    client: reqwest::Client,
    endpoint_url: url::Url,
    environment: Environment,
    auth: auth::Auth,
    account: Account,
    custtype: Option<CustomerType>,
}

impl Oversea {
    /// 해외주식 주문에 관한 API
    /// [해외주식주문](https://apiportal.koreainvestment.com/apiservice/apiservice-oversea-stock-order)
    pub fn new(
        client: &reqwest::Client,
        environment: Environment,
        auth: auth::Auth,
        account: Account,
    ) -> Result<Self, Error> {
        account.validate()?;
        let endpoint_url = url::Url::parse(environment.endpoint_url())?;
        Ok(Self {
            client: client.clone(),
            endpoint_url,
            environment,
            auth,
            account,
            custtype: Some(CustomerType::Personal),
        })
    }

    /// None이면 custtype 헤더를 보내지 않음
    pub fn set_custtype(&mut self, custtype: Option<CustomerType>) {
        self.custtype = custtype;
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// 해외주식 매수 주문
    pub async fn buy(
        &self,
        exchange: ExchangeCode,
        symbol: &str,
        qty: Quantity,
        price: Price,
        division: BuyOrderDivision,
    ) -> Result<Confirmation, Error> {
        let request = self.request(exchange, symbol, qty, price, OrderDivision::Buy(division))?;
        self.order(&request).await
    }

    /// 해외주식 매도 주문
    pub async fn sell(
        &self,
        exchange: ExchangeCode,
        symbol: &str,
        qty: Quantity,
        price: Price,
        division: SellOrderDivision,
    ) -> Result<Confirmation, Error> {
        let request = self.request(exchange, symbol, qty, price, OrderDivision::Sell(division))?;
        self.order(&request).await
    }

    /// 이 클라이언트의 계좌와 실전/모의 구분으로 주문 생성
    pub fn request(
        &self,
        exchange: ExchangeCode,
        symbol: &str,
        qty: Quantity,
        price: Price,
        division: OrderDivision,
    ) -> Result<OrderRequest, Error> {
        OrderRequest::new(
            self.environment,
            exchange.market(),
            exchange,
            self.account.clone(),
            symbol,
            qty,
            price,
            division,
        )
    }

    /// 해외주식 주문[v1_해외주식-001]
    /// 요청 한 번에 응답 한 번. rt_cd가 "0"이 아니면 BrokerRejected
    pub async fn order(&self, request: &OrderRequest) -> Result<Confirmation, Error> {
        if request.environment() != &self.environment {
            return Err(Error::InvalidCombination(format!(
                "{:?} order sent through a {:?} client",
                request.environment(),
                self.environment
            )));
        }
        if let Some(session) = TradingSession::for_market(*request.market()) {
            if !session.is_open_now() {
                warn!(
                    market = %request.market(),
                    "order submitted outside the documented trading window"
                );
            }
        }

        let token = self
            .auth
            .get_token()
            .ok_or_else(|| Error::AuthInitFailed("token".to_string()))?;
        let body = request.body().get_json_string()?;
        let hash = self.auth.get_hash(body.clone()).await?;
        let header = request.header(
            &token,
            &self.auth.get_appkey(),
            &self.auth.get_appsecret(),
            self.custtype,
            hash,
        );

        let headers = http_headers(&header)?;

        debug!(tr_id = %request.tr_id(), %body, "overseas order request");
        let resp = self
            .client
            .post(self.endpoint_url.join(ORDER_PATH)?)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let response_header = Header::Stock::from_headers(resp.headers());
        let text = resp.text().await?;
        debug!(status = status.as_u16(), %text, "overseas order response");

        let parsed: Body::Order = serde_json::from_str(&text)?;
        match parsed.into_result() {
            Ok(output) => {
                info!(
                    odno = %output.odno(),
                    ord_tmd = %output.ord_tmd(),
                    gt_uid = %response_header.gt_uid(),
                    symbol = %request.symbol(),
                    "overseas order accepted"
                );
                Ok(Confirmation::new(response_header, output))
            }
            Err(e) => {
                warn!(
                    status = status.as_u16(),
                    gt_uid = %response_header.gt_uid(),
                    "overseas order failed: {}",
                    e
                );
                Err(e)
            }
        }
    }
}

/// 요청 헤더를 HTTP 헤더로. 값에 허용되지 않는 문자가 있으면 InvalidHeader
fn http_headers(header: &RequestHeader) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Content-Type",
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    for (key, value) in header.into_iter() {
        headers.insert(HeaderName::from_static(key), HeaderValue::from_str(&value)?);
    }
    Ok(headers)
}
