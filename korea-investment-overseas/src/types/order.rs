use crate::types::request::stock::order::{Body, Header};
use crate::types::{
    Account, CustomerType, Direction, Environment, ExchangeCode, Market, OrderDivision, Price,
    Quantity, TrId,
};
use crate::Error;
use getset::Getters;

/// 주문서버구분코드 기본값
pub const DEFAULT_ORDER_SERVER_DIVISION: &str = "0";

/// 검증된 해외주식 주문.
///
/// 시장, 거래소, 매매구분, 실전/모의 여부를 받아 tr_id와 주문구분 코드를 결정한다.
/// 브로커 코드표에 없는 조합은 만들 수 없다.
/// - 거래소는 요청한 시장에 속해야 함 (베트남은 거래소 코드가 없어 항상 거절)
/// - 31~34 주문구분은 미국 실전 주문(TTTT1002U, TTTT1006U)에서만 가능
/// - 모의투자는 지정가(00)만 가능
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct OrderRequest {
    environment: Environment,
    market: Market,
    exchange: ExchangeCode,
    account: Account,
    symbol: String,
    quantity: Quantity,
    price: Price,
    division: OrderDivision,
    tr_id: TrId,
}

impl OrderRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        environment: Environment,
        market: Market,
        exchange: ExchangeCode,
        account: Account,
        symbol: &str,
        quantity: Quantity,
        price: Price,
        division: OrderDivision,
    ) -> Result<Self, Error> {
        account.validate()?;
        let symbol = symbol.trim();
        if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
            return Err(Error::invalid_value("PDNO", symbol));
        }
        if exchange.market() != market {
            return Err(Error::InvalidCombination(format!(
                "exchange {} does not belong to market {}",
                exchange, market
            )));
        }
        if !division.is_limit() {
            if environment == Environment::Virtual {
                return Err(Error::InvalidCombination(format!(
                    "order division {} is not available for mock trading",
                    division.code()
                )));
            }
            if market != Market::Us {
                return Err(Error::InvalidCombination(format!(
                    "order division {} is only available in the us market",
                    division.code()
                )));
            }
        }
        let tr_id = TrId::resolve(environment, market, division.direction());
        Ok(Self {
            environment,
            market,
            exchange,
            account,
            symbol: symbol.to_string(),
            quantity,
            price,
            division,
            tr_id,
        })
    }

    pub fn direction(&self) -> Direction {
        self.division.direction()
    }

    /// 요청 본문. 키는 대문자로 직렬화됨
    pub fn body(&self) -> Body::Order {
        Body::Order::new(
            self.account.cano.clone(),
            self.account.acnt_prdt_cd.clone(),
            self.exchange,
            self.symbol.clone(),
            self.quantity.clone(),
            self.price.clone(),
            DEFAULT_ORDER_SERVER_DIVISION.to_string(),
            self.division.into(),
        )
    }

    /// hashkey는 body()를 직렬화한 문자열로 발급받은 값
    pub fn header(
        &self,
        token: &str,
        appkey: &str,
        appsecret: &str,
        custtype: Option<CustomerType>,
        hashkey: String,
    ) -> Header {
        let mut header = Header::new(
            format!("Bearer {}", token),
            appkey.to_string(),
            appsecret.to_string(),
            self.tr_id,
            hashkey,
        );
        header.set_custtype(custtype);
        header
    }
}
