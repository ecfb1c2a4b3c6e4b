pub mod config;
pub mod order;
pub mod request;
pub mod response;
pub mod session;
pub mod time;

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 실전투자(Real) / 모의투자(Virtual)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Environment {
    #[default]
    Real,
    Virtual,
}

impl Environment {
    pub fn endpoint_url(&self) -> &'static str {
        match self {
            Environment::Real => "https://openapi.koreainvestment.com:9443",
            Environment::Virtual => "https://openapivts.koreainvestment.com:29443",
        }
    }
}

/// 계좌번호 체계(8-2)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// 종합계좌번호(앞 8자리)
    pub cano: String,
    /// 계좌상품코드(뒤 2자리)
    pub acnt_prdt_cd: String,
}

impl Account {
    pub fn new(cano: &str, acnt_prdt_cd: &str) -> Result<Self, Error> {
        let account = Self {
            cano: cano.trim().to_string(),
            acnt_prdt_cd: acnt_prdt_cd.trim().to_string(),
        };
        account.validate()?;
        Ok(account)
    }

    /// "12345678-01" 또는 "1234567801"
    pub fn parse(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        match s.split_once('-') {
            Some((cano, prdt)) => Self::new(cano, prdt),
            None if s.len() == 10 && s.is_ascii() => Self::new(&s[..8], &s[8..]),
            None => Err(Error::invalid_value("account", s)),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !is_digits(&self.cano, 8) {
            return Err(Error::invalid_value("CANO", self.cano.clone()));
        }
        if !is_digits(&self.acnt_prdt_cd, 2) {
            return Err(Error::invalid_value("ACNT_PRDT_CD", self.acnt_prdt_cd.clone()));
        }
        Ok(())
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// 매수(Bid) / 매도(Ask)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Bid,
    Ask,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Bid => write!(f, "buy"),
            Direction::Ask => write!(f, "sell"),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" | "bid" => Ok(Direction::Bid),
            "sell" | "ask" => Ok(Direction::Ask),
            _ => Err(Error::invalid_value("direction", s)),
        }
    }
}

/// 해외 주문 가능 시장
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Market {
    Us,
    Japan,
    Shanghai,
    HongKong,
    Shenzhen,
    Vietnam,
}

impl Market {
    pub const ALL: [Market; 6] = [
        Market::Us,
        Market::Japan,
        Market::Shanghai,
        Market::HongKong,
        Market::Shenzhen,
        Market::Vietnam,
    ];

    /// 시장에 속한 거래소 코드. 베트남은 지원 거래소 코드가 없음
    pub fn exchanges(&self) -> &'static [ExchangeCode] {
        match self {
            Market::Us => &[ExchangeCode::Nasdaq, ExchangeCode::Nyse, ExchangeCode::Amex],
            Market::Japan => &[ExchangeCode::Tokyo],
            Market::Shanghai => &[ExchangeCode::Shanghai],
            Market::HongKong => &[ExchangeCode::HongKong],
            Market::Shenzhen => &[ExchangeCode::Shenzhen],
            Market::Vietnam => &[],
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Market::Us => "us",
            Market::Japan => "jp",
            Market::Shanghai => "sh",
            Market::HongKong => "hk",
            Market::Shenzhen => "sz",
            Market::Vietnam => "vn",
        };
        f.write_str(name)
    }
}

impl FromStr for Market {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Market::Us),
            "jp" | "japan" => Ok(Market::Japan),
            "sh" | "shanghai" => Ok(Market::Shanghai),
            "hk" | "hongkong" => Ok(Market::HongKong),
            "sz" | "shenzhen" => Ok(Market::Shenzhen),
            "vn" | "vietnam" => Ok(Market::Vietnam),
            _ => Err(Error::invalid_value("market", s)),
        }
    }
}

/// 해외거래소코드(OVRS_EXCG_CD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ExchangeCode {
    /// 나스닥
    Nasdaq,
    /// 뉴욕
    Nyse,
    /// 아멕스
    Amex,
    /// 홍콩
    HongKong,
    /// 심천
    Shenzhen,
    /// 상해
    Shanghai,
    /// 도쿄
    Tokyo,
}

impl ExchangeCode {
    pub const ALL: [ExchangeCode; 7] = [
        ExchangeCode::Nasdaq,
        ExchangeCode::Nyse,
        ExchangeCode::Amex,
        ExchangeCode::HongKong,
        ExchangeCode::Shenzhen,
        ExchangeCode::Shanghai,
        ExchangeCode::Tokyo,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ExchangeCode::Nasdaq => "NASD",
            ExchangeCode::Nyse => "NYSE",
            ExchangeCode::Amex => "AMEX",
            ExchangeCode::HongKong => "SEHK",
            ExchangeCode::Shenzhen => "SZAA",
            ExchangeCode::Shanghai => "SHAA",
            ExchangeCode::Tokyo => "TKSE",
        }
    }

    pub fn market(&self) -> Market {
        match self {
            ExchangeCode::Nasdaq | ExchangeCode::Nyse | ExchangeCode::Amex => Market::Us,
            ExchangeCode::HongKong => Market::HongKong,
            ExchangeCode::Shenzhen => Market::Shenzhen,
            ExchangeCode::Shanghai => Market::Shanghai,
            ExchangeCode::Tokyo => Market::Japan,
        }
    }
}

impl From<ExchangeCode> for String {
    fn from(value: ExchangeCode) -> Self {
        value.code().to_string()
    }
}

impl TryFrom<String> for ExchangeCode {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for ExchangeCode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExchangeCode::ALL
            .into_iter()
            .find(|exchange| exchange.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_value("OVRS_EXCG_CD", s))
    }
}

impl fmt::Display for ExchangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 거래ID(tr_id). 시장 x 매매구분 x 실전/모의 조합마다 하나씩
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TrId {
    /// 미국 매수 주문
    RealUsBid,
    /// 미국 매도 주문
    RealUsAsk,
    /// 일본 매수 주문
    RealJapanBid,
    /// 일본 매도 주문
    RealJapanAsk,
    /// 상해 매수 주문
    RealShanghaiBid,
    /// 상해 매도 주문
    RealShanghaiAsk,
    /// 홍콩 매수 주문
    RealHongKongBid,
    /// 홍콩 매도 주문
    RealHongKongAsk,
    /// 심천 매수 주문
    RealShenzhenBid,
    /// 심천 매도 주문
    RealShenzhenAsk,
    /// 베트남 매수 주문
    RealVietnamBid,
    /// 베트남 매도 주문
    RealVietnamAsk,
    VirtualUsBid,
    VirtualUsAsk,
    VirtualJapanBid,
    VirtualJapanAsk,
    VirtualShanghaiBid,
    VirtualShanghaiAsk,
    VirtualHongKongBid,
    VirtualHongKongAsk,
    VirtualShenzhenBid,
    VirtualShenzhenAsk,
    VirtualVietnamBid,
    VirtualVietnamAsk,
}

impl TrId {
    pub const ALL: [TrId; 24] = [
        TrId::RealUsBid,
        TrId::RealUsAsk,
        TrId::RealJapanBid,
        TrId::RealJapanAsk,
        TrId::RealShanghaiBid,
        TrId::RealShanghaiAsk,
        TrId::RealHongKongBid,
        TrId::RealHongKongAsk,
        TrId::RealShenzhenBid,
        TrId::RealShenzhenAsk,
        TrId::RealVietnamBid,
        TrId::RealVietnamAsk,
        TrId::VirtualUsBid,
        TrId::VirtualUsAsk,
        TrId::VirtualJapanBid,
        TrId::VirtualJapanAsk,
        TrId::VirtualShanghaiBid,
        TrId::VirtualShanghaiAsk,
        TrId::VirtualHongKongBid,
        TrId::VirtualHongKongAsk,
        TrId::VirtualShenzhenBid,
        TrId::VirtualShenzhenAsk,
        TrId::VirtualVietnamBid,
        TrId::VirtualVietnamAsk,
    ];

    /// 브로커가 부여한 코드. 모의투자 코드도 각각 명시적으로 나열함
    pub fn code(&self) -> &'static str {
        match self {
            TrId::RealUsBid => "TTTT1002U",
            TrId::RealUsAsk => "TTTT1006U",
            TrId::RealJapanBid => "TTTS0308U",
            TrId::RealJapanAsk => "TTTS0307U",
            TrId::RealShanghaiBid => "TTTS0202U",
            TrId::RealShanghaiAsk => "TTTS1005U",
            TrId::RealHongKongBid => "TTTS1002U",
            TrId::RealHongKongAsk => "TTTS1001U",
            TrId::RealShenzhenBid => "TTTS0305U",
            TrId::RealShenzhenAsk => "TTTS0304U",
            TrId::RealVietnamBid => "TTTS0311U",
            TrId::RealVietnamAsk => "TTTS0310U",
            TrId::VirtualUsBid => "VTTT1002U",
            TrId::VirtualUsAsk => "VTTT1001U",
            TrId::VirtualJapanBid => "VTTS0308U",
            TrId::VirtualJapanAsk => "VTTS0307U",
            TrId::VirtualShanghaiBid => "VTTS0202U",
            TrId::VirtualShanghaiAsk => "VTTS1005U",
            TrId::VirtualHongKongBid => "VTTS1002U",
            TrId::VirtualHongKongAsk => "VTTS1001U",
            TrId::VirtualShenzhenBid => "VTTS0305U",
            TrId::VirtualShenzhenAsk => "VTTS0304U",
            TrId::VirtualVietnamBid => "VTTS0311U",
            TrId::VirtualVietnamAsk => "VTTS0310U",
        }
    }

    fn parts(&self) -> (Environment, Market, Direction) {
        use Direction::{Ask, Bid};
        use Environment::{Real, Virtual};
        match self {
            TrId::RealUsBid => (Real, Market::Us, Bid),
            TrId::RealUsAsk => (Real, Market::Us, Ask),
            TrId::RealJapanBid => (Real, Market::Japan, Bid),
            TrId::RealJapanAsk => (Real, Market::Japan, Ask),
            TrId::RealShanghaiBid => (Real, Market::Shanghai, Bid),
            TrId::RealShanghaiAsk => (Real, Market::Shanghai, Ask),
            TrId::RealHongKongBid => (Real, Market::HongKong, Bid),
            TrId::RealHongKongAsk => (Real, Market::HongKong, Ask),
            TrId::RealShenzhenBid => (Real, Market::Shenzhen, Bid),
            TrId::RealShenzhenAsk => (Real, Market::Shenzhen, Ask),
            TrId::RealVietnamBid => (Real, Market::Vietnam, Bid),
            TrId::RealVietnamAsk => (Real, Market::Vietnam, Ask),
            TrId::VirtualUsBid => (Virtual, Market::Us, Bid),
            TrId::VirtualUsAsk => (Virtual, Market::Us, Ask),
            TrId::VirtualJapanBid => (Virtual, Market::Japan, Bid),
            TrId::VirtualJapanAsk => (Virtual, Market::Japan, Ask),
            TrId::VirtualShanghaiBid => (Virtual, Market::Shanghai, Bid),
            TrId::VirtualShanghaiAsk => (Virtual, Market::Shanghai, Ask),
            TrId::VirtualHongKongBid => (Virtual, Market::HongKong, Bid),
            TrId::VirtualHongKongAsk => (Virtual, Market::HongKong, Ask),
            TrId::VirtualShenzhenBid => (Virtual, Market::Shenzhen, Bid),
            TrId::VirtualShenzhenAsk => (Virtual, Market::Shenzhen, Ask),
            TrId::VirtualVietnamBid => (Virtual, Market::Vietnam, Bid),
            TrId::VirtualVietnamAsk => (Virtual, Market::Vietnam, Ask),
        }
    }

    pub fn resolve(environment: Environment, market: Market, direction: Direction) -> Self {
        use Direction::{Ask, Bid};
        use Environment::{Real, Virtual};
        match (environment, market, direction) {
            (Real, Market::Us, Bid) => TrId::RealUsBid,
            (Real, Market::Us, Ask) => TrId::RealUsAsk,
            (Real, Market::Japan, Bid) => TrId::RealJapanBid,
            (Real, Market::Japan, Ask) => TrId::RealJapanAsk,
            (Real, Market::Shanghai, Bid) => TrId::RealShanghaiBid,
            (Real, Market::Shanghai, Ask) => TrId::RealShanghaiAsk,
            (Real, Market::HongKong, Bid) => TrId::RealHongKongBid,
            (Real, Market::HongKong, Ask) => TrId::RealHongKongAsk,
            (Real, Market::Shenzhen, Bid) => TrId::RealShenzhenBid,
            (Real, Market::Shenzhen, Ask) => TrId::RealShenzhenAsk,
            (Real, Market::Vietnam, Bid) => TrId::RealVietnamBid,
            (Real, Market::Vietnam, Ask) => TrId::RealVietnamAsk,
            (Virtual, Market::Us, Bid) => TrId::VirtualUsBid,
            (Virtual, Market::Us, Ask) => TrId::VirtualUsAsk,
            (Virtual, Market::Japan, Bid) => TrId::VirtualJapanBid,
            (Virtual, Market::Japan, Ask) => TrId::VirtualJapanAsk,
            (Virtual, Market::Shanghai, Bid) => TrId::VirtualShanghaiBid,
            (Virtual, Market::Shanghai, Ask) => TrId::VirtualShanghaiAsk,
            (Virtual, Market::HongKong, Bid) => TrId::VirtualHongKongBid,
            (Virtual, Market::HongKong, Ask) => TrId::VirtualHongKongAsk,
            (Virtual, Market::Shenzhen, Bid) => TrId::VirtualShenzhenBid,
            (Virtual, Market::Shenzhen, Ask) => TrId::VirtualShenzhenAsk,
            (Virtual, Market::Vietnam, Bid) => TrId::VirtualVietnamBid,
            (Virtual, Market::Vietnam, Ask) => TrId::VirtualVietnamAsk,
        }
    }

    pub fn environment(&self) -> Environment {
        self.parts().0
    }

    pub fn market(&self) -> Market {
        self.parts().1
    }

    pub fn direction(&self) -> Direction {
        self.parts().2
    }
}

impl From<TrId> for String {
    fn from(value: TrId) -> Self {
        value.code().to_string()
    }
}

impl TryFrom<String> for TrId {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        TrId::ALL
            .into_iter()
            .find(|tr_id| tr_id.code() == value)
            .ok_or_else(|| Error::invalid_value("tr_id", value))
    }
}

impl fmt::Display for TrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 매수 주문구분. 31(장개시시장가), 33(장마감시장가)는 매수에 없음
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuyOrderDivision {
    /// 00 지정가
    Limit,
    /// 32 장개시지정가
    LimitOnOpen,
    /// 34 장마감지정가
    LimitOnClose,
}

impl BuyOrderDivision {
    pub fn code(&self) -> &'static str {
        match self {
            BuyOrderDivision::Limit => "00",
            BuyOrderDivision::LimitOnOpen => "32",
            BuyOrderDivision::LimitOnClose => "34",
        }
    }
}

impl FromStr for BuyOrderDivision {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "00" => Ok(BuyOrderDivision::Limit),
            "32" => Ok(BuyOrderDivision::LimitOnOpen),
            "34" => Ok(BuyOrderDivision::LimitOnClose),
            "31" | "33" => Err(Error::InvalidCombination(format!(
                "order division {} is sell-only",
                s
            ))),
            _ => Err(Error::invalid_value("ORD_DVSN", s)),
        }
    }
}

/// 매도 주문구분
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SellOrderDivision {
    /// 00 지정가
    Limit,
    /// 31 장개시시장가
    MarketOnOpen,
    /// 32 장개시지정가
    LimitOnOpen,
    /// 33 장마감시장가
    MarketOnClose,
    /// 34 장마감지정가
    LimitOnClose,
}

impl SellOrderDivision {
    pub fn code(&self) -> &'static str {
        match self {
            SellOrderDivision::Limit => "00",
            SellOrderDivision::MarketOnOpen => "31",
            SellOrderDivision::LimitOnOpen => "32",
            SellOrderDivision::MarketOnClose => "33",
            SellOrderDivision::LimitOnClose => "34",
        }
    }
}

impl FromStr for SellOrderDivision {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "00" => Ok(SellOrderDivision::Limit),
            "31" => Ok(SellOrderDivision::MarketOnOpen),
            "32" => Ok(SellOrderDivision::LimitOnOpen),
            "33" => Ok(SellOrderDivision::MarketOnClose),
            "34" => Ok(SellOrderDivision::LimitOnClose),
            _ => Err(Error::invalid_value("ORD_DVSN", s)),
        }
    }
}

/// 주문구분(ORD_DVSN). 같은 코드라도 매수/매도에 따라 의미가 달라서 매매구분을 함께 가짐
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderDivision {
    Buy(BuyOrderDivision),
    Sell(SellOrderDivision),
}

impl OrderDivision {
    pub fn parse(direction: Direction, code: &str) -> Result<Self, Error> {
        Ok(match direction {
            Direction::Bid => OrderDivision::Buy(code.parse()?),
            Direction::Ask => OrderDivision::Sell(code.parse()?),
        })
    }

    pub fn direction(&self) -> Direction {
        match self {
            OrderDivision::Buy(_) => Direction::Bid,
            OrderDivision::Sell(_) => Direction::Ask,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            OrderDivision::Buy(division) => division.code(),
            OrderDivision::Sell(division) => division.code(),
        }
    }

    /// 00 지정가 여부. 모의투자와 미국 외 시장은 지정가만 가능
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            OrderDivision::Buy(BuyOrderDivision::Limit)
                | OrderDivision::Sell(SellOrderDivision::Limit)
        )
    }
}

impl From<OrderDivision> for String {
    fn from(value: OrderDivision) -> Self {
        value.code().to_string()
    }
}

/// 고객타입(custtype)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CustomerType {
    /// B: 법인
    Business,
    /// P: 개인
    #[default]
    Personal,
}

impl From<CustomerType> for String {
    fn from(value: CustomerType) -> Self {
        match value {
            CustomerType::Business => "B",
            CustomerType::Personal => "P",
        }
        .to_string()
    }
}

impl TryFrom<String> for CustomerType {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "B" => Ok(CustomerType::Business),
            "P" => Ok(CustomerType::Personal),
            _ => Err(Error::invalid_value("custtype", value)),
        }
    }
}

/// 주문수량. 숫자 문자열 그대로 유지함
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Quantity(String);

impl Quantity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = Error;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl TryFrom<String> for Quantity {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let valid = !value.is_empty()
            && value.bytes().all(|b| b.is_ascii_digit())
            && value.bytes().any(|b| b != b'0');
        if valid {
            Ok(Self(value))
        } else {
            Err(Error::invalid_value("ORD_QTY", value))
        }
    }
}

impl TryFrom<&str> for Quantity {
    type Error = Error;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<Quantity> for String {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

/// 1주당 주문단가. 소수점 표기를 그대로 보존함 (예: "150.25")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Price(String);

impl Price {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 시장가 주문용 "0"
    pub fn zero() -> Self {
        Self("0".to_string())
    }
}

impl TryFrom<String> for Price {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        let valid = match value.split_once('.') {
            Some((int, frac)) => digits(int) && digits(frac),
            None => digits(&value),
        };
        if valid {
            Ok(Self(value))
        } else {
            Err(Error::invalid_value("OVRS_ORD_UNPR", value))
        }
    }
}

impl TryFrom<&str> for Price {
    type Error = Error;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tr_id_literals() {
        use Direction::{Ask, Bid};
        use Environment::{Real, Virtual};
        let expected = [
            (Real, Market::Us, Bid, "TTTT1002U"),
            (Real, Market::Us, Ask, "TTTT1006U"),
            (Real, Market::Japan, Bid, "TTTS0308U"),
            (Real, Market::Japan, Ask, "TTTS0307U"),
            (Real, Market::Shanghai, Bid, "TTTS0202U"),
            (Real, Market::Shanghai, Ask, "TTTS1005U"),
            (Real, Market::HongKong, Bid, "TTTS1002U"),
            (Real, Market::HongKong, Ask, "TTTS1001U"),
            (Real, Market::Shenzhen, Bid, "TTTS0305U"),
            (Real, Market::Shenzhen, Ask, "TTTS0304U"),
            (Real, Market::Vietnam, Bid, "TTTS0311U"),
            (Real, Market::Vietnam, Ask, "TTTS0310U"),
            (Virtual, Market::Us, Bid, "VTTT1002U"),
            (Virtual, Market::Us, Ask, "VTTT1001U"),
            (Virtual, Market::Japan, Bid, "VTTS0308U"),
            (Virtual, Market::Japan, Ask, "VTTS0307U"),
            (Virtual, Market::Shanghai, Bid, "VTTS0202U"),
            (Virtual, Market::Shanghai, Ask, "VTTS1005U"),
            (Virtual, Market::HongKong, Bid, "VTTS1002U"),
            (Virtual, Market::HongKong, Ask, "VTTS1001U"),
            (Virtual, Market::Shenzhen, Bid, "VTTS0305U"),
            (Virtual, Market::Shenzhen, Ask, "VTTS0304U"),
            (Virtual, Market::Vietnam, Bid, "VTTS0311U"),
            (Virtual, Market::Vietnam, Ask, "VTTS0310U"),
        ];
        for (environment, market, direction, code) in expected {
            let tr_id = TrId::resolve(environment, market, direction);
            assert_eq!(tr_id.code(), code);
            assert_eq!(tr_id.environment(), environment);
            assert_eq!(tr_id.market(), market);
            assert_eq!(tr_id.direction(), direction);
        }
    }

    #[test]
    fn test_tr_id_codes_are_unique() {
        let mut codes: Vec<&str> = TrId::ALL.iter().map(|t| t.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), TrId::ALL.len());
    }

    #[test]
    fn test_tr_id_from_unknown_code() {
        assert!(TrId::try_from("TTTC0802U".to_string()).is_err());
        assert_eq!(
            TrId::try_from("VTTS1001U".to_string()).unwrap(),
            TrId::VirtualHongKongAsk
        );
    }

    #[test]
    fn test_exchange_codes() {
        let codes: Vec<&str> = ExchangeCode::ALL.iter().map(|e| e.code()).collect();
        assert_eq!(codes, ["NASD", "NYSE", "AMEX", "SEHK", "SZAA", "SHAA", "TKSE"]);
        for exchange in ExchangeCode::ALL {
            assert!(exchange.market().exchanges().contains(&exchange));
            assert_eq!(exchange.code().parse::<ExchangeCode>().unwrap(), exchange);
        }
        assert!(Market::Vietnam.exchanges().is_empty());
        assert!("HASE".parse::<ExchangeCode>().is_err());
    }

    #[test]
    fn test_order_division_codes_depend_on_side() {
        let buy = OrderDivision::parse(Direction::Bid, "32").unwrap();
        let sell = OrderDivision::parse(Direction::Ask, "32").unwrap();
        assert_eq!(buy.code(), sell.code());
        assert_ne!(buy, sell);
        assert_eq!(buy.direction(), Direction::Bid);
        assert_eq!(sell.direction(), Direction::Ask);

        assert!(matches!(
            OrderDivision::parse(Direction::Bid, "31"),
            Err(Error::InvalidCombination(_))
        ));
        assert!(matches!(
            OrderDivision::parse(Direction::Bid, "33"),
            Err(Error::InvalidCombination(_))
        ));
        assert_eq!(
            OrderDivision::parse(Direction::Ask, "33").unwrap(),
            OrderDivision::Sell(SellOrderDivision::MarketOnClose)
        );
        assert!(OrderDivision::parse(Direction::Ask, "01").is_err());
    }

    #[test]
    fn test_account_parse() {
        let account = Account::parse("12345678-01").unwrap();
        assert_eq!(account.cano, "12345678");
        assert_eq!(account.acnt_prdt_cd, "01");
        assert_eq!(Account::parse("1234567801").unwrap(), account);
        assert!(Account::parse("1234567-01").is_err());
        assert!(Account::parse("12345678-1a").is_err());
    }

    #[test]
    fn test_quantity_and_price_stay_strings() {
        assert_eq!(Quantity::try_from("10").unwrap().as_str(), "10");
        assert!(Quantity::try_from("0").is_err());
        assert!(Quantity::try_from("1.5").is_err());
        assert!(Quantity::try_from("").is_err());
        assert_eq!(Quantity::try_from(7u32).unwrap().as_str(), "7");
        assert!(Quantity::try_from(0u32).is_err());

        assert_eq!(Price::try_from("150.2500").unwrap().as_str(), "150.2500");
        assert_eq!(Price::try_from("0").unwrap(), Price::zero());
        assert!(Price::try_from("1.").is_err());
        assert!(Price::try_from("-3").is_err());
        assert!(Price::try_from("1e3").is_err());
    }

    #[test]
    fn test_customer_type_codes() {
        assert_eq!(String::from(CustomerType::Personal), "P");
        assert_eq!(
            CustomerType::try_from("B".to_string()).unwrap(),
            CustomerType::Business
        );
        assert!(CustomerType::try_from("X".to_string()).is_err());
    }
}
