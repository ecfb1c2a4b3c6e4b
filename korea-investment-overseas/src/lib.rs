pub mod auth;
pub mod stock;
pub mod types;

use thiserror::Error;
use types::{Account, Environment};

#[derive(Debug, Error)]
pub enum Error {
    /// rt_cd가 "0"이 아닌 응답. 브로커의 메시지를 그대로 전달
    #[error("Broker rejected the request: [{msg_cd}] {msg1}")]
    BrokerRejected { msg_cd: String, msg1: String },
    /// 시장/매매구분/모의투자 조합에 해당하는 tr_id 또는 주문구분 코드가 없음
    #[error("Invalid order combination: {0}")]
    InvalidCombination(String),
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
    #[error("Response succeeded without an output record")]
    MissingOutput,
    #[error("Auth init failed - {0} is None")]
    AuthInitFailed(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
    #[error(transparent)]
    ChronoParse(#[from] chrono::ParseError),
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    pub(crate) fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

/// 해외주식 주문 API 진입점
pub struct OverseasOrderApi {
    pub auth: auth::Auth,
    pub order: stock::order::Oversea,
}

impl OverseasOrderApi {
    /// token이 None이면 접근토큰을 새로 발급받음
    pub async fn new(
        environment: Environment,
        appkey: &str,
        appsecret: &str,
        account: Account,
        token: Option<String>,
    ) -> Result<Self, Error> {
        let client = reqwest::Client::new();
        let mut auth = auth::Auth::new(&client, environment, appkey, appsecret);
        match token {
            Some(token) => auth.set_token(token),
            None => {
                auth.create_token().await?;
            }
        }
        tracing::debug!(?environment, cano = %account.cano, "overseas order api ready");
        let order = stock::order::Oversea::new(&client, environment, auth.clone(), account)?;
        Ok(Self { auth, order })
    }
}
