use crate::types::{request, response, Environment};
use crate::Error;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

/// Auth
/// [OAuth 인증 관련](https://apiportal.koreainvestment.com/apiservice/oauth2#L_214b9e22-8f2e-4fba-9688-587279f1061a)
#[derive(Clone)]
pub struct Auth {
    client: reqwest::Client,
    endpoint_url: String,
    appkey: String,
    appsecret: String,
    token: Option<String>,
    token_issued_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Auth {
    /// token은 None으로 시작. create_token 또는 set_token을 호출해야 저장됨
    pub fn new(
        client: &reqwest::Client,
        environment: Environment,
        appkey: &str,
        appsecret: &str,
    ) -> Self {
        Self {
            client: client.clone(),
            endpoint_url: environment.endpoint_url().to_string(),
            appkey: appkey.to_string(),
            appsecret: appsecret.to_string(),
            token: None,
            token_issued_at: None,
        }
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.clone()
    }

    pub fn get_appkey(&self) -> String {
        self.appkey.clone()
    }

    pub fn get_appsecret(&self) -> String {
        self.appsecret.clone()
    }

    pub fn get_token_issued_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.token_issued_at
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Hashkey
    /// [Docs](https://apiportal.koreainvestment.com/apiservice/oauth2#L_214b9e22-8f2e-4fba-9688-587279f1061a)
    /// POST 본문의 hash값을 얻어와서 반환
    pub async fn get_hash(&self, json: String) -> Result<String, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        headers.insert("appkey", HeaderValue::from_str(&self.appkey)?);
        headers.insert("appsecret", HeaderValue::from_str(&self.appsecret)?);
        let hash = self
            .client
            .post(format!("{}/uapi/hashkey", self.endpoint_url))
            .headers(headers)
            .body(json)
            .send()
            .await?
            .json::<response::auth::Body::HashKey>()
            .await?
            .get_hash();
        Ok(hash)
    }

    /// 접근토큰발급(P)[인증-001]
    /// [Docs](https://apiportal.koreainvestment.com/apiservice/oauth2#L_fa778c98-f68d-451e-8fff-b1c6bfe5cd30)
    /// token값을 얻어와서 반환함과 동시에 구조체의 token을 업데이트
    pub async fn create_token(&mut self) -> Result<String, Error> {
        let request_body = serde_json::to_string(&request::auth::TokenCreationBody::new(
            self.appkey.clone(),
            self.appsecret.clone(),
        ))?;
        let response_text = self
            .client
            .post(format!("{}/oauth2/tokenP", self.endpoint_url))
            .header("Content-Type", "application/json")
            .body(request_body)
            .send()
            .await?
            .text()
            .await?;

        // 오류 응답은 error_code/error_description 형태로 옴
        if let Ok(error_response) =
            serde_json::from_str::<response::auth::Body::ApiError>(&response_text)
        {
            return Err(Error::AuthInitFailed(format!(
                "{} - {}",
                error_response.error_code, error_response.error_description
            )));
        }

        let token_response: response::auth::Body::TokenCreation =
            serde_json::from_str(&response_text)?;
        debug!(
            expires = %token_response.get_access_token_token_expired(),
            "access token issued"
        );
        let token = token_response.get_access_token();
        self.token = Some(token.clone());
        self.token_issued_at = Some(chrono::Utc::now());
        Ok(token)
    }
}
