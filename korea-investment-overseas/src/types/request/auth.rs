use serde::{Deserialize, Serialize};

/// 접근토큰발급(P) 요청 본문
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenCreationBody {
    grant_type: String,
    appkey: String,
    appsecret: String,
}

impl TokenCreationBody {
    pub fn new(appkey: String, appsecret: String) -> Self {
        Self {
            grant_type: "client_credentials".to_string(),
            appkey,
            appsecret,
        }
    }
}
