use crate::types::{Account, CustomerType, Environment};
use crate::Error;
use getset::{Getters, Setters};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default, Getters, Setters)]
pub struct Config {
    #[getset(get = "pub")]
    cano: String,
    #[getset(get = "pub")]
    acnt_prdt_cd: String,
    #[getset(get = "pub")]
    app_key: String,
    #[getset(get = "pub")]
    app_secret: String,
    #[getset(get = "pub", set = "pub")]
    token: Option<String>,
    #[getset(get = "pub")]
    environment: Environment,
    #[getset(get = "pub")]
    #[serde(default)]
    customer_type: Option<CustomerType>,
}

impl Config {
    /// Returns token as Option<String>, treating empty string as None
    pub fn token_as_option(&self) -> Option<String> {
        match &self.token {
            Some(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    pub fn account(&self) -> Result<Account, Error> {
        Account::new(&self.cano, &self.acnt_prdt_cd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_toml() {
        let config: Config = toml::from_str(
            r#"
            cano = "12345678"
            acnt_prdt_cd = "01"
            app_key = "key"
            app_secret = "secret"
            token = ""
            environment = "Virtual"
            customer_type = "P"
            "#,
        )
        .unwrap();
        assert_eq!(config.environment(), &Environment::Virtual);
        assert_eq!(config.token_as_option(), None);
        assert_eq!(config.customer_type(), &Some(CustomerType::Personal));
        assert_eq!(config.account().unwrap().cano, "12345678");
    }

    #[test]
    fn test_config_bad_account() {
        let config: Config = toml::from_str(
            r#"
            cano = "1234"
            acnt_prdt_cd = "01"
            app_key = "key"
            app_secret = "secret"
            environment = "Real"
            "#,
        )
        .unwrap();
        assert!(config.account().is_err());
        assert_eq!(config.customer_type(), &None);
    }
}
