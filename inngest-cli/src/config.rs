use secrecy::SecretString;

use crate::InngestError;

pub const DEFAULT_API_URL: &str = "http://localhost:8288";
pub const SIGNING_KEY_VAR: &str = "INNGEST_SIGNING_KEY";

/// Connection settings, built once at startup.
#[derive(Clone, Debug)]
pub struct InngestConfig {
    pub signing_key: SecretString,
    pub api_url: String,
}

impl InngestConfig {
    pub fn new(signing_key: SecretString, api_url: impl Into<String>) -> Self {
        Self {
            signing_key,
            api_url: api_url.into(),
        }
    }

    pub fn from_env(api_url: impl Into<String>) -> Result<Self, InngestError> {
        match std::env::var(SIGNING_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(SecretString::new(key), api_url)),
            _ => Err(InngestError::MissingApiKey {
                var: SIGNING_KEY_VAR,
            }),
        }
    }
}
