use secrecy::SecretString;

use crate::LangSmithError;

pub const DEFAULT_API_URL: &str = "https://api.smith.langchain.com";
pub const API_KEY_VAR: &str = "LANGSMITH_API_KEY";

#[derive(Clone, Debug)]
pub struct LangSmithConfig {
    pub api_key: SecretString,
    pub api_url: String,
}

impl LangSmithConfig {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Reads the API key from `LANGSMITH_API_KEY`. An unset or empty variable is an error.
    pub fn from_env() -> Result<Self, LangSmithError> {
        match std::env::var(API_KEY_VAR) {
            Ok(value) if !value.trim().is_empty() => Ok(Self::new(SecretString::new(value))),
            _ => Err(LangSmithError::MissingApiKey { var: API_KEY_VAR }),
        }
    }
}
