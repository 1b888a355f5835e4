use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;

use crate::{InngestConfig, InngestError};

/// Query for `GET /v1/events`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EventFilter {
    pub received_after: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug)]
pub struct InngestClient {
    http: Client,
    config: InngestConfig,
}

impl InngestClient {
    pub fn new(config: InngestConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub async fn list_events(&self, filter: &EventFilter) -> Result<Value, InngestError> {
        self.get("/v1/events", Some(filter)).await
    }

    pub async fn get_event(&self, internal_id: &str) -> Result<Value, InngestError> {
        self.get(&format!("/v1/events/{internal_id}"), None::<&()>)
            .await
    }

    /// Function runs triggered by one event.
    pub async fn list_event_runs(&self, event_id: &str) -> Result<Value, InngestError> {
        self.get(&format!("/v1/events/{event_id}/runs"), None::<&()>)
            .await
    }

    pub async fn get_run(&self, run_id: &str) -> Result<Value, InngestError> {
        self.get(&format!("/v1/runs/{run_id}"), None::<&()>).await
    }

    async fn get<Q: Serialize>(&self, path: &str, query: Option<&Q>) -> Result<Value, InngestError> {
        let url = format!("{}{}", self.config.api_url.trim_end_matches('/'), path);
        tracing::debug!(%url, "querying inngest");

        let mut request = self
            .http
            .get(&url)
            .bearer_auth(self.config.signing_key.expose_secret());
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(InngestError::Http {
                status,
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        decode_body(&body).map_err(|err| InngestError::Malformed {
            url,
            reason: err.to_string(),
        })
    }
}

/// Decodes a response body. The API sometimes wraps its JSON in a JSON
/// string, so a string result is decoded a second time.
fn decode_body(body: &str) -> Result<Value, serde_json::Error> {
    match serde_json::from_str(body)? {
        Value::String(inner) => serde_json::from_str(&inner),
        value => Ok(value),
    }
}
