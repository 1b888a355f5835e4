use chrono::Utc;
use reqwest::{Client, Method};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::Value;

use crate::{reshape_thread, LangSmithConfig, LangSmithError, RunQuery, TimeWindow};

/// Look-back windows tried in order by [`LangSmithClient::last_thread`].
pub const LAST_THREAD_WINDOWS: [i64; 4] = [5, 15, 30, 60];

#[derive(Clone)]
pub struct LangSmithClient {
    client: Client,
    config: LangSmithConfig,
}

impl LangSmithClient {
    pub fn new(config: LangSmithConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn sessions(&self) -> Result<Value, LangSmithError> {
        self.get("/api/v1/sessions", &[]).await
    }

    pub async fn session(&self, session_id: &str) -> Result<Value, LangSmithError> {
        self.get(&format!("/api/v1/sessions/{session_id}"), &[]).await
    }

    /// Fetches a thread and expands its message previews.
    pub async fn thread(&self, thread_id: &str, session_id: &str) -> Result<Value, LangSmithError> {
        let thread = self
            .get(
                &format!("/api/v1/runs/threads/{thread_id}"),
                &[("session_id", session_id)],
            )
            .await?;
        Ok(reshape_thread(thread))
    }

    pub async fn query_runs(&self, query: &RunQuery) -> Result<Value, LangSmithError> {
        self.post("/api/v1/runs/query", query).await
    }

    pub async fn runs(&self, session_id: &str, window: TimeWindow) -> Result<Value, LangSmithError> {
        self.query_runs(&RunQuery::recent(session_id, window, Utc::now()))
            .await
    }

    /// Widens the look-back window until a run carrying a thread id shows up,
    /// then returns that thread. The first such run in API order wins.
    pub async fn last_thread(&self, session_id: &str) -> Result<Value, LangSmithError> {
        for minutes in LAST_THREAD_WINDOWS {
            let runs = self.runs(session_id, TimeWindow::minutes(minutes)).await?;
            if let Some(thread_id) = first_thread_id(&runs) {
                tracing::debug!(minutes, %thread_id, "found run with thread id");
                return self.thread(&thread_id, session_id).await;
            }
            tracing::debug!(minutes, "no run with thread id, widening window");
        }
        Err(LangSmithError::NoThreadFound {
            minutes: LAST_THREAD_WINDOWS[LAST_THREAD_WINDOWS.len() - 1],
        })
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, LangSmithError> {
        self.send(Method::GET, path, query, None::<&()>).await
    }

    async fn post<P: Serialize>(&self, path: &str, payload: &P) -> Result<Value, LangSmithError> {
        self.send(Method::POST, path, &[], Some(payload)).await
    }

    async fn send<P: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        payload: Option<&P>,
    ) -> Result<Value, LangSmithError> {
        let url = format!("{}{}", self.config.api_url.trim_end_matches('/'), path);
        tracing::debug!(%method, %url, "sending langsmith request");

        let mut request = self
            .client
            .request(method, &url)
            .header("x-api-key", self.config.api_key.expose_secret());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LangSmithError::Http {
                status,
                body,
                payload: payload.and_then(|payload| serde_json::to_string(payload).ok()),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| LangSmithError::Malformed(err.to_string()))
    }
}

fn first_thread_id(runs: &Value) -> Option<String> {
    runs.get("runs")?
        .as_array()?
        .iter()
        .filter_map(|run| run.get("thread_id").and_then(Value::as_str))
        .find(|thread_id| !thread_id.is_empty())
        .map(str::to_owned)
}
