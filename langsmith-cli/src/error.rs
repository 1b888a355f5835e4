use reqwest::StatusCode;
use thiserror::Error;

/// Display text is what `main` prints to stderr, prefix included.
#[derive(Debug, Error)]
pub enum LangSmithError {
    #[error("Error: {var} environment variable not set")]
    MissingApiKey { var: &'static str },
    #[error("invalid time window '{0}': expected {{int}}m, e.g. 15m")]
    InvalidWindow(String),
    #[error("URL Error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{}", http_report(.status, .body, .payload.as_deref()))]
    Http {
        status: StatusCode,
        body: String,
        payload: Option<String>,
    },
    #[error("Error: malformed response: {0}")]
    Malformed(String),
    #[error("No runs with thread_id found in last {minutes} minutes")]
    NoThreadFound { minutes: i64 },
}

fn http_report(status: &StatusCode, body: &str, payload: Option<&str>) -> String {
    let mut report = format!(
        "HTTP Error {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
    if !body.is_empty() {
        report.push_str("\nResponse: ");
        report.push_str(body);
    }
    if let Some(payload) = payload {
        report.push_str("\nRequest payload: ");
        report.push_str(payload);
    }
    report
}
