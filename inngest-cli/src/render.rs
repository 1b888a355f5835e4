//! Terminal formatting for Inngest responses.

use serde_json::Value;

use crate::Listing;

const MISSING: &str = "N/A";

pub fn render_events(response: &Value) -> String {
    render_listing(response, "events", "No events found", |event| {
        format!(
            "{} - {} - {}",
            field(event, "internal_id"),
            field(event, "name"),
            field(event, "ts")
        )
    })
}

pub fn render_runs(response: &Value) -> String {
    render_listing(response, "runs", "No runs found", |run| {
        format!("{} - {}", field(run, "run_id"), field(run, "status"))
    })
}

/// Detail views print the whole document.
pub fn render_detail(response: &Value) -> String {
    serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string())
}

fn render_listing<F>(response: &Value, key: &str, empty: &str, line: F) -> String
where
    F: Fn(&Value) -> String,
{
    let items = Listing::classify(response, key).items();
    if items.is_empty() {
        return empty.to_string();
    }
    items
        .iter()
        .map(|item| if item.is_object() { line(item) } else { scalar(item) })
        .collect::<Vec<_>>()
        .join("\n")
}

fn field(item: &Value, name: &str) -> String {
    match item.get(name) {
        Some(value) => scalar(value),
        None => MISSING.to_string(),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
