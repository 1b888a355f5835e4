use std::fmt::Display;

use serde_json::Value;

/// Runs `attempt` against `original`, keeping `original` when it fails.
pub fn or_passthrough<T, E, F>(original: T, attempt: F) -> T
where
    E: Display,
    F: FnOnce(&T) -> Result<T, E>,
{
    match attempt(&original) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!(error = %err, "leaving field unparsed");
            original
        }
    }
}

/// Decodes a string holding serialized JSON. Anything else passes through.
pub fn reparse_json(value: Value) -> Value {
    or_passthrough(value, |value| match value {
        Value::String(text) => serde_json::from_str(text).map_err(|err| err.to_string()),
        other => Err(format!("expected a JSON string, found {}", kind(other))),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
