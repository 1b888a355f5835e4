//! Reshaping of thread responses.
//!
//! LangSmith returns a thread's transcript in `previews.all_messages` as one
//! string of JSON message objects separated by blank lines. Tool output and
//! tool-call arguments are themselves JSON encoded inside those messages.
//! [`reshape_thread`] expands all of it into plain JSON so it prints readably.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::lenient::{or_passthrough, reparse_json};

const ALL_MESSAGES: &str = "all_messages";
const LEGACY_PREVIEW_KEYS: [&str; 2] = ["first_human_last_ai", "human_ai_pairs"];

#[derive(Debug, Error)]
pub enum MessageParseError {
    #[error("all_messages is not a string")]
    NotAString,
    #[error("message {index} is not valid JSON: {source}")]
    Json {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("message {index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("message {index} has tool_calls that are not a list")]
    ToolCallsNotAList { index: usize },
}

/// Expands `previews.all_messages` into a message list and drops the legacy
/// summary keys. If any message fails to parse the previews are left exactly
/// as received.
pub fn reshape_thread(mut thread: Value) -> Value {
    let Some(previews) = thread.get_mut("previews").and_then(Value::as_object_mut) else {
        return thread;
    };
    if previews.contains_key(ALL_MESSAGES) {
        let original = std::mem::take(previews);
        *previews = or_passthrough(original, reshape_previews);
    }
    thread
}

fn reshape_previews(previews: &Map<String, Value>) -> Result<Map<String, Value>, MessageParseError> {
    let raw = previews
        .get(ALL_MESSAGES)
        .and_then(Value::as_str)
        .ok_or(MessageParseError::NotAString)?;
    let messages = parse_messages(raw)?;

    let mut reshaped = previews.clone();
    reshaped.insert(ALL_MESSAGES.to_string(), Value::Array(messages));
    for key in LEGACY_PREVIEW_KEYS {
        reshaped.shift_remove(key);
    }
    Ok(reshaped)
}

/// Splits a blank-line separated transcript into parsed messages.
pub fn parse_messages(raw: &str) -> Result<Vec<Value>, MessageParseError> {
    raw.split("\n\n")
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .enumerate()
        .map(|(index, fragment)| parse_message(index, fragment))
        .collect()
}

fn parse_message(index: usize, fragment: &str) -> Result<Value, MessageParseError> {
    let mut message: Value = serde_json::from_str(fragment)
        .map_err(|source| MessageParseError::Json { index, source })?;
    let object = message
        .as_object_mut()
        .ok_or(MessageParseError::NotAnObject { index })?;

    let role = object.get("role").and_then(Value::as_str).map(str::to_owned);
    match role.as_deref() {
        Some("tool") => {
            if let Some(content) = object.get_mut("content") {
                *content = reparse_json(content.take());
            }
        }
        Some("assistant") => {
            if let Some(tool_calls) = object.get_mut("tool_calls") {
                let tool_calls = tool_calls
                    .as_array_mut()
                    .ok_or(MessageParseError::ToolCallsNotAList { index })?;
                for call in tool_calls {
                    if let Some(arguments) = call
                        .get_mut("function")
                        .and_then(|function| function.get_mut("arguments"))
                    {
                        *arguments = reparse_json(arguments.take());
                    }
                }
            }
        }
        _ => {}
    }
    Ok(message)
}
