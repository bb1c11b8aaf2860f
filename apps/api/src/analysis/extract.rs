//! Recovers the JSON object from a model reply.

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("LLM returned empty content.")]
    EmptyContent,

    #[error("No JSON object found in response.")]
    NoJsonObject,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("response does not match the summary schema: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("{0}")]
    Invalid(String),
}

/// Decodes the JSON carried by `content`.
///
/// The whole trimmed text is tried first. Failing that, the slice from the first
/// `{` to the last `}` is decoded, which tolerates prose around a single object.
/// Nested unrelated braces or several objects in one reply are not untangled.
pub fn extract_json(content: &str) -> Result<Value, ParseError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ParseError::EmptyContent);
    }

    if let Ok(value) = serde_json::from_str(content) {
        return Ok(value);
    }

    let (Some(start), Some(end)) = (content.find('{'), content.rfind('}')) else {
        return Err(ParseError::NoJsonObject);
    };
    if end < start {
        return Err(ParseError::NoJsonObject);
    }

    let value = serde_json::from_str(&content[start..=end])?;
    warn!(
        leading = start,
        trailing = content.len() - end - 1,
        "Recovered JSON object from surrounding text"
    );
    Ok(value)
}

/// Like [`extract_json`] but insists on a top-level object.
pub fn extract_json_object(content: &str) -> Result<serde_json::Map<String, Value>, ParseError> {
    match extract_json(content)? {
        Value::Object(map) => Ok(map),
        other => Err(ParseError::NotAnObject(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
