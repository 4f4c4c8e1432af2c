//! Interpretation of a VIES answer
//!
//! The API has used two spellings for both the error sentinel
//! (`error`, `userError`) and the validity flag (`valid`, `isValid`).
//! Both are looked up in that order. For the sentinel the first non-empty
//! value wins; for the flag the first present field wins, even when null.

use super::transport::TransportResponse;
use super::types::{AttemptFailure, FailureClass};
use serde_json::Value;

const ERROR_FIELDS: [&str; 2] = ["error", "userError"];
const VALIDITY_FIELDS: [&str; 2] = ["valid", "isValid"];

/// Sentinels that accompany a definitive answer
const DEFINITIVE_SENTINELS: [&str; 2] = ["VALID", "INVALID"];

/// `null`, `false`, zero, or an empty string, array or object
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Error indicator of a parsed body, if any
pub fn error_indicator(body: &Value) -> Option<&Value> {
    ERROR_FIELDS
        .iter()
        .filter_map(|field| body.get(field))
        .find(|value| !is_empty(value))
}

/// Validity flag of a parsed body; `None` when absent or not a boolean
pub fn validity_indicator(body: &Value) -> Option<bool> {
    VALIDITY_FIELDS
        .iter()
        .find_map(|field| body.get(field))
        .and_then(Value::as_bool)
}

fn is_definitive(indicator: &Value) -> bool {
    indicator
        .as_str()
        .is_some_and(|s| DEFINITIVE_SENTINELS.contains(&s))
}

fn describe(indicator: &Value) -> String {
    match indicator {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Turn a response into an answer or a classified failure.
///
/// `Ok(None)` is an answer without a usable validity flag.
pub fn evaluate(response: &TransportResponse) -> Result<Option<bool>, AttemptFailure> {
    let parsed = serde_json::from_str::<Value>(&response.body);

    if response.status != 200 {
        let sentinel = parsed
            .as_ref()
            .ok()
            .and_then(error_indicator)
            .map(|e| format!(", {}", describe(e)))
            .unwrap_or_default();
        return Err(AttemptFailure::new(
            FailureClass::Transient,
            format!("HTTP {}{}", response.status, sentinel),
        ));
    }

    let body = parsed.map_err(|e| {
        AttemptFailure::new(FailureClass::Unexpected, format!("invalid JSON body: {}", e))
    })?;

    if !body.is_object() {
        return Err(AttemptFailure::new(
            FailureClass::Unexpected,
            format!("expected a JSON object, got: {}", body),
        ));
    }

    if let Some(error) = error_indicator(&body) {
        if !is_definitive(error) {
            return Err(AttemptFailure::new(FailureClass::Transient, describe(error)));
        }
    }

    Ok(validity_indicator(&body))
}
