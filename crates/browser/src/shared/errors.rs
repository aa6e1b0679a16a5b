use pagekit_core::UtilError;
use serde_json::Value;

pub fn to_util_error(e: impl std::fmt::Display, action: &str) -> UtilError {
    let s = e.to_string();
    if s.contains("timeout") || s.contains("Timeout") {
        UtilError::timeout_error(format!("{} timed out: {}", action, s))
    } else if s.contains("exception") || s.contains("Exception") {
        UtilError::script_error(format!("{} threw: {}", action, s))
    } else {
        UtilError::browser_error(format!("{} failed: {}", action, s))
    }
}

/// Unwraps a `{ success, value, error, missing }` snippet answer into its
/// `value` (null when absent).
pub fn check_outcome(outcome: &Value, action: &str, node_id: &str) -> Result<Value, UtilError> {
    let Some(obj) = outcome.as_object() else {
        return Err(UtilError::script_error(format!(
            "{} returned an unexpected result: {}",
            action, outcome
        )));
    };

    if obj.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(obj.get("value").cloned().unwrap_or(Value::Null));
    }

    if obj.get("missing").and_then(Value::as_bool) == Some(true) {
        return Err(UtilError::element_not_found(node_id));
    }

    let message = obj.get("error").and_then(Value::as_str).unwrap_or("unknown error");
    let err = if message.starts_with("InvalidCharacterError") || message.starts_with("SyntaxError") {
        UtilError::invalid_input(format!("{} rejected: {}", action, message))
    } else {
        UtilError::script_error(format!("{} failed: {}", action, message))
    };
    Err(err.with_context(serde_json::json!({ "action": action, "node": node_id })))
}
