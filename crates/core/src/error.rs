use serde::{Deserialize, Serialize};

/// Error categories reported by cookie stores and documents
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The host rejected a tag, class token, attribute name or cookie string
    InvalidInput,
    /// A node handle no longer resolves to an element
    ElementNotFound,
    /// JavaScript evaluation failed inside the page
    ScriptExecution,
    /// The host did not answer in time
    Timeout,
    /// Browser/driver errors
    Browser,
}

/// Structured error surfaced by a host and passed through the facade untouched
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[error("[{category:?}] {message}")]
pub struct UtilError {
    pub category: ErrorCategory,
    pub message: String,
    /// Optional context (tag, token, selector, node id...)
    pub context: serde_json::Value,
}

impl UtilError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            context: serde_json::json!({}),
        }
    }

    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = context;
        self
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::InvalidInput, message)
    }

    pub fn element_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(ErrorCategory::ElementNotFound, format!("Element not found: {}", id))
            .with_context(serde_json::json!({ "node": id }))
    }

    pub fn script_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::ScriptExecution, message)
    }

    pub fn timeout_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Timeout, message)
    }

    pub fn browser_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Browser, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category() {
        let err = UtilError::invalid_input("bad token");
        assert_eq!(err.to_string(), "[InvalidInput] bad token");
    }

    #[test]
    fn element_not_found_records_node() {
        let err = UtilError::element_not_found("abc");
        assert_eq!(err.category, ErrorCategory::ElementNotFound);
        assert_eq!(err.context["node"], "abc");
    }
}
