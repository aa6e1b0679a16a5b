use serde::{Deserialize, Serialize};

/// Class token that marks an element as hidden (Bootstrap's `display: none`).
pub const HIDDEN_CLASS: &str = "d-none";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityConfig {
    pub hidden_class: String,
}

impl Default for UtilityConfig {
    fn default() -> Self {
        Self {
            hidden_class: HIDDEN_CLASS.to_string(),
        }
    }
}

impl UtilityConfig {
    pub fn with_hidden_class(mut self, token: impl Into<String>) -> Self {
        self.hidden_class = token.into();
        self
    }
}
