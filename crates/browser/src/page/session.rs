use chromiumoxide::page::Page;
use pagekit_core::UtilError;
use serde_json::Value;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::trace;

use crate::shared::{check_outcome, js, to_util_error, TimeoutConfig};

/// A live page plus the time budget for talking to it.
#[derive(Clone)]
pub struct PageSession {
    page: Arc<Page>,
    config: TimeoutConfig,
}

impl PageSession {
    pub fn new(page: Page) -> Self {
        Self::with_config(page, TimeoutConfig::default())
    }

    pub fn with_config(page: Page, config: TimeoutConfig) -> Self {
        Self {
            page: Arc::new(page),
            config,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &TimeoutConfig {
        &self.config
    }

    /// Evaluates `js` and returns its JSON value (null for `undefined`).
    pub async fn evaluate(&self, js: String, action: &str) -> Result<Value, UtilError> {
        trace!(action, "evaluating script");
        let result = timeout(self.config.evaluate, self.page.evaluate(js))
            .await
            .map_err(|_| {
                UtilError::timeout_error(format!(
                    "{} timed out after {}ms",
                    action,
                    self.config.evaluate.as_millis()
                ))
            })?
            .map_err(|e| to_util_error(e, action))?;
        Ok(result.value().cloned().unwrap_or(Value::Null))
    }

    /// Runs one of the `shared::js` snippets and unwraps its outcome.
    pub async fn call(
        &self,
        func: &str,
        args: &[Value],
        action: &str,
        node_id: &str,
    ) -> Result<Value, UtilError> {
        let outcome = self.evaluate(js::build_js_call(func, args), action).await?;
        check_outcome(&outcome, action, node_id)
    }
}
