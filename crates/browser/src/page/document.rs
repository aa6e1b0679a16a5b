use async_trait::async_trait;
use pagekit_core::{Document, UtilError};
use serde_json::{json, Value};
use tracing::debug;

use super::PageSession;
use crate::shared::js;

/// Handle to an element held in the page-side registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteElement {
    pub id: String,
    pub tag: String,
}

/// Document of a live page. Elements are created detached and stay
/// reachable by id until [`PageDocument::release`].
#[derive(Clone)]
pub struct PageDocument {
    session: PageSession,
}

impl PageDocument {
    pub fn new(session: PageSession) -> Self {
        Self { session }
    }

    async fn call(
        &self,
        func: &str,
        node: &RemoteElement,
        args: &[Value],
        action: &str,
    ) -> Result<Value, UtilError> {
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(json!(node.id));
        all.extend_from_slice(args);
        self.session.call(func, &all, action, &node.id).await
    }

    /// Appends `node` to the first element matching `selector`.
    pub async fn append_to(&self, node: &RemoteElement, selector: &str) -> Result<(), UtilError> {
        self.call(js::element::APPEND_TO, node, &[json!(selector)], "AppendTo")
            .await
            .map(|_| ())
    }

    pub async fn outer_html(&self, node: &RemoteElement) -> Result<String, UtilError> {
        let value = self.call(js::element::OUTER_HTML, node, &[], "OuterHtml").await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    /// Drops the page's reference to `node`. Returns false if it was
    /// already gone.
    pub async fn release(&self, node: &RemoteElement) -> Result<bool, UtilError> {
        let value = self.call(js::element::RELEASE, node, &[], "Release").await?;
        Ok(value.as_bool().unwrap_or(false))
    }
}

#[async_trait]
impl Document for PageDocument {
    type Node = RemoteElement;

    async fn create_element(&self, tag: &str) -> Result<RemoteElement, UtilError> {
        let id = uuid::Uuid::new_v4().to_string();
        let value = self
            .session
            .call(js::element::CREATE_ELEMENT, &[json!(id), json!(tag)], "CreateElement", &id)
            .await?;
        let tag = value.as_str().unwrap_or(tag).to_string();
        debug!(%id, %tag, "created remote element");
        Ok(RemoteElement { id, tag })
    }

    async fn set_attribute(
        &self,
        node: &RemoteElement,
        name: &str,
        value: &str,
    ) -> Result<(), UtilError> {
        self.call(js::element::SET_ATTRIBUTE, node, &[json!(name), json!(value)], "SetAttribute")
            .await
            .map(|_| ())
    }

    async fn set_text(&self, node: &RemoteElement, text: &str) -> Result<(), UtilError> {
        self.call(js::element::SET_TEXT, node, &[json!(text)], "SetText")
            .await
            .map(|_| ())
    }

    async fn add_class(&self, node: &RemoteElement, token: &str) -> Result<(), UtilError> {
        self.call(js::element::ADD_CLASS, node, &[json!(token)], "AddClass")
            .await
            .map(|_| ())
    }

    async fn remove_class(&self, node: &RemoteElement, token: &str) -> Result<(), UtilError> {
        self.call(js::element::REMOVE_CLASS, node, &[json!(token)], "RemoveClass")
            .await
            .map(|_| ())
    }

    async fn has_class(&self, node: &RemoteElement, token: &str) -> Result<bool, UtilError> {
        let value = self.call(js::element::HAS_CLASS, node, &[json!(token)], "HasClass").await?;
        Ok(value.as_bool().unwrap_or(false))
    }
}
