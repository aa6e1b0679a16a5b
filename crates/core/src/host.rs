//! Capabilities a hosting environment hands to the facade.

use async_trait::async_trait;

use crate::UtilError;

/// Access to a `document.cookie`-style store.
#[async_trait]
pub trait CookieStore: Send + Sync {
    /// Full serialized cookie string, entries separated by `"; "`.
    async fn read(&self) -> Result<String, UtilError>;

    /// Issue one assignment string. How multiple pairs in one write are
    /// handled is up to the store.
    async fn write(&self, cookie: &str) -> Result<(), UtilError>;
}

/// Element creation and mutation on a host document.
#[async_trait]
pub trait Document: Send + Sync {
    /// Handle to a created element. The document does not need to keep
    /// anything alive on the caller's behalf.
    type Node: Send + Sync;

    async fn create_element(&self, tag: &str) -> Result<Self::Node, UtilError>;

    async fn set_attribute(&self, node: &Self::Node, name: &str, value: &str)
        -> Result<(), UtilError>;

    /// Replaces all children of `node` with a single text node.
    async fn set_text(&self, node: &Self::Node, text: &str) -> Result<(), UtilError>;

    async fn add_class(&self, node: &Self::Node, token: &str) -> Result<(), UtilError>;

    async fn remove_class(&self, node: &Self::Node, token: &str) -> Result<(), UtilError>;

    async fn has_class(&self, node: &Self::Node, token: &str) -> Result<bool, UtilError>;
}
