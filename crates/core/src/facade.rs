use tracing::{debug, warn};

use crate::cookie::{self, CookieEncoder, RawEncoder};
use crate::host::{CookieStore, Document};
use crate::{ElementOptions, UtilError, UtilityConfig};

/// Cookie, element and visibility helpers over an injected cookie store and
/// document. Holds no state of its own beyond configuration.
pub struct Utilities<C, D> {
    cookies: C,
    document: D,
    config: UtilityConfig,
    encoder: Box<dyn CookieEncoder>,
}

impl<C: CookieStore, D: Document> Utilities<C, D> {
    pub fn new(cookies: C, document: D) -> Self {
        Self::with_config(cookies, document, UtilityConfig::default())
    }

    pub fn with_config(cookies: C, document: D, config: UtilityConfig) -> Self {
        Self {
            cookies,
            document,
            config,
            encoder: Box::new(RawEncoder),
        }
    }

    /// Swap how `name=value` pairs are rendered, e.g. for `PercentEncoder`.
    pub fn with_encoder(mut self, encoder: impl CookieEncoder + 'static) -> Self {
        self.encoder = Box::new(encoder);
        self
    }

    pub fn cookies(&self) -> &C {
        &self.cookies
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn config(&self) -> &UtilityConfig {
        &self.config
    }

    /// Write `name=value; path=/; Secure; SameSite=None;`.
    pub async fn cookie_create(&self, name: &str, value: &str) -> Result<(), UtilError> {
        let cookie = cookie::serialize_cookies(&*self.encoder, [(name, value)]);
        debug!(name, "writing cookie");
        self.cookies.write(&cookie).await
    }

    /// Serialize every pair into one write string, in iteration order.
    pub async fn cookie_create_from_object<I, K, V>(&self, entries: I) -> Result<(), UtilError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let entries: Vec<(K, V)> = entries.into_iter().collect();
        if entries.is_empty() {
            warn!("no cookie entries given, writing flags only");
        }
        debug!(count = entries.len(), "writing cookie batch");
        let cookie = cookie::serialize_cookies(&*self.encoder, entries);
        self.cookies.write(&cookie).await
    }

    /// Value of the first cookie named `name`, if any.
    pub async fn cookie_get_value(&self, name: &str) -> Result<Option<String>, UtilError> {
        let jar = self.cookies.read().await?;
        Ok(cookie::lookup_cookie(&*self.encoder, &jar, name))
    }

    /// Build a detached element. Inserting it is up to the caller.
    pub async fn element_create(
        &self,
        tag: &str,
        options: ElementOptions,
    ) -> Result<D::Node, UtilError> {
        debug!(tag, "creating element");
        let node = self.document.create_element(tag).await?;

        for token in options.classes.tokens() {
            self.document.add_class(&node, token).await?;
        }

        self.document.set_text(&node, &options.text).await?;

        for (name, value) in options.resolved_attributes() {
            self.document.set_attribute(&node, name, value).await?;
        }

        Ok(node)
    }

    pub async fn hide_element(&self, node: &D::Node) -> Result<(), UtilError> {
        self.document.add_class(node, &self.config.hidden_class).await
    }

    pub async fn show_element(&self, node: &D::Node) -> Result<(), UtilError> {
        self.document.remove_class(node, &self.config.hidden_class).await
    }

    pub async fn is_hidden(&self, node: &D::Node) -> Result<bool, UtilError> {
        self.document.has_class(node, &self.config.hidden_class).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PercentEncoder;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        writes: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CookieStore for RecordingStore {
        async fn read(&self) -> Result<String, UtilError> {
            Ok(self.writes.lock().await.join("; "))
        }

        async fn write(&self, cookie: &str) -> Result<(), UtilError> {
            self.writes.lock().await.push(cookie.to_string());
            Ok(())
        }
    }

    /// Logs every call as a line of text.
    #[derive(Default)]
    struct CallLog {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Document for CallLog {
        type Node = ();

        async fn create_element(&self, tag: &str) -> Result<(), UtilError> {
            self.calls.lock().await.push(format!("create {}", tag));
            Ok(())
        }

        async fn set_attribute(&self, _: &(), name: &str, value: &str) -> Result<(), UtilError> {
            self.calls.lock().await.push(format!("attr {}={}", name, value));
            Ok(())
        }

        async fn set_text(&self, _: &(), text: &str) -> Result<(), UtilError> {
            self.calls.lock().await.push(format!("text {}", text));
            Ok(())
        }

        async fn add_class(&self, _: &(), token: &str) -> Result<(), UtilError> {
            self.calls.lock().await.push(format!("add {}", token));
            Ok(())
        }

        async fn remove_class(&self, _: &(), token: &str) -> Result<(), UtilError> {
            self.calls.lock().await.push(format!("remove {}", token));
            Ok(())
        }

        async fn has_class(&self, _: &(), _: &str) -> Result<bool, UtilError> {
            Err(UtilError::browser_error("detached"))
        }
    }

    fn utilities() -> Utilities<RecordingStore, CallLog> {
        Utilities::new(RecordingStore::default(), CallLog::default())
    }

    #[tokio::test]
    async fn empty_batch_writes_flags_only() {
        let utils = utilities();
        utils
            .cookie_create_from_object(Vec::<(String, String)>::new())
            .await
            .unwrap();
        assert_eq!(
            *utils.cookies().writes.lock().await,
            vec!["path=/; Secure; SameSite=None;".to_string()]
        );
    }

    #[tokio::test]
    async fn batch_is_a_single_write() {
        let utils = utilities();
        utils
            .cookie_create_from_object([("lang", "en"), ("tz", "UTC")])
            .await
            .unwrap();
        assert_eq!(
            *utils.cookies().writes.lock().await,
            vec!["lang=en; tz=UTC; path=/; Secure; SameSite=None;".to_string()]
        );
    }

    #[tokio::test]
    async fn substituted_encoder_is_used_by_cookie_create() {
        let utils = utilities().with_encoder(PercentEncoder);
        utils.cookie_create("a b", "x;y").await.unwrap();
        assert_eq!(
            utils.cookies().writes.lock().await[0],
            "a%20b=x%3By; path=/; Secure; SameSite=None;"
        );
    }

    #[tokio::test]
    async fn element_create_call_order() {
        let utils = utilities();
        let opts = ElementOptions::new()
            .classes(["a", "b"])
            .text("hi")
            .action("/submit")
            .attribute("id", "f");
        utils.element_create("form", opts).await.unwrap();
        assert_eq!(
            *utils.document().calls.lock().await,
            vec![
                "create form",
                "add a",
                "add b",
                "text hi",
                "attr action=/submit",
                "attr id=f",
            ]
        );
    }

    #[tokio::test]
    async fn hidden_token_comes_from_config() {
        let utils = Utilities::with_config(
            RecordingStore::default(),
            CallLog::default(),
            UtilityConfig::default().with_hidden_class("hidden"),
        );
        utils.hide_element(&()).await.unwrap();
        utils.show_element(&()).await.unwrap();
        assert_eq!(
            *utils.document().calls.lock().await,
            vec!["add hidden", "remove hidden"]
        );
    }

    #[tokio::test]
    async fn host_errors_propagate_unchanged() {
        let utils = utilities();
        let err = utils.is_hidden(&()).await.unwrap_err();
        assert_eq!(err.category, crate::ErrorCategory::Browser);
        assert_eq!(err.message, "detached");
    }
}
