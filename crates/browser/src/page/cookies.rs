use async_trait::async_trait;
use pagekit_core::{CookieStore, UtilError};
use serde_json::json;

use super::PageSession;
use crate::shared::js;

/// `document.cookie` of a live page.
#[derive(Clone)]
pub struct PageCookieStore {
    session: PageSession,
}

impl PageCookieStore {
    pub fn new(session: PageSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl CookieStore for PageCookieStore {
    async fn read(&self) -> Result<String, UtilError> {
        let js = js::build_js_call(js::cookie::READ_COOKIES, &[]);
        let value = self.session.evaluate(js, "ReadCookies").await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    async fn write(&self, cookie: &str) -> Result<(), UtilError> {
        self.session
            .call(js::cookie::WRITE_COOKIE, &[json!(cookie)], "WriteCookie", "")
            .await
            .map(|_| ())
    }
}
