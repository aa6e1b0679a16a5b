use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig, HeadlessMode};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use pagekit_core::{UtilError, UtilityConfig, Utilities};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::{PageCookieStore, PageDocument, PageSession};
use crate::shared::TimeoutConfig;

pub type PageUtilities = Utilities<PageCookieStore, PageDocument>;

#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub url: String,
    pub headless: bool,
    pub viewport: Option<(u32, u32)>,
    pub timeouts: TimeoutConfig,
}

impl LaunchConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headless: true,
            viewport: None,
            timeouts: TimeoutConfig::default(),
        }
    }

    pub fn headed(mut self) -> Self {
        self.headless = false;
        self
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = Some((width, height));
        self
    }

    pub fn with_timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = timeouts;
        self
    }
}

/// A launched Chromium with one open page. Dropping it without
/// [`BrowserSession::close`] leaves the process to chromiumoxide's drop and
/// the profile directory on disk.
pub struct BrowserSession {
    browser: Browser,
    session: PageSession,
    handler: JoinHandle<()>,
    profile_dir: PathBuf,
}

fn remove_profile_dir(dir: &Path) {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => debug!(dir = %dir.display(), "removed browser profile"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(dir = %dir.display(), error = %e, "failed to remove browser profile"),
    }
}

impl BrowserSession {
    pub async fn launch(config: LaunchConfig) -> Result<Self, UtilError> {
        // Unique profile dir per instance avoids SingletonLock clashes.
        let profile_dir = std::env::temp_dir().join(format!("pagekit-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&profile_dir)
            .map_err(|e| UtilError::browser_error(format!("Failed to create temp dir: {}", e)))?;

        let result = Self::start(&config, &profile_dir).await;
        if result.is_err() {
            remove_profile_dir(&profile_dir);
        }
        let (browser, session, handler) = result?;

        Ok(Self {
            browser,
            session,
            handler,
            profile_dir,
        })
    }

    async fn start(
        config: &LaunchConfig,
        profile_dir: &Path,
    ) -> Result<(Browser, PageSession, JoinHandle<()>), UtilError> {
        let mut builder = ChromeConfig::builder()
            .headless_mode(if config.headless { HeadlessMode::True } else { HeadlessMode::False })
            .user_data_dir(profile_dir);

        if let Some((w, h)) = config.viewport {
            builder = builder.window_size(w, h);
        }

        let chrome_cfg = builder
            .build()
            .map_err(|e| UtilError::browser_error(format!("Config failed: {}", e)))?;

        let (mut browser, mut handler) = Browser::launch(chrome_cfg)
            .await
            .map_err(|e| UtilError::browser_error(format!("Launch failed: {}", e)))?;

        let handler = tokio::spawn(async move { while handler.next().await.is_some() {} });

        match Self::open(&browser, config).await {
            Ok(page) => {
                info!(url = %config.url, "page ready");
                let session = PageSession::with_config(page, config.timeouts.clone());
                Ok((browser, session, handler))
            }
            Err(e) => {
                if let Err(close_err) = browser.close().await {
                    warn!(error = %close_err, "failed to close browser after open error");
                }
                browser.wait().await.ok();
                handler.abort();
                Err(e)
            }
        }
    }

    async fn open(browser: &Browser, config: &LaunchConfig) -> Result<Page, UtilError> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| UtilError::browser_error(format!("New page failed: {}", e)))?;

        debug!(url = %config.url, "navigating");
        timeout(config.timeouts.navigation, page.goto(config.url.clone()))
            .await
            .map_err(|_| UtilError::timeout_error(format!("Navigation to {} timed out", config.url)))?
            .map_err(|e| UtilError::browser_error(format!("Navigation failed: {}", e)))?;
        Ok(page)
    }

    pub fn session(&self) -> &PageSession {
        &self.session
    }

    pub fn cookie_store(&self) -> PageCookieStore {
        PageCookieStore::new(self.session.clone())
    }

    pub fn document(&self) -> PageDocument {
        PageDocument::new(self.session.clone())
    }

    pub fn utilities(&self) -> PageUtilities {
        self.utilities_with_config(UtilityConfig::default())
    }

    pub fn utilities_with_config(&self, config: UtilityConfig) -> PageUtilities {
        Utilities::with_config(self.cookie_store(), self.document(), config)
    }

    pub fn profile_dir(&self) -> &Path {
        &self.profile_dir
    }

    /// Closes the browser and removes its profile directory.
    pub async fn close(mut self) -> Result<(), UtilError> {
        let closed = self
            .browser
            .close()
            .await
            .map_err(|e| UtilError::browser_error(format!("Close failed: {}", e)));
        // Chromium keeps writing to the profile until the process exits.
        if let Err(e) = self.browser.wait().await {
            warn!(error = %e, "failed waiting for browser exit");
        }
        self.handler.abort();
        remove_profile_dir(&self.profile_dir);
        closed.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_dir_is_removed_with_contents() {
        let dir = std::env::temp_dir().join(format!("pagekit-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(dir.join("Default")).unwrap();
        std::fs::write(dir.join("Default").join("Cookies"), b"x").unwrap();

        remove_profile_dir(&dir);
        assert!(!dir.exists());

        // Already gone is fine.
        remove_profile_dir(&dir);
    }

    #[test]
    fn launch_config_builders() {
        let cfg = LaunchConfig::new("https://example.com")
            .headed()
            .with_viewport(800, 600)
            .with_timeouts(TimeoutConfig::fast());
        assert!(!cfg.headless);
        assert_eq!(cfg.viewport, Some((800, 600)));
        assert_eq!(cfg.timeouts, TimeoutConfig::fast());
    }
}
