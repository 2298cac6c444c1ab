//! Browser session manager
//!
//! Owns one headless Chromium process per extraction call. The session
//! produces a ready, navigable tab; releasing it is the caller's
//! obligation on every exit path.

use std::sync::Arc;
use std::time::{Duration, Instant};

use headless_chrome::{Browser, Element, LaunchOptions, Tab};
use tracing::debug;

use crate::core::{BrowserConfig, PostulaError, Result};

/// Poll interval for bounded text waits
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A live browser session bound to a single tab
///
/// The OS-level browser process is owned exclusively by this handle
/// for its full duration: opened, used, and closed within a single
/// extraction call. Callers must invoke [`BrowserSession::close`] on
/// the normal return path; the manager does not enforce release on
/// error paths.
pub struct BrowserSession {
    browser: Browser,
    tab: Arc<Tab>,
    wait_timeout: Duration,
}

impl BrowserSession {
    /// Launch a browser and open a fresh tab
    ///
    /// When an explicit binary path is configured, that engine is
    /// launched headless with the sandbox disabled; otherwise the
    /// library discovers a system Chromium. Launch failures (missing
    /// binary, incompatible engine) propagate unhandled.
    pub fn open(config: &BrowserConfig) -> Result<Self> {
        let mut builder = LaunchOptions::default_builder();
        builder.headless(config.headless);

        if let Some(path) = &config.browser_path {
            // Explicit engine selection always runs headless, unsandboxed
            builder
                .path(Some(path.clone()))
                .headless(true)
                .sandbox(false);
        }

        let options = builder
            .build()
            .map_err(|e| PostulaError::launch(format!("invalid launch options: {}", e)))?;

        let browser = Browser::new(options)
            .map_err(|e| PostulaError::launch(format!("failed to start browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| PostulaError::launch(format!("failed to open tab: {}", e)))?;

        Ok(Self {
            browser,
            tab,
            wait_timeout: Duration::from_secs(config.wait_timeout_secs),
        })
    }

    /// Navigate the tab to a URL and wait for the navigation to settle
    pub fn goto(&self, url: &str) -> Result<()> {
        debug!(url, "navigating");
        self.tab
            .navigate_to(url)
            .map_err(|e| PostulaError::timeout(format!("navigation to {} failed: {}", url, e)))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| PostulaError::timeout(format!("navigation to {} failed: {}", url, e)))?;
        Ok(())
    }

    /// Wait for an element to appear, bounded by the configured timeout
    pub fn wait_for(&self, selector: &str) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, self.wait_timeout)
            .map_err(|_| {
                PostulaError::timeout(format!(
                    "element '{}' did not appear within {}s",
                    selector,
                    self.wait_timeout.as_secs()
                ))
            })?;
        Ok(())
    }

    /// Look up an element without waiting, returning `None` when absent
    ///
    /// Lookup failure is an answer here, not an error.
    pub fn try_find(&self, selector: &str) -> Option<Element<'_>> {
        self.tab.find_element(selector).ok()
    }

    /// Poll an element's text until it contains `needle`, bounded by
    /// the configured timeout
    ///
    /// Returns `Ok(false)` when the deadline passes without a match.
    pub fn wait_for_text(&self, selector: &str, needle: &str) -> Result<bool> {
        let deadline = Instant::now() + self.wait_timeout;
        loop {
            if let Some(element) = self.try_find(selector) {
                if let Ok(text) = element.get_inner_text() {
                    if text.contains(needle) {
                        return Ok(true);
                    }
                }
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    /// Current HTML content of the tab
    pub fn content(&self) -> Result<String> {
        self.tab
            .get_content()
            .map_err(|e| PostulaError::extraction(format!("failed to read page content: {}", e)))
    }

    /// Release the session, terminating the browser process
    pub fn close(self) -> Result<()> {
        let _ = self.tab.close_target();
        drop(self.browser);
        Ok(())
    }
}
