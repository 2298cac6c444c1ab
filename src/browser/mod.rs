//! Browser automation module
//!
//! Wraps headless Chromium for page navigation and bounded waits.

mod session;

pub use session::BrowserSession;
