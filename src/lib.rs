//! Postula - Job-Board Scraping Assistant
//!
//! Drives a headless browser against the BNE job board to extract
//! offer listings and per-offer detail records, then drafts an
//! AIDA-structured application email for a selected offer through a
//! chat-completion service.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Browser**: Headless session manager with bounded waits
//! - **Scrape**: Listing and detail extractors over the board's HTML
//! - **LLM**: Chat-provider abstraction and the email drafter
//!
//! # Usage
//!
//! ```rust,no_run
//! use postula::core::Config;
//! use postula::scrape;
//!
//! fn main() -> postula::Result<()> {
//!     let config = Config::load();
//!     let detail = scrape::fetch_detail(&config, "2024-107738")?;
//!     println!("{}", detail.titulo);
//!     Ok(())
//! }
//! ```

pub mod browser;
pub mod core;
pub mod llm;
pub mod scrape;

// Re-export commonly used items
pub use core::{Config, PostulaError, Result};
