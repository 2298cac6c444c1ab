//! Core module - shared infrastructure for Postula
//!
//! This module contains foundational types, configuration, and error
//! handling used throughout the application.

pub mod config;
pub mod error;
pub mod types;

pub use config::{BoardConfig, BrowserConfig, Config, OpenAiConfig};
pub use error::{PostulaError, Result};
pub use types::*;
