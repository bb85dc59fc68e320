//! Ripple-Check: a bounded-concurrency broken link checker
//!
//! This crate crawls a website from a seed URL, follows `href`/`src` links
//! within a host scope policy, and reports responses that fall into the
//! watched HTTP status classes (3xx, 4xx, 5xx) or fail at the transport level.

pub mod check;
pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Ripple-Check operations
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Frontier closed before the seed URL could be queued")]
    FrontierClosed,

    #[error("Worker pool closed")]
    PoolClosed,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid watch pattern: {0}")]
    InvalidPattern(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Empty link")]
    Empty,
}

/// Result type alias for Ripple-Check operations
pub type Result<T> = std::result::Result<T, CheckError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use crate::check::{classify, CheckResult, FetchOutcome, WatchClasses};
pub use crate::config::CheckConfig;
pub use crate::crawler::{Engine, RunSummary, StopReason};
pub use crate::url::{resolve_link, ScopeDecision, ScopePolicy};
