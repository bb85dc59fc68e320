//! Configuration module for Ripple-Check
//!
//! This module turns command-line options and an optional TOML settings file
//! into the immutable `CheckConfig` every engine component reads.
//!
//! # Example
//!
//! ```no_run
//! use ripple_check::config::{build_config, CheckOptions};
//!
//! let options = CheckOptions {
//!     urls: vec!["https://example.com/".to_string()],
//!     watch_href: true,
//!     check_client_errors: true,
//!     ..Default::default()
//! };
//! let config = build_config(&options).unwrap();
//! println!("Checking {} with {} workers", config.seed_url, config.concurrency);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    default_user_agent, CheckConfig, CheckOptions, CrawlSettings, OutputFormat, SettingsFile,
    UserAgentSettings, DEFAULT_CONCURRENCY, DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_ERRORS,
    DEFAULT_MAX_VISITED, DEFAULT_REQUEST_TIMEOUT,
};

// Re-export parser functions
pub use parser::{build_config, load_settings};
