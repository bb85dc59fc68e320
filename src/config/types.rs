use crate::check::WatchClasses;
use regex::Regex;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Number of concurrent fetches when none is configured
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Maximum number of URLs tracked by the visited set
pub const DEFAULT_MAX_VISITED: usize = 100_000;

/// Watched errors after which the run stops with a failure
pub const DEFAULT_MAX_ERRORS: u32 = 10;

/// Idle window after the last dispatch before the crawl is considered done
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport timeout for a single request, body included
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How results are written to standard output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `{code:<9} {url}` lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Validated, immutable configuration for one run
///
/// Built once at startup (see `build_config`) and shared by every component
/// of the engine.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// The URL the crawl starts from
    pub seed_url: Url,

    /// Host (and non-default port) of the seed URL
    pub seed_host: String,

    /// Scan `href=` attributes
    pub watch_href: bool,

    /// Scan `src=` attributes
    pub watch_src: bool,

    /// Follow links to any other host
    pub span_hosts: bool,

    /// Follow links to subdomains of the seed host
    pub span_subdomains: bool,

    /// Status classes to report
    pub watch: WatchClasses,

    /// Output format for results
    pub output: OutputFormat,

    /// Only follow links whose filename matches this pattern
    pub filename_pattern: Option<Regex>,

    /// Maximum number of concurrent fetches (at least 1)
    pub concurrency: usize,

    /// Capacity of the visited set
    pub max_visited: usize,

    /// Watched errors that stop the run
    pub max_errors: u32,

    /// Idle window after the last dispatch
    pub idle_timeout: Duration,

    /// Delay before each request
    pub fetch_delay: Duration,

    /// Transport timeout per request
    pub request_timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl CheckConfig {
    /// Creates a configuration for `seed_url` with default limits
    ///
    /// `href` attributes are watched and all status classes are checked.
    pub fn for_seed(seed_url: Url) -> Self {
        let seed_host = crate::url::extract_host(&seed_url).unwrap_or_default();
        Self {
            seed_url,
            seed_host,
            watch_href: true,
            watch_src: false,
            span_hosts: false,
            span_subdomains: false,
            watch: WatchClasses {
                server_errors: true,
                client_errors: true,
                redirects: true,
            },
            output: OutputFormat::Text,
            filename_pattern: None,
            concurrency: DEFAULT_CONCURRENCY,
            max_visited: DEFAULT_MAX_VISITED,
            max_errors: DEFAULT_MAX_ERRORS,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            fetch_delay: Duration::ZERO,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: default_user_agent(None),
        }
    }
}

/// Formats the User-Agent header
///
/// Format: `Mozilla/5.0 ripple-check/<version> (+<contact>)`, where the
/// contact defaults to the project repository.
pub fn default_user_agent(contact_url: Option<&str>) -> String {
    format!(
        "Mozilla/5.0 {}/{} (+{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        contact_url.unwrap_or(env!("CARGO_PKG_REPOSITORY"))
    )
}

/// Raw options as given on the command line, before validation
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Positional URL arguments (exactly one is required)
    pub urls: Vec<String>,
    pub watch_href: bool,
    pub watch_src: bool,
    pub watch_pattern: Option<String>,
    pub span_hosts: bool,
    pub span_subdomains: bool,
    pub json: bool,
    pub check_server_errors: bool,
    pub check_client_errors: bool,
    pub check_redirection: bool,
    pub concurrency: Option<i64>,
    pub max_visited: Option<usize>,
    pub max_errors: Option<u32>,
    pub idle_timeout_secs: Option<u64>,
    pub delay_ms: Option<u64>,
    pub request_timeout_secs: Option<u64>,

    /// Optional TOML settings file
    pub config_path: Option<PathBuf>,
}

/// Settings file structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub crawl: CrawlSettings,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentSettings,
}

/// Crawl tuning values; command-line options take precedence
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrawlSettings {
    /// Number of concurrent fetches
    pub concurrency: Option<i64>,

    /// Capacity of the visited set
    #[serde(rename = "max-visited")]
    pub max_visited: Option<usize>,

    /// Watched errors that stop the run
    #[serde(rename = "max-errors")]
    pub max_errors: Option<u32>,

    /// Idle window in seconds
    #[serde(rename = "idle-timeout-secs")]
    pub idle_timeout_secs: Option<u64>,

    /// Delay before each request in milliseconds
    #[serde(rename = "delay-ms")]
    pub delay_ms: Option<u64>,

    /// Transport timeout per request in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: Option<u64>,
}

/// User agent identification settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserAgentSettings {
    /// URL with information about this checker, appended to the User-Agent
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}
