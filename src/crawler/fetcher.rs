//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the checker, including:
//! - Building the HTTP client with the checker's user agent
//! - Issuing a single GET per URL without following redirects
//! - The optional pre-request delay
//! - The HTML content-type gate deciding whether a body is read

use crate::check::{FetchAttempt, FetchOutcome};
use crate::config::CheckConfig;
use chrono::Utc;
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client};
use std::time::{Duration, Instant};

/// Result of fetching one URL
#[derive(Debug)]
pub struct FetchedPage {
    /// The observation to classify
    pub attempt: FetchAttempt,

    /// The body, only present for HTML/XHTML responses
    pub body: Option<String>,
}

/// Builds an HTTP client with proper configuration
///
/// Redirects are never followed: the first response, 3xx included, is the
/// observed result.
///
/// # Example
///
/// ```no_run
/// use ripple_check::config::CheckConfig;
/// use ripple_check::crawler::build_http_client;
/// use url::Url;
///
/// let config = CheckConfig::for_seed(Url::parse("https://example.com/").unwrap());
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &CheckConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout)
        .connect_timeout(config.request_timeout.min(Duration::from_secs(10)))
        .redirect(Policy::none())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and reports what was observed
///
/// # Request Flow
///
/// 1. Wait `delay`, if non-zero
/// 2. Send GET
///    - Transport failure → `ConnectError`
/// 3. Check Content-Type
///    - Not HTML/XHTML → status only, body skipped
/// 4. Read body
///    - Read failure → `ConnectError`
///
/// Never fails: every failure is folded into the returned outcome.
pub async fn fetch_url(client: &Client, url: &str, delay: Duration) -> FetchedPage {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let started_at = Utc::now();
    let timer = Instant::now();

    tracing::debug!("FETCH: {}", url);

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Connect error for {}: {}", url, e);
            return page(url, started_at, timer, FetchOutcome::ConnectError, None);
        }
    };

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !is_html(&content_type) {
        tracing::debug!("Not scanning {} ({:?})", url, content_type);
        return page(url, started_at, timer, FetchOutcome::Status(status), None);
    }

    match response.text().await {
        Ok(body) => page(url, started_at, timer, FetchOutcome::Status(status), Some(body)),
        Err(e) => {
            tracing::debug!("Failed to read body of {}: {}", url, e);
            page(url, started_at, timer, FetchOutcome::ConnectError, None)
        }
    }
}

fn page(
    url: &str,
    started_at: chrono::DateTime<Utc>,
    timer: Instant,
    outcome: FetchOutcome,
    body: Option<String>,
) -> FetchedPage {
    FetchedPage {
        attempt: FetchAttempt {
            url: url.to_string(),
            started_at,
            elapsed: timer.elapsed(),
            outcome,
        },
        body,
    }
}

/// Checks if a Content-Type header value is HTML or XHTML
pub fn is_html(content_type: &str) -> bool {
    let content_type = content_type.to_lowercase();
    content_type.contains("text/html")
        || content_type.contains("text/xhtml")
        || content_type.contains("application/xhtml+xml")
}
