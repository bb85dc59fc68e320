//! Link discovery for fetched HTML pages
//!
//! Scans a page body for candidate links, resolves them against the page URL,
//! applies the scope policy and the visited-set gate, and feeds the accepted
//! URLs back into the frontier.

use crate::config::CheckConfig;
use crate::crawler::parser::LinkExtractor;
use crate::crawler::scheduler::FrontierSender;
use crate::crawler::visited::VisitedSet;
use crate::url::{resolve_link, ScopeDecision, ScopePolicy};
use std::sync::Arc;
use url::Url;

/// Discovery state shared by every page scan
#[derive(Debug)]
pub struct Discovery {
    extractor: LinkExtractor,
    scope: ScopePolicy,
    visited: Arc<VisitedSet>,
}

impl Discovery {
    /// Creates the discovery state from the run configuration
    pub fn new(config: &CheckConfig, visited: Arc<VisitedSet>) -> Self {
        Self {
            extractor: LinkExtractor::new(config.watch_href, config.watch_src),
            scope: ScopePolicy::new(
                &config.seed_host,
                config.span_subdomains,
                config.span_hosts,
                config.filename_pattern.clone(),
            ),
            visited,
        }
    }

    /// Returns the URLs from `body` that are newly accepted for crawling
    ///
    /// Each returned URL has been marked in the visited set. Rejected links
    /// are logged at debug level and otherwise dropped.
    pub fn accept_links(&self, page_url: &Url, body: &str) -> Vec<Url> {
        let mut accepted = Vec::new();

        for raw in self.extractor.extract(body) {
            if raw
                .get(..7)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("mailto:"))
            {
                tracing::debug!("skipped-mailto: {}", raw);
                continue;
            }

            let url = match resolve_link(page_url, raw) {
                Ok(url) => url,
                Err(e) => {
                    tracing::debug!("resolve-error: {} on {}: {}", raw, page_url, e);
                    continue;
                }
            };

            if !self.scope.accepts(&url) {
                tracing::debug!("{}: {}", self.rejection_reason(&url), url);
                continue;
            }

            if !self.visited.mark_and_test(url.as_str()) {
                tracing::debug!("skipped-visited: {}", url);
                continue;
            }

            accepted.push(url);
        }

        accepted
    }

    fn rejection_reason(&self, url: &Url) -> &'static str {
        match self.scope.decide(url) {
            decision if self.scope.permits(decision) => "skipped-pattern",
            ScopeDecision::Subdomain => "skipped-subdomain",
            _ => "skipped-foreign",
        }
    }

    /// Scans `body` and enqueues every newly accepted link
    ///
    /// Waits while the frontier is full. Returns the number of URLs enqueued.
    pub async fn discover(&self, page_url: &Url, body: &str, frontier: &FrontierSender) -> usize {
        let accepted = self.accept_links(page_url, body);
        let mut enqueued = 0;

        for url in accepted {
            if !frontier.push(url.to_string()).await {
                tracing::debug!("Frontier closed, dropping links from {}", page_url);
                break;
            }
            enqueued += 1;
        }

        tracing::debug!("Discovered {} new links on {}", enqueued, page_url);
        enqueued
    }
}
