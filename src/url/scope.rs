//! Scope policy deciding which discovered links may be crawled

use crate::url::{extract_host, is_subdomain, same_host, trim_host};
use regex::Regex;
use url::Url;

/// How a discovered link's host relates to the seed host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeDecision {
    /// Same host as the seed - always crawled
    SameHost,
    /// Subdomain, parent domain or sibling of the seed host
    Subdomain,
    /// A genuinely different host
    Foreign,
}

/// Immutable scope policy derived from the seed URL at startup
#[derive(Debug, Clone)]
pub struct ScopePolicy {
    seed_host: String,
    span_subdomains: bool,
    span_hosts: bool,
    filename_pattern: Option<Regex>,
}

impl ScopePolicy {
    /// Creates a new scope policy
    ///
    /// # Arguments
    ///
    /// * `seed_host` - Host (with port, if any) of the seed URL
    /// * `span_subdomains` - Follow links to subdomains of the seed host
    /// * `span_hosts` - Follow links to any other host
    /// * `filename_pattern` - Only follow links whose filename matches
    pub fn new(
        seed_host: &str,
        span_subdomains: bool,
        span_hosts: bool,
        filename_pattern: Option<Regex>,
    ) -> Self {
        Self {
            seed_host: trim_host(seed_host),
            span_subdomains,
            span_hosts,
            filename_pattern,
        }
    }

    /// Classifies the host of `url` relative to the seed host
    pub fn decide(&self, url: &Url) -> ScopeDecision {
        let Some(host) = extract_host(url) else {
            return ScopeDecision::Foreign;
        };

        if same_host(&self.seed_host, &host) {
            ScopeDecision::SameHost
        } else if is_subdomain(&self.seed_host, &host) {
            ScopeDecision::Subdomain
        } else {
            ScopeDecision::Foreign
        }
    }

    /// Returns true if links with this decision may be followed
    pub fn permits(&self, decision: ScopeDecision) -> bool {
        match decision {
            ScopeDecision::SameHost => true,
            ScopeDecision::Subdomain => self.span_subdomains,
            ScopeDecision::Foreign => self.span_hosts,
        }
    }

    /// Returns true if the link's filename passes the watch pattern
    ///
    /// Links without a filename (empty last path segment) always pass.
    pub fn filename_allowed(&self, url: &Url) -> bool {
        let Some(pattern) = &self.filename_pattern else {
            return true;
        };

        match url.path_segments().and_then(|mut segments| segments.next_back()) {
            Some(name) if !name.is_empty() => pattern.is_match(name),
            _ => true,
        }
    }

    /// Returns true if `url` may enter the frontier
    pub fn accepts(&self, url: &Url) -> bool {
        self.permits(self.decide(url)) && self.filename_allowed(url)
    }
}
