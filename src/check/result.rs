//! Result types shared between the fetcher, the classifier and the reporters

use crate::check::Facet;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::time::Duration;

/// Code reported in place of a status when no HTTP response was obtained
pub const CONNECT_ERROR_CODE: &str = "xxx";

/// What the fetcher observed for a single URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// An HTTP response arrived with this status code
    Status(u16),

    /// DNS, connect, TLS, request construction or body read failed
    ConnectError,
}

impl FetchOutcome {
    /// Returns the code as it appears in reports (`404`, `xxx`, ...)
    pub fn code(&self) -> String {
        match self {
            Self::Status(status) => status.to_string(),
            Self::ConnectError => CONNECT_ERROR_CODE.to_string(),
        }
    }

    /// Returns the HTTP status, if a response was obtained
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(status) => Some(*status),
            Self::ConnectError => None,
        }
    }
}

/// A completed fetch attempt, before classification
#[derive(Debug, Clone)]
pub struct FetchAttempt {
    /// The requested URL
    pub url: String,

    /// When the request was started
    pub started_at: DateTime<Utc>,

    /// How long the request took
    pub elapsed: Duration,

    /// What was observed
    pub outcome: FetchOutcome,
}

/// A reportable result for one checked URL
///
/// Serializes to the single-line JSON object used by `--json` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub code: String,
    pub url: String,
    pub time: DateTime<Utc>,
    #[serde(serialize_with = "serialize_nanos")]
    pub took: Duration,

    pub error_connect: bool,
    pub error_client: bool,
    pub error_server: bool,
    pub error_redirect: bool,

    #[serde(skip)]
    status: Option<u16>,
}

impl CheckResult {
    /// Builds a result for `attempt` carrying the given facet
    pub fn new(attempt: &FetchAttempt, facet: Facet) -> Self {
        Self {
            code: attempt.outcome.code(),
            url: attempt.url.clone(),
            time: attempt.started_at,
            took: attempt.elapsed,
            error_connect: facet == Facet::Connect,
            error_client: facet == Facet::Client,
            error_server: facet == Facet::Server,
            error_redirect: facet == Facet::Redirect,
            status: attempt.outcome.status(),
        }
    }

    /// Returns the HTTP status, if a response was obtained
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the facet set on this result
    pub fn facet(&self) -> Facet {
        if self.error_server {
            Facet::Server
        } else if self.error_redirect {
            Facet::Redirect
        } else if self.error_client {
            Facet::Client
        } else {
            Facet::Connect
        }
    }

    /// Returns true if this result counts toward the error threshold
    ///
    /// Server errors count, and so do 4xx statuses (which carry the connect
    /// facet). Transport failures and redirects do not.
    pub fn is_watched_error(&self) -> bool {
        match self.facet() {
            Facet::Server => true,
            Facet::Connect => matches!(self.status, Some(400..=499)),
            Facet::Client | Facet::Redirect => false,
        }
    }
}

fn serialize_nanos<S: Serializer>(took: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    let nanos = u64::try_from(took.as_nanos()).unwrap_or(u64::MAX);
    serializer.serialize_u64(nanos)
}
