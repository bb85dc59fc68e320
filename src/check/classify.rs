//! Result classification
//!
//! Maps a fetch outcome onto the watched status classes. Rules are evaluated
//! in priority order and the first match wins:
//!
//! | Outcome | Condition | Facet |
//! |---------|-----------|-------|
//! | transport failure | always | connect |
//! | 500–599 | 5xx watched | server |
//! | 400–499 | 4xx watched | connect |
//! | 300–399 | redirects watched | redirect |
//! | anything else | | not reported |
//!
//! 4xx statuses carry the connect facet rather than the client facet; output
//! consumers rely on that mapping.

use crate::check::{CheckResult, Facet, FetchAttempt, FetchOutcome};

/// Which HTTP status classes are being watched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchClasses {
    /// Report 5xx responses
    pub server_errors: bool,

    /// Report 4xx responses
    pub client_errors: bool,

    /// Report 3xx responses
    pub redirects: bool,
}

impl WatchClasses {
    /// Returns true if at least one class is watched
    pub fn any(&self) -> bool {
        self.server_errors || self.client_errors || self.redirects
    }
}

/// Selects the facet for an outcome, or None if it is not reported
pub fn select_facet(outcome: FetchOutcome, watch: &WatchClasses) -> Option<Facet> {
    let status = match outcome {
        FetchOutcome::ConnectError => return Some(Facet::Connect),
        FetchOutcome::Status(status) => status,
    };

    match status {
        500..=599 if watch.server_errors => Some(Facet::Server),
        400..=499 if watch.client_errors => Some(Facet::Connect),
        300..=399 if watch.redirects => Some(Facet::Redirect),
        _ => None,
    }
}

/// Classifies a fetch attempt into a reportable result
///
/// # Returns
///
/// * `Some(CheckResult)` - The attempt falls into a watched class or failed to connect
/// * `None` - The attempt is suppressed
pub fn classify(attempt: &FetchAttempt, watch: &WatchClasses) -> Option<CheckResult> {
    select_facet(attempt.outcome, watch).map(|facet| CheckResult::new(attempt, facet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    fn all_watched() -> WatchClasses {
        WatchClasses {
            server_errors: true,
            client_errors: true,
            redirects: true,
        }
    }

    fn attempt(outcome: FetchOutcome) -> FetchAttempt {
        FetchAttempt {
            url: "http://example.com/".to_string(),
            started_at: Utc::now(),
            elapsed: Duration::from_millis(5),
            outcome,
        }
    }

    #[test]
    fn test_connect_error_always_reported() {
        let none_watched = WatchClasses::default();
        assert_eq!(
            select_facet(FetchOutcome::ConnectError, &none_watched),
            Some(Facet::Connect)
        );
    }

    #[test]
    fn test_server_error() {
        assert_eq!(
            select_facet(FetchOutcome::Status(500), &all_watched()),
            Some(Facet::Server)
        );
        assert_eq!(
            select_facet(FetchOutcome::Status(599), &all_watched()),
            Some(Facet::Server)
        );
    }

    #[test]
    fn test_client_error_uses_connect_facet() {
        assert_eq!(
            select_facet(FetchOutcome::Status(404), &all_watched()),
            Some(Facet::Connect)
        );
    }

    #[test]
    fn test_redirect() {
        assert_eq!(
            select_facet(FetchOutcome::Status(301), &all_watched()),
            Some(Facet::Redirect)
        );
    }

    #[test]
    fn test_unwatched_classes_suppressed() {
        let watch = WatchClasses {
            server_errors: true,
            client_errors: false,
            redirects: false,
        };
        assert_eq!(select_facet(FetchOutcome::Status(404), &watch), None);
        assert_eq!(select_facet(FetchOutcome::Status(302), &watch), None);
        assert_eq!(
            select_facet(FetchOutcome::Status(502), &watch),
            Some(Facet::Server)
        );
    }

    #[test]
    fn test_success_never_reported() {
        assert_eq!(select_facet(FetchOutcome::Status(200), &all_watched()), None);
        assert_eq!(select_facet(FetchOutcome::Status(204), &all_watched()), None);
        assert_eq!(select_facet(FetchOutcome::Status(101), &all_watched()), None);
    }

    #[test]
    fn test_emitted_iff_facet_selected() {
        let configs = [
            WatchClasses::default(),
            all_watched(),
            WatchClasses {
                server_errors: false,
                client_errors: true,
                redirects: false,
            },
        ];
        let outcomes = [
            FetchOutcome::ConnectError,
            FetchOutcome::Status(200),
            FetchOutcome::Status(302),
            FetchOutcome::Status(404),
            FetchOutcome::Status(503),
        ];

        for watch in &configs {
            for outcome in outcomes {
                let result = classify(&attempt(outcome), watch);
                assert_eq!(result.is_some(), select_facet(outcome, watch).is_some());
            }
        }
    }

    #[test]
    fn test_single_facet_per_result() {
        for status in [301, 404, 500] {
            let result = classify(&attempt(FetchOutcome::Status(status)), &all_watched()).unwrap();
            let set = [
                result.error_connect,
                result.error_client,
                result.error_server,
                result.error_redirect,
            ]
            .iter()
            .filter(|flag| **flag)
            .count();
            assert_eq!(set, 1, "status {} set {} facets", status, set);
        }
    }
}
