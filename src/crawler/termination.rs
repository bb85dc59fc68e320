//! Run termination policy
//!
//! A run has no natural end: discovery can always enqueue more work while
//! fetches are in flight. The controller stops the run on one of two signals:
//! - No URL has been dispatched for the idle window
//! - The number of watched errors reached the configured maximum

use crate::check::CheckResult;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Longest interval between idle checks
const MAX_TICK: Duration = Duration::from_secs(1);

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Nothing was dispatched for the idle window
    Idle,
    /// The watched error count reached the maximum
    ErrorThreshold { errors: u32 },
}

impl StopReason {
    /// Process exit code for this stop reason
    pub fn exit_code(&self) -> u8 {
        match self {
            StopReason::Idle => 0,
            StopReason::ErrorThreshold { .. } => 1,
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Idle => write!(f, "idle"),
            StopReason::ErrorThreshold { errors } => write!(f, "error threshold ({} errors)", errors),
        }
    }
}

/// Counters returned at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub stop: StopReason,
    /// URLs handed to a fetch task
    pub dispatched: u64,
    /// Results written to the sink
    pub reported: u64,
    /// Results counted toward the error threshold
    pub watched_errors: u32,
    /// Entries in the visited set when the run stopped
    pub visited: usize,
}

impl RunSummary {
    pub fn exit_code(&self) -> u8 {
        self.stop.exit_code()
    }
}

/// Tracks idle time and watched errors for the control loop
#[derive(Debug)]
pub struct TerminationController {
    idle_timeout: Duration,
    max_errors: u32,
    last_activity: Instant,
    errors: u32,
}

impl TerminationController {
    /// Creates a controller whose idle window starts at `now`
    pub fn new(idle_timeout: Duration, max_errors: u32, now: Instant) -> Self {
        Self {
            idle_timeout,
            max_errors: max_errors.max(1),
            last_activity: now,
            errors: 0,
        }
    }

    /// Records a dispatch, restarting the idle window
    pub fn touch(&mut self, now: Instant) {
        self.last_activity = now;
    }

    /// Counts a reported result
    ///
    /// Returns a stop reason once the watched error count reaches the maximum.
    pub fn record(&mut self, result: &CheckResult) -> Option<StopReason> {
        if !result.is_watched_error() {
            return None;
        }

        self.errors += 1;
        if self.errors >= self.max_errors {
            tracing::warn!("Reached {} watched errors, stopping", self.errors);
            return Some(StopReason::ErrorThreshold {
                errors: self.errors,
            });
        }
        None
    }

    /// Checks the idle window
    pub fn on_tick(&self, now: Instant) -> Option<StopReason> {
        if now.saturating_duration_since(self.last_activity) > self.idle_timeout {
            tracing::info!("No work dispatched for {:?}, stopping", self.idle_timeout);
            return Some(StopReason::Idle);
        }
        None
    }

    /// Interval between idle checks
    pub fn tick_period(&self) -> Duration {
        self.idle_timeout.min(MAX_TICK).max(Duration::from_millis(1))
    }

    /// Watched errors counted so far
    pub fn errors(&self) -> u32 {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{classify, FetchAttempt, FetchOutcome, WatchClasses};
    use chrono::Utc;

    fn result(outcome: FetchOutcome) -> CheckResult {
        let attempt = FetchAttempt {
            url: "http://example.com/".to_string(),
            started_at: Utc::now(),
            elapsed: Duration::from_millis(5),
            outcome,
        };
        let watch = WatchClasses {
            server_errors: true,
            client_errors: true,
            redirects: true,
        };
        classify(&attempt, &watch).unwrap()
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(StopReason::Idle.exit_code(), 0);
        assert_eq!(StopReason::ErrorThreshold { errors: 3 }.exit_code(), 1);
    }

    #[test]
    fn test_idle_after_window() {
        let start = Instant::now();
        let mut controller = TerminationController::new(Duration::from_secs(10), 5, start);

        assert_eq!(controller.on_tick(start + Duration::from_secs(5)), None);
        assert_eq!(controller.on_tick(start + Duration::from_secs(10)), None);
        assert_eq!(
            controller.on_tick(start + Duration::from_secs(11)),
            Some(StopReason::Idle)
        );

        controller.touch(start + Duration::from_secs(9));
        assert_eq!(controller.on_tick(start + Duration::from_secs(11)), None);
    }

    #[test]
    fn test_error_threshold() {
        let mut controller = TerminationController::new(Duration::from_secs(10), 2, Instant::now());

        assert_eq!(controller.record(&result(FetchOutcome::Status(500))), None);
        assert_eq!(
            controller.record(&result(FetchOutcome::Status(503))),
            Some(StopReason::ErrorThreshold { errors: 2 })
        );
    }

    #[test]
    fn test_redirects_and_connect_errors_not_counted() {
        let mut controller = TerminationController::new(Duration::from_secs(10), 1, Instant::now());

        assert_eq!(controller.record(&result(FetchOutcome::Status(301))), None);
        assert_eq!(controller.record(&result(FetchOutcome::ConnectError)), None);
        assert_eq!(controller.errors(), 0);
    }

    #[test]
    fn test_client_errors_counted() {
        let mut controller = TerminationController::new(Duration::from_secs(10), 3, Instant::now());

        controller.record(&result(FetchOutcome::Status(404)));
        controller.record(&result(FetchOutcome::Status(410)));
        assert_eq!(controller.errors(), 2);
    }

    #[test]
    fn test_tick_period() {
        let now = Instant::now();
        assert_eq!(
            TerminationController::new(Duration::from_secs(10), 1, now).tick_period(),
            Duration::from_secs(1)
        );
        assert_eq!(
            TerminationController::new(Duration::from_millis(200), 1, now).tick_period(),
            Duration::from_millis(200)
        );
    }
}
