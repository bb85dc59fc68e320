//! Result sink trait and output errors
//!
//! A sink receives every reported result from the engine's control loop, in
//! the order the results were received.

use crate::check::CheckResult;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for result sinks
///
/// Implementations are owned by the single control loop, so they need no
/// internal synchronization, but must be `Send` to live inside the run future.
pub trait ResultSink: Send {
    /// Reports one classified result
    ///
    /// # Arguments
    ///
    /// * `result` - The result to report
    fn report(&mut self, result: &CheckResult) -> OutputResult<()>;

    /// Flushes any buffered output at the end of a run
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

/// Collects results in memory
impl ResultSink for Vec<CheckResult> {
    fn report(&mut self, result: &CheckResult) -> OutputResult<()> {
        self.push(result.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{Facet, FetchAttempt, FetchOutcome};
    use chrono::Utc;
    use std::time::Duration;

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<CheckResult> = Vec::new();
        for status in [404, 500] {
            let attempt = FetchAttempt {
                url: format!("http://example.com/{}", status),
                started_at: Utc::now(),
                elapsed: Duration::from_millis(1),
                outcome: FetchOutcome::Status(status),
            };
            sink.report(&CheckResult::new(&attempt, Facet::Server)).unwrap();
        }
        sink.finish().unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].code, "404");
        assert_eq!(sink[1].code, "500");
    }
}
