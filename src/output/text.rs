use crate::check::CheckResult;
use crate::output::{OutputResult, ResultSink};
use std::io::Write;

/// Formats a result as a fixed-width text line (without newline)
///
/// The code is left-aligned in a 9-character column, followed by the URL.
///
/// # Example
///
/// `404       http://example.com/missing`
pub fn format_text_line(result: &CheckResult) -> String {
    format!("{:<9} {}", result.code, result.url)
}

/// Writes one text line per result
pub struct TextReporter<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> TextReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the reporter and returns the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> ResultSink for TextReporter<W> {
    fn report(&mut self, result: &CheckResult) -> OutputResult<()> {
        writeln!(self.writer, "{}", format_text_line(result))?;
        self.writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{Facet, FetchAttempt, FetchOutcome};
    use chrono::Utc;
    use std::time::Duration;

    fn result(outcome: FetchOutcome, facet: Facet) -> CheckResult {
        let attempt = FetchAttempt {
            url: "http://example.com/missing".to_string(),
            started_at: Utc::now(),
            elapsed: Duration::from_millis(3),
            outcome,
        };
        CheckResult::new(&attempt, facet)
    }

    #[test]
    fn test_format_status_line() {
        let line = format_text_line(&result(FetchOutcome::Status(404), Facet::Connect));
        assert_eq!(line, "404       http://example.com/missing");
    }

    #[test]
    fn test_format_connect_error_line() {
        let line = format_text_line(&result(FetchOutcome::ConnectError, Facet::Connect));
        assert_eq!(line, "xxx       http://example.com/missing");
    }

    #[test]
    fn test_reporter_writes_lines() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter
            .report(&result(FetchOutcome::Status(500), Facet::Server))
            .unwrap();
        reporter
            .report(&result(FetchOutcome::Status(301), Facet::Redirect))
            .unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("500       "));
        assert!(lines[1].starts_with("301       "));
    }
}
