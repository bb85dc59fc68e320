use crate::check::CheckResult;
use crate::output::{OutputResult, ResultSink};
use std::io::Write;

/// Writes one JSON object per line
pub struct JsonReporter<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the reporter and returns the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> ResultSink for JsonReporter<W> {
    fn report(&mut self, result: &CheckResult) -> OutputResult<()> {
        serde_json::to_writer(&mut self.writer, result)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
