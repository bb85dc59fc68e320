//! Output module for reporting check results
//!
//! This module handles:
//! - Fixed-width text lines (`{code:<9} {url}`)
//! - Single-line JSON objects
//! - The `ResultSink` trait the engine reports through

mod json;
mod text;
mod traits;

pub use json::JsonReporter;
pub use text::{format_text_line, TextReporter};
pub use traits::{OutputError, OutputResult, ResultSink};

use crate::config::OutputFormat;
use std::io::Write;

/// Creates the reporter for the configured output format
///
/// # Example
///
/// ```
/// use ripple_check::config::OutputFormat;
/// use ripple_check::output::reporter_for;
///
/// let reporter = reporter_for(OutputFormat::Json, std::io::stdout());
/// ```
pub fn reporter_for<W: Write + Send + 'static>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn ResultSink> {
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(writer)),
        OutputFormat::Json => Box::new(JsonReporter::new(writer)),
    }
}
