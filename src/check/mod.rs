//! Check module for turning fetch outcomes into reportable results
//!
//! # Components
//!
//! - `Facet`: The single error class a reported result carries
//! - `FetchOutcome` / `FetchAttempt`: The raw observation made by the fetcher
//! - `CheckResult`: A reportable result, serializable to the JSON output format
//! - `classify`: The priority rules deciding which outcomes are reported

mod classify;
mod facet;
mod result;

// Re-export main types
pub use classify::{classify, select_facet, WatchClasses};
pub use facet::Facet;
pub use result::{CheckResult, FetchAttempt, FetchOutcome, CONNECT_ERROR_CODE};
