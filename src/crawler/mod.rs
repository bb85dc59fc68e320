//! Crawler module for link checking
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching without redirect following
//! - Link extraction from HTML bodies
//! - The bounded frontier and the worker pool
//! - The visited set
//! - Run coordination and termination

mod coordinator;
mod discovery;
mod fetcher;
mod parser;
mod scheduler;
mod termination;
mod visited;

pub use coordinator::{run_check, Engine};
pub use discovery::Discovery;
pub use fetcher::{build_http_client, fetch_url, is_html, FetchedPage};
pub use parser::{Attribute, LinkExtractor};
pub use scheduler::{Frontier, FrontierSender, WorkerPool, FRONTIER_CAPACITY};
pub use termination::{RunSummary, StopReason, TerminationController};
pub use visited::VisitedSet;
