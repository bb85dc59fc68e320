//! Crawl coordinator - the control loop of a check run
//!
//! The coordinator owns the frontier receiver, the result receiver and the
//! termination controller. One `tokio::select!` loop:
//! - Takes the next URL from the frontier, waits for a worker slot, and spawns
//!   a check task for it
//! - Writes every classified result to the sink and counts watched errors
//! - Checks the idle window on a periodic tick
//!
//! Check tasks fetch one URL each, release their slot, spawn link discovery
//! for HTML bodies, then hand their result back to the loop.

use crate::check::{classify, CheckResult};
use crate::config::CheckConfig;
use crate::crawler::discovery::Discovery;
use crate::crawler::fetcher::{build_http_client, fetch_url};
use crate::crawler::scheduler::{Frontier, FrontierSender, WorkerPool, FRONTIER_CAPACITY};
use crate::crawler::termination::{RunSummary, TerminationController};
use crate::crawler::visited::VisitedSet;
use crate::output::ResultSink;
use crate::CheckError;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::{mpsc, OwnedSemaphorePermit};
use tokio::time::{Instant, MissedTickBehavior};
use url::Url;

/// Number of results buffered between check tasks and the control loop
const RESULT_CAPACITY: usize = 100;

/// A configured check run
pub struct Engine {
    config: Arc<CheckConfig>,
    client: Client,
    visited: Arc<VisitedSet>,
    discovery: Arc<Discovery>,
    pool: WorkerPool,
}

impl Engine {
    /// Creates an engine for a validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Engine)` - Ready to run
    /// * `Err(CheckError)` - The HTTP client could not be built
    pub fn new(config: CheckConfig) -> crate::Result<Self> {
        let client = build_http_client(&config)?;
        let visited = Arc::new(VisitedSet::new(config.max_visited));
        let discovery = Arc::new(Discovery::new(&config, Arc::clone(&visited)));
        let pool = WorkerPool::new(config.concurrency);

        Ok(Self {
            config: Arc::new(config),
            client,
            visited,
            discovery,
            pool,
        })
    }

    /// Runs the check until the idle window elapses or the error threshold is hit
    ///
    /// Every result is written to `sink` as soon as it arrives. A sink write
    /// failure ends the run with an error.
    pub async fn run(self, sink: &mut dyn ResultSink) -> crate::Result<RunSummary> {
        let (frontier_tx, mut frontier) = Frontier::bounded(FRONTIER_CAPACITY);
        let (results_tx, mut results_rx) = mpsc::channel::<CheckResult>(RESULT_CAPACITY);

        // Discovered links are fragment-free, so the seed must be too
        let mut seed_url = self.config.seed_url.clone();
        seed_url.set_fragment(None);
        let seed = seed_url.to_string();
        self.visited.mark_and_test(&seed);
        if !frontier_tx.push(seed.clone()).await {
            return Err(CheckError::FrontierClosed);
        }

        tracing::info!(
            "Checking {} with {} workers (idle timeout {:?}, max errors {})",
            seed,
            self.pool.size(),
            self.config.idle_timeout,
            self.config.max_errors
        );

        let mut termination = TerminationController::new(
            self.config.idle_timeout,
            self.config.max_errors,
            Instant::now(),
        );
        let mut tick = tokio::time::interval(termination.tick_period());
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut dispatched: u64 = 0;
        let mut reported: u64 = 0;

        let stop = loop {
            tokio::select! {
                Some(url) = frontier.next() => {
                    termination.touch(Instant::now());
                    let permit = self.pool.acquire().await.ok_or(CheckError::PoolClosed)?;
                    dispatched += 1;
                    self.dispatch(url, permit, frontier_tx.clone(), results_tx.clone());
                }
                Some(result) = results_rx.recv() => {
                    sink.report(&result)?;
                    reported += 1;
                    if let Some(stop) = termination.record(&result) {
                        break stop;
                    }
                }
                _ = tick.tick() => {
                    if let Some(stop) = termination.on_tick(Instant::now()) {
                        break stop;
                    }
                    tracing::trace!(
                        "{} queued, {} in flight, {} visited",
                        frontier.len(),
                        self.pool.in_flight(),
                        self.visited.len()
                    );
                }
            }
        };

        sink.finish()?;

        let summary = RunSummary {
            stop,
            dispatched,
            reported,
            watched_errors: termination.errors(),
            visited: self.visited.len(),
        };
        Ok(summary)
    }

    /// Spawns the check task for one URL
    fn dispatch(
        &self,
        url: String,
        permit: OwnedSemaphorePermit,
        frontier: FrontierSender,
        results: mpsc::Sender<CheckResult>,
    ) {
        let client = self.client.clone();
        let discovery = Arc::clone(&self.discovery);
        let delay = self.config.fetch_delay;
        let watch = self.config.watch;

        tokio::spawn(async move {
            let page = fetch_url(&client, &url, delay).await;
            drop(permit);

            if let Some(body) = page.body {
                match Url::parse(&url) {
                    Ok(page_url) => {
                        tokio::spawn(async move {
                            discovery.discover(&page_url, &body, &frontier).await;
                        });
                    }
                    Err(e) => tracing::debug!("resolve-error: {}: {}", url, e),
                }
            }

            if let Some(result) = classify(&page.attempt, &watch) {
                // The loop is gone once the run has stopped
                let _ = results.send(result).await;
            }
        });
    }
}

/// Runs a complete check with `config`, writing results to `sink`
///
/// This is the main entry point for a check run. It will:
/// 1. Build the HTTP client and shared state
/// 2. Seed the frontier with the seed URL
/// 3. Fetch, classify and report until a stop condition fires
pub async fn run_check(
    config: CheckConfig,
    sink: &mut dyn ResultSink,
) -> crate::Result<RunSummary> {
    Engine::new(config)?.run(sink).await
}
