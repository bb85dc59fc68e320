//! Frontier queue and worker pool admission
//!
//! This module handles:
//! - The bounded frontier queue of URLs waiting to be fetched
//! - The admission gate limiting how many fetches run at once

use std::sync::Arc;
use tokio::sync::{mpsc, OwnedSemaphorePermit, Semaphore};

/// Number of URLs the frontier holds before enqueuing blocks
pub const FRONTIER_CAPACITY: usize = 100;

/// Sending half of the frontier
///
/// Cloned into every discovery task. `push` waits while the frontier is full.
#[derive(Debug, Clone)]
pub struct FrontierSender {
    tx: mpsc::Sender<String>,
}

impl FrontierSender {
    /// Enqueues a URL, waiting for space if the frontier is full
    ///
    /// # Returns
    ///
    /// * `true` - The URL was enqueued
    /// * `false` - The frontier has been dropped (the run is over)
    pub async fn push(&self, url: String) -> bool {
        self.tx.send(url).await.is_ok()
    }
}

/// Receiving half of the frontier, owned by the control loop
#[derive(Debug)]
pub struct Frontier {
    rx: mpsc::Receiver<String>,
}

impl Frontier {
    /// Creates a frontier holding at most `capacity` pending URLs
    pub fn bounded(capacity: usize) -> (FrontierSender, Frontier) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (FrontierSender { tx }, Frontier { rx })
    }

    /// Waits for the next URL
    ///
    /// Returns None once every sender has been dropped and the queue is empty.
    pub async fn next(&mut self) -> Option<String> {
        self.rx.recv().await
    }

    /// Returns the number of URLs waiting
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Returns true if no URL is waiting
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

/// Admission gate for concurrent fetches
///
/// Each in-flight fetch holds one permit. The permit is an RAII guard: it is
/// returned when the fetch task drops it, whether the task finishes, fails or
/// panics.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    /// Creates a pool admitting `size` concurrent fetches (at least 1)
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    /// Waits for a free slot
    ///
    /// Returns None only if the gate has been closed.
    pub async fn acquire(&self) -> Option<OwnedSemaphorePermit> {
        self.permits.clone().acquire_owned().await.ok()
    }

    /// Returns the number of free slots
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Returns the number of fetches currently holding a slot
    pub fn in_flight(&self) -> usize {
        self.size - self.available()
    }

    /// Returns the configured pool size
    pub fn size(&self) -> usize {
        self.size
    }
}
