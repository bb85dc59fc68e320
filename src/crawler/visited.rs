//! Visited set shared by every discovery task
//!
//! The set deduplicates normalized URL strings. It has a hard capacity: once
//! full, new URLs are rejected without being tracked, so the set stops
//! growing on pathological sites.

use std::collections::HashSet;
use std::sync::RwLock;

/// Concurrency-safe set of URLs that have been accepted into the frontier
#[derive(Debug)]
pub struct VisitedSet {
    urls: RwLock<HashSet<String>>,
    capacity: usize,
}

impl VisitedSet {
    /// Creates an empty set holding at most `capacity` URLs
    pub fn new(capacity: usize) -> Self {
        Self {
            urls: RwLock::new(HashSet::new()),
            capacity,
        }
    }

    /// Marks `url` as visited if it is new and there is room
    ///
    /// The check and the insert happen under one write lock, so two tasks
    /// racing on the same URL cannot both be granted it.
    ///
    /// # Returns
    ///
    /// * `true` - The URL was absent and has been inserted
    /// * `false` - The URL was already present, or the set is full
    pub fn mark_and_test(&self, url: &str) -> bool {
        if self.contains(url) {
            return false;
        }

        let mut urls = match self.urls.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if urls.contains(url) {
            return false;
        }

        if urls.len() >= self.capacity {
            tracing::debug!("Visited set full ({} URLs), rejecting {}", self.capacity, url);
            return false;
        }

        urls.insert(url.to_string());
        true
    }

    /// Returns true if `url` has been marked
    pub fn contains(&self, url: &str) -> bool {
        match self.urls.read() {
            Ok(urls) => urls.contains(url),
            Err(poisoned) => poisoned.into_inner().contains(url),
        }
    }

    /// Returns the number of tracked URLs
    pub fn len(&self) -> usize {
        match self.urls.read() {
            Ok(urls) => urls.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Returns true if no URL has been marked
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
