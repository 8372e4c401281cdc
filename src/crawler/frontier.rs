//! The crawl frontier and seen set
//!
//! The frontier is a stack, not a FIFO queue: `pop` returns the most recently
//! pushed URL, so the traversal leans depth-first. The seen set only grows.
//! A URL is pushed at most once per run, which is what bounds the crawl on a
//! cyclic link graph.

use std::collections::HashSet;

/// Pending URLs plus every URL ever enqueued
#[derive(Debug, Default)]
pub struct Frontier {
    /// Stack of URLs awaiting a visit (last element is next)
    pending: Vec<String>,

    /// Every URL ever pushed, including the seed
    seen: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier holding only the seed, which is also marked seen
    pub fn with_seed(seed: impl Into<String>) -> Self {
        let mut frontier = Self::default();
        frontier.offer(seed);
        frontier
    }

    /// Pushes `url` unless it was seen before
    ///
    /// The membership test and insertion are one step, so the caller never
    /// has a window in which the same URL could be pushed twice.
    ///
    /// # Returns
    ///
    /// `true` if the URL was new and is now pending
    pub fn offer(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if !self.seen.insert(url.clone()) {
            return false;
        }
        tracing::trace!("Enqueued {}", url);
        self.pending.push(url);
        true
    }

    /// Pops the most recently pushed URL
    pub fn pop(&mut self) -> Option<String> {
        self.pending.pop()
    }

    /// Returns the number of URLs awaiting a visit
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether nothing is awaiting a visit
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns the number of URLs ever enqueued
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}
