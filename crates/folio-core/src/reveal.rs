#![forbid(unsafe_code)]

//! One-way reveal on viewport intersection.
//!
//! Content sections and project cards start hidden. The first time at least
//! `threshold` of a target's area is inside the viewport it is marked
//! visible, and it stays that way for the lifetime of the page.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::view_state::ViewState;

/// Default fraction of a target that must be visible to reveal it.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// One intersection observer record, as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    /// Target element key.
    pub key: String,
    /// Whether the target currently intersects the viewport.
    pub is_intersecting: bool,
    /// Visible fraction of the target, in [0, 1].
    pub ratio: f64,
}

impl IntersectionEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            key: key.into(),
            is_intersecting,
            ratio,
        }
    }
}

/// Tracks which observed targets have been revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    observed: BTreeSet<String>,
    revealed: BTreeSet<String>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: BTreeSet::new(),
            revealed: BTreeSet::new(),
        }
    }

    /// Start observing `key`. Already-revealed keys stay revealed.
    pub fn observe(&mut self, key: impl Into<String>) {
        self.observed.insert(key.into());
    }

    /// Whether `key` is being observed.
    #[must_use]
    pub fn is_observed(&self, key: &str) -> bool {
        self.observed.contains(key)
    }

    /// Whether `key` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    /// Number of revealed targets.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Apply a batch of intersection entries. Returns the keys revealed by
    /// this batch. Entries for unobserved keys are ignored; entries that
    /// report a target leaving the viewport never hide it.
    pub fn on_intersection<V: ViewState + ?Sized>(
        &mut self,
        entries: &[IntersectionEntry],
        view: &mut V,
    ) -> Vec<String> {
        let mut newly = Vec::new();
        for entry in entries {
            if !self.observed.contains(&entry.key) {
                continue;
            }
            if !entry.is_intersecting || entry.ratio < self.threshold {
                continue;
            }
            view.set_visible(&entry.key);
            if self.revealed.insert(entry.key.clone()) {
                crate::debug!(key = %entry.key, ratio = entry.ratio, "revealed");
                newly.push(entry.key.clone());
            }
        }
        newly
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}
