//! Reconciliation deltas for nested collections

use crate::diff::difference;
use serde::{Deserialize, Serialize};

/// Elements to add and remove to turn a current collection into a desired one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta<E> {
    /// Desired elements missing from the current collection
    pub to_add: Vec<E>,
    /// Current elements no longer desired
    pub to_remove: Vec<E>,
}

impl<E: Clone> Delta<E> {
    /// Compute the delta between `desired` and `current`
    ///
    /// Both directions use the same predicate, so elements that only differ
    /// in fields the predicate ignores produce no change.
    pub fn compute<F>(desired: &[E], current: &[E], is_equal: F) -> Self
    where
        F: Fn(&E, &E) -> bool,
    {
        Self {
            to_add: difference(desired, current, &is_equal),
            to_remove: difference(current, desired, &is_equal),
        }
    }

    /// Apply this delta to `current`
    ///
    /// Removals are dropped first, additions are appended in order.
    pub fn apply<F>(&self, current: &[E], is_equal: F) -> Vec<E>
    where
        F: Fn(&E, &E) -> bool,
    {
        let mut result = difference(current, &self.to_remove, &is_equal);
        let additions = difference(&self.to_add, &result, &is_equal);
        result.extend(additions);
        result
    }
}

impl<E> Delta<E> {
    /// Check if there is nothing to do
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Summary counts for this delta
    pub fn summary(&self) -> DeltaSummary {
        DeltaSummary {
            additions: self.to_add.len(),
            removals: self.to_remove.len(),
        }
    }
}

impl<E> Default for Delta<E> {
    fn default() -> Self {
        Self {
            to_add: Vec::new(),
            to_remove: Vec::new(),
        }
    }
}

/// Delta summary statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaSummary {
    /// Number of elements to add
    pub additions: usize,
    /// Number of elements to remove
    pub removals: usize,
}

impl DeltaSummary {
    /// Total number of changes
    pub fn total(&self) -> usize {
        self.additions + self.removals
    }

    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        self.total() > 0
    }

    /// Merge another summary into this one
    pub fn merge(&mut self, other: &DeltaSummary) {
        self.additions += other.additions;
        self.removals += other.removals;
    }
}
