//! Per-session record of generation attempts, oldest first.

use std::{collections::VecDeque, num::NonZeroUsize};

use fitplan_types::WorkoutResult;

/// Append-only list of attempts. Failed attempts are recorded too.
///
/// With a capacity the oldest entry is dropped once the limit is reached;
/// without one the history grows for as long as the session lives.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<WorkoutResult>,
    capacity: Option<NonZeroUsize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self::with_capacity_limit(Some(capacity))
    }

    pub fn with_capacity_limit(capacity: Option<NonZeroUsize>) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, result: WorkoutResult) {
        if let Some(capacity) = self.capacity {
            while self.entries.len() >= capacity.get() {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(result);
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &WorkoutResult> + DoubleEndedIterator {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&WorkoutResult> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }
}
