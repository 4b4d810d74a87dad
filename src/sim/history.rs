//! Bounded run history.
//!
//! The engine itself keeps no history; callers that want to compare runs own
//! a `RunHistory` and push results into it. Once full, the oldest entry is
//! evicted.

use std::collections::VecDeque;

use crate::domain::SimulationResult;

#[derive(Debug, Clone)]
pub struct RunHistory {
    capacity: usize,
    entries: VecDeque<SimulationResult>,
}

impl RunHistory {
    /// Create a history holding at most `capacity` results (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a result, evicting the oldest when full.
    pub fn push(&mut self, result: SimulationResult) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(result);
    }

    pub fn latest(&self) -> Option<&SimulationResult> {
        self.entries.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &SimulationResult> {
        self.entries.iter()
    }

    /// Highest projected score; earliest entry wins ties.
    pub fn best(&self) -> Option<&SimulationResult> {
        self.entries.iter().reduce(|best, r| {
            if r.projected_score > best.projected_score { r } else { best }
        })
    }

    /// Lowest projected score; earliest entry wins ties.
    pub fn worst(&self) -> Option<&SimulationResult> {
        self.entries.iter().reduce(|worst, r| {
            if r.projected_score < worst.projected_score { r } else { worst }
        })
    }
}
