use serde::{Deserialize, Serialize};

use super::SearchStats;

/// Where the deepest explored branch stopped, and why.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetails {
    pub furthest_index: usize,
    pub reason: Option<String>,
}

impl FailureDetails {
    pub fn into_parts(self) -> (usize, Option<String>) {
        (self.furthest_index, self.reason)
    }
}

/// Tracks the furthest index reached and the failure recorded there.
///
/// Several branches can die at the same furthest index; the reason recorded
/// last in stack-pop order wins.
#[derive(Debug, Default)]
pub(crate) struct FailureTracker {
    details: FailureDetails,
}

impl FailureTracker {
    pub fn reach(&mut self, index: usize) {
        if index > self.details.furthest_index {
            self.details.furthest_index = index;
        }
    }

    pub fn furthest_index(&self) -> usize {
        self.details.furthest_index
    }

    /// Records a dead branch that was evaluated at `index`.
    pub fn dead_end(&mut self, index: usize, reason: Option<String>) {
        if index == self.details.furthest_index && reason.is_some() {
            self.details.reason = reason;
        }
    }

    /// Records a branch that completed the grammar at `index` but left input over.
    pub fn unconsumed(&mut self, index: usize, remaining: usize) {
        if index >= self.details.furthest_index {
            self.details.furthest_index = index;
            self.details.reason = Some(format!(
                "grammar completed with {remaining} unconsumed elements"
            ));
        }
    }

    pub fn finish(self) -> FailureDetails {
        self.details
    }
}

/// Outcome of one search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub matched: bool,
    pub details: FailureDetails,
    pub stats: SearchStats,
}
