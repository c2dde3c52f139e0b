use serde::{Deserialize, Serialize};

/// Work done by one search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub steps: usize,
    pub branches_pushed: usize,
    pub frame_forks: usize,
    pub range_entries: usize,
    pub peak_stack_depth: usize,
}

impl SearchStats {
    pub fn record_step(&mut self) {
        self.steps += 1;
    }

    pub fn record_push(&mut self, stack_depth: usize) {
        self.branches_pushed += 1;
        self.peak_stack_depth = self.peak_stack_depth.max(stack_depth);
    }

    pub fn record_fork(&mut self) {
        self.frame_forks += 1;
    }

    pub fn record_range_entry(&mut self) {
        self.range_entries += 1;
    }
}
