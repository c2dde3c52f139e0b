use smallvec::SmallVec;

use crate::graph::NodeId;
use crate::subject::Subject;
use crate::variable::{BindingsSnapshot, VariableFrame};

/// Visit count of one materialised range, owned by the branch inside it.
#[derive(Debug, Clone)]
pub(crate) struct RangeCounter<T> {
    pub manager: NodeId,
    pub visits: usize,
    /// Cursor position at the previous visit (or at entry).
    pub last_index: usize,
    /// Committed bindings at the previous visit (or at entry).
    pub last_bindings: BindingsSnapshot<T>,
}

/// Counters of the ranges a branch is currently inside, innermost last.
#[derive(Debug, Clone)]
pub(crate) struct RangeCounters<T>(SmallVec<[RangeCounter<T>; 4]>);

impl<T> Default for RangeCounters<T> {
    fn default() -> Self {
        Self(SmallVec::new())
    }
}

impl<T: Subject> RangeCounters<T> {
    pub fn enter(&mut self, manager: NodeId, index: usize, frame: &VariableFrame<T>) {
        self.0.push(RangeCounter {
            manager,
            visits: 0,
            last_index: index,
            last_bindings: frame.snapshot(),
        });
    }

    /// Records a visit to `manager` at `index`; returns the visit count and
    /// whether the branch moved the cursor or changed its bindings since the
    /// previous visit.
    pub fn visit(&mut self, manager: NodeId, index: usize, frame: &VariableFrame<T>) -> (usize, bool) {
        let position = match self.0.iter().rposition(|c| c.manager == manager) {
            Some(position) => position,
            None => {
                self.enter(manager, index, frame);
                self.0.len() - 1
            }
        };
        let counter = &mut self.0[position];
        counter.visits += 1;
        let progressed = index > counter.last_index || !frame.matches_snapshot(&counter.last_bindings);
        counter.last_index = index;
        counter.last_bindings = frame.snapshot();
        (counter.visits, progressed)
    }

    pub fn release(&mut self, manager: NodeId) {
        if let Some(position) = self.0.iter().rposition(|c| c.manager == manager) {
            self.0.remove(position);
        }
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

/// One entry of the backtracking stack. Owns everything it may mutate.
#[derive(Debug)]
pub(crate) struct SearchState<T> {
    pub node: NodeId,
    pub index: usize,
    pub frame: VariableFrame<T>,
    pub counters: RangeCounters<T>,
}

impl<T> SearchState<T> {
    pub fn initial(node: NodeId) -> Self {
        Self {
            node,
            index: 0,
            frame: VariableFrame::default(),
            counters: RangeCounters::default(),
        }
    }
}
