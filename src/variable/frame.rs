use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;
use std::sync::Arc;

use super::{Variable, VariableId};
use crate::predicate::Outcome;

type Bindings<T> = FastHashMap<VariableId, Option<T>>;

/// Variable bindings visible to one search branch.
///
/// Writes are buffered until `commit`. The committed mapping is shared
/// copy-on-write, so a fork is cheap and a commit on one branch never shows
/// up in a sibling. A binding may hold `None` when it was taken past the end
/// of the sequence.
#[derive(Debug, Clone)]
pub struct VariableFrame<T> {
    committed: Arc<Bindings<T>>,
    pending: SmallVec<[(VariableId, Option<T>); 2]>,
}

/// Committed bindings of a frame captured at one step of a branch.
#[derive(Debug, Clone)]
pub(crate) struct BindingsSnapshot<T>(Arc<Bindings<T>>);

impl<T> Default for VariableFrame<T> {
    fn default() -> Self {
        Self {
            committed: Arc::new(FastHashMap::new()),
            pending: SmallVec::new(),
        }
    }
}

impl<T: Clone + PartialEq + std::fmt::Debug> VariableFrame<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, variable: &Variable, value: Option<T>) {
        self.pending.push((variable.id(), value));
    }

    pub fn compare(&self, variable: &Variable, value: Option<&T>) -> Outcome {
        match self.committed.get(&variable.id()) {
            None => Outcome::fail(format!("variable {variable} is not bound")),
            Some(bound) if bound.as_ref() == value => Outcome::Pass,
            Some(bound) => Outcome::fail(format!(
                "variable {variable} mismatch - expected: {bound:?}, got: {value:?}"
            )),
        }
    }

    /// Applies pending writes in order; the last write to a variable wins.
    pub fn commit(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let bindings = Arc::make_mut(&mut self.committed);
        for (id, value) in self.pending.drain(..) {
            bindings.insert(id, value);
        }
    }

    /// Independent copy carrying the same committed bindings and pending writes.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    pub(crate) fn snapshot(&self) -> BindingsSnapshot<T> {
        BindingsSnapshot(Arc::clone(&self.committed))
    }

    /// Whether the committed bindings still equal those in `snapshot`.
    pub(crate) fn matches_snapshot(&self, snapshot: &BindingsSnapshot<T>) -> bool {
        Arc::ptr_eq(&self.committed, &snapshot.0) || *self.committed == *snapshot.0
    }

    pub fn get(&self, variable: &Variable) -> Option<&T> {
        self.committed
            .get(&variable.id())
            .and_then(|value| value.as_ref())
    }

    pub fn is_bound(&self, variable: &Variable) -> bool {
        self.committed.contains_key(&variable.id())
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}
