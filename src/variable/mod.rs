mod frame;

pub(crate) use frame::BindingsSnapshot;
pub use frame::VariableFrame;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::predicate::{Outcome, Predicate};
use crate::subject::Subject;

static NEXT_VARIABLE_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(u64);

/// An evaluation-time variable.
///
/// Identity comes from a process-unique id, so two variables sharing a
/// display name never alias each other.
#[derive(Debug, Clone)]
pub struct Variable {
    id: VariableId,
    name: Arc<str>,
}

impl Variable {
    pub fn new() -> Self {
        let id = VariableId(NEXT_VARIABLE_ID.fetch_add(1, Ordering::Relaxed));
        Self {
            id,
            name: Arc::from(format!("var#{}", id.0)),
        }
    }

    pub fn named<S: AsRef<str>>(name: S) -> Self {
        Self {
            id: VariableId(NEXT_VARIABLE_ID.fetch_add(1, Ordering::Relaxed)),
            name: Arc::from(name.as_ref()),
        }
    }

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Action storing the current element into this variable.
    pub fn bind<T: Subject>(&self) -> Bind<T> {
        Bind {
            variable: self.clone(),
            consuming: false,
            _subject: PhantomData,
        }
    }

    /// Check requiring the current element to equal the bound value.
    pub fn compare<T: Subject>(&self) -> Compare<T> {
        Compare {
            variable: self.clone(),
            _subject: PhantomData,
        }
    }
}

impl Default for Variable {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Buffers a write of the current element into a variable.
#[derive(Debug, Clone)]
pub struct Bind<T> {
    variable: Variable,
    consuming: bool,
    _subject: PhantomData<fn() -> T>,
}

impl<T> Bind<T> {
    /// Also consume the element being bound.
    pub fn consuming(mut self) -> Self {
        self.consuming = true;
        self
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }
}

impl<T: Subject> Predicate<T> for Bind<T> {
    fn is_consuming(&self) -> bool {
        self.consuming
    }

    fn perform(&self, subject: Option<&T>, frame: &mut VariableFrame<T>) -> Outcome {
        frame.bind(&self.variable, subject.cloned());
        Outcome::Pass
    }
}

/// Requires the current element to equal a variable's committed value.
#[derive(Debug, Clone)]
pub struct Compare<T> {
    variable: Variable,
    _subject: PhantomData<fn() -> T>,
}

impl<T> Compare<T> {
    pub fn variable(&self) -> &Variable {
        &self.variable
    }
}

impl<T: Subject> Predicate<T> for Compare<T> {
    fn perform(&self, subject: Option<&T>, frame: &mut VariableFrame<T>) -> Outcome {
        frame.compare(&self.variable, subject)
    }
}
