mod error;
mod range;

pub use error::{GrammarError, GrammarResult};
pub use range::Range;

use std::sync::Arc;

use crate::predicate::{Check, FnCheck, Predicate, SharedPredicate, TextMatch};
use crate::subject::{Schema, Subject};
use crate::variable::{Bind, Compare};

/// One element of a grammar: a single-element predicate or a repetition.
#[derive(Debug, Clone)]
pub enum Descriptor<T: Subject> {
    Action(SharedPredicate<T>),
    Range(Arc<Range<T>>),
}

impl<T: Subject> Descriptor<T> {
    pub fn action<P: Predicate<T> + 'static>(predicate: P) -> Self {
        Descriptor::Action(Arc::new(predicate))
    }

    pub fn range(range: Range<T>) -> Self {
        Descriptor::Range(Arc::new(range))
    }

    pub fn validate(&self, schema: &Schema) -> GrammarResult<()> {
        match self {
            Descriptor::Action(predicate) => predicate.validate(schema),
            Descriptor::Range(range) => range.validate(schema),
        }
    }
}

impl<T: Subject> From<SharedPredicate<T>> for Descriptor<T> {
    fn from(predicate: SharedPredicate<T>) -> Self {
        Descriptor::Action(predicate)
    }
}

impl<T: Subject> From<Range<T>> for Descriptor<T> {
    fn from(range: Range<T>) -> Self {
        Descriptor::range(range)
    }
}

impl<T: Subject> From<Check<T>> for Descriptor<T> {
    fn from(check: Check<T>) -> Self {
        Descriptor::action(check)
    }
}

impl<T: Subject> From<FnCheck<T>> for Descriptor<T> {
    fn from(check: FnCheck<T>) -> Self {
        Descriptor::action(check)
    }
}

impl<T: Subject> From<TextMatch> for Descriptor<T> {
    fn from(check: TextMatch) -> Self {
        Descriptor::action(check)
    }
}

impl<T: Subject> From<Bind<T>> for Descriptor<T> {
    fn from(bind: Bind<T>) -> Self {
        Descriptor::action(bind)
    }
}

impl<T: Subject> From<Compare<T>> for Descriptor<T> {
    fn from(compare: Compare<T>) -> Self {
        Descriptor::action(compare)
    }
}

/// Validates every descriptor against `schema`.
pub fn validate_all<T: Subject>(descriptors: &[Descriptor<T>], schema: &Schema) -> GrammarResult<()> {
    descriptors
        .iter()
        .try_for_each(|descriptor| descriptor.validate(schema))
}
