use std::fmt;

use super::{Descriptor, GrammarError, GrammarResult};
use crate::predicate::Predicate;
use crate::subject::{Schema, Subject};

/// A sub-grammar repeated between `min` and `max` times (`None` = unbounded).
#[derive(Debug, Clone)]
pub struct Range<T: Subject> {
    min: usize,
    max: Option<usize>,
    children: Vec<Descriptor<T>>,
}

impl<T: Subject> Range<T> {
    pub fn new(min: usize, max: Option<usize>, children: Vec<Descriptor<T>>) -> GrammarResult<Self> {
        if children.is_empty() {
            return Err(GrammarError::EmptyRange);
        }
        if let Some(max) = max {
            if min > max {
                return Err(GrammarError::InvertedBounds { min, max });
            }
        }
        Ok(Self { min, max, children })
    }

    /// `children` one or more times.
    pub fn one_or_more(children: Vec<Descriptor<T>>) -> GrammarResult<Self> {
        Self::new(1, None, children)
    }

    /// `children` any number of times, including none.
    pub fn zero_or_more(children: Vec<Descriptor<T>>) -> GrammarResult<Self> {
        Self::new(0, None, children)
    }

    /// `children` exactly `count` times.
    pub fn exactly(count: usize, children: Vec<Descriptor<T>>) -> GrammarResult<Self> {
        Self::new(count, Some(count), children)
    }

    /// A single predicate that may or may not match.
    pub fn optional<P: Predicate<T> + 'static>(predicate: P) -> Self {
        Self {
            min: 0,
            max: Some(1),
            children: vec![Descriptor::action(predicate)],
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    pub fn children(&self) -> &[Descriptor<T>] {
        &self.children
    }

    pub fn validate(&self, schema: &Schema) -> GrammarResult<()> {
        self.children
            .iter()
            .try_for_each(|child| child.validate(schema))
    }
}

impl<T: Subject> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "Range(min={}, max={})", self.min, max),
            None => write!(f, "Range(min={}, max=unbounded)", self.min),
        }
    }
}
