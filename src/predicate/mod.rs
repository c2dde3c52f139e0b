mod check;
mod lambda;
mod text;

pub use check::{Check, Expected};
pub use lambda::FnCheck;
pub use text::TextMatch;

use std::fmt;
use std::sync::Arc;

use crate::grammar::GrammarResult;
use crate::subject::{Schema, Subject};
use crate::variable::VariableFrame;

pub(crate) const EXHAUSTED_REASON: &str = "sequence exhausted";

/// Result of performing a predicate on one element.
///
/// The failure reason travels with the result so diagnostics never depend on
/// which predicate happened to run last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail(String),
}

impl Outcome {
    pub fn fail<S: Into<String>>(reason: S) -> Self {
        Outcome::Fail(reason.into())
    }

    pub fn exhausted() -> Self {
        Outcome::Fail(EXHAUSTED_REASON.to_string())
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(reason) => Some(reason.as_str()),
        }
    }
}

/// A test over a single sequence element.
pub trait Predicate<T: Subject>: fmt::Debug + Send + Sync {
    /// Whether a successful check advances the sequence cursor.
    fn is_consuming(&self) -> bool {
        true
    }

    /// Evaluates the element at the cursor, or `None` past the end of the
    /// sequence. Writes go through `frame` and stay pending until the engine
    /// commits the step.
    fn perform(&self, subject: Option<&T>, frame: &mut VariableFrame<T>) -> Outcome;

    /// Construction-time validation against a schema.
    fn validate(&self, _schema: &Schema) -> GrammarResult<()> {
        Ok(())
    }
}

pub type SharedPredicate<T> = Arc<dyn Predicate<T>>;
