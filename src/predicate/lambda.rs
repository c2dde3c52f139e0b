use std::fmt;
use std::sync::Arc;

use super::{Outcome, Predicate};
use crate::subject::Subject;
use crate::variable::VariableFrame;

type CheckFn<T> = dyn Fn(Option<&T>, &mut VariableFrame<T>) -> bool + Send + Sync;

/// Predicate backed by a user-supplied function.
///
/// Functions built with `new` only see present elements and fail with
/// "sequence exhausted" past the end. `with_absent` functions also run past
/// the end and receive `None`, which allows end-of-sequence lookaheads.
pub struct FnCheck<T: Subject> {
    label: String,
    check: Arc<CheckFn<T>>,
    consuming: bool,
    sees_absent: bool,
}

impl<T: Subject> FnCheck<T> {
    pub fn new<S, F>(label: S, check: F) -> Self
    where
        S: Into<String>,
        F: Fn(&T, &mut VariableFrame<T>) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            check: Arc::new(move |subject: Option<&T>, frame: &mut VariableFrame<T>| {
                subject.is_some_and(|subject| check(subject, frame))
            }),
            consuming: true,
            sees_absent: false,
        }
    }

    pub fn with_absent<S, F>(label: S, check: F) -> Self
    where
        S: Into<String>,
        F: Fn(Option<&T>, &mut VariableFrame<T>) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            check: Arc::new(check),
            consuming: true,
            sees_absent: true,
        }
    }

    /// Turns the check into a lookahead that leaves the cursor in place.
    pub fn non_consuming(mut self) -> Self {
        self.consuming = false;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T: Subject> Clone for FnCheck<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            check: Arc::clone(&self.check),
            consuming: self.consuming,
            sees_absent: self.sees_absent,
        }
    }
}

impl<T: Subject> fmt::Debug for FnCheck<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCheck")
            .field("label", &self.label)
            .field("consuming", &self.consuming)
            .field("sees_absent", &self.sees_absent)
            .finish()
    }
}

impl<T: Subject> Predicate<T> for FnCheck<T> {
    fn is_consuming(&self) -> bool {
        self.consuming
    }

    fn perform(&self, subject: Option<&T>, frame: &mut VariableFrame<T>) -> Outcome {
        match subject {
            None if !self.sees_absent => Outcome::exhausted(),
            _ if (self.check)(subject, frame) => Outcome::Pass,
            Some(subject) => Outcome::fail(format!("{} rejected {subject:?}", self.label)),
            None => Outcome::fail(format!("{} rejected end of sequence", self.label)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::Value;

    #[test]
    fn fn_check_when_closure_rejects_then_reason_names_label() {
        let even = FnCheck::new("even", |value: &Value, _frame: &mut VariableFrame<Value>| {
            matches!(value, Value::Int(n) if n % 2 == 0)
        });
        let mut frame = VariableFrame::new();

        assert!(even.perform(Some(&Value::Int(4)), &mut frame).is_pass());
        assert_eq!(
            even.perform(Some(&Value::Int(3)), &mut frame).reason(),
            Some("even rejected Int(3)")
        );
    }

    #[test]
    fn fn_check_when_built_with_absent_then_runs_past_the_end() {
        let at_end = FnCheck::with_absent("at end", |value: Option<&Value>, _: &mut VariableFrame<Value>| {
            value.is_none()
        });
        let mut frame = VariableFrame::new();

        assert!(at_end.perform(None, &mut frame).is_pass());
        assert_eq!(
            at_end.perform(Some(&Value::Int(1)), &mut frame).reason(),
            Some("at end rejected Int(1)")
        );
    }

    #[test]
    fn fn_check_when_element_only_then_absent_is_exhausted() {
        let any = FnCheck::new("any", |_: &Value, _: &mut VariableFrame<Value>| true);
        let mut frame = VariableFrame::new();
        assert_eq!(any.perform(None, &mut frame), Outcome::exhausted());
    }

    #[test]
    fn fn_check_when_non_consuming_then_reports_it() {
        let any = FnCheck::new("any", |_: &Value, _: &mut VariableFrame<Value>| true);
        assert!(any.is_consuming());
        assert!(!any.non_consuming().is_consuming());
    }
}
