use std::fmt;
use std::sync::Arc;

use super::{Outcome, Predicate, SharedPredicate};
use crate::grammar::GrammarResult;
use crate::subject::{Schema, Subject};
use crate::variable::VariableFrame;

/// Expected value of one attribute.
#[derive(Debug, Clone)]
pub enum Expected<T: Subject> {
    Equals(T),
    Satisfies(SharedPredicate<T>),
}

/// Checks an element's declared type and attributes.
#[derive(Debug, Clone)]
pub struct Check<T: Subject> {
    required_type: Option<String>,
    attributes: Vec<(String, Expected<T>)>,
}

impl<T: Subject> Check<T> {
    /// Matches any present element.
    pub fn any() -> Self {
        Self {
            required_type: None,
            attributes: Vec::new(),
        }
    }

    pub fn of_type<S: Into<String>>(type_name: S) -> Self {
        Self {
            required_type: Some(type_name.into()),
            attributes: Vec::new(),
        }
    }

    /// Requires the attribute to equal `value`.
    pub fn attr<S: Into<String>, V: Into<T>>(mut self, name: S, value: V) -> Self {
        self.attributes
            .push((name.into(), Expected::Equals(value.into())));
        self
    }

    /// Requires the attribute to satisfy a nested predicate.
    pub fn attr_with<S, P>(mut self, name: S, predicate: P) -> Self
    where
        S: Into<String>,
        P: Predicate<T> + 'static,
    {
        self.attributes
            .push((name.into(), Expected::Satisfies(Arc::new(predicate))));
        self
    }

    pub fn required_type(&self) -> Option<&str> {
        self.required_type.as_deref()
    }

    pub fn attributes(&self) -> &[(String, Expected<T>)] {
        &self.attributes
    }
}

impl<T: Subject> Predicate<T> for Check<T> {
    fn perform(&self, subject: Option<&T>, frame: &mut VariableFrame<T>) -> Outcome {
        let Some(subject) = subject else {
            return Outcome::exhausted();
        };

        if let Some(expected) = self.required_type.as_deref() {
            let actual = subject.type_name();
            if actual != expected {
                return Outcome::fail(format!(
                    "wrong type - expected: {expected}, got: {actual}"
                ));
            }
        }

        for (name, expected) in &self.attributes {
            let Some(actual) = subject.attribute(name) else {
                return Outcome::fail(format!("element has no attribute {name}"));
            };

            match expected {
                Expected::Equals(value) => {
                    if actual.as_ref() != value {
                        return Outcome::fail(format!(
                            "attribute {name} value not matched - expected: {value:?}, got: {:?}",
                            actual.as_ref()
                        ));
                    }
                }
                Expected::Satisfies(nested) => {
                    let outcome = nested.perform(Some(actual.as_ref()), frame);
                    if !outcome.is_pass() {
                        return outcome;
                    }
                }
            }
        }

        Outcome::Pass
    }

    fn validate(&self, schema: &Schema) -> GrammarResult<()> {
        if let Some(type_name) = self.required_type.as_deref() {
            schema.check_type(type_name)?;
            for (name, _) in &self.attributes {
                schema.check_attribute(type_name, name)?;
            }
        }
        for (_, expected) in &self.attributes {
            if let Expected::Satisfies(nested) = expected {
                nested.validate(schema)?;
            }
        }
        Ok(())
    }
}

impl<T: Subject> fmt::Display for Check<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Check({}", self.required_type.as_deref().unwrap_or("any"))?;
        for (name, expected) in &self.attributes {
            match expected {
                Expected::Equals(value) => write!(f, ", {name}={value:?}")?,
                Expected::Satisfies(nested) => write!(f, ", {name}={nested:?}")?,
            }
        }
        write!(f, ")")
    }
}
