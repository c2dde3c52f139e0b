use regex::Regex;

use super::{Outcome, Predicate};
use crate::grammar::{GrammarError, GrammarResult};
use crate::subject::Subject;
use crate::variable::VariableFrame;

/// Matches an element's textual form against a regular expression.
///
/// The pattern is searched, not anchored; wrap it in `^(?:...)$` for a full match.
#[derive(Debug, Clone)]
pub struct TextMatch {
    pattern: Regex,
}

impl TextMatch {
    pub fn new(pattern: &str) -> GrammarResult<Self> {
        Regex::new(pattern)
            .map(|pattern| Self { pattern })
            .map_err(|err| GrammarError::InvalidTextPattern {
                pattern: pattern.to_string(),
                reason: err.to_string(),
            })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl<T: Subject> Predicate<T> for TextMatch {
    fn perform(&self, subject: Option<&T>, _frame: &mut VariableFrame<T>) -> Outcome {
        let Some(subject) = subject else {
            return Outcome::exhausted();
        };

        match subject.as_text() {
            None => Outcome::fail(format!(
                "element of type {} has no text",
                subject.type_name()
            )),
            Some(text) if self.pattern.is_match(text) => Outcome::Pass,
            Some(text) => Outcome::fail(format!(
                "text {text:?} does not match /{}/",
                self.pattern.as_str()
            )),
        }
    }
}
