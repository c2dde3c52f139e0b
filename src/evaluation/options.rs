use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::machine::SearchSettings;
use crate::subject::Schema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOptions {
    /// Accept only matches that consume the whole sequence.
    pub consume_all: bool,
    /// Upper bound on search steps per check; `None` searches exhaustively.
    pub step_budget: Option<usize>,
    /// Emit one trace event per search step.
    pub debug: bool,
    /// Types and attributes descriptors are validated against.
    pub schema: Option<Schema>,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            consume_all: true,
            step_budget: None,
            debug: false,
            schema: None,
        }
    }
}

impl EvaluationOptions {
    pub fn builder() -> EvaluationOptionsBuilder {
        EvaluationOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.step_budget == Some(0) {
            return Err(OptionsError::StepBudgetInvalid { provided: 0 });
        }
        Ok(())
    }

    pub(crate) fn search_settings(&self, consume_all: bool) -> SearchSettings {
        SearchSettings {
            consume_all,
            step_budget: self.step_budget,
            debug: self.debug,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct EvaluationOptionsBuilder {
    options: EvaluationOptions,
}

impl EvaluationOptionsBuilder {
    pub fn consume_all(mut self, value: bool) -> Self {
        self.options.consume_all = value;
        self
    }

    pub fn step_budget(mut self, value: usize) -> Self {
        self.options.step_budget = Some(value);
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn schema(mut self, schema: Schema) -> Self {
        self.options.schema = Some(schema);
        self
    }

    pub fn build(self) -> Result<EvaluationOptions, OptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("step_budget must be at least 1 (got {provided})")]
    StepBudgetInvalid { provided: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_when_defaulted_then_consume_all_is_on() {
        let options = EvaluationOptions::default();
        assert!(options.consume_all);
        assert_eq!(options.step_budget, None);
        assert!(!options.debug);
        assert!(options.schema.is_none());
    }

    #[test]
    fn options_when_budget_is_zero_then_build_fails() {
        let err = EvaluationOptions::builder()
            .step_budget(0)
            .build()
            .expect_err("zero budget should be rejected");
        assert_eq!(err, OptionsError::StepBudgetInvalid { provided: 0 });
    }

    #[test]
    fn options_when_built_then_settings_follow_them() {
        let options = EvaluationOptions::builder()
            .consume_all(false)
            .step_budget(50)
            .debug(true)
            .build()
            .expect("options should build");

        let settings = options.search_settings(true);
        assert!(settings.consume_all);
        assert_eq!(settings.step_budget, Some(50));
        assert!(settings.debug);
    }
}
