use parking_lot::RwLock;
use std::sync::Arc;

use super::{EvaluationOptions, EvaluationResult};
use crate::grammar::{Descriptor, GrammarError};
use crate::machine::{EvaluationMachine, FailureDetails, SearchError, SearchStats};
use crate::subject::Subject;

#[derive(Debug)]
struct EvaluationState<T: Subject> {
    descriptors: Vec<Descriptor<T>>,
    machine: Option<Arc<EvaluationMachine<T>>>,
    last_failure: FailureDetails,
    last_stats: SearchStats,
}

impl<T: Subject> EvaluationState<T> {
    fn machine(&mut self, options: &EvaluationOptions) -> EvaluationResult<Arc<EvaluationMachine<T>>> {
        if let Some(machine) = &self.machine {
            return Ok(machine.clone());
        }
        let machine = Arc::new(EvaluationMachine::with_schema(
            &self.descriptors,
            options.schema.as_ref(),
        )?);
        self.machine = Some(machine.clone());
        Ok(machine)
    }
}

/// A grammar ready to be checked against sequences.
///
/// Shareable across threads: checks run on a cached compiled machine and only
/// take the lock to fetch it and to publish diagnostics.
#[derive(Debug)]
pub struct Evaluation<T: Subject> {
    options: EvaluationOptions,
    inner: RwLock<EvaluationState<T>>,
}

impl<T: Subject> Evaluation<T> {
    pub fn new(descriptors: Vec<Descriptor<T>>) -> EvaluationResult<Self> {
        Self::with_options(descriptors, EvaluationOptions::default())
    }

    pub fn with_options(descriptors: Vec<Descriptor<T>>, options: EvaluationOptions) -> EvaluationResult<Self> {
        options.validate()?;
        if descriptors.is_empty() {
            return Err(GrammarError::EmptyGrammar.into());
        }

        let mut state = EvaluationState {
            descriptors,
            machine: None,
            last_failure: FailureDetails::default(),
            last_stats: SearchStats::default(),
        };
        state.machine(&options)?;

        Ok(Self {
            options,
            inner: RwLock::new(state),
        })
    }

    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Adds a descriptor at the end of the grammar. The compiled machine is
    /// rebuilt on the next check.
    pub fn append<D: Into<Descriptor<T>>>(&self, descriptor: D) -> EvaluationResult<()> {
        let descriptor = descriptor.into();
        if let Some(schema) = &self.options.schema {
            descriptor.validate(schema)?;
        }

        let mut guard = self.inner.write();
        guard.descriptors.push(descriptor);
        guard.machine = None;
        Ok(())
    }

    pub fn check(&self, sequence: &[T]) -> EvaluationResult<bool> {
        self.check_with(sequence, self.options.consume_all)
    }

    pub fn check_with(&self, sequence: &[T], consume_all: bool) -> EvaluationResult<bool> {
        let cached = self.inner.read().machine.clone();
        let machine = match cached {
            Some(machine) => machine,
            None => self.inner.write().machine(&self.options)?,
        };

        let outcome = machine.run(sequence, self.options.search_settings(consume_all));

        let mut guard = self.inner.write();
        match outcome {
            Ok(report) => {
                guard.last_failure = report.details;
                guard.last_stats = report.stats;
                Ok(report.matched)
            }
            Err(err) => {
                let SearchError::BudgetExceeded { furthest_index, .. } = &err;
                guard.last_failure = FailureDetails {
                    furthest_index: *furthest_index,
                    reason: Some(err.to_string()),
                };
                Err(err.into())
            }
        }
    }

    /// Furthest index and failure reason of the most recent check.
    pub fn last_failure_details(&self) -> FailureDetails {
        self.inner.read().last_failure.clone()
    }

    pub fn last_stats(&self) -> SearchStats {
        self.inner.read().last_stats
    }

    /// Number of top-level descriptors.
    pub fn len(&self) -> usize {
        self.inner.read().descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().descriptors.is_empty()
    }

    pub fn is_compiled(&self) -> bool {
        self.inner.read().machine.is_some()
    }
}
