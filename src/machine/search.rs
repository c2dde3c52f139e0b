use smallvec::{SmallVec, smallvec};
use std::sync::Arc;

use super::report::FailureTracker;
use super::state::{RangeCounters, SearchState};
use super::{MatchReport, SearchError, SearchResult, SearchStats};
use crate::grammar::{Descriptor, GrammarResult, validate_all};
use crate::graph::{CompiledGraph, Link, Node, NodeId, ScratchArena, compile_graph, materialize_range};
use crate::predicate::EXHAUSTED_REASON;
use crate::subject::{Schema, Subject};
use crate::variable::VariableFrame;

const SEARCH_STACK_CAPACITY: usize = 64;

/// Knobs for a single search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Accept only when the whole sequence was consumed.
    pub consume_all: bool,
    /// Maximum number of popped states before giving up.
    pub step_budget: Option<usize>,
    /// Emit a trace event per search step.
    pub debug: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            consume_all: true,
            step_budget: None,
            debug: false,
        }
    }
}

struct Transition {
    target: Link,
    /// Range left by taking this edge; its counter is dropped from the branch.
    leaves: Option<NodeId>,
}

impl Transition {
    fn to(target: Link) -> Self {
        Self {
            target,
            leaves: None,
        }
    }
}

struct Step {
    consumed: bool,
    next: SmallVec<[Transition; 2]>,
    failure: Option<String>,
}

impl Step {
    fn dead(failure: String) -> Self {
        Self {
            consumed: false,
            next: SmallVec::new(),
            failure: Some(failure),
        }
    }
}

/// Backtracking matcher over a compiled grammar.
///
/// The compiled graph is never mutated by a search, so one machine can serve
/// any number of `run` calls.
#[derive(Debug)]
pub struct EvaluationMachine<T: Subject> {
    graph: CompiledGraph<T>,
}

impl<T: Subject> EvaluationMachine<T> {
    pub fn new(descriptors: &[Descriptor<T>]) -> GrammarResult<Self> {
        Self::with_schema(descriptors, None)
    }

    pub fn with_schema(descriptors: &[Descriptor<T>], schema: Option<&Schema>) -> GrammarResult<Self> {
        if let Some(schema) = schema {
            validate_all(descriptors, schema)?;
        }
        let graph = compile_graph(descriptors)?;
        Ok(Self { graph })
    }

    pub fn graph(&self) -> &CompiledGraph<T> {
        &self.graph
    }

    /// Runs with default settings except for `consume_all`.
    pub fn check(&self, sequence: &[T], consume_all: bool) -> SearchResult<MatchReport> {
        self.run(
            sequence,
            SearchSettings {
                consume_all,
                ..SearchSettings::default()
            },
        )
    }

    #[tracing::instrument(level = "trace", skip(self, sequence), fields(len = sequence.len() as u64, consume_all = settings.consume_all))]
    pub fn run(&self, sequence: &[T], settings: SearchSettings) -> SearchResult<MatchReport> {
        let mut scratch = ScratchArena::new(self.graph.arena());
        let mut stack: Vec<SearchState<T>> = Vec::with_capacity(SEARCH_STACK_CAPACITY);
        let mut tracker = FailureTracker::default();
        let mut stats = SearchStats::default();

        stack.push(SearchState::initial(self.graph.start()));
        stats.record_push(stack.len());

        while let Some(state) = stack.pop() {
            stats.record_step();
            if let Some(budget) = settings.step_budget {
                if stats.steps > budget {
                    tracing::event!(
                        tracing::Level::DEBUG,
                        budget = budget as u64,
                        furthest_index = tracker.furthest_index() as u64,
                        "search budget exceeded"
                    );
                    return Err(SearchError::BudgetExceeded {
                        budget,
                        furthest_index: tracker.furthest_index(),
                    });
                }
            }

            tracker.reach(state.index);

            let SearchState {
                node,
                index,
                mut frame,
                mut counters,
            } = state;

            let step = evaluate(
                &mut scratch,
                node,
                sequence.get(index),
                index,
                &mut frame,
                &mut counters,
                &mut stats,
            );
            let new_index = if step.consumed { index + 1 } else { index };

            if settings.debug {
                tracing::event!(
                    tracing::Level::TRACE,
                    node = %node,
                    index = index as u64,
                    next = step.next.len() as u64,
                    failure = step.failure.as_deref(),
                    "search step"
                );
            }

            if step.next.is_empty() {
                tracker.dead_end(index, step.failure);
                continue;
            }

            let mut remaining = step.next.len();
            for transition in step.next {
                remaining -= 1;
                let next = match transition.target {
                    Link::Final => {
                        if !settings.consume_all || new_index == sequence.len() {
                            let report = MatchReport {
                                matched: true,
                                details: tracker.finish(),
                                stats,
                            };
                            tracing::event!(
                                tracing::Level::DEBUG,
                                matched = true,
                                end_index = new_index as u64,
                                steps = stats.steps as u64,
                                "search finished"
                            );
                            return Ok(report);
                        }
                        tracker.unconsumed(new_index, sequence.len() - new_index);
                        continue;
                    }
                    Link::Node(next) => next,
                };

                // the last branch inherits the state, earlier ones get copies
                let (mut branch_frame, mut branch_counters) = if remaining == 0 {
                    (std::mem::take(&mut frame), std::mem::take(&mut counters))
                } else {
                    stats.record_fork();
                    (frame.fork(), counters.clone())
                };
                if let Some(manager) = transition.leaves {
                    branch_counters.release(manager);
                }
                branch_frame.commit();

                stack.push(SearchState {
                    node: next,
                    index: new_index,
                    frame: branch_frame,
                    counters: branch_counters,
                });
                stats.record_push(stack.len());
            }
        }

        let details = tracker.finish();
        tracing::event!(
            tracing::Level::DEBUG,
            matched = false,
            furthest_index = details.furthest_index as u64,
            reason = details.reason.as_deref(),
            steps = stats.steps as u64,
            "search finished"
        );
        Ok(MatchReport {
            matched: false,
            details,
            stats,
        })
    }
}

fn evaluate<T: Subject>(
    scratch: &mut ScratchArena<'_, T>,
    node: NodeId,
    subject: Option<&T>,
    index: usize,
    frame: &mut VariableFrame<T>,
    counters: &mut RangeCounters<T>,
    stats: &mut SearchStats,
) -> Step {
    let Some(current) = scratch.get(node) else {
        return Step::dead(format!("node {node} is not part of the graph"));
    };

    match current {
        Node::Action { predicate, forward } => {
            let outcome = predicate.perform(subject, frame);
            let consumed = predicate.is_consuming();
            match outcome.reason() {
                Some(reason) => Step::dead(reason.to_string()),
                None if consumed && subject.is_none() => Step::dead(EXHAUSTED_REASON.to_string()),
                None => Step {
                    consumed,
                    next: smallvec![Transition::to(*forward)],
                    failure: None,
                },
            }
        }
        Node::Range { range, forward } => {
            let range = Arc::clone(range);
            let outer = *forward;
            let manager = materialize_range(scratch, &*range, outer);
            counters.enter(manager, index, frame);
            stats.record_range_entry();
            Step {
                consumed: false,
                next: smallvec![Transition::to(Link::Node(manager))],
                failure: None,
            }
        }
        Node::Manager(manager) => {
            let manager_node = *manager;
            let (visits, progressed) = counters.visit(node, index, frame);
            let decision = manager_node.decide(visits, progressed);

            let mut next = SmallVec::new();
            if decision.reenter {
                next.push(Transition::to(manager_node.inner));
            }
            if decision.exit {
                next.push(Transition {
                    target: manager_node.outer,
                    leaves: Some(node),
                });
            }

            let failure = next.is_empty().then(|| {
                format!(
                    "range visit count requirement not met (min {}, max {}, visits {})",
                    manager_node.min,
                    manager_node
                        .max
                        .map_or_else(|| "unbounded".to_string(), |max| max.to_string()),
                    visits.saturating_sub(1)
                )
            });

            Step {
                consumed: false,
                next,
                failure,
            }
        }
    }
}
