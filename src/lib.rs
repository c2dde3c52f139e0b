pub mod evaluation;
pub mod grammar;
pub mod graph;
pub mod machine;
pub mod predicate;
pub mod subject;
pub mod variable;

pub use evaluation::{
    Evaluation, EvaluationError, EvaluationOptions, EvaluationOptionsBuilder, EvaluationResult,
    OptionsError,
};
pub use grammar::{Descriptor, GrammarError, GrammarResult, Range};
pub use machine::{
    EvaluationMachine, FailureDetails, MatchReport, SearchError, SearchResult, SearchSettings,
    SearchStats,
};
pub use predicate::{Check, Expected, FnCheck, Outcome, Predicate, SharedPredicate, TextMatch};
pub use subject::{Record, Schema, Subject, Value};
pub use variable::{Bind, Compare, Variable, VariableFrame};
