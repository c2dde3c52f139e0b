mod error;
mod report;
mod search;
mod state;
mod stats;

pub use error::{SearchError, SearchResult};
pub use report::{FailureDetails, MatchReport};
pub use search::{EvaluationMachine, SearchSettings};
pub use stats::SearchStats;
