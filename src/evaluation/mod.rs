mod errors;
mod options;
mod service;

pub use errors::{EvaluationError, EvaluationResult};
pub use options::{EvaluationOptions, EvaluationOptionsBuilder, OptionsError};
pub use service::Evaluation;
