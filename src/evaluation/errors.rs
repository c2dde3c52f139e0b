use thiserror::Error;

use super::OptionsError;
use crate::grammar::GrammarError;
use crate::machine::SearchError;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Options(#[from] OptionsError),
}

pub type EvaluationResult<T> = Result<T, EvaluationError>;
