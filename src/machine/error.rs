use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("search budget of {budget} steps exceeded (furthest index {furthest_index})")]
    BudgetExceeded { budget: usize, furthest_index: usize },
}

pub type SearchResult<T> = Result<T, SearchError>;
