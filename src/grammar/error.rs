use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GrammarError {
    #[error("grammar must contain at least one descriptor")]
    EmptyGrammar,
    #[error("range must contain at least one descriptor")]
    EmptyRange,
    #[error("range minimum {min} exceeds maximum {max}")]
    InvertedBounds { min: usize, max: usize },
    #[error("type '{type_name}' is not declared in the schema")]
    UnknownType { type_name: String },
    #[error("attribute '{attribute}' is not declared for type '{type_name}'")]
    UnknownAttribute {
        type_name: String,
        attribute: String,
    },
    #[error("text pattern '{pattern}' is invalid: {reason}")]
    InvalidTextPattern { pattern: String, reason: String },
}

pub type GrammarResult<T> = Result<T, GrammarError>;
