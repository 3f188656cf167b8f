use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("missing value for required parameter '{name}'")]
    MissingRequired { name: String },
    #[error("empty list for required parameter '{name}'")]
    EmptyRequired { name: String },
    #[error("parameter '{name}' does not repeat but a list was given")]
    RepeatMismatch { name: String },
    #[error("value '{value}' for parameter '{name}' does not match '{pattern}'")]
    PatternMismatch {
        name: String,
        pattern: String,
        value: String,
    },
}

pub type ExpandResult<T> = Result<T, ExpandError>;
