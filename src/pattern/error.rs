use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error(
        "invalid pattern{} '{pattern}': {reason}",
        .name.as_ref().map(|name| format!(" for parameter '{name}'")).unwrap_or_default()
    )]
    MalformedPattern {
        /// `None` when the synthesized whole-template pattern is at fault.
        name: Option<String>,
        pattern: String,
        reason: String,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
