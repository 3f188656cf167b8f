use crate::options::OptionsError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type TemplateResult<T> = Result<T, TemplateError>;
