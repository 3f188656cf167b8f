mod error;
mod lexer;
mod matcher;
mod synthesize;
mod token;

pub use error::{PatternError, PatternResult};
pub use lexer::{default_pattern, tokenize};
pub use matcher::{TemplateMatcher, TemplateParams};
pub use synthesize::{SynthesizedPattern, build_regex, synthesize};
pub use token::{KeyList, ParameterToken, Quantifier, Token};
