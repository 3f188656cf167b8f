//! Path templates such as `/artist/:artistId/album/:albumId` compiled into a
//! matcher that extracts parameters from paths and a renderer that expands
//! parameters back into paths.
//!
//! Template grammar:
//! - `:name` names a parameter, `:name(pattern)` constrains it.
//! - `(pattern)` is an unnamed parameter, numbered `"0"`, `"1"`, ... in order.
//! - A trailing `?` makes a parameter optional, `+` repeats it, `*` does both.
//! - `\x` is the literal character `x`.

pub mod errors;
pub mod expand;
pub mod options;
pub mod pattern;
mod template;

pub use errors::{TemplateError, TemplateResult};
pub use expand::{
    ExpandError, ExpandResult, ParamValue, ParamValues, PathCompiler, decode_component,
    encode_component,
};
pub use options::{OptionsError, TemplateOptions, TemplateOptionsBuilder};
pub use pattern::{PatternError, TemplateParams};
pub use template::PathTemplate;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
