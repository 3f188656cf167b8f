mod compiler;
mod encode;
mod error;
mod value;

pub use compiler::PathCompiler;
pub use encode::{decode_component, encode_component};
pub use error::{ExpandError, ExpandResult};
pub use value::{ParamValue, ParamValues};
