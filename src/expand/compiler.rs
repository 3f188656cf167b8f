use regex::Regex;

use super::{ExpandError, ExpandResult, ParamValue, ParamValues, encode_component};
use crate::pattern::{ParameterToken, PatternError, PatternResult, Token};

/// Renders a token sequence back into a concrete path.
///
/// Every parameter carries its own `^(?:pattern)$` validator, compiled once, which
/// each encoded value must satisfy.
#[derive(Debug, Clone)]
pub struct PathCompiler {
    steps: Vec<Step>,
}

#[derive(Debug, Clone)]
enum Step {
    Literal(String),
    Parameter {
        token: ParameterToken,
        validator: Regex,
    },
}

impl PathCompiler {
    pub fn new(tokens: &[Token]) -> PatternResult<Self> {
        let steps = tokens
            .iter()
            .map(|token| match token {
                Token::Literal(text) => Ok(Step::Literal(text.clone())),
                Token::Parameter(param) => Ok(Step::Parameter {
                    validator: compile_validator(param)?,
                    token: param.clone(),
                }),
            })
            .collect::<PatternResult<Vec<_>>>()?;
        Ok(Self { steps })
    }

    pub fn render(&self, values: &ParamValues) -> ExpandResult<String> {
        self.render_with(values, encode_component)
    }

    #[tracing::instrument(level = "trace", skip(self, values, encode), fields(values = values.len() as u64))]
    pub fn render_with<F>(&self, values: &ParamValues, encode: F) -> ExpandResult<String>
    where
        F: Fn(&str) -> String,
    {
        let mut path = String::new();

        for step in &self.steps {
            let (token, validator) = match step {
                Step::Literal(text) => {
                    path.push_str(text);
                    continue;
                }
                Step::Parameter { token, validator } => (token, validator),
            };

            match values.get(&token.name) {
                Some(ParamValue::List(items)) => {
                    if !token.is_repeating() {
                        return Err(ExpandError::RepeatMismatch {
                            name: token.name.clone(),
                        });
                    }
                    if items.is_empty() {
                        if token.is_optional() {
                            continue;
                        }
                        return Err(ExpandError::EmptyRequired {
                            name: token.name.clone(),
                        });
                    }
                    for (index, item) in items.iter().enumerate() {
                        let segment = encode_segment(token, validator, item, &encode)?;
                        path.push_str(if index == 0 {
                            &token.prefix
                        } else {
                            &token.delimiter
                        });
                        path.push_str(&segment);
                    }
                }
                Some(ParamValue::Single(value)) => {
                    let segment = encode_segment(token, validator, value, &encode)?;
                    path.push_str(&token.prefix);
                    path.push_str(&segment);
                }
                None if token.is_optional() => {
                    if token.partial {
                        path.push_str(&token.prefix);
                    }
                }
                None => {
                    return Err(ExpandError::MissingRequired {
                        name: token.name.clone(),
                    });
                }
            }
        }

        Ok(path)
    }
}

fn compile_validator(param: &ParameterToken) -> PatternResult<Regex> {
    let source = format!("^(?:{})$", param.pattern);
    Regex::new(&source).map_err(|err| PatternError::MalformedPattern {
        name: Some(param.name.clone()),
        pattern: param.pattern.clone(),
        reason: err.to_string(),
    })
}

fn encode_segment<F>(
    token: &ParameterToken,
    validator: &Regex,
    raw: &str,
    encode: &F,
) -> ExpandResult<String>
where
    F: Fn(&str) -> String,
{
    let encoded = encode(raw);
    if !validator.is_match(&encoded) {
        return Err(ExpandError::PatternMismatch {
            name: token.name.clone(),
            pattern: token.pattern.clone(),
            value: encoded,
        });
    }
    Ok(encoded)
}
