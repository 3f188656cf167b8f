use regex::{Regex, RegexBuilder, escape};

use super::{KeyList, ParameterToken, PatternError, PatternResult, Token};
use crate::options::TemplateOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedPattern {
    /// Anchored pattern text.
    pub source: String,
    /// Parameter tokens in capture-group order; key `i` is group `i + 1`.
    pub keys: KeyList,
}

/// Folds tokens into one anchored pattern plus the ordered key list.
///
/// Terminator checks at the end of the pattern consume instead of looking ahead.
/// Nothing follows them, so both forms accept the same inputs and select the
/// same capture groups.
#[tracing::instrument(level = "trace", skip(tokens, options), fields(tokens = tokens.len() as u64))]
pub fn synthesize(tokens: &[Token], options: &TemplateOptions) -> SynthesizedPattern {
    let mut route = String::from("^");
    let mut keys = KeyList::new();
    let mut is_end_delimited = false;
    let last = tokens.len().saturating_sub(1);

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Literal(text) => {
                let Some(tail) = text.chars().next_back() else {
                    continue;
                };
                route.push_str(&escape(text));
                is_end_delimited = index == last && options.is_delimiter_char(tail);
            }
            Token::Parameter(param) => {
                route.push_str(&parameter_to_regex(param));
                keys.push(param.clone());
            }
        }
    }

    push_terminator(&mut route, options, is_end_delimited);

    SynthesizedPattern {
        source: route,
        keys,
    }
}

pub fn build_regex(source: &str, options: &TemplateOptions) -> PatternResult<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(!options.case_sensitive)
        .build()
        .map_err(|err| PatternError::MalformedPattern {
            name: None,
            pattern: source.to_string(),
            reason: err.to_string(),
        })
}

fn parameter_to_regex(param: &ParameterToken) -> String {
    let prefix = escape(&param.prefix);
    let capture = if param.is_repeating() {
        format!(
            "(?:{pattern})(?:{prefix}(?:{pattern}))*",
            pattern = param.pattern
        )
    } else {
        param.pattern.clone()
    };

    match (param.is_optional(), param.partial) {
        (true, true) => format!("{prefix}({capture})?"),
        (true, false) => format!("(?:{prefix}({capture}))?"),
        (false, _) => format!("{prefix}({capture})"),
    }
}

fn push_terminator(route: &mut String, options: &TemplateOptions, is_end_delimited: bool) {
    let delimiter = escape(&options.delimiter);
    let ends = options
        .ends_with
        .as_deref()
        .filter(|ends| !ends.is_empty());

    let mut end_markers: Vec<String> = ends
        .unwrap_or_default()
        .iter()
        .map(|end| escape(end))
        .collect();
    end_markers.push("$".to_string());
    let end_markers = end_markers.join("|");

    if options.match_end {
        if !options.strict {
            route.push_str(&format!("(?:{delimiter})?"));
        }
        if ends.is_some() {
            route.push_str(&format!("(?:{end_markers})"));
        } else {
            route.push('$');
        }
    } else if !is_end_delimited {
        route.push_str(&format!("(?:{delimiter}|{end_markers})"));
    }
}
