use regex::Regex;
use std::collections::HashMap;

use super::{KeyList, ParameterToken, PatternResult, Token, build_regex, synthesize};
use crate::options::TemplateOptions;

pub type TemplateParams = HashMap<String, String>;

/// Synthesized pattern compiled once, paired with its capture keys.
#[derive(Debug, Clone)]
pub struct TemplateMatcher {
    regex: Regex,
    keys: KeyList,
}

impl TemplateMatcher {
    pub fn new(tokens: &[Token], options: &TemplateOptions) -> PatternResult<Self> {
        let synthesized = synthesize(tokens, options);
        let regex = build_regex(&synthesized.source, options)?;
        Ok(Self {
            regex,
            keys: synthesized.keys,
        })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn keys(&self) -> &[ParameterToken] {
        &self.keys
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    pub fn extract(&self, path: &str) -> TemplateParams {
        self.extract_with(path, str::to_string)
    }

    /// Maps each participating capture through `decode`; optional keys that did
    /// not participate bind an empty string. A non-matching path yields no params.
    #[tracing::instrument(level = "trace", skip(self, path, decode), fields(path_len = path.len() as u64))]
    pub fn extract_with<F>(&self, path: &str, decode: F) -> TemplateParams
    where
        F: Fn(&str) -> String,
    {
        let Some(caps) = self.regex.captures(path) else {
            return TemplateParams::new();
        };

        let mut params = TemplateParams::with_capacity(self.keys.len());
        for (index, key) in self.keys.iter().enumerate() {
            match caps.get(index + 1) {
                Some(value) => {
                    params.insert(key.name.clone(), decode(value.as_str()));
                }
                None if key.is_optional() => {
                    params.insert(key.name.clone(), String::new());
                }
                None => {}
            }
        }
        params
    }
}
