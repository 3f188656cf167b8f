use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DELIMITER: &str = "/";
pub const DEFAULT_DELIMITERS: &str = "./";

/// Controls how a template is tokenized and how its pattern is synthesized.
///
/// Two templates compare equal only when their text and every field here match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOptions {
    /// Letter case must match exactly when set.
    pub case_sensitive: bool,
    /// When unset, one trailing delimiter is tolerated at the end of a match.
    pub strict: bool,
    /// When unset, the pattern matches a prefix followed by a delimiter or an end marker.
    pub match_end: bool,
    /// Joiner for repeated parameters that have no prefix character of their own.
    pub delimiter: String,
    /// Extra strings accepted as the end of a match besides end of input.
    pub ends_with: Option<Vec<String>>,
    /// Characters recognized as a parameter prefix when they directly precede it.
    pub delimiters: String,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            strict: false,
            match_end: true,
            delimiter: DEFAULT_DELIMITER.to_string(),
            ends_with: None,
            delimiters: DEFAULT_DELIMITERS.to_string(),
        }
    }
}

impl TemplateOptions {
    pub fn builder() -> TemplateOptionsBuilder {
        TemplateOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.delimiter.is_empty() {
            return Err(OptionsError::EmptyDelimiter);
        }
        if let Some(index) = self
            .ends_with
            .as_ref()
            .and_then(|ends| ends.iter().position(|end| end.is_empty()))
        {
            return Err(OptionsError::EmptyTerminator { index });
        }
        Ok(())
    }

    pub(crate) fn is_delimiter_char(&self, ch: char) -> bool {
        self.delimiters.contains(ch)
    }
}

#[derive(Debug, Default, Clone)]
pub struct TemplateOptionsBuilder {
    options: TemplateOptions,
}

impl TemplateOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn strict(mut self, value: bool) -> Self {
        self.options.strict = value;
        self
    }

    pub fn match_end(mut self, value: bool) -> Self {
        self.options.match_end = value;
        self
    }

    pub fn delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.options.delimiter = delimiter.into();
        self
    }

    pub fn ends_with<I, S>(mut self, ends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.ends_with = Some(ends.into_iter().map(Into::into).collect());
        self
    }

    pub fn delimiters<S: Into<String>>(mut self, delimiters: S) -> Self {
        self.options.delimiters = delimiters.into();
        self
    }

    pub fn build(self) -> Result<TemplateOptions, OptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
    #[error("end marker at index {index} must not be empty")]
    EmptyTerminator { index: usize },
}
