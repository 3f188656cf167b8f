use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::errors::{TemplateError, TemplateResult};
use crate::expand::{ExpandResult, ParamValues, PathCompiler, decode_component};
use crate::options::TemplateOptions;
use crate::pattern::{ParameterToken, TemplateMatcher, TemplateParams, Token, tokenize};

/// A compiled path template such as `/artist/:artistId/album/:albumId`.
///
/// Compilation happens once in the constructor; `expand` and `extract` only read
/// the compiled state and are safe to call from many threads at once.
///
/// ```
/// use path_template_rs::{PathTemplate, params};
///
/// let template = PathTemplate::new("/user/:id").unwrap();
/// assert_eq!(template.expand(&params! { "id" => 123 }).as_deref(), Some("/user/123"));
/// assert_eq!(template.extract("/user/123")["id"], "123");
/// ```
#[derive(Debug, Clone)]
pub struct PathTemplate {
    template: String,
    options: TemplateOptions,
    tokens: Vec<Token>,
    parameter_names: Vec<String>,
    matcher: TemplateMatcher,
    compiler: PathCompiler,
}

impl PathTemplate {
    pub fn new<S: Into<String>>(template: S) -> TemplateResult<Self> {
        Self::with_options(template, TemplateOptions::default())
    }

    #[tracing::instrument(level = "trace", skip(template, options))]
    pub fn with_options<S: Into<String>>(
        template: S,
        options: TemplateOptions,
    ) -> TemplateResult<Self> {
        let template = template.into();
        options.validate()?;

        let tokens = tokenize(&template, &options);
        let compiler = PathCompiler::new(&tokens)?;
        let matcher = TemplateMatcher::new(&tokens, &options)?;
        let parameter_names = matcher
            .keys()
            .iter()
            .map(|key| key.name.clone())
            .collect::<Vec<_>>();

        tracing::debug!(
            template = %template,
            regex = matcher.regex().as_str(),
            parameters = ?parameter_names,
            "compiled path template"
        );

        Ok(Self {
            template,
            options,
            tokens,
            parameter_names,
            matcher,
            compiler,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }

    /// Parameter names in declaration order; unnamed groups are numbered from `"0"`.
    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn keys(&self) -> &[ParameterToken] {
        self.matcher.keys()
    }

    pub fn regex(&self) -> &Regex {
        self.matcher.regex()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    /// Renders the template, or `None` when any value is missing or invalid.
    /// Use [`PathTemplate::try_expand`] to learn why.
    pub fn expand(&self, values: &ParamValues) -> Option<String> {
        self.collapse(self.try_expand(values))
    }

    pub fn expand_with<F>(&self, values: &ParamValues, encode: F) -> Option<String>
    where
        F: Fn(&str) -> String,
    {
        self.collapse(self.try_expand_with(values, encode))
    }

    pub fn try_expand(&self, values: &ParamValues) -> ExpandResult<String> {
        self.compiler.render(values)
    }

    pub fn try_expand_with<F>(&self, values: &ParamValues, encode: F) -> ExpandResult<String>
    where
        F: Fn(&str) -> String,
    {
        self.compiler.render_with(values, encode)
    }

    pub fn extract(&self, path: &str) -> TemplateParams {
        self.matcher.extract(path)
    }

    /// Like [`PathTemplate::extract`], percent-decoding every value.
    pub fn extract_decoded(&self, path: &str) -> TemplateParams {
        self.matcher.extract_with(path, decode_component)
    }

    fn collapse(&self, result: ExpandResult<String>) -> Option<String> {
        match result {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::debug!(template = %self.template, error = %err, "expansion failed");
                None
            }
        }
    }
}

impl PartialEq for PathTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.template == other.template && self.options == other.options
    }
}

impl Eq for PathTemplate {}

impl Hash for PathTemplate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.template.hash(state);
        self.options.hash(state);
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl FromStr for PathTemplate {
    type Err = TemplateError;

    fn from_str(template: &str) -> Result<Self, Self::Err> {
        Self::new(template)
    }
}

impl TryFrom<&str> for PathTemplate {
    type Error = TemplateError;

    fn try_from(template: &str) -> Result<Self, Self::Error> {
        Self::new(template)
    }
}

impl TryFrom<String> for PathTemplate {
    type Error = TemplateError;

    fn try_from(template: String) -> Result<Self, Self::Error> {
        Self::new(template)
    }
}
