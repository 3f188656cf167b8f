use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::{ParameterToken, Quantifier, Token};
use crate::options::TemplateOptions;

const GROUP_ESCAPED: usize = 1;
const GROUP_NAME: usize = 2;
const GROUP_CAPTURE: usize = 3;
const GROUP_UNNAMED: usize = 4;
const GROUP_MODIFIER: usize = 5;

// escape | :name(capture)? | (unnamed) , then an optional modifier
static META_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\\.)|(?::(\w+)(?:\(((?:\\.|[^\\()])+)\))?|\(((?:\\.|[^\\()])+)\))([+*?])?")
        .expect("template meta-grammar should compile")
});

/// Splits a template into literal runs and parameter descriptors, left to right.
#[tracing::instrument(level = "trace", skip(options), fields(template = %template))]
pub fn tokenize(template: &str, options: &TemplateOptions) -> Vec<Token> {
    let mut lexer = Lexer::new(template, options);
    for caps in META_GRAMMAR.captures_iter(template) {
        lexer.accept(&caps);
    }
    lexer.finish()
}

pub fn default_pattern(delimiter: &str) -> String {
    format!("[^{}]+?", regex::escape(delimiter))
}

struct Lexer<'a> {
    template: &'a str,
    options: &'a TemplateOptions,
    tokens: Vec<Token>,
    pending: String,
    last_escaped: bool,
    cursor: usize,
    next_index: usize,
}

impl<'a> Lexer<'a> {
    fn new(template: &'a str, options: &'a TemplateOptions) -> Self {
        Self {
            template,
            options,
            tokens: Vec::new(),
            pending: String::new(),
            last_escaped: false,
            cursor: 0,
            next_index: 0,
        }
    }

    fn accept(&mut self, caps: &Captures<'_>) {
        let whole = caps.get_match();
        let template = self.template;
        self.push_text(&template[self.cursor..whole.start()]);
        self.cursor = whole.end();

        if let Some(escaped) = caps.get(GROUP_ESCAPED) {
            self.pending.push_str(&escaped.as_str()['\\'.len_utf8()..]);
            self.last_escaped = true;
            return;
        }

        let prefix = self.take_prefix();
        self.flush_literal();

        let next = template[self.cursor..].chars().next();
        let partial = matches!((prefix, next), (Some(p), Some(n)) if p != n);

        let name = match caps.get(GROUP_NAME) {
            Some(name) => name.as_str().to_string(),
            None => {
                let index = self.next_index;
                self.next_index += 1;
                index.to_string()
            }
        };

        let prefix = prefix.map(String::from).unwrap_or_default();
        let delimiter = if prefix.is_empty() {
            self.options.delimiter.clone()
        } else {
            prefix.clone()
        };
        let pattern = caps
            .get(GROUP_CAPTURE)
            .or_else(|| caps.get(GROUP_UNNAMED))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| default_pattern(&delimiter));
        let quantifier = Quantifier::from_modifier(caps.get(GROUP_MODIFIER).map(|m| m.as_str()));

        self.tokens.push(Token::Parameter(ParameterToken {
            name,
            prefix,
            delimiter,
            quantifier,
            partial,
            pattern,
        }));
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.pending.push_str(text);
        self.last_escaped = false;
    }

    // An escaped character is literal content, never a prefix.
    fn take_prefix(&mut self) -> Option<char> {
        if self.last_escaped {
            return None;
        }
        let last = self.pending.chars().next_back()?;
        if !self.options.is_delimiter_char(last) {
            return None;
        }
        self.pending.pop();
        Some(last)
    }

    fn flush_literal(&mut self) {
        if !self.pending.is_empty() {
            self.tokens
                .push(Token::Literal(std::mem::take(&mut self.pending)));
        }
        self.last_escaped = false;
    }

    fn finish(mut self) -> Vec<Token> {
        let template = self.template;
        self.push_text(&template[self.cursor..]);
        self.flush_literal();
        self.tokens
    }
}
