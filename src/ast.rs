use crate::builder::Builder;
use crate::error::Result;
use crate::params::Params;

/// Top-level parsed token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text, copied verbatim. Never contains `:`.
    Literal(&'a str),
    /// Placeholder name without the leading `:`
    Param(&'a str),
}

/// A parsed template: the ordered tokens of its source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> Template<'a> {
    pub(crate) fn new(source: &'a str, tokens: Vec<Token<'a>>) -> Self {
        Self { source, tokens }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Distinct placeholder names, in order of first occurrence.
    pub fn params(&self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = Vec::new();
        for token in &self.tokens {
            if let Token::Param(name) = *token {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute `params` into this template.
    pub fn build(&self, params: &Params) -> Result<String> {
        Builder::new(params).build(self)
    }
}
