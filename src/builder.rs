use std::collections::HashSet;
use std::fmt::Write;

use crate::ast::{Template, Token};
use crate::error::{Error, Result};
use crate::params::{ParamValue, Params};

/// Resolves a template's placeholders against a set of params.
///
/// Every placeholder must have a value and every param must be used by some
/// placeholder. A builder is consumed by [`Builder::build`].
pub struct Builder<'p> {
    params: &'p Params,
    used: HashSet<&'p str>,
}

impl<'p> Builder<'p> {
    pub fn new(params: &'p Params) -> Self {
        Self {
            params,
            used: HashSet::new(),
        }
    }

    /// Concatenate literals and resolved values in token order
    pub fn build(mut self, template: &Template<'_>) -> Result<String> {
        let result = self.build_tokens(template.tokens());
        match &result {
            Ok(out) => tracing::trace!(template = template.source(), url = %out, "built url"),
            Err(e) => tracing::debug!(
                template = template.source(),
                code = %e.code(),
                error = %e,
                "failed to build url"
            ),
        }
        result
    }

    fn build_tokens(&mut self, tokens: &[Token<'_>]) -> Result<String> {
        let mut out = String::new();
        for token in tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Param(name) => {
                    let value = self.resolve(name)?;
                    // Writing to a String cannot fail.
                    let _ = write!(out, "{value}");
                }
            }
        }

        self.check_unused()?;
        Ok(out)
    }

    /// Look up a placeholder and mark its key as used
    fn resolve(&mut self, name: &str) -> Result<&'p ParamValue> {
        let params = self.params;
        match params.get_key_value(name) {
            Some((key, value)) if !value.is_absent() => {
                self.used.insert(key);
                Ok(value)
            }
            _ => Err(Error::MissingParam {
                name: name.to_owned(),
            }),
        }
    }

    /// Report the first param (in key order) no placeholder referenced
    fn check_unused(&self) -> Result<()> {
        match self.params.keys().find(|key| !self.used.contains(key)) {
            Some(key) => Err(Error::UnknownParam {
                name: key.to_owned(),
            }),
            None => Ok(()),
        }
    }
}
