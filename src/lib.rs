//! Build paths from `:param` templates.
//!
//! A template is literal text with placeholders written as `:` followed by one
//! or more of `[A-Za-z0-9_]`. The name ends at the first character outside that
//! class, so `/file/:hash.tar.gz` declares `hash` and keeps `.tar.gz` literal.
//!
//! Building is strict: every placeholder needs a value and every supplied value
//! must be used by some placeholder.
//!
//! ```rust
//! use snowurl::{build, Error, Params};
//!
//! let params = Params::new().with("id", 123);
//! assert_eq!(build("/user/:id", &params).unwrap(), "/user/123");
//!
//! let params = Params::new().with("id", 1).with("foo", "bar");
//! assert!(matches!(build("/user/:id", &params), Err(Error::UnknownParam { .. })));
//! ```

pub mod ast;
pub mod builder;
pub mod error;
pub mod params;
pub mod parser;

pub use ast::{Template, Token};
pub use builder::Builder;
pub use error::{Error, ErrorCode, Result};
pub use params::{ParamValue, Params};
pub use parser::TemplateParser;

/// Parse a template into its tokens
pub fn parse(template: &str) -> Result<Template<'_>> {
    TemplateParser::parse_template(template)
}

/// Parse `template` and substitute `params` into it
pub fn build(template: &str, params: &Params) -> Result<String> {
    parse(template)?.build(params)
}
