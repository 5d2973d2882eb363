use pest::{
    Parser,
    error::InputLocation,
    iterators::{Pair, Pairs},
};
use pest_derive::Parser;

use crate::ast::{Template, Token};
use crate::error::{Error, Result};

#[derive(Parser)]
#[grammar = "template.pest"]
pub struct TemplateParser;

impl TemplateParser {
    /// Parse a template into a list of tokens
    pub fn parse_template(input: &str) -> Result<Template<'_>> {
        let mut pairs: Pairs<'_, Rule> =
            TemplateParser::parse(Rule::template, input).map_err(|e| {
                let position = match e.location {
                    InputLocation::Pos(pos) => pos,
                    InputLocation::Span((start, _)) => start,
                };
                Error::InvalidParamDeclaration { position }
            })?;

        let mut tokens = Vec::new();
        if let Some(template) = pairs.next() {
            for pair in template.into_inner() {
                if let Some(token) = Self::parse_token(pair)? {
                    tokens.push(token);
                }
            }
        }

        tracing::trace!(template = input, tokens = tokens.len(), "parsed template");
        Ok(Template::new(input, tokens))
    }

    fn parse_token(pair: Pair<'_, Rule>) -> Result<Option<Token<'_>>> {
        match pair.as_rule() {
            Rule::literal => Ok(Some(Token::Literal(pair.as_str()))),
            Rule::param => {
                // Skip the introducer; the grammar guarantees a non-empty name follows.
                let name = pair
                    .into_inner()
                    .next()
                    .map(|p| p.as_str())
                    .unwrap_or_default();
                Ok(Some(Token::Param(name)))
            }
            Rule::dangling => Err(Error::InvalidParamDeclaration {
                position: pair.as_span().start(),
            }),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token<'_>> {
        TemplateParser::parse_template(input)
            .unwrap()
            .tokens()
            .to_vec()
    }

    #[test]
    fn test_parse_simple_param() {
        assert_eq!(
            tokens("/user/:id"),
            vec![Token::Literal("/user/"), Token::Param("id")]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_parse_literal_only() {
        assert_eq!(
            tokens("/static/file.txt"),
            vec![Token::Literal("/static/file.txt")]
        );
    }

    #[test]
    fn test_param_stops_at_dot() {
        assert_eq!(
            tokens("/file/:hash.tar.gz"),
            vec![
                Token::Literal("/file/"),
                Token::Param("hash"),
                Token::Literal(".tar.gz"),
            ]
        );
    }

    #[test]
    fn test_param_stops_at_first_invalid_char() {
        assert_eq!(
            tokens("/:name-doc+x"),
            vec![
                Token::Literal("/"),
                Token::Param("name"),
                Token::Literal("-doc+x"),
            ]
        );
    }

    #[test]
    fn test_adjacent_params() {
        assert_eq!(
            tokens("/:a-:b"),
            vec![
                Token::Literal("/"),
                Token::Param("a"),
                Token::Literal("-"),
                Token::Param("b"),
            ]
        );
        // Another introducer ends the name immediately.
        assert_eq!(tokens(":a:b"), vec![Token::Param("a"), Token::Param("b")]);
    }

    #[test]
    fn test_name_char_class() {
        assert_eq!(
            tokens("/v/:user_id2/profile"),
            vec![
                Token::Literal("/v/"),
                Token::Param("user_id2"),
                Token::Literal("/profile"),
            ]
        );
        assert_eq!(
            tokens("/user/:UserID"),
            vec![Token::Literal("/user/"), Token::Param("UserID")]
        );
    }

    #[test]
    fn test_leading_param() {
        assert_eq!(
            tokens(":file.name"),
            vec![Token::Param("file"), Token::Literal(".name")]
        );
    }

    #[test]
    fn test_literal_is_maximal() {
        assert_eq!(
            tokens("/a/b/c/:x/d/e"),
            vec![
                Token::Literal("/a/b/c/"),
                Token::Param("x"),
                Token::Literal("/d/e"),
            ]
        );
    }

    #[test]
    fn test_non_ascii_literal() {
        assert_eq!(
            tokens("/café/:id/ünï"),
            vec![
                Token::Literal("/café/"),
                Token::Param("id"),
                Token::Literal("/ünï"),
            ]
        );
    }

    #[test]
    fn test_dangling_introducer_at_end() {
        let err = TemplateParser::parse_template("/user/:").unwrap_err();
        assert_eq!(err, Error::InvalidParamDeclaration { position: 6 });
    }

    #[test]
    fn test_introducer_followed_by_invalid_char() {
        let err = TemplateParser::parse_template("/:-x").unwrap_err();
        assert_eq!(err, Error::InvalidParamDeclaration { position: 1 });

        let err = TemplateParser::parse_template("::id").unwrap_err();
        assert_eq!(err, Error::InvalidParamDeclaration { position: 0 });
    }

    #[test]
    fn test_first_dangling_reported() {
        let err = TemplateParser::parse_template("/:id/:/x/:").unwrap_err();
        assert_eq!(err, Error::InvalidParamDeclaration { position: 5 });
    }

    #[test]
    fn test_source_kept() {
        let template = TemplateParser::parse_template("/user/:id").unwrap();
        assert_eq!(template.source(), "/user/:id");
    }
}
