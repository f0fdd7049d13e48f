use std::fmt::Display;

use crate::{lexer::prelude::{Token, TokenKind}, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    NestingTooDeep {
        limit: usize,
    },
    UnclosedParen {
        found: Token,
    },
    UnexpectedEof {
        expected: Vec<String>,
    },
    UnexpectedToken {
        token: Token,
        expected: Vec<String>,
    },
}

impl ParseErrorType {
    /// `UnexpectedToken`, or `UnexpectedEof` when the token closes the input.
    pub fn unexpected(token: Token, expected: Vec<String>) -> Self {
        match token.kind {
            TokenKind::EndOfInput => Self::UnexpectedEof { expected },
            _ => Self::UnexpectedToken { token, expected },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::NestingTooDeep { limit } => (
                "Parentheses nested too deeply",
                vec![format!("At most {limit} groups may be open at once")]
            ),
            ParseErrorType::UnclosedParen { found } => (
                "Expected closing parenthesis",
                vec![format!("Found {} inside parenthesised expression", found.describe())]
            ),
            ParseErrorType::UnexpectedEof { expected } => {
                let messages = std::iter::once("Expected one of: ".to_string())
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Unexpected end of input", messages)
            },
            ParseErrorType::UnexpectedToken { token, expected } => {
                let messages = std::iter::once(format!("Found {}, expected one of: ", token.describe()))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this", messages)
            },
        }
    }

    /// The token the parser stopped at, when there was one.
    pub fn token(&self) -> Option<&Token> {
        match &self.error {
            ParseErrorType::UnclosedParen { found } => Some(found),
            ParseErrorType::UnexpectedToken { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        match &self.error {
            ParseErrorType::UnexpectedEof { .. } => true,
            ParseErrorType::UnclosedParen { found } => found.is(TokenKind::EndOfInput),
            _ => false,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (message, extra) = self.details();

        write!(f, "{message} at {}", self.span)?;

        if !extra.is_empty() {
            write!(f, ". {}", extra.join(" "))?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}
