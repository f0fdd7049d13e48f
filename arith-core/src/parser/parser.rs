use std::path::PathBuf;

use crate::{
    lexer::prelude::{char_offsets, Lexer, Token, TokenKind},
    utils::prelude::{LexWarningEmitter, SrcSpan, WarningEmitter, INPUT_NAME}
};
use super::error::{ParseError, ParseErrorType};
use super::ast::{BinaryOperator, Expression};

pub trait Parse<T: Iterator<Item = Token>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError>;
}

/// Deepest parenthesis nesting accepted before parsing gives up. Sized so
/// the recursive descent fits a default 2 MiB thread stack.
pub const MAX_NESTING: usize = 128;

pub struct Parser<T: Iterator<Item = Token>> {
    pub current_token: Option<Token>,

    tokens: T,
    nesting: usize,
}

impl<T: Iterator<Item = Token>> Parser<T> {
    pub fn new(input: T) -> Self {
        let mut parser = Self {
            current_token: None,

            tokens: input,
            nesting: 0,
        };

        parser.step();

        parser
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    /// Advances the cursor, returning the token it was on.
    pub fn next_token(&mut self) -> Option<Token> {
        std::mem::replace(&mut self.current_token, self.tokens.next())
    }

    pub fn current_location(&self) -> SrcSpan {
        self.current_token.as_ref()
            .map(|token| token.location)
            .unwrap_or_default()
    }

    /// The operator under the cursor, if it belongs to the `precedence` tier.
    pub fn current_operator(&self, precedence: Precedence) -> Option<BinaryOperator> {
        match &self.current_token {
            Some(token) if token.is(TokenKind::BinaryOperator) => {
                BinaryOperator::from_literal(&token.text)
                    .filter(|operator| operator.precedence() == precedence)
            },
            _ => None
        }
    }

    /// Parses the first complete expression. Tokens after it are ignored.
    pub fn parse(&mut self) -> Result<Expression, ParseError> {
        let expression = Expression::parse(self, None)?;

        if let Some(token) = self.current_token.as_ref().filter(|token| !token.is(TokenKind::EndOfInput)) {
            log::debug!("ignoring input from {} at {}", token.describe(), token.location);
        }

        Ok(expression)
    }

    /// Called on every `(`. Fails once more than [`MAX_NESTING`] groups are open.
    pub fn open_group(&mut self, location: SrcSpan) -> Result<(), ParseError> {
        if self.nesting >= MAX_NESTING {
            return parse_error(ParseErrorType::NestingTooDeep { limit: MAX_NESTING }, location);
        }

        self.nesting += 1;

        Ok(())
    }

    pub fn close_group(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    pub fn expect_one(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        match self.current_token.take() {
            Some(token) if token.is(kind) => {
                self.step();
                Ok(token)
            },
            Some(token) => {
                let span = token.location;
                self.current_token = Some(token.clone());

                parse_error(
                    ParseErrorType::unexpected(token, vec![kind.describe().to_string()]),
                    span
                )
            },
            None => parse_error(
                ParseErrorType::UnexpectedEof { expected: vec![kind.describe().to_string()] },
                SrcSpan::default()
            )
        }
    }

    pub fn expect_close_paren(&mut self) -> Result<Token, ParseError> {
        match self.expect_one(TokenKind::CloseParen) {
            Ok(token) => Ok(token),
            Err(err) => {
                let found = self.current_token.clone()
                    .unwrap_or_else(|| Token::end_of_input(err.span.start));

                parse_error(ParseErrorType::UnclosedParen { found }, err.span)
            }
        }
    }
}

/// Grammar tiers, loosest binding first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Comparison,
    Sum,
    Product,
    Primary
}

impl Precedence {
    /// The tier operands of this tier are parsed at.
    pub fn tighter(self) -> Self {
        match self {
            Self::Comparison => Self::Sum,
            Self::Sum => Self::Product,
            Self::Product | Self::Primary => Self::Primary,
        }
    }
}

impl From<&BinaryOperator> for Precedence {
    fn from(value: &BinaryOperator) -> Self {
        match value {
            BinaryOperator::LessThan | BinaryOperator::GreaterThan |
            BinaryOperator::LessThanOrEqual | BinaryOperator::GreaterThanOrEqual |
            BinaryOperator::Equal | BinaryOperator::NotEqual => Self::Comparison,
            BinaryOperator::Plus | BinaryOperator::Minus => Self::Sum,
            BinaryOperator::Mult | BinaryOperator::Div | BinaryOperator::Mod => Self::Product,
        }
    }
}

/// Tokenizes and parses `src`, sending skipped characters to the `log` facade.
pub fn parse(src: &str) -> Result<Expression, ParseError> {
    parse_with_emitter(src, &WarningEmitter::log())
}

pub fn parse_with_emitter(src: &str, emitter: &WarningEmitter) -> Result<Expression, ParseError> {
    parse_named(PathBuf::from(INPUT_NAME), src, emitter)
}

pub fn parse_named(path: PathBuf, src: &str, emitter: &WarningEmitter) -> Result<Expression, ParseError> {
    let warnings = LexWarningEmitter::new(path, src.to_string(), emitter.clone());
    let lexer = Lexer::new(char_offsets(src), &warnings);
    let mut parser = Parser::new(lexer);

    let expression = parser.parse()?;

    log::debug!("parsed `{src}` into {expression}");

    Ok(expression)
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
