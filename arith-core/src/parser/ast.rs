use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{
    lexer::prelude::{Token, TokenKind},
    parser::prelude::{parse_error, Parse, ParseError, ParseErrorType, Parser, Precedence},
    utils::prelude::SrcSpan
};

/// Reverse Polish rendering of a tree.
pub trait Postfix {
    fn postfix(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    NumericLiteral,
    NullLiteral,
    Identifier,
    BinaryExpression,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

// expression -> <comparison>
// comparison -> <additive> { ("<" | ">" | "<=" | ">=" | "==" | "!=") <additive> }
// additive -> <multiplicative> { ("+" | "-") <multiplicative> }
// multiplicative -> <primary> { ("*" | "/" | "%") <primary> }
// primary -> <identifier> | "null" | <number> | "(" <expression> ")"
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    NumericLiteral {
        value: f64,
        location: SrcSpan
    },
    NullLiteral {
        location: SrcSpan
    },
    Identifier(Identifier),
    Binary(BinaryExpression),
}

impl<T: Iterator<Item = Token>> Parse<T> for Expression {
    /// Parses one precedence tier. `None` starts from the loosest one.
    fn parse(
        parser: &mut Parser<T>,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        match precedence.unwrap_or(Precedence::Comparison) {
            tier @ (Precedence::Comparison | Precedence::Sum | Precedence::Product) => {
                let operand = tier.tighter();
                let mut left = Expression::parse(parser, Some(operand))?;

                while let Some(operator) = parser.current_operator(tier) {
                    parser.step();

                    let right = Expression::parse(parser, Some(operand))?;
                    left = Self::Binary(BinaryExpression::new(left, operator, right));
                }

                Ok(left)
            },
            Precedence::Primary => Self::parse_primary(parser),
        }
    }
}

impl Expression {
    fn parse_primary<T: Iterator<Item = Token>>(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let token = match parser.current_token.take() {
            Some(token) => token,
            None => return parse_error(
                ParseErrorType::UnexpectedEof { expected: Self::primary_expected() },
                SrcSpan::default()
            )
        };

        match token.kind {
            TokenKind::Identifier => {
                parser.step();

                Ok(Self::Identifier(Identifier {
                    symbol: token.text,
                    location: token.location
                }))
            },
            TokenKind::Null => {
                parser.step();

                Ok(Self::NullLiteral { location: token.location })
            },
            TokenKind::Number => {
                parser.step();

                // Number tokens are ASCII digit runs, which always parse.
                let value = token.text.parse::<f64>()
                    .expect("Number token holds only ASCII digits");

                Ok(Self::NumericLiteral { value, location: token.location })
            },
            TokenKind::OpenParen => {
                parser.open_group(token.location)?;
                parser.step();

                let expression = Expression::parse(parser, None)?;

                parser.expect_close_paren()?;
                parser.close_group();

                Ok(expression)
            },
            _ => {
                let location = token.location;
                parser.current_token = Some(token.clone());

                parse_error(
                    ParseErrorType::unexpected(token, Self::primary_expected()),
                    location
                )
            }
        }
    }

    fn primary_expected() -> Vec<String> {
        [TokenKind::Number, TokenKind::Identifier, TokenKind::Null, TokenKind::OpenParen]
            .iter()
            .map(|kind| kind.describe().to_string())
            .collect()
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::NumericLiteral { .. } => NodeKind::NumericLiteral,
            Self::NullLiteral { .. } => NodeKind::NullLiteral,
            Self::Identifier(_) => NodeKind::Identifier,
            Self::Binary(_) => NodeKind::BinaryExpression,
        }
    }

    pub fn location(&self) -> SrcSpan {
        match self {
            Self::NumericLiteral { location, .. }
            | Self::NullLiteral { location } => *location,
            Self::Identifier(ident) => ident.location,
            Self::Binary(binary) => binary.location,
        }
    }
}

// Chains like `1 + 1 + ...` nest as deep as they are long, so every walk over
// a tree below uses an explicit stack instead of recursion.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        detach_binary_operands(self, &mut detached);

        while let Some(mut expression) = detached.pop() {
            detach_binary_operands(&mut expression, &mut detached);
        }
    }
}

fn detach_binary_operands(expression: &mut Expression, into: &mut Vec<Expression>) {
    if let Expression::Binary(binary) = expression {
        for operand in [&mut binary.left, &mut binary.right] {
            if matches!(**operand, Expression::Binary(_)) {
                let placeholder = Expression::NullLiteral { location: SrcSpan::default() };
                into.push(std::mem::replace(&mut **operand, placeholder));
            }
        }
    }
}

enum Piece<'a> {
    Node(&'a Expression),
    Binary(&'a BinaryExpression),
    Text(&'static str),
    Operator(BinaryOperator),
}

impl<'a> Piece<'a> {
    fn of(expression: &'a Expression) -> Self {
        match expression {
            Expression::Binary(binary) => Self::Binary(binary),
            leaf => Self::Node(leaf),
        }
    }
}

fn write_leaf(f: &mut Formatter<'_>, leaf: &Expression) -> FmtResult {
    match leaf {
        Expression::NumericLiteral { value, .. } => write!(f, "{value}"),
        Expression::NullLiteral { .. } => write!(f, "null"),
        Expression::Identifier(ident) => write!(f, "{ident}"),
        Expression::Binary(binary) => write_infix(f, Piece::Binary(binary)),
    }
}

fn write_infix(f: &mut Formatter<'_>, root: Piece<'_>) -> FmtResult {
    let mut pending = vec![root];

    while let Some(piece) = pending.pop() {
        match piece {
            Piece::Binary(binary) => pending.extend([
                Piece::Text(")"),
                Piece::of(&binary.right),
                Piece::Operator(binary.operator),
                Piece::of(&binary.left),
                Piece::Text("("),
            ]),
            Piece::Node(leaf) => write_leaf(f, leaf)?,
            Piece::Text(text) => f.write_str(text)?,
            Piece::Operator(operator) => write!(f, " {operator} ")?,
        }
    }

    Ok(())
}

fn postfix_of(root: Piece<'_>) -> String {
    let mut pending = vec![root];
    let mut parts = Vec::new();

    while let Some(piece) = pending.pop() {
        match piece {
            Piece::Binary(binary) => pending.extend([
                Piece::Operator(binary.operator),
                Piece::of(&binary.right),
                Piece::of(&binary.left),
            ]),
            Piece::Node(leaf) => parts.push(leaf.to_string()),
            Piece::Operator(operator) => parts.push(operator.to_string()),
            Piece::Text(text) => parts.push(text.to_string()),
        }
    }

    parts.join(" ")
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write_infix(f, Piece::of(self))
    }
}

impl Postfix for Expression {
    fn postfix(&self) -> String {
        postfix_of(Piece::of(self))
    }
}

// identifier -> <letter> { <letter> | <digit> }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub symbol: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Mult,
    Div,
    Mod,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    Equal,
    NotEqual,
}

impl BinaryOperator {
    pub fn from_literal(literal: &str) -> Option<Self> {
        Some(match literal {
            "+" => Self::Plus,
            "-" => Self::Minus,
            "*" => Self::Mult,
            "/" => Self::Div,
            "%" => Self::Mod,
            "<" => Self::LessThan,
            ">" => Self::GreaterThan,
            "<=" => Self::LessThanOrEqual,
            ">=" => Self::GreaterThanOrEqual,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            _ => return None
        })
    }

    pub fn as_literal(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mult => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }

    pub fn precedence(&self) -> Precedence {
        Precedence::from(self)
    }

    pub fn is_comparison(&self) -> bool {
        self.precedence() == Precedence::Comparison
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}

// binary -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl BinaryExpression {
    pub fn new(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        let location = left.location().merge(right.location());

        Self {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            location
        }
    }
}

impl Display for BinaryExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write_infix(f, Piece::Binary(self))
    }
}

impl Postfix for BinaryExpression {
    fn postfix(&self) -> String {
        postfix_of(Piece::Binary(self))
    }
}
