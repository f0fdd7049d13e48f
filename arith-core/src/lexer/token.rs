use std::fmt::Display;

use crate::utils::prelude::SrcSpan;

/// Text carried by the token that closes every token sequence.
pub const END_OF_INPUT: &str = "EndOfFile";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Null,
    Number,
    Identifier,
    // `-` at the very start of the source
    UnaryOperator,

    // Keywords
    Let,

    // Operators and grouping
    BinaryOperator,
    // Standalone `=`, reserved for assignment
    Equals,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Semicolon,

    EndOfInput,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Let | TokenKind::Null)
    }

    /// Short description used in parse error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Null => "the keyword `null`",
            TokenKind::Number => "a Number",
            TokenKind::Identifier => "an Identifier",
            TokenKind::UnaryOperator => "a unary operator",
            TokenKind::Let => "the keyword `let`",
            TokenKind::BinaryOperator => "a binary operator",
            TokenKind::Equals => "`=`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenBrace => "`{`",
            TokenKind::CloseBrace => "`}`",
            TokenKind::Semicolon => "`;`",
            TokenKind::EndOfInput => "the end of input",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

pub fn str_to_keyword(word: &str) -> Option<TokenKind> {
    Some(match word {
        "let" => TokenKind::Let,
        "null" => TokenKind::Null,
        _ => return None
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SrcSpan,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SrcSpan) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn end_of_input(at: u32) -> Self {
        Self::new(TokenKind::EndOfInput, END_OF_INPUT, SrcSpan::point(at))
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// How the token reads in "Found ..." messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Number => format!("the Number `{}`", self.text),
            TokenKind::Identifier => format!("the Identifier `{}`", self.text),
            TokenKind::BinaryOperator | TokenKind::UnaryOperator => format!("the operator `{}`", self.text),
            kind => kind.describe().to_string(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?}) at {}", self.kind, self.text, self.location)
    }
}
