use super::error::{LexicalError, LexicalErrorType};
use super::token::{str_to_keyword, Token, TokenKind};
use std::path::PathBuf;
use crate::utils::prelude::{LexWarningEmitter, SrcSpan, WarningEmitter, INPUT_NAME};

/// Characters that open an operator token.
const OPERATOR_CHARS: &str = "+-*/%<>=";
/// Characters that glue onto an operator to form a two-character one.
const OPERATOR_SUFFIXES: &str = "=<!";

/// Splits a source string into the `(offset, char)` stream the lexer reads.
pub fn char_offsets(src: &str) -> impl Iterator<Item = (u32, char)> + '_ {
	src.char_indices().map(|(i, c)| (i as u32, c))
}

/// Tokenizes `src`, sending skipped characters to the `log` facade.
pub fn tokenize(src: &str) -> Vec<Token> {
	tokenize_with_emitter(src, &WarningEmitter::log())
}

pub fn tokenize_with_emitter(src: &str, emitter: &WarningEmitter) -> Vec<Token> {
	let warnings = LexWarningEmitter::new(
		PathBuf::from(INPUT_NAME),
		src.to_string(),
		emitter.clone()
	);

	let tokens = Lexer::new(char_offsets(src), &warnings).collect::<Vec<Token>>();

	log::debug!("tokenized {} bytes into {} tokens", src.len(), tokens.len());

	tokens
}

/// Single pass scanner with one character of lookahead. Yields tokens up to
/// and including exactly one `EndOfInput`, then stops.
pub struct Lexer<'a, T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,
	finished: bool,

	warnings: &'a LexWarningEmitter,
}

impl<'a, T: Iterator<Item = (u32, char)>> Lexer<'a, T> {
	pub fn new(input: T, warnings: &'a LexWarningEmitter) -> Self {
		let mut lexer = Self {
			position: 0,
			next_position: 0,
			ch: None,
			next_ch: None,
			input,
			finished: false,

			warnings,
		};

		lexer.next_char();
		lexer.next_char();

		lexer
	}

	pub fn next_token(&mut self) -> Token {
		loop {
			let ch = match self.ch {
				Some(ch) => ch,
				None => return Token::end_of_input(self.position),
			};

			return match ch {
				'(' => self.eat_one_char(TokenKind::OpenParen),
				')' => self.eat_one_char(TokenKind::CloseParen),
				'{' => self.eat_one_char(TokenKind::OpenBrace),
				'}' => self.eat_one_char(TokenKind::CloseBrace),
				';' => self.eat_one_char(TokenKind::Semicolon),
				'!' if self.next_ch == Some('=') => self.lex_operator(),
				c if OPERATOR_CHARS.contains(c) => self.lex_operator(),
				'0'..='9' => self.lex_number(),
				c if c.is_alphabetic() => self.lex_word(),
				' ' | '\t' | '\n' => {
					self.next_char();
					continue;
				},
				c => {
					self.skip_unrecognized(c);
					continue;
				}
			};
		}
	}

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		let next = match self.input.next() {
			Some((pos, ch)) => {
				self.position = self.next_position;
				self.next_position = pos;

				Some(ch)
			},
			None => {
				self.position = self.next_position;
				self.next_position += self.next_ch.map_or(0, |ch| ch.len_utf8() as u32);

				None
			}
		};

		self.ch = self.next_ch;
		self.next_ch = next;

		ch
	}

	fn span_from(&self, start: u32) -> SrcSpan {
		SrcSpan::from(start, self.position)
	}

	fn eat_one_char(&mut self, kind: TokenKind) -> Token {
		let start = self.position;
		let text = self.next_char().map(String::from).unwrap_or_default();

		Token::new(kind, text, self.span_from(start))
	}

	fn lex_operator(&mut self) -> Token {
		let start = self.position;
		let mut op = self.next_char().map(String::from).unwrap_or_default();

		// Only a `-` opening the whole source counts as unary.
		if start == 0 && op == "-" {
			return Token::new(TokenKind::UnaryOperator, op, self.span_from(start));
		}

		let kind = match self.ch {
			Some(suffix) if OPERATOR_SUFFIXES.contains(suffix) => {
				op.push(suffix);
				self.next_char();

				TokenKind::BinaryOperator
			},
			_ if op == "=" => TokenKind::Equals,
			_ => TokenKind::BinaryOperator
		};

		Token::new(kind, op, self.span_from(start))
	}

	fn lex_number(&mut self) -> Token {
		let start = self.position;
		let mut digits = String::new();

		while let Some(ch) = self.ch.filter(char::is_ascii_digit) {
			digits.push(ch);
			self.next_char();
		}

		Token::new(TokenKind::Number, digits, self.span_from(start))
	}

	fn lex_word(&mut self) -> Token {
		let start = self.position;
		let mut word = String::new();

		while let Some(ch) = self.ch.filter(|ch| ch.is_alphabetic() || ch.is_ascii_digit()) {
			word.push(ch);
			self.next_char();
		}

		let kind = str_to_keyword(&word).unwrap_or(TokenKind::Identifier);

		Token::new(kind, word, self.span_from(start))
	}

	fn skip_unrecognized(&mut self, ch: char) {
		let start = self.position;
		self.next_char();

		self.warnings.emit(LexicalError {
			error: LexicalErrorType::UnrecognizedCharacter { ch },
			location: self.span_from(start),
		});
	}
}

impl<'a, T: Iterator<Item = (u32, char)>> Iterator for Lexer<'a, T> {
	type Item = Token;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		let token = self.next_token();

		if token.is(TokenKind::EndOfInput) {
			self.finished = true;
		}

		Some(token)
	}
}
