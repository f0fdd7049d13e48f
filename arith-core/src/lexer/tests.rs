use std::sync::Arc;

use super::prelude::{tokenize_with_emitter, LexicalErrorType, Token, TokenKind, END_OF_INPUT};
use crate::utils::prelude::{SrcSpan, VectorWarningEmitterIO, Warning, WarningEmitter};

fn lex(input: &str) -> (Vec<Token>, Vec<Warning>) {
    let warnings = VectorWarningEmitterIO::new();
    let emitter = WarningEmitter::new(Arc::new(warnings.clone()));

    let tokens = tokenize_with_emitter(input, &emitter);

    (tokens, warnings.take())
}

fn assert_tokens(input: &str, expected: &[(TokenKind, &str)]) {
    let (tokens, _) = lex(input);

    let got = tokens.iter()
        .map(|token| (token.kind, token.text.as_str()))
        .collect::<Vec<(TokenKind, &str)>>();

    assert_eq!(expected, got.as_slice(), "tokens of {input:?}");
}

#[test]
fn test_empty_source() {
    let (tokens, warnings) = lex("");

    assert_eq!(tokens, vec![Token::new(TokenKind::EndOfInput, END_OF_INPUT, SrcSpan::point(0))]);
    assert!(warnings.is_empty());
}

#[test]
fn test_single_character_tokens() {
    assert_tokens("(){};", &[
        (TokenKind::OpenParen, "("),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenBrace, "{"),
        (TokenKind::CloseBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EndOfInput, END_OF_INPUT),
    ]);
}

#[test]
fn test_numbers() {
    assert_tokens("123 456\t007", &[
        (TokenKind::Number, "123"),
        (TokenKind::Number, "456"),
        (TokenKind::Number, "007"),
        (TokenKind::EndOfInput, END_OF_INPUT),
    ]);
}

#[test]
fn test_digit_runs_split_on_anything_else() {
    let (tokens, _) = lex("1 22\n333 4444");

    let numbers = tokens.iter()
        .filter(|token| token.is(TokenKind::Number))
        .count();

    assert_eq!(numbers, 4);
    assert_eq!(tokens.len(), 5);
    assert!(tokens.last().is_some_and(|token| token.is(TokenKind::EndOfInput)));
}

#[test]
fn test_keywords_and_identifiers() {
    assert_tokens("let x; null nullish v2ar", &[
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Null, "null"),
        (TokenKind::Identifier, "nullish"),
        (TokenKind::Identifier, "v2ar"),
        (TokenKind::EndOfInput, END_OF_INPUT),
    ]);

    assert!(TokenKind::Let.is_keyword());
    assert!(TokenKind::Null.is_keyword());
    assert!(!TokenKind::Identifier.is_keyword());
}

#[test]
fn test_identifier_cannot_start_with_digit() {
    assert_tokens("2x", &[
        (TokenKind::Number, "2"),
        (TokenKind::Identifier, "x"),
        (TokenKind::EndOfInput, END_OF_INPUT),
    ]);
}

#[test]
fn test_binary_operators() {
    assert_tokens("42 - 3 * (2 % 1) / 7 + 1", &[
        (TokenKind::Number, "42"),
        (TokenKind::BinaryOperator, "-"),
        (TokenKind::Number, "3"),
        (TokenKind::BinaryOperator, "*"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Number, "2"),
        (TokenKind::BinaryOperator, "%"),
        (TokenKind::Number, "1"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::BinaryOperator, "/"),
        (TokenKind::Number, "7"),
        (TokenKind::BinaryOperator, "+"),
        (TokenKind::Number, "1"),
        (TokenKind::EndOfInput, END_OF_INPUT),
    ]);
}

#[test]
fn test_two_character_operators() {
    assert_tokens("1 <= 2 >= 3 == 4 != 5 < 6 > 7", &[
        (TokenKind::Number, "1"),
        (TokenKind::BinaryOperator, "<="),
        (TokenKind::Number, "2"),
        (TokenKind::BinaryOperator, ">="),
        (TokenKind::Number, "3"),
        (TokenKind::BinaryOperator, "=="),
        (TokenKind::Number, "4"),
        (TokenKind::BinaryOperator, "!="),
        (TokenKind::Number, "5"),
        (TokenKind::BinaryOperator, "<"),
        (TokenKind::Number, "6"),
        (TokenKind::BinaryOperator, ">"),
        (TokenKind::Number, "7"),
        (TokenKind::EndOfInput, END_OF_INPUT),
    ]);
}

#[test]
fn test_any_operator_glues_a_following_suffix() {
    assert_tokens("1+=2", &[
        (TokenKind::Number, "1"),
        (TokenKind::BinaryOperator, "+="),
        (TokenKind::Number, "2"),
        (TokenKind::EndOfInput, END_OF_INPUT),
    ]);
}

#[test]
fn test_standalone_equals() {
    assert_tokens("let a = 5", &[
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "a"),
        (TokenKind::Equals, "="),
        (TokenKind::Number, "5"),
        (TokenKind::EndOfInput, END_OF_INPUT),
    ]);
}

#[test]
fn test_unary_minus_only_at_position_zero() {
    assert_tokens("-5 - -3", &[
        (TokenKind::UnaryOperator, "-"),
        (TokenKind::Number, "5"),
        (TokenKind::BinaryOperator, "-"),
        (TokenKind::BinaryOperator, "-"),
        (TokenKind::Number, "3"),
        (TokenKind::EndOfInput, END_OF_INPUT),
    ]);

    assert_tokens(" -5", &[
        (TokenKind::BinaryOperator, "-"),
        (TokenKind::Number, "5"),
        (TokenKind::EndOfInput, END_OF_INPUT),
    ]);
}

#[test]
fn test_unrecognized_character_is_reported_and_skipped() {
    let (tokens, warnings) = lex("@42;");

    let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<TokenKind>>();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Semicolon, TokenKind::EndOfInput]);

    assert_eq!(warnings.len(), 1);

    let Warning::Lexical { error, .. } = &warnings[0];
    assert_eq!(error.error, LexicalErrorType::UnrecognizedCharacter { ch: '@' });
    assert_eq!(error.location, SrcSpan::from(0, 1));
    assert_eq!(error.to_string(), "Unrecognized character '@' at position 0");
}

#[test]
fn test_lone_bang_and_carriage_return_are_unrecognized() {
    let (tokens, warnings) = lex("1 ! 2\r");

    let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<TokenKind>>();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Number, TokenKind::EndOfInput]);

    let messages = warnings.iter()
        .map(|warning| warning.to_string())
        .collect::<Vec<String>>();

    assert_eq!(messages, vec![
        "Unrecognized character '!' at position 2".to_string(),
        "Unrecognized character '\r' at position 5".to_string(),
    ]);
}

#[test]
fn test_spans() {
    let (tokens, _) = lex("(12 <= ab)");

    let spans = tokens.iter()
        .map(|token| (token.location.start, token.location.end))
        .collect::<Vec<(u32, u32)>>();

    assert_eq!(spans, vec![(0, 1), (1, 3), (4, 6), (7, 9), (9, 10), (10, 10)]);
}

#[test]
fn test_exactly_one_end_of_input() {
    let (tokens, _) = lex("   \n\t  ");

    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is(TokenKind::EndOfInput));
    assert_eq!(tokens[0].location, SrcSpan::point(7));
}
