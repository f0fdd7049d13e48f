use std::{sync::Arc, thread};

use arith_core::{
    evaluate, parse, run, tokenize,
    eval::prelude::{EvalError, Value},
    lexer::prelude::TokenKind,
    parser::prelude::{Expression, NodeKind},
    utils::prelude::{Error, VectorWarningEmitterIO, WarningEmitter},
};

#[test]
fn tokenize_never_returns_an_empty_sequence() {
    for input in ["", " ", "@", "12 34", "((", "let x = null;"] {
        let tokens = tokenize(input);

        assert!(!tokens.is_empty());
        assert_eq!(
            tokens.iter().filter(|token| token.is(TokenKind::EndOfInput)).count(),
            1,
            "{input:?}"
        );
        assert!(tokens.last().is_some_and(|token| token.is(TokenKind::EndOfInput)));
    }
}

#[test]
fn parse_then_evaluate() -> Result<(), Box<dyn std::error::Error>> {
    let cases = [
        ("3 + 2", Value::Number { value: 5.0 }),
        ("5 - 3", Value::Number { value: 2.0 }),
        ("(3 + 2) * 4", Value::Number { value: 20.0 }),
        ("5 > 2", Value::Boolean { value: true }),
        ("3 == 3", Value::Boolean { value: true }),
        ("8 - 3 - 2", Value::Number { value: 3.0 }),
    ];

    for (input, expected) in cases {
        let tree = parse(input)?;
        assert_eq!(evaluate(&tree)?, expected, "{input:?}");
    }

    Ok(())
}

#[test]
fn failures_surface_as_values() -> Result<(), Box<dyn std::error::Error>> {
    assert!(matches!(evaluate(&parse("5 / 0")?), Err(EvalError::DivisionByZero { .. })));
    assert!(parse("(42").is_err());

    let ident = parse("myVar")?;
    assert!(matches!(ident, Expression::Identifier(_)));
    assert!(matches!(
        evaluate(&ident),
        Err(EvalError::UnsupportedConstruct { kind: NodeKind::Identifier, .. })
    ));

    Ok(())
}

#[test]
fn independent_expressions_evaluate_on_separate_threads() {
    let handles = (1..=8)
        .map(|n| thread::spawn(move || {
            let warnings = VectorWarningEmitterIO::new();
            let emitter = WarningEmitter::new(Arc::new(warnings.clone()));

            let value = run(&format!("{n} * {n} ? + 1"), &emitter);

            (n, value, warnings.take().len())
        }))
        .collect::<Vec<_>>();

    for handle in handles {
        let (n, value, warnings) = handle.join().expect("worker panicked");

        assert_eq!(value, Ok(Value::Number { value: (n * n + 1) as f64 }));
        assert_eq!(warnings, 1);
    }
}

#[test]
fn run_reports_which_stage_failed() {
    assert!(matches!(run("1 +", &WarningEmitter::null()), Err(Error::Parse { .. })));
    assert!(matches!(run("null + x", &WarningEmitter::null()), Err(Error::Eval { .. })));
}
