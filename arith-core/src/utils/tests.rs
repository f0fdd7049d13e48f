use std::{path::PathBuf, sync::Arc};

use crate::{
    run, run_inspecting,
    eval::prelude::{EvalError, Value},
    utils::prelude::{Error, VectorWarningEmitterIO, WarningEmitter},
};

fn collecting_emitter() -> (VectorWarningEmitterIO, WarningEmitter) {
    let warnings = VectorWarningEmitterIO::new();
    let emitter = WarningEmitter::new(Arc::new(warnings.clone()));

    (warnings, emitter)
}

#[test]
fn test_run_returns_value() -> Result<(), Error> {
    let value = run("(3 + 2) * 4", &WarningEmitter::null())?;

    assert_eq!(value, Value::Number { value: 20.0 });

    Ok(())
}

#[test]
fn test_run_inspecting_sees_the_tree_first() -> Result<(), Error> {
    let mut rendered = None;

    let value = run_inspecting(PathBuf::from("calc"), "8 - 3 - 2", &WarningEmitter::null(), |tree| {
        rendered = Some(tree.to_string());
    })?;

    assert_eq!(rendered.as_deref(), Some("((8 - 3) - 2)"));
    assert_eq!(value, Value::Number { value: 3.0 });

    let mut inspected = false;
    let err = run_inspecting(PathBuf::from("calc"), "1 +", &WarningEmitter::null(), |_| inspected = true);

    assert!(!inspected);
    assert!(matches!(err, Err(Error::Parse { path, .. }) if path == PathBuf::from("calc")));

    Ok(())
}

#[test]
fn test_run_wraps_stage_errors() {
    let parse = run("(42", &WarningEmitter::null()).unwrap_err();
    assert!(matches!(parse, Error::Parse { .. }));

    let eval = run("5 / 0", &WarningEmitter::null()).unwrap_err();
    assert!(matches!(eval, Error::Eval { error: EvalError::DivisionByZero { .. }, .. }));
}

#[test]
fn test_parse_error_pretty_output() {
    let err = run("(42", &WarningEmitter::null()).unwrap_err();
    let pretty = err.pretty_string();

    assert!(pretty.contains("Syntax error"), "{pretty}");
    assert!(pretty.contains("Expected closing parenthesis"), "{pretty}");
    assert!(pretty.contains("<input>"), "{pretty}");
}

#[test]
fn test_eval_error_pretty_output() {
    let division = run("5 / 0", &WarningEmitter::null()).unwrap_err().pretty_string();
    assert!(division.contains("Division by zero"), "{division}");
    assert!(division.contains("Right operand is zero"), "{division}");

    let ident = run("myVar", &WarningEmitter::null()).unwrap_err().pretty_string();
    assert!(ident.contains("Unsupported construct `Identifier`"), "{ident}");
}

#[test]
fn test_io_error_has_no_location() {
    let err = Error::from(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
    let diagnostics = err.to_diagnostics();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].location.is_none());
    let pretty = err.pretty_string();
    assert!(pretty.starts_with("error: Standard IO error\n"), "{pretty}");
    assert!(pretty.contains("  = unexpected end of file"), "{pretty}");
}

#[test]
fn test_lexical_warnings_are_counted_and_rendered() -> Result<(), Error> {
    let (warnings, emitter) = collecting_emitter();

    let value = run("1 $+ 2 #", &emitter)?;
    assert_eq!(value, Value::Number { value: 3.0 });
    assert_eq!(emitter.count(), 2);

    let collected = warnings.take();
    assert_eq!(collected.len(), 2);

    let pretty = collected[0].pretty_string();
    assert!(pretty.contains("Unrecognized character"), "{pretty}");
    assert!(pretty.contains("'$' at position 2"), "{pretty}");
    assert!(pretty.contains("hint: The character was skipped."), "{pretty}");

    assert!(warnings.pop().is_none());

    run("@1", &emitter)?;
    warnings.reset();
    assert!(warnings.pop().is_none());

    emitter.reset_count();
    assert_eq!(emitter.count(), 0);

    Ok(())
}
