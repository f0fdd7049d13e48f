pub mod lexer;
pub mod parser;
pub mod eval;
pub mod utils;

use std::path::PathBuf;

pub use crate::{
    eval::prelude::{evaluate, Value},
    lexer::prelude::tokenize,
    parser::prelude::parse,
};
use crate::{
    parser::prelude::{parse_named, Expression},
    utils::prelude::{Error, WarningEmitter, INPUT_NAME},
};

/// Runs the whole pipeline over one line of input.
pub fn run(src: &str, warnings: &WarningEmitter) -> Result<Value, Error> {
    run_named(PathBuf::from(INPUT_NAME), src, warnings)
}

pub fn run_named(path: PathBuf, src: &str, warnings: &WarningEmitter) -> Result<Value, Error> {
    run_inspecting(path, src, warnings, |_| {})
}

/// Like [`run_named`], but shows the parsed tree to `inspect` before it is
/// evaluated.
pub fn run_inspecting(
    path: PathBuf,
    src: &str,
    warnings: &WarningEmitter,
    inspect: impl FnOnce(&Expression)
) -> Result<Value, Error> {
    let expression = match parse_named(path.clone(), src, warnings) {
        Ok(expression) => expression,
        Err(error) => return Err(Error::Parse { path, src: src.to_string(), error })
    };

    inspect(&expression);

    match evaluate(&expression) {
        Ok(value) => {
            log::debug!("evaluated `{src}` to {value} ({})", value.value_type());

            Ok(value)
        },
        Err(error) => Err(Error::Eval { path, src: src.to_string(), error })
    }
}
