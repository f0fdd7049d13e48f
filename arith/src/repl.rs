use std::{io::Write, path::PathBuf};

use arith_core::{
    run_inspecting,
    eval::prelude::Value,
    utils::prelude::{Error, WarningEmitter, INPUT_NAME},
};

use crate::{cli::print_exiting, print_error};

const PROMPT: &str = "> ";

/// An empty line or `exit` in any case ends the session.
pub fn is_exit_command(input: &str) -> bool {
	input.is_empty() || input.trim().eq_ignore_ascii_case("exit")
}

/// Prompts for lines until the user leaves, handing every other line to
/// `handle`. End of stdin counts as leaving.
pub fn read_lines(mut handle: impl FnMut(&str)) -> std::io::Result<()> {
	let stdin = std::io::stdin();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;
		let read = stdin.read_line(&mut input)?;

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		if read == 0 || is_exit_command(&input) {
			print_exiting();
			return Ok(());
		}

		handle(&input);
	}
}

pub fn evaluate_line(input: &str, warnings: &WarningEmitter, print_ast: bool) -> Result<Value, Error> {
	run_inspecting(PathBuf::from(INPUT_NAME), input, warnings, |expression| {
		if print_ast {
			println!("AST: {expression}");
		}
	})
}

pub fn start(warnings: &WarningEmitter, print_ast: bool) -> std::io::Result<()> {
	println!("\n Arithmetic Operation v{}", env!("CARGO_PKG_VERSION"));

	read_lines(|input| match evaluate_line(input, warnings, print_ast) {
		Ok(value) => println!("Result: {value}"),
		Err(err) => print_error(&err),
	})
}

#[cfg(test)]
mod tests {
	use arith_core::{eval::prelude::Value, utils::prelude::{Error, WarningEmitter}};

	use super::{evaluate_line, is_exit_command};

	#[test]
	fn test_evaluate_line() {
		let warnings = WarningEmitter::null();

		assert_eq!(evaluate_line("(3 + 2) * 4", &warnings, true), Ok(Value::Number { value: 20.0 }));
		assert!(matches!(evaluate_line("(42", &warnings, false), Err(Error::Parse { .. })));
		assert!(matches!(evaluate_line("5 / 0", &warnings, false), Err(Error::Eval { .. })));
	}

	#[test]
	fn test_exit_commands() {
		for input in ["", "exit", "EXIT", "  Exit\t"] {
			assert!(is_exit_command(input), "{input:?}");
		}

		for input in [" ", "exits", "ex it", "3 + 2"] {
			assert!(!is_exit_command(input), "{input:?}");
		}
	}
}
