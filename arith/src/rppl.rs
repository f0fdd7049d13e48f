use std::path::PathBuf;

use arith_core::{
	parser::prelude::{parse_named, Postfix},
	utils::prelude::{Error, WarningEmitter, INPUT_NAME},
};

use crate::{print_error, repl::read_lines};

pub fn start(warnings: &WarningEmitter) -> std::io::Result<()> {
	read_lines(|input| {
		let path = PathBuf::from(INPUT_NAME);

		match parse_named(path.clone(), input, warnings) {
			Ok(expression) => {
				println!("{expression}");
				println!("postfix: {}", expression.postfix());
			},
			Err(error) => print_error(&Error::Parse { path, src: input.to_string(), error })
		}
	})
}
