use arith_core::{lexer::prelude::tokenize_with_emitter, utils::prelude::WarningEmitter};

use crate::repl::read_lines;

pub fn start(warnings: &WarningEmitter) -> std::io::Result<()> {
	read_lines(|input| {
		for token in tokenize_with_emitter(input, warnings) {
			println!("{:?} {:?} [{}]", token.kind, token.text, token.location);
		}
	})
}
