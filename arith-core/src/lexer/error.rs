use std::fmt::Display;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorType {
    UnrecognizedCharacter { ch: char },
}

/// A character the tokenizer could not classify. Never fatal: the character
/// is skipped and scanning continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnrecognizedCharacter { .. } => {
                ("Don't know what to do with this character", vec![])
            },
        }
    }
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.error {
            LexicalErrorType::UnrecognizedCharacter { ch } => write!(
                f,
                "Unrecognized character '{ch}' at position {}",
                self.location.start
            ),
        }
    }
}
