use thiserror::Error;

use crate::{parser::prelude::NodeKind, utils::prelude::SrcSpan};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero is not allowed")]
    DivisionByZero {
        location: SrcSpan
    },
    #[error("`{kind}` nodes cannot be evaluated yet")]
    UnsupportedConstruct {
        kind: NodeKind,
        location: SrcSpan
    },
}

impl EvalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self {
            EvalError::DivisionByZero { .. } => ("Right operand is zero", vec![]),
            EvalError::UnsupportedConstruct { kind: NodeKind::Identifier, .. } => (
                "Identifier used here",
                vec!["There are no variables to look identifiers up in.".to_string()]
            ),
            EvalError::UnsupportedConstruct { .. } => ("Not supported by the evaluator", vec![]),
        }
    }

    pub fn location(&self) -> SrcSpan {
        match self {
            EvalError::DivisionByZero { location }
            | EvalError::UnsupportedConstruct { location, .. } => *location,
        }
    }
}
