pub mod diagnostic;
pub mod src_span;
pub mod error;
pub mod warning;

/// Name shown in rendered diagnostics when the source has no file behind it.
pub const INPUT_NAME: &str = "<input>";

pub mod prelude {
    pub use super::{
        diagnostic::*,
        src_span::*,
        error::*,
        warning::*,
        INPUT_NAME
    };
}

#[cfg(test)]
mod tests;
