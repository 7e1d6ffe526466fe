use std::fmt;
use std::fmt::Formatter;

/// Shorthand for results of the conversion stages.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Everything that can abort a conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Nothing in the registry matches the text at `position`.
    #[error("undefined operation at position {position}: '{remainder}'")]
    Tokenization { position: usize, remainder: String },

    /// A lexeme of length zero was about to be emitted.
    #[error("unsupported operation at position {position}")]
    UnsupportedOperation { position: usize },

    #[error("brackets problem: {0}")]
    BracketMismatch(BracketProblem),

    /// An internal invariant was broken. Not caused by bad input.
    #[error("unexpected error: {0}")]
    FatalInternal(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketProblem {
    /// A `)` arrived without a matching `(` on the stack.
    Unopened,
    /// A `(` was still on the stack when the input ran out.
    Unclosed,
}

impl fmt::Display for BracketProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BracketProblem::Unopened => write!(f, "')' has no matching '('"),
            BracketProblem::Unclosed => write!(f, "'(' is never closed"),
        }
    }
}
