use crate::interpreter::operator::{Operator, OPERATORS};

/// The set of lexemes the converter recognizes.
///
/// Besides the fixed operator symbols, any non-empty run of decimal digits is a lexeme.
/// The lexer and the classifier both read from the same registry, so a lexeme that can
/// be cut can always be classified.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    operators: &'static [Operator],
}

/// The registry holding `+ - * / ^ sin cos ( )`.
pub static STANDARD: Registry = Registry::new(&OPERATORS);

impl Registry {
    pub const fn new(operators: &'static [Operator]) -> Self {
        Registry { operators }
    }

    pub fn standard() -> &'static Registry {
        &STANDARD
    }

    /// Looks up an operator by its exact symbol. The first registered match wins.
    pub fn find_operator(&self, symbol: &str) -> Option<&'static Operator> {
        self.operators
            .iter()
            .find(|operator| operator.symbol == symbol)
    }

    /// Whether `candidate` could still grow into an operator symbol.
    pub fn is_operator_prefix(&self, candidate: &str) -> bool {
        self.operators
            .iter()
            .any(|operator| operator.symbol.starts_with(candidate))
    }
}

pub fn is_digit_run(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|character| character.is_ascii_digit())
}
