use crate::interpreter::error::{ConversionError, Result};
use crate::interpreter::operator::{Associativity, Operator, Priority};
use crate::interpreter::registry::{is_digit_run, Registry};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A classified lexeme.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Number { digits: String },
    Operator(Operator),
}

impl Token {
    pub fn new_number(digits: impl Into<String>) -> Token {
        Token::Number {
            digits: digits.into(),
        }
    }

    /// The text this token was cut from.
    pub fn lexeme(&self) -> &str {
        match self {
            Token::Number { digits } => digits,
            Token::Operator(operator) => operator.symbol,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Token::Number { .. } => Priority::Number,
            Token::Operator(operator) => operator.priority,
        }
    }

    /// Associativity only exists for operators. Asking a number for it means the
    /// caller has lost track of what it is holding.
    pub fn associativity(&self) -> Result<Associativity> {
        match self {
            Token::Number { digits } => Err(ConversionError::FatalInternal(format!(
                "number {} has no associativity",
                digits
            ))),
            Token::Operator(operator) => Ok(operator.associativity),
        }
    }

    pub fn is_left_associative(&self) -> Result<bool> {
        Ok(self.associativity()? == Associativity::Left)
    }

    pub fn as_operator(&self) -> Option<&Operator> {
        match self {
            Token::Operator(operator) => Some(operator),
            Token::Number { .. } => None,
        }
    }
}

/// Turns a lexeme produced by the lexer into a token.
///
/// Digit runs become numbers, everything else is looked up in the registry.
/// A lexeme the registry does not know means the lexer and the classifier disagree,
/// which is reported as [`ConversionError::FatalInternal`].
pub fn classify(lexeme: &str, registry: &Registry) -> Result<Token> {
    if is_digit_run(lexeme) {
        return Ok(Token::new_number(lexeme));
    }
    registry
        .find_operator(lexeme)
        .map(|operator| Token::Operator(*operator))
        .ok_or_else(|| {
            ConversionError::FatalInternal(format!("unclassifiable lexeme {:?}", lexeme))
        })
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = ConversionError;

    fn from_str(input: &str) -> Result<Token> {
        classify(input, Registry::standard())
    }
}
