use crate::interpreter::error::{ConversionError, Result};
use crate::interpreter::registry::Registry;
use log::trace;

/// Cuts a normalized expression into lexemes using greedy longest-match.
///
/// Yields one lexeme at a time so that each can be classified and consumed
/// before the next one is cut. After the first error the lexer yields nothing more.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    registry: &'a Registry,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, registry: &'a Registry) -> Self {
        Lexer {
            input,
            position: 0,
            registry,
        }
    }

    /// Finds the longest lexeme starting at the current position.
    ///
    /// A digit run is consumed in one pass. Operator candidates grow one character
    /// at a time for as long as they could still become a symbol. The longer of the
    /// two matches is the one cut.
    fn next_lexeme(&mut self) -> Result<&'a str> {
        let rest = &self.input[self.position..];
        let digits = rest
            .find(|character: char| !character.is_ascii_digit())
            .unwrap_or(rest.len());
        let mut matched_length = if digits > 0 { Some(digits) } else { None };

        for end in rest
            .char_indices()
            .map(|(index, character)| index + character.len_utf8())
        {
            let candidate = &rest[..end];
            if !self.registry.is_operator_prefix(candidate) {
                break;
            }
            if self.registry.find_operator(candidate).is_some() {
                matched_length = matched_length.max(Some(end));
            }
        }

        match matched_length {
            Some(length) => self.finalize(length),
            None => Err(ConversionError::Tokenization {
                position: self.char_position(),
                remainder: rest.to_string(),
            }),
        }
    }

    /// Emits the next `length` bytes as a lexeme and moves past them.
    fn finalize(&mut self, length: usize) -> Result<&'a str> {
        if length == 0 {
            return Err(ConversionError::UnsupportedOperation {
                position: self.char_position(),
            });
        }
        let lexeme = &self.input[self.position..self.position + length];
        trace!("cut lexeme {:?} at byte {}", lexeme, self.position);
        self.position += length;
        Ok(lexeme)
    }

    fn char_position(&self) -> usize {
        self.input[..self.position].chars().count()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.input.len() {
            return None;
        }
        let lexeme = self.next_lexeme();
        if lexeme.is_err() {
            self.position = self.input.len();
        }
        Some(lexeme)
    }
}

/// Splits a normalized expression into all of its lexemes.
///
/// # Examples
///
/// ```
/// # use rpn_converter::interpreter::error::Result;
/// # fn main() -> Result<()> {
/// use rpn_converter::interpreter::lexer::tokenize;
/// use rpn_converter::interpreter::registry::Registry;
///
/// let lexemes = tokenize("sin(12)", Registry::standard())?;
/// assert_eq!(lexemes, vec!["sin", "(", "12", ")"]);
/// # Ok(()) }
/// ```
pub fn tokenize<'a>(expression: &'a str, registry: &'a Registry) -> Result<Vec<&'a str>> {
    Lexer::new(expression, registry).collect()
}
