pub mod error;
pub mod lexer;
pub mod normalizer;
pub mod operator;
pub mod parser;
pub mod registry;
pub mod token;

use crate::interpreter::error::Result;
use crate::interpreter::lexer::Lexer;
use crate::interpreter::normalizer::normalize;
use crate::interpreter::parser::infix_converter::ShuntingYard;
use crate::interpreter::registry::Registry;
use crate::interpreter::token::{classify, Token};
use anyhow::Context;
use itertools::Itertools;
use log::debug;
use string_builder::Builder;

/// The outcome of converting one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Every token in the order it was read.
    pub tokens: Vec<Token>,
    /// The same expression in reverse Polish notation.
    pub postfix: Vec<Token>,
}

impl Conversion {
    pub fn tokens_string(&self) -> String {
        tokens_to_string(&self.tokens)
    }

    pub fn postfix_string(&self) -> anyhow::Result<String> {
        postfix_to_string(&self.postfix)
    }
}

/// Converts the given infix expression into reverse Polish notation.
///
/// Whitespace is ignored and letters are case-insensitive.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens that were read and the postfix form of the expression.
///
/// # Examples
///
/// ```
/// use rpn_converter::interpreter::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let conversion = convert("2 + 3 * 4")?;
/// assert_eq!(conversion.tokens_string(), "2, +, 3, *, 4");
/// assert_eq!(conversion.postfix_string()?, "2 3 4 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Conversion> {
    convert_with(expression, Registry::standard())
}

/// Same as [`convert`], but recognizes the lexemes of the given registry.
///
/// Each lexeme is classified and handed to the converter as soon as it is cut,
/// so the first error stops the whole conversion.
pub fn convert_with(expression: &str, registry: &Registry) -> Result<Conversion> {
    let normalized = normalize(expression);
    debug!("normalized {:?} to {:?}", expression, normalized);

    let mut tokens = Vec::new();
    let mut converter = ShuntingYard::new();
    for lexeme in Lexer::new(&normalized, registry) {
        let token = classify(lexeme?, registry)?;
        tokens.push(token.clone());
        converter.push(token)?;
    }
    let postfix = converter.finish()?;

    debug!(
        "converted {} tokens into {} postfix tokens",
        tokens.len(),
        postfix.len()
    );
    Ok(Conversion { tokens, postfix })
}

/// Lists tokens separated by commas.
///
/// # Examples
///
/// ```
/// use rpn_converter::interpreter::tokens_to_string;
/// use rpn_converter::interpreter::token::Token;
///
/// let tokens = vec![Token::new_number("1"), "+".parse().unwrap(), Token::new_number("2")];
/// assert_eq!(tokens_to_string(&tokens), "1, +, 2");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().map(Token::lexeme).join(", ")
}

/// Prints postfix tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use rpn_converter::interpreter::postfix_to_string;
/// use rpn_converter::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::new_number("2"),
///     Token::new_number("3"),
///     "^".parse()?,
/// ];
/// let printed_tokens = postfix_to_string(&tokens)?;
/// assert_eq!(printed_tokens, "2 3 ^");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn postfix_to_string(tokens: &[Token]) -> anyhow::Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.lexeme());
    }

    builder.string().context("Failed to build postfix string")
}
