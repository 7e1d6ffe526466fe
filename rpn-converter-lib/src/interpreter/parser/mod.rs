pub mod infix_converter;

use crate::interpreter::error::Result;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Reorders the given infix tokens into postfix order.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same tokens in postfix order, with brackets removed.
///
/// # Examples
///
/// ```
/// # use rpn_converter::interpreter::error::Result;
/// # fn main() -> Result<()> {
/// use rpn_converter::interpreter::parser::parse;
/// use rpn_converter::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::new_number("2"),
///     "^".parse()?,
///     Token::new_number("3"),
/// ];
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(postfix_tokens.last().map(Token::lexeme), Some("^"));
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    infix_to_postfix(infix_tokens)
}
