use crate::interpreter::error::{BracketProblem, ConversionError, Result};
use crate::interpreter::operator::Operator;
use crate::interpreter::token::Token;
use log::trace;

/// Incremental shunting-yard conversion from infix to postfix.
///
/// Tokens are fed one at a time with [`ShuntingYard::push`]; [`ShuntingYard::finish`]
/// drains the operator stack and hands back the postfix sequence.
#[derive(Debug, Default)]
pub struct ShuntingYard {
    operators: Vec<Operator>,
    output: Vec<Token>,
}

impl ShuntingYard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) -> Result<()> {
        match token {
            Token::Number { .. } => self.output.push(token),
            Token::Operator(operator) if operator.is_open_bracket() => {
                self.operators.push(operator)
            }
            Token::Operator(operator) if operator.is_close_bracket() => {
                self.parse_closing_bracket()?
            }
            Token::Operator(operator) => self.parse_operator(operator),
        };
        Ok(())
    }

    /// Moves every leftover operator to the output.
    pub fn finish(mut self) -> Result<Vec<Token>> {
        while let Some(operator) = self.operators.pop() {
            if operator.is_open_bracket() {
                return Err(ConversionError::BracketMismatch(BracketProblem::Unclosed));
            }
            self.output.push(Token::Operator(operator));
        }
        Ok(self.output)
    }

    pub fn stack_depth(&self) -> usize {
        self.operators.len()
    }

    fn parse_closing_bracket(&mut self) -> Result<()> {
        loop {
            match self.operators.pop() {
                None => {
                    return Err(ConversionError::BracketMismatch(BracketProblem::Unopened));
                }
                // Discard the open bracket.
                Some(operator) if operator.is_open_bracket() => return Ok(()),
                Some(operator) => self.emit(operator),
            }
        }
    }

    fn parse_operator(&mut self, incoming: Operator) {
        while let Some(&top_of_operator_stack) = self.operators.last() {
            if !top_of_operator_stack.yields_to(&incoming) {
                break;
            }
            self.operators.pop();
            self.emit(top_of_operator_stack);
        }
        trace!("push {} onto operator stack", incoming);
        self.operators.push(incoming);
    }

    fn emit(&mut self, operator: Operator) {
        trace!("pop {} to output", operator);
        self.output.push(Token::Operator(operator));
    }
}

/// Converts a whole infix token sequence to postfix.
pub fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut converter = ShuntingYard::new();
    for token in infix_tokens {
        converter.push(token)?;
    }
    converter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(lexemes: &[&str]) -> Vec<Token> {
        lexemes.iter().map(|lexeme| lexeme.parse().unwrap()).collect()
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 2 + 3
        let infix = tokens(&["2", "+", "3"]);
        let postfix = tokens(&["2", "3", "+"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_higher_precedence_binds_tighter() {
        // 2 + 3 * 4
        let infix = tokens(&["2", "+", "3", "*", "4"]);
        let postfix = tokens(&["2", "3", "4", "*", "+"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_left_associative_evaluates_left_to_right() {
        // 2 - 3 - 4
        let infix = tokens(&["2", "-", "3", "-", "4"]);
        let postfix = tokens(&["2", "3", "-", "4", "-"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_power_is_right_associative() {
        // 2 ^ 3 ^ 4
        let infix = tokens(&["2", "^", "3", "^", "4"]);
        let postfix = tokens(&["2", "3", "4", "^", "^"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_pops_every_yielding_operator_before_push() {
        // 1 ^ 2 * 3 - 4
        let infix = tokens(&["1", "^", "2", "*", "3", "-", "4"]);
        let postfix = tokens(&["1", "2", "^", "3", "*", "4", "-"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = tokens(&["1", "-", "(", "2", "+", "3", ")"]);
        let postfix = tokens(&["1", "2", "3", "+", "-"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_complex_expression() {
        // 1 + 2 * 3 / (4 - 5) ^ 6 ^ 7
        let infix = tokens(&[
            "1", "+", "2", "*", "3", "/", "(", "4", "-", "5", ")", "^", "6", "^", "7",
        ]);
        let postfix = tokens(&[
            "1", "2", "3", "*", "4", "5", "-", "6", "7", "^", "^", "/", "+",
        ]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = tokens(&["1", "+", "(", "(", "2", "+", "3", ")", "*", "4", ")"]);
        let postfix = tokens(&["1", "2", "3", "+", "4", "*", "+"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_function_is_emitted_after_its_argument() {
        // sin(2 + 3)
        let infix = tokens(&["sin", "(", "2", "+", "3", ")"]);
        let postfix = tokens(&["2", "3", "+", "sin"]);

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn balanced_expression_leaves_empty_stack() {
        let mut converter = ShuntingYard::new();
        // ((1 + 2) * 3)
        for token in tokens(&["(", "(", "1", "+", "2", ")", "*", "3", ")"]) {
            converter.push(token).unwrap();
        }

        assert_eq!(converter.stack_depth(), 0);
        let postfix = converter.finish().unwrap();
        assert_eq!(postfix, tokens(&["1", "2", "+", "3", "*"]));
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_should_return_err() {
        // (2 + 3
        let infix = tokens(&["(", "2", "+", "3"]);

        let error = infix_to_postfix(infix).expect_err("Should return Err");

        assert_eq!(
            error,
            ConversionError::BracketMismatch(BracketProblem::Unclosed)
        );
    }

    #[test]
    fn infix_to_postfix_mismatched_parenthesis_should_return_err() {
        // (2 + 3))
        let infix = tokens(&["(", "2", "+", "3", ")", ")"]);

        let error = infix_to_postfix(infix).expect_err("Should return Err");

        assert_eq!(
            error,
            ConversionError::BracketMismatch(BracketProblem::Unopened)
        );
    }
}
