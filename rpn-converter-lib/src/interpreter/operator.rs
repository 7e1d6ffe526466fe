use std::fmt;
use std::fmt::Formatter;

/// Precedence rank of a token.
///
/// Brackets carry negative sentinels so that they never outrank a real operator
/// sitting on the operator stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Priority {
    OpenBracket = -2,
    CloseBracket = -1,
    Number = 0,
    UnaryFunction = 1,
    AddSub = 2,
    MulDiv = 3,
    Power = 4,
}

impl Priority {
    pub fn rank(&self) -> i8 {
        *self as i8
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// An operator, function or bracket that can appear in an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
    pub symbol: &'static str,
    pub priority: Priority,
    pub associativity: Associativity,
}

impl Operator {
    pub const fn new(
        symbol: &'static str,
        priority: Priority,
        associativity: Associativity,
    ) -> Self {
        Operator {
            symbol,
            priority,
            associativity,
        }
    }

    pub fn is_left_associative(&self) -> bool {
        self.associativity == Associativity::Left
    }

    pub fn is_open_bracket(&self) -> bool {
        self.priority == Priority::OpenBracket
    }

    pub fn is_close_bracket(&self) -> bool {
        self.priority == Priority::CloseBracket
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority)
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.priority.gt(&other.priority)
    }

    /// Whether this operator, sitting on top of the stack, has to be emitted
    /// before `incoming` can be pushed.
    pub(crate) fn yields_to(&self, incoming: &Self) -> bool {
        self.precedence_gt(incoming)
            || (self.precedence_eq(incoming) && incoming.is_left_associative())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Every operator the converter understands, in registration order.
pub static OPERATORS: [Operator; 9] = [
    Operator::new("+", Priority::AddSub, Associativity::Left),
    Operator::new("-", Priority::AddSub, Associativity::Left),
    Operator::new("*", Priority::MulDiv, Associativity::Left),
    Operator::new("/", Priority::MulDiv, Associativity::Left),
    Operator::new("^", Priority::Power, Associativity::Right),
    Operator::new("sin", Priority::UnaryFunction, Associativity::Right),
    Operator::new("cos", Priority::UnaryFunction, Associativity::Right),
    Operator::new("(", Priority::OpenBracket, Associativity::Left),
    Operator::new(")", Priority::CloseBracket, Associativity::Left),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn operator(symbol: &str) -> Operator {
        *OPERATORS
            .iter()
            .find(|operator| operator.symbol == symbol)
            .unwrap()
    }

    #[test]
    fn priorities_are_totally_ordered() {
        assert!(Priority::OpenBracket < Priority::CloseBracket);
        assert!(Priority::CloseBracket < Priority::Number);
        assert!(Priority::Number < Priority::UnaryFunction);
        assert!(Priority::UnaryFunction < Priority::AddSub);
        assert!(Priority::AddSub < Priority::MulDiv);
        assert!(Priority::MulDiv < Priority::Power);
    }

    #[test]
    fn bracket_priorities_are_negative_sentinels() {
        assert_eq!(Priority::OpenBracket.rank(), -2);
        assert_eq!(Priority::CloseBracket.rank(), -1);
        assert_eq!(Priority::Number.rank(), 0);
        assert_eq!(Priority::Power.rank(), 4);
    }

    #[test]
    fn operator_equality_correspond_with_precedence() {
        assert!(operator("*").precedence_eq(&operator("/")))
    }

    #[test]
    fn operator_gt_correspond_with_precedence() {
        assert!(operator("*").precedence_gt(&operator("+")))
    }

    #[test]
    fn only_power_and_functions_are_right_associative() {
        let right: Vec<&str> = OPERATORS
            .iter()
            .filter(|operator| !operator.is_left_associative())
            .map(|operator| operator.symbol)
            .collect();
        assert_eq!(right, vec!["^", "sin", "cos"]);
    }

    #[test]
    fn equal_left_associative_operator_yields_to_incoming() {
        assert!(operator("-").yields_to(&operator("+")))
    }

    #[test]
    fn equal_right_associative_operator_does_not_yield() {
        assert!(!operator("^").yields_to(&operator("^")))
    }

    #[test]
    fn open_bracket_never_yields() {
        for incoming in OPERATORS.iter().filter(|o| !o.is_open_bracket()) {
            assert!(!operator("(").yields_to(incoming), "{}", incoming)
        }
    }

    #[test]
    fn registry_symbols_are_unique() {
        for (index, operator) in OPERATORS.iter().enumerate() {
            assert!(OPERATORS[index + 1..]
                .iter()
                .all(|other| other.symbol != operator.symbol))
        }
    }
}
