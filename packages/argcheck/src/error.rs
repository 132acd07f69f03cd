//! Errors raised while converting or evaluating a formula.

use thiserror::Error;

use crate::propositional_logic::types::{Operator, PropositionalVariable, Token};

pub type FormulaResult<T> = Result<T, FormulaError>;

/// Tokenization never fails, so every variant comes from conversion,
/// evaluation or truth-table enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("mismatched parentheses")]
    ParenMismatch,

    /// A token was asked for its precedence without being an operator.
    #[error("'{token}' is not an operator with a known precedence")]
    InvalidOperator { token: Token },

    #[error("not enough operands for '{operator}'")]
    InsufficientOperands { operator: Operator },

    #[error("too many operands: {count} values left after evaluation")]
    TooManyOperands { count: usize },

    #[error("the formula is empty")]
    EmptyExpression,

    #[error("no truth value assigned to variable '{variable}'")]
    UnknownVariable { variable: PropositionalVariable },

    #[error("{count} variables is more than the {max} a truth table can enumerate")]
    TooManyVariables { count: usize, max: usize },
}
