use std::{fmt::Display, ops::Not};

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{FormulaError, FormulaResult};

use super::types::{PostfixSequence, PropositionalVariable, Token, VariableSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TruthValue(pub bool);

impl Not for TruthValue {
    type Output = TruthValue;

    fn not(self) -> Self::Output {
        TruthValue(!self.0)
    }
}

impl Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if self.0 { "T" } else { "F" })
    }
}

/// A truth value for every variable in scope: one row of a truth table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretation(pub IndexMap<PropositionalVariable, TruthValue>);

impl Interpretation {
    /// The row selected by `counter`. Bit `k` (least significant first) is the
    /// value of the `k`-th variable of `variables`.
    pub fn from_counter(variables: &VariableSet, counter: u64) -> Self {
        Interpretation(
            variables
                .0
                .iter()
                .enumerate()
                .map(|(bit, &variable)| (variable, TruthValue((counter >> bit) & 1 == 1)))
                .collect(),
        )
    }

    /// Every interpretation of `variables`, from the all-true row (counter
    /// `2^n - 1`) down to the all-false row (counter `0`).
    ///
    /// Callers must keep `variables` below 64 entries.
    pub fn generate_all(variables: &VariableSet) -> impl Iterator<Item = (u64, Interpretation)> + '_ {
        let interpretation_count = 1u64 << variables.len();

        (0..interpretation_count)
            .rev()
            .map(move |counter| (counter, Interpretation::from_counter(variables, counter)))
    }

    pub fn get(&self, variable: &PropositionalVariable) -> FormulaResult<TruthValue> {
        self.0
            .get(variable)
            .copied()
            .ok_or(FormulaError::UnknownVariable {
                variable: *variable,
            })
    }
}

impl Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variable_list = self
            .0
            .iter()
            .map(|(variable, value)| {
                let prefix = if value.0 { "" } else { "¬" };
                format!("{prefix}{variable}")
            })
            .join(", ");

        write!(f, "{{{}}}", variable_list)
    }
}

pub trait Evaluate {
    fn evaluate(&self, interpretation: &Interpretation) -> FormulaResult<TruthValue>;
}

impl Evaluate for PostfixSequence {
    fn evaluate(&self, interpretation: &Interpretation) -> FormulaResult<TruthValue> {
        let tokens = match self.0.as_slice() {
            [] => return Err(FormulaError::EmptyExpression),
            [Token::Variable(variable)] => return interpretation.get(variable),
            tokens => tokens,
        };

        let mut stack: Vec<TruthValue> = Vec::with_capacity(tokens.len());

        for token in tokens {
            match token {
                Token::Variable(variable) => stack.push(interpretation.get(variable)?),
                Token::Operator(operator) if operator.is_unary() => {
                    let value = stack
                        .pop()
                        .ok_or(FormulaError::InsufficientOperands {
                            operator: *operator,
                        })?;

                    stack.push(!value);
                }
                Token::Operator(operator) => {
                    // The operand pushed last is the right-hand side.
                    let (Some(TruthValue(right)), Some(TruthValue(left))) =
                        (stack.pop(), stack.pop())
                    else {
                        return Err(FormulaError::InsufficientOperands {
                            operator: *operator,
                        });
                    };

                    let value = operator.apply(left, right).ok_or(
                        FormulaError::InvalidOperator {
                            token: Token::Operator(*operator),
                        },
                    )?;

                    stack.push(TruthValue(value));
                }
                Token::LeftParenthesis | Token::RightParenthesis => {
                    return Err(FormulaError::ParenMismatch)
                }
            }
        }

        match stack.as_slice() {
            [value] => {
                trace!(postfix = %self, %interpretation, %value, "evaluated");
                Ok(*value)
            }
            [] => Err(FormulaError::EmptyExpression),
            values => Err(FormulaError::TooManyOperands {
                count: values.len(),
            }),
        }
    }
}
