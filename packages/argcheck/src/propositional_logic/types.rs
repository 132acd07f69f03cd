use std::fmt::Display;

use derive_more::Deref;
use enum_as_inner::EnumAsInner;
use indexmap::IndexSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::error::{FormulaError, FormulaResult};

/// The letter spelling disjunction. It can never name a variable.
pub const DISJUNCTION_LETTER: char = 'v';

#[derive(
    Debug,
    derive_more::Display,
    Hash,
    PartialEq,
    Eq,
    Clone,
    Copy,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[display("{_0}")]
pub struct PropositionalVariable(pub char);

impl PropositionalVariable {
    /// Single ASCII letters other than the disjunction letter are variables.
    pub fn is_valid_name(name: char) -> bool {
        name.is_ascii_alphabetic() && name != DISJUNCTION_LETTER
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter, strum::Display)]
pub enum Operator {
    #[strum(to_string = "!")]
    Negation,
    #[strum(to_string = "^")]
    Conjunction,
    #[strum(to_string = "v")]
    Disjunction,
    #[strum(to_string = "XOR")]
    ExclusiveDisjunction,
    #[strum(to_string = "->")]
    Implication,
    #[strum(to_string = "<->")]
    Equivalence,
}

impl Operator {
    /// Binding strength, loosest first.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Equivalence => 0,
            Operator::Implication => 1,
            Operator::ExclusiveDisjunction => 2,
            Operator::Disjunction => 3,
            Operator::Conjunction => 4,
            Operator::Negation => 5,
        }
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::Negation)
    }

    /// Applies a binary operator. `left` is the operand that appeared first in
    /// the infix formula. Negation takes one operand and yields `None`.
    pub fn apply(&self, left: bool, right: bool) -> Option<bool> {
        match self {
            Operator::Conjunction => Some(left && right),
            Operator::Disjunction => Some(left || right),
            Operator::ExclusiveDisjunction => Some(left != right),
            Operator::Implication => Some(!left || right),
            Operator::Equivalence => Some(left == right),
            Operator::Negation => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumAsInner)]
pub enum Token {
    Variable(PropositionalVariable),
    Operator(Operator),
    LeftParenthesis,
    RightParenthesis,
}

impl Token {
    pub fn variable(name: char) -> Self {
        Token::Variable(PropositionalVariable(name))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Variable(variable) => write!(f, "{variable}"),
            Token::Operator(operator) => write!(f, "{operator}"),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
        }
    }
}

/// Precedence of an operator token. Anything else has none.
pub fn precedence_of(token: &Token) -> FormulaResult<u8> {
    match token {
        Token::Operator(operator) => Ok(operator.precedence()),
        _ => Err(FormulaError::InvalidOperator { token: *token }),
    }
}

fn write_tokens(f: &mut std::fmt::Formatter<'_>, tokens: &[Token]) -> std::fmt::Result {
    write!(f, "[{}]", tokens.iter().join(", "))
}

/// Tokens of a formula in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct TokenSequence(pub Vec<Token>);

impl TokenSequence {
    pub fn get_variables(&self) -> VariableSet {
        VariableSet(
            self.0
                .iter()
                .filter_map(|token| token.as_variable())
                .filter(|variable| PropositionalVariable::is_valid_name(variable.0))
                .copied()
                .collect(),
        )
    }
}

impl Display for TokenSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_tokens(f, &self.0)
    }
}

/// Tokens in Reverse Polish order. Never contains parentheses when built by
/// [`PostfixSequence::from_infix`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct PostfixSequence(pub(crate) Vec<Token>);

impl PostfixSequence {
    /// Wraps tokens that are already in postfix order.
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        PostfixSequence(tokens.into_iter().collect())
    }
}

impl Display for PostfixSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_tokens(f, &self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableSet(pub IndexSet<PropositionalVariable>);

impl VariableSet {
    /// Variables of both sets, sorted alphabetically. Bit `k` of a truth table
    /// row counter belongs to the `k`-th variable of this ordering.
    pub fn union(&self, other: &VariableSet) -> VariableSet {
        let mut variables = self.0.clone();
        variables.extend(other.0.iter().copied());
        variables.sort();

        VariableSet(variables)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for VariableSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use indexmap::indexset;

    use super::*;

    #[test]
    fn union_is_sorted_and_deduplicated() {
        let left = VariableSet(indexset! { PropositionalVariable('R'), PropositionalVariable('P') });
        let right = VariableSet(indexset! { PropositionalVariable('Q'), PropositionalVariable('P') });

        let union = left.union(&right);

        assert_eq!(
            union.0.iter().map(|v| v.0).collect::<String>(),
            "PQR".to_owned()
        );
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let left = VariableSet(indexset! { PropositionalVariable('a') });
        let right = VariableSet(indexset! { PropositionalVariable('B') });

        assert_eq!(left.union(&right).to_string(), "{B, a}");
    }

    #[test]
    fn precedence_is_only_defined_for_operators() {
        assert_eq!(precedence_of(&Token::Operator(Operator::Implication)), Ok(1));
        assert_eq!(
            precedence_of(&Token::LeftParenthesis),
            Err(FormulaError::InvalidOperator {
                token: Token::LeftParenthesis
            })
        );
    }

    #[test]
    fn only_binary_operators_apply_to_two_operands() {
        assert_eq!(Operator::Negation.apply(true, false), None);
        assert_eq!(Operator::Implication.apply(true, false), Some(false));
        assert_eq!(Operator::Equivalence.apply(false, false), Some(true));
    }

    #[test]
    fn operators_display_their_spelling() {
        let spellings = [
            (Operator::Negation, "!"),
            (Operator::Conjunction, "^"),
            (Operator::Disjunction, "v"),
            (Operator::ExclusiveDisjunction, "XOR"),
            (Operator::Implication, "->"),
            (Operator::Equivalence, "<->"),
        ];

        for (operator, spelling) in spellings {
            assert_eq!(operator.to_string(), spelling);
        }
    }
}
