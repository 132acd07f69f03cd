use winnow::{
    combinator::{alt, repeat},
    token::{any, one_of},
    PResult, Parser,
};

use super::types::{Operator, PropositionalVariable, Token, TokenSequence};

/// Splits a formula into tokens. Multi-character connectives are matched
/// greedily; characters that start no token are dropped, so this never fails.
pub fn tokenize(input: &str) -> TokenSequence {
    let mut remaining = input;

    let tokens: Vec<Option<Token>> = repeat(0.., token)
        .parse_next(&mut remaining)
        .unwrap_or_default();

    TokenSequence(tokens.into_iter().flatten().collect())
}

fn token(input: &mut &str) -> PResult<Option<Token>> {
    alt((
        connective.map(|operator| Some(Token::Operator(operator))),
        '('.value(Some(Token::LeftParenthesis)),
        ')'.value(Some(Token::RightParenthesis)),
        propositional_variable.map(|variable| Some(Token::Variable(variable))),
        any.value(None),
    ))
    .parse_next(input)
}

fn connective(input: &mut &str) -> PResult<Operator> {
    alt((
        "->".value(Operator::Implication),
        "XOR".value(Operator::ExclusiveDisjunction),
        "<->".value(Operator::Equivalence),
        '!'.value(Operator::Negation),
        'v'.value(Operator::Disjunction),
        '^'.value(Operator::Conjunction),
    ))
    .parse_next(input)
}

fn propositional_variable(input: &mut &str) -> PResult<PropositionalVariable> {
    one_of(|c: char| PropositionalVariable::is_valid_name(c))
        .map(PropositionalVariable)
        .parse_next(input)
}
