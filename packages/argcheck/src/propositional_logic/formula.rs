use std::{fmt::Display, str::FromStr};

use colored::Colorize;

use crate::{
    error::{FormulaError, FormulaResult},
    explanation::{DiscardedExplanation, Explain},
};

use super::{
    evaluate::{Evaluate, Interpretation, TruthValue},
    tokenizer::tokenize,
    types::{PostfixSequence, TokenSequence, VariableSet},
};

/// A formula that has been tokenized and converted to postfix once, ready to
/// be evaluated under any number of interpretations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    source: String,
    tokens: TokenSequence,
    variables: VariableSet,
    postfix: PostfixSequence,
}

impl Formula {
    pub fn parse(input: &str, explanation: &mut impl Explain) -> FormulaResult<Formula> {
        explanation.with_subexplanation(
            || format!("Parsing {}", input.blue()),
            |explanation| {
                let tokens = tokenize(input);
                explanation.step(|| format!("Tokens: {}", tokens.to_string().cyan()));

                let variables = tokens.get_variables();
                explanation.step(|| format!("Variables: {}", variables.to_string().cyan()));

                let postfix = PostfixSequence::from_infix(&tokens, explanation)?;

                Ok(Formula {
                    source: input.to_owned(),
                    tokens,
                    variables,
                    postfix,
                })
            },
        )
    }

    /// The text the formula was parsed from, unchanged.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    /// Variables in order of first occurrence.
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    pub fn postfix(&self) -> &PostfixSequence {
        &self.postfix
    }
}

impl Evaluate for Formula {
    fn evaluate(&self, interpretation: &Interpretation) -> FormulaResult<TruthValue> {
        self.postfix.evaluate(interpretation)
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Formula::parse(input, &mut DiscardedExplanation)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source.trim())
    }
}

#[cfg(test)]
mod tests {
    use crate::explanation::Explanation;

    use super::*;

    #[test]
    fn variables_keep_first_occurrence_order() {
        let formula = "(R ^ Q) v (P ^ R)".parse::<Formula>().unwrap();
        assert_eq!(formula.variables().to_string(), "{R, Q, P}");
    }

    #[test]
    fn variables_are_case_sensitive() {
        let formula = "p ^ P ^ p".parse::<Formula>().unwrap();
        assert_eq!(formula.variables().to_string(), "{p, P}");
    }

    #[test]
    fn conversion_errors_surface_from_parse() {
        assert_eq!(
            "(P ^ Q".parse::<Formula>(),
            Err(FormulaError::ParenMismatch)
        );
    }

    #[test]
    fn an_empty_formula_parses_but_cannot_be_evaluated() {
        let formula = "  ".parse::<Formula>().unwrap();

        assert!(formula.tokens().is_empty());
        assert_eq!(
            formula.evaluate(&Interpretation::default()),
            Err(FormulaError::EmptyExpression)
        );
    }

    #[test]
    fn parsing_is_explained() {
        let mut explanation = Explanation::new("test");
        Formula::parse("!P", &mut explanation).unwrap();

        let parsing = explanation.subexplanations().next().unwrap();
        let steps = parsing.steps().collect::<Vec<_>>();

        assert!(steps[0].contains("Tokens"));
        assert!(steps[1].contains("Variables"));
        assert_eq!(parsing.subexplanations().count(), 1);
    }
}
