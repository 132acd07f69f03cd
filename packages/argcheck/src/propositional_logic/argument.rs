use std::fmt::Display;

use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    error::{FormulaError, FormulaResult},
    explanation::Explain,
};

use super::{
    evaluate::{Evaluate, Interpretation, TruthValue},
    formula::Formula,
    types::VariableSet,
};

/// Largest number of distinct variables an argument may mention.
pub const MAX_VARIABLES: usize = 26;

/// A premise and a conclusion. The argument is valid when both have the same
/// truth value under every interpretation of their variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub premise: Formula,
    pub conclusion: Formula,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTableRow {
    pub counter: u64,
    /// One value per variable, in the order of [`ArgumentCheck::variables`].
    pub values: Vec<TruthValue>,
    pub premise: TruthValue,
    pub conclusion: TruthValue,
}

impl TruthTableRow {
    pub fn is_mismatch(&self) -> bool {
        self.premise != self.conclusion
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentCheck {
    pub premise: String,
    pub conclusion: String,
    pub variables: VariableSet,
    pub rows: Vec<TruthTableRow>,
    pub valid: bool,
}

impl ArgumentCheck {
    pub fn mismatches(&self) -> impl Iterator<Item = &TruthTableRow> {
        self.rows.iter().filter(|row| row.is_mismatch())
    }
}

impl Argument {
    pub fn new(premise: Formula, conclusion: Formula) -> Self {
        Argument {
            premise,
            conclusion,
        }
    }

    pub fn parse(
        premise: &str,
        conclusion: &str,
        explanation: &mut impl Explain,
    ) -> FormulaResult<Self> {
        explanation.with_subexplanation(
            || format!("Parsing the argument {} ⊨ {}", premise.blue(), conclusion.blue()),
            |explanation| {
                Ok(Argument {
                    premise: Formula::parse(premise, explanation)?,
                    conclusion: Formula::parse(conclusion, explanation)?,
                })
            },
        )
    }

    /// Variables of both formulas, sorted alphabetically.
    pub fn variables(&self) -> VariableSet {
        self.premise.variables().union(self.conclusion.variables())
    }

    fn enumerable_variables(&self) -> FormulaResult<VariableSet> {
        let variables = self.variables();

        if variables.len() > MAX_VARIABLES {
            return Err(FormulaError::TooManyVariables {
                count: variables.len(),
                max: MAX_VARIABLES,
            });
        }

        Ok(variables)
    }

    fn evaluate_row(
        &self,
        counter: u64,
        interpretation: &Interpretation,
    ) -> FormulaResult<TruthTableRow> {
        let row = TruthTableRow {
            counter,
            values: interpretation.0.values().copied().collect(),
            premise: self.premise.evaluate(interpretation)?,
            conclusion: self.conclusion.evaluate(interpretation)?,
        };

        trace!(
            counter,
            %interpretation,
            premise = %row.premise,
            conclusion = %row.conclusion,
            "evaluated truth table row"
        );

        Ok(row)
    }

    fn summarize(&self, variables: VariableSet, rows: Vec<TruthTableRow>) -> ArgumentCheck {
        let valid = rows.iter().all(|row| !row.is_mismatch());

        debug!(
            argument = %self,
            rows = rows.len(),
            valid,
            "checked argument"
        );

        ArgumentCheck {
            premise: self.premise.to_string(),
            conclusion: self.conclusion.to_string(),
            variables,
            rows,
            valid,
        }
    }

    /// Evaluates both formulas on every row of the truth table, from counter
    /// `2^n - 1` down to `0`. The first formula error aborts the check.
    pub fn check(&self) -> FormulaResult<ArgumentCheck> {
        let variables = self.enumerable_variables()?;

        let rows = Interpretation::generate_all(&variables)
            .map(|(counter, interpretation)| self.evaluate_row(counter, &interpretation))
            .collect::<FormulaResult<Vec<_>>>()?;

        Ok(self.summarize(variables, rows))
    }

    /// Same result as [`Argument::check`], with rows evaluated on the rayon
    /// thread pool. Each row builds its own interpretation.
    pub fn check_parallel(&self) -> FormulaResult<ArgumentCheck> {
        let variables = self.enumerable_variables()?;
        let row_count = 1usize << variables.len();

        let rows = (0..row_count)
            .into_par_iter()
            .map(|index| {
                let counter = (row_count - 1 - index) as u64;
                self.evaluate_row(counter, &Interpretation::from_counter(&variables, counter))
            })
            .collect::<FormulaResult<Vec<_>>>()?;

        Ok(self.summarize(variables, rows))
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ⊨ {}", self.premise, self.conclusion)
    }
}
