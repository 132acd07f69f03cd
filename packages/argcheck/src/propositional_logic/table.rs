use std::fmt::Display;

use colored::Colorize;

use crate::markdown::Markdown;

use super::argument::ArgumentCheck;

pub const VALID_VERDICT: &str = "Valid conclusion. All truth table values line up.";
pub const INVALID_VERDICT: &str = "Invalid conclusion. Invalid truth table values are labelled.";
pub const MISMATCH_LABEL: &str = "Invalid!";

impl ArgumentCheck {
    pub fn verdict(&self) -> &'static str {
        if self.valid {
            VALID_VERDICT
        } else {
            INVALID_VERDICT
        }
    }

    /// One line per row: the variables, the premise and the conclusion as
    /// `T`/`F`, each followed by a space, and a label on disagreeing rows.
    pub fn plain(&self) -> PlainTable<'_> {
        PlainTable(self)
    }

    /// A Markdown table with disagreeing rows highlighted.
    pub fn markdown(&self) -> MarkdownTable<'_> {
        MarkdownTable(self)
    }
}

pub struct PlainTable<'a>(&'a ArgumentCheck);

impl Display for PlainTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.0.rows {
            for value in row.values.iter().chain([&row.premise, &row.conclusion]) {
                write!(f, "{value} ")?;
            }

            if row.is_mismatch() {
                write!(f, "{MISMATCH_LABEL}")?;
            }

            writeln!(f)?;
        }

        writeln!(f, "{}", self.0.verdict())
    }
}

pub struct MarkdownTable<'a>(&'a ArgumentCheck);

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Display for MarkdownTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let check = self.0;

        let headers = check
            .variables
            .0
            .iter()
            .map(|variable| variable.to_string())
            .chain([check.premise.clone(), check.conclusion.clone()])
            .collect::<Vec<_>>();

        for header in &headers {
            write!(f, "|{}", escape_cell(header).as_str().blue().markdown())?;
        }
        writeln!(f, "|")?;

        for _ in &headers {
            write!(f, "|:-:")?;
        }
        writeln!(f, "|")?;

        for row in &check.rows {
            for value in row.values.iter().chain([&row.premise, &row.conclusion]) {
                let cell = value.to_string();
                let cell = if row.is_mismatch() {
                    cell.as_str().red().markdown()
                } else {
                    cell
                };

                write!(f, "|{cell}")?;
            }
            writeln!(f, "|")?;
        }

        writeln!(f)?;

        let verdict = if check.valid {
            check.verdict().green()
        } else {
            check.verdict().red()
        };
        writeln!(f, "{}", verdict.markdown())
    }
}
