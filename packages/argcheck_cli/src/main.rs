use std::io::{self, Write};

use anyhow::Context;
use argcheck::{
    error::FormulaResult,
    explanation::{DiscardedExplanation, Explanation},
    propositional_logic::argument::Argument,
};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, OutputFormat, EXAMPLE_CONCLUSION, EXAMPLE_PREMISE},
    input::read_formula,
};

mod cli;
mod input;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let (premise, conclusion) = formulas(&cli)?;
    debug!(%premise, %conclusion, "read argument");

    run(
        &cli,
        &premise,
        &conclusion,
        &mut io::stdout().lock(),
        &mut io::stderr(),
    )
}

/// Checks the argument and writes the report to `output`. Explanations go to
/// `diagnostics` so that the report stays machine-readable.
fn run(
    cli: &Cli,
    premise: &str,
    conclusion: &str,
    output: &mut impl Write,
    diagnostics: &mut impl Write,
) -> anyhow::Result<()> {
    let argument = parse_argument(cli, premise, conclusion, diagnostics)?
        .with_context(|| format!("failed to parse the argument \"{premise}\" ⊨ \"{conclusion}\""))?;

    let check = if cli.parallel {
        argument.check_parallel()
    } else {
        argument.check()
    }
    .with_context(|| format!("failed to evaluate {argument}"))?;

    match cli.format {
        OutputFormat::Plain => write!(output, "{}", check.plain())?,
        OutputFormat::Markdown => write!(output, "{}", check.markdown())?,
        OutputFormat::Json => writeln!(output, "{}", serde_json::to_string_pretty(&check)?)?,
    }

    Ok(())
}

fn formulas(cli: &Cli) -> anyhow::Result<(String, String)> {
    if cli.example {
        return Ok((EXAMPLE_PREMISE.to_owned(), EXAMPLE_CONCLUSION.to_owned()));
    }

    let mut input = io::stdin().lock();
    let mut prompt = io::stderr();

    let premise = match &cli.premise {
        Some(premise) => premise.clone(),
        None => read_formula("Premise", &mut input, &mut prompt)?,
    };
    let conclusion = match &cli.conclusion {
        Some(conclusion) => conclusion.clone(),
        None => read_formula("Conclusion", &mut input, &mut prompt)?,
    };

    Ok((premise, conclusion))
}

fn parse_argument(
    cli: &Cli,
    premise: &str,
    conclusion: &str,
    diagnostics: &mut impl Write,
) -> io::Result<FormulaResult<Argument>> {
    if !cli.explain {
        return Ok(Argument::parse(premise, conclusion, &mut DiscardedExplanation));
    }

    let mut explanation = Explanation::new("Checking the argument");
    let argument = Argument::parse(premise, conclusion, &mut explanation);
    writeln!(diagnostics, "{explanation}")?;

    Ok(argument)
}
