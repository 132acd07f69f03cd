use clap::{Parser, ValueEnum};

/// The argument checked by `--example`.
pub const EXAMPLE_PREMISE: &str = "((P v Q) ^ (Q -> R) XOR (P ^ R)) <-> (R ^ Q)";
pub const EXAMPLE_CONCLUSION: &str = "(P v R)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line of T/F per row, mismatches labelled
    Plain,
    /// A Markdown table with mismatching rows highlighted
    Markdown,
    /// The full check as JSON
    Json,
}

/// Checks whether a conclusion has the same truth value as a premise under
/// every assignment of their variables.
///
/// Connectives: ! (not), ^ (and), v (or), XOR, -> (implies), <-> (iff).
/// Variables are single letters other than v. Formulas that are not given as
/// arguments are read from standard input, one per line.
#[derive(Parser, Debug)]
#[command(name = "argcheck", version, about, long_about)]
pub struct Cli {
    /// Premise formula, e.g. "(P v Q) ^ !R"
    pub premise: Option<String>,

    /// Conclusion formula
    pub conclusion: Option<String>,

    /// Check the built-in example argument
    #[arg(long, conflicts_with_all = ["premise", "conclusion"])]
    pub example: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Evaluate truth table rows on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Print how each formula was tokenized and converted to postfix (to stderr)
    #[arg(long)]
    pub explain: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}
