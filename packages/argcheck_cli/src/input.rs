use std::io::{BufRead, Write};

use anyhow::{bail, Context};

/// Prompts for one formula and reads it as a single line.
pub fn read_formula(
    name: &str,
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> anyhow::Result<String> {
    write!(prompt, "{name}: ")?;
    prompt.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("failed to read the {}", name.to_lowercase()))?;

    if read == 0 {
        bail!("no {} given before the end of input", name.to_lowercase());
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
