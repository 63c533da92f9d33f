//! User input utilities for interactive command-line prompts.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Prompts the user for a string input.
///
/// Displays a prompt message and waits for the user to enter text.
/// The input is read from stdin and returned with whitespace trimmed.
///
/// # Errors
///
/// Returns an error if writing the prompt or reading from stdin fails.
pub fn prompt_string(prompt: &str) -> Result<String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt_string_from(&mut stdin.lock(), &mut stdout, prompt)
}

/// Prompt on `output` and read one trimmed line from `input`.
///
/// End of input yields an empty string.
pub fn prompt_string_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{prompt}: ").context("Failed to write prompt")?;
    output.flush().context("Failed to write prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read user input")?;

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_trimmed_line() {
        let mut input = Cursor::new("  ./docs \n");
        let mut output = Vec::new();

        let answer = prompt_string_from(&mut input, &mut output, "Directory to rewrite").unwrap();

        assert_eq!(answer, "./docs");
        assert_eq!(String::from_utf8(output).unwrap(), "Directory to rewrite: ");
    }

    #[test]
    fn test_prompt_only_reads_one_line() {
        let mut input = Cursor::new("first\nsecond\n");
        let mut output = Vec::new();

        let answer = prompt_string_from(&mut input, &mut output, "Path").unwrap();
        assert_eq!(answer, "first");
    }

    #[test]
    fn test_prompt_eof_is_empty() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let answer = prompt_string_from(&mut input, &mut output, "Path").unwrap();
        assert!(answer.is_empty());
    }
}
