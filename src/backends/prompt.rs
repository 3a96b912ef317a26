//! Interactive confirmation for large result sets

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Ask whether to go on with `count` files. Only `y`/`yes` proceeds.
pub fn ask_confirmation<R: BufRead, W: Write>(
    count: usize,
    mut input: R,
    mut output: W,
) -> io::Result<bool> {
    let question = format!("WARNING: Processing {} files. Proceed? [y/N] ", count);
    write!(output, "{}", question.red().bold())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

/// Ask on the terminal: prompt on stderr, answer from stdin.
///
/// A failed read (e.g. closed stdin) counts as "no".
pub fn confirm_on_terminal(count: usize) -> bool {
    let stdin = io::stdin();
    ask_confirmation(count, stdin.lock(), io::stderr()).unwrap_or(false)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answer: &str) -> (bool, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let yes = ask_confirmation(51, answer.as_bytes(), &mut out).unwrap();
        (yes, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prompt_text() {
        let (_, prompt) = ask("\n");
        assert_eq!(prompt, "WARNING: Processing 51 files. Proceed? [y/N] ");
    }

    #[test]
    fn test_yes_answers() {
        assert!(ask("y\n").0);
        assert!(ask("  YES \n").0);
    }

    #[test]
    fn test_everything_else_declines() {
        assert!(!ask("\n").0);
        assert!(!ask("n\n").0);
        assert!(!ask("yep\n").0);
        assert!(!ask("").0);
    }
}
