//! Interactive command loop

use colored::*;
use eyre::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::processor::CommandProcessor;

pub const WELCOME: &str = "Welcome to the notification system!";
pub const PROMPT: &str = "Enter a command: ";
pub const GOODBYE: &str = "Exiting...";

pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(stdin.lock(), stdout.lock())
}

/// Read lines until `exit` or end of input, printing every outcome
pub fn repl<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let mut processor = CommandProcessor::new();

    writeln!(output, "{}", WELCOME.bold()).context("Failed to write welcome")?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT).context("Failed to write prompt")?;
        output.flush().context("Failed to flush prompt")?;

        line.clear();
        let read = input.read_line(&mut line).context("Failed to read command")?;
        if read == 0 {
            log::info!("End of input, leaving command loop");
            writeln!(output).context("Failed to write newline")?;
            break;
        }

        let outcome = processor.process(line.trim());
        for message in &outcome.outputs {
            writeln!(output, "{}", message).context("Failed to write output")?;
        }

        if outcome.should_exit {
            log::info!("Exit requested");
            break;
        }
    }

    writeln!(output, "{}", GOODBYE).context("Failed to write goodbye")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(script: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        repl(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_repl_session() {
        let out = drive("+salt\nwhite\nlist\nexit\nwhite\n");

        assert!(out.starts_with(WELCOME));
        assert!(out.contains("Subscribed Salt for notifications."));
        assert!(out.contains("I’m Salt! I’m sometimes White!"));
        assert!(out.contains("Subscribed things: Salt"));
        assert!(out.trim_end().ends_with(GOODBYE));
        // nothing after exit is processed
        assert_eq!(out.matches("I’m Salt!").count(), 1);
    }

    #[test]
    fn test_repl_blank_lines_only_prompt() {
        let out = drive("\n   \nexit\n");
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert!(!out.contains("Unknown command"));
    }

    #[test]
    fn test_repl_ends_on_eof() {
        let out = drive("fooburger\n");
        assert!(out.contains("Unknown command"));
        assert!(out.trim_end().ends_with(GOODBYE));
    }
}
