//! Interactive prompts between runs.

use std::io::{self, BufRead, Write};

use dilemma_core::SimulationConfig;

use crate::cli::PromptOptions;

/// Reads answers from `input` and writes questions to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next line with surrounding whitespace removed, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask a y/n question until answered. End of input counts as "n".
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        loop {
            match self.read_line()?.as_deref() {
                None => return Ok(false),
                Some("y") => return Ok(true),
                Some("n") => return Ok(false),
                Some(_) => {
                    write!(self.output, "\nInvalid input, need (y/n): ")?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// Ask for an option line until one parses. End of input gives `None`.
    pub fn read_options(&mut self) -> io::Result<Option<SimulationConfig>> {
        writeln!(self.output, "Please give new options:")?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.is_empty() {
                writeln!(self.output, "\nOptions not provided, please try again:")?;
                continue;
            }
            match PromptOptions::parse_line(&line) {
                Ok(config) => return Ok(Some(config)),
                Err(e) => writeln!(self.output, "\n{}\nPlease try again:", e.trim_end())?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dilemma_core::StrategyKind;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_confirm_retries_invalid_input() {
        let mut p = prompter("maybe\n\n y \n");
        assert!(p.confirm("Again? (y/n): ").unwrap());

        let output = String::from_utf8(p.output).unwrap();
        assert!(output.starts_with("Again? (y/n): "));
        assert_eq!(output.matches("Invalid input, need (y/n): ").count(), 2);
    }

    #[test]
    fn test_confirm_no_and_end_of_input() {
        assert!(!prompter("n\n").confirm("?").unwrap());
        assert!(!prompter("").confirm("?").unwrap());
    }

    #[test]
    fn test_read_options_retries() {
        let mut p = prompter("\n-g 5\n--grudger -p 4 -g 2000\n");
        let config = p.read_options().unwrap().unwrap();

        assert_eq!(config.population_of(StrategyKind::Grudger), 4);
        assert_eq!(config.generations(), 2000);

        let output = String::from_utf8(p.output).unwrap();
        assert!(output.contains("Options not provided, please try again:"));
        assert!(output.contains("below the minimum"));
    }

    #[test]
    fn test_read_options_end_of_input() {
        assert!(prompter("").read_options().unwrap().is_none());
    }
}
