//! Line-oriented prompting over stdin.

use std::io::{self, BufRead, Write};

use anyhow::bail;
use hohmann_budget::transfer::InputError;

pub struct Console {
    input: Box<dyn BufRead>,
    prompts: Box<dyn Write>,
}

impl Console {
    /// Prompts go to stdout for the human transcript, or stderr when stdout carries data.
    pub fn new(prompts_on_stdout: bool) -> Self {
        let prompts: Box<dyn Write> = if prompts_on_stdout {
            Box::new(io::stdout())
        } else {
            Box::new(io::stderr())
        };
        Self {
            input: Box::new(io::BufReader::new(io::stdin())),
            prompts,
        }
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.prompts
    }

    /// Ask a question and return the trimmed answer.
    pub fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        write!(self.prompts, "{question}")?;
        self.prompts.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for: {}", question.trim_end());
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer parses as a number accepted by `check`.
    pub fn ask_number<F>(&mut self, question: &str, example: &str, check: F) -> anyhow::Result<f64>
    where
        F: Fn(f64) -> Result<f64, InputError>,
    {
        loop {
            let answer = self.ask(question)?;
            match answer.parse::<f64>() {
                Ok(value) => match check(value) {
                    Ok(value) => return Ok(value),
                    Err(err) => writeln!(self.prompts, "Invalid input: {err}. Try again.")?,
                },
                Err(_) => writeln!(
                    self.prompts,
                    "Invalid input: enter a number (e.g. {example}). Try again."
                )?,
            }
        }
    }

    /// Ask a yes/no question until answered with `y` or `n`.
    pub fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        loop {
            match self.ask(question)?.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.prompts, "Answer not recognised. Enter 'y' or 'n'.")?,
            }
        }
    }
}
