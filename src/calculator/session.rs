//! The calculator's read/compute/ask-again loop.
use std::io::{self, BufRead, Write};

use tracing::{debug, trace};

use crate::calculator::{Prompter, Scanned, compute, format_number};

const BANNER: &str = "=== Simple Calculator ===";
const FIRST_NUMBER_PROMPT: &str = "\nEnter first number: ";
const OPERATOR_PROMPT: &str = "Enter operator (+, -, *, /): ";
const SECOND_NUMBER_PROMPT: &str = "Enter second number: ";
const CONTINUE_PROMPT: &str = "\nDo you want to perform another calculation? (y/n): ";
const FAREWELL: &str = "\nExiting calculator. Goodbye!";

/// The operands and operator symbol for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Inputs {
    lhs: f64,
    symbol: char,
    rhs: f64,
}

#[derive(Debug)]
enum Step {
    ReadInputs,
    Compute(Inputs),
    AskContinue,
    Done,
}

/// An interactive calculator session over an arbitrary input/output pair.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading answers from `input` and writing prompts and results to `output`.
    pub fn new(input: R, output: W) -> Self {
        Session {
            prompter: Prompter::new(input, output),
        }
    }

    /// Runs until the user declines to continue or input runs out.
    /// Returns the number of calculations evaluated.
    pub fn run(&mut self) -> io::Result<usize> {
        self.prompter.say(BANNER)?;

        let mut calculations = 0;
        let mut step = Step::ReadInputs;
        loop {
            trace!(?step, "calculator step");
            step = match step {
                Step::ReadInputs => match self.read_inputs()? {
                    Some(inputs) => Step::Compute(inputs),
                    None => Step::Done,
                },
                Step::Compute(inputs) => {
                    calculations += 1;
                    let line = match compute(inputs.lhs, inputs.symbol, inputs.rhs) {
                        Ok(value) => format!("Result: {}", format_number(value)),
                        Err(err) => {
                            debug!(?inputs, %err, "calculation rejected");
                            err.to_string()
                        }
                    };
                    self.prompter.say(&line)?;
                    Step::AskContinue
                }
                Step::AskContinue => match self.prompter.ask_char(CONTINUE_PROMPT)? {
                    Some('y' | 'Y') => Step::ReadInputs,
                    _ => Step::Done,
                },
                Step::Done => break,
            };
        }

        self.prompter.say(FAREWELL)?;
        Ok(calculations)
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn read_inputs(&mut self) -> io::Result<Option<Inputs>> {
        let Some(lhs) = self.read_number(FIRST_NUMBER_PROMPT)? else {
            return Ok(None);
        };
        let Some(symbol) = self.prompter.ask_char(OPERATOR_PROMPT)? else {
            return Ok(None);
        };
        let Some(rhs) = self.read_number(SECOND_NUMBER_PROMPT)? else {
            return Ok(None);
        };
        Ok(Some(Inputs { lhs, symbol, rhs }))
    }

    /// Asks for a number, repeating the prompt until one is read.
    fn read_number(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        while let Some(scanned) = self.prompter.ask_number(prompt)? {
            match scanned {
                Scanned::Number(value) => return Ok(Some(value)),
                Scanned::Invalid(text) => {
                    debug!(%text, "rejected number");
                    self.prompter.say("Invalid number!")?;
                }
            }
        }
        Ok(None)
    }
}
