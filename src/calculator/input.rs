//! Prompted console input, read one value at a time from a character stream.
use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// A number read from input, or the text that could not be read as one.
#[derive(Debug, Clone, PartialEq)]
pub enum Scanned {
    Number(f64),
    Invalid(String),
}

/// Writes prompts to `output` and reads values from `input`.
/// Characters left over after a value stay pending and are consumed by later prompts,
/// so `2+3` on one line answers three prompts.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<char>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Writes `prompt` and returns the next non-whitespace character,
    /// or `None` once input is exhausted.
    pub fn ask_char(&mut self, prompt: &str) -> io::Result<Option<char>> {
        self.prompt(prompt)?;
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        Ok(self.pending.pop_front())
    }

    /// Writes `prompt` and reads the longest numeric prefix at the next non-whitespace character.
    /// When no number starts there, the whole whitespace-delimited word is consumed and returned
    /// as `Scanned::Invalid`. Returns `None` once input is exhausted.
    pub fn ask_number(&mut self, prompt: &str) -> io::Result<Option<Scanned>> {
        self.prompt(prompt)?;
        if !self.skip_whitespace()? {
            return Ok(None);
        }

        let len = numeric_prefix_len(self.pending.make_contiguous());
        if len == 0 {
            let end = self
                .pending
                .iter()
                .position(|c| c.is_whitespace())
                .unwrap_or(self.pending.len());
            return Ok(Some(Scanned::Invalid(self.pending.drain(..end).collect())));
        }

        let text: String = self.pending.drain(..len).collect();
        Ok(Some(match text.parse::<f64>() {
            Ok(value) => Scanned::Number(value),
            Err(_) => Scanned::Invalid(text),
        }))
    }

    /// Writes one full line of output.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Returns the writer, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()
    }

    /// Drops leading whitespace, reading more lines as needed.
    /// Returns `false` when input ends before any other character.
    fn skip_whitespace(&mut self) -> io::Result<bool> {
        loop {
            while self.pending.front().is_some_and(|c| c.is_whitespace()) {
                self.pending.pop_front();
            }
            if !self.pending.is_empty() {
                return Ok(true);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            self.pending.extend(line.chars());
        }
    }
}

/// Length of the decimal number (`[+-]digits[.digits][e[+-]digits]`) at the start of `chars`,
/// or 0 when there is none.
fn numeric_prefix_len(chars: &[char]) -> usize {
    let mut len = usize::from(matches!(chars.first(), Some('+' | '-')));

    let int_digits = count_digits(chars, len);
    len += int_digits;
    let mut frac_digits = 0;
    if chars.get(len) == Some(&'.') {
        frac_digits = count_digits(chars, len + 1);
        len += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(chars.get(len), Some('e' | 'E')) {
        let mut exponent = len + 1;
        if matches!(chars.get(exponent), Some('+' | '-')) {
            exponent += 1;
        }
        let exp_digits = count_digits(chars, exponent);
        if exp_digits > 0 {
            len = exponent + exp_digits;
        }
    }
    len
}

fn count_digits(chars: &[char], from: usize) -> usize {
    chars
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|c| c.is_ascii_digit()).count())
}
