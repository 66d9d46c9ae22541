// src/prompt.rs
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{Error, Result};

/// Multi-select over a list of labels. Returns 0-based indices, never empty.
pub trait Picker {
    fn pick(&mut self, message: &str, choices: &[String]) -> Result<Vec<usize>>;
}

/// Numbered list on a terminal; answers like `1,3-5` or `all`.
pub struct TerminalPicker<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalPicker<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self { input: io::stdin().lock(), output: io::stdout() }
    }
}

impl<R: BufRead, W: Write> TerminalPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Picker for TerminalPicker<R, W> {
    fn pick(&mut self, message: &str, choices: &[String]) -> Result<Vec<usize>> {
        writeln!(self.output, "{message}")?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  [{}] {}", i + 1, choice)?;
        }

        loop {
            write!(self.output, "Rewards (e.g. 1,3-5 or all): ")?;
            self.output.flush()?;

            let mut line = s!();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::PromptClosed);
            }

            match parse_selection(&line, choices.len()) {
                Ok(picked) if !picked.is_empty() => {
                    logd!("Prompt: picked {:?}", picked);
                    return Ok(picked);
                }
                Ok(_) => writeln!(self.output, "Please select at least one reward.")?,
                Err(msg) => writeln!(self.output, "{msg}")?,
            }
        }
    }
}

/// Parse a 1-based selection (`2`, `1,4`, `3-5`, `all`) into sorted,
/// deduplicated 0-based indices below `count`.
pub fn parse_selection(s: &str, count: usize) -> std::result::Result<Vec<usize>, String> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("all") || s == "*" {
        return Ok((0..count).collect());
    }

    let number = |part: &str| -> std::result::Result<usize, String> {
        let n: usize = part
            .trim()
            .parse()
            .map_err(|_| format!("Not a number: {}", part.trim()))?;
        if n == 0 || n > count {
            return Err(format!("No reward numbered {n} (choose 1-{count})"));
        }
        Ok(n - 1)
    };

    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some(dash) = part.find('-') {
            let a = number(&part[..dash])?;
            let b = number(&part[dash + 1..])?;
            if a > b { return Err(format!("Invalid range: {}", part)); }
            out.extend(a..=b);
        } else {
            out.push(number(part)?);
        }
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}
