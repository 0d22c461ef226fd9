// src/ui/terminal.rs
// Line-buffered console over any reader/writer pair

use super::{Console, parse_answer};
use std::io::{self, BufRead, IsTerminal, Write};

/// Blank lines printed by `clear_screen` when output is not a terminal
const CLEAR_LINES: usize = 20;

/// ANSI "cursor home + erase display"
const ANSI_CLEAR: &str = "\x1b[H\x1b[2J";

/// Console backed by a `BufRead` input and a `Write` output
pub struct Terminal<R, W> {
    input: R,
    output: W,
    ansi: bool,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin/stdout
    pub fn stdio() -> Self {
        let ansi = io::stdout().is_terminal();
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            ansi,
        }
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Console over arbitrary streams; `clear_screen` prints blank lines.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            ansi: false,
        }
    }

    /// Everything written so far
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line without its terminator; None at EOF
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn show_inline(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    fn prompt_line(&mut self, text: &str) -> io::Result<String> {
        if !text.is_empty() {
            self.show_inline(text)?;
        }
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn confirm(&mut self, text: &str) -> io::Result<bool> {
        loop {
            if !text.is_empty() {
                self.show_inline(text)?;
            }
            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };
            match parse_answer(&answer) {
                Some(yes) => return Ok(yes),
                None => self.show_error("Invalid answer. Reply with s, n, si or no.")?,
            }
        }
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if self.ansi {
            self.show_inline(ANSI_CLEAR)
        } else {
            for _ in 0..CLEAR_LINES {
                self.show("")?;
            }
            Ok(())
        }
    }
}
