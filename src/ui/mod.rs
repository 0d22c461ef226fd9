// src/ui/mod.rs
// Console protocol used by the session controller

mod terminal;

pub use terminal::Terminal;

use std::io;

/// Default prompt for `confirm` after a calculation attempt
pub const RETRY_PROMPT: &str = "Try again? (s/n): ";
/// Default message for `pause`
pub const PAUSE_PROMPT: &str = "Press ENTER to continue...";

/// Line-oriented console. Every read blocks until a full line (or EOF) arrives.
pub trait Console {
    /// Print `text` followed by a newline
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Print `text` without a trailing newline
    fn show_inline(&mut self, text: &str) -> io::Result<()>;

    /// Print an error line, prefixed with `ERROR - `
    fn show_error(&mut self, text: &str) -> io::Result<()> {
        self.show(&format!("ERROR - {text}"))
    }

    /// Show `text` and read one trimmed line. EOF yields an empty string.
    fn prompt_line(&mut self, text: &str) -> io::Result<String>;

    /// Read a real number, accepting `,` as decimal separator
    fn prompt_double(&mut self, text: &str) -> io::Result<Option<f64>> {
        Ok(crate::calc::parse_operand(&self.prompt_line(text)?))
    }

    /// Read an integer
    fn prompt_int(&mut self, text: &str) -> io::Result<Option<i32>> {
        Ok(self.prompt_line(text)?.parse().ok())
    }

    /// Ask a yes/no question (`s`, `si`, `n`, `no`, any case) until answered.
    /// EOF answers no.
    fn confirm(&mut self, text: &str) -> io::Result<bool>;

    /// Clear the visible screen
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Wait for ENTER
    fn pause(&mut self, text: &str) -> io::Result<()> {
        self.prompt_line(&format!("\n{text}"))?;
        self.show("")
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn show(&mut self, text: &str) -> io::Result<()> {
        (**self).show(text)
    }

    fn show_inline(&mut self, text: &str) -> io::Result<()> {
        (**self).show_inline(text)
    }

    fn show_error(&mut self, text: &str) -> io::Result<()> {
        (**self).show_error(text)
    }

    fn prompt_line(&mut self, text: &str) -> io::Result<String> {
        (**self).prompt_line(text)
    }

    fn prompt_double(&mut self, text: &str) -> io::Result<Option<f64>> {
        (**self).prompt_double(text)
    }

    fn prompt_int(&mut self, text: &str) -> io::Result<Option<i32>> {
        (**self).prompt_int(text)
    }

    fn confirm(&mut self, text: &str) -> io::Result<bool> {
        (**self).confirm(text)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        (**self).clear_screen()
    }

    fn pause(&mut self, text: &str) -> io::Result<()> {
        (**self).pause(text)
    }
}

/// Interpretation of one answer to a yes/no question
pub(crate) fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "s" | "si" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
