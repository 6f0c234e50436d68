//! Line-oriented input for the menu session.
//!
//! Every answer comes back as a line of text; turning it into a number or a
//! menu choice is the caller's job (see `helpers::parsing`). `Ok(None)` means
//! the input is exhausted and the session should end.

use std::io::{BufRead, ErrorKind, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

pub trait Prompter {
    /// Ask for one line of free text. The answer is trimmed.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;

    /// Offer numbered `items` and return the answer as text.
    ///
    /// Selecting item `n` (1-based) answers `"n"`.
    fn choose(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<Option<String>>;
}

/// Prompter over any buffered reader, for piped or scripted input.
pub struct LinePrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and fail parsing like any bad answer.
        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn choose(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<Option<String>> {
        for (index, item) in items.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, item)?;
        }
        self.read_line(prompt)
    }
}

/// Prompter backed by dialoguer widgets on a real terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();
        match answer {
            Ok(value) => Ok(Some(value.trim().to_string())),
            Err(err) if is_end_of_input(&err) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Failed to read input: {}", err)),
        }
    }

    fn choose(&mut self, prompt: &str, items: &[&str]) -> anyhow::Result<Option<String>> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt();
        match selection {
            Ok(selection) => Ok(selection.map(|index| (index + 1).to_string())),
            Err(err) if is_end_of_input(&err) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Failed to read selection: {}", err)),
        }
    }
}

/// Closed stdin or Ctrl-C on a terminal widget.
fn is_end_of_input(err: &dialoguer::Error) -> bool {
    match err {
        dialoguer::Error::IO(io_err) => matches!(
            io_err.kind(),
            ErrorKind::UnexpectedEof | ErrorKind::Interrupted
        ),
    }
}
