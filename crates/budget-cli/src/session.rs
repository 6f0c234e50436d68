//! The interactive menu loop.
//!
//! A session owns one ledger for its whole lifetime. Each turn shows the
//! menu, reads a choice and runs the matching command handler. Bad input is
//! reported and the menu comes back; only exit or end of input stops the loop.

use std::io::Write;

use tracing::{debug, info};

use budget_core::{Clock, Ledger};

use crate::app::ExportSettings;
use crate::commands;
use crate::constants::MENU_ITEMS;
use crate::helpers::{parse_choice, MenuChoice};
use crate::prompt::Prompter;
use crate::ui::{divider, error_message, header, UiContext};

/// Whether the loop keeps going after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<C: Clock, P: Prompter, W: Write> {
    pub(crate) ledger: Ledger<C>,
    pub(crate) prompter: P,
    pub(crate) out: W,
    pub(crate) ui: UiContext,
    pub(crate) export: ExportSettings,
    pub(crate) quiet: bool,
}

impl<C: Clock, P: Prompter, W: Write> Session<C, P, W> {
    pub fn new(ledger: Ledger<C>, prompter: P, out: W, ui: UiContext) -> Self {
        Self {
            ledger,
            prompter,
            out,
            ui,
            export: ExportSettings::default(),
            quiet: false,
        }
    }

    pub fn with_export_settings(mut self, export: ExportSettings) -> Self {
        self.export = export;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[cfg(test)]
    pub fn ledger(&self) -> &Ledger<C> {
        &self.ledger
    }

    /// Consume the session, returning its output writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run menu turns until the user exits or input runs out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!("session started");
        while self.turn()? == Flow::Continue {}
        info!(entries = self.ledger.len(), "session ended");
        Ok(())
    }

    fn turn(&mut self) -> anyhow::Result<Flow> {
        if !self.quiet {
            let banner = header(&self.ui, "Budget Tracker");
            let rule = divider(&self.ui);
            self.say(&banner)?;
            self.say(&rule)?;
        }

        let answer = match self.prompter.choose("Enter your choice", &MENU_ITEMS)? {
            Some(answer) => answer,
            None => return Ok(Flow::Exit),
        };

        let choice = match parse_choice(&answer) {
            Ok(choice) => choice,
            Err(err) => {
                debug!(answer = %answer, "rejected menu answer");
                self.report_error(&err.to_string(), None)?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Add => commands::handle_add(self),
            MenuChoice::Display => commands::handle_display(self),
            MenuChoice::TotalIncome => commands::handle_total_income(self),
            MenuChoice::TotalExpense => commands::handle_total_expense(self),
            MenuChoice::Export => commands::handle_export(self),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    /// Write one line of output.
    pub(crate) fn say(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Write an error (and optional hint) without ending the session.
    pub(crate) fn report_error(&mut self, message: &str, hint: Option<&str>) -> anyhow::Result<()> {
        let text = error_message(&self.ui, message, hint);
        self.say(&text)
    }
}
