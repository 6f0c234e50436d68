//! Budget CLI - a console-first personal income and expense tracker
//!
//! Runs a menu-driven session over one in-memory ledger. Transactions live
//! only for the session; saving them to a file is an explicit menu action.

use std::io::{self, IsTerminal};

use clap::Parser;

use budget_core::{Ledger, SystemClock};

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod helpers;
mod prompt;
mod session;
mod ui;

use app::{init_logging, AppContext};
use cli::Cli;
use constants::exit_codes;
use prompt::{LinePrompter, TerminalPrompter};
use session::Session;
use ui::{error_message, UiContext};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = AppContext::new(&cli);
    if ctx.cli().init_config {
        return commands::handle_init_config(&ctx);
    }

    let resolved = ctx
        .ui_context()
        .and_then(|ui| ctx.export_settings().map(|export| (ui, export)));
    let (ui, export) = match resolved {
        Ok(resolved) => resolved,
        Err(err) => {
            let hint = "Fix or remove the config file, or pass --config with another path";
            eprintln!("{}", error_message(&UiContext::plain(), &err.to_string(), Some(hint)));
            std::process::exit(exit_codes::INVALID_CONFIG);
        }
    };

    let ledger = Ledger::new(SystemClock);
    let interactive = ui.is_interactive() && !cli.no_input;
    tracing::debug!(interactive, "starting session");

    if interactive {
        let mut session = Session::new(ledger, TerminalPrompter::new(), io::stdout(), ui)
            .with_export_settings(export)
            .with_quiet(ctx.quiet());
        session.run()
    } else {
        let stdin = io::stdin();
        let echo_prompts = !ctx.quiet() || stdin.is_terminal();
        let prompt_out: Box<dyn io::Write> = if echo_prompts {
            Box::new(io::stdout())
        } else {
            Box::new(io::sink())
        };
        let prompter = LinePrompter::new(stdin.lock(), prompt_out);
        let mut session = Session::new(ledger, prompter, io::stdout(), ui)
            .with_export_settings(export)
            .with_quiet(ctx.quiet());
        session.run()
    }
}
