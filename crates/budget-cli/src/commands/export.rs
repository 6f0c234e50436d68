//! Save-to-file handler.

use std::io::Write;

use tracing::warn;

use budget_core::Clock;

use crate::prompt::Prompter;
use crate::session::{Flow, Session};
use crate::ui::receipt;

pub fn handle_export<C: Clock, P: Prompter, W: Write>(
    session: &mut Session<C, P, W>,
) -> anyhow::Result<Flow> {
    let prompt = format!(
        "Enter the filename (blank for {})",
        session.export.default_file
    );
    let Some(answer) = session.prompter.read_line(&prompt)? else {
        return Ok(Flow::Exit);
    };

    let path = session.export.destination(&answer);
    let format = session.export.format_for(&path);

    match session.ledger.export_to_path(&path, format) {
        Ok(rows) => {
            if !session.quiet {
                let path_text = path.display().to_string();
                let rows_text = rows.to_string();
                let text = receipt(
                    &session.ui,
                    "Transactions saved",
                    &[
                        ("Path", path_text.as_str()),
                        ("Rows", rows_text.as_str()),
                        ("Format", format.as_str()),
                    ],
                );
                session.say(&text)?;
            }
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "save failed");
            let message = format!("Could not save to {}: {}", path.display(), err);
            let hint = if err.is_io() {
                "Check that the directory exists and is writable, then try another filename"
            } else {
                "Try another filename"
            };
            session.report_error(&message, Some(hint))?;
        }
    }
    Ok(Flow::Continue)
}
