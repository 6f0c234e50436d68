use std::io::Write;

use budget_core::{Clock, Entry};

use crate::constants::MESSAGE_DISPLAY_WIDTH;
use crate::prompt::Prompter;
use crate::session::{Flow, Session};
use crate::ui::{header, hint, or_dash, single_line, table, truncate, Column};

const COLUMNS: [Column; 6] = [
    Column::right("ID"),
    Column::right("Amount"),
    Column::new("Category"),
    Column::new("Date"),
    Column::new("Type"),
    Column::new("Message"),
];

fn entry_row(entry: &Entry) -> Vec<String> {
    vec![
        entry.id.to_string(),
        entry.formatted_amount(),
        or_dash(&single_line(&entry.category)).to_string(),
        entry.formatted_date(),
        or_dash(&entry.kind).to_string(),
        or_dash(&truncate(&single_line(&entry.note), MESSAGE_DISPLAY_WIDTH)).to_string(),
    ]
}

pub fn handle_display<C: Clock, P: Prompter, W: Write>(
    session: &mut Session<C, P, W>,
) -> anyhow::Result<Flow> {
    if session.ledger.is_empty() {
        let text = hint(&session.ui, "No transactions yet. Choose 1 to add one.");
        session.say(&text)?;
        return Ok(Flow::Continue);
    }

    let rows: Vec<Vec<String>> = session.ledger.list().iter().map(entry_row).collect();
    if !session.quiet {
        let title = header(&session.ui, "Transactions");
        session.say(&title)?;
    }
    let text = table(&session.ui, &COLUMNS, &rows);
    session.say(&text)?;
    Ok(Flow::Continue)
}
