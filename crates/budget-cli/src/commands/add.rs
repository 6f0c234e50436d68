//! Add-transaction handler.

use std::io::Write;

use budget_core::{Clock, EXPENSE, INCOME};

use crate::helpers::parse_amount;
use crate::prompt::Prompter;
use crate::session::{Flow, Session};
use crate::ui::{badge, receipt, Badge};

pub fn handle_add<C: Clock, P: Prompter, W: Write>(
    session: &mut Session<C, P, W>,
) -> anyhow::Result<Flow> {
    let Some(raw_amount) = session.prompter.read_line("Enter Amount")? else {
        return Ok(Flow::Exit);
    };
    let amount = match parse_amount(&raw_amount) {
        Ok(amount) => amount,
        Err(err) => {
            session.report_error(&err.to_string(), Some("Enter a number such as 12.50"))?;
            return Ok(Flow::Continue);
        }
    };

    let Some(category) = session.prompter.read_line("Enter Category")? else {
        return Ok(Flow::Exit);
    };
    let Some(kind) = session.prompter.read_line("Enter Type (income/expense)")? else {
        return Ok(Flow::Exit);
    };
    let Some(note) = session.prompter.read_line("Enter Message (optional)")? else {
        return Ok(Flow::Exit);
    };

    let entry = session.ledger.append(amount, category, kind, note);

    if !session.quiet {
        if entry.kind != INCOME && entry.kind != EXPENSE {
            let warning = badge(
                &session.ui,
                Badge::Warn,
                &format!(
                    "Type \"{}\" is not counted in income or expense totals",
                    entry.kind
                ),
            );
            session.say(&warning)?;
        }
        let id = entry.id.to_string();
        let amount = entry.formatted_amount();
        let text = receipt(
            &session.ui,
            "Transaction added",
            &[
                ("ID", id.as_str()),
                ("Amount", amount.as_str()),
                ("Type", entry.kind.as_str()),
            ],
        );
        session.say(&text)?;
    }
    Ok(Flow::Continue)
}
