use std::io::Write;

use budget_core::{Clock, EXPENSE, INCOME};

use crate::prompt::Prompter;
use crate::session::{Flow, Session};
use crate::ui::theme::{styled, styles};
use crate::ui::{format_amount, kv};

pub fn handle_total_income<C: Clock, P: Prompter, W: Write>(
    session: &mut Session<C, P, W>,
) -> anyhow::Result<Flow> {
    print_total(session, "Total Income", INCOME)
}

pub fn handle_total_expense<C: Clock, P: Prompter, W: Write>(
    session: &mut Session<C, P, W>,
) -> anyhow::Result<Flow> {
    print_total(session, "Total Expense", EXPENSE)
}

fn print_total<C: Clock, P: Prompter, W: Write>(
    session: &mut Session<C, P, W>,
    label: &str,
    kind: &str,
) -> anyhow::Result<Flow> {
    let total = format_amount(session.ledger.total(kind));
    let style = if kind == INCOME {
        styles::income()
    } else {
        styles::expense()
    };
    let value = styled(&total, style, session.ui.color);
    let line = kv(&session.ui, label, &value);
    session.say(&line)?;
    Ok(Flow::Continue)
}
