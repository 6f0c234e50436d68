//! Input parsing helpers for the CLI.

mod parsing;

pub use parsing::{parse_amount, parse_choice, resolve_export_path, MenuChoice};
