//! Parsing helpers for menu choices and amounts.

use std::path::{Path, PathBuf};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Display,
    TotalIncome,
    TotalExpense,
    Export,
    Exit,
}

/// Parse a menu answer ("1" through "6").
pub fn parse_choice(value: &str) -> anyhow::Result<MenuChoice> {
    let number: u8 = value
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid choice: {:?} (enter 1-6)", value.trim()))?;
    match number {
        1 => Ok(MenuChoice::Add),
        2 => Ok(MenuChoice::Display),
        3 => Ok(MenuChoice::TotalIncome),
        4 => Ok(MenuChoice::TotalExpense),
        5 => Ok(MenuChoice::Export),
        6 => Ok(MenuChoice::Exit),
        other => Err(anyhow::anyhow!("Invalid choice: {} (enter 1-6)", other)),
    }
}

/// Parse an amount entered by the user.
///
/// Any finite decimal is accepted, including negatives.
pub fn parse_amount(value: &str) -> anyhow::Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow::anyhow!("Amount is required"));
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid amount: {}", trimmed))?;
    if !amount.is_finite() {
        return Err(anyhow::anyhow!("Invalid amount: {}", trimmed));
    }
    Ok(amount)
}

/// Resolve an export filename against an optional base directory.
///
/// Absolute names are used as given; relative names join the base directory
/// when one is configured and stay relative to the working directory otherwise.
pub fn resolve_export_path(name: &str, directory: Option<&Path>) -> PathBuf {
    let path = PathBuf::from(name);
    match directory {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    }
}
