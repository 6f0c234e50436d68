//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Invalid configuration (unreadable config file, unknown export format).
    pub const INVALID_CONFIG: i32 = 4;
}

/// Menu labels, in choice order (choice `n` is `MENU_ITEMS[n - 1]`).
pub const MENU_ITEMS: [&str; 6] = [
    "Add Transaction",
    "Display Transactions",
    "Calculate Total Income",
    "Calculate Total Expense",
    "Save Transactions to File",
    "Exit",
];

/// Longest message shown in the transactions table before truncation.
pub const MESSAGE_DISPLAY_WIDTH: usize = 40;
