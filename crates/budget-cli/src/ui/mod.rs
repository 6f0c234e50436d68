//! UI primitives for the Budget CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (plain, pretty)
//! - **Theme**: Badge tokens and color styles
//! - **Render**: Tables, headers, receipts, hints, errors
//! - **Format**: String utilities (truncate, amounts)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{badge, divider, error_message, header, hint, kv, receipt, table, Column};

pub use format::{format_amount, or_dash, single_line, truncate};
