//! Menu command handlers.
//!
//! Each handler runs one menu action against the session and reports
//! user-facing problems itself; an `Err` return means output or input broke
//! and the session cannot continue.

mod add;
mod display;
mod export;
mod init_config;
mod totals;

pub use add::handle_add;
pub use display::handle_display;
pub use export::handle_export;
pub use init_config::handle_init_config;
pub use totals::{handle_total_expense, handle_total_income};
