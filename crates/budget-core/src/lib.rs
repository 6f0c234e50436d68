//! # Budget Core
//!
//! Core library for Budget - a small, console-first personal finance ledger.
//!
//! This crate provides the domain model, aggregation and export logic,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **entry**: The `Entry` record and the `Amounted` aggregation capability
//! - **ledger**: Append-only store with list, total and export operations
//! - **clock**: Injected time source for stamping entries
//! - **export**: Record sinks (CSV, JSON lines) and export formats
//! - **fs**: Atomic export files
//!
//! ## Example
//!
//! ```
//! use budget_core::{FixedClock, Ledger, EXPENSE, INCOME};
//!
//! let clock = FixedClock::parse("2024-06-01T12:00:00+00:00").unwrap();
//! let mut ledger = Ledger::new(clock);
//! ledger.append(100.0, "Salary", INCOME, "");
//! ledger.append(50.5, "Food", EXPENSE, "lunch");
//!
//! assert_eq!(ledger.total(INCOME), 100.0);
//! assert_eq!(ledger.list()[1].formatted_amount(), "50.50");
//! ```

pub mod clock;
pub mod entry;
pub mod error;
pub mod export;
pub mod fs;
pub mod ledger;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::{total_by_kind, Amounted, Entry, DATE_FORMAT, EXPENSE, INCOME};
pub use error::{LedgerError, Result};
pub use export::{CsvSink, Destination, ExportFormat, JsonLinesSink, RecordSink, HEADER};
pub use ledger::Ledger;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
