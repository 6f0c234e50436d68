//! The append-only ledger of income and expense entries.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::entry::{total_by_kind, Entry};
use crate::error::Result;
use crate::export::{CsvSink, ExportFormat, JsonLinesSink, RecordSink, HEADER};
use crate::fs::AtomicFile;

/// Ordered, append-only store of entries.
///
/// Ids are assigned from a counter that starts at the ledger's offset and
/// increases by one per append, so `entries[i].id == offset + i` always holds.
#[derive(Debug)]
pub struct Ledger<C: Clock> {
    entries: Vec<Entry>,
    next_id: u64,
    clock: C,
}

impl<C: Clock> Ledger<C> {
    /// Create an empty ledger whose first id is 0.
    pub fn new(clock: C) -> Self {
        Self::with_start_id(clock, 0)
    }

    /// Create an empty ledger whose first id is `start_id`.
    pub fn with_start_id(clock: C, start_id: u64) -> Self {
        Self {
            entries: Vec::new(),
            next_id: start_id,
            clock,
        }
    }

    /// Record a new entry stamped with the clock's current time.
    ///
    /// No validation is performed: empty text and negative amounts are
    /// stored as given.
    pub fn append(
        &mut self,
        amount: f64,
        category: impl Into<String>,
        kind: impl Into<String>,
        note: impl Into<String>,
    ) -> Entry {
        let entry = Entry {
            id: self.next_id,
            amount,
            category: category.into(),
            kind: kind.into(),
            timestamp: self.clock.now(),
            note: note.into(),
        };
        debug!(id = entry.id, kind = %entry.kind, "appended entry");
        self.entries.push(entry.clone());
        self.next_id += 1;
        entry
    }

    /// All entries in insertion order.
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    /// Sum of amounts over entries whose kind matches exactly.
    pub fn total(&self, kind: &str) -> f64 {
        total_by_kind(&self.entries, kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id the next appended entry will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Write the header and every entry to `sink`, then finish it.
    ///
    /// Returns the number of data rows written. On failure nothing is
    /// reported as written and the ledger itself is untouched.
    ///
    /// # Errors
    ///
    /// Returns whatever the sink reports for a failed write or commit.
    pub fn export<S: RecordSink>(&self, sink: S) -> Result<usize> {
        match write_entries(&self.entries, sink) {
            Ok(()) => {
                info!(rows = self.entries.len(), "export complete");
                Ok(self.entries.len())
            }
            Err(err) => {
                warn!(error = %err, "export failed");
                Err(err)
            }
        }
    }

    /// Export to a new file at `path` in the given format.
    ///
    /// The file only appears at `path` once every row has been written and
    /// flushed; an existing file at `path` is replaced.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Io` if the file cannot be created, written or
    /// moved into place.
    pub fn export_to_path(&self, path: &Path, format: ExportFormat) -> Result<usize> {
        debug!(path = %path.display(), %format, "opening export file");
        let file = match AtomicFile::create(path) {
            Ok(file) => file,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot open export file");
                return Err(err.into());
            }
        };
        match format {
            ExportFormat::Csv => self.export(CsvSink::new(file)),
            ExportFormat::JsonLines => self.export(JsonLinesSink::new(file)),
        }
    }
}

fn write_entries<S: RecordSink>(entries: &[Entry], mut sink: S) -> Result<()> {
    sink.write_header(&HEADER)?;
    for entry in entries {
        sink.write_row(&entry.to_row())?;
    }
    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::entry::{EXPENSE, INCOME};
    use crate::error::LedgerError;

    fn clock() -> FixedClock {
        FixedClock::parse("2024-06-01T12:00:00+00:00").unwrap()
    }

    #[test]
    fn test_ids_increase_by_one() {
        let mut ledger = Ledger::new(clock());
        let ids: Vec<u64> = (0..5)
            .map(|i| ledger.append(i as f64, "", "", "").id)
            .collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(ledger.next_id(), 5);
    }

    #[test]
    fn test_start_offset() {
        let mut ledger = Ledger::with_start_id(clock(), 100);
        assert_eq!(ledger.append(1.0, "a", INCOME, "").id, 100);
        assert_eq!(ledger.append(1.0, "b", INCOME, "").id, 101);
        assert_eq!(ledger.list()[1].id, 101);
    }

    #[test]
    fn test_append_stamps_clock_time() {
        let mut ledger = Ledger::new(clock());
        let entry = ledger.append(9.99, "Books", EXPENSE, "");
        assert_eq!(entry.timestamp, clock().0);
        assert_eq!(ledger.list().last(), Some(&entry));
    }

    #[test]
    fn test_totals() {
        let mut ledger = Ledger::new(clock());
        ledger.append(100.0, "Salary", INCOME, "");
        ledger.append(50.5, "Food", EXPENSE, "lunch");
        ledger.append(20.0, "Gift", "Income", "");
        ledger.append(-5.0, "Refund", EXPENSE, "");

        assert_eq!(ledger.total(INCOME), 100.0);
        assert_eq!(ledger.total(EXPENSE), 45.5);
        assert_eq!(ledger.total("Income"), 20.0);
        assert_eq!(ledger.total("transfer"), 0.0);
    }

    struct FailingSink {
        fail_after: usize,
        rows: usize,
    }

    impl RecordSink for FailingSink {
        fn write_header(&mut self, _header: &[&str]) -> Result<()> {
            Ok(())
        }

        fn write_row(&mut self, _row: &[String]) -> Result<()> {
            if self.rows == self.fail_after {
                return Err(LedgerError::Sink("disk full".to_string()));
            }
            self.rows += 1;
            Ok(())
        }

        fn finish(self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_export_failure_is_reported() {
        let mut ledger = Ledger::new(clock());
        ledger.append(1.0, "a", INCOME, "");
        ledger.append(2.0, "b", INCOME, "");

        let err = ledger
            .export(FailingSink {
                fail_after: 1,
                rows: 0,
            })
            .unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.next_id(), 2);
    }

    #[test]
    fn test_export_empty_ledger_writes_header_only() {
        let ledger = Ledger::new(clock());
        let mut buffer = Vec::new();
        let rows = ledger.export(CsvSink::new(&mut buffer)).unwrap();
        assert_eq!(rows, 0);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "ID,Amount,Category,Date,Type,Message\n"
        );
    }
}
