//! Export sinks for ledger entries.
//!
//! A [`RecordSink`] receives one header row followed by one row per entry and
//! is then finished, which flushes or commits everything it was given. Two
//! sinks are provided:
//!
//! - **CSV**: RFC 4180 quoting via the `csv` crate
//! - **JSON lines**: one object per entry, keyed by the header names

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{LedgerError, Result};
use crate::fs::AtomicFile;

/// Column names written before any entry.
pub const HEADER: [&str; 6] = ["ID", "Amount", "Category", "Date", "Type", "Message"];

/// A writable tabular destination.
pub trait RecordSink {
    /// Write the header row. Called exactly once, before any data row.
    fn write_header(&mut self, header: &[&str]) -> Result<()>;

    /// Write one data row.
    fn write_row(&mut self, row: &[String]) -> Result<()>;

    /// Flush and commit everything written so far.
    fn finish(self) -> Result<()>
    where
        Self: Sized;
}

/// The byte target underneath a sink.
///
/// `commit` makes the written bytes durable at their destination; for plain
/// writers this is a flush, for [`AtomicFile`] it is the rename into place.
pub trait Destination: Write + Sized {
    fn commit(self) -> io::Result<()>;
}

impl<W: Write + ?Sized> Destination for &mut W {
    fn commit(self) -> io::Result<()> {
        self.flush()
    }
}

impl Destination for AtomicFile {
    fn commit(self) -> io::Result<()> {
        AtomicFile::commit(self)
    }
}

/// Delimited text sink.
pub struct CsvSink<D: Destination> {
    writer: csv::Writer<D>,
}

impl<D: Destination> CsvSink<D> {
    pub fn new(destination: D) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(destination),
        }
    }
}

impl<D: Destination> RecordSink for CsvSink<D> {
    fn write_header(&mut self, header: &[&str]) -> Result<()> {
        self.writer.write_record(header)?;
        Ok(())
    }

    fn write_row(&mut self, row: &[String]) -> Result<()> {
        self.writer.write_record(row)?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        let destination = self
            .writer
            .into_inner()
            .map_err(|err| LedgerError::Io(err.into_error()))?;
        destination.commit()?;
        Ok(())
    }
}

/// Newline-delimited JSON sink.
pub struct JsonLinesSink<D: Destination> {
    destination: D,
    header: Vec<String>,
}

impl<D: Destination> JsonLinesSink<D> {
    pub fn new(destination: D) -> Self {
        Self {
            destination,
            header: Vec::new(),
        }
    }
}

impl<D: Destination> RecordSink for JsonLinesSink<D> {
    fn write_header(&mut self, header: &[&str]) -> Result<()> {
        self.header = header.iter().map(|name| name.to_string()).collect();
        Ok(())
    }

    fn write_row(&mut self, row: &[String]) -> Result<()> {
        if row.len() != self.header.len() {
            return Err(LedgerError::Sink(format!(
                "Row has {} fields but header has {}",
                row.len(),
                self.header.len()
            )));
        }
        let object: Map<String, Value> = self
            .header
            .iter()
            .cloned()
            .zip(row.iter().map(|field| Value::String(field.clone())))
            .collect();
        serde_json::to_writer(&mut self.destination, &Value::Object(object))?;
        self.destination.write_all(b"\n")?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.destination.commit()?;
        Ok(())
    }
}

/// Supported export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    JsonLines,
}

impl ExportFormat {
    /// Pick a format from a destination's extension, defaulting to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("jsonl") | Some("ndjson") => Self::JsonLines,
            _ => Self::Csv,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::JsonLines => "jsonl",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "jsonl" | "ndjson" | "json-lines" => Ok(Self::JsonLines),
            other => Err(LedgerError::InvalidInput(format!(
                "Unsupported export format: {} (use csv or jsonl)",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
