//! Ledger entries and the aggregation capability.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Kind tag for money coming in.
pub const INCOME: &str = "income";

/// Kind tag for money going out.
pub const EXPENSE: &str = "expense";

/// Date layout used for display and export (`DD-MM-YYYY`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// One recorded financial event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Ledger-assigned identifier, strictly increasing
    pub id: u64,

    /// Magnitude of the event (sign is not enforced)
    pub amount: f64,

    /// Free-text category label (e.g., "Food", "Salary")
    pub category: String,

    /// Kind tag; "income" and "expense" are the meaningful values
    pub kind: String,

    /// When the entry was recorded, in the recorder's local offset
    pub timestamp: DateTime<FixedOffset>,

    /// Optional annotation, empty when absent
    pub note: String,
}

impl Entry {
    /// Amount formatted with exactly two fractional digits.
    pub fn formatted_amount(&self) -> String {
        format!("{:.2}", self.amount)
    }

    /// Recording date formatted as `DD-MM-YYYY`.
    pub fn formatted_date(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }

    /// Fields in export column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.formatted_amount(),
            self.category.clone(),
            self.formatted_date(),
            self.kind.clone(),
            self.note.clone(),
        ]
    }
}

/// A record that carries an amount and a kind tag.
///
/// Anything implementing this can be summed by [`total_by_kind`].
pub trait Amounted {
    fn amount(&self) -> f64;
    fn kind(&self) -> &str;
}

impl Amounted for Entry {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn kind(&self) -> &str {
        &self.kind
    }
}

impl<T: Amounted + ?Sized> Amounted for &T {
    fn amount(&self) -> f64 {
        (**self).amount()
    }

    fn kind(&self) -> &str {
        (**self).kind()
    }
}

/// Sum the amounts of every record whose kind matches exactly.
///
/// Matching is case-sensitive; an empty or unmatched input sums to zero.
pub fn total_by_kind<I>(records: I, kind: &str) -> f64
where
    I: IntoIterator,
    I::Item: Amounted,
{
    records
        .into_iter()
        .filter(|record| record.kind() == kind)
        .map(|record| record.amount())
        .sum()
}
