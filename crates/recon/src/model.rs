//! Core data model: typed input records and classified output rows.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::TieBreak;

// ---------------------------------------------------------------------------
// Input records
// ---------------------------------------------------------------------------

/// Which input a record (or an error) came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Bank,
    Ledger,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Bank => "bank",
            Side::Ledger => "ledger",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized bank-statement row. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub description: Option<String>,
}

/// One normalized accounting-ledger row. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub vendor_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Output records
// ---------------------------------------------------------------------------

/// Classification of one output row.
///
/// `BankOnly` and `LedgerOnly` are provisional after the exact join; the
/// window resolver may upgrade a `BankOnly` to `DateMismatch`. `ExactMatch`
/// is final the moment it is assigned and is never reconsidered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    ExactMatch,
    BankOnly,
    LedgerOnly,
    DateMismatch,
}

impl MatchType {
    /// Report label for the CSV artifact. The mismatch label spells out the
    /// window it was resolved under, so the default window renders exactly
    /// `Date Mismatch (±5 Days)`.
    pub fn label(self, window_days: u32) -> String {
        match self {
            MatchType::ExactMatch => "Exact Match".to_string(),
            MatchType::BankOnly => "Bank Only (Not in Ledger)".to_string(),
            MatchType::LedgerOnly => "Ledger Only (Not in Bank)".to_string(),
            MatchType::DateMismatch => format!("Date Mismatch (±{window_days} Days)"),
        }
    }
}

/// The unit of output: one reconciled row.
///
/// `bank_index` / `ledger_index` are zero-based positions into the original
/// inputs. On an `ExactMatch` both are origins. On a `DateMismatch` the
/// ledger index points at the window candidate the vendor name was
/// backfilled from — the candidate entry still owns its own output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub description: Option<String>,
    pub vendor_name: Option<String>,
    pub match_type: MatchType,
    pub bank_index: Option<usize>,
    pub ledger_index: Option<usize>,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Per-class row counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReconcileSummary {
    pub total_rows: usize,
    pub exact_match: usize,
    pub bank_only: usize,
    pub ledger_only: usize,
    pub date_mismatch: usize,
}

/// Run metadata carried alongside the rows. `run_at` is wall-clock and is
/// deliberately absent from the CSV artifact, which must stay byte-identical
/// across runs on identical inputs.
#[derive(Debug, Clone, Serialize)]
pub struct ReconMeta {
    pub engine_version: String,
    pub run_at: String,
    pub window_days: u32,
    pub tie_break: TieBreak,
    pub bank_rows: usize,
    pub ledger_rows: usize,
}

/// Full result of one reconciliation run.
#[derive(Debug, Clone, Serialize)]
pub struct ReconReport {
    pub meta: ReconMeta,
    pub summary: ReconcileSummary,
    pub records: Vec<MatchRecord>,
}
