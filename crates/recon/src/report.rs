//! Report Assembler: match records → summary counts and the final CSV.
//!
//! The CSV is byte-deterministic for a given record set: fixed header,
//! fixed column order, LF line endings regardless of platform, two-decimal
//! amounts. Empty `Description` / `Customer/Vendor Name` cells stay empty
//! rather than becoming "null" or "N/A" so downstream spreadsheet filters
//! treat them as blank.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::amount::format_amount;
use crate::error::ReconError;
use crate::model::{MatchRecord, MatchType, ReconcileSummary};

pub const REPORT_HEADER: [&str; 5] = [
    "Date",
    "Amount",
    "Description",
    "Customer/Vendor Name",
    "Match Type",
];

/// Tally match-type counts for the run summary.
pub fn summarize(records: &[MatchRecord]) -> ReconcileSummary {
    let mut summary = ReconcileSummary {
        total_rows: records.len(),
        ..Default::default()
    };
    for record in records {
        match record.match_type {
            MatchType::ExactMatch => summary.exact_match += 1,
            MatchType::BankOnly => summary.bank_only += 1,
            MatchType::LedgerOnly => summary.ledger_only += 1,
            MatchType::DateMismatch => summary.date_mismatch += 1,
        }
    }
    summary
}

/// Write the reconciliation report as CSV.
///
/// The header row is written even when there are no records, so an empty
/// reconciliation still yields a well-formed file.
pub fn write_csv<W: Write>(
    writer: W,
    records: &[MatchRecord],
    window_days: u32,
) -> Result<(), ReconError> {
    let mut w = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    w.write_record(REPORT_HEADER)
        .map_err(|e| ReconError::Io(e.to_string()))?;

    for record in records {
        w.write_record([
            record.date.to_string(),
            format_amount(record.amount_cents),
            record.description.clone().unwrap_or_default(),
            record.vendor_name.clone().unwrap_or_default(),
            record.match_type.label(window_days),
        ])
        .map_err(|e| ReconError::Io(e.to_string()))?;
    }

    w.flush().map_err(|e| ReconError::Io(e.to_string()))
}

/// Render the report to an in-memory UTF-8 string.
pub fn render_csv(records: &[MatchRecord], window_days: u32) -> Result<String, ReconError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, records, window_days)?;
    String::from_utf8(buf).map_err(|e| ReconError::Io(e.to_string()))
}

/// Write the report to a file, creating or truncating it.
pub fn write_csv_path(
    path: &Path,
    records: &[MatchRecord],
    window_days: u32,
) -> Result<(), ReconError> {
    let file = File::create(path)
        .map_err(|e| ReconError::Io(format!("cannot create {}: {e}", path.display())))?;
    write_csv(BufWriter::new(file), records, window_days)
}
