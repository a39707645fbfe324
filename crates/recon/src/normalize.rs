//! Record Normalizer: CSV text → typed records.
//!
//! Required columns are resolved by header name before any row is parsed,
//! so a schema problem surfaces as `MissingColumn` even when the rows are
//! also malformed. Row parsing is fail-fast: one bad date or amount aborts
//! the run — a partially reconciled financial report is worse than no
//! report. Extra columns are ignored.

use chrono::NaiveDate;

use crate::amount::parse_amount;
use crate::error::ReconError;
use crate::model::{LedgerEntry, Side, Transaction};

pub const COL_DATE: &str = "Date";
pub const COL_AMOUNT: &str = "Amount";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_VENDOR: &str = "Customer/Vendor Name";

/// Normalize bank-statement CSV. Requires `Date`, `Amount`, `Description`.
pub fn normalize_bank(csv_data: &str, date_format: &str) -> Result<Vec<Transaction>, ReconError> {
    let rows = read_rows(csv_data, Side::Bank, COL_DESCRIPTION, date_format)?;
    Ok(rows
        .into_iter()
        .map(|(date, amount_cents, text)| Transaction {
            date,
            amount_cents,
            description: text,
        })
        .collect())
}

/// Normalize accounting-ledger CSV. Requires `Date`, `Amount`,
/// `Customer/Vendor Name`.
pub fn normalize_ledger(csv_data: &str, date_format: &str) -> Result<Vec<LedgerEntry>, ReconError> {
    let rows = read_rows(csv_data, Side::Ledger, COL_VENDOR, date_format)?;
    Ok(rows
        .into_iter()
        .map(|(date, amount_cents, text)| LedgerEntry {
            date,
            amount_cents,
            vendor_name: text,
        })
        .collect())
}

struct ColumnIndex {
    date: usize,
    amount: usize,
    text: usize,
}

fn resolve_columns(
    headers: &csv::StringRecord,
    side: Side,
    text_column: &str,
) -> Result<ColumnIndex, ReconError> {
    let find = |name: &str| -> Result<usize, ReconError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| ReconError::MissingColumn {
                side,
                column: name.to_string(),
            })
    };
    Ok(ColumnIndex {
        date: find(COL_DATE)?,
        amount: find(COL_AMOUNT)?,
        text: find(text_column)?,
    })
}

/// Shared walker for both sides: (date, cents, optional text) per data row.
fn read_rows(
    csv_data: &str,
    side: Side,
    text_column: &str,
    date_format: &str,
) -> Result<Vec<(NaiveDate, i64, Option<String>)>, ReconError> {
    // Spreadsheet exports routinely lead with a UTF-8 BOM; it would corrupt
    // the first header name.
    let csv_data = csv_data.strip_prefix('\u{feff}').unwrap_or(csv_data);
    let mut reader = csv::ReaderBuilder::new().from_reader(csv_data.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ReconError::Io(format!("{side} input: {e}")))?
        .clone();
    let cols = resolve_columns(&headers, side, text_column)?;

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ReconError::Io(format!("{side} row {row}: {e}")))?;

        let date_raw = record.get(cols.date).unwrap_or("");
        let date = NaiveDate::parse_from_str(date_raw.trim(), date_format).map_err(|_| {
            ReconError::DateParse {
                side,
                row,
                value: date_raw.to_string(),
            }
        })?;

        let amount_raw = record.get(cols.amount).unwrap_or("");
        let amount_cents = parse_amount(amount_raw).map_err(|_| ReconError::AmountParse {
            side,
            row,
            value: amount_raw.to_string(),
        })?;

        let text = record
            .get(cols.text)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from);

        rows.push((date, amount_cents, text));
    }
    Ok(rows)
}
