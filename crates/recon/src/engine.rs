//! Pipeline driver: normalize, match, resolve, summarize.
//!
//! `reconcile` is a pure function of its inputs apart from the `run_at`
//! timestamp recorded in the metadata. The record list and summary depend
//! only on the two record sets and the options, so running twice on the
//! same inputs yields the same report body.

use crate::config::ReconcileOptions;
use crate::error::ReconError;
use crate::matcher::match_exact;
use crate::model::{LedgerEntry, ReconMeta, ReconReport, Transaction};
use crate::normalize::{normalize_bank, normalize_ledger};
use crate::report::summarize;
use crate::resolver::resolve_window;

/// Reconcile already-normalized records.
pub fn reconcile(
    bank: &[Transaction],
    ledger: &[LedgerEntry],
    options: &ReconcileOptions,
) -> ReconReport {
    let mut records = match_exact(bank, ledger);
    resolve_window(&mut records, ledger, options.window_days, options.tie_break);
    let summary = summarize(&records);

    ReconReport {
        meta: ReconMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            window_days: options.window_days,
            tie_break: options.tie_break,
            bank_rows: bank.len(),
            ledger_rows: ledger.len(),
        },
        summary,
        records,
    }
}

/// Reconcile raw CSV text from both sides.
pub fn reconcile_csv(
    bank_csv: &str,
    ledger_csv: &str,
    options: &ReconcileOptions,
) -> Result<ReconReport, ReconError> {
    let bank = normalize_bank(bank_csv, &options.date_format)?;
    let ledger = normalize_ledger(ledger_csv, &options.date_format)?;
    Ok(reconcile(&bank, &ledger, options))
}
