//! Window Resolver: second pass that upgrades `BankOnly` rows to
//! `DateMismatch` when a same-amount ledger entry lies within the
//! configured day window.
//!
//! Only rows still classified `BankOnly` are candidates for upgrade.
//! `ExactMatch` rows are never reconsidered, and `LedgerOnly` rows are
//! never upgraded: a ledger entry is trivially within zero days of itself,
//! so scanning them would reclassify every unmatched ledger row against
//! its own amount. The upgraded row keeps the bank date and description;
//! only the vendor name is backfilled from the ledger.

use std::collections::BTreeMap;

use crate::config::TieBreak;
use crate::model::{LedgerEntry, MatchRecord, MatchType};

/// Resolve near-miss dates in place over the exact-match output.
pub fn resolve_window(
    records: &mut [MatchRecord],
    ledger: &[LedgerEntry],
    window_days: u32,
    tie_break: TieBreak,
) {
    if window_days == 0 {
        // A zero-width window can never help: a same-amount entry on the
        // same date would already have matched exactly.
        return;
    }

    let mut by_amount: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (i, entry) in ledger.iter().enumerate() {
        by_amount.entry(entry.amount_cents).or_default().push(i);
    }

    for record in records.iter_mut() {
        if record.match_type != MatchType::BankOnly {
            continue;
        }
        let Some(candidates) = by_amount.get(&record.amount_cents) else {
            continue;
        };
        if let Some(ledger_index) = pick_candidate(record, candidates, ledger, window_days, tie_break)
        {
            record.vendor_name = ledger[ledger_index].vendor_name.clone();
            record.match_type = MatchType::DateMismatch;
            record.ledger_index = Some(ledger_index);
        }
    }
}

/// Choose among same-amount entries within the window, or `None`.
///
/// `FirstInLedger` takes the earliest candidate in ledger order.
/// `ClosestDate` ranks by day distance; distance ties still fall back to
/// ledger order because `min_by_key` keeps the first minimum it sees.
fn pick_candidate(
    record: &MatchRecord,
    candidates: &[usize],
    ledger: &[LedgerEntry],
    window_days: u32,
    tie_break: TieBreak,
) -> Option<usize> {
    let distance =
        |i: &usize| -> u64 { (ledger[*i].date - record.date).num_days().unsigned_abs() };
    let in_window = |i: &&usize| -> bool { distance(i) <= u64::from(window_days) };

    match tie_break {
        TieBreak::FirstInLedger => candidates.iter().find(in_window).copied(),
        TieBreak::ClosestDate => {
            candidates.iter().filter(in_window).min_by_key(|i| distance(i)).copied()
        }
    }
}
