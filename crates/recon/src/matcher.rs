//! Exact Matcher: full outer join of bank rows against ledger rows on the
//! composite key `(date, amount)`.
//!
//! Output order is stable and derived only from input order: bank rows in
//! statement order, each expanded by its key-matching ledger entries in
//! ledger order, followed by unmatched ledger entries in ledger order.
//! Duplicate keys on both sides produce the full cross product for that key.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::model::{LedgerEntry, MatchRecord, MatchType, Transaction};

type JoinKey = (NaiveDate, i64);

/// Join both sides into provisional match records.
///
/// `DateMismatch` never appears here; it is an upgrade applied later by the
/// window resolver to rows this pass classifies as `BankOnly`.
pub fn match_exact(bank: &[Transaction], ledger: &[LedgerEntry]) -> Vec<MatchRecord> {
    let mut ledger_by_key: BTreeMap<JoinKey, Vec<usize>> = BTreeMap::new();
    for (i, entry) in ledger.iter().enumerate() {
        ledger_by_key
            .entry((entry.date, entry.amount_cents))
            .or_default()
            .push(i);
    }

    let mut bank_keys: BTreeSet<JoinKey> = BTreeSet::new();
    let mut records = Vec::with_capacity(bank.len() + ledger.len());

    for (bank_index, tx) in bank.iter().enumerate() {
        let key = (tx.date, tx.amount_cents);
        bank_keys.insert(key);
        match ledger_by_key.get(&key) {
            Some(entries) => {
                for &ledger_index in entries {
                    records.push(MatchRecord {
                        date: tx.date,
                        amount_cents: tx.amount_cents,
                        description: tx.description.clone(),
                        vendor_name: ledger[ledger_index].vendor_name.clone(),
                        match_type: MatchType::ExactMatch,
                        bank_index: Some(bank_index),
                        ledger_index: Some(ledger_index),
                    });
                }
            }
            None => {
                records.push(MatchRecord {
                    date: tx.date,
                    amount_cents: tx.amount_cents,
                    description: tx.description.clone(),
                    vendor_name: None,
                    match_type: MatchType::BankOnly,
                    bank_index: Some(bank_index),
                    ledger_index: None,
                });
            }
        }
    }

    for (ledger_index, entry) in ledger.iter().enumerate() {
        if bank_keys.contains(&(entry.date, entry.amount_cents)) {
            continue;
        }
        records.push(MatchRecord {
            date: entry.date,
            amount_cents: entry.amount_cents,
            description: None,
            vendor_name: entry.vendor_name.clone(),
            match_type: MatchType::LedgerOnly,
            bank_index: None,
            ledger_index: Some(ledger_index),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn tx(date: &str, cents: i64, desc: &str) -> Transaction {
        Transaction {
            date: d(date),
            amount_cents: cents,
            description: Some(desc.to_string()),
        }
    }

    fn entry(date: &str, cents: i64, vendor: &str) -> LedgerEntry {
        LedgerEntry {
            date: d(date),
            amount_cents: cents,
            vendor_name: Some(vendor.to_string()),
        }
    }

    #[test]
    fn test_exact_match_merges_both_sides() {
        let bank = vec![tx("2024-01-10", 10000, "Invoice 1")];
        let ledger = vec![entry("2024-01-10", 10000, "Acme Co")];
        let records = match_exact(&bank, &ledger);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].match_type, MatchType::ExactMatch);
        assert_eq!(records[0].description.as_deref(), Some("Invoice 1"));
        assert_eq!(records[0].vendor_name.as_deref(), Some("Acme Co"));
        assert_eq!(records[0].bank_index, Some(0));
        assert_eq!(records[0].ledger_index, Some(0));
    }

    #[test]
    fn test_same_date_different_amount_does_not_match() {
        let bank = vec![tx("2024-01-10", 10000, "Invoice 1")];
        let ledger = vec![entry("2024-01-10", 10001, "Acme Co")];
        let records = match_exact(&bank, &ledger);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].match_type, MatchType::BankOnly);
        assert_eq!(records[1].match_type, MatchType::LedgerOnly);
    }

    #[test]
    fn test_unmatched_rows_keep_their_own_fields_only() {
        let bank = vec![tx("2024-02-05", 7500, "Invoice 3")];
        let ledger = vec![entry("2024-02-01", 5000, "Beta Inc")];
        let records = match_exact(&bank, &ledger);

        assert_eq!(records[0].match_type, MatchType::BankOnly);
        assert_eq!(records[0].vendor_name, None);
        assert_eq!(records[0].ledger_index, None);

        assert_eq!(records[1].match_type, MatchType::LedgerOnly);
        assert_eq!(records[1].description, None);
        assert_eq!(records[1].bank_index, None);
    }

    #[test]
    fn test_duplicate_keys_produce_cross_product() {
        // 2 bank rows x 3 ledger entries on one key = 6 exact records.
        let bank = vec![
            tx("2024-01-10", 10000, "wire a"),
            tx("2024-01-10", 10000, "wire b"),
        ];
        let ledger = vec![
            entry("2024-01-10", 10000, "Acme Co"),
            entry("2024-01-10", 10000, "Acme Co"),
            entry("2024-01-10", 10000, "Acme Holdings"),
        ];
        let records = match_exact(&bank, &ledger);
        assert_eq!(records.len(), 6);
        assert!(records.iter().all(|r| r.match_type == MatchType::ExactMatch));
        // Bank order outer, ledger order inner.
        let pairs: Vec<(usize, usize)> = records
            .iter()
            .map(|r| (r.bank_index.unwrap(), r.ledger_index.unwrap()))
            .collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_output_order_is_bank_then_leftover_ledger() {
        let bank = vec![
            tx("2024-01-12", 25000, "Invoice 2"),
            tx("2024-01-10", 10000, "Invoice 1"),
        ];
        let ledger = vec![
            entry("2024-02-01", 5000, "Beta Inc"),
            entry("2024-01-10", 10000, "Acme Co"),
            entry("2024-01-16", 25000, "Greenleaf Supply"),
        ];
        let records = match_exact(&bank, &ledger);
        // Bank rows keep statement order even when unsorted by date.
        assert_eq!(records[0].description.as_deref(), Some("Invoice 2"));
        assert_eq!(records[1].description.as_deref(), Some("Invoice 1"));
        // Ledger leftovers keep ledger order.
        assert_eq!(records[2].vendor_name.as_deref(), Some("Beta Inc"));
        assert_eq!(records[3].vendor_name.as_deref(), Some("Greenleaf Supply"));
    }

    #[test]
    fn test_empty_bank_yields_all_ledger_only() {
        let ledger = vec![
            entry("2024-01-10", 10000, "Acme Co"),
            entry("2024-02-01", 5000, "Beta Inc"),
        ];
        let records = match_exact(&[], &ledger);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.match_type == MatchType::LedgerOnly));
    }

    #[test]
    fn test_empty_ledger_yields_all_bank_only() {
        let bank = vec![tx("2024-01-10", 10000, "Invoice 1")];
        let records = match_exact(&bank, &[]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].match_type, MatchType::BankOnly);
    }

    #[test]
    fn test_both_empty_yields_nothing() {
        assert!(match_exact(&[], &[]).is_empty());
    }

    #[test]
    fn test_negative_amounts_join_like_any_other_key() {
        let bank = vec![tx("2024-01-15", -4250, "Refund A")];
        let ledger = vec![entry("2024-01-15", -4250, "Refund Desk")];
        let records = match_exact(&bank, &ledger);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].match_type, MatchType::ExactMatch);
    }
}
