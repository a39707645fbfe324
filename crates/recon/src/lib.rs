//! `tally-recon` — bank/ledger reconciliation engine.
//!
//! Matches bank-statement transactions against accounting-ledger entries:
//! an exact full outer join on `(date, amount)`, then a windowed second
//! pass that flags same-amount entries whose dates disagree by a few days.
//! Pure transformation apart from file IO in `report`; the same inputs and
//! options always produce the same records.

pub mod amount;
pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod report;
pub mod resolver;

pub use config::{ReconcileConfig, ReconcileOptions, TieBreak};
pub use engine::{reconcile, reconcile_csv};
pub use error::ReconError;
pub use model::{
    LedgerEntry, MatchRecord, MatchType, ReconMeta, ReconReport, ReconcileSummary, Side,
    Transaction,
};
pub use report::{render_csv, summarize, write_csv, write_csv_path, REPORT_HEADER};
