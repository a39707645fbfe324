//! Run options and the TOML pipeline config.
//!
//! `ReconcileOptions` is the engine-level knob set: window width, tie-break
//! policy, input date format. `ReconcileConfig` is the on-disk shape the CLI
//! consumes — the two input files plus an optional `[options]` table.
//! `from_toml` deserializes and then validates; nothing here touches the
//! filesystem, so file paths are resolved by the caller (relative to the
//! config file's directory).

use serde::{Deserialize, Serialize};

use crate::error::ReconError;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How the window resolver picks among several eligible candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First candidate in the ledger's original input order. Reference
    /// behavior, kept as the default for compatibility; it ignores date
    /// distance entirely.
    FirstInLedger,
    /// Smallest absolute date distance; ties broken by ledger order.
    ClosestDate,
}

fn default_tie_break() -> TieBreak {
    TieBreak::FirstInLedger
}

fn default_window_days() -> u32 {
    5
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Engine options for one reconciliation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileOptions {
    /// Symmetric, inclusive date tolerance in days.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_tie_break")]
    pub tie_break: TieBreak,
    /// strftime format for parsing input dates. Output is always ISO.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            tie_break: default_tie_break(),
            date_format: default_date_format(),
        }
    }
}

// ---------------------------------------------------------------------------
// On-disk config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ReconcileConfig {
    /// Bank statement CSV path, relative to the config file.
    pub bank_file: String,
    /// Accounting ledger CSV path, relative to the config file.
    pub ledger_file: String,
    #[serde(default)]
    pub options: ReconcileOptions,
}

impl ReconcileConfig {
    pub fn from_toml(s: &str) -> Result<Self, ReconError> {
        let config: Self =
            toml::from_str(s).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ReconError> {
        if self.bank_file.trim().is_empty() {
            return Err(ReconError::ConfigValidation(
                "bank_file must not be empty".to_string(),
            ));
        }
        if self.ledger_file.trim().is_empty() {
            return Err(ReconError::ConfigValidation(
                "ledger_file must not be empty".to_string(),
            ));
        }
        if self.options.date_format.trim().is_empty() {
            return Err(ReconError::ConfigValidation(
                "options.date_format must not be empty".to_string(),
            ));
        }
        // A "tolerance" wider than a year is a config mistake, not a window.
        if self.options.window_days > 366 {
            return Err(ReconError::ConfigValidation(format!(
                "options.window_days must be at most 366 (got {})",
                self.options.window_days
            )));
        }
        Ok(())
    }
}
