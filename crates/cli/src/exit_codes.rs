//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, missing file) |
//! | 3-9     | recon            | Reconciliation-specific codes            |
//! | 10-19   | value            | Valuation-specific codes                 |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
#[allow(dead_code)]
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Recon (3-9)
// =============================================================================

/// Report contains unreconciled rows (anything other than Exact Match).
/// Like `diff(1)`, this is "inputs differ", not a failure of the run itself;
/// the report is still written in full before the CLI exits.
pub const EXIT_RECON_UNMATCHED: u8 = 3;

/// Config file failed to parse or validate.
pub const EXIT_RECON_INVALID_CONFIG: u8 = 4;

/// Input CSV is missing a required column.
pub const EXIT_RECON_SCHEMA: u8 = 5;

/// A data row failed to parse (bad date or amount).
pub const EXIT_RECON_MALFORMED: u8 = 6;

/// Runtime failure (cannot read input, cannot write report).
pub const EXIT_RECON_RUNTIME: u8 = 7;

// =============================================================================
// Value (10-19)
// =============================================================================

/// Valuation inputs failed to parse or validate.
pub const EXIT_VALUE_INVALID_INPUTS: u8 = 10;

/// Runtime failure (cannot read inputs file).
pub const EXIT_VALUE_RUNTIME: u8 = 11;

// =============================================================================
// Error Mapping
// =============================================================================

use tally_recon::ReconError;

/// Map a ReconError to its exit code.
pub fn recon_error_code(err: &ReconError) -> u8 {
    match err {
        ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => EXIT_RECON_INVALID_CONFIG,
        ReconError::MissingColumn { .. } => EXIT_RECON_SCHEMA,
        ReconError::DateParse { .. } | ReconError::AmountParse { .. } => EXIT_RECON_MALFORMED,
        ReconError::Io(_) => EXIT_RECON_RUNTIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_recon::Side;

    #[test]
    fn test_recon_error_codes() {
        assert_eq!(
            recon_error_code(&ReconError::ConfigParse("bad".into())),
            EXIT_RECON_INVALID_CONFIG
        );
        assert_eq!(
            recon_error_code(&ReconError::MissingColumn {
                side: Side::Bank,
                column: "Amount".into()
            }),
            EXIT_RECON_SCHEMA
        );
        assert_eq!(
            recon_error_code(&ReconError::DateParse {
                side: Side::Ledger,
                row: 0,
                value: "x".into()
            }),
            EXIT_RECON_MALFORMED
        );
        assert_eq!(
            recon_error_code(&ReconError::Io("disk".into())),
            EXIT_RECON_RUNTIME
        );
    }
}
