//! `tally recon` — config-driven bank/ledger reconciliation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use tally_recon::amount::format_amount;
use tally_recon::normalize::{normalize_bank, normalize_ledger};
use tally_recon::{
    reconcile, render_csv, write_csv_path, LedgerEntry, ReconReport, ReconcileConfig,
    ReconcileOptions, TieBreak, Transaction,
};

use crate::exit_codes::{recon_error_code, EXIT_RECON_RUNTIME, EXIT_RECON_UNMATCHED, EXIT_USAGE};
use crate::CliError;

#[derive(Subcommand)]
pub enum ReconCommands {
    /// Run reconciliation and write the CSV report
    #[command(after_help = "\
The report goes to stdout unless --out is given. Exit code 0 means every row
reconciled exactly; exit code 3 means the report contains unreconciled rows.
The report is written in full either way.

Examples:
  tally recon run recon.toml
  tally recon run --bank bank.csv --ledger ledger.csv
  tally recon run recon.toml --out report.csv
  tally recon run recon.toml --window-days 7 --tie-break closest-date
  tally recon run recon.toml --json | jq .summary
  tally recon run recon.toml --out report.csv --fingerprint --quiet")]
    Run {
        /// Path to the recon TOML config (omit when using --bank/--ledger)
        config: Option<PathBuf>,

        /// Bank statement CSV (overrides the config's bank_file)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Accounting ledger CSV (overrides the config's ledger_file)
        #[arg(long)]
        ledger: Option<PathBuf>,

        /// Write the CSV report to a file instead of stdout
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,

        /// Print the full report as JSON to stdout instead of CSV
        #[arg(long)]
        json: bool,

        /// Date tolerance in days (overrides the config)
        #[arg(long, value_name = "DAYS")]
        window_days: Option<u32>,

        /// Tie-break policy for window candidates (overrides the config)
        #[arg(long, value_enum)]
        tie_break: Option<TieBreakArg>,

        /// strftime format for input dates (overrides the config)
        #[arg(long, value_name = "FMT")]
        date_format: Option<String>,

        /// Print the first rows of each input to stderr before matching
        #[arg(long)]
        preview: bool,

        /// Print a blake3 fingerprint of the report to stderr
        #[arg(long)]
        fingerprint: bool,

        /// Suppress the stderr summary
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Validate a recon config without running
    #[command(after_help = "\
Examples:
  tally recon validate recon.toml")]
    Validate {
        /// Path to the recon TOML config
        config: PathBuf,
    },
}

/// clap-facing mirror of the engine's tie-break policy.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TieBreakArg {
    /// First eligible candidate in ledger order
    FirstInLedger,
    /// Smallest date distance; ties fall back to ledger order
    ClosestDate,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::FirstInLedger => TieBreak::FirstInLedger,
            TieBreakArg::ClosestDate => TieBreak::ClosestDate,
        }
    }
}

pub fn cmd_recon(cmd: ReconCommands) -> Result<(), CliError> {
    match cmd {
        ReconCommands::Run {
            config,
            bank,
            ledger,
            out,
            json,
            window_days,
            tie_break,
            date_format,
            preview,
            fingerprint,
            quiet,
        } => cmd_recon_run(
            config, bank, ledger, out, json, window_days, tie_break, date_format, preview,
            fingerprint, quiet,
        ),
        ReconCommands::Validate { config } => cmd_recon_validate(config),
    }
}

fn recon_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError { code, message: msg.into(), hint: None }
}

/// Everything a run needs: two resolved input paths plus engine options.
struct RunPlan {
    bank_path: PathBuf,
    ledger_path: PathBuf,
    options: ReconcileOptions,
}

/// Merge config file and flags. The config (if any) provides the base;
/// explicit flags win. Config-relative paths resolve against the config
/// file's directory, flag paths against the working directory.
fn resolve_plan(
    config: Option<PathBuf>,
    bank: Option<PathBuf>,
    ledger: Option<PathBuf>,
    window_days: Option<u32>,
    tie_break: Option<TieBreakArg>,
    date_format: Option<String>,
) -> Result<RunPlan, CliError> {
    let (bank_path, ledger_path, mut options) = match config {
        Some(config_path) => {
            let config_str = fs::read_to_string(&config_path).map_err(|e| {
                recon_err(EXIT_RECON_RUNTIME, format!("cannot read config: {e}"))
            })?;
            let config = ReconcileConfig::from_toml(&config_str)
                .map_err(|e| recon_err(recon_error_code(&e), e.to_string()))?;
            let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
            (
                bank.unwrap_or_else(|| base_dir.join(&config.bank_file)),
                ledger.unwrap_or_else(|| base_dir.join(&config.ledger_file)),
                config.options,
            )
        }
        None => {
            let (Some(bank), Some(ledger)) = (bank, ledger) else {
                return Err(CliError::args("--bank and --ledger are required without a config")
                    .with_hint("pass a recon TOML config, or both --bank and --ledger"));
            };
            (bank, ledger, ReconcileOptions::default())
        }
    };

    if let Some(days) = window_days {
        options.window_days = days;
    }
    if let Some(policy) = tie_break {
        options.tie_break = policy.into();
    }
    if let Some(format) = date_format {
        options.date_format = format;
    }

    // The config layer caps the window; flag overrides get the same cap.
    if options.window_days > 366 {
        return Err(recon_err(
            EXIT_USAGE,
            format!("--window-days must be at most 366 (got {})", options.window_days),
        ));
    }

    Ok(RunPlan { bank_path, ledger_path, options })
}

#[allow(clippy::too_many_arguments)]
fn cmd_recon_run(
    config: Option<PathBuf>,
    bank: Option<PathBuf>,
    ledger: Option<PathBuf>,
    out: Option<PathBuf>,
    json_output: bool,
    window_days: Option<u32>,
    tie_break: Option<TieBreakArg>,
    date_format: Option<String>,
    preview: bool,
    fingerprint: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let plan = resolve_plan(config, bank, ledger, window_days, tie_break, date_format)?;

    let bank_csv = fs::read_to_string(&plan.bank_path).map_err(|e| {
        recon_err(
            EXIT_RECON_RUNTIME,
            format!("cannot read {}: {e}", plan.bank_path.display()),
        )
    })?;
    let ledger_csv = fs::read_to_string(&plan.ledger_path).map_err(|e| {
        recon_err(
            EXIT_RECON_RUNTIME,
            format!("cannot read {}: {e}", plan.ledger_path.display()),
        )
    })?;

    let bank_rows = normalize_bank(&bank_csv, &plan.options.date_format)
        .map_err(|e| recon_err(recon_error_code(&e), e.to_string()))?;
    let ledger_rows = normalize_ledger(&ledger_csv, &plan.options.date_format)
        .map_err(|e| recon_err(recon_error_code(&e), e.to_string()))?;

    if preview {
        print_input_preview(&bank_rows, &ledger_rows);
    }

    let report = reconcile(&bank_rows, &ledger_rows, &plan.options);
    let csv = render_csv(&report.records, plan.options.window_days)
        .map_err(|e| recon_err(EXIT_RECON_RUNTIME, e.to_string()))?;

    // Report artifacts first, then diagnostics, then the verdict. An
    // unreconciled exit must never truncate the report.
    if let Some(ref path) = out {
        write_csv_path(path, &report.records, plan.options.window_days).map_err(|e| {
            recon_err(
                EXIT_RECON_RUNTIME,
                format!("cannot write {}: {e}", path.display()),
            )
        })?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        let json_str = serde_json::to_string_pretty(&report).map_err(|e| {
            recon_err(EXIT_RECON_RUNTIME, format!("JSON serialization error: {e}"))
        })?;
        println!("{json_str}");
    } else if out.is_none() {
        print!("{csv}");
    }

    if fingerprint {
        eprintln!("report fingerprint: blake3:{}", blake3::hash(csv.as_bytes()).to_hex());
    }

    if !quiet {
        print_summary(&report);
    }

    let s = &report.summary;
    if s.bank_only > 0 || s.ledger_only > 0 || s.date_mismatch > 0 {
        return Err(recon_err(EXIT_RECON_UNMATCHED, "unreconciled rows found"));
    }

    Ok(())
}

fn print_summary(report: &ReconReport) {
    let s = &report.summary;
    eprintln!(
        "recon: {} bank x {} ledger rows — {} exact, {} date mismatch, {} bank only, {} ledger only",
        report.meta.bank_rows,
        report.meta.ledger_rows,
        s.exact_match,
        s.date_mismatch,
        s.bank_only,
        s.ledger_only,
    );
}

const PREVIEW_ROWS: usize = 5;

/// First rows of each normalized input, to stderr. Diagnostics only;
/// the CSV artifact is the contract.
fn print_input_preview(bank: &[Transaction], ledger: &[LedgerEntry]) {
    eprintln!("bank ({} rows):", bank.len());
    for tx in bank.iter().take(PREVIEW_ROWS) {
        eprintln!(
            "  {} | {:>12} | {}",
            tx.date,
            format_amount(tx.amount_cents),
            tx.description.as_deref().unwrap_or(""),
        );
    }
    if bank.len() > PREVIEW_ROWS {
        eprintln!("  ... {} more row(s)", bank.len() - PREVIEW_ROWS);
    }
    eprintln!("ledger ({} rows):", ledger.len());
    for entry in ledger.iter().take(PREVIEW_ROWS) {
        eprintln!(
            "  {} | {:>12} | {}",
            entry.date,
            format_amount(entry.amount_cents),
            entry.vendor_name.as_deref().unwrap_or(""),
        );
    }
    if ledger.len() > PREVIEW_ROWS {
        eprintln!("  ... {} more row(s)", ledger.len() - PREVIEW_ROWS);
    }
}

fn cmd_recon_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config_str = fs::read_to_string(&config_path)
        .map_err(|e| recon_err(EXIT_RECON_RUNTIME, format!("cannot read config: {e}")))?;

    let config = ReconcileConfig::from_toml(&config_str)
        .map_err(|e| recon_err(recon_error_code(&e), e.to_string()))?;

    eprintln!(
        "valid: bank '{}' vs ledger '{}', window ±{} days, tie-break {:?}",
        config.bank_file,
        config.ledger_file,
        config.options.window_days,
        config.options.tie_break,
    );
    Ok(())
}
