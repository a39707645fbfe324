// Tally CLI - headless reconciliation and valuation

mod exit_codes;
mod recon;
mod value;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Bank/ledger reconciliation and company valuation")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile a bank statement against an accounting ledger
    Recon {
        #[command(subcommand)]
        command: recon::ReconCommands,
    },

    /// Compute valuation figures from a TOML inputs file
    #[command(after_help = "\
Examples:
  tally value company.toml
  tally value company.toml --json
  tally value company.toml --risk-rate-url https://rates.example.com/risk
  TALLY_RISK_RATE_URL=https://rates.example.com/risk tally value company.toml
  tally value company.toml --offline")]
    Value {
        /// Path to the TOML valuation inputs
        inputs: PathBuf,

        /// Risk-rate endpoint returning {"premium": <fraction>}
        #[arg(long, env = "TALLY_RISK_RATE_URL", value_name = "URL")]
        risk_rate_url: Option<String>,

        /// Never fetch; use the built-in default premium
        #[arg(long)]
        offline: bool,

        /// Print the figures as JSON instead of the table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            // No subcommand = show help
            eprintln!("Usage: tally <command> [options]");
            eprintln!("       tally --help for more information");
            Ok(())
        }
        Some(Commands::Recon { command }) => recon::cmd_recon(command),
        Some(Commands::Value { inputs, risk_rate_url, offline, json }) => {
            value::cmd_value(inputs, risk_rate_url, offline, json)
        }
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
