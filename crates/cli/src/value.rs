//! `tally value` — company valuation from a TOML inputs file.
//!
//! The risk premium comes from `--risk-rate-url` (or `TALLY_RISK_RATE_URL`);
//! a fetch failure downgrades to the built-in default with a stderr warning,
//! never a non-zero exit. `--offline` skips the fetch entirely.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use tally_valuation::{
    book_value, dcf, ebitda_valuation, risk_premium_with_fallback, wacc, RateSource, RiskRate,
    ValuationInputs,
};

use crate::exit_codes::{EXIT_VALUE_INVALID_INPUTS, EXIT_VALUE_RUNTIME};
use crate::CliError;

fn value_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError { code, message: msg.into(), hint: None }
}

/// Valuation figures for one run. Doubles as the --json wire shape.
#[derive(Debug, Serialize)]
pub struct ValueReport {
    pub book_value: f64,
    pub ebitda_valuation: f64,
    pub wacc: f64,
    /// `"wacc"` when computed, `"configured"` when the inputs pin a rate.
    pub base_rate_source: &'static str,
    pub base_rate: f64,
    pub risk_premium: f64,
    pub risk_source: RateSource,
    pub discount_rate: f64,
    pub dcf_value: f64,
}

pub fn cmd_value(
    inputs_path: PathBuf,
    risk_rate_url: Option<String>,
    offline: bool,
    json: bool,
) -> Result<(), CliError> {
    let inputs_str = fs::read_to_string(&inputs_path).map_err(|e| {
        value_err(
            EXIT_VALUE_RUNTIME,
            format!("cannot read {}: {e}", inputs_path.display()),
        )
    })?;
    let inputs = ValuationInputs::from_toml(&inputs_str)
        .map_err(|e| value_err(EXIT_VALUE_INVALID_INPUTS, e.to_string()))?;

    let url = if offline { None } else { risk_rate_url };
    let (rate, warning) = risk_premium_with_fallback(url.as_deref());
    if let Some(warning) = warning {
        eprintln!("warning: {warning}; using default risk premium");
    }

    let report = build_report(&inputs, rate);

    if json {
        let json_str = serde_json::to_string_pretty(&report).map_err(|e| {
            value_err(EXIT_VALUE_RUNTIME, format!("JSON serialization error: {e}"))
        })?;
        println!("{json_str}");
    } else {
        print_report(&report);
    }
    Ok(())
}

fn build_report(inputs: &ValuationInputs, rate: RiskRate) -> ValueReport {
    let statement = &inputs.statement;
    let capital = &inputs.capital;
    let valuation = &inputs.valuation;

    let cost_of_capital = wacc(
        capital.equity,
        capital.debt,
        capital.cost_of_equity,
        capital.cost_of_debt,
        capital.tax_rate,
    );
    let (base_rate, base_rate_source) = match valuation.discount_rate {
        Some(rate) => (rate, "configured"),
        None => (cost_of_capital, "wacc"),
    };
    let discount_rate = base_rate + rate.premium;

    ValueReport {
        book_value: book_value(statement.assets, statement.liabilities),
        ebitda_valuation: ebitda_valuation(statement.ebitda, valuation.ebitda_multiple),
        wacc: cost_of_capital,
        base_rate_source,
        base_rate,
        risk_premium: rate.premium,
        risk_source: rate.source,
        discount_rate,
        dcf_value: dcf(&valuation.cash_flows, discount_rate),
    }
}

fn print_report(report: &ValueReport) {
    let premium_label = match report.risk_source {
        RateSource::Fetched => "fetched",
        RateSource::Default => "default",
    };
    println!("book value:        {:.2}", report.book_value);
    println!("ebitda valuation:  {:.2}", report.ebitda_valuation);
    println!("wacc:              {:.2}%", report.wacc * 100.0);
    println!(
        "discount rate:     {:.2}% ({} {:.2}% + {} risk premium {:.2}%)",
        report.discount_rate * 100.0,
        report.base_rate_source,
        report.base_rate * 100.0,
        premium_label,
        report.risk_premium * 100.0,
    );
    println!("dcf value:         {:.2}", report.dcf_value);
}
