//! Industry risk-premium input.
//!
//! The premium can be fetched from a rates endpoint; any failure there
//! (connection, status, payload) falls back to `DEFAULT_RISK_PREMIUM`.
//! The fallback is reported to the caller as a warning to surface, never
//! as an error: a valuation run must not die because a rates service is
//! down.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_RISK_PREMIUM: f64 = 0.03;
pub const FETCH_TIMEOUT_SECS: u64 = 15;

const USER_AGENT: &str = concat!("tally/", env!("CARGO_PKG_VERSION"));

#[derive(Debug)]
pub enum FetchError {
    Client(String),
    Request(String),
    Status(u16),
    Payload(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Client(msg) => write!(f, "cannot build HTTP client: {msg}"),
            FetchError::Request(msg) => write!(f, "risk-rate request failed: {msg}"),
            FetchError::Status(code) => write!(f, "risk-rate endpoint returned HTTP {code}"),
            FetchError::Payload(msg) => write!(f, "risk-rate response invalid: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    Fetched,
    Default,
}

/// The premium actually used for a run, and where it came from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskRate {
    pub premium: f64,
    pub source: RateSource,
}

#[derive(Deserialize)]
struct PremiumBody {
    premium: f64,
}

/// GET the endpoint and extract the `premium` field.
///
/// The request carries a bounded timeout so an unresponsive rates service
/// delays a run by at most `FETCH_TIMEOUT_SECS`.
pub fn fetch_risk_premium(url: &str) -> Result<f64, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body: PremiumBody = response
        .json()
        .map_err(|e| FetchError::Payload(e.to_string()))?;

    if !body.premium.is_finite() || !(0.0..1.0).contains(&body.premium) {
        return Err(FetchError::Payload(format!(
            "premium {} outside [0, 1)",
            body.premium
        )));
    }
    Ok(body.premium)
}

/// Resolve the premium for a run. Never fails: a fetch problem yields the
/// default plus the error that caused the fallback.
pub fn risk_premium_with_fallback(url: Option<&str>) -> (RiskRate, Option<FetchError>) {
    let default = RiskRate {
        premium: DEFAULT_RISK_PREMIUM,
        source: RateSource::Default,
    };
    match url {
        None => (default, None),
        Some(url) => match fetch_risk_premium(url) {
            Ok(premium) => (
                RiskRate {
                    premium,
                    source: RateSource::Fetched,
                },
                None,
            ),
            Err(e) => (default, Some(e)),
        },
    }
}
