//! `tally-valuation` — company valuation arithmetic.
//!
//! Book value, EBITDA multiple, WACC, and discounted cash flow over a
//! TOML financial statement, plus an industry risk-premium input that can
//! be fetched from a rates endpoint or defaulted offline. Shares no state
//! with the reconciliation engine.

pub mod formulas;
pub mod inputs;
pub mod risk;

pub use formulas::{book_value, dcf, ebitda_valuation, wacc};
pub use inputs::{ValuationError, ValuationInputs};
pub use risk::{
    fetch_risk_premium, risk_premium_with_fallback, FetchError, RateSource, RiskRate,
    DEFAULT_RISK_PREMIUM,
};
