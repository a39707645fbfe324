//! Financial-statement inputs, loaded from TOML.

use std::fmt;

use serde::Deserialize;

#[derive(Debug)]
pub enum ValuationError {
    Parse(String),
    Validation(String),
}

impl fmt::Display for ValuationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuationError::Parse(msg) => write!(f, "inputs parse error: {msg}"),
            ValuationError::Validation(msg) => write!(f, "inputs validation error: {msg}"),
        }
    }
}

impl std::error::Error for ValuationError {}

/// Balance-sheet and earnings figures.
#[derive(Debug, Clone, Deserialize)]
pub struct Statement {
    pub assets: f64,
    pub liabilities: f64,
    pub ebitda: f64,
}

/// Valuation knobs: the multiple, the projected flows, and an optional
/// explicit discount rate (the computed WACC is used when absent).
#[derive(Debug, Clone, Deserialize)]
pub struct ValuationParams {
    pub ebitda_multiple: f64,
    pub cash_flows: Vec<f64>,
    #[serde(default)]
    pub discount_rate: Option<f64>,
}

/// Capital structure for the WACC computation.
#[derive(Debug, Clone, Deserialize)]
pub struct Capital {
    pub equity: f64,
    pub debt: f64,
    pub cost_of_equity: f64,
    pub cost_of_debt: f64,
    pub tax_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValuationInputs {
    pub statement: Statement,
    pub valuation: ValuationParams,
    pub capital: Capital,
}

impl ValuationInputs {
    pub fn from_toml(toml_str: &str) -> Result<Self, ValuationError> {
        let inputs: ValuationInputs =
            toml::from_str(toml_str).map_err(|e| ValuationError::Parse(e.to_string()))?;
        inputs.validate()?;
        Ok(inputs)
    }

    pub fn validate(&self) -> Result<(), ValuationError> {
        let reject = |msg: String| Err(ValuationError::Validation(msg));

        let numbers = [
            ("statement.assets", self.statement.assets),
            ("statement.liabilities", self.statement.liabilities),
            ("statement.ebitda", self.statement.ebitda),
            ("valuation.ebitda_multiple", self.valuation.ebitda_multiple),
            ("capital.equity", self.capital.equity),
            ("capital.debt", self.capital.debt),
            ("capital.cost_of_equity", self.capital.cost_of_equity),
            ("capital.cost_of_debt", self.capital.cost_of_debt),
            ("capital.tax_rate", self.capital.tax_rate),
        ];
        for (name, value) in numbers {
            if !value.is_finite() {
                return reject(format!("{name} must be a finite number (got {value})"));
            }
        }
        for (t, cf) in self.valuation.cash_flows.iter().enumerate() {
            if !cf.is_finite() {
                return reject(format!("valuation.cash_flows[{t}] must be finite (got {cf})"));
            }
        }
        if self.valuation.cash_flows.is_empty() {
            return reject("valuation.cash_flows must not be empty".to_string());
        }
        if self.valuation.ebitda_multiple <= 0.0 {
            return reject(format!(
                "valuation.ebitda_multiple must be positive (got {})",
                self.valuation.ebitda_multiple
            ));
        }
        if !(0.0..1.0).contains(&self.capital.tax_rate) {
            return reject(format!(
                "capital.tax_rate must be in [0, 1) (got {})",
                self.capital.tax_rate
            ));
        }
        if self.capital.equity + self.capital.debt <= 0.0 {
            return reject("capital.equity + capital.debt must be positive".to_string());
        }
        if let Some(rate) = self.valuation.discount_rate {
            if !rate.is_finite() || rate <= -1.0 {
                return reject(format!(
                    "valuation.discount_rate must be a finite number above -1 (got {rate})"
                ));
            }
        }
        Ok(())
    }
}
