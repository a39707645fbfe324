//! The four valuation formulas. Plain `f64` arithmetic: these are
//! estimates built on projected figures, not ledger money, so exact-cents
//! discipline does not apply.

/// Book value: assets minus liabilities.
pub fn book_value(assets: f64, liabilities: f64) -> f64 {
    assets - liabilities
}

/// Enterprise value as a multiple of EBITDA.
pub fn ebitda_valuation(ebitda: f64, multiple: f64) -> f64 {
    ebitda * multiple
}

/// Weighted average cost of capital:
/// `(E/V)·Re + (D/V)·Rd·(1 − Tc)` with `V = E + D`.
///
/// Callers must ensure `equity + debt > 0` (see `ValuationInputs::validate`).
pub fn wacc(equity: f64, debt: f64, cost_of_equity: f64, cost_of_debt: f64, tax_rate: f64) -> f64 {
    let total = equity + debt;
    (equity / total) * cost_of_equity + (debt / total) * cost_of_debt * (1.0 - tax_rate)
}

/// Discounted cash flow: `Σ cf_t / (1 + rate)^t` for `t = 1..=n`.
///
/// Flows are end-of-period, so the first flow is discounted one full
/// period.
pub fn dcf(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(i, cf)| cf / (1.0 + rate).powi(i as i32 + 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_book_value() {
        close(book_value(500_000.0, 180_000.0), 320_000.0);
        close(book_value(100.0, 250.0), -150.0);
    }

    #[test]
    fn test_ebitda_valuation() {
        close(ebitda_valuation(120_000.0, 4.5), 540_000.0);
        close(ebitda_valuation(-50_000.0, 3.0), -150_000.0);
    }

    #[test]
    fn test_wacc_mixed_capital() {
        // E=1.2M at 12%, D=0.5M at 7%, 25% tax:
        // (1.2/1.7)*0.12 + (0.5/1.7)*0.07*0.75 = 0.17025/1.7
        close(
            wacc(1_200_000.0, 500_000.0, 0.12, 0.07, 0.25),
            0.100_147_058_823_529_41,
        );
    }

    #[test]
    fn test_wacc_degenerate_structures() {
        // All equity: the debt term vanishes.
        close(wacc(100.0, 0.0, 0.10, 0.05, 0.30), 0.10);
        // All debt: only the after-tax debt cost remains.
        close(wacc(0.0, 100.0, 0.10, 0.05, 0.30), 0.035);
    }

    #[test]
    fn test_dcf_two_periods() {
        // 100/1.1 + 200/1.21
        close(dcf(&[100.0, 200.0], 0.1), 256.198_347_107_438_04);
    }

    #[test]
    fn test_dcf_zero_rate_is_plain_sum() {
        close(dcf(&[100.0, 200.0, 300.0], 0.0), 600.0);
    }

    #[test]
    fn test_dcf_empty_flows() {
        close(dcf(&[], 0.1), 0.0);
    }

    #[test]
    fn test_dcf_negative_flow() {
        // An outflow in year one: -100/1.05 + 210/1.1025
        close(dcf(&[-100.0, 210.0], 0.05), 95.238_095_238_095_24);
    }
}
