//! Money amounts as integer cents.
//!
//! Amounts are parsed from decimal strings (`"100"`, `"100.5"`, `"-42.50"`)
//! into signed i64 cents and rendered back with exactly two fractional
//! digits. Integer math only — no floats anywhere near money.

/// Parse a decimal amount string to i64 cents.
///
/// Accepts an optional leading `-`, at most two fractional digits, and
/// surrounding whitespace. Returns a short reason on failure; callers wrap
/// it with row context.
pub fn parse_amount(s: &str) -> Result<i64, String> {
    let trimmed = s.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if digits.is_empty() {
        return Err("empty amount".to_string());
    }

    let (whole, frac) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("invalid amount: {trimmed}"));
    }
    if !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("invalid amount: {trimmed}"));
    }

    let whole: i64 = whole
        .parse()
        .map_err(|_| format!("amount out of range: {trimmed}"))?;
    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| format!("invalid amount: {trimmed}"))? * 10,
        2 => frac.parse().map_err(|_| format!("invalid amount: {trimmed}"))?,
        _ => return Err(format!("too many decimal places: {trimmed}")),
    };

    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac_cents))
        .ok_or_else(|| format!("amount out of range: {trimmed}"))?;
    Ok(if negative { -cents } else { cents })
}

/// Render i64 cents with exactly two decimal places: `10000` → `"100.00"`.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
