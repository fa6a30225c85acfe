//! Numeric input coercion and amount formatting
//!
//! Meal counts and money amounts are plain `f64` values (half meals are
//! common). User-typed text is coerced here before it ever reaches the
//! allocation engine: anything that does not parse as a finite number is 0.

/// Parse user-entered numeric text, coercing malformed input to zero
///
/// Accepts an optional leading currency symbol and thousands separators,
/// e.g. `"1,250.50"`, `"৳300"`, `"$12"`, `"-4"`, `"2.5"`.
pub fn coerce_amount(input: &str) -> f64 {
    parse_amount(input).unwrap_or(0.0)
}

/// Currency symbols accepted in front of an amount
const CURRENCY_SYMBOLS: [char; 5] = ['৳', '$', '€', '£', '₹'];

/// Parse user-entered numeric text, returning `None` when it is not a finite number
///
/// The grammar is an optional `-`, at most one currency symbol, then digits
/// with an optional decimal point and `,` separators. Anything else is rejected.
pub fn parse_amount(input: &str) -> Option<f64> {
    let s = input.trim();

    let (negative, s) = match s.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, s),
    };
    let s = s.strip_prefix(CURRENCY_SYMBOLS).unwrap_or(s).trim_start();

    let valid = s.chars().any(|c| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',');
    if !valid {
        return None;
    }

    let cleaned: String = s.chars().filter(|c| *c != ',').collect();
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(if negative { -value } else { value })
}

/// Format an amount with a currency symbol and fixed precision
pub fn format_amount(value: f64, symbol: &str, precision: usize) -> String {
    let value = normalize_zero(value, precision);
    if value < 0.0 {
        format!("-{}{:.*}", symbol, precision, value.abs())
    } else {
        format!("{}{:.*}", symbol, precision, value)
    }
}

/// Format a meal count, dropping the fraction when it is whole
pub fn format_meals(meals: f64) -> String {
    if meals.fract() == 0.0 {
        format!("{:.0}", meals)
    } else {
        format!("{}", meals)
    }
}

// Avoid printing "-0.0" for values that round to zero.
fn normalize_zero(value: f64, precision: usize) -> f64 {
    let scale = 10f64.powi(precision as i32);
    if (value * scale).round() == 0.0 {
        0.0
    } else {
        value
    }
}
