//! Currency formatting for validation messages.

/// Format a dollar amount with thousands separators and two decimals.
///
/// `1500000.0` → `"$1,500,000.00"`, `-12.5` → `"-$12.50"`. Values whose
/// cents do not fit in `u64`, and non-finite values, are printed ungrouped.
pub fn format_usd(amount: f64) -> String {
    let scaled = (amount.abs() * 100.0).round();
    if !scaled.is_finite() || scaled >= u64::MAX as f64 {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}${:.2}", amount.abs());
    }
    let cents = scaled as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}
