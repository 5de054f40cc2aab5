//! Display formatting shared by the CLI summary, share text and PDF report.

/// Format a dollar amount as whole US dollars with thousands separators.
///
/// Halves round away from zero.
///
/// ```rust
/// use sleep_core::format::format_currency;
///
/// assert_eq!(format_currency(43400.0), "$43,400");
/// assert_eq!(format_currency(1277.5), "$1,278");
/// assert_eq!(format_currency(-2500.0), "-$2,500");
/// ```
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a whole percentage ("184%").
pub fn format_percent(value: impl std::fmt::Display) -> String {
    format!("{}%", value)
}

/// Format a break-even figure; `None` means the price is never recovered.
pub fn format_break_even(months: Option<u32>) -> String {
    match months {
        Some(1) => "1 month".to_string(),
        Some(m) => format!("{} months", m),
        None => "never".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(0.4), "$0");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(100_000.0), "$100,000");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_currency(-0.2), "$0");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(22), "22%");
        assert_eq!(format_percent(0u8), "0%");
    }

    #[test]
    fn test_break_even() {
        assert_eq!(format_break_even(Some(7)), "7 months");
        assert_eq!(format_break_even(Some(1)), "1 month");
        assert_eq!(format_break_even(None), "never");
    }
}
