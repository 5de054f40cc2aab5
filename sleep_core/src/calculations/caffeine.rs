//! # Caffeine Cost
//!
//! Annualizes what the user spends on coffee, energy drinks and supplements
//! to push through poor sleep.
//!
//! A monthly spend of `0` means "not provided" and falls back to the daily
//! average. A user who genuinely spends nothing cannot be represented; that
//! is the documented behavior of the model, not an oversight here.

use crate::assumptions::CAFFEINE_COST_PER_DAY;

/// Annual caffeine cost using the default daily rate.
///
/// ```rust
/// use sleep_core::calculations::caffeine::calculate_caffeine_cost;
///
/// assert_eq!(calculate_caffeine_cost(100.0), 1200.0);
/// assert_eq!(calculate_caffeine_cost(0.0), 3.5 * 365.0);
/// ```
pub fn calculate_caffeine_cost(monthly_spending: f64) -> f64 {
    caffeine_cost_with_rate(monthly_spending, CAFFEINE_COST_PER_DAY)
}

/// Annual caffeine cost with an explicit fallback daily rate.
pub fn caffeine_cost_with_rate(monthly_spending: f64, cost_per_day: f64) -> f64 {
    if monthly_spending > 0.0 {
        monthly_spending * 12.0
    } else {
        cost_per_day * 365.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_is_annualized() {
        assert_eq!(calculate_caffeine_cost(75.0), 900.0);
        assert_eq!(calculate_caffeine_cost(100.0), 1200.0);
    }

    #[test]
    fn test_zero_uses_daily_average() {
        assert!((calculate_caffeine_cost(0.0) - 1277.5).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_monthly() {
        assert!((calculate_caffeine_cost(0.5) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_rate() {
        assert_eq!(caffeine_cost_with_rate(0.0, 2.0), 730.0);
        assert_eq!(caffeine_cost_with_rate(10.0, 2.0), 120.0);
    }
}
