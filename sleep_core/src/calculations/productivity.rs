//! # Productivity Loss
//!
//! Uses the number of disruptors as a proxy for how much poor sleep drags on
//! work output. Each disruptor adds 5% of income, capped at 50%.

use serde::{Deserialize, Serialize};

use crate::assumptions::{PRODUCTIVITY_LOSS_CAP, PRODUCTIVITY_LOSS_PER_DISRUPTOR};

/// Estimated productivity loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductivityLoss {
    /// Whole-number percentage of income lost (0-50 with default assumptions)
    pub percent: u8,
    /// Income lost per year, rounded to whole dollars
    pub dollar_amount: f64,
}

/// Estimate productivity loss with the default 5%-per-disruptor rate.
///
/// ```rust
/// use sleep_core::calculations::productivity::calculate_productivity_loss;
///
/// let loss = calculate_productivity_loss(75_000.0, 1);
/// assert_eq!(loss.percent, 5);
/// assert_eq!(loss.dollar_amount, 3750.0);
/// ```
pub fn calculate_productivity_loss(annual_income: f64, disruptor_count: usize) -> ProductivityLoss {
    productivity_loss_with_rates(
        annual_income,
        disruptor_count,
        PRODUCTIVITY_LOSS_PER_DISRUPTOR,
        PRODUCTIVITY_LOSS_CAP,
    )
}

/// Estimate productivity loss with explicit per-disruptor rate and cap.
pub fn productivity_loss_with_rates(
    annual_income: f64,
    disruptor_count: usize,
    rate_per_disruptor: f64,
    cap: f64,
) -> ProductivityLoss {
    let rate = (disruptor_count as f64 * rate_per_disruptor).min(cap);

    ProductivityLoss {
        percent: (rate * 100.0).round() as u8,
        dollar_amount: (annual_income * rate).round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_disruptors_no_loss() {
        let loss = calculate_productivity_loss(75_000.0, 0);
        assert_eq!(loss.percent, 0);
        assert_eq!(loss.dollar_amount, 0.0);
    }

    #[test]
    fn test_linear_below_cap() {
        let loss = calculate_productivity_loss(100_000.0, 3);
        assert_eq!(loss.percent, 15);
        assert_eq!(loss.dollar_amount, 15_000.0);
    }

    #[test]
    fn test_cap_at_fifty_percent() {
        // 10 * 5% = 50%, 12 * 5% would be 60%
        assert_eq!(calculate_productivity_loss(80_000.0, 10).percent, 50);
        let loss = calculate_productivity_loss(80_000.0, 12);
        assert_eq!(loss.percent, 50);
        assert_eq!(loss.dollar_amount, 40_000.0);
    }

    #[test]
    fn test_dollars_rounded() {
        // 12345 * 0.05 = 617.25
        assert_eq!(calculate_productivity_loss(12_345.0, 1).dollar_amount, 617.0);
        // 12350 * 0.05 = 617.5
        assert_eq!(calculate_productivity_loss(12_350.0, 1).dollar_amount, 618.0);
    }

    #[test]
    fn test_zero_income() {
        let loss = calculate_productivity_loss(0.0, 4);
        assert_eq!(loss.percent, 20);
        assert_eq!(loss.dollar_amount, 0.0);
    }
}
