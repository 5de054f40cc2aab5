//! # Return Projection
//!
//! Turns the total annual cost of poor sleep into investment figures for a
//! mattress purchase:
//!
//! - yearly savings = total annual cost x improvement factor (60%)
//! - ROI % = savings / price x 100, rounded
//! - break-even = price / monthly savings, rounded up to whole months
//! - ten-year value = savings x lifespan - price (may be negative)
//!
//! A price of zero (or less) has no meaningful ROI, so the projection is
//! refused with [`CalcError::UndefinedProjection`]. The same error is returned
//! when the figures would overflow to infinity or past the range of `roi`.
//! Zero savings leave the ROI at 0% and break-even at `None` ("never"), as
//! does a break-even too far out to count in `u32` months.

use serde::{Deserialize, Serialize};

use crate::assumptions::{IMPROVEMENT_FACTOR, MATTRESS_LIFESPAN_YEARS};
use crate::errors::{CalcError, CalcResult};

/// Investment figures for a mattress purchase.
///
/// ## JSON Example
///
/// ```json
/// {
///   "yearly_savings": 4590.0,
///   "roi": 184,
///   "break_even_months": 7,
///   "ten_year_value": 43400.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnProjection {
    /// Dollars recovered per year
    pub yearly_savings: f64,
    /// Annual return as a whole percentage
    pub roi: i64,
    /// Months until cumulative savings cover the price; `None` if never
    pub break_even_months: Option<u32>,
    /// Net value over the mattress lifespan
    pub ten_year_value: f64,
}

/// Project returns with the default 60% improvement over 10 years.
///
/// ```rust
/// use sleep_core::calculations::projection::project_returns;
///
/// let p = project_returns(900.0, 2500.0).unwrap();
/// assert_eq!(p.roi, 22);
/// assert_eq!(p.break_even_months, Some(56));
/// assert!(project_returns(900.0, 0.0).is_err());
/// ```
pub fn project_returns(total_annual_cost: f64, mattress_price: f64) -> CalcResult<ReturnProjection> {
    project_returns_with(
        total_annual_cost,
        mattress_price,
        IMPROVEMENT_FACTOR,
        MATTRESS_LIFESPAN_YEARS,
    )
}

/// Project returns with an explicit improvement factor and lifespan.
pub fn project_returns_with(
    total_annual_cost: f64,
    mattress_price: f64,
    improvement_factor: f64,
    lifespan_years: u32,
) -> CalcResult<ReturnProjection> {
    if !mattress_price.is_finite() || mattress_price <= 0.0 {
        return Err(CalcError::undefined_projection(
            "mattress_price",
            mattress_price.to_string(),
            "ROI and break-even need a positive mattress price",
        ));
    }

    let yearly_savings = total_annual_cost * improvement_factor;
    let ten_year_value = yearly_savings * f64::from(lifespan_years) - mattress_price;
    if !yearly_savings.is_finite() || !ten_year_value.is_finite() {
        return Err(CalcError::undefined_projection(
            "total_annual_cost",
            total_annual_cost.to_string(),
            "Savings overflow the representable range",
        ));
    }

    let roi_percent = (yearly_savings / mattress_price * 100.0).round();
    if !roi_percent.is_finite() || roi_percent.abs() >= i64::MAX as f64 {
        return Err(CalcError::undefined_projection(
            "mattress_price",
            mattress_price.to_string(),
            "ROI overflows the representable range",
        ));
    }
    let roi = roi_percent as i64;

    let monthly_savings = yearly_savings / 12.0;
    let break_even_months = if monthly_savings > 0.0 {
        let months = (mattress_price / monthly_savings).ceil();
        // u32::MAX months is ~358 million years
        if months <= f64::from(u32::MAX) {
            Some(months as u32)
        } else {
            None
        }
    } else {
        None
    };

    tracing::debug!(
        yearly_savings,
        roi,
        ?break_even_months,
        ten_year_value,
        "projected returns"
    );

    Ok(ReturnProjection {
        yearly_savings,
        roi,
        break_even_months,
        ten_year_value,
    })
}
