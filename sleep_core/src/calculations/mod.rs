//! # Sleep Cost Calculations
//!
//! The formula pipeline that turns four user inputs into the full result
//! record. Each stage lives in its own module and is a pure function:
//!
//! - [`crate::disruptors`] - annual cost of the selected sleep problems
//! - [`caffeine`] - annualized caffeine spend
//! - [`productivity`] - income lost to poor sleep
//! - [`projection`] - ROI, break-even and ten-year value of a mattress
//! - [`score`] - 0-100 sleep score and letter grade
//!
//! [`calculate_results`] runs them in that order after validating inputs.
//!
//! ## Example
//!
//! ```rust
//! use sleep_core::calculations::{calculate_results, CalculatorInputs};
//!
//! let inputs = CalculatorInputs::new(75_000.0, 75.0, 2500.0).with_disruptor("snoring-apnea");
//! let results = calculate_results(&inputs).unwrap();
//!
//! assert_eq!(results.total_annual_cost, 7650.0);
//! assert_eq!(results.roi, 184);
//! assert_eq!(results.break_even_months, Some(7));
//! ```

pub mod caffeine;
pub mod productivity;
pub mod projection;
pub mod score;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::assumptions::{
    Assumptions, DEFAULT_ANNUAL_INCOME, DEFAULT_MATTRESS_PRICE, DEFAULT_MONTHLY_CAFFEINE,
};
use crate::disruptors::{self, resolve_disruptors};
use crate::errors::{CalcError, CalcResult};

pub use caffeine::calculate_caffeine_cost;
pub use productivity::{calculate_productivity_loss, ProductivityLoss};
pub use projection::{project_returns, ReturnProjection};
pub use score::{calculate_sleep_score, ScoreGrade, SleepScore};

/// User inputs for one calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "annual_income": 75000.0,
///   "selected_disruptors": ["hot-sleep", "snoring-apnea"],
///   "monthly_caffeine": 75.0,
///   "mattress_price": 2500.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// Yearly income in dollars, used for productivity scaling
    pub annual_income: f64,

    /// Selected disruptor ids; a set, so repeats have no effect
    #[serde(default)]
    pub selected_disruptors: BTreeSet<String>,

    /// Monthly caffeine spend; 0 means "use the daily average"
    pub monthly_caffeine: f64,

    /// Candidate mattress price
    pub mattress_price: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        CalculatorInputs::new(
            DEFAULT_ANNUAL_INCOME,
            DEFAULT_MONTHLY_CAFFEINE,
            DEFAULT_MATTRESS_PRICE,
        )
    }
}

impl CalculatorInputs {
    /// Create inputs with no disruptors selected.
    pub fn new(annual_income: f64, monthly_caffeine: f64, mattress_price: f64) -> Self {
        CalculatorInputs {
            annual_income,
            selected_disruptors: BTreeSet::new(),
            monthly_caffeine,
            mattress_price,
        }
    }

    /// Add a disruptor id (builder style).
    pub fn with_disruptor(mut self, id: impl Into<String>) -> Self {
        self.selected_disruptors.insert(id.into());
        self
    }

    /// Validate input parameters.
    ///
    /// Negative or non-finite numbers are rejected. A zero mattress price is
    /// let through; the return projection reports it as undefined.
    pub fn validate(&self) -> CalcResult<()> {
        check_non_negative("annual_income", self.annual_income, "Income cannot be negative")?;
        check_non_negative(
            "monthly_caffeine",
            self.monthly_caffeine,
            "Caffeine spending cannot be negative",
        )?;
        check_non_negative(
            "mattress_price",
            self.mattress_price,
            "Mattress price cannot be negative",
        )?;
        Ok(())
    }
}

fn check_non_negative(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

/// Everything derived from one set of inputs.
///
/// `total_annual_cost` is always exactly
/// `annual_sleep_cost + annual_caffeine_cost + annual_productivity_loss`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "annual_sleep_cost": 3000.0,
///   "annual_caffeine_cost": 900.0,
///   "total_annual_cost": 7650.0,
///   "productivity_loss_percent": 5,
///   "annual_productivity_loss": 3750.0,
///   "roi": 184,
///   "break_even_months": 7,
///   "ten_year_value": 43400.0,
///   "yearly_savings": 4590.0,
///   "sleep_score": 40,
///   "score_grade": "C",
///   "score_message": "Moderate benefits expected. Consider which disruptors affect you most."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResults {
    /// Sum of the selected disruptors' annual costs
    pub annual_sleep_cost: f64,
    pub annual_caffeine_cost: f64,
    pub total_annual_cost: f64,

    /// 0-50
    pub productivity_loss_percent: u8,
    pub annual_productivity_loss: f64,

    /// Annual return on the mattress price, whole percent
    pub roi: i64,
    /// `None` when savings are zero and the price is never recovered
    pub break_even_months: Option<u32>,
    pub ten_year_value: f64,
    pub yearly_savings: f64,

    /// 0-100
    pub sleep_score: u8,
    pub score_grade: ScoreGrade,
    pub score_message: String,
}

/// Calculate all metrics with the default assumptions.
///
/// # Returns
///
/// * `Ok(CalculatorResults)` - Full result record
/// * `Err(CalcError::InvalidInput)` - Negative or non-finite input, or inputs
///   so large the annual cost overflows
/// * `Err(CalcError::UndefinedProjection)` - Mattress price of zero, or
///   projected figures outside the representable range
pub fn calculate_results(inputs: &CalculatorInputs) -> CalcResult<CalculatorResults> {
    calculate_results_with(inputs, &Assumptions::default())
}

/// Calculate all metrics with an explicit assumption set.
pub fn calculate_results_with(
    inputs: &CalculatorInputs,
    assumptions: &Assumptions,
) -> CalcResult<CalculatorResults> {
    inputs.validate()?;
    assumptions.validate()?;

    let resolved = resolve_disruptors(&inputs.selected_disruptors);
    let disruptor_count = resolved.len();
    let annual_sleep_cost = disruptors::total_annual_cost(&resolved);

    let annual_caffeine_cost =
        caffeine::caffeine_cost_with_rate(inputs.monthly_caffeine, assumptions.caffeine_cost_per_day);

    let productivity = productivity::productivity_loss_with_rates(
        inputs.annual_income,
        disruptor_count,
        assumptions.productivity_loss_per_disruptor,
        assumptions.productivity_loss_cap,
    );

    let total_annual_cost = annual_sleep_cost + annual_caffeine_cost + productivity.dollar_amount;
    if !total_annual_cost.is_finite() {
        return Err(CalcError::invalid_input(
            "total_annual_cost",
            total_annual_cost.to_string(),
            "Inputs are too large to produce a finite annual cost",
        ));
    }

    tracing::debug!(
        disruptor_count,
        annual_sleep_cost,
        annual_caffeine_cost,
        annual_productivity_loss = productivity.dollar_amount,
        total_annual_cost,
        "computed annual costs"
    );

    let projection = projection::project_returns_with(
        total_annual_cost,
        inputs.mattress_price,
        assumptions.improvement_factor,
        assumptions.lifespan_years,
    )?;

    let score = score::sleep_score_with_floor(
        total_annual_cost,
        inputs.annual_income,
        disruptor_count,
        assumptions.score_income_floor,
    );

    Ok(CalculatorResults {
        annual_sleep_cost,
        annual_caffeine_cost,
        total_annual_cost,
        productivity_loss_percent: productivity.percent,
        annual_productivity_loss: productivity.dollar_amount,
        roi: projection.roi,
        break_even_months: projection.break_even_months,
        ten_year_value: projection.ten_year_value,
        yearly_savings: projection.yearly_savings,
        sleep_score: score.score,
        score_grade: score.grade,
        score_message: score.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form() {
        let inputs = CalculatorInputs::default();
        assert_eq!(inputs.annual_income, 75_000.0);
        assert!(inputs.selected_disruptors.is_empty());
        assert_eq!(inputs.monthly_caffeine, 75.0);
        assert_eq!(inputs.mattress_price, 2500.0);
    }

    #[test]
    fn test_no_disruptors() {
        let results = calculate_results(&CalculatorInputs::default()).unwrap();
        assert_eq!(results.annual_sleep_cost, 0.0);
        assert_eq!(results.annual_caffeine_cost, 900.0);
        assert_eq!(results.productivity_loss_percent, 0);
        assert_eq!(results.total_annual_cost, 900.0);
        assert_eq!(results.roi, 22);
        assert_eq!(results.break_even_months, Some(56));
        assert_eq!(results.score_grade, ScoreGrade::F);
    }

    #[test]
    fn test_no_disruptors_json_has_positive_zero() {
        let results = calculate_results(&CalculatorInputs::default()).unwrap();
        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"annual_sleep_cost\":0.0"), "{}", json);
        assert!(!json.contains("-0.0"), "{}", json);
    }

    #[test]
    fn test_overflowing_caffeine_rejected() {
        let err = calculate_results(&CalculatorInputs::new(75_000.0, 1e308, 2500.0)).unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid_input(
                "total_annual_cost",
                "inf",
                "Inputs are too large to produce a finite annual cost"
            )
        );
    }

    #[test]
    fn test_overflowing_income_rejected() {
        let mut inputs = CalculatorInputs::new(f64::MAX, 1e307, 2500.0);
        for d in crate::disruptors::SLEEP_DISRUPTORS.iter() {
            inputs = inputs.with_disruptor(d.id);
        }
        // half of f64::MAX lost to productivity plus 1.2e308 of caffeine
        let err = calculate_results(&inputs).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_huge_finite_total_is_undefined_projection() {
        // total ~1.2e307 stays finite, but the ROI does not fit in i64
        let err = calculate_results(&CalculatorInputs::new(0.0, 1e306, 2500.0)).unwrap_err();
        assert_eq!(err.error_code(), "UNDEFINED_PROJECTION");
    }

    #[test]
    fn test_far_break_even_is_never() {
        let results = calculate_results(&CalculatorInputs::new(75_000.0, 1e-6, 10_000.0)).unwrap();
        assert_eq!(results.break_even_months, None);
    }

    #[test]
    fn test_unknown_disruptor_not_counted() {
        let inputs = CalculatorInputs::default().with_disruptor("sleepwalking");
        let results = calculate_results(&inputs).unwrap();
        assert_eq!(results.annual_sleep_cost, 0.0);
        assert_eq!(results.productivity_loss_percent, 0);
        assert_eq!(results.total_annual_cost, 900.0);
    }

    #[test]
    fn test_negative_income_rejected() {
        let inputs = CalculatorInputs::new(-1.0, 75.0, 2500.0);
        let err = calculate_results(&inputs).unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid_input("annual_income", "-1", "Income cannot be negative")
        );
    }

    #[test]
    fn test_negative_caffeine_and_price_rejected() {
        assert!(calculate_results(&CalculatorInputs::new(1.0, -5.0, 2500.0)).is_err());
        let err = calculate_results(&CalculatorInputs::new(1.0, 5.0, -2500.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_nan_rejected() {
        let err = calculate_results(&CalculatorInputs::new(f64::NAN, 5.0, 2500.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_zero_price_undefined_projection() {
        let err = calculate_results(&CalculatorInputs::new(75_000.0, 75.0, 0.0)).unwrap_err();
        assert_eq!(err.error_code(), "UNDEFINED_PROJECTION");
    }

    #[test]
    fn test_custom_assumptions() {
        let assumptions = Assumptions {
            improvement_factor: 0.5,
            ..Default::default()
        };
        let inputs = CalculatorInputs::new(75_000.0, 100.0, 600.0);
        let results = calculate_results_with(&inputs, &assumptions).unwrap();
        assert_eq!(results.yearly_savings, 600.0);
        assert_eq!(results.roi, 100);
        assert_eq!(results.break_even_months, Some(12));
    }

    #[test]
    fn test_inputs_json_set_semantics() {
        let json = r#"{
            "annual_income": 50000,
            "selected_disruptors": ["hot-sleep", "hot-sleep"],
            "monthly_caffeine": 0,
            "mattress_price": 2000
        }"#;
        let inputs: CalculatorInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.selected_disruptors.len(), 1);
    }
}
