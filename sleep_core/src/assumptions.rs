//! # Model Assumptions
//!
//! The fixed constants behind every formula in [`crate::calculations`].
//! `Assumptions::default()` is the published model; the plain
//! [`crate::calculate_results`] entry point always uses it.
//!
//! Embedders that want to explore "what if a mattress only fixed 40% of the
//! cost?" can build their own set and call
//! [`crate::calculations::calculate_results_with`].
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "improvement_factor": 0.6,
//!   "lifespan_years": 10,
//!   "caffeine_cost_per_day": 3.5,
//!   "productivity_loss_per_disruptor": 0.05,
//!   "productivity_loss_cap": 0.5,
//!   "score_income_floor": 30000.0
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Average daily caffeine spend (coffee shop coffee), in dollars
pub const CAFFEINE_COST_PER_DAY: f64 = 3.50;

/// Assumed useful life of a smart mattress
pub const MATTRESS_LIFESPAN_YEARS: u32 = 10;

/// Share of the annual sleep cost a smart mattress is assumed to eliminate
pub const IMPROVEMENT_FACTOR: f64 = 0.6;

/// Income pre-filled in the calculator form
pub const DEFAULT_ANNUAL_INCOME: f64 = 75_000.0;

/// Monthly caffeine spend pre-filled in the calculator form (~$2.50/day)
pub const DEFAULT_MONTHLY_CAFFEINE: f64 = 75.0;

/// Mattress price pre-filled in the calculator form
pub const DEFAULT_MATTRESS_PRICE: f64 = 2500.0;

/// Productivity lost per selected disruptor (5%)
pub const PRODUCTIVITY_LOSS_PER_DISRUPTOR: f64 = 0.05;

/// Maximum productivity loss (50%)
pub const PRODUCTIVITY_LOSS_CAP: f64 = 0.50;

/// Incomes below this are treated as this value when scoring cost ratio
pub const SCORE_INCOME_FLOOR: f64 = 30_000.0;

/// Tunable model constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Fraction of total annual cost recovered per year (0, 1]
    pub improvement_factor: f64,

    /// Projection horizon for the net value figure
    pub lifespan_years: u32,

    /// Daily caffeine rate used when monthly spend is 0
    pub caffeine_cost_per_day: f64,

    /// Loss rate added per disruptor
    pub productivity_loss_per_disruptor: f64,

    /// Upper bound on the loss rate
    pub productivity_loss_cap: f64,

    /// Income floor for the cost component of the score
    pub score_income_floor: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Assumptions {
            improvement_factor: IMPROVEMENT_FACTOR,
            lifespan_years: MATTRESS_LIFESPAN_YEARS,
            caffeine_cost_per_day: CAFFEINE_COST_PER_DAY,
            productivity_loss_per_disruptor: PRODUCTIVITY_LOSS_PER_DISRUPTOR,
            productivity_loss_cap: PRODUCTIVITY_LOSS_CAP,
            score_income_floor: SCORE_INCOME_FLOOR,
        }
    }
}

impl Assumptions {
    /// Validate the assumption set.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.improvement_factor > 0.0 && self.improvement_factor <= 1.0) {
            return Err(CalcError::invalid_input(
                "improvement_factor",
                self.improvement_factor.to_string(),
                "Improvement factor must be in (0, 1]",
            ));
        }
        if self.lifespan_years == 0 {
            return Err(CalcError::invalid_input(
                "lifespan_years",
                "0",
                "Lifespan must be at least one year",
            ));
        }
        if !self.caffeine_cost_per_day.is_finite() || self.caffeine_cost_per_day < 0.0 {
            return Err(CalcError::invalid_input(
                "caffeine_cost_per_day",
                self.caffeine_cost_per_day.to_string(),
                "Daily caffeine cost must be a non-negative number",
            ));
        }
        if !(0.0..=1.0).contains(&self.productivity_loss_per_disruptor) {
            return Err(CalcError::invalid_input(
                "productivity_loss_per_disruptor",
                self.productivity_loss_per_disruptor.to_string(),
                "Loss rate must be between 0 and 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.productivity_loss_cap) {
            return Err(CalcError::invalid_input(
                "productivity_loss_cap",
                self.productivity_loss_cap.to_string(),
                "Loss cap must be between 0 and 1",
            ));
        }
        if !(self.score_income_floor > 0.0) || !self.score_income_floor.is_finite() {
            return Err(CalcError::invalid_input(
                "score_income_floor",
                self.score_income_floor.to_string(),
                "Income floor must be positive",
            ));
        }
        Ok(())
    }

    /// Load and validate an assumption set from a JSON file.
    ///
    /// Missing fields fall back to the defaults.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        let assumptions: Assumptions = serde_json::from_str(&json)?;
        assumptions.validate()?;
        Ok(assumptions)
    }
}
