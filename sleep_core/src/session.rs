//! # Calculator Session
//!
//! Holds the state of one calculator form: the inputs being edited and the
//! last computed results. Front-ends (the CLI prompt, a GUI) drive it; the
//! calculation itself stays a pure function in [`crate::calculations`].
//!
//! Editing an input does not clear previous results; they stay on screen
//! until the next [`CalculatorSession::calculate`].
//!
//! ## Example
//!
//! ```rust
//! use sleep_core::session::CalculatorSession;
//!
//! let mut session = CalculatorSession::new();
//! session.toggle_disruptor("snoring-apnea");
//! let results = session.calculate().unwrap();
//! assert_eq!(results.sleep_score, 40);
//!
//! session.reset();
//! assert!(!session.has_calculated());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{calculate_results, CalculatorInputs, CalculatorResults};
use crate::errors::CalcResult;

/// Form state plus the last results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorSession {
    inputs: CalculatorInputs,
    results: Option<CalculatorResults>,
}

impl CalculatorSession {
    /// Start with the default form values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing inputs.
    pub fn with_inputs(inputs: CalculatorInputs) -> Self {
        CalculatorSession {
            inputs,
            results: None,
        }
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    /// Last successful results, if any.
    pub fn results(&self) -> Option<&CalculatorResults> {
        self.results.as_ref()
    }

    pub fn has_calculated(&self) -> bool {
        self.results.is_some()
    }

    pub fn set_income(&mut self, value: f64) {
        self.inputs.annual_income = value;
    }

    pub fn set_caffeine(&mut self, value: f64) {
        self.inputs.monthly_caffeine = value;
    }

    pub fn set_mattress_price(&mut self, value: f64) {
        self.inputs.mattress_price = value;
    }

    /// Select the disruptor if unselected, unselect it otherwise.
    ///
    /// Returns whether it is selected afterwards.
    pub fn toggle_disruptor(&mut self, id: &str) -> bool {
        if self.inputs.selected_disruptors.remove(id) {
            false
        } else {
            self.inputs.selected_disruptors.insert(id.to_string());
            true
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.inputs.selected_disruptors.contains(id)
    }

    /// Run the calculation on the current inputs and keep the results.
    ///
    /// On error the previous results are left untouched.
    pub fn calculate(&mut self) -> CalcResult<&CalculatorResults> {
        let results = calculate_results(&self.inputs)?;
        let stored: &CalculatorResults = self.results.insert(results);
        Ok(stored)
    }

    /// Restore default inputs and clear results.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_unselects() {
        let mut session = CalculatorSession::new();
        assert!(session.toggle_disruptor("hot-sleep"));
        assert!(session.is_selected("hot-sleep"));
        assert!(!session.toggle_disruptor("hot-sleep"));
        assert!(!session.is_selected("hot-sleep"));
    }

    #[test]
    fn test_calculate_stores_results() {
        let mut session = CalculatorSession::new();
        assert!(session.results().is_none());
        session.calculate().unwrap();
        assert!(session.has_calculated());
        assert_eq!(session.results().unwrap().roi, 22);
    }

    #[test]
    fn test_edit_keeps_stale_results() {
        let mut session = CalculatorSession::new();
        session.calculate().unwrap();
        session.set_income(150_000.0);
        assert_eq!(session.results().unwrap().annual_productivity_loss, 0.0);
        assert_eq!(session.inputs().annual_income, 150_000.0);
    }

    #[test]
    fn test_failed_calculation_keeps_previous() {
        let mut session = CalculatorSession::new();
        session.calculate().unwrap();
        session.set_mattress_price(0.0);
        assert!(session.calculate().is_err());
        assert_eq!(session.results().unwrap().roi, 22);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = CalculatorSession::new();
        session.set_income(1.0);
        session.set_caffeine(0.0);
        session.toggle_disruptor("allergies");
        session.calculate().unwrap();

        session.reset();

        assert_eq!(session.inputs(), &CalculatorInputs::default());
        assert!(!session.has_calculated());
    }
}
