//! # sleep_core - Smart Sleep Score Engine
//!
//! `sleep_core` estimates what poor sleep costs a person each year and whether
//! a smart mattress pays for itself. Given income, selected sleep problems,
//! caffeine spend and a mattress price, it produces annual costs, an ROI
//! projection and a graded 0-100 sleep score.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the calculation is a pure function of its inputs
//! - **JSON-First**: all inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use sleep_core::{calculate_results, CalculatorInputs};
//!
//! let inputs = CalculatorInputs::new(75_000.0, 75.0, 2500.0);
//! let results = calculate_results(&inputs).unwrap();
//!
//! assert_eq!(results.annual_caffeine_cost, 900.0);
//! assert_eq!(results.break_even_months, Some(56));
//!
//! let json = serde_json::to_string_pretty(&results).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The formula pipeline and its input/result records
//! - [`disruptors`] - Static catalog of sleep problems and their costs
//! - [`assumptions`] - Model constants
//! - [`format`] - Currency and percentage display helpers
//! - [`share`] - Share text and mailto/sms links
//! - [`pdf`] - PDF report rendering
//! - [`export`] - Atomic file export
//! - [`session`] - Calculator form state
//! - [`errors`] - Structured error types

pub mod assumptions;
pub mod calculations;
pub mod disruptors;
pub mod errors;
pub mod export;
pub mod format;
pub mod pdf;
pub mod session;
pub mod share;

// Re-export commonly used types at crate root for convenience
pub use assumptions::Assumptions;
pub use calculations::{calculate_results, CalculatorInputs, CalculatorResults, ScoreGrade};
pub use disruptors::{SleepDisruptor, SLEEP_DISRUPTORS};
pub use errors::{CalcError, CalcResult};
pub use session::CalculatorSession;
