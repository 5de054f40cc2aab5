//! # Sleep Score
//!
//! A 0-100 estimate of how much a user stands to gain from a better mattress.
//! Three capped components are added together:
//!
//! | Component  | Formula                                   | Cap |
//! |------------|-------------------------------------------|-----|
//! | Cost       | total cost / max(income, 30000) x 200     | 50  |
//! | Disruptors | count x 5                                 | 30  |
//! | Income     | income / 5000                             | 20  |
//!
//! The sum is rounded and clamped to 100, then mapped to a letter grade.

use serde::{Deserialize, Serialize};

use crate::assumptions::SCORE_INCOME_FLOOR;

const COST_SCALE: f64 = 200.0;
const COST_CAP: f64 = 50.0;
const POINTS_PER_DISRUPTOR: f64 = 5.0;
const DISRUPTOR_CAP: f64 = 30.0;
const INCOME_PER_POINT: f64 = 5000.0;
const INCOME_CAP: f64 = 20.0;

/// Letter grade for a sleep score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreGrade {
    A,
    B,
    C,
    D,
    F,
}

impl ScoreGrade {
    /// All grades, best first
    pub const ALL: [ScoreGrade; 5] = [
        ScoreGrade::A,
        ScoreGrade::B,
        ScoreGrade::C,
        ScoreGrade::D,
        ScoreGrade::F,
    ];

    /// Grade for a score; each threshold is an inclusive lower bound.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreGrade::A,
            60..=79 => ScoreGrade::B,
            40..=59 => ScoreGrade::C,
            20..=39 => ScoreGrade::D,
            _ => ScoreGrade::F,
        }
    }

    /// Single-letter form ("A" .. "F")
    pub fn letter(&self) -> &'static str {
        match self {
            ScoreGrade::A => "A",
            ScoreGrade::B => "B",
            ScoreGrade::C => "C",
            ScoreGrade::D => "D",
            ScoreGrade::F => "F",
        }
    }

    /// Advisory message shown with the grade
    pub fn message(&self) -> &'static str {
        match self {
            ScoreGrade::A => "Excellent investment opportunity! A smart mattress could significantly improve your sleep and save you money.",
            ScoreGrade::B => "Strong potential! You'll likely see good returns from better sleep quality.",
            ScoreGrade::C => "Moderate benefits expected. Consider which disruptors affect you most.",
            ScoreGrade::D => "Modest improvement possible. Focus on your top sleep issues first.",
            ScoreGrade::F => "Limited immediate ROI, but better sleep is always valuable for long-term health.",
        }
    }
}

impl std::fmt::Display for ScoreGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A graded sleep score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepScore {
    /// 0-100
    pub score: u8,
    pub grade: ScoreGrade,
    pub message: String,
}

/// Score with the default 30,000 income floor.
///
/// ```rust
/// use sleep_core::calculations::score::{calculate_sleep_score, ScoreGrade};
///
/// let s = calculate_sleep_score(7650.0, 75_000.0, 1);
/// assert_eq!(s.score, 40);
/// assert_eq!(s.grade, ScoreGrade::C);
/// ```
pub fn calculate_sleep_score(total_annual_cost: f64, annual_income: f64, disruptor_count: usize) -> SleepScore {
    sleep_score_with_floor(total_annual_cost, annual_income, disruptor_count, SCORE_INCOME_FLOOR)
}

/// Score with an explicit income floor for the cost ratio.
pub fn sleep_score_with_floor(
    total_annual_cost: f64,
    annual_income: f64,
    disruptor_count: usize,
    income_floor: f64,
) -> SleepScore {
    let cost_ratio = total_annual_cost / annual_income.max(income_floor);
    let cost_points = (cost_ratio * COST_SCALE).min(COST_CAP);
    let disruptor_points = (disruptor_count as f64 * POINTS_PER_DISRUPTOR).min(DISRUPTOR_CAP);
    let income_points = (annual_income / INCOME_PER_POINT).min(INCOME_CAP);

    let score = (cost_points + disruptor_points + income_points)
        .round()
        .clamp(0.0, 100.0) as u8;
    let grade = ScoreGrade::from_score(score);

    tracing::debug!(
        cost_points,
        disruptor_points,
        income_points,
        score,
        grade = grade.letter(),
        "graded sleep score"
    );

    SleepScore {
        score,
        grade,
        message: grade.message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        let cases = [
            (100, ScoreGrade::A),
            (80, ScoreGrade::A),
            (79, ScoreGrade::B),
            (60, ScoreGrade::B),
            (59, ScoreGrade::C),
            (40, ScoreGrade::C),
            (39, ScoreGrade::D),
            (20, ScoreGrade::D),
            (19, ScoreGrade::F),
            (0, ScoreGrade::F),
        ];
        for (score, grade) in cases {
            assert_eq!(ScoreGrade::from_score(score), grade, "score {}", score);
        }
    }

    #[test]
    fn test_messages_distinct() {
        let messages: std::collections::HashSet<_> =
            ScoreGrade::ALL.iter().map(|g| g.message()).collect();
        assert_eq!(messages.len(), 5);
    }

    #[test]
    fn test_low_cost_scores_f() {
        // 900/75000*200 = 2.4, 0, 15 -> 17
        let s = calculate_sleep_score(900.0, 75_000.0, 0);
        assert_eq!(s.score, 17);
        assert_eq!(s.grade, ScoreGrade::F);
        assert_eq!(s.message, ScoreGrade::F.message());
    }

    #[test]
    fn test_all_components_capped() {
        let s = calculate_sleep_score(1_000_000.0, 500_000.0, 20);
        assert_eq!(s.score, 100);
        assert_eq!(s.grade, ScoreGrade::A);
    }

    #[test]
    fn test_income_floor_applies() {
        // Income 10000 is floored to 30000: 3000/30000*200 = 20, 5, 2 -> 27
        let s = calculate_sleep_score(3000.0, 10_000.0, 1);
        assert_eq!(s.score, 27);
        assert_eq!(s.grade, ScoreGrade::D);
    }

    #[test]
    fn test_zero_everything() {
        let s = calculate_sleep_score(0.0, 0.0, 0);
        assert_eq!(s.score, 0);
        assert_eq!(s.grade, ScoreGrade::F);
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&ScoreGrade::B).unwrap(), "\"B\"");
        assert_eq!(ScoreGrade::D.to_string(), "D");
    }
}
