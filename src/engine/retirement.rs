//! Year-by-year retirement savings projection

use super::income::monthly_income;
use crate::profile::{IncomeProfile, RetirementAssumptions};
use serde::{Deserialize, Serialize};

/// Projected balance at one age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Age at the end of the projection year
    pub year: u32,

    /// Balance rounded to a whole amount. Non-finite if the simulation overflowed.
    pub savings: f64,
}

/// Summary of a projection series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub points: usize,
    pub final_age: u32,
    pub final_savings: f64,
    pub peak_savings: f64,
}

impl ProjectionSummary {
    /// None for an empty projection
    pub fn from_points(points: &[ProjectionPoint]) -> Option<Self> {
        let last = points.last()?;
        let peak_savings = points
            .iter()
            .map(|p| p.savings)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            points: points.len(),
            final_age: last.year,
            final_savings: last.savings,
            peak_savings,
        })
    }
}

/// Monthly amount put aside at the assumed savings rate
pub fn monthly_savings(income: &IncomeProfile, assumptions: &RetirementAssumptions) -> f64 {
    (monthly_income(income) * assumptions.savings_rate) / 100.0
}

/// Round half toward positive infinity
///
/// `f64::round` sends -2.5 to -3; balances here send it to -2 so that negative
/// series round the same way as positive ones. Non-finite values pass through.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Project savings from `current_age` to `retirement_age` inclusive
///
/// Each year the prior balance grows by `expected_return` percent and then a
/// full year of contributions is added. This applies to the first year as
/// well, so the first point already includes one year of growth and saving;
/// `starting_investments` itself is never emitted. Returns an empty series
/// when `retirement_age < current_age`.
pub fn project_retirement(
    income: &IncomeProfile,
    assumptions: &RetirementAssumptions,
    starting_investments: f64,
) -> Vec<ProjectionPoint> {
    let years = assumptions.horizon();
    if years < 0 {
        log::debug!(
            "retirement age {} is before current age {}, empty projection",
            assumptions.retirement_age,
            assumptions.current_age
        );
        return Vec::new();
    }

    let annual_contribution = monthly_savings(income, assumptions) * 12.0;
    let growth = 1.0 + assumptions.expected_return / 100.0;

    let mut balance = starting_investments;
    let mut points = Vec::with_capacity(years as usize + 1);

    for i in 0..=years as u32 {
        balance = balance * growth + annual_contribution;
        points.push(ProjectionPoint {
            year: assumptions.current_age + i,
            savings: round_half_up(balance),
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income_3750() -> IncomeProfile {
        IncomeProfile::new(60000.0, 25.0, 0.0)
    }

    fn assumptions(current_age: u32, retirement_age: u32) -> RetirementAssumptions {
        RetirementAssumptions {
            current_age,
            retirement_age,
            savings_rate: 15.0,
            expected_return: 7.0,
        }
    }

    #[test]
    fn test_two_year_projection() {
        let points = project_retirement(&income_3750(), &assumptions(64, 65), 20000.0);

        assert_eq!(monthly_savings(&income_3750(), &assumptions(64, 65)), 562.5);
        assert_eq!(
            points,
            vec![
                ProjectionPoint { year: 64, savings: 28150.0 },
                ProjectionPoint { year: 65, savings: 36871.0 },
            ]
        );
    }

    #[test]
    fn test_point_count() {
        for (current, retire) in [(30, 65), (40, 40), (18, 70)] {
            let points = project_retirement(&income_3750(), &assumptions(current, retire), 0.0);
            assert_eq!(points.len(), (retire - current + 1) as usize);
            assert_eq!(points.first().map(|p| p.year), Some(current));
            assert_eq!(points.last().map(|p| p.year), Some(retire));
        }
    }

    #[test]
    fn test_empty_when_past_retirement() {
        let points = project_retirement(&income_3750(), &assumptions(70, 65), 100000.0);
        assert!(points.is_empty());
        assert_eq!(ProjectionSummary::from_points(&points), None);
    }

    #[test]
    fn test_single_year_applies_growth() {
        // Starting balance is never emitted on its own
        let points = project_retirement(&income_3750(), &assumptions(65, 65), 10000.0);
        assert_eq!(points, vec![ProjectionPoint { year: 65, savings: 17450.0 }]);
    }

    #[test]
    fn test_idempotent() {
        let a = project_retirement(&income_3750(), &assumptions(30, 65), 5000.0);
        let b = project_retirement(&income_3750(), &assumptions(30, 65), 5000.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_return_shrinks_balance() {
        let mut a = assumptions(50, 52);
        a.expected_return = -10.0;
        a.savings_rate = 0.0;
        let points = project_retirement(&income_3750(), &a, 1000.0);
        let savings: Vec<f64> = points.iter().map(|p| p.savings).collect();
        assert_eq!(savings, vec![900.0, 810.0, 729.0]);
    }

    #[test]
    fn test_overflow_is_not_an_error() {
        let mut a = assumptions(0, 400);
        a.expected_return = 1.0e6;
        let points = project_retirement(&income_3750(), &a, 1.0);
        assert_eq!(points.len(), 401);
        assert!(points.last().unwrap().savings.is_infinite());
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(36870.5), 36871.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert!(round_half_up(f64::INFINITY).is_infinite());
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn test_summary() {
        let points = project_retirement(&income_3750(), &assumptions(64, 65), 20000.0);
        let summary = ProjectionSummary::from_points(&points).unwrap();
        assert_eq!(summary.points, 2);
        assert_eq!(summary.final_age, 65);
        assert_eq!(summary.final_savings, 36871.0);
        assert_eq!(summary.peak_savings, 36871.0);
    }
}
