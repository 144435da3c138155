//! Scenario runner for comparing retirement assumptions
//!
//! Holds one base profile and projects it under many sets of retirement
//! assumptions. Projections are independent, so batches run in parallel.

use crate::engine::{project_retirement, ProjectionPoint, ProjectionSummary};
use crate::error::ProfileError;
use crate::profile::{FinancialProfile, RetirementAssumptions};
use rayon::prelude::*;
use serde::Serialize;

/// Largest batch accepted from user input
pub const MAX_SCENARIOS: usize = 64;

/// Reject batches larger than [`MAX_SCENARIOS`]
pub fn check_scenario_count(count: usize) -> Result<(), ProfileError> {
    if count > MAX_SCENARIOS {
        log::warn!("rejecting batch of {} scenarios", count);
        return Err(ProfileError::TooManyScenarios {
            count,
            max: MAX_SCENARIOS,
        });
    }
    Ok(())
}

/// Projection of the base profile under one set of assumptions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub assumptions: RetirementAssumptions,
    pub projection: Vec<ProjectionPoint>,
    pub summary: Option<ProjectionSummary>,
}

/// Runs projections for a fixed base profile
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(profile);
/// for result in runner.sweep_returns(&[4.0, 6.0, 8.0]) {
///     println!("{:?}", result.summary);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: FinancialProfile,
}

impl ScenarioRunner {
    pub fn new(base: FinancialProfile) -> Self {
        Self { base }
    }

    /// Project the base profile under `assumptions`
    pub fn run(&self, assumptions: RetirementAssumptions) -> ScenarioResult {
        let projection = project_retirement(&self.base.income, &assumptions, self.base.assets.investments);
        let summary = ProjectionSummary::from_points(&projection);
        ScenarioResult {
            assumptions,
            projection,
            summary,
        }
    }

    /// Run many scenarios in parallel. Results keep the input order.
    pub fn run_scenarios(&self, scenarios: &[RetirementAssumptions]) -> Vec<ScenarioResult> {
        log::debug!("running {} retirement scenarios", scenarios.len());
        scenarios.par_iter().map(|&assumptions| self.run(assumptions)).collect()
    }

    /// Vary only the expected return of the base assumptions
    pub fn sweep_returns(&self, returns: &[f64]) -> Vec<ScenarioResult> {
        let scenarios: Vec<_> = returns
            .iter()
            .map(|&rate| self.base.retirement.with_expected_return(rate))
            .collect();
        self.run_scenarios(&scenarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::IncomeProfile;

    fn runner() -> ScenarioRunner {
        let mut profile = FinancialProfile::default();
        profile.income = IncomeProfile::new(60000.0, 25.0, 0.0);
        profile.assets.investments = 20000.0;
        ScenarioRunner::new(profile)
    }

    #[test]
    fn test_sweep_returns_ordered() {
        let results = runner().sweep_returns(&[3.0, 5.0, 7.0]);
        assert_eq!(results.len(), 3);

        let finals: Vec<f64> = results
            .iter()
            .map(|r| r.summary.unwrap().final_savings)
            .collect();
        assert!(finals[0] < finals[1] && finals[1] < finals[2]);
        assert_eq!(results[2].assumptions.expected_return, 7.0);
    }

    #[test]
    fn test_check_scenario_count() {
        assert!(check_scenario_count(0).is_ok());
        assert!(check_scenario_count(MAX_SCENARIOS).is_ok());
        assert!(matches!(
            check_scenario_count(MAX_SCENARIOS + 1),
            Err(ProfileError::TooManyScenarios { count, max }) if count == MAX_SCENARIOS + 1 && max == MAX_SCENARIOS
        ));
    }

    #[test]
    fn test_parallel_matches_single_run() {
        let runner = runner();
        let scenarios = [
            RetirementAssumptions::default(),
            RetirementAssumptions { current_age: 64, retirement_age: 65, ..Default::default() },
            RetirementAssumptions { current_age: 70, ..Default::default() },
        ];
        let batch = runner.run_scenarios(&scenarios);

        for (result, assumptions) in batch.iter().zip(scenarios) {
            assert_eq!(result.projection, runner.run(assumptions).projection);
        }
        assert_eq!(batch[1].summary.unwrap().final_savings, 36871.0);
        assert!(batch[2].projection.is_empty());
    }
}
