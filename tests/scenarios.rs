//! End-to-end checks of the calculator against worked examples

use approx::assert_relative_eq;
use life_calculator::engine::{
    expense_slices, monthly_income, net_income, net_worth, project_retirement, total_expenses,
};
use life_calculator::profile::{load_profile, ExpenseCategory};
use life_calculator::{
    AssetProfile, ExpenseLedger, FinancialReport, IncomeProfile, LiabilityProfile,
    ProjectionPoint, RetirementAssumptions,
};

#[test]
fn test_take_home_pay() {
    let income = IncomeProfile::new(60000.0, 25.0, 0.0);
    assert_eq!(net_income(&income), 45000.0);
    assert_eq!(format!("{:.2}", monthly_income(&income)), "3750.00");
}

#[test]
fn test_expense_breakdown() {
    let ledger = ExpenseLedger {
        housing: 1000.0,
        transportation: 300.0,
        food: 0.0,
        utilities: 150.0,
        insurance: 0.0,
        entertainment: 100.0,
    };
    assert_eq!(total_expenses(&ledger), 1550.0);

    let slices: Vec<(ExpenseCategory, f64)> = expense_slices(&ledger)
        .into_iter()
        .map(|s| (s.category, s.value))
        .collect();
    assert_eq!(
        slices,
        vec![
            (ExpenseCategory::Housing, 1000.0),
            (ExpenseCategory::Transportation, 300.0),
            (ExpenseCategory::Utilities, 150.0),
            (ExpenseCategory::Entertainment, 100.0),
        ]
    );
}

#[test]
fn test_net_worth() {
    let assets = AssetProfile {
        cash: 10000.0,
        investments: 20000.0,
        real_estate: 0.0,
    };
    let liabilities = LiabilityProfile {
        mortgage: 15000.0,
        car_loan: 5000.0,
        student_loans: 0.0,
        credit_card: 0.0,
    };
    assert_eq!(net_worth(&assets, &liabilities), 10000.0);
}

#[test]
fn test_retirement_projection() {
    let income = IncomeProfile::new(60000.0, 25.0, 0.0);
    let assumptions = RetirementAssumptions {
        current_age: 64,
        retirement_age: 65,
        savings_rate: 15.0,
        expected_return: 7.0,
    };

    let points = project_retirement(&income, &assumptions, 20000.0);
    assert_eq!(
        points,
        vec![
            ProjectionPoint { year: 64, savings: 28150.0 },
            ProjectionPoint { year: 65, savings: 36871.0 },
        ]
    );
}

#[test]
fn test_thirty_five_year_projection_grows() {
    let income = IncomeProfile::new(60000.0, 25.0, 0.0);
    let points = project_retirement(&income, &RetirementAssumptions::default(), 20000.0);

    assert_eq!(points.len(), 36);
    assert!(points.windows(2).all(|w| w[1].savings > w[0].savings));

    // Closed form of the same recurrence, before rounding
    let growth: f64 = 1.07;
    let contribution = 6750.0;
    let n = 36;
    let expected = 20000.0 * growth.powi(n) + contribution * (growth.powi(n) - 1.0) / (growth - 1.0);
    assert_relative_eq!(points[35].savings, expected, max_relative = 1e-6);
}

#[test]
fn test_sample_profiles_agree() {
    let json = load_profile("data/profile.json").unwrap();
    let csv = load_profile("data/profile.csv").unwrap();
    assert_eq!(json, csv);

    let report = FinancialReport::from_profile(&json);
    assert_eq!(report.monthly_income, 3750.0);
    assert_eq!(report.total_expenses, 1550.0);
    assert_eq!(report.net_worth, 10000.0);
    assert_eq!(report.projection.first().map(|p| p.year), Some(30));
    assert_eq!(report.projection.last().map(|p| p.year), Some(65));
}
