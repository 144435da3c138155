//! Full calculation report for a profile, plus text and CSV output

use crate::engine::{
    expense_slices, monthly_income, monthly_savings, net_income, net_worth, project_retirement,
    tax_amount, total_assets, total_expenses, total_liabilities, ExpenseSlice, ProjectionPoint,
    ProjectionSummary,
};
use crate::error::ProfileError;
use crate::profile::{AssetProfile, FinancialProfile, LiabilityProfile};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;

/// Every derived figure for one profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub net_income: f64,
    pub tax_amount: f64,
    pub monthly_income: f64,
    pub monthly_savings: f64,
    pub total_expenses: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    /// Balances behind the net worth figure
    pub assets: AssetProfile,
    pub liabilities: LiabilityProfile,
    pub expense_slices: Vec<ExpenseSlice>,
    pub projection: Vec<ProjectionPoint>,
    pub projection_summary: Option<ProjectionSummary>,
}

impl FinancialReport {
    /// Run every calculation. The projection starts from the investments asset.
    pub fn from_profile(profile: &FinancialProfile) -> Self {
        let projection = project_retirement(
            &profile.income,
            &profile.retirement,
            profile.assets.investments,
        );
        let projection_summary = ProjectionSummary::from_points(&projection);

        Self {
            net_income: net_income(&profile.income),
            tax_amount: tax_amount(&profile.income),
            monthly_income: monthly_income(&profile.income),
            monthly_savings: monthly_savings(&profile.income, &profile.retirement),
            total_expenses: total_expenses(&profile.expenses),
            total_assets: total_assets(&profile.assets),
            total_liabilities: total_liabilities(&profile.liabilities),
            net_worth: net_worth(&profile.assets, &profile.liabilities),
            assets: profile.assets,
            liabilities: profile.liabilities,
            expense_slices: expense_slices(&profile.expenses),
            projection,
            projection_summary,
        }
    }

    /// Plain-text summary, one figure per line
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(out, "Monthly Take-Home Pay: {}", format_currency(self.monthly_income));
        let _ = writeln!(out, "Annual Net Income:     {}", format_currency(self.net_income));
        let _ = writeln!(out, "Total Expenses:        {}", format_currency(self.total_expenses));
        let _ = writeln!(out, "Total Net Worth:       {}", format_currency(self.net_worth));

        if !self.expense_slices.is_empty() {
            let _ = writeln!(out, "\nExpense Breakdown:");
            for slice in &self.expense_slices {
                let _ = writeln!(
                    out,
                    "  {:<16} {:>14} {:>6.1}%",
                    slice.category.label(),
                    format_currency(slice.value),
                    slice.share_of(self.total_expenses) * 100.0,
                );
            }
        }

        let held: Vec<_> = self.assets.entries().filter(|(_, amount)| *amount != 0.0).collect();
        let owed: Vec<_> = self.liabilities.entries().filter(|(_, amount)| *amount != 0.0).collect();
        if !held.is_empty() || !owed.is_empty() {
            let _ = writeln!(out, "\nBalance Sheet:");
            for (category, amount) in held {
                let _ = writeln!(out, "  {:<16} {:>14}", category.label(), format_currency(amount));
            }
            for (category, amount) in owed {
                let _ = writeln!(out, "  {:<16} {:>14}", category.label(), format_currency(-amount));
            }
        }

        match &self.projection_summary {
            Some(summary) => {
                let _ = writeln!(
                    out,
                    "\nRetirement Savings at {}: {}",
                    summary.final_age,
                    format_currency(summary.final_savings)
                );
            }
            None => {
                let _ = writeln!(out, "\nRetirement Savings: no projection (retirement age before current age)");
            }
        }

        out
    }
}

/// Dollar amount with two decimals, e.g. `$3750.00` or `-$12.50`
///
/// Overflowed values read `$Infinity`, `-$Infinity` or `$NaN`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        "$NaN".to_string()
    } else if amount.is_infinite() {
        if amount < 0.0 {
            "-$Infinity".to_string()
        } else {
            "$Infinity".to_string()
        }
    } else if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Write the projection as `Year,Savings` CSV
pub fn write_projection_csv<W: Write>(writer: W, points: &[ProjectionPoint]) -> Result<(), ProfileError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Year", "Savings"])?;
    for point in points {
        csv_writer.write_record([point.year.to_string(), format!("{:.0}", point.savings)])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write expense slices as `Category,Amount` CSV
pub fn write_slices_csv<W: Write>(writer: W, slices: &[ExpenseSlice]) -> Result<(), ProfileError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Category", "Amount"])?;
    for slice in slices {
        csv_writer.write_record([slice.name.to_string(), format!("{:.2}", slice.value)])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{AssetProfile, ExpenseLedger, IncomeProfile, LiabilityProfile, RetirementAssumptions};

    fn profile() -> FinancialProfile {
        FinancialProfile {
            income: IncomeProfile::new(60000.0, 25.0, 0.0),
            expenses: ExpenseLedger {
                housing: 1000.0,
                transportation: 300.0,
                utilities: 150.0,
                entertainment: 100.0,
                ..Default::default()
            },
            assets: AssetProfile {
                cash: 10000.0,
                investments: 20000.0,
                real_estate: 0.0,
            },
            liabilities: LiabilityProfile {
                mortgage: 15000.0,
                car_loan: 5000.0,
                ..Default::default()
            },
            retirement: RetirementAssumptions {
                current_age: 64,
                retirement_age: 65,
                savings_rate: 15.0,
                expected_return: 7.0,
            },
        }
    }

    #[test]
    fn test_report_from_profile() {
        let report = FinancialReport::from_profile(&profile());

        assert_eq!(report.net_income, 45000.0);
        assert_eq!(report.monthly_income, 3750.0);
        assert_eq!(report.monthly_savings, 562.5);
        assert_eq!(report.total_expenses, 1550.0);
        assert_eq!(report.net_worth, 10000.0);
        assert_eq!(report.expense_slices.len(), 4);
        assert_eq!(report.projection.len(), 2);
        assert_eq!(report.projection[1].savings, 36871.0);
        assert_eq!(report.projection_summary.unwrap().final_savings, 36871.0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(3750.0), "$3750.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-12.5), "-$12.50");
        assert_eq!(format_currency(1234.567), "$1234.57");
        assert_eq!(format_currency(f64::INFINITY), "$Infinity");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-$Infinity");
        assert_eq!(format_currency(f64::NAN), "$NaN");
    }

    #[test]
    fn test_render_text() {
        let text = FinancialReport::from_profile(&profile()).render_text();
        assert!(text.contains("Monthly Take-Home Pay: $3750.00"));
        assert!(text.contains("Total Net Worth:       $10000.00"));
        assert!(text.contains("Housing"));
        assert!(!text.contains("Food"));
        assert!(text.contains("Retirement Savings at 65: $36871.00"));
        assert!(text.contains("  Investments           $20000.00"));
        assert!(text.contains("  CarLoan               -$5000.00"));
        assert!(!text.contains("RealEstate"));
        assert!(!text.contains("StudentLoans"));
    }

    #[test]
    fn test_render_text_without_projection() {
        let mut p = profile();
        p.retirement.current_age = 70;
        let text = FinancialReport::from_profile(&p).render_text();
        assert!(text.contains("no projection"));
    }

    #[test]
    fn test_projection_csv() {
        let report = FinancialReport::from_profile(&profile());
        let mut buf = Vec::new();
        write_projection_csv(&mut buf, &report.projection).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Year,Savings\n64,28150\n65,36871\n");
    }

    #[test]
    fn test_slices_csv() {
        let report = FinancialReport::from_profile(&profile());
        let mut buf = Vec::new();
        write_slices_csv(&mut buf, &report.expense_slices).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Category,Amount\nhousing,1000.00\n"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(FinancialReport::from_profile(&profile())).unwrap();
        assert_eq!(json["monthlyIncome"], 3750.0);
        assert_eq!(json["projection"][0]["year"], 64);
        assert_eq!(json["expenseSlices"][0]["name"], "housing");
    }
}
