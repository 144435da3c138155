//! Expense totals and chart-ready expense distribution

use crate::profile::{ExpenseCategory, ExpenseLedger};
use serde::Serialize;

/// One positive expense category, ready for proportional charting
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenseSlice {
    pub category: ExpenseCategory,
    /// Category key (e.g. "housing")
    pub name: &'static str,
    pub value: f64,
}

impl ExpenseSlice {
    /// Fraction of `total` this slice represents, 0 when the total is not positive
    pub fn share_of(&self, total: f64) -> f64 {
        if total > 0.0 {
            self.value / total
        } else {
            0.0
        }
    }
}

/// Sum of every category amount
pub fn total_expenses(ledger: &ExpenseLedger) -> f64 {
    ledger.entries().map(|(_, amount)| amount).sum()
}

/// Categories with a strictly positive amount, in ledger order
///
/// Zero and negative amounts are dropped: they have no area on a pie chart.
pub fn expense_slices(ledger: &ExpenseLedger) -> Vec<ExpenseSlice> {
    ledger
        .entries()
        .map(|(category, value)| ExpenseSlice {
            category,
            name: category.as_str(),
            value,
        })
        .filter(|slice| slice.value > 0.0)
        .collect()
}
