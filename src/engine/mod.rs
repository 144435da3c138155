//! Calculation engine: pure functions over profile records
//!
//! Nothing here keeps state between calls, so every function is safe to call
//! from any number of threads and always returns the same output for the same
//! input.

mod expenses;
mod income;
mod net_worth;
mod retirement;

pub use expenses::{expense_slices, total_expenses, ExpenseSlice};
pub use income::{monthly_income, net_income, tax_amount};
pub use net_worth::{net_worth, total_assets, total_liabilities};
pub use retirement::{
    monthly_savings, project_retirement, round_half_up, ProjectionPoint, ProjectionSummary,
};
