//! Life Calculator - personal finance estimation engine
//!
//! This library provides:
//! - Take-home pay from a flat-rate income profile
//! - Expense totals and chart-ready expense breakdowns
//! - Net worth from asset and liability balances
//! - Year-by-year retirement savings projections
//! - Profile loading (JSON, CSV), reports and parallel scenario runs

pub mod engine;
pub mod error;
pub mod profile;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use engine::{ExpenseSlice, ProjectionPoint, ProjectionSummary};
pub use error::ProfileError;
pub use profile::{
    AssetProfile, ExpenseLedger, FinancialProfile, IncomeProfile, LiabilityProfile,
    RetirementAssumptions,
};
pub use report::FinancialReport;
pub use scenario::ScenarioRunner;
