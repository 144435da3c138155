//! Financial profile records and profile loading

mod data;
pub mod coerce;
pub mod loader;

pub use data::{
    age_on, AssetCategory, AssetProfile, ExpenseCategory, ExpenseLedger, FinancialProfile,
    IncomeProfile, LiabilityCategory, LiabilityProfile, RetirementAssumptions,
    MAX_PROJECTION_YEARS,
};
pub use loader::{load_profile, load_profile_csv, load_profile_json, DEFAULT_PROFILE_PATH};
