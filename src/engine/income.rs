//! Take-home pay from a flat-rate income profile

use crate::profile::IncomeProfile;

/// Tax owed at the profile's flat rate
pub fn tax_amount(profile: &IncomeProfile) -> f64 {
    (profile.gross * profile.tax_rate) / 100.0
}

/// Annual net income: gross minus flat tax minus deductions
///
/// Deductions come off after tax, so they do not reduce the tax owed. The
/// result may be negative when deductions exceed after-tax income.
pub fn net_income(profile: &IncomeProfile) -> f64 {
    profile.gross - tax_amount(profile) - profile.deductions
}

/// Monthly take-home pay
pub fn monthly_income(profile: &IncomeProfile) -> f64 {
    net_income(profile) / 12.0
}
