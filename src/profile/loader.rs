//! Load financial profiles from JSON or CSV
//!
//! JSON uses the same camelCase keys as the calculator form state. CSV files
//! carry one value per row with the header `section,field,value`.

use super::coerce::{coerce_age, coerce_str};
use super::{AssetCategory, ExpenseCategory, FinancialProfile, LiabilityCategory};
use crate::error::ProfileError;
use csv::{Reader, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default location of the profile file
pub const DEFAULT_PROFILE_PATH: &str = "data/profile.json";

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    section: String,
    field: String,
    #[serde(default)]
    value: String,
}

impl CsvRow {
    fn apply(&self, profile: &mut FinancialProfile) -> Result<(), ProfileError> {
        let value = coerce_str(&self.value);
        let field = self.field.as_str();

        match self.section.as_str() {
            "income" => match field {
                "gross" => profile.income.gross = value,
                "taxRate" => profile.income.tax_rate = value,
                "deductions" => profile.income.deductions = value,
                _ => return Err(self.unknown_field()),
            },
            "expenses" => {
                let category = ExpenseCategory::from_key(field).ok_or_else(|| self.unknown_field())?;
                profile.expenses.set(category, value);
            }
            "assets" => {
                let category = AssetCategory::from_key(field).ok_or_else(|| self.unknown_field())?;
                profile.assets.set(category, value);
            }
            "liabilities" => {
                let category = LiabilityCategory::from_key(field).ok_or_else(|| self.unknown_field())?;
                profile.liabilities.set(category, value);
            }
            "retirement" => match field {
                "currentAge" => profile.retirement.current_age = coerce_age(value),
                "retirementAge" => profile.retirement.retirement_age = coerce_age(value),
                "savingsRate" => profile.retirement.savings_rate = value,
                "expectedReturn" => profile.retirement.expected_return = value,
                _ => return Err(self.unknown_field()),
            },
            other => return Err(ProfileError::UnknownSection(other.to_string())),
        }

        Ok(())
    }

    fn unknown_field(&self) -> ProfileError {
        ProfileError::UnknownField {
            section: self.section.clone(),
            field: self.field.clone(),
        }
    }
}

/// Load a profile from a `section,field,value` CSV file
pub fn load_profile_csv<P: AsRef<Path>>(path: P) -> Result<FinancialProfile, ProfileError> {
    let file = File::open(path.as_ref())?;
    log::info!("loading CSV profile from {}", path.as_ref().display());
    load_profile_csv_from_reader(file)
}

/// Load a CSV profile from any reader. Rows not present keep their defaults.
pub fn load_profile_csv_from_reader<R: Read>(reader: R) -> Result<FinancialProfile, ProfileError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    apply_rows(&mut csv_reader)
}

fn apply_rows<R: Read>(reader: &mut Reader<R>) -> Result<FinancialProfile, ProfileError> {
    let mut profile = FinancialProfile::default();
    let mut rows = 0usize;

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        row.apply(&mut profile)?;
        rows += 1;
    }

    log::debug!("applied {} profile rows", rows);
    Ok(profile)
}

/// Load a profile from a JSON file
pub fn load_profile_json<P: AsRef<Path>>(path: P) -> Result<FinancialProfile, ProfileError> {
    let file = File::open(path.as_ref())?;
    log::info!("loading JSON profile from {}", path.as_ref().display());
    load_profile_json_from_reader(file)
}

/// Load a JSON profile from any reader. Missing sections and fields keep their defaults.
pub fn load_profile_json_from_reader<R: Read>(reader: R) -> Result<FinancialProfile, ProfileError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a profile, picking the format from the file extension
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<FinancialProfile, ProfileError> {
    let is_csv = path
        .as_ref()
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        load_profile_csv(path)
    } else {
        load_profile_json(path)
    }
}
