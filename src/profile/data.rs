//! Input records for a single calculation
//!
//! Every record is a plain value owned by the caller. Category sets are closed
//! enums so a ledger can never carry a category the engine does not know about.

use super::coerce;
use crate::error::ProfileError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default flat tax rate in percent
pub const DEFAULT_TAX_RATE: f64 = 25.0;

/// Default retirement assumptions
pub const DEFAULT_CURRENT_AGE: u32 = 30;
pub const DEFAULT_RETIREMENT_AGE: u32 = 65;
pub const DEFAULT_SAVINGS_RATE: f64 = 15.0;
pub const DEFAULT_EXPECTED_RETURN: f64 = 7.0;

/// Longest projection accepted from user input
pub const MAX_PROJECTION_YEARS: i64 = 150;

/// Annual income with a flat tax approximation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeProfile {
    /// Gross annual income
    #[serde(deserialize_with = "coerce::number")]
    pub gross: f64,

    /// Flat tax rate in percent (0-100)
    #[serde(deserialize_with = "coerce::number")]
    pub tax_rate: f64,

    /// Deductions, subtracted after tax
    #[serde(deserialize_with = "coerce::number")]
    pub deductions: f64,
}

impl Default for IncomeProfile {
    fn default() -> Self {
        Self {
            gross: 0.0,
            tax_rate: DEFAULT_TAX_RATE,
            deductions: 0.0,
        }
    }
}

impl IncomeProfile {
    pub fn new(gross: f64, tax_rate: f64, deductions: f64) -> Self {
        Self { gross, tax_rate, deductions }
    }
}

/// Monthly expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpenseCategory {
    Housing,
    Transportation,
    Food,
    Utilities,
    Insurance,
    Entertainment,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Housing,
        ExpenseCategory::Transportation,
        ExpenseCategory::Food,
        ExpenseCategory::Utilities,
        ExpenseCategory::Insurance,
        ExpenseCategory::Entertainment,
    ];

    /// Machine key, as used in JSON and CSV input
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "housing",
            ExpenseCategory::Transportation => "transportation",
            ExpenseCategory::Food => "food",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Insurance => "insurance",
            ExpenseCategory::Entertainment => "entertainment",
        }
    }

    /// Display label (key with the first letter capitalised)
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Insurance => "Insurance",
            ExpenseCategory::Entertainment => "Entertainment",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }
}

/// Monthly spending per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseLedger {
    #[serde(deserialize_with = "coerce::number")]
    pub housing: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub transportation: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub food: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub utilities: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub insurance: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub entertainment: f64,
}

impl ExpenseLedger {
    pub fn get(&self, category: ExpenseCategory) -> f64 {
        match category {
            ExpenseCategory::Housing => self.housing,
            ExpenseCategory::Transportation => self.transportation,
            ExpenseCategory::Food => self.food,
            ExpenseCategory::Utilities => self.utilities,
            ExpenseCategory::Insurance => self.insurance,
            ExpenseCategory::Entertainment => self.entertainment,
        }
    }

    pub fn set(&mut self, category: ExpenseCategory, amount: f64) {
        let slot = match category {
            ExpenseCategory::Housing => &mut self.housing,
            ExpenseCategory::Transportation => &mut self.transportation,
            ExpenseCategory::Food => &mut self.food,
            ExpenseCategory::Utilities => &mut self.utilities,
            ExpenseCategory::Insurance => &mut self.insurance,
            ExpenseCategory::Entertainment => &mut self.entertainment,
        };
        *slot = amount;
    }

    /// Iterate (category, amount) pairs in display order
    pub fn entries(&self) -> impl Iterator<Item = (ExpenseCategory, f64)> + '_ {
        ExpenseCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Asset category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetCategory {
    Cash,
    Investments,
    RealEstate,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 3] = [
        AssetCategory::Cash,
        AssetCategory::Investments,
        AssetCategory::RealEstate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Cash => "cash",
            AssetCategory::Investments => "investments",
            AssetCategory::RealEstate => "realEstate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetCategory::Cash => "Cash",
            AssetCategory::Investments => "Investments",
            AssetCategory::RealEstate => "RealEstate",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }
}

/// Asset balances
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetProfile {
    #[serde(deserialize_with = "coerce::number")]
    pub cash: f64,
    /// Also the starting balance of the retirement projection
    #[serde(deserialize_with = "coerce::number")]
    pub investments: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub real_estate: f64,
}

impl AssetProfile {
    pub fn get(&self, category: AssetCategory) -> f64 {
        match category {
            AssetCategory::Cash => self.cash,
            AssetCategory::Investments => self.investments,
            AssetCategory::RealEstate => self.real_estate,
        }
    }

    pub fn set(&mut self, category: AssetCategory, amount: f64) {
        match category {
            AssetCategory::Cash => self.cash = amount,
            AssetCategory::Investments => self.investments = amount,
            AssetCategory::RealEstate => self.real_estate = amount,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (AssetCategory, f64)> + '_ {
        AssetCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Liability category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LiabilityCategory {
    Mortgage,
    CarLoan,
    StudentLoans,
    CreditCard,
}

impl LiabilityCategory {
    pub const ALL: [LiabilityCategory; 4] = [
        LiabilityCategory::Mortgage,
        LiabilityCategory::CarLoan,
        LiabilityCategory::StudentLoans,
        LiabilityCategory::CreditCard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LiabilityCategory::Mortgage => "mortgage",
            LiabilityCategory::CarLoan => "carLoan",
            LiabilityCategory::StudentLoans => "studentLoans",
            LiabilityCategory::CreditCard => "creditCard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LiabilityCategory::Mortgage => "Mortgage",
            LiabilityCategory::CarLoan => "CarLoan",
            LiabilityCategory::StudentLoans => "StudentLoans",
            LiabilityCategory::CreditCard => "CreditCard",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }
}

/// Outstanding debt balances
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiabilityProfile {
    #[serde(deserialize_with = "coerce::number")]
    pub mortgage: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub car_loan: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub student_loans: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub credit_card: f64,
}

impl LiabilityProfile {
    pub fn get(&self, category: LiabilityCategory) -> f64 {
        match category {
            LiabilityCategory::Mortgage => self.mortgage,
            LiabilityCategory::CarLoan => self.car_loan,
            LiabilityCategory::StudentLoans => self.student_loans,
            LiabilityCategory::CreditCard => self.credit_card,
        }
    }

    pub fn set(&mut self, category: LiabilityCategory, amount: f64) {
        match category {
            LiabilityCategory::Mortgage => self.mortgage = amount,
            LiabilityCategory::CarLoan => self.car_loan = amount,
            LiabilityCategory::StudentLoans => self.student_loans = amount,
            LiabilityCategory::CreditCard => self.credit_card = amount,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (LiabilityCategory, f64)> + '_ {
        LiabilityCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Retirement projection inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetirementAssumptions {
    #[serde(deserialize_with = "coerce::age")]
    pub current_age: u32,

    /// May be below current_age, in which case the projection is empty
    #[serde(deserialize_with = "coerce::age")]
    pub retirement_age: u32,

    /// Percent of monthly net income saved
    #[serde(deserialize_with = "coerce::number")]
    pub savings_rate: f64,

    /// Annual growth in percent, may be negative
    #[serde(deserialize_with = "coerce::number")]
    pub expected_return: f64,
}

impl Default for RetirementAssumptions {
    fn default() -> Self {
        Self {
            current_age: DEFAULT_CURRENT_AGE,
            retirement_age: DEFAULT_RETIREMENT_AGE,
            savings_rate: DEFAULT_SAVINGS_RATE,
            expected_return: DEFAULT_EXPECTED_RETURN,
        }
    }
}

impl RetirementAssumptions {
    /// Years until retirement, negative when already past retirement age
    pub fn horizon(&self) -> i64 {
        i64::from(self.retirement_age) - i64::from(self.current_age)
    }

    /// Reject horizons longer than [`MAX_PROJECTION_YEARS`]
    ///
    /// The engine projects any horizon it is given; callers taking input from
    /// users check this first so a typo cannot allocate billions of points.
    pub fn check_horizon(&self) -> Result<(), ProfileError> {
        let years = self.horizon();
        if years > MAX_PROJECTION_YEARS {
            log::warn!("rejecting projection horizon of {} years", years);
            return Err(ProfileError::HorizonTooLong {
                years,
                max: MAX_PROJECTION_YEARS,
            });
        }
        Ok(())
    }

    /// Same assumptions with a different expected return
    pub fn with_expected_return(self, expected_return: f64) -> Self {
        Self { expected_return, ..self }
    }
}

/// Whole years between a birth date and a reference date
///
/// Dates before the birth date give 0.
pub fn age_on(birth_date: NaiveDate, on: NaiveDate) -> u32 {
    on.years_since(birth_date).unwrap_or(0)
}

/// All calculator inputs for one person
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialProfile {
    pub income: IncomeProfile,
    pub expenses: ExpenseLedger,
    pub assets: AssetProfile,
    pub liabilities: LiabilityProfile,
    pub retirement: RetirementAssumptions,
}
