//! Client profile domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    DEFAULT_AGE, DEFAULT_MONTHLY_INCOME, DEFAULT_MONTHLY_SAVINGS, DEFAULT_TAX_BRACKET, TAX_BRACKETS,
};
use crate::errors::ValidationError;
use crate::utils::validate_amount;

/// Marginal income-tax rate (TMI).
///
/// Serialized as the bare percentage (`30`), matching the form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TaxBracket(u8);

impl TaxBracket {
    pub fn new(rate: u8) -> Result<Self, ValidationError> {
        if TAX_BRACKETS.contains(&rate) {
            Ok(Self(rate))
        } else {
            Err(ValidationError::UnsupportedTaxBracket(rate))
        }
    }

    /// Rate in percent.
    pub fn rate(&self) -> u8 {
        self.0
    }

    /// All brackets, lowest first.
    pub fn all() -> impl Iterator<Item = TaxBracket> {
        TAX_BRACKETS.iter().map(|rate| TaxBracket(*rate))
    }
}

impl Default for TaxBracket {
    fn default() -> Self {
        Self(DEFAULT_TAX_BRACKET)
    }
}

impl TryFrom<u8> for TaxBracket {
    type Error = ValidationError;

    fn try_from(rate: u8) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

impl From<TaxBracket> for u8 {
    fn from(bracket: TaxBracket) -> Self {
        bracket.0
    }
}

impl fmt::Display for TaxBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Identity and cash-flow figures of the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    pub first_name: String,
    pub age: u32,
    pub profession: String,
    pub tax_bracket: TaxBracket,
    pub monthly_income: f64,
    pub monthly_savings: f64,
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            age: DEFAULT_AGE,
            profession: String::new(),
            tax_bracket: TaxBracket::default(),
            monthly_income: DEFAULT_MONTHLY_INCOME,
            monthly_savings: DEFAULT_MONTHLY_SAVINGS,
        }
    }
}

/// A single edit of the profile form.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUpdate {
    FirstName(String),
    Age(u32),
    Profession(String),
    TaxBracket(TaxBracket),
    MonthlyIncome(f64),
    MonthlySavings(f64),
}

impl ClientProfile {
    /// Apply one field edit, rejecting negative or non-finite amounts.
    pub fn apply(&mut self, update: ProfileUpdate) -> Result<(), ValidationError> {
        match update {
            ProfileUpdate::FirstName(name) => self.first_name = name,
            ProfileUpdate::Age(age) => self.age = age,
            ProfileUpdate::Profession(profession) => self.profession = profession,
            ProfileUpdate::TaxBracket(bracket) => self.tax_bracket = bracket,
            ProfileUpdate::MonthlyIncome(amount) => {
                self.monthly_income = validate_amount("monthlyIncome", amount)?
            }
            ProfileUpdate::MonthlySavings(amount) => {
                self.monthly_savings = validate_amount("monthlySavings", amount)?
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_bracket_accepts_known_rates() {
        for rate in TAX_BRACKETS {
            assert_eq!(TaxBracket::new(rate).unwrap().rate(), rate);
        }
    }

    #[test]
    fn test_tax_bracket_rejects_unknown_rate() {
        assert_eq!(
            TaxBracket::new(20),
            Err(ValidationError::UnsupportedTaxBracket(20))
        );
    }

    #[test]
    fn test_tax_bracket_serializes_as_number() {
        let json = serde_json::to_string(&TaxBracket::new(41).unwrap()).unwrap();
        assert_eq!(json, "41");
        assert!(serde_json::from_str::<TaxBracket>("12").is_err());
    }

    #[test]
    fn test_profile_defaults() {
        let profile = ClientProfile::default();
        assert_eq!(profile.age, 40);
        assert_eq!(profile.tax_bracket.rate(), 30);
        assert_eq!(profile.monthly_income, 5000.0);
        assert_eq!(profile.monthly_savings, 1000.0);
        assert!(profile.first_name.is_empty());
    }

    #[test]
    fn test_apply_rejects_negative_savings() {
        let mut profile = ClientProfile::default();
        let err = profile
            .apply(ProfileUpdate::MonthlySavings(-10.0))
            .unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount { .. }));
        assert_eq!(profile.monthly_savings, 1000.0);
    }

    #[test]
    fn test_profile_json_is_camel_case() {
        let value = serde_json::to_value(ClientProfile::default()).unwrap();
        assert!(value.get("firstName").is_some());
        assert!(value.get("monthlySavings").is_some());
        assert_eq!(value["taxBracket"], 30);
    }
}
