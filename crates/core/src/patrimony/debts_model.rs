//! Debt (liability) domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::constants::DEFAULT_DEBT_INTEREST_RATE;
use crate::errors::ValidationError;
use crate::utils::{validate_amount, validate_finite};

/// Loan categories offered by the liabilities step, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DebtCategory {
    #[default]
    #[serde(rename = "Immobilier (Résidence)")]
    MainResidenceMortgage,
    #[serde(rename = "Immobilier (Locatif)")]
    RentalMortgage,
    #[serde(rename = "In Fine / Lombard")]
    InFineOrLombard,
    #[serde(rename = "Prêt Relais")]
    BridgeLoan,
    #[serde(rename = "Professionnel")]
    Professional,
    #[serde(rename = "Consommation")]
    Consumer,
}

impl DebtCategory {
    pub const ALL: [DebtCategory; 6] = [
        DebtCategory::MainResidenceMortgage,
        DebtCategory::RentalMortgage,
        DebtCategory::InFineOrLombard,
        DebtCategory::BridgeLoan,
        DebtCategory::Professional,
        DebtCategory::Consumer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DebtCategory::MainResidenceMortgage => "Immobilier (Résidence)",
            DebtCategory::RentalMortgage => "Immobilier (Locatif)",
            DebtCategory::InFineOrLombard => "In Fine / Lombard",
            DebtCategory::BridgeLoan => "Prêt Relais",
            DebtCategory::Professional => "Professionnel",
            DebtCategory::Consumer => "Consommation",
        }
    }
}

impl fmt::Display for DebtCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Domain model representing an outstanding loan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    #[serde(rename = "type")]
    pub category: DebtCategory,
    pub remaining_capital: f64,
    pub monthly_payment: f64,
    /// Annual rate in percent (1.5 means 1.5%).
    pub interest_rate: f64,
}

impl Debt {
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            category: DebtCategory::default(),
            remaining_capital: 0.0,
            monthly_payment: 0.0,
            interest_rate: DEFAULT_DEBT_INTEREST_RATE,
        }
    }

    pub fn apply(&mut self, update: DebtUpdate) -> Result<(), ValidationError> {
        match update {
            DebtUpdate::Category(category) => self.category = category,
            DebtUpdate::RemainingCapital(amount) => {
                self.remaining_capital = validate_amount("remainingCapital", amount)?
            }
            DebtUpdate::MonthlyPayment(amount) => {
                self.monthly_payment = validate_amount("monthlyPayment", amount)?
            }
            DebtUpdate::InterestRate(rate) => {
                self.interest_rate = validate_finite("interestRate", rate)?
            }
        }
        Ok(())
    }
}

impl Default for Debt {
    fn default() -> Self {
        Self::new()
    }
}

/// A single edit of a loan card.
#[derive(Debug, Clone, PartialEq)]
pub enum DebtUpdate {
    Category(DebtCategory),
    RemainingCapital(f64),
    MonthlyPayment(f64),
    InterestRate(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_debt_defaults() {
        let debt = Debt::new();
        assert_eq!(debt.category, DebtCategory::MainResidenceMortgage);
        assert_eq!(debt.remaining_capital, 0.0);
        assert_eq!(debt.monthly_payment, 0.0);
        assert_eq!(debt.interest_rate, 1.5);
    }

    #[test]
    fn test_interest_rate_must_be_finite() {
        let mut debt = Debt::new();
        assert!(debt.apply(DebtUpdate::InterestRate(f64::INFINITY)).is_err());
        debt.apply(DebtUpdate::InterestRate(3.25)).unwrap();
        assert_eq!(debt.interest_rate, 3.25);
    }

    #[test]
    fn test_debt_round_trips_through_json() {
        let mut debt = Debt::new();
        debt.apply(DebtUpdate::Category(DebtCategory::BridgeLoan))
            .unwrap();
        debt.apply(DebtUpdate::RemainingCapital(80_000.0)).unwrap();

        let json = serde_json::to_string(&debt).unwrap();
        assert!(json.contains("\"type\":\"Prêt Relais\""));
        assert!(json.contains("\"remainingCapital\":80000.0"));
        let back: Debt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, debt);
    }
}
