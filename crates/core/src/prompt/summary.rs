use serde::Serialize;

use crate::patrimony::{CurrentAsset, Debt};
use crate::profile::ClientProfile;

/// Figures derived from the collected profile and sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_current_capital: f64,
    pub total_remaining_debt: f64,
    /// Capital minus debt. Not clamped: may be negative.
    pub net_wealth: f64,
    pub annual_savings: f64,
}

impl FinancialSummary {
    pub fn compute(profile: &ClientProfile, assets: &[CurrentAsset], debts: &[Debt]) -> Self {
        let total_current_capital: f64 = assets.iter().map(|a| a.value).sum();
        let total_remaining_debt: f64 = debts.iter().map(|d| d.remaining_capital).sum();

        Self {
            total_current_capital,
            total_remaining_debt,
            net_wealth: total_current_capital - total_remaining_debt,
            annual_savings: profile.monthly_savings * 12.0,
        }
    }
}
