//! Ten-year compound-growth projection.
//!
//! `V10 = W × (1+r)^10 + S × (((1+r)^10 − 1) / r)` with `W` the net wealth,
//! `S` the annual savings and `r` the annual return as a fraction.
//! The model is asked to apply the same formula; [`ProjectionCheck`] measures
//! how far a returned value drifted from it.

use serde::Serialize;

use crate::analysis::Portfolio;
use crate::constants::PROJECTION_YEARS;
use crate::prompt::FinancialSummary;

/// Relative drift below which a returned projection is considered consistent.
pub const DEFAULT_PROJECTION_TOLERANCE: f64 = 0.01;

/// Value after ten years of growth at `annual_return` (0.05 for 5%).
///
/// At `r = 0` the annuity factor tends to the number of years.
pub fn projected_value_10y(net_wealth: f64, annual_savings: f64, annual_return: f64) -> f64 {
    let growth = (1.0 + annual_return).powi(PROJECTION_YEARS);
    let annuity_factor = if annual_return == 0.0 {
        PROJECTION_YEARS as f64
    } else {
        (growth - 1.0) / annual_return
    };
    net_wealth * growth + annual_savings * annuity_factor
}

/// Comparison between a returned projection and the formula result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionCheck {
    pub portfolio_name: String,
    pub reported: f64,
    pub expected: f64,
    /// `|reported - expected| / max(|expected|, 1)`
    pub relative_drift: f64,
}

impl ProjectionCheck {
    /// Recompute the projection of `portfolio` from its expected return (a percentage).
    pub fn for_portfolio(portfolio: &Portfolio, summary: &FinancialSummary) -> Self {
        let expected = projected_value_10y(
            summary.net_wealth,
            summary.annual_savings,
            portfolio.expected_return / 100.0,
        );
        let reported = portfolio.projected_value_10y;
        Self {
            portfolio_name: portfolio.name.clone(),
            reported,
            expected,
            relative_drift: (reported - expected).abs() / expected.abs().max(1.0),
        }
    }

    pub fn is_consistent(&self, tolerance: f64) -> bool {
        self.relative_drift <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_projection() {
        let value = projected_value_10y(70_000.0, 12_000.0, 0.05);
        assert!((value - 264_957.0).abs() < 1.0, "got {}", value);
    }

    #[test]
    fn test_zero_return_is_linear() {
        assert_eq!(projected_value_10y(10_000.0, 1_000.0, 0.0), 20_000.0);
    }

    #[test]
    fn test_tiny_return_is_continuous_with_zero() {
        let at_zero = projected_value_10y(10_000.0, 1_000.0, 0.0);
        let near_zero = projected_value_10y(10_000.0, 1_000.0, 1e-6);
        assert!((at_zero - near_zero).abs() < 0.5);
    }

    #[test]
    fn test_negative_wealth_compounds_as_debt() {
        let value = projected_value_10y(-10_000.0, 0.0, 0.05);
        assert!(value < -16_000.0 && value > -16_300.0);
    }

    #[test]
    fn test_projection_check_flags_fraction_mistake() {
        let summary = FinancialSummary {
            total_current_capital: 100_000.0,
            total_remaining_debt: 30_000.0,
            net_wealth: 70_000.0,
            annual_savings: 12_000.0,
        };
        let portfolio = Portfolio {
            name: "Portefeuille Équilibré".to_string(),
            risk_level: "Équilibré".to_string(),
            expected_return: 5.0,
            volatility: 9.0,
            projected_value_10y: 264_957.0,
            quality_score: 85.0,
            diversification_highlights: vec![],
            recommended_wrappers: vec![],
            allocation: vec![],
            attainability: vec![],
            analysis: String::new(),
        };
        let check = ProjectionCheck::for_portfolio(&portfolio, &summary);
        assert!(check.is_consistent(DEFAULT_PROJECTION_TOLERANCE));

        let wrong = Portfolio {
            expected_return: 0.05,
            ..portfolio
        };
        let check = ProjectionCheck::for_portfolio(&wrong, &summary);
        assert!(!check.is_consistent(DEFAULT_PROJECTION_TOLERANCE));
    }
}
