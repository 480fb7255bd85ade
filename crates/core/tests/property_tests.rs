//! Property-based tests for derived figures, risk banding and entry ids.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use std::collections::HashSet;
use uportfolio_core::prompt::{projected_value_10y, FinancialSummary};
use uportfolio_core::utils::format_amount;
use uportfolio_core::{
    AssetUpdate, ClientProfile, CurrentAsset, Debt, DebtUpdate, RiskLabel, RiskProfile,
    WizardState,
};

// =============================================================================
// Generators
// =============================================================================

fn arb_amount() -> impl Strategy<Value = f64> {
    (0u32..5_000_000).prop_map(f64::from)
}

fn arb_assets() -> impl Strategy<Value = Vec<CurrentAsset>> {
    prop::collection::vec(arb_amount(), 0..8).prop_map(|values| {
        values
            .into_iter()
            .map(|value| {
                let mut asset = CurrentAsset::new();
                asset.apply(AssetUpdate::Value(value)).unwrap();
                asset
            })
            .collect()
    })
}

fn arb_debts() -> impl Strategy<Value = Vec<Debt>> {
    prop::collection::vec(arb_amount(), 0..8).prop_map(|capitals| {
        capitals
            .into_iter()
            .map(|capital| {
                let mut debt = Debt::new();
                debt.apply(DebtUpdate::RemainingCapital(capital)).unwrap();
                debt
            })
            .collect()
    })
}

#[derive(Debug, Clone)]
enum CollectionOp {
    Add,
    RemoveAt(usize),
}

fn arb_ops() -> impl Strategy<Value = Vec<CollectionOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(CollectionOp::Add),
            1 => (0usize..16).prop_map(CollectionOp::RemoveAt),
        ],
        0..40,
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Net wealth is the exact difference of the two sums, never clamped.
    #[test]
    fn prop_net_wealth_is_capital_minus_debt(assets in arb_assets(), debts in arb_debts()) {
        let summary = FinancialSummary::compute(&ClientProfile::default(), &assets, &debts);
        let capital: f64 = assets.iter().map(|a| a.value).sum();
        let debt: f64 = debts.iter().map(|d| d.remaining_capital).sum();

        prop_assert_eq!(summary.total_current_capital, capital);
        prop_assert_eq!(summary.total_remaining_debt, debt);
        prop_assert_eq!(summary.net_wealth, capital - debt);
    }

    #[test]
    fn prop_annual_savings_is_twelve_months(monthly in 0u32..100_000) {
        let profile = ClientProfile {
            monthly_savings: f64::from(monthly),
            ..Default::default()
        };
        let summary = FinancialSummary::compute(&profile, &[], &[]);
        prop_assert_eq!(summary.annual_savings, f64::from(monthly) * 12.0);
    }

    /// Every score maps to exactly the band it falls in.
    #[test]
    fn prop_risk_banding(score in 1u8..=10) {
        let risk = RiskProfile::from_score(score).unwrap();
        let expected = match score {
            1..=3 => RiskLabel::Prudent,
            4..=7 => RiskLabel::Equilibre,
            _ => RiskLabel::Dynamique,
        };
        prop_assert_eq!(risk.label(), expected);
        prop_assert_eq!(risk.score(), score);
    }

    /// Projection grows with the return rate for non-negative inputs.
    #[test]
    fn prop_projection_monotonic_in_return(
        wealth in arb_amount(),
        savings in arb_amount(),
        low in 0u32..1000,
        step in 1u32..500,
    ) {
        let r_low = f64::from(low) / 10_000.0;
        let r_high = f64::from(low + step) / 10_000.0;
        let v_low = projected_value_10y(wealth, savings, r_low);
        let v_high = projected_value_10y(wealth, savings, r_high);
        prop_assert!(v_high >= v_low);
        prop_assert!(v_low >= wealth + 10.0 * savings - 1e-6);
    }

    /// Ids stay unique and removal keeps the relative order of survivors.
    #[test]
    fn prop_goal_ids_unique_and_order_stable(ops in arb_ops()) {
        let mut wizard = WizardState::new();
        let mut expected: Vec<String> = Vec::new();

        for op in ops {
            match op {
                CollectionOp::Add => expected.push(wizard.add_goal(None).unwrap()),
                CollectionOp::RemoveAt(i) => {
                    if !expected.is_empty() {
                        let id = expected.remove(i % expected.len());
                        let removed = wizard.remove_goal(&id).unwrap();
                        prop_assert_eq!(removed.id, id);
                    }
                }
            }
        }

        let actual: Vec<String> = wizard.goals().iter().map(|g| g.id.clone()).collect();
        let unique: HashSet<&String> = actual.iter().collect();
        prop_assert_eq!(unique.len(), actual.len());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_format_amount_digits_round_trip(value in 0u64..10_000_000_000) {
        let formatted = format_amount(value as f64);
        let digits: String = formatted.chars().filter(|c| *c != ' ').collect();
        prop_assert_eq!(digits, value.to_string());
    }
}

#[test]
fn test_n_adds_yield_n_distinct_ids() {
    let mut wizard = WizardState::new();
    let n = 200;
    let goals: HashSet<String> = (0..n).map(|_| wizard.add_goal(None).unwrap()).collect();
    let assets: HashSet<String> = (0..n).map(|_| wizard.add_asset().unwrap()).collect();
    let debts: HashSet<String> = (0..n).map(|_| wizard.add_debt().unwrap()).collect();
    assert_eq!(goals.len(), n);
    assert_eq!(assets.len(), n);
    assert_eq!(debts.len(), n);
}
