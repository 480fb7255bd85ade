//! Life goal domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_GOAL_HORIZON, DEFAULT_GOAL_TARGET};
use crate::errors::ValidationError;
use crate::utils::validate_amount;

/// Domain model representing a life goal (retirement, home purchase, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LifeGoal {
    pub id: String,
    pub title: String,
    /// Years until the goal is due.
    pub horizon: u32,
    pub target_amount: f64,
}

impl LifeGoal {
    /// Create a goal with a fresh id, from a template or the blank defaults.
    pub fn new(template: Option<&GoalTemplate>) -> Self {
        match template {
            Some(template) => Self {
                id: Uuid::now_v7().to_string(),
                title: template.title.to_string(),
                horizon: template.horizon,
                target_amount: template.target_amount,
            },
            None => Self {
                id: Uuid::now_v7().to_string(),
                title: String::new(),
                horizon: DEFAULT_GOAL_HORIZON,
                target_amount: DEFAULT_GOAL_TARGET,
            },
        }
    }

    pub fn apply(&mut self, update: GoalUpdate) -> Result<(), ValidationError> {
        match update {
            GoalUpdate::Title(title) => self.title = title,
            GoalUpdate::Horizon(years) => self.horizon = years,
            GoalUpdate::TargetAmount(amount) => {
                self.target_amount = validate_amount("targetAmount", amount)?
            }
        }
        Ok(())
    }
}

/// A single edit of a goal card.
#[derive(Debug, Clone, PartialEq)]
pub enum GoalUpdate {
    Title(String),
    Horizon(u32),
    TargetAmount(f64),
}

/// Predefined goal offered as a one-click shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTemplate {
    pub title: &'static str,
    pub horizon: u32,
    pub target_amount: f64,
    pub icon: &'static str,
}

pub const PREDEFINED_GOALS: [GoalTemplate; 6] = [
    GoalTemplate {
        title: "Retraite sereine",
        horizon: 25,
        target_amount: 500_000.0,
        icon: "👴",
    },
    GoalTemplate {
        title: "Achat Résidence Principale",
        horizon: 5,
        target_amount: 150_000.0,
        icon: "🏠",
    },
    GoalTemplate {
        title: "Études des enfants",
        horizon: 15,
        target_amount: 80_000.0,
        icon: "🎓",
    },
    GoalTemplate {
        title: "Épargne de précaution",
        horizon: 0,
        target_amount: 30_000.0,
        icon: "🛡️",
    },
    GoalTemplate {
        title: "Investissement Locatif",
        horizon: 8,
        target_amount: 100_000.0,
        icon: "🏢",
    },
    GoalTemplate {
        title: "Tour du monde",
        horizon: 3,
        target_amount: 50_000.0,
        icon: "🌍",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_goal_from_template() {
        let goal = LifeGoal::new(Some(&PREDEFINED_GOALS[0]));
        assert_eq!(goal.title, "Retraite sereine");
        assert_eq!(goal.horizon, 25);
        assert_eq!(goal.target_amount, 500_000.0);
        assert!(!goal.id.is_empty());
    }

    #[test]
    fn test_new_blank_goal_uses_defaults() {
        let goal = LifeGoal::new(None);
        assert!(goal.title.is_empty());
        assert_eq!(goal.horizon, 10);
        assert_eq!(goal.target_amount, 100_000.0);
    }

    #[test]
    fn test_zero_horizon_template_is_kept() {
        let goal = LifeGoal::new(Some(&PREDEFINED_GOALS[3]));
        assert_eq!(goal.horizon, 0);
    }

    #[test]
    fn test_apply_updates() {
        let mut goal = LifeGoal::new(None);
        goal.apply(GoalUpdate::Title("Voilier".to_string())).unwrap();
        goal.apply(GoalUpdate::Horizon(7)).unwrap();
        goal.apply(GoalUpdate::TargetAmount(60_000.0)).unwrap();
        assert_eq!(goal.title, "Voilier");
        assert_eq!(goal.horizon, 7);
        assert_eq!(goal.target_amount, 60_000.0);

        assert!(goal.apply(GoalUpdate::TargetAmount(f64::NAN)).is_err());
        assert_eq!(goal.target_amount, 60_000.0);
    }
}
