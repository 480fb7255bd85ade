//! Risk appetite domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::DEFAULT_RISK_SCORE;
use crate::errors::ValidationError;

/// Highest score that still maps to [`RiskLabel::Prudent`].
pub const PRUDENT_MAX_SCORE: u8 = 3;
/// Lowest score that maps to [`RiskLabel::Dynamique`].
pub const DYNAMIQUE_MIN_SCORE: u8 = 8;

/// The three risk tiers. Each generated analysis has one portfolio per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    Prudent,
    #[serde(rename = "Équilibré")]
    Equilibre,
    Dynamique,
}

impl RiskLabel {
    pub const ALL: [RiskLabel; 3] = [RiskLabel::Prudent, RiskLabel::Equilibre, RiskLabel::Dynamique];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Prudent => "Prudent",
            RiskLabel::Equilibre => "Équilibré",
            RiskLabel::Dynamique => "Dynamique",
        }
    }

    /// Band a 1-10 score: `<= 3` Prudent, `4..=7` Équilibré, `>= 8` Dynamique.
    pub fn from_score(score: u8) -> Self {
        if score <= PRUDENT_MAX_SCORE {
            RiskLabel::Prudent
        } else if score < DYNAMIQUE_MIN_SCORE {
            RiskLabel::Equilibre
        } else {
            RiskLabel::Dynamique
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk appetite of the client. `score` and `label` are only ever set together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "RawRiskProfile")]
pub struct RiskProfile {
    score: u8,
    label: RiskLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RiskProfile {
    /// Profile for an explicit (score, label) pair, e.g. a preset card.
    pub fn new(score: u8, label: RiskLabel) -> Result<Self, ValidationError> {
        Ok(Self {
            score: validate_score(score)?,
            label,
            description: None,
        })
    }

    /// Profile whose label is derived from the score.
    pub fn from_score(score: u8) -> Result<Self, ValidationError> {
        let score = validate_score(score)?;
        Ok(Self {
            score,
            label: RiskLabel::from_score(score),
            description: None,
        })
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn label(&self) -> RiskLabel {
        self.label
    }
}

/// Unvalidated wire form of [`RiskProfile`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRiskProfile {
    score: u8,
    label: RiskLabel,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RawRiskProfile> for RiskProfile {
    type Error = ValidationError;

    fn try_from(raw: RawRiskProfile) -> Result<Self, Self::Error> {
        let mut profile = RiskProfile::new(raw.score, raw.label)?;
        profile.description = raw.description;
        Ok(profile)
    }
}

impl Default for RiskProfile {
    fn default() -> Self {
        Self {
            score: DEFAULT_RISK_SCORE,
            label: RiskLabel::from_score(DEFAULT_RISK_SCORE),
            description: None,
        }
    }
}

fn validate_score(score: u8) -> Result<u8, ValidationError> {
    if (1..=10).contains(&score) {
        Ok(score)
    } else {
        Err(ValidationError::RiskScoreOutOfRange(score))
    }
}

/// A selectable risk card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskPreset {
    pub score: u8,
    pub label: RiskLabel,
    pub icon: &'static str,
    pub description: &'static str,
    pub implication: &'static str,
}

pub const RISK_PRESETS: [RiskPreset; 3] = [
    RiskPreset {
        score: 2,
        label: RiskLabel::Prudent,
        icon: "🛡️",
        description: "Priorité absolue à la sécurité du capital. Horizon de placement court ou besoin de liquidité immédiate.",
        implication: "Aversion forte à la volatilité.",
    },
    RiskPreset {
        score: 5,
        label: RiskLabel::Equilibre,
        icon: "⚖️",
        description: "Recherche de croissance modérée avec une acceptation des fluctuations de marché à moyen terme.",
        implication: "Mix entre actifs sécurisés et dynamiques.",
    },
    RiskPreset {
        score: 9,
        label: RiskLabel::Dynamique,
        icon: "🚀",
        description: "Recherche de performance maximale. Capacité à supporter des baisses temporaires importantes pour un gain futur.",
        implication: "Horizon long terme (8 ans +).",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banding_examples() {
        assert_eq!(RiskLabel::from_score(2), RiskLabel::Prudent);
        assert_eq!(RiskLabel::from_score(3), RiskLabel::Prudent);
        assert_eq!(RiskLabel::from_score(4), RiskLabel::Equilibre);
        assert_eq!(RiskLabel::from_score(5), RiskLabel::Equilibre);
        assert_eq!(RiskLabel::from_score(7), RiskLabel::Equilibre);
        assert_eq!(RiskLabel::from_score(8), RiskLabel::Dynamique);
        assert_eq!(RiskLabel::from_score(9), RiskLabel::Dynamique);
    }

    #[test]
    fn test_presets_agree_with_banding() {
        for preset in RISK_PRESETS {
            assert_eq!(RiskLabel::from_score(preset.score), preset.label);
        }
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        assert_eq!(
            RiskProfile::from_score(0),
            Err(ValidationError::RiskScoreOutOfRange(0))
        );
        assert!(RiskProfile::new(11, RiskLabel::Dynamique).is_err());
    }

    #[test]
    fn test_label_serializes_with_accents() {
        let json = serde_json::to_string(&RiskLabel::Equilibre).unwrap();
        assert_eq!(json, "\"Équilibré\"");
        let profile = RiskProfile::default();
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["score"], 5);
        assert_eq!(value["label"], "Équilibré");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_score() {
        let err = serde_json::from_str::<RiskProfile>(r#"{"score":0,"label":"Dynamique"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("got 0"));
        assert!(serde_json::from_str::<RiskProfile>(r#"{"score":11,"label":"Prudent"}"#).is_err());
    }

    #[test]
    fn test_deserialize_valid_profile() {
        let profile: RiskProfile = serde_json::from_str(
            r#"{"score":9,"label":"Dynamique","description":"Horizon long"}"#,
        )
        .unwrap();
        assert_eq!(profile.score(), 9);
        assert_eq!(profile.label(), RiskLabel::Dynamique);
        assert_eq!(profile.description.as_deref(), Some("Horizon long"));
    }
}
