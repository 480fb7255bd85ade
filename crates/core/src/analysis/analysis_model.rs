//! Analysis response models.
//!
//! These types mirror the JSON document returned by the model. Fields that the
//! response schema marks as mandatory have no serde default, so a document
//! missing one of them fails to parse. Business rules (allocations summing to
//! 100, attainability titles matching a goal) are not checked here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::FALLBACK_PORTFOLIO_INDEX;

/// Verdict on whether a life goal is reachable with a portfolio.
///
/// The schema asks for one of three values; any other string the model
/// returns is kept as `Other` rather than failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttainabilityStatus {
    Atteignable,
    Partiel,
    Difficile,
    Other(String),
}

impl AttainabilityStatus {
    /// The values advertised in the response schema.
    pub const ALL: [AttainabilityStatus; 3] = [
        AttainabilityStatus::Atteignable,
        AttainabilityStatus::Partiel,
        AttainabilityStatus::Difficile,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AttainabilityStatus::Atteignable => "Atteignable",
            AttainabilityStatus::Partiel => "Partiel",
            AttainabilityStatus::Difficile => "Difficile",
            AttainabilityStatus::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AttainabilityStatus::Other(_))
    }
}

impl From<String> for AttainabilityStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Atteignable" => AttainabilityStatus::Atteignable,
            "Partiel" => AttainabilityStatus::Partiel,
            "Difficile" => AttainabilityStatus::Difficile,
            _ => AttainabilityStatus::Other(raw),
        }
    }
}

impl From<AttainabilityStatus> for String {
    fn from(status: AttainabilityStatus) -> Self {
        match status {
            AttainabilityStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AttainabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a portfolio's allocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub category: String,
    /// Share of the portfolio in percent.
    pub percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalAttainability {
    pub goal_title: String,
    pub status: AttainabilityStatus,
    #[serde(default)]
    pub analysis: String,
}

/// A proposed portfolio for one risk tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub name: String,
    #[serde(default)]
    pub risk_level: String,
    /// Expected annual return in percent (7.5 means 7.5%).
    pub expected_return: f64,
    /// Annual volatility in percent.
    #[serde(default)]
    pub volatility: f64,
    #[serde(rename = "projectedValue10y")]
    pub projected_value_10y: f64,
    /// Asset quality score, 0 to 100.
    #[serde(default)]
    pub quality_score: f64,
    #[serde(default)]
    pub diversification_highlights: Vec<String>,
    pub recommended_wrappers: Vec<String>,
    pub allocation: Vec<AssetAllocation>,
    pub attainability: Vec<GoalAttainability>,
    #[serde(default)]
    pub analysis: String,
}

impl Portfolio {
    /// Sum of the allocation percentages. Informational only.
    pub fn total_allocation(&self) -> f64 {
        self.allocation.iter().map(|a| a.percentage).sum()
    }
}

/// Root of the model's answer: one summary and one portfolio per risk tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub summary: String,
    pub portfolios: Vec<Portfolio>,
}

impl AnalysisResponse {
    /// Index of the portfolio to show first.
    ///
    /// The first portfolio whose name contains `risk_label` (case-insensitive)
    /// wins. Otherwise index 1, the balanced tier by convention, clamped to
    /// the last portfolio when fewer are present.
    pub fn preferred_portfolio_index(&self, risk_label: &str) -> usize {
        let needle = risk_label.to_lowercase();
        self.portfolios
            .iter()
            .position(|p| p.name.to_lowercase().contains(&needle))
            .unwrap_or_else(|| FALLBACK_PORTFOLIO_INDEX.min(self.portfolios.len().saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio(name: &str) -> Portfolio {
        Portfolio {
            name: name.to_string(),
            risk_level: String::new(),
            expected_return: 5.0,
            volatility: 8.0,
            projected_value_10y: 0.0,
            quality_score: 80.0,
            diversification_highlights: vec![],
            recommended_wrappers: vec!["PEA".to_string()],
            allocation: vec![],
            attainability: vec![],
            analysis: String::new(),
        }
    }

    fn response() -> AnalysisResponse {
        AnalysisResponse {
            summary: "Synthèse".to_string(),
            portfolios: vec![
                portfolio("Portefeuille Prudent"),
                portfolio("Portefeuille Équilibré"),
                portfolio("Portefeuille Dynamique"),
            ],
        }
    }

    #[test]
    fn test_preferred_index_matches_label() {
        let response = response();
        assert_eq!(response.preferred_portfolio_index("Prudent"), 0);
        assert_eq!(response.preferred_portfolio_index("Équilibré"), 1);
        assert_eq!(response.preferred_portfolio_index("Dynamique"), 2);
    }

    #[test]
    fn test_preferred_index_is_case_insensitive() {
        assert_eq!(response().preferred_portfolio_index("ÉQUILIBRÉ"), 1);
        assert_eq!(response().preferred_portfolio_index("dynamique"), 2);
    }

    #[test]
    fn test_preferred_index_falls_back_to_second() {
        assert_eq!(response().preferred_portfolio_index("Audacieux"), 1);
    }

    #[test]
    fn test_preferred_index_first_match_wins() {
        let mut response = response();
        response.portfolios[2].name = "Prudent renforcé".to_string();
        assert_eq!(response.preferred_portfolio_index("prudent"), 0);
    }

    #[test]
    fn test_parse_tolerates_missing_optional_fields() {
        let json = r#"{
            "summary": "ok",
            "portfolios": [{
                "name": "Portefeuille Prudent",
                "expectedReturn": 3.5,
                "projectedValue10y": 150000,
                "recommendedWrappers": ["Assurance Vie"],
                "allocation": [{"category": "Fonds Euros", "percentage": 70}],
                "attainability": [{"goalTitle": "Retraite sereine", "status": "Partiel"}]
            }]
        }"#;
        let parsed: AnalysisResponse = serde_json::from_str(json).unwrap();
        let p = &parsed.portfolios[0];
        assert_eq!(p.volatility, 0.0);
        assert!(p.diversification_highlights.is_empty());
        assert_eq!(p.allocation[0].reason, None);
        assert_eq!(p.attainability[0].status, AttainabilityStatus::Partiel);
        assert_eq!(p.total_allocation(), 70.0);
    }

    #[test]
    fn test_unlisted_status_is_kept_verbatim() {
        let json = r#"[
            {"goalTitle": "Retraite", "status": "Atteignable sous conditions"},
            {"goalTitle": "Études", "status": "Difficile"}
        ]"#;
        let parsed: Vec<GoalAttainability> = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed[0].status,
            AttainabilityStatus::Other("Atteignable sous conditions".to_string())
        );
        assert!(!parsed[0].status.is_known());
        assert_eq!(parsed[1].status, AttainabilityStatus::Difficile);

        let round_trip = serde_json::to_value(&parsed[0]).unwrap();
        assert_eq!(round_trip["status"], "Atteignable sous conditions");
    }

    #[test]
    fn test_parse_rejects_missing_mandatory_field() {
        let json = r#"{"summary": "ok", "portfolios": [{"name": "X", "expectedReturn": 3}]}"#;
        assert!(serde_json::from_str::<AnalysisResponse>(json).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let json = r#"{"goalTitle": "Tour du monde", "status": "Impossible", "analysis": ""}"#;
        assert!(serde_json::from_str::<GoalAttainability>(json).is_err());
    }
}
