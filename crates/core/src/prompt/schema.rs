//! Response schema sent alongside the prompt.
//!
//! Expressed in the OpenAPI subset accepted by Gemini's `responseSchema`
//! (upper-case type names). The `required` lists match the serde defaults of
//! [`crate::analysis::AnalysisResponse`]: a field required here has no default
//! on the Rust side.

use serde_json::{json, Value};

use crate::analysis::AttainabilityStatus;

pub const PORTFOLIO_REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "expectedReturn",
    "allocation",
    "projectedValue10y",
    "attainability",
    "recommendedWrappers",
];

/// Schema of the whole `AnalysisResponse` document.
pub fn analysis_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "Note de synthèse globale pédagogique expliquant la stratégie globale pour le client."
            },
            "portfolios": {
                "type": "ARRAY",
                "minItems": 3,
                "maxItems": 3,
                "items": portfolio_schema()
            }
        },
        "required": ["summary", "portfolios"]
    })
}

fn portfolio_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "riskLevel": { "type": "STRING" },
            "expectedReturn": {
                "type": "NUMBER",
                "description": "Rendement annuel moyen en % (ex: 5.5 pour 5,5 %)"
            },
            "volatility": {
                "type": "NUMBER",
                "description": "Volatilité annuelle estimée en % (ex: 9 pour 9 %)"
            },
            "projectedValue10y": {
                "type": "NUMBER",
                "description": "Valeur totale du capital après 10 ans (calculée via formule)"
            },
            "qualityScore": {
                "type": "NUMBER",
                "description": "Score de qualité des actifs, de 0 à 100"
            },
            "diversificationHighlights": { "type": "ARRAY", "items": { "type": "STRING" } },
            "recommendedWrappers": { "type": "ARRAY", "items": { "type": "STRING" } },
            "allocation": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING" },
                        "percentage": { "type": "NUMBER" },
                        "reason": { "type": "STRING", "description": "Justification du poids" },
                        "examples": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["category", "percentage"]
                }
            },
            "attainability": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "goalTitle": { "type": "STRING" },
                        "status": {
                            "type": "STRING",
                            "enum": AttainabilityStatus::ALL.iter().map(|s| s.to_string()).collect::<Vec<_>>()
                        },
                        "analysis": {
                            "type": "STRING",
                            "description": "Explication simple de pourquoi l'objectif est ou n'est pas atteignable."
                        }
                    },
                    "required": ["goalTitle", "status"]
                }
            },
            "analysis": {
                "type": "STRING",
                "description": "Thèse d'investissement simplifiée pour le client."
            }
        },
        "required": PORTFOLIO_REQUIRED_FIELDS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_requires_summary_and_portfolios() {
        let schema = analysis_response_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"], json!(["summary", "portfolios"]));
    }

    #[test]
    fn test_portfolio_required_fields_are_declared() {
        let schema = analysis_response_schema();
        let portfolio = &schema["properties"]["portfolios"]["items"];
        for field in PORTFOLIO_REQUIRED_FIELDS {
            assert!(
                portfolio["properties"].get(field).is_some(),
                "{} missing from properties",
                field
            );
        }
    }

    #[test]
    fn test_status_enum_lists_three_verdicts() {
        let schema = analysis_response_schema();
        let status = &schema["properties"]["portfolios"]["items"]["properties"]["attainability"]
            ["items"]["properties"]["status"];
        assert_eq!(status["enum"], json!(["Atteignable", "Partiel", "Difficile"]));
    }
}
