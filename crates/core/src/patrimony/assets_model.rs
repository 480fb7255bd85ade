//! Current asset domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::utils::validate_amount;

/// Asset categories offered by the assets step, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AssetCategory {
    #[default]
    #[serde(rename = "Actions (PEA/CTO)")]
    Equities,
    #[serde(rename = "Immobilier Direct")]
    DirectRealEstate,
    #[serde(rename = "SCPI / Pierre Papier")]
    RealEstateFunds,
    #[serde(rename = "Private Equity")]
    PrivateEquity,
    #[serde(rename = "Obligations / Fonds Euros")]
    Bonds,
    #[serde(rename = "Livrets / Cash")]
    Cash,
    #[serde(rename = "Crypto-actifs / Or")]
    CryptoAndGold,
    #[serde(rename = "Autre")]
    Other,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 8] = [
        AssetCategory::Equities,
        AssetCategory::DirectRealEstate,
        AssetCategory::RealEstateFunds,
        AssetCategory::PrivateEquity,
        AssetCategory::Bonds,
        AssetCategory::Cash,
        AssetCategory::CryptoAndGold,
        AssetCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssetCategory::Equities => "Actions (PEA/CTO)",
            AssetCategory::DirectRealEstate => "Immobilier Direct",
            AssetCategory::RealEstateFunds => "SCPI / Pierre Papier",
            AssetCategory::PrivateEquity => "Private Equity",
            AssetCategory::Bonds => "Obligations / Fonds Euros",
            AssetCategory::Cash => "Livrets / Cash",
            AssetCategory::CryptoAndGold => "Crypto-actifs / Or",
            AssetCategory::Other => "Autre",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Domain model representing an asset the household already holds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAsset {
    pub id: String,
    #[serde(rename = "type")]
    pub category: AssetCategory,
    pub value: f64,
    pub description: String,
}

impl CurrentAsset {
    /// Blank asset with a fresh id and the first category.
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            category: AssetCategory::default(),
            value: 0.0,
            description: String::new(),
        }
    }

    pub fn apply(&mut self, update: AssetUpdate) -> Result<(), ValidationError> {
        match update {
            AssetUpdate::Category(category) => self.category = category,
            AssetUpdate::Value(amount) => self.value = validate_amount("value", amount)?,
            AssetUpdate::Description(description) => self.description = description,
        }
        Ok(())
    }
}

impl Default for CurrentAsset {
    fn default() -> Self {
        Self::new()
    }
}

/// A single edit of an asset card.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetUpdate {
    Category(AssetCategory),
    Value(f64),
    Description(String),
}
