//! Risk module - risk tiers, banding and the preset cards.

mod risk_model;

pub use risk_model::{
    RiskLabel, RiskPreset, RiskProfile, DYNAMIQUE_MIN_SCORE, PRUDENT_MAX_SCORE, RISK_PRESETS,
};
