//! uPortfolio Core - domain model, prompt builder and wizard state.
//!
//! This crate holds everything deterministic about a portfolio audit: the
//! records collected by the five-step wizard, the derived financial figures,
//! the instruction payload and response schema sent to the model, and the
//! session state machine. It performs no network I/O; the model call sits
//! behind [`analysis::AnalysisGeneratorTrait`], implemented by `uportfolio-ai`.

pub mod analysis;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod patrimony;
pub mod profile;
pub mod prompt;
pub mod risk;
pub mod utils;
pub mod wizard;

// Re-export common types
pub use analysis::{
    AnalysisGeneratorTrait, AnalysisRequest, AnalysisResponse, AssetAllocation,
    AttainabilityStatus, FakeAnalysisGenerator, GoalAttainability, Portfolio,
};
pub use goals::{GoalTemplate, GoalUpdate, LifeGoal, PREDEFINED_GOALS};
pub use patrimony::{AssetCategory, AssetUpdate, CurrentAsset, Debt, DebtCategory, DebtUpdate};
pub use profile::{ClientProfile, ProfileUpdate, TaxBracket};
pub use prompt::{build_prompt, AnalysisPrompt, FinancialSummary, PromptBuilder, PromptOptions};
pub use risk::{RiskLabel, RiskPreset, RiskProfile, RISK_PRESETS};
pub use wizard::{GenerationOutcome, WizardPhase, WizardState, WizardStep};

// Re-export error types
pub use errors::Error;
pub use errors::GenerationError;
pub use errors::Result;
