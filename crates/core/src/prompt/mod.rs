//! Prompt module - derived figures, projection formula, payload and schema.

mod projection;
mod prompt_builder;
pub mod schema;
mod summary;

pub use projection::{projected_value_10y, ProjectionCheck, DEFAULT_PROJECTION_TOLERANCE};
pub use prompt_builder::{build_prompt, AnalysisPrompt, PromptBuilder, PromptOptions, TierBand};
pub use schema::analysis_response_schema;
pub use summary::FinancialSummary;
