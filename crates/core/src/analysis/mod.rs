//! Analysis module - the model's response shape and the generator seam.

mod analysis_model;
mod analysis_traits;
mod fake_generator;

pub use analysis_model::{
    AnalysisResponse, AssetAllocation, AttainabilityStatus, GoalAttainability, Portfolio,
};
pub use analysis_traits::{AnalysisGeneratorTrait, AnalysisRequest};
pub use fake_generator::FakeAnalysisGenerator;
