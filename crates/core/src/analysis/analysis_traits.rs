use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResponse;
use crate::errors::GenerationError;
use crate::goals::LifeGoal;
use crate::patrimony::{CurrentAsset, Debt};
use crate::profile::ClientProfile;
use crate::risk::RiskProfile;

/// Everything the wizard collected, frozen at the moment generation starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub profile: ClientProfile,
    pub goals: Vec<LifeGoal>,
    pub assets: Vec<CurrentAsset>,
    pub debts: Vec<Debt>,
    pub risk: RiskProfile,
    /// Free-text constraints typed by the client (ESG preference, inheritance...).
    #[serde(default)]
    pub additional_context: String,
}

/// Trait for producing an analysis from a collected profile.
///
/// One call is one round trip to the model: no retry, no caching. Identical
/// requests may yield different answers.
#[async_trait]
pub trait AnalysisGeneratorTrait: Send + Sync {
    async fn generate(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResponse, GenerationError>;
}
