//! Portfolio generation service.
//!
//! Builds the prompt, performs exactly one transport call, cleans and parses
//! the answer. Raw failure causes are logged here; callers only see the
//! [`GenerationError`] kind.

use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

use uportfolio_core::prompt::{ProjectionCheck, DEFAULT_PROJECTION_TOLERANCE};
use uportfolio_core::{
    AnalysisGeneratorTrait, AnalysisPrompt, AnalysisRequest, AnalysisResponse, GenerationError,
    PromptBuilder, PromptOptions,
};

use crate::env::AiEnvironment;
use crate::error::AiError;
use crate::gemini::{CompletionTransport, GeminiTransport};
use crate::providers::GenerationConfig;
use crate::response::parse_analysis_response;

/// Generates the three portfolios through a [`CompletionTransport`].
pub struct PortfolioGenerator<T: CompletionTransport> {
    transport: T,
    builder: PromptBuilder,
    projection_tolerance: f64,
}

impl<E: AiEnvironment> PortfolioGenerator<GeminiTransport<E>> {
    /// Generator backed by the Gemini REST API.
    pub fn gemini(env: Arc<E>, config: GenerationConfig) -> Self {
        Self::new(GeminiTransport::new(env, config))
    }
}

impl<T: CompletionTransport> PortfolioGenerator<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            builder: PromptBuilder::default(),
            projection_tolerance: DEFAULT_PROJECTION_TOLERANCE,
        }
    }

    pub fn with_prompt_options(mut self, options: PromptOptions) -> Self {
        self.builder = PromptBuilder::new(options);
        self
    }

    /// Relative drift above which a returned projection is logged.
    pub fn with_projection_tolerance(mut self, tolerance: f64) -> Self {
        self.projection_tolerance = tolerance;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn run(&self, prompt: &AnalysisPrompt) -> Result<AnalysisResponse, AiError> {
        let raw = self
            .transport
            .complete(prompt)
            .await?
            .filter(|text| !text.trim().is_empty())
            .ok_or(AiError::EmptyResponse)?;

        debug!("Received {} response chars", raw.len());
        parse_analysis_response(&raw)
    }

    fn log_projection_drift(&self, prompt: &AnalysisPrompt, response: &AnalysisResponse) {
        for portfolio in &response.portfolios {
            let check = ProjectionCheck::for_portfolio(portfolio, &prompt.summary);
            if !check.is_consistent(self.projection_tolerance) {
                warn!(
                    "Projection drift for '{}': reported {:.0}, formula {:.0} ({:.1}%)",
                    check.portfolio_name,
                    check.reported,
                    check.expected,
                    check.relative_drift * 100.0
                );
            }
        }
    }
}

#[async_trait]
impl<T: CompletionTransport> AnalysisGeneratorTrait for PortfolioGenerator<T> {
    async fn generate(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResponse, GenerationError> {
        let prompt = self.builder.build(request);

        match self.run(&prompt).await {
            Ok(response) => {
                self.log_projection_drift(&prompt, &response);
                info!(
                    "Generated {} portfolios for risk profile {}",
                    response.portfolios.len(),
                    request.risk.label()
                );
                Ok(response)
            }
            Err(e) => {
                warn!("Portfolio generation failed [{}]: {}", e.code(), e);
                Err(e.into())
            }
        }
    }
}
