//! uPortfolio AI - portfolio generation over the Gemini API.
//!
//! This crate implements [`uportfolio_core::AnalysisGeneratorTrait`]: it turns
//! an `AnalysisRequest` into a prompt, calls the model once and parses the
//! three proposed portfolios.
//!
//! # Architecture
//!
//! - `env`: Environment abstraction for secrets
//! - `providers`: Embedded provider catalog and `GenerationConfig`
//! - `gemini`: `CompletionTransport` trait and the rig-core Gemini transport
//! - `response`: Code-fence cleanup and response parsing
//! - `generator`: `PortfolioGenerator`, the end-to-end pipeline
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use uportfolio_ai::{GenerationConfig, PortfolioGenerator, ProcessEnvironment};
//! use uportfolio_core::WizardState;
//!
//! let generator = PortfolioGenerator::gemini(
//!     Arc::new(ProcessEnvironment),
//!     GenerationConfig::default(),
//! );
//!
//! let mut wizard = WizardState::new();
//! // ... fill in the five steps ...
//! let outcome = wizard.generate(&generator).await?;
//! ```

pub mod env;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod providers;
pub mod response;

// Re-export main types for convenience
pub use env::{AiEnvironment, ProcessEnvironment};
pub use error::AiError;
pub use gemini::{CompletionTransport, GeminiTransport};
pub use generator::PortfolioGenerator;
pub use providers::{default_provider, get_provider, GenerationConfig, ProviderInfo};
pub use response::{parse_analysis_response, strip_code_fences};
