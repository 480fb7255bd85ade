//! Response cleanup and parsing.
//!
//! Models sometimes wrap JSON in markdown fences even when asked for raw
//! JSON. The text is unfenced, then parsed against the response shape.

use log::{debug, error};
use uportfolio_core::constants::PORTFOLIO_COUNT;
use uportfolio_core::AnalysisResponse;

use crate::error::AiError;

/// Remove every ```` ```json ```` and ```` ``` ```` marker and trim.
///
/// Idempotent: cleaning already clean text returns it unchanged.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Clean `raw` and parse it into an [`AnalysisResponse`].
///
/// Only the shape is checked: the JSON must decode and hold exactly
/// three portfolios.
pub fn parse_analysis_response(raw: &str) -> Result<AnalysisResponse, AiError> {
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(AiError::EmptyResponse);
    }

    let response: AnalysisResponse = serde_json::from_str(&cleaned).map_err(|e| {
        error!("Failed to parse analysis response: {}", e);
        debug!("Unparseable response text: {}", cleaned);
        AiError::malformed(e.to_string())
    })?;

    if response.portfolios.len() != PORTFOLIO_COUNT {
        error!(
            "Analysis response has {} portfolios, expected {}",
            response.portfolios.len(),
            PORTFOLIO_COUNT
        );
        return Err(AiError::malformed(format!(
            "expected {} portfolios, got {}",
            PORTFOLIO_COUNT,
            response.portfolios.len()
        )));
    }

    Ok(response)
}
