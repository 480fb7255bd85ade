//! Deterministic generator for tests and offline demos.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::analysis::{AnalysisGeneratorTrait, AnalysisRequest, AnalysisResponse};
use crate::errors::GenerationError;

/// A fake generator that returns a fixed outcome and counts its calls.
pub struct FakeAnalysisGenerator {
    outcome: Result<AnalysisResponse, GenerationError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<AnalysisRequest>>,
}

impl FakeAnalysisGenerator {
    /// Create a fake generator that always succeeds with `response`.
    pub fn with_response(response: AnalysisResponse) -> Self {
        Self {
            outcome: Ok(response),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a fake generator that always fails with `error`.
    pub fn failing(error: GenerationError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Number of times `generate` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The request received by the most recent call.
    pub fn last_request(&self) -> Option<AnalysisRequest> {
        self.last_request
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl AnalysisGeneratorTrait for FakeAnalysisGenerator {
    async fn generate(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResponse, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }
        self.outcome.clone()
    }
}
