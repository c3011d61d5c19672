use crate::pipeline::PipelineOrchestrator;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The pipeline orchestrator; stateless per request, shared by all
    pub orchestrator: Arc<PipelineOrchestrator>,
}

impl AppState {
    pub fn new(orchestrator: PipelineOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}
