use crate::services::ServiceError;
use thiserror::Error;

/// Terminal pipeline failures; the only errors a caller ever sees.
///
/// Optional stages (simplification, translation, quality assessment) never
/// surface here: they degrade to identity/fallback/neutral and annotate
/// provenance instead. Only caller errors, missing configuration, and
/// failures of the mandatory stages without a fallback (transcription, pose
/// rendering) terminate a request.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Caller error, surfaced immediately without any service call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A required endpoint or credential is absent for a stage with no
    /// fallback.
    #[error("{service} service is not configured: {detail}")]
    ConfigurationMissing {
        service: &'static str,
        detail: String,
    },

    /// The transcription service failed; there is no local fallback.
    #[error("transcription failed: {0}")]
    Transcription(#[source] ServiceError),

    /// The pose renderer failed; there is no local fallback.
    #[error("pose generation failed: {0}")]
    PoseGeneration(#[source] ServiceError),
}
