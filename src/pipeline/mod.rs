//! The orchestration core: data model, transcript normalization, and the
//! stage sequencing with per-stage fallback decisions.

mod error;
mod orchestrator;
mod transcript;
mod types;

pub use error::PipelineError;
pub use orchestrator::{PipelineInput, PipelineOrchestrator, RunOptions, SignTranslation};
pub use transcript::{clean_transcription, Transcript};
pub use types::{
    GestureDescriptor, PipelineResult, PoseArtifact, QualityAssessment, SimplificationResult,
};
