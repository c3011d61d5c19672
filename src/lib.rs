pub mod catalog;
pub mod config;
pub mod http;
pub mod pipeline;
pub mod services;

pub use catalog::{normalize_tokens, SignCatalog};
pub use config::Config;
pub use http::{create_router, AppState};
pub use pipeline::{
    clean_transcription, GestureDescriptor, PipelineError, PipelineInput, PipelineOrchestrator,
    PipelineResult, PoseArtifact, QualityAssessment, RunOptions, SignTranslation,
    SimplificationResult, Transcript,
};
pub use services::{ServiceError, TranslationReply};
