use super::error::PipelineError;
use super::transcript::Transcript;
use super::types::{
    clamp_score, GestureDescriptor, PipelineResult, PoseArtifact, QualityAssessment,
    SimplificationResult,
};
use crate::catalog::SignCatalog;
use crate::config::{Config, LanguageConfig};
use crate::services::{
    CompletionBackend, HttpCompletionClient, HttpPoseClient, HttpTranscriptionClient,
    HttpTranslationClient, PoseBackend, TranscriptionBackend, TranslationBackend,
};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Input to one end-to-end run: an uploaded utterance spooled to a scoped
/// temp file, or spoken-language text directly.
#[derive(Debug, Clone)]
pub enum PipelineInput {
    /// Audio file plus the filename extension used as a decode hint. The
    /// caller owns the file's lifetime; handlers keep it in a temp file that
    /// is deleted on every exit path.
    Audio { path: PathBuf, extension: String },
    Text(String),
}

/// Per-run stage toggles. A stage is skipped only when explicitly disabled.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub simplify: bool,
    pub assess_quality: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            simplify: true,
            assess_quality: true,
        }
    }
}

/// The sign output chosen by the translation stage, with provenance.
#[derive(Debug, Clone, Serialize)]
pub struct SignTranslation {
    pub signs: Vec<GestureDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notation: Option<String>,
    pub used_live_service: bool,
}

/// A backend that may be unconfigured. The reason is captured at
/// construction time and reported as the stage's failure reason.
enum Slot<T: ?Sized> {
    Ready(Arc<T>),
    Missing(String),
}

impl<T: ?Sized> Slot<T> {
    fn ready(&self) -> Result<&Arc<T>, &str> {
        match self {
            Slot::Ready(backend) => Ok(backend),
            Slot::Missing(reason) => Err(reason),
        }
    }
}

/// Composes the stages into one strictly sequential pipeline and decides,
/// per stage, whether to use the live service or its fallback.
///
/// All configuration is validated here, at construction. Dropping the future
/// returned by [`run`](Self::run) cancels any in-flight service call; nothing
/// partial is ever returned.
pub struct PipelineOrchestrator {
    languages: LanguageConfig,
    catalog: Arc<SignCatalog>,
    transcription: Slot<dyn TranscriptionBackend>,
    completion: Slot<dyn CompletionBackend>,
    translation: Slot<dyn TranslationBackend>,
    pose: Slot<dyn PoseBackend>,
}

impl PipelineOrchestrator {
    /// Create an orchestrator with no live backends; every optional stage
    /// degrades to its fallback. Backends are attached with the `with_*`
    /// builders.
    pub fn new(languages: LanguageConfig, catalog: SignCatalog) -> Self {
        Self {
            languages,
            catalog: Arc::new(catalog),
            transcription: Slot::Missing("service not configured".to_string()),
            completion: Slot::Missing("service not configured".to_string()),
            translation: Slot::Missing("service not configured".to_string()),
            pose: Slot::Missing("service not configured".to_string()),
        }
    }

    /// Build the orchestrator and all HTTP clients from configuration.
    /// Endpoint and credential validation happens here, not at first use.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = SignCatalog::builtin().context("Failed to build sign catalog")?;
        let mut orchestrator = Self::new(config.languages.clone(), catalog);

        let upstream = &config.upstream;

        if upstream.transcription.is_configured() {
            let client = HttpTranscriptionClient::new(&upstream.transcription)
                .context("Failed to build transcription client")?;
            orchestrator.transcription = Slot::Ready(Arc::new(client));
        } else {
            orchestrator.transcription = Slot::Missing("transcription URL not set".to_string());
        }

        // The completion service requires a credential; detect its absence
        // here so the simplification and quality stages degrade without a
        // network call.
        if !upstream.completion.is_configured() {
            orchestrator.completion = Slot::Missing("completion URL not set".to_string());
        } else if !upstream.completion.has_credential() {
            orchestrator.completion = Slot::Missing("completion API key not set".to_string());
        } else {
            let client = HttpCompletionClient::new(&upstream.completion)
                .context("Failed to build completion client")?;
            orchestrator.completion = Slot::Ready(Arc::new(client));
        }

        if upstream.translation.is_configured() {
            let client = HttpTranslationClient::new(&upstream.translation)
                .context("Failed to build translation client")?;
            orchestrator.translation = Slot::Ready(Arc::new(client));
        } else {
            orchestrator.translation = Slot::Missing("translation URL not set".to_string());
        }

        if upstream.pose.is_configured() {
            let client = HttpPoseClient::new(&upstream.pose)
                .context("Failed to build pose client")?;
            orchestrator.pose = Slot::Ready(Arc::new(client));
        } else {
            orchestrator.pose = Slot::Missing("pose URL not set".to_string());
        }

        Ok(orchestrator)
    }

    pub fn with_transcription(mut self, backend: Arc<dyn TranscriptionBackend>) -> Self {
        self.transcription = Slot::Ready(backend);
        self
    }

    pub fn with_completion(mut self, backend: Arc<dyn CompletionBackend>) -> Self {
        self.completion = Slot::Ready(backend);
        self
    }

    pub fn with_translation(mut self, backend: Arc<dyn TranslationBackend>) -> Self {
        self.translation = Slot::Ready(backend);
        self
    }

    pub fn with_pose(mut self, backend: Arc<dyn PoseBackend>) -> Self {
        self.pose = Slot::Ready(backend);
        self
    }

    /// Run the pipeline end to end.
    ///
    /// Stages execute strictly sequentially: transcription (when audio is
    /// supplied), simplification, translation, quality assessment. Mandatory
    /// stages surface terminal errors; optional stages degrade and annotate
    /// provenance. `live_service_calls` counts only stages whose live result
    /// was actually used.
    pub async fn run(
        &self,
        input: PipelineInput,
        options: &RunOptions,
    ) -> Result<PipelineResult, PipelineError> {
        let mut live_calls = 0u32;

        let (text, transcript) = match input {
            PipelineInput::Audio { path, extension } => {
                let transcript = self.transcribe_audio(&path, &extension).await?;
                (transcript.text.clone(), Some(transcript))
            }
            PipelineInput::Text(text) => {
                let text = text.trim().to_string();
                if text.is_empty() {
                    return Err(PipelineError::InvalidInput("empty text input".to_string()));
                }
                (text, None)
            }
        };

        let simplification = if options.simplify {
            self.simplify_text(&text).await
        } else {
            SimplificationResult::degraded(text.clone(), None)
        };
        if simplification.used_live_service {
            live_calls += 1;
        }

        let translation = self.translate_text(&simplification.simplified_text).await;
        if translation.used_live_service {
            live_calls += 1;
        }

        let quality = if options.assess_quality {
            let serialized = match &translation.notation {
                Some(notation) => notation.clone(),
                None => serde_json::to_string(&translation.signs).unwrap_or_default(),
            };
            self.assess_quality(&simplification.simplified_text, &serialized)
                .await
        } else {
            QualityAssessment::neutral()
        };
        if quality.used_live_service {
            live_calls += 1;
        }

        Ok(PipelineResult {
            id: uuid::Uuid::new_v4(),
            transcript,
            simplification,
            signs: translation.signs,
            notation: translation.notation,
            translation_used_live: translation.used_live_service,
            quality,
            live_service_calls: live_calls,
            success: true,
            timestamp: Utc::now(),
        })
    }

    /// Transcription stage. Mandatory when audio is supplied; there is no
    /// local fallback, so any service failure is terminal.
    pub async fn transcribe_audio(
        &self,
        path: &Path,
        extension: &str,
    ) -> Result<Transcript, PipelineError> {
        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            PipelineError::InvalidInput(format!("cannot read uploaded audio: {e}"))
        })?;
        if metadata.len() == 0 {
            // Fail fast: no network call for empty payloads.
            return Err(PipelineError::InvalidInput(
                "empty audio file uploaded".to_string(),
            ));
        }

        let backend = self.transcription.ready().map_err(|reason| {
            PipelineError::ConfigurationMissing {
                service: "transcription",
                detail: reason.to_string(),
            }
        })?;

        let audio = tokio::fs::read(path).await.map_err(|e| {
            PipelineError::InvalidInput(format!("cannot read uploaded audio: {e}"))
        })?;

        info!("Transcribing {} byte upload via {}", audio.len(), backend.name());

        let raw = backend
            .transcribe(&audio, extension)
            .await
            .map_err(PipelineError::Transcription)?;

        Ok(Transcript::from_raw(&raw, self.languages.spoken.clone()))
    }

    /// Simplification stage. Never aborts the pipeline: any failure,
    /// including missing configuration, degrades to the identity result
    /// with the captured reason.
    pub async fn simplify_text(&self, text: &str) -> SimplificationResult {
        let backend = match self.completion.ready() {
            Ok(backend) => backend,
            Err(reason) => {
                return SimplificationResult::degraded(text.to_string(), Some(reason.to_string()))
            }
        };

        match backend.simplify(text).await {
            Ok(reply) => {
                let simplified = reply.simplified_text.trim().to_string();
                if simplified.is_empty() {
                    // Degrade to identity, never to empty.
                    return SimplificationResult::degraded(
                        text.to_string(),
                        Some("service returned empty text".to_string()),
                    );
                }
                let confidence = reply.confidence.map(clamp_score).unwrap_or(7);
                SimplificationResult::live(text.to_string(), simplified, confidence)
            }
            Err(e) => {
                warn!("Simplification failed, keeping original text: {e}");
                SimplificationResult::degraded(text.to_string(), Some(e.to_string()))
            }
        }
    }

    /// Translation stage: live strategy first, catalog fallback otherwise.
    ///
    /// The live output is used only when the call succeeded and actually
    /// carried gestures or notation flagged as live; in every other case
    /// (unreachable service, rejection, undecodable body, empty sign list)
    /// the catalog fallback runs unconditionally.
    pub async fn translate_text(&self, text: &str) -> SignTranslation {
        if let Ok(backend) = self.translation.ready() {
            match backend.translate(text).await {
                Ok(reply) if reply.has_live_output() => {
                    info!(
                        "Live translation produced {} sign(s) via {}",
                        reply.signs.len(),
                        backend.name()
                    );
                    return SignTranslation {
                        signs: reply.signs,
                        notation: reply.notation,
                        used_live_service: true,
                    };
                }
                Ok(_) => {
                    info!("Live translation reply unusable; using catalog fallback");
                }
                Err(e) => {
                    warn!("Translation service failed: {e}; using catalog fallback");
                }
            }
        }

        SignTranslation {
            signs: self.catalog.translate(text),
            notation: None,
            used_live_service: false,
        }
    }

    /// Quality assessment stage. Purely observational: failure synthesizes a
    /// neutral assessment and never changes upstream data.
    pub async fn assess_quality(&self, text: &str, signs: &str) -> QualityAssessment {
        let backend = match self.completion.ready() {
            Ok(backend) => backend,
            Err(_) => return QualityAssessment::neutral(),
        };

        match backend.assess(text, signs).await {
            Ok(reply) => QualityAssessment {
                accuracy: clamp_score(reply.accuracy_score),
                completeness: clamp_score(reply.completeness_score),
                appropriateness: clamp_score(reply.appropriateness_score),
                overall: clamp_score(reply.overall_score),
                feedback: reply.feedback,
                used_live_service: true,
            },
            Err(e) => {
                warn!("Quality assessment failed, using neutral scores: {e}");
                QualityAssessment::neutral()
            }
        }
    }

    /// Pose rendering: an independent entry point, not part of [`run`].
    /// Language overrides default to the configured spoken/signed pair. The
    /// returned bytes are opaque and re-exposed base64-encoded.
    pub async fn render_pose(
        &self,
        text: &str,
        spoken: Option<&str>,
        signed: Option<&str>,
    ) -> Result<PoseArtifact, PipelineError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PipelineError::InvalidInput("empty sign text".to_string()));
        }

        let backend =
            self.pose
                .ready()
                .map_err(|reason| PipelineError::ConfigurationMissing {
                    service: "pose",
                    detail: reason.to_string(),
                })?;

        let bytes = backend
            .generate(
                text,
                spoken.unwrap_or(&self.languages.spoken),
                signed.unwrap_or(&self.languages.signed),
            )
            .await
            .map_err(PipelineError::PoseGeneration)?;

        info!("Pose service returned {} bytes", bytes.len());

        Ok(PoseArtifact::from_bytes(&bytes))
    }
}
