use super::state::AppState;
use crate::pipeline::{PipelineError, PipelineInput, RunOptions};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct PoseRequest {
    pub text: String,
    pub spoken_language: Option<String>,
    pub signed_language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub text: String,

    /// Disable the simplification stage (default: enabled)
    pub simplify: Option<bool>,

    /// Disable the quality assessment stage (default: enabled)
    pub assess_quality: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map terminal pipeline errors onto HTTP statuses: caller errors are 400,
/// missing configuration is 500, upstream failures are 503.
fn error_response(err: PipelineError) -> axum::response::Response {
    let status = match &err {
        PipelineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        PipelineError::ConfigurationMissing { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        PipelineError::Transcription(_) | PipelineError::PoseGeneration(_) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    error!("Request failed: {}", err);

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /transcribe
/// Transcribe an uploaded audio file (multipart field "audio")
pub async fn transcribe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    // Pull the audio field out of the multipart body
    let mut upload: Option<(Vec<u8>, String)> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("audio") {
                    continue;
                }
                let extension = field
                    .file_name()
                    .and_then(|name| Path::new(name).extension())
                    .and_then(|ext| ext.to_str())
                    .unwrap_or("")
                    .to_string();
                match field.bytes().await {
                    Ok(bytes) => {
                        upload = Some((bytes.to_vec(), extension));
                        break;
                    }
                    Err(e) => {
                        return error_response(PipelineError::InvalidInput(format!(
                            "failed to read audio field: {e}"
                        )))
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return error_response(PipelineError::InvalidInput(format!(
                    "malformed multipart body: {e}"
                )))
            }
        }
    }

    let Some((bytes, extension)) = upload else {
        return error_response(PipelineError::InvalidInput(
            "missing \"audio\" field".to_string(),
        ));
    };

    // Spool the upload to a temp file scoped to this request; it is deleted
    // on every exit path when `spool` drops.
    let spool = match spool_upload(&bytes) {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to spool audio upload: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("failed to store upload: {e}"),
                }),
            )
                .into_response();
        }
    };

    info!("Uploaded audio saved to temporary file: {:?}", spool.path());

    match state
        .orchestrator
        .transcribe_audio(spool.path(), &extension)
        .await
    {
        Ok(transcript) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                text: transcript.text,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

fn spool_upload(bytes: &[u8]) -> std::io::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}

/// POST /simplify_text
/// Simplify spoken-language text; degrades to identity when the completion
/// service is unavailable
pub async fn simplify_text(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> impl IntoResponse {
    if req.text.trim().is_empty() {
        return error_response(PipelineError::InvalidInput("empty text".to_string()));
    }

    let result = state.orchestrator.simplify_text(req.text.trim()).await;
    (StatusCode::OK, Json(result)).into_response()
}

/// POST /translate_signs
/// Translate text into a gesture sequence (live service or catalog fallback)
pub async fn translate_signs(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> impl IntoResponse {
    if req.text.trim().is_empty() {
        return error_response(PipelineError::InvalidInput("empty text".to_string()));
    }

    let translation = state.orchestrator.translate_text(req.text.trim()).await;
    (StatusCode::OK, Json(translation)).into_response()
}

/// POST /generate_pose
/// Render binary pose data for sign text; returned base64-encoded
pub async fn generate_pose(
    State(state): State<AppState>,
    Json(req): Json<PoseRequest>,
) -> impl IntoResponse {
    match state
        .orchestrator
        .render_pose(
            &req.text,
            req.spoken_language.as_deref(),
            req.signed_language.as_deref(),
        )
        .await
    {
        Ok(artifact) => (StatusCode::OK, Json(artifact)).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /pipeline/run
/// Run the full text pipeline and return the aggregated result
pub async fn run_pipeline(
    State(state): State<AppState>,
    Json(req): Json<RunRequest>,
) -> impl IntoResponse {
    let options = RunOptions {
        simplify: req.simplify.unwrap_or(true),
        assess_quality: req.assess_quality.unwrap_or(true),
    };

    match state
        .orchestrator
        .run(PipelineInput::Text(req.text), &options)
        .await
    {
        Ok(result) => {
            info!(
                "Pipeline run {} complete: {} sign(s), {} live call(s)",
                result.id,
                result.signs.len(),
                result.live_service_calls
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
