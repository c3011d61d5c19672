use super::client::ServiceEndpoint;
use super::error::ServiceError;
use crate::config::EndpointConfig;
use anyhow::Result;
use serde::Deserialize;

/// Backend for the speech-to-text service.
#[async_trait::async_trait]
pub trait TranscriptionBackend: Send + Sync {
    /// Transcribe one utterance. Returns the raw transcript text as emitted
    /// by the model; timestamp cleanup happens in the pipeline stage.
    async fn transcribe(&self, audio: &[u8], extension: &str) -> Result<String, ServiceError>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

#[derive(Debug, Deserialize)]
struct TranscriptionReply {
    text: String,
}

/// HTTP client for the transcription service: multipart audio upload,
/// `{"text": string}` reply.
pub struct HttpTranscriptionClient {
    endpoint: ServiceEndpoint,
}

impl HttpTranscriptionClient {
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        Ok(Self {
            endpoint: ServiceEndpoint::new(config)?,
        })
    }
}

#[async_trait::async_trait]
impl TranscriptionBackend for HttpTranscriptionClient {
    async fn transcribe(&self, audio: &[u8], extension: &str) -> Result<String, ServiceError> {
        let part = reqwest::multipart::Part::bytes(audio.to_vec())
            .file_name(format!("audio{}", normalize_extension(extension)))
            .mime_str(mime_for_extension(extension))
            .map_err(|e| ServiceError::Unreachable(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let body = self.endpoint.post_multipart("", form).await?;

        let reply: TranscriptionReply = serde_json::from_str(&body).map_err(|_| {
            ServiceError::MalformedResponse("transcription reply is missing \"text\"".to_string())
        })?;

        Ok(reply.text)
    }

    fn name(&self) -> &str {
        "http-transcription"
    }
}

fn normalize_extension(extension: &str) -> String {
    let ext = extension.trim().trim_start_matches('.').to_lowercase();
    if ext.is_empty() {
        String::new()
    } else {
        format!(".{ext}")
    }
}

/// The filename extension is used only as a decode hint for the service.
fn mime_for_extension(extension: &str) -> &'static str {
    match extension.trim().trim_start_matches('.').to_lowercase().as_str() {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "webm" => "audio/webm",
        _ => "application/octet-stream",
    }
}
