use super::client::ServiceEndpoint;
use super::decode::decode_lenient;
use super::error::ServiceError;
use crate::config::EndpointConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Backend for the LLM completion service, which backs both optional text
/// stages: simplification and quality assessment.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Produce a single-sentence, bullet-free paraphrase of `text`.
    async fn simplify(&self, text: &str) -> Result<SimplifyReply, ServiceError>;

    /// Score a sign translation against the text it came from.
    async fn assess(&self, text: &str, signs: &str) -> Result<AssessmentReply, ServiceError>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimplifyReply {
    pub simplified_text: String,

    /// Optional self-reported confidence; absent when the body had to be
    /// taken verbatim.
    #[serde(default)]
    pub confidence: Option<i64>,
}

/// Raw wire scores; the pipeline clamps them into 1..=10.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentReply {
    pub accuracy_score: i64,
    pub completeness_score: i64,
    pub appropriateness_score: i64,
    pub overall_score: i64,
    #[serde(default)]
    pub feedback: String,
}

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct AssessRequest<'a> {
    text: &'a str,
    signs: &'a str,
}

/// HTTP client for the completion service. Two operations on one endpoint:
/// `POST {base}/simplify_text` and `POST {base}/assess_quality`.
pub struct HttpCompletionClient {
    endpoint: ServiceEndpoint,
}

impl HttpCompletionClient {
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        Ok(Self {
            endpoint: ServiceEndpoint::new(config)?,
        })
    }
}

#[async_trait::async_trait]
impl CompletionBackend for HttpCompletionClient {
    async fn simplify(&self, text: &str) -> Result<SimplifyReply, ServiceError> {
        let body = self
            .endpoint
            .post_json("simplify_text", &TextRequest { text })
            .await?;

        // Structured extraction first; otherwise the whole body is the
        // simplified text.
        Ok(decode_lenient::<SimplifyReply>(&body).unwrap_or(SimplifyReply {
            simplified_text: body.trim().to_string(),
            confidence: None,
        }))
    }

    async fn assess(&self, text: &str, signs: &str) -> Result<AssessmentReply, ServiceError> {
        let body = self
            .endpoint
            .post_json("assess_quality", &AssessRequest { text, signs })
            .await?;

        decode_lenient::<AssessmentReply>(&body).ok_or_else(|| {
            ServiceError::MalformedResponse("assessment reply is missing scores".to_string())
        })
    }

    fn name(&self) -> &str {
        "http-completion"
    }
}
