use super::client::ServiceEndpoint;
use super::error::ServiceError;
use crate::config::EndpointConfig;
use anyhow::Result;

/// Backend for the pose-generation renderer.
#[async_trait::async_trait]
pub trait PoseBackend: Send + Sync {
    /// Render pose data for the given sign text. The returned bytes are an
    /// opaque payload. No interpretation happens anywhere in this service.
    async fn generate(
        &self,
        text: &str,
        spoken: &str,
        signed: &str,
    ) -> Result<Vec<u8>, ServiceError>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// HTTP client for the pose service: GET with `text`/`spoken`/`signed` query
/// parameters, raw binary reply.
pub struct HttpPoseClient {
    endpoint: ServiceEndpoint,
}

impl HttpPoseClient {
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        Ok(Self {
            endpoint: ServiceEndpoint::new(config)?,
        })
    }
}

#[async_trait::async_trait]
impl PoseBackend for HttpPoseClient {
    async fn generate(
        &self,
        text: &str,
        spoken: &str,
        signed: &str,
    ) -> Result<Vec<u8>, ServiceError> {
        self.endpoint
            .get_bytes(&[("text", text), ("spoken", spoken), ("signed", signed)])
            .await
    }

    fn name(&self) -> &str {
        "http-pose"
    }
}
