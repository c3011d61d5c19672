use super::error::ServiceError;
use crate::config::EndpointConfig;
use anyhow::{Context, Result};
use serde::Serialize;

/// Transport plumbing shared by all service clients.
///
/// Owns one `reqwest` client configured with the per-service timeout and
/// optional bearer credential, and maps every transport outcome onto the
/// uniform [`ServiceError`] contract. No retries, no caching.
#[derive(Debug, Clone)]
pub struct ServiceEndpoint {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl ServiceEndpoint {
    /// Build an endpoint from configuration. Fails when the URL is empty or
    /// the HTTP client cannot be constructed; callers validate this at
    /// pipeline construction, not at first use.
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        if !config.is_configured() {
            anyhow::bail!("service URL is not configured");
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => req.bearer_auth(key),
            None => req,
        }
    }

    /// POST a JSON body, returning the raw response text of a 2xx reply.
    pub async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ServiceError> {
        let req = self.authorize(self.client.post(self.url(path))).json(body);
        let res = req.send().await.map_err(ServiceError::from_transport)?;
        Self::read_text(res).await
    }

    /// POST a multipart form, returning the raw response text of a 2xx reply.
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<String, ServiceError> {
        let req = self
            .authorize(self.client.post(self.url(path)))
            .multipart(form);
        let res = req.send().await.map_err(ServiceError::from_transport)?;
        Self::read_text(res).await
    }

    /// GET with query parameters, returning the raw response bytes of a 2xx
    /// reply. Used for the binary pose payload.
    pub async fn get_bytes(&self, query: &[(&str, &str)]) -> Result<Vec<u8>, ServiceError> {
        let req = self.authorize(self.client.get(self.url(""))).query(query);
        let res = req.send().await.map_err(ServiceError::from_transport)?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ServiceError::RemoteRejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = res.bytes().await.map_err(ServiceError::from_transport)?;
        Ok(bytes.to_vec())
    }

    async fn read_text(res: reqwest::Response) -> Result<String, ServiceError> {
        let status = res.status();
        let body = res.text().await.map_err(ServiceError::from_transport)?;

        if !status.is_success() {
            return Err(ServiceError::RemoteRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
