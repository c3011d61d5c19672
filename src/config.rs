use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub languages: LanguageConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Spoken/signed language pair forwarded to the translation and pose services.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    pub spoken: String,
    pub signed: String,
}

/// Endpoints and credentials for the four external model services.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub transcription: EndpointConfig,
    pub completion: EndpointConfig,
    pub translation: EndpointConfig,
    pub pose: EndpointConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    /// Base URL of the service. Empty means not configured.
    pub url: String,

    /// Bearer credential, if the service requires one.
    pub api_key: Option<String>,

    /// Request timeout in seconds. A timed-out call is treated as unreachable.
    pub timeout_secs: u64,
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Credential present and non-empty.
    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Config {
    /// Load configuration: built-in defaults, then an optional TOML file, then
    /// SIGNBRIDGE_* environment variables
    /// (e.g. SIGNBRIDGE_UPSTREAM__COMPLETION__API_KEY).
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "signbridge")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 8000)?
            .set_default("languages.spoken", "en")?
            .set_default("languages.signed", "ase")?
            .set_default("upstream.transcription.url", "")?
            .set_default("upstream.transcription.timeout_secs", 60)?
            .set_default("upstream.completion.url", "")?
            .set_default("upstream.completion.timeout_secs", 30)?
            .set_default("upstream.translation.url", "")?
            .set_default("upstream.translation.timeout_secs", 30)?
            .set_default("upstream.pose.url", "")?
            .set_default("upstream.pose.timeout_secs", 30)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("SIGNBRIDGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
