use super::client::ServiceEndpoint;
use super::decode::decode_lenient;
use super::error::ServiceError;
use crate::config::EndpointConfig;
use crate::pipeline::GestureDescriptor;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Backend for the text-to-signs translation service.
#[async_trait::async_trait]
pub trait TranslationBackend: Send + Sync {
    async fn translate(&self, text: &str) -> Result<TranslationReply, ServiceError>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// What the translation service answered.
///
/// Structured mode carries per-word gestures; the legacy mode carries an
/// opaque notation string. A reply whose body could not be decoded at all is
/// synthesized as a single generic gesture with `used_live_service = false`;
/// a parse failure is treated the same as an unreachable service, so the
/// orchestrator will pick the catalog fallback.
#[derive(Debug, Clone)]
pub struct TranslationReply {
    pub signs: Vec<GestureDescriptor>,
    pub notation: Option<String>,
    pub used_live_service: bool,
}

impl TranslationReply {
    /// True when this reply is usable as live output: the service flagged it
    /// live and it actually carries gestures or notation.
    pub fn has_live_output(&self) -> bool {
        self.used_live_service && (!self.signs.is_empty() || self.notation.is_some())
    }
}

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SignsWire {
    signs: Vec<GestureDescriptor>,
    #[serde(default = "default_true")]
    used_live_service: bool,
}

#[derive(Debug, Deserialize)]
struct NotationWire {
    signwriting: String,
}

fn default_true() -> bool {
    true
}

/// HTTP client for the translation service: POST `{"text"}`, structured or
/// legacy reply decoded leniently.
pub struct HttpTranslationClient {
    endpoint: ServiceEndpoint,
}

impl HttpTranslationClient {
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        Ok(Self {
            endpoint: ServiceEndpoint::new(config)?,
        })
    }
}

#[async_trait::async_trait]
impl TranslationBackend for HttpTranslationClient {
    async fn translate(&self, text: &str) -> Result<TranslationReply, ServiceError> {
        let body = self.endpoint.post_json("", &TextRequest { text }).await?;
        Ok(decode_reply(&body, text))
    }

    fn name(&self) -> &str {
        "http-translation"
    }
}

/// Decode a translation response body: structured signs first, then the
/// legacy notation shape, then the degraded single-gesture record.
fn decode_reply(body: &str, input_text: &str) -> TranslationReply {
    if let Some(wire) = decode_lenient::<SignsWire>(body) {
        return TranslationReply {
            signs: wire.signs,
            notation: None,
            used_live_service: wire.used_live_service,
        };
    }

    if let Some(wire) = decode_lenient::<NotationWire>(body) {
        return TranslationReply {
            signs: Vec::new(),
            notation: Some(wire.signwriting),
            used_live_service: true,
        };
    }

    warn!("Translation reply not decodable; synthesizing degraded record");
    TranslationReply {
        signs: vec![GestureDescriptor::generic(input_text)],
        notation: None,
        used_live_service: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_reply_decodes() {
        let body = r#"{"signs":[{"word":"hello","duration":1.5}],"used_live_service":true}"#;
        let reply = decode_reply(body, "hello");
        assert!(reply.has_live_output());
        assert_eq!(reply.signs.len(), 1);
        assert_eq!(reply.signs[0].word, "hello");
        assert_eq!(reply.signs[0].duration_secs, 1.5);
    }

    #[test]
    fn notation_reply_decodes() {
        let body = r#"{"signwriting":"M123x456S12345"}"#;
        let reply = decode_reply(body, "hello");
        assert!(reply.has_live_output());
        assert!(reply.signs.is_empty());
        assert_eq!(reply.notation.as_deref(), Some("M123x456S12345"));
    }

    #[test]
    fn garbage_reply_degrades_to_not_live() {
        let reply = decode_reply("sorry, I cannot help with that", "hello there");
        assert!(!reply.used_live_service);
        assert!(!reply.has_live_output());
        assert_eq!(reply.signs.len(), 1);
        assert_eq!(reply.signs[0].word, "hello there");
    }

    #[test]
    fn empty_sign_list_is_not_live_output() {
        let body = r#"{"signs":[],"used_live_service":true}"#;
        let reply = decode_reply(body, "hello");
        assert!(!reply.has_live_output());
    }

    #[test]
    fn signs_wrapped_in_prose_are_extracted() {
        let body = "Here you go:\n{\"signs\":[{\"word\":\"you\"}]}\nEnjoy!";
        let reply = decode_reply(body, "you");
        assert!(reply.has_live_output());
        assert_eq!(reply.signs[0].word, "you");
        assert_eq!(reply.signs[0].hand_shape, "open");
    }
}
