use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::transcript::Transcript;

/// One sign: structured description of hand shape, orientation, location,
/// movement and timing. Immutable value type; this is also the wire shape the
/// translation service returns per word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureDescriptor {
    /// The content word this gesture signs
    pub word: String,

    /// Human-readable description of how the sign is performed
    #[serde(default)]
    pub description: String,

    /// Hand configuration (fist, open, point, flat-o, f-hand, ...)
    #[serde(default = "default_hand_shape")]
    pub hand_shape: String,

    /// Palm direction (forward, up, down, side, ...)
    #[serde(default = "default_palm_orientation")]
    pub palm_orientation: String,

    /// Where the sign is made (chest, face, space, mouth, cheek, ...)
    #[serde(default = "default_location")]
    pub location: String,

    /// Type of movement (tap, wave, circle, point, pull, twist, ...)
    #[serde(default = "default_movement")]
    pub movement: String,

    /// Duration in seconds, always a positive number. Services sometimes emit
    /// this as a string; anything unparsable becomes 1.0.
    #[serde(
        rename = "duration",
        default = "default_duration",
        deserialize_with = "coerce_duration"
    )]
    pub duration_secs: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_notes: Option<String>,
}

impl GestureDescriptor {
    /// The generic descriptor used for words without a specific sign. The
    /// fallback path never rejects a word.
    pub fn generic(word: &str) -> Self {
        Self {
            word: word.to_string(),
            description: format!("General gesture for {word}"),
            hand_shape: default_hand_shape(),
            palm_orientation: default_palm_orientation(),
            location: default_location(),
            movement: default_movement(),
            duration_secs: default_duration(),
            cultural_notes: None,
        }
    }
}

fn default_hand_shape() -> String {
    "open".to_string()
}

fn default_palm_orientation() -> String {
    "forward".to_string()
}

fn default_location() -> String {
    "space".to_string()
}

fn default_movement() -> String {
    "wave".to_string()
}

fn default_duration() -> f64 {
    1.0
}

/// Accept a number or a numeric string; everything else collapses to 1.0.
fn coerce_duration<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_duration_value(&value))
}

pub(crate) fn coerce_duration_value(value: &serde_json::Value) -> f64 {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(d) if d.is_finite() && d > 0.0 => d,
        _ => 1.0,
    }
}

/// Outcome of the simplification stage. `simplified_text` is always
/// populated: it equals `original_text` whenever the stage failed or was
/// skipped; the stage degrades to identity, never to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplificationResult {
    pub original_text: String,
    pub simplified_text: String,

    /// Self-reported confidence, 1..=10
    pub confidence: u8,

    pub used_live_service: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl SimplificationResult {
    pub fn live(original_text: String, simplified_text: String, confidence: u8) -> Self {
        Self {
            original_text,
            simplified_text,
            confidence: confidence.clamp(1, 10),
            used_live_service: true,
            failure_reason: None,
        }
    }

    /// Identity result carrying the captured failure (or skip) reason.
    pub fn degraded(original_text: String, reason: Option<String>) -> Self {
        Self {
            simplified_text: original_text.clone(),
            original_text,
            confidence: 1,
            used_live_service: false,
            failure_reason: reason,
        }
    }
}

/// Four integer subscores plus free-text feedback from the quality assessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityAssessment {
    pub accuracy: u8,
    pub completeness: u8,
    pub appropriateness: u8,
    pub overall: u8,
    pub feedback: String,
    pub used_live_service: bool,
}

impl QualityAssessment {
    /// Neutral assessment used when the assessor is unavailable.
    pub fn neutral() -> Self {
        Self {
            accuracy: 5,
            completeness: 5,
            appropriateness: 5,
            overall: 5,
            feedback: "Assessment unavailable".to_string(),
            used_live_service: false,
        }
    }
}

/// Clamp a raw service score into the 1..=10 band.
pub(crate) fn clamp_score(raw: i64) -> u8 {
    raw.clamp(1, 10) as u8
}

/// Base64-wrapped binary pose payload. The bytes are opaque end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseArtifact {
    pub pose_data: String,
    pub data_format: String,
}

impl PoseArtifact {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        use base64::Engine;
        Self {
            pose_data: base64::engine::general_purpose::STANDARD.encode(bytes),
            data_format: "binary_base64".to_string(),
        }
    }
}

/// Aggregated outcome of one end-to-end pipeline run. Created once per
/// request and never mutated after the terminal stage completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Request ID
    pub id: uuid::Uuid,

    /// Present when the run started from audio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<Transcript>,

    pub simplification: SimplificationResult,

    /// One gesture per content word, source order. Empty when the live
    /// service answered with raw notation instead.
    pub signs: Vec<GestureDescriptor>,

    /// Raw notation string from the legacy translation mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notation: Option<String>,

    /// Provenance of the sign output: live translation service vs. catalog
    pub translation_used_live: bool,

    pub quality: QualityAssessment,

    /// Number of stages whose live result was actually used
    pub live_service_calls: u32,

    /// True iff every mandatory stage completed
    pub success: bool,

    pub timestamp: DateTime<Utc>,
}
