use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;

/// Decode a service reply leniently.
///
/// Model services frequently wrap their JSON in prose or code fences. The
/// contract, applied uniformly by the completion and translation clients:
///
/// 1. Try a strict parse of the whole body.
/// 2. Extract the first top-level JSON object (first `{` through last `}`,
///    across newlines) and try again.
/// 3. Give up and return `None`; the caller decides whether that means a
///    degraded record or a `MalformedResponse`.
pub fn decode_lenient<T: DeserializeOwned>(raw: &str) -> Option<T> {
    if let Ok(value) = serde_json::from_str::<T>(raw) {
        return Some(value);
    }

    let object = embedded_object(raw)?;
    serde_json::from_str::<T>(object).ok()
}

fn embedded_object(raw: &str) -> Option<&str> {
    static OBJECT_RE: OnceLock<Regex> = OnceLock::new();
    let re = OBJECT_RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));
    re.find(raw).map(|m| m.as_str())
}
