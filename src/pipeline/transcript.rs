use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Plain transcript text, language-tagged. Immutable once produced; the text
/// is whitespace-normalized and free of timestamp annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub language: String,
}

impl Transcript {
    /// Build a transcript from raw model output, cleaning it per
    /// [`clean_transcription`].
    pub fn from_raw(raw: &str, language: impl Into<String>) -> Self {
        Self {
            text: clean_transcription(raw),
            language: language.into(),
        }
    }
}

/// Strip model-emitted timestamp ranges like
/// `[00:00:00.000 --> 00:00:04.240]` from every line, drop lines that end up
/// empty, and join the survivors with single spaces.
pub fn clean_transcription(raw: &str) -> String {
    static TIMESTAMP_RE: OnceLock<Regex> = OnceLock::new();
    let re = TIMESTAMP_RE.get_or_init(|| {
        Regex::new(r"\[\d{2}:\d{2}:\d{2}\.\d{3} --> \d{2}:\d{2}:\d{2}\.\d{3}\]")
            .expect("valid regex")
    });

    raw.lines()
        .map(|line| {
            let stripped = re.replace_all(line, "");
            stripped.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
