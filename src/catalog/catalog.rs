use super::entries;
use crate::pipeline::GestureDescriptor;
use std::collections::HashMap;
use thiserror::Error;

/// Connector words ASL does not sign; normalization drops them before
/// lookup.
pub const CONNECTOR_WORDS: &[&str] = &["a", "an", "the", "to"];

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The same word was defined twice in the entry list. Which definition
    /// should win is ambiguous, so the build refuses instead of silently
    /// overwriting.
    #[error("duplicate catalog entry for \"{0}\"")]
    DuplicateWord(String),
}

/// Static word → gesture mapping.
pub struct SignCatalog {
    signs: HashMap<String, GestureDescriptor>,
}

impl SignCatalog {
    /// Build the catalog shipped with the service.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::build(entries::builtin())
    }

    /// Build a catalog from explicit entries, rejecting duplicate words.
    pub fn build(
        entries: impl IntoIterator<Item = GestureDescriptor>,
    ) -> Result<Self, CatalogError> {
        let mut signs = HashMap::new();

        for entry in entries {
            let key = entry.word.to_lowercase();
            if signs.contains_key(&key) {
                return Err(CatalogError::DuplicateWord(key));
            }
            signs.insert(key, entry);
        }

        Ok(Self { signs })
    }

    /// Case-insensitive exact-match lookup.
    pub fn lookup(&self, word: &str) -> Option<&GestureDescriptor> {
        self.signs.get(&word.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.signs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }

    /// Fallback translation: one gesture per normalized content token, in
    /// source order. Unknown words receive the generic descriptor; this
    /// path never rejects a word and never fails.
    pub fn translate(&self, text: &str) -> Vec<GestureDescriptor> {
        normalize_tokens(text)
            .iter()
            .map(|token| {
                self.lookup(token)
                    .cloned()
                    .unwrap_or_else(|| GestureDescriptor::generic(token))
            })
            .collect()
    }
}

/// Lowercase, split on whitespace, strip non-alphanumeric characters from
/// each token, discard tokens that end up empty, and drop connector words.
pub fn normalize_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|token| token.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|token| !token.is_empty())
        .filter(|token| !CONNECTOR_WORDS.contains(&token.as_str()))
        .collect()
}
