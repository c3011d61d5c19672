//! Deterministic fallback sign catalog.
//!
//! When the live translation service is unavailable or its output unusable,
//! the pipeline translates word-by-word against this catalog. It is built
//! once at startup, validated (duplicate words are a build-time error), and
//! read-only afterwards, so concurrent requests share it without locking.

mod catalog;
mod entries;

pub use catalog::{normalize_tokens, CatalogError, SignCatalog, CONNECTOR_WORDS};
