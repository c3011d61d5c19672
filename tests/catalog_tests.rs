// Unit tests for the fallback sign catalog: validated build, lookup,
// token normalization, and the word-by-word fallback translation.

use signbridge::catalog::{normalize_tokens, CatalogError, SignCatalog, CONNECTOR_WORDS};
use signbridge::GestureDescriptor;

#[test]
fn test_builtin_catalog_builds() {
    let catalog = SignCatalog::builtin().expect("builtin catalog must build");
    assert!(!catalog.is_empty());
    assert!(catalog.len() >= 30, "builtin catalog should carry the full dictionary");
}

#[test]
fn test_lookup_is_case_insensitive() {
    let catalog = SignCatalog::builtin().unwrap();

    let lower = catalog.lookup("hello").expect("hello is in the catalog");
    let upper = catalog.lookup("HELLO").expect("HELLO should match hello");

    assert_eq!(lower.word, "hello");
    assert_eq!(upper.word, "hello");
    assert_eq!(lower.hand_shape, "open");
    assert_eq!(lower.movement, "wave");
    assert_eq!(lower.duration_secs, 1.5);
}

#[test]
fn test_lookup_trims_whitespace() {
    let catalog = SignCatalog::builtin().unwrap();
    assert!(catalog.lookup("  you  ").is_some());
}

#[test]
fn test_unknown_word_is_absent() {
    let catalog = SignCatalog::builtin().unwrap();
    assert!(catalog.lookup("zebra").is_none());
}

#[test]
fn test_duplicate_entries_are_a_build_error() {
    let entries = vec![
        GestureDescriptor::generic("apple"),
        GestureDescriptor::generic("banana"),
        GestureDescriptor::generic("Apple"),
    ];

    let result = SignCatalog::build(entries);
    match result {
        Err(CatalogError::DuplicateWord(word)) => assert_eq!(word, "apple"),
        _ => panic!("Duplicate word should be rejected at build time"),
    }
}

#[test]
fn test_normalize_tokens_strips_punctuation() {
    assert_eq!(
        normalize_tokens("Hello, how are you today?"),
        vec!["hello", "how", "are", "you", "today"]
    );
}

#[test]
fn test_normalize_tokens_drops_connector_words() {
    assert_eq!(
        normalize_tokens("I want to eat the apple"),
        vec!["i", "want", "eat", "apple"]
    );

    for connector in CONNECTOR_WORDS {
        assert!(
            normalize_tokens(connector).is_empty(),
            "connector word '{}' should be dropped",
            connector
        );
    }
}

#[test]
fn test_normalize_tokens_drops_empty_tokens() {
    assert!(normalize_tokens("!!! ??? ...").is_empty());
    assert!(normalize_tokens("").is_empty());
    assert!(normalize_tokens("   ").is_empty());
}

#[test]
fn test_fallback_translation_scenario() {
    // "Hello, how are you today?" with the live service unavailable must
    // yield exactly hello/how/are/you/today, each catalog-sourced.
    let catalog = SignCatalog::builtin().unwrap();
    let signs = catalog.translate("Hello, how are you today?");

    let words: Vec<&str> = signs.iter().map(|s| s.word.as_str()).collect();
    assert_eq!(words, vec!["hello", "how", "are", "you", "today"]);

    for sign in &signs {
        assert!(!sign.hand_shape.is_empty());
        assert!(sign.duration_secs > 0.0);
        assert!(
            !sign.description.starts_with("General gesture"),
            "'{}' should come from the catalog, not the generic default",
            sign.word
        );
    }
}

#[test]
fn test_fallback_never_rejects_a_word() {
    let catalog = SignCatalog::builtin().unwrap();
    let signs = catalog.translate("quantum chromodynamics rocks");

    assert_eq!(signs.len(), 3);
    for sign in &signs {
        assert_eq!(sign.hand_shape, "open");
        assert_eq!(sign.palm_orientation, "forward");
        assert_eq!(sign.location, "space");
        assert_eq!(sign.movement, "wave");
        assert_eq!(sign.duration_secs, 1.0);
    }
}

#[test]
fn test_fallback_preserves_source_order() {
    let catalog = SignCatalog::builtin().unwrap();
    let signs = catalog.translate("today you learn");

    let words: Vec<&str> = signs.iter().map(|s| s.word.as_str()).collect();
    assert_eq!(words, vec!["today", "you", "learn"]);
}

#[test]
fn test_fallback_on_empty_input() {
    let catalog = SignCatalog::builtin().unwrap();
    assert!(catalog.translate("").is_empty());
}
