// Unit tests for transcript normalization: timestamp stripping, empty-line
// removal, and whitespace normalization.

use signbridge::{clean_transcription, Transcript};

#[test]
fn test_strips_timestamp_range() {
    assert_eq!(
        clean_transcription("[00:00:00.000 --> 00:00:04.240] Hello there"),
        "Hello there"
    );
}

#[test]
fn test_joins_lines_with_single_space() {
    let raw = "[00:00:00.000 --> 00:00:04.240] Hello there\n[00:00:04.240 --> 00:00:08.120] how are you";
    assert_eq!(clean_transcription(raw), "Hello there how are you");
}

#[test]
fn test_drops_lines_that_become_empty() {
    let raw = "Hello\n[00:00:00.000 --> 00:00:04.240]\n\nworld";
    assert_eq!(clean_transcription(raw), "Hello world");
}

#[test]
fn test_normalizes_inner_whitespace() {
    assert_eq!(clean_transcription("  Hello   brave    world  "), "Hello brave world");
}

#[test]
fn test_text_without_timestamps_is_untouched() {
    assert_eq!(clean_transcription("Good morning"), "Good morning");
}

#[test]
fn test_timestamp_in_the_middle_of_a_line() {
    assert_eq!(
        clean_transcription("Hello [00:00:01.000 --> 00:00:02.000] world"),
        "Hello world"
    );
}

#[test]
fn test_partial_timestamp_is_not_stripped() {
    // Only the full [HH:MM:SS.mmm --> HH:MM:SS.mmm] shape is an annotation.
    assert_eq!(clean_transcription("[00:00] Hello"), "[00:00] Hello");
}

#[test]
fn test_transcript_carries_language_tag() {
    let transcript = Transcript::from_raw("[00:00:00.000 --> 00:00:01.000] Hi", "en");
    assert_eq!(transcript.text, "Hi");
    assert_eq!(transcript.language, "en");
}
