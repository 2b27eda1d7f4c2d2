//! Word lists for ladder searches
//!
//! Provides the embedded sample lexicon and loading of word lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_LEXICON, SAMPLE_LEXICON_COUNT};
pub use loader::{LexiconError, load_from_file, words_from_slice};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE_LEXICON.len(), SAMPLE_LEXICON_COUNT);
    }

    #[test]
    fn sample_words_are_valid() {
        for &word in SAMPLE_LEXICON {
            assert!(!word.is_empty());
            assert!(
                word.bytes().all(|b| b.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn sample_has_no_duplicates() {
        let unique = words_from_slice(SAMPLE_LEXICON);
        assert_eq!(unique.len(), SAMPLE_LEXICON_COUNT);
    }

    #[test]
    fn expected_count() {
        assert_eq!(SAMPLE_LEXICON_COUNT, 110, "Expected 110 sample words");
    }
}
