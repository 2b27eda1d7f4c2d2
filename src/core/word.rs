//! Word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. Two words are adjacent
//! when they have the same length and differ in exactly one position.

use thiserror::Error;

/// Letters tried at every position when generating substitutions
pub const ALPHABET: std::ops::RangeInclusive<u8> = b'a'..=b'z';

/// A validated lowercase word
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cope").unwrap();
    /// assert_eq!(word.text(), "cope");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c0pe").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Words are never empty
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check whether `other` is one substitution away from this word
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        is_adjacent(&self.text, &other.text)
    }

    /// Consume the word, returning the underlying string
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Check whether two strings have equal length and differ in exactly one byte
#[must_use]
pub fn is_adjacent(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count() == 1
}

/// Iterate every single-letter substitution of `word`
///
/// Candidates come out position by position, and within a position in
/// alphabetical order of the replacement letter. The original letter is skipped.
/// Non-ASCII input yields nothing.
///
/// # Examples
/// ```
/// use word_ladder::core::substitutions;
///
/// let subs: Vec<String> = substitutions("at").collect();
/// assert_eq!(subs.len(), 50);
/// assert_eq!(subs[0], "bt");
/// assert!(subs.contains(&"it".to_string()));
/// ```
pub fn substitutions(word: &str) -> impl Iterator<Item = String> + '_ {
    let bytes: &[u8] = if word.is_ascii() { word.as_bytes() } else { &[] };

    (0..bytes.len()).flat_map(move |position| {
        let original = bytes[position];
        ALPHABET.filter(move |&letter| letter != original).map(move |letter| {
            let mut candidate = bytes.to_vec();
            candidate[position] = letter;
            // Only one ASCII byte replaced with another ASCII byte
            String::from_utf8(candidate).unwrap_or_default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cope").unwrap();
        assert_eq!(word.text(), "cope");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("AWAKE").unwrap();
        assert_eq!(word.text(), "awake");

        let word2 = Word::new("SlEeP").unwrap();
        assert_eq!(word2.text(), "sleep");
    }

    #[test]
    fn word_creation_any_length() {
        assert!(Word::new("at").is_ok());
        assert!(Word::new("a").is_ok());
        assert!(Word::new("airplane").is_ok());
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cop3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("co pe"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cope!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("cope").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(3), b'e');
    }

    #[test]
    fn adjacency() {
        let cope = Word::new("cope").unwrap();
        let hope = Word::new("hope").unwrap();
        let cape = Word::new("cape").unwrap();
        let copes = Word::new("copes").unwrap();

        assert!(cope.is_adjacent(&hope));
        assert!(cope.is_adjacent(&cape));
        assert!(!hope.is_adjacent(&cape));
        assert!(!cope.is_adjacent(&cope));
        assert!(!cope.is_adjacent(&copes));
    }

    #[test]
    fn substitutions_order_and_count() {
        let subs: Vec<String> = substitutions("ab").collect();
        assert_eq!(subs.len(), 50);
        // Position 0 first, original letter skipped
        assert_eq!(subs[0], "bb");
        assert_eq!(subs[24], "zb");
        assert_eq!(subs[25], "aa");
        assert_eq!(subs[49], "az");
        assert!(!subs.contains(&"ab".to_string()));
    }

    #[test]
    fn substitutions_are_all_adjacent() {
        assert!(substitutions("sleep").all(|s| is_adjacent("sleep", &s)));
    }

    #[test]
    fn substitutions_of_empty_and_non_ascii() {
        assert_eq!(substitutions("").count(), 0);
        assert_eq!(substitutions("café").count(), 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("ladder").unwrap();
        assert_eq!(format!("{word}"), "ladder");
    }
}
