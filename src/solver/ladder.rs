//! Ladder value type and validation

use crate::core::{Lexicon, is_adjacent};
use thiserror::Error;

/// An ordered sequence of words from a start word to a goal word
///
/// Ladders order lexicographically by their word sequence, which is the order
/// [`generate`](super::generate) returns them in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ladder {
    words: Vec<String>,
}

/// Reasons a word sequence is not a valid ladder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error("Ladder has no words")]
    Empty,
    #[error("'{from}' and '{to}' (after step {index}) are not one letter apart")]
    NotAdjacent {
        index: usize,
        from: String,
        to: String,
    },
    #[error("'{word}' (step {index}) is not in the lexicon")]
    NotInLexicon { index: usize, word: String },
}

impl Ladder {
    /// Wrap a word sequence without validating it
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// The words of the ladder, start first
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of substitutions (one less than the number of words)
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Check that every step changes one letter and lands on a lexicon word
    ///
    /// The first word is exempt from the lexicon check, matching how searches
    /// are seeded.
    ///
    /// # Errors
    /// Returns the first violation found, scanning from the start.
    pub fn validate<L: Lexicon>(&self, lexicon: &L) -> Result<(), LadderError> {
        if self.words.is_empty() {
            return Err(LadderError::Empty);
        }

        for (index, pair) in self.words.windows(2).enumerate() {
            let (from, to) = (&pair[0], &pair[1]);
            if !is_adjacent(from, to) {
                return Err(LadderError::NotAdjacent {
                    index,
                    from: from.clone(),
                    to: to.clone(),
                });
            }
            if !lexicon.contains(to) {
                return Err(LadderError::NotInLexicon {
                    index: index + 1,
                    word: to.clone(),
                });
            }
        }

        Ok(())
    }
}

impl From<Vec<String>> for Ladder {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl From<&[&str]> for Ladder {
    fn from(words: &[&str]) -> Self {
        Self::new(words.iter().map(ToString::to_string).collect())
    }
}

impl std::fmt::Display for Ladder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.words.join(" → "))
    }
}
