//! Errors surfaced by command implementations

use crate::core::{Word, WordError};
use crate::wordlists::LexiconError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
    #[error("A ladder needs at least one word")]
    EmptyLadder,
    #[error("Line {line}: expected two words 'FROM TO', got '{content}'")]
    MalformedPair { line: usize, content: String },
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// Validate and normalize a user-supplied word
pub(crate) fn parse_word(word: &str) -> Result<Word, CommandError> {
    Word::new(word).map_err(|source| CommandError::InvalidWord {
        word: word.to_string(),
        source,
    })
}
