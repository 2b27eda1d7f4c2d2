//! Word list loading utilities
//!
//! Builds a [`WordSet`] from a newline-delimited file or from embedded constants.

use crate::core::{Word, WordSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for lexicon loading
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load words from a file
///
/// Lines are trimmed and lowercased. Blank lines and entries that are not
/// plain words are skipped. Duplicates collapse.
///
/// # Errors
///
/// Returns `LexiconError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let lexicon = load_from_file("english.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordSet, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut skipped = 0usize;
    let words: WordSet = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let word = Word::new(trimmed).ok();
            if word.is_none() {
                skipped += 1;
            }
            word.map(Word::into_string)
        })
        .collect();

    if skipped > 0 {
        debug!(skipped, "ignored lexicon entries that are not plain words");
    }
    info!(path = %path.display(), words = words.len(), "lexicon loaded");

    Ok(words)
}

/// Convert embedded string slice to a word set
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
/// use word_ladder::wordlists::SAMPLE_LEXICON;
///
/// let words = words_from_slice(SAMPLE_LEXICON);
/// assert_eq!(words.len(), SAMPLE_LEXICON.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordSet {
    slice
        .iter()
        .filter_map(|&s| Word::new(s).ok())
        .map(Word::into_string)
        .collect()
}
