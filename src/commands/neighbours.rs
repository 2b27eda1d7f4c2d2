//! Word neighbourhood command
//!
//! Lists the lexicon words one substitution away from a given word.

use super::error::{CommandError, parse_word};
use crate::core::{Lexicon, substitutions};

/// Result of analyzing a word's neighbourhood
pub struct NeighbourResult {
    pub word: String,
    pub in_lexicon: bool,
    pub neighbours: Vec<String>,
}

/// Find every lexicon word adjacent to `word`, in alphabetical order
///
/// # Errors
///
/// Returns an error if the word is empty or contains non-letters.
pub fn analyze_neighbours<L: Lexicon>(
    word: &str,
    lexicon: &L,
) -> Result<NeighbourResult, CommandError> {
    let word = parse_word(word)?;

    let mut neighbours: Vec<String> = substitutions(word.text())
        .filter(|candidate| lexicon.contains(candidate))
        .collect();
    neighbours.sort_unstable();

    Ok(NeighbourResult {
        in_lexicon: lexicon.contains(word.text()),
        word: word.into_string(),
        neighbours,
    })
}
