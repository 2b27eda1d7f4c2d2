//! Ladder verification command
//!
//! Checks a hand-written ladder and compares it against the shortest ones.

use super::error::{CommandError, parse_word};
use crate::core::Lexicon;
use crate::solver::{Ladder, LadderError, generate};

/// Result of verifying a ladder
pub struct VerifyResult {
    pub ladder: Ladder,
    /// First rule the ladder breaks, if any
    pub error: Option<LadderError>,
    /// Step count of the shortest ladders between the same endpoints
    pub shortest_steps: Option<usize>,
    /// Number of distinct shortest ladders between the same endpoints
    pub shortest_count: usize,
}

impl VerifyResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Valid and no longer than the shortest possible ladder
    #[must_use]
    pub fn is_shortest(&self) -> bool {
        self.is_valid() && self.shortest_steps == Some(self.ladder.steps())
    }
}

/// Verify a ladder given as a sequence of words
///
/// # Errors
///
/// Returns an error if no words are given or any word contains non-letters.
pub fn verify_ladder<L: Lexicon>(
    words: &[String],
    lexicon: &L,
) -> Result<VerifyResult, CommandError> {
    let words = words
        .iter()
        .map(|word| parse_word(word).map(crate::core::Word::into_string))
        .collect::<Result<Vec<_>, _>>()?;

    let ladder = Ladder::new(words);
    let (Some(from), Some(to)) = (ladder.first(), ladder.last()) else {
        return Err(CommandError::EmptyLadder);
    };

    let shortest = generate(from, to, lexicon);
    let error = ladder.validate(lexicon).err();

    Ok(VerifyResult {
        shortest_steps: shortest.first().map(Ladder::steps),
        shortest_count: shortest.len(),
        error,
        ladder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordSet;
    use crate::wordlists::{SAMPLE_LEXICON, words_from_slice};

    fn sample() -> WordSet {
        words_from_slice(SAMPLE_LEXICON)
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn shortest_ladder_accepted() {
        let input = words(&["ddd", "gdd", "ggd", "ggg"]);
        let result = verify_ladder(&input, &sample()).unwrap();

        assert!(result.is_valid());
        assert!(result.is_shortest());
        assert_eq!(result.shortest_steps, Some(3));
        assert_eq!(result.shortest_count, 2);
    }

    #[test]
    fn valid_but_longer_ladder() {
        // Detours through "form" before returning to the "pork" branch
        let input = words(&["work", "worm", "form", "fork", "pork"]);
        let result = verify_ladder(&input, &sample()).unwrap();

        assert!(result.is_valid());
        assert!(!result.is_shortest());
        assert_eq!(result.shortest_steps, Some(1));
    }

    #[test]
    fn broken_ladder_reports_error() {
        let input = words(&["cope", "hope", "cape"]);
        let result = verify_ladder(&input, &sample()).unwrap();

        assert!(!result.is_valid());
        assert!(!result.is_shortest());
        assert!(matches!(
            result.error,
            Some(LadderError::NotAdjacent { index: 1, .. })
        ));
    }

    #[test]
    fn uppercase_input_normalized() {
        let input = words(&["AT", "It"]);
        let result = verify_ladder(&input, &sample()).unwrap();
        assert!(result.is_shortest());
    }

    #[test]
    fn single_word_is_trivially_shortest() {
        let input = words(&["cope"]);
        let result = verify_ladder(&input, &sample()).unwrap();

        assert!(result.is_shortest());
        assert_eq!(result.shortest_steps, Some(0));
    }

    #[test]
    fn empty_input_is_error() {
        let result = verify_ladder(&[], &sample());
        assert!(matches!(result, Err(CommandError::EmptyLadder)));
    }
}
