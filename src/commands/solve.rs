//! Ladder solving command
//!
//! Finds every shortest ladder between two words.

use super::error::{CommandError, parse_word};
use crate::core::Lexicon;
use crate::solver::{Ladder, LadderSearch, SearchStats};
use std::time::{Duration, Instant};
use tracing::warn;

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub from: String,
    pub to: String,
}

impl SolveConfig {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub from: String,
    pub to: String,
    pub ladders: Vec<Ladder>,
    pub stats: SearchStats,
    pub start_in_lexicon: bool,
    pub duration: Duration,
}

impl SolveResult {
    /// Step count shared by every ladder found, if any were
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.ladders.first().map(Ladder::steps)
    }
}

/// Solve a ladder between the two configured words
///
/// Words are lowercased before searching. An unreachable goal is not an error;
/// the result simply holds no ladders.
///
/// # Errors
///
/// Returns an error if either word is empty or contains non-letters.
pub fn solve_ladder<L: Lexicon>(
    config: &SolveConfig,
    lexicon: &L,
) -> Result<SolveResult, CommandError> {
    let from = parse_word(&config.from)?;
    let to = parse_word(&config.to)?;

    if from.len() != to.len() {
        warn!(
            from = from.text(),
            to = to.text(),
            "words differ in length, no ladder can connect them"
        );
    }

    let start_in_lexicon = lexicon.contains(from.text());
    if !start_in_lexicon {
        warn!(from = from.text(), "start word is not in the lexicon");
    }
    if !lexicon.contains(to.text()) && from != to {
        warn!(to = to.text(), "goal word is not in the lexicon");
    }

    let start = Instant::now();
    let outcome = LadderSearch::new(lexicon).search(from.text(), to.text());
    let duration = start.elapsed();

    Ok(SolveResult {
        from: from.into_string(),
        to: to.into_string(),
        ladders: outcome.ladders,
        stats: outcome.stats,
        start_in_lexicon,
        duration,
    })
}
