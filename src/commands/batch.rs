//! Batch solving - many ladder queries at once
//!
//! Each search owns all of its state, so pairs are solved in parallel against a
//! shared lexicon.

use super::error::{CommandError, parse_word};
use crate::core::Lexicon;
use crate::solver::{Ladder, LadderSearch};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result from solving a single pair
#[derive(Debug, Clone)]
pub struct PairResult {
    pub from: String,
    pub to: String,
    pub ladders: Vec<Ladder>,
    pub duration: Duration,
}

impl PairResult {
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.ladders.first().map(Ladder::steps)
    }
}

/// Statistics from a batch run
#[derive(Debug)]
pub struct BatchStatistics {
    pub total_pairs: usize,
    pub solved: usize,
    pub unsolved: usize,
    pub total_ladders: usize,
    /// Shortest-ladder step count -> number of pairs
    pub step_distribution: BTreeMap<usize, usize>,
    /// First ladder of the pair needing the most steps
    pub longest: Option<Ladder>,
    pub total_time: Duration,
    pub results: Vec<PairResult>,
}

/// Parse `FROM TO` pairs, one per line
///
/// Blank lines and lines starting with `#` are ignored. Words are lowercased.
///
/// # Errors
///
/// Returns `CommandError::MalformedPair` naming the first line that does not
/// hold exactly two valid words.
pub fn parse_pairs(text: &str) -> Result<Vec<(String, String)>, CommandError> {
    let mut pairs = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let malformed = || CommandError::MalformedPair {
            line: idx + 1,
            content: trimmed.to_string(),
        };

        let mut fields = trimmed.split_whitespace();
        let (Some(from), Some(to), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(malformed());
        };
        let from = parse_word(from).map_err(|_| malformed())?;
        let to = parse_word(to).map_err(|_| malformed())?;

        pairs.push((from.into_string(), to.into_string()));
    }

    Ok(pairs)
}

/// Solve every pair (or the first `limit` of them) in parallel
pub fn run_batch<L: Lexicon + Sync>(
    pairs: &[(String, String)],
    lexicon: &L,
    limit: Option<usize>,
) -> BatchStatistics {
    let pairs = &pairs[..limit.unwrap_or(pairs.len()).min(pairs.len())];

    let pb = ProgressBar::new(pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let search = LadderSearch::new(lexicon);
    let total_start = Instant::now();

    let results: Vec<PairResult> = pairs
        .par_iter()
        .map(|(from, to)| {
            let start = Instant::now();
            let outcome = search.search(from, to);
            pb.inc(1);
            PairResult {
                from: from.clone(),
                to: to.clone(),
                ladders: outcome.ladders,
                duration: start.elapsed(),
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let total_time = total_start.elapsed();

    let mut step_distribution = BTreeMap::new();
    for steps in results.iter().filter_map(PairResult::steps) {
        *step_distribution.entry(steps).or_insert(0) += 1;
    }

    let solved: usize = step_distribution.values().sum();
    let total_ladders = results.iter().map(|r| r.ladders.len()).sum();

    // Earliest pair wins a tie
    let longest = results
        .iter()
        .filter_map(|r| r.steps().map(|steps| (steps, r)))
        .rev()
        .max_by_key(|(steps, _)| *steps)
        .and_then(|(_, r)| r.ladders.first().cloned());

    info!(
        pairs = results.len(),
        solved,
        ladders = total_ladders,
        elapsed_ms = total_time.as_millis() as u64,
        "batch complete"
    );

    BatchStatistics {
        total_pairs: results.len(),
        solved,
        unsolved: results.len() - solved,
        total_ladders,
        step_distribution,
        longest,
        total_time,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{SAMPLE_LEXICON, words_from_slice};

    const PAIRS: &str = "\
# sample queries
cope hope
awake sleep

work play
phone cones
waiter pattel
";

    #[test]
    fn parse_pairs_skips_comments_and_blanks() {
        let pairs = parse_pairs(PAIRS).unwrap();

        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[0], ("cope".to_string(), "hope".to_string()));
        assert_eq!(pairs[4], ("waiter".to_string(), "pattel".to_string()));
    }

    #[test]
    fn parse_pairs_lowercases() {
        let pairs = parse_pairs("  AT   It  ").unwrap();
        assert_eq!(pairs, vec![("at".to_string(), "it".to_string())]);
    }

    #[test]
    fn parse_pairs_rejects_wrong_field_count() {
        let err = parse_pairs("cope hope\ncope\n").unwrap_err();
        assert!(matches!(err, CommandError::MalformedPair { line: 2, .. }));

        let err = parse_pairs("cope hope hops").unwrap_err();
        assert!(matches!(err, CommandError::MalformedPair { line: 1, .. }));
    }

    #[test]
    fn parse_pairs_rejects_invalid_words() {
        let err = parse_pairs("# header\nc0pe hope").unwrap_err();
        assert!(matches!(err, CommandError::MalformedPair { line: 2, .. }));
        assert!(err.to_string().contains("c0pe hope"));
    }

    #[test]
    fn batch_runs_all_pairs() {
        let lexicon = words_from_slice(SAMPLE_LEXICON);
        let pairs = parse_pairs(PAIRS).unwrap();

        let stats = run_batch(&pairs, &lexicon, None);

        assert_eq!(stats.total_pairs, 5);
        assert_eq!(stats.solved, 4);
        assert_eq!(stats.unsolved, 1);
        // 1 + 2 + 12 + 0 + 2
        assert_eq!(stats.total_ladders, 17);
        assert_eq!(stats.step_distribution.get(&1), Some(&1));
        assert_eq!(stats.step_distribution.get(&4), Some(&1));
        assert_eq!(stats.step_distribution.get(&6), Some(&1));
        assert_eq!(stats.step_distribution.get(&9), Some(&1));
    }

    #[test]
    fn batch_preserves_input_order() {
        let lexicon = words_from_slice(SAMPLE_LEXICON);
        let pairs = parse_pairs(PAIRS).unwrap();

        let stats = run_batch(&pairs, &lexicon, None);
        let order: Vec<&str> = stats.results.iter().map(|r| r.from.as_str()).collect();

        assert_eq!(order, vec!["cope", "awake", "work", "phone", "waiter"]);
    }

    #[test]
    fn batch_reports_longest_ladder() {
        let lexicon = words_from_slice(SAMPLE_LEXICON);
        let pairs = parse_pairs(PAIRS).unwrap();

        let stats = run_batch(&pairs, &lexicon, None);
        let longest = stats.longest.unwrap();

        assert_eq!(longest.steps(), 9);
        assert_eq!(longest.first(), Some("awake"));
        assert_eq!(longest.words()[4], "sharn");
    }

    #[test]
    fn batch_respects_limit() {
        let lexicon = words_from_slice(SAMPLE_LEXICON);
        let pairs = parse_pairs(PAIRS).unwrap();

        let stats = run_batch(&pairs, &lexicon, Some(2));
        assert_eq!(stats.total_pairs, 2);

        let stats = run_batch(&pairs, &lexicon, Some(50));
        assert_eq!(stats.total_pairs, 5);
    }

    #[test]
    fn batch_empty() {
        let lexicon = words_from_slice(SAMPLE_LEXICON);
        let stats = run_batch(&[], &lexicon, None);

        assert_eq!(stats.total_pairs, 0);
        assert_eq!(stats.solved, 0);
        assert!(stats.longest.is_none());
        assert!(stats.step_distribution.is_empty());
    }
}
