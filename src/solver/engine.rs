//! Ladder search engine
//!
//! Level-synchronized breadth-first search over the implicit graph whose nodes
//! are lexicon words and whose edges join words one substitution apart.
//!
//! The queue holds partial ladders rather than single words so that every
//! shortest path survives. A word already visited is normally skipped, but a
//! word first reached at the current level stays open to other branches at
//! that level. Once a ladder is completed, its step count becomes the bound
//! and nothing longer is expanded.

use super::ladder::Ladder;
use crate::core::{Lexicon, substitutions};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Counters collected during a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Partial ladders whose successors were generated
    pub expanded: usize,
    /// Partial ladders dropped because a shorter-or-equal ladder was known
    pub pruned: usize,
    /// Distinct words reached, including the start word
    pub words_visited: usize,
    /// Largest number of partial ladders queued at once
    pub max_queue_len: usize,
    /// Deepest level the search entered
    pub depth: usize,
}

/// Ladders found by a search plus the counters that produced them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub ladders: Vec<Ladder>,
    pub stats: SearchStats,
}

/// Shortest-ladder search over a borrowed lexicon
///
/// All search state lives inside [`LadderSearch::search`], so one searcher can
/// serve any number of queries, including from several threads at once when
/// the lexicon is `Sync`.
pub struct LadderSearch<'a, L: Lexicon> {
    lexicon: &'a L,
}

impl<'a, L: Lexicon> LadderSearch<'a, L> {
    pub const fn new(lexicon: &'a L) -> Self {
        Self { lexicon }
    }

    /// Find every shortest ladder from `from` to `to`
    ///
    /// `from` seeds the search whether or not it is in the lexicon; every other
    /// word, `to` included, must be. Ladders come back in lexicographic order.
    ///
    /// Returns a single one-word ladder when `from == to`, and no ladders when
    /// the words are empty, differ in length, or contain anything other than
    /// lowercase ASCII letters.
    #[must_use]
    pub fn search(&self, from: &str, to: &str) -> SearchOutcome {
        let mut stats = SearchStats::default();

        if !well_formed(from, to) {
            debug!(from, to, "malformed search endpoints, no ladders");
            return SearchOutcome {
                ladders: Vec::new(),
                stats,
            };
        }

        if from == to {
            stats.words_visited = 1;
            return SearchOutcome {
                ladders: vec![Ladder::new(vec![from.to_string()])],
                stats,
            };
        }

        let mut queue: VecDeque<Vec<String>> = VecDeque::new();
        let mut visited: FxHashSet<String> = FxHashSet::default();
        let mut frontier: FxHashSet<String> = FxHashSet::default();
        let mut ladders = Vec::new();
        let mut best_depth: Option<usize> = None;
        let mut current_depth = 0;

        visited.insert(from.to_string());
        queue.push_back(vec![from.to_string()]);

        while let Some(partial) = queue.pop_front() {
            let depth = partial.len() - 1;

            if depth > current_depth {
                current_depth = depth;
                frontier.clear();
                trace!(depth, queued = queue.len() + 1, "entering level");
            }

            if best_depth.is_some_and(|best| depth >= best) {
                stats.pruned += 1;
                continue;
            }

            let Some(tail) = partial.last() else {
                continue;
            };
            stats.expanded += 1;

            let mut successors: Vec<String> = substitutions(tail)
                .filter(|candidate| {
                    self.lexicon.contains(candidate)
                        && (!visited.contains(candidate) || frontier.contains(candidate))
                })
                .collect();
            for word in &successors {
                visited.insert(word.clone());
                frontier.insert(word.clone());
            }

            // Sorted siblings keep the whole queue, and so the result, in order
            successors.sort_unstable();

            for word in successors {
                let reached_goal = word == to;
                let mut extended = partial.clone();
                extended.push(word);

                if !reached_goal {
                    queue.push_back(extended);
                    continue;
                }

                let steps = depth + 1;
                if best_depth.is_none_or(|best| best == steps) {
                    if best_depth.is_none() {
                        debug!(from, to, steps, "shortest ladder length found");
                    }
                    best_depth = Some(steps);
                    ladders.push(Ladder::new(extended));
                }
            }

            stats.max_queue_len = stats.max_queue_len.max(queue.len());
        }

        stats.words_visited = visited.len();
        stats.depth = current_depth;
        debug_assert!(ladders.is_sorted());
        debug!(
            from,
            to,
            ladders = ladders.len(),
            expanded = stats.expanded,
            pruned = stats.pruned,
            "search complete"
        );

        SearchOutcome { ladders, stats }
    }
}

/// Find every shortest ladder from `from` to `to` through `lexicon`
///
/// # Examples
/// ```
/// use word_ladder::core::WordSet;
/// use word_ladder::solver::generate;
///
/// let lexicon: WordSet = ["cope", "hope", "cape"].iter().map(ToString::to_string).collect();
/// let ladders = generate("cope", "hope", &lexicon);
///
/// assert_eq!(ladders.len(), 1);
/// assert_eq!(ladders[0].words(), &["cope", "hope"]);
/// ```
#[must_use]
pub fn generate<L: Lexicon>(from: &str, to: &str, lexicon: &L) -> Vec<Ladder> {
    LadderSearch::new(lexicon).search(from, to).ladders
}

fn well_formed(from: &str, to: &str) -> bool {
    let lowercase = |word: &str| word.bytes().all(|b| b.is_ascii_lowercase());
    !from.is_empty() && from.len() == to.len() && lowercase(from) && lowercase(to)
}
