//! Lexicon membership capability
//!
//! The search only ever asks "is this a word?". Any container that can answer
//! that question can back a search.

use rustc_hash::FxHashSet;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// The loader's concrete lexicon type
pub type WordSet = FxHashSet<String>;

/// A set of valid words supporting membership queries
pub trait Lexicon {
    /// Whether `word` is a member of the lexicon
    fn contains(&self, word: &str) -> bool;

    /// Number of words in the lexicon
    fn len(&self) -> usize;

    /// Whether the lexicon holds no words at all
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<S: BuildHasher> Lexicon for HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl Lexicon for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

/// A sorted, deduplicated word list queried by binary search
///
/// Cheaper to build than a hash set when the source list is already sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedWords {
    words: Vec<String>,
}

impl SortedWords {
    /// Build from any collection of words, sorting and deduplicating them
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        let mut words: Vec<String> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// The words in ascending order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl FromIterator<String> for SortedWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Lexicon for SortedWords {
    fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<String> {
        ["cope", "hope", "cape", "copd"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn assert_membership<L: Lexicon>(lexicon: &L) {
        assert_eq!(lexicon.len(), 4);
        assert!(!lexicon.is_empty());
        assert!(lexicon.contains("cope"));
        assert!(lexicon.contains("copd"));
        assert!(!lexicon.contains("cops"));
        assert!(!lexicon.contains(""));
    }

    #[test]
    fn fx_hash_set_lexicon() {
        let set: WordSet = words().into_iter().collect();
        assert_membership(&set);
    }

    #[test]
    fn std_hash_set_lexicon() {
        let set: HashSet<String> = words().into_iter().collect();
        assert_membership(&set);
    }

    #[test]
    fn btree_set_lexicon() {
        let set: BTreeSet<String> = words().into_iter().collect();
        assert_membership(&set);
    }

    #[test]
    fn sorted_words_lexicon() {
        let sorted = SortedWords::new(words());
        assert_membership(&sorted);
        assert_eq!(sorted.as_slice()[0], "cape");
    }

    #[test]
    fn sorted_words_dedups() {
        let sorted: SortedWords = ["hope", "cope", "hope"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted.as_slice(), &["cope".to_string(), "hope".to_string()]);
    }

    #[test]
    fn reference_is_a_lexicon() {
        let set: WordSet = words().into_iter().collect();
        let by_ref = &set;
        assert_membership(&by_ref);
    }

    #[test]
    fn empty_lexicon() {
        let set = WordSet::default();
        assert!(set.is_empty());
        assert!(!Lexicon::contains(&set, "cope"));
    }
}
