//! Core domain types for word ladders
//!
//! Words, adjacency, and the lexicon membership capability. Nothing here
//! knows about searching.

mod lexicon;
mod word;

pub use lexicon::{Lexicon, SortedWords, WordSet};
pub use word::{ALPHABET, Word, WordError, is_adjacent, substitutions};
