//! Word Ladder
//!
//! Finds every shortest word ladder between two words: sequences where each
//! step changes exactly one letter and every word after the first is in a
//! lexicon.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::solver::generate;
//! use word_ladder::wordlists::{SAMPLE_LEXICON, words_from_slice};
//!
//! let lexicon = words_from_slice(SAMPLE_LEXICON);
//! let ladders = generate("awake", "sleep", &lexicon);
//!
//! assert_eq!(ladders.len(), 2);
//! for ladder in &ladders {
//!     println!("{ladder}");
//! }
//! ```

// Core domain types
pub mod core;

// Ladder search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
