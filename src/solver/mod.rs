//! Word ladder search
//!
//! The search engine and the ladder value it produces.

mod engine;
mod ladder;

pub use engine::{LadderSearch, SearchOutcome, SearchStats, generate};
pub use ladder::{Ladder, LadderError};
