//! Command implementations

pub mod batch;
mod error;
pub mod neighbours;
pub mod solve;
pub mod verify;

pub use batch::{BatchStatistics, PairResult, parse_pairs, run_batch};
pub use error::CommandError;
pub use neighbours::{NeighbourResult, analyze_neighbours};
pub use solve::{SolveConfig, SolveResult, solve_ladder};
pub use verify::{VerifyResult, verify_ladder};
