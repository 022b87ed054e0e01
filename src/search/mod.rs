//! Move analysis and adversarial look-ahead
//!
//! Contains:
//! - Opponent-threat detection (does a move hand the other side a new
//!   extra-turn or scoring opportunity?)
//! - Depth-bounded alpha-beta look-ahead with extra-turn side preservation
//! - The per-move evaluation pipeline behind [`analyze_moves`]

pub mod alphabeta;
pub mod analyzer;
pub mod threat;

pub use alphabeta::{DISCOUNT_FACTOR, MAX_DEPTH};
pub use analyzer::{analyze_moves, MoveAnalysis};
pub use threat::{opponent_threat_penalty, Warning};
