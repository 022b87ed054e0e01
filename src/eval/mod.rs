//! Positional evaluation
//!
//! Two layers: per-side strategic metrics used by the analyzer's delta
//! bonuses, and a cheap phase-aware static score used at the search's
//! depth limit.

pub mod heuristic;
pub mod metrics;

pub use heuristic::{evaluate, EARLY_GAME_THRESHOLD};
pub use metrics::{
    average_piece_value, board_presence, flexibility, perfect_move_count,
};
