//! Game rules: movement paths, move validity and execution, scoring

pub mod moves;
pub mod paths;
pub mod scoring;

pub use moves::{
    execute_move, has_any_valid_move, is_terminal_for_next_side, is_valid_move, legal_sources,
    MoveOutcome,
};
pub use paths::{distribution_pattern, OPPONENT_PATH, PLAYER_PATH};
pub use scoring::{score_value, total_score};
