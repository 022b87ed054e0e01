//! Static positional evaluation
//!
//! Used by the search at its depth limit and when the side to act has no
//! legal move. Always scored from a single perspective so max and min
//! plies alternate over one scale.

use crate::board::{Board, Side};
use crate::eval::metrics::flexibility;

/// Positions with more than this many pieces still in playable areas are
/// treated as early game.
pub const EARLY_GAME_THRESHOLD: usize = 15;

/// Static score of `board` from `perspective`'s point of view.
///
/// Early game favors development: banked-piece lead weighted lightly plus
/// a mobility term. Late game weights the banked lead heavily, since few
/// pieces remain to change it.
#[must_use]
pub fn evaluate(board: &Board, perspective: Side) -> i32 {
    let lead = board.base_count(perspective) as i32
        - board.base_count(perspective.opponent()) as i32;
    if board.pieces_in_play() > EARLY_GAME_THRESHOLD {
        lead * 5 + flexibility(board, perspective) as i32 * 3
    } else {
        lead * 15
    }
}
