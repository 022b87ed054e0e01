//! Strategic per-side metrics
//!
//! Each metric is a pure function of a board and a side. The analyzer
//! scores a candidate move by the change each metric undergoes between
//! the board before and after the move.

use crate::board::{Board, Side};
use crate::rules::{execute_move, legal_sources, score_value};

/// The playable areas a side draws strength from: its three owned areas
/// plus the two shared areas. The side's base completes its territory but
/// is tracked separately on the board.
#[must_use]
pub fn belonging_areas(side: Side) -> [u8; 5] {
    match side {
        Side::Player => [1, 3, 5, 2, 4],
        Side::Opponent => [6, 7, 8, 2, 4],
    }
}

/// Number of pieces in `side`'s territory: banked pieces plus pieces in
/// its belonging areas.
#[must_use]
pub fn board_presence(board: &Board, side: Side) -> usize {
    let in_areas: usize = belonging_areas(side)
        .iter()
        .filter_map(|&id| board.area(id))
        .map(|area| area.pieces.len())
        .sum();
    board.base_count(side) + in_areas
}

/// Number of `side`'s legal sources whose own move would land its final
/// piece in the base, earning an extra turn. A one-ply look-ahead count.
#[must_use]
pub fn perfect_move_count(board: &Board, side: Side) -> usize {
    legal_sources(board, side)
        .into_iter()
        .filter(|&id| {
            execute_move(id, board, side).is_ok_and(|outcome| outcome.extra_turn)
        })
        .count()
}

/// Mean point value of the pieces in `side`'s territory (banked plus
/// belonging areas), under that side's first/second-player lens.
/// Zero when the territory holds no pieces.
#[must_use]
pub fn average_piece_value(board: &Board, side: Side) -> f64 {
    let is_first = board.is_first(side);
    let mut total = 0u32;
    let mut count = 0usize;
    for piece in board.scored(side) {
        total += score_value(piece, is_first);
        count += 1;
    }
    for &id in &belonging_areas(side) {
        if let Some(area) = board.area(id) {
            for piece in &area.pieces {
                total += score_value(piece, is_first);
                count += 1;
            }
        }
    }
    if count == 0 {
        0.0
    } else {
        f64::from(total) / count as f64
    }
}

/// Number of distinct areas `side` may currently move from.
#[must_use]
pub fn flexibility(board: &Board, side: Side) -> usize {
    legal_sources(board, side).len()
}
