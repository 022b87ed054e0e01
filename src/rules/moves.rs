//! Move validation and execution
//!
//! A move empties a playable area and sows its pieces one by one along the
//! acting side's distribution path. Pieces come off the top of the stack
//! first (last in, first out). A piece that reaches the acting side's base
//! is banked as a scoring event and never stored in an area; if the final
//! sown piece is the one that lands in the base, the mover earns an extra
//! turn.

use crate::board::{Board, Piece, Side};
use crate::error::InvalidMove;
use crate::rules::paths::distribution_pattern;

/// Result of executing a single move.
///
/// Holds the successor board plus the events the move produced. The input
/// board is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    /// Board state after the move.
    pub board: Board,
    /// Pieces banked into the mover's base by this move, in sowing order.
    pub scored: Vec<Piece>,
    /// True when the last sown piece landed in the mover's base.
    pub extra_turn: bool,
}

/// Checks whether `side` may move from `area_id` on this board.
///
/// A move is valid when the area exists, holds at least one piece, and its
/// eligibility admits the acting side. Bases are not areas and are never
/// valid sources.
#[must_use]
pub fn is_valid_move(area_id: u8, board: &Board, side: Side) -> bool {
    match board.area(area_id) {
        Some(area) => !area.pieces.is_empty() && area.eligibility.permits(side),
        None => false,
    }
}

/// All area ids `side` may currently move from, in ascending id order.
#[must_use]
pub fn legal_sources(board: &Board, side: Side) -> Vec<u8> {
    board
        .areas()
        .iter()
        .filter(|area| !area.pieces.is_empty() && area.eligibility.permits(side))
        .map(|area| area.id)
        .collect()
}

/// Returns true when `side` has at least one legal move.
#[must_use]
pub fn has_any_valid_move(board: &Board, side: Side) -> bool {
    board
        .areas()
        .iter()
        .any(|area| !area.pieces.is_empty() && area.eligibility.permits(side))
}

/// True when the game is over because `next_side`, about to act, is stuck.
///
/// The stuck side is not automatically the loser; the winner is decided by
/// final score.
#[must_use]
pub fn is_terminal_for_next_side(board: &Board, next_side: Side) -> bool {
    !has_any_valid_move(board, next_side)
}

/// Executes a move for `side` from `area_id`, returning the successor state.
///
/// # Arguments
///
/// * `area_id` - Source area, must be a playable area id
/// * `board` - Current position; left untouched
/// * `side` - The acting side
///
/// # Returns
///
/// The [`MoveOutcome`] on success, or [`InvalidMove`] when the source does
/// not exist, is empty, or is closed to the acting side.
pub fn execute_move(area_id: u8, board: &Board, side: Side) -> Result<MoveOutcome, InvalidMove> {
    let mut next = board.clone();
    let source = next
        .area_mut(area_id)
        .ok_or(InvalidMove::NoSuchArea(area_id))?;
    if source.pieces.is_empty() {
        return Err(InvalidMove::EmptyArea(area_id));
    }
    if !source.eligibility.permits(side) {
        return Err(InvalidMove::WrongSide {
            area: area_id,
            side,
        });
    }

    let mut stack = std::mem::take(&mut source.pieces);
    // Top of the stack is sown first.
    stack.reverse();

    let destinations = distribution_pattern(area_id, stack.len(), side);
    let last = stack.len() - 1;
    let mut scored = Vec::new();
    let mut extra_turn = false;

    for (i, (piece, &dest)) in stack.into_iter().zip(destinations.iter()).enumerate() {
        if dest == side.base_id() {
            next.bank(side, piece);
            scored.push(piece);
            if i == last {
                extra_turn = true;
            }
        } else if let Some(target) = next.area_mut(dest) {
            target.pieces.push(piece);
        }
    }

    Ok(MoveOutcome {
        board: next,
        scored,
        extra_turn,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceColor, PieceKind};

    fn stacked(area_id: u8, pieces: Vec<Piece>) -> Board {
        let mut board = Board::default();
        board.area_mut(area_id).unwrap().pieces = pieces;
        board
    }

    #[test]
    fn test_validity_by_eligibility() {
        let mut board = Board::default();
        for id in 1..=8 {
            board.area_mut(id).unwrap().pieces.push(Piece::mandragora());
        }
        assert!(is_valid_move(1, &board, Side::Player));
        assert!(!is_valid_move(1, &board, Side::Opponent));
        assert!(is_valid_move(6, &board, Side::Opponent));
        assert!(!is_valid_move(6, &board, Side::Player));
        assert!(is_valid_move(2, &board, Side::Player));
        assert!(is_valid_move(2, &board, Side::Opponent));
        assert!(is_valid_move(4, &board, Side::Player));
        assert!(is_valid_move(4, &board, Side::Opponent));
    }

    #[test]
    fn test_invalid_move_errors() {
        let board = Board::default();
        assert_eq!(
            execute_move(0, &board, Side::Player),
            Err(InvalidMove::NoSuchArea(0))
        );
        assert_eq!(
            execute_move(9, &board, Side::Opponent),
            Err(InvalidMove::NoSuchArea(9))
        );
        assert_eq!(
            execute_move(3, &board, Side::Player),
            Err(InvalidMove::EmptyArea(3))
        );

        let board = stacked(3, vec![Piece::mandragora()]);
        assert_eq!(
            execute_move(3, &board, Side::Opponent),
            Err(InvalidMove::WrongSide {
                area: 3,
                side: Side::Opponent
            })
        );
    }

    #[test]
    fn test_legal_sources_ascending() {
        let mut board = Board::default();
        for id in [7, 2, 5] {
            board.area_mut(id).unwrap().pieces.push(Piece::mandragora());
        }
        assert_eq!(legal_sources(&board, Side::Player), vec![2, 5]);
        assert_eq!(legal_sources(&board, Side::Opponent), vec![2, 7]);
        assert!(has_any_valid_move(&board, Side::Player));
        assert!(!has_any_valid_move(&Board::default(), Side::Player));
        assert!(is_terminal_for_next_side(&Board::default(), Side::Opponent));
        assert!(!is_terminal_for_next_side(&board, Side::Opponent));
    }

    #[test]
    fn test_lifo_sowing_order() {
        let a = Piece::new(PieceKind::Korrigan, PieceColor::Black);
        let b = Piece::new(PieceKind::Citrullus, PieceColor::Green);
        let c = Piece::new(PieceKind::Adenium, PieceColor::Pink);
        // Area 1 stack, bottom to top: a, b, c. Path from 1 starts 2, 3, 4,
        // so the top piece c is sown first into area 2.
        let board = stacked(1, vec![a, b, c]);
        let outcome = execute_move(1, &board, Side::Player).unwrap();
        assert_eq!(outcome.board.area(2).unwrap().pieces, vec![c]);
        assert_eq!(outcome.board.area(3).unwrap().pieces, vec![b]);
        assert_eq!(outcome.board.area(4).unwrap().pieces, vec![a]);
        assert!(outcome.board.area(1).unwrap().pieces.is_empty());
        assert!(outcome.scored.is_empty());
        assert!(!outcome.extra_turn);
    }

    #[test]
    fn test_single_piece_into_base_earns_extra_turn() {
        // Area 5 with one piece: the player's path from 5 goes straight
        // to the player base.
        let board = stacked(5, vec![Piece::mandragora()]);
        let outcome = execute_move(5, &board, Side::Player).unwrap();
        assert_eq!(outcome.scored.len(), 1);
        assert!(outcome.extra_turn);
        assert_eq!(outcome.board.base_count(Side::Player), 1);
        assert_eq!(outcome.board.pieces_in_play(), 0);
    }

    #[test]
    fn test_opponent_single_piece_into_base() {
        let board = stacked(8, vec![Piece::mandragora()]);
        let outcome = execute_move(8, &board, Side::Opponent).unwrap();
        assert!(outcome.extra_turn);
        assert_eq!(outcome.board.base_count(Side::Opponent), 1);
    }

    #[test]
    fn test_base_crossing_without_landing_is_no_extra_turn() {
        // Two pieces from area 5: first lands in the player base, second
        // continues to area 6. Scored but no extra turn.
        let board = stacked(5, vec![Piece::mandragora(), Piece::mandragora()]);
        let outcome = execute_move(5, &board, Side::Player).unwrap();
        assert_eq!(outcome.scored.len(), 1);
        assert!(!outcome.extra_turn);
        assert_eq!(outcome.board.area(6).unwrap().pieces.len(), 1);
    }

    #[test]
    fn test_piece_conservation() {
        let board = stacked(
            2,
            vec![Piece::mandragora(); 9],
        );
        assert_eq!(board.total_pieces(), 9);
        let outcome = execute_move(2, &board, Side::Player).unwrap();
        assert_eq!(outcome.board.total_pieces(), 9);
        // Nine pieces from area 2 reach the player base exactly once.
        assert_eq!(outcome.board.base_count(Side::Player), 1);
        assert_eq!(outcome.scored.len(), 1);
    }

    #[test]
    fn test_input_board_is_untouched() {
        let board = stacked(1, vec![Piece::mandragora(); 3]);
        let before = board.clone();
        let _ = execute_move(1, &board, Side::Player).unwrap();
        assert_eq!(board, before);
    }
}
