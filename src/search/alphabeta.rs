//! Depth-bounded adversarial look-ahead with alpha-beta pruning
//!
//! The look-ahead explores move sequences from a position, alternating
//! the acting side each ply except when a move earns an extra turn, in
//! which case the same side acts again. All values are scored from the
//! analyzed side's perspective: that side maximizes, the adversary
//! minimizes the same scale. Alpha-beta pruning cuts dominated branches.

use crate::board::{Board, Side};
use crate::eval::evaluate;
use crate::rules::{execute_move, legal_sources, total_score};
use crate::search::threat::{opponent_threat_penalty, Warning};

/// Total search depth in plies, counted from the analyzer's root move.
pub const MAX_DEPTH: u8 = 3;

/// Weight applied to a child ply's value before adding it to its parent.
pub const DISCOUNT_FACTOR: f64 = 0.8;

/// Bonus for a move that earns an extra turn.
pub(crate) const EXTRA_TURN_BONUS: f64 = 90.0;

/// Weight on immediate points scored by a move.
pub(crate) const IMMEDIATE_WEIGHT: f64 = 10.0;

/// Value of a subtree, plus the warning that position forces, if any.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lookahead {
    pub value: f64,
    pub warning: Option<Warning>,
}

/// Immediate value of a single move outcome, before any recursion:
/// scored points, extra-turn bonus, and threat deduction.
pub(crate) fn immediate_value(
    before: &Board,
    after: &Board,
    scored_points: u32,
    extra_turn: bool,
    side: Side,
) -> (f64, Option<Warning>) {
    let warning = opponent_threat_penalty(before, after, side);
    let mut value = f64::from(scored_points) * IMMEDIATE_WEIGHT;
    if extra_turn {
        value += EXTRA_TURN_BONUS;
    }
    if let Some(w) = warning {
        value += w.deduction();
    }
    (value, warning)
}

/// Recursive alpha-beta over the remaining `depth` plies.
///
/// `analyzed` is the side the whole search evaluates for; `to_act` is the
/// side moving at this ply. At the depth limit, or when `to_act` is stuck,
/// the position is scored statically from `analyzed`'s perspective.
///
/// Warning propagation: a ply where `analyzed` acts reports a warning only
/// when *every* legal move there carries its own threat penalty (the
/// position forces a dangerous move). An adversary ply passes through the
/// warning of the branch it picks.
pub(crate) fn lookahead(
    board: &Board,
    to_act: Side,
    analyzed: Side,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    discount: f64,
) -> Lookahead {
    let sources = legal_sources(board, to_act);
    if depth == 0 || sources.is_empty() {
        return Lookahead {
            value: f64::from(evaluate(board, analyzed)),
            warning: None,
        };
    }

    let maximizing = to_act == analyzed;
    let is_first = board.is_first(to_act);
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_own_warning = None;
    let mut best_child_warning = None;
    let mut all_penalized = true;

    for id in sources {
        let Ok(outcome) = execute_move(id, board, to_act) else {
            continue;
        };
        let points = total_score(&outcome.scored, is_first);
        let (local, own_warning) =
            immediate_value(board, &outcome.board, points, outcome.extra_turn, to_act);
        if own_warning.is_none() {
            all_penalized = false;
        }
        let signed = if maximizing { local } else { -local };

        let next = if outcome.extra_turn {
            to_act
        } else {
            to_act.opponent()
        };
        let child = lookahead(&outcome.board, next, analyzed, depth - 1, alpha, beta, discount);
        let value = signed + discount * child.value;

        if maximizing {
            if value > best {
                best = value;
                best_own_warning = own_warning;
                best_child_warning = child.warning;
            }
            alpha = alpha.max(best);
        } else {
            if value < best {
                best = value;
                best_own_warning = own_warning;
                best_child_warning = child.warning;
            }
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    let warning = if maximizing {
        if all_penalized {
            best_own_warning
        } else {
            None
        }
    } else {
        best_child_warning
    };
    Lookahead {
        value: best,
        warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn board_with(placements: &[(u8, usize)]) -> Board {
        let mut board = Board::default();
        for &(id, count) in placements {
            for _ in 0..count {
                board.area_mut(id).unwrap().pieces.push(Piece::mandragora());
            }
        }
        board
    }

    fn search(board: &Board, to_act: Side, analyzed: Side, depth: u8) -> Lookahead {
        lookahead(
            board,
            to_act,
            analyzed,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            DISCOUNT_FACTOR,
        )
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let mut board = board_with(&[(1, 2)]);
        board.bank(Side::Player, Piece::mandragora());
        let result = search(&board, Side::Player, Side::Player, 0);
        assert_eq!(result.value, f64::from(evaluate(&board, Side::Player)));
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_stuck_side_is_static_eval() {
        // Opponent to act with no legal source.
        let board = board_with(&[(1, 1)]);
        let result = search(&board, Side::Opponent, Side::Player, 2);
        assert_eq!(result.value, f64::from(evaluate(&board, Side::Player)));
    }

    #[test]
    fn test_scoring_line_beats_idle_line() {
        // Player can score from area 5 or shuffle from area 1. The scoring
        // line must dominate at any depth.
        let board = board_with(&[(5, 1), (1, 1)]);
        let deep = search(&board, Side::Player, Side::Player, 2);
        let idle = board_with(&[(1, 1)]);
        let idle_deep = search(&idle, Side::Player, Side::Player, 2);
        assert!(deep.value > idle_deep.value);
    }

    #[test]
    fn test_adversary_ply_minimizes() {
        // Opponent to act, able to score immediately: the value from the
        // player's perspective must go negative.
        let board = board_with(&[(8, 1)]);
        let result = search(&board, Side::Opponent, Side::Player, 2);
        assert!(result.value < 0.0);
    }

    #[test]
    fn test_immediate_value_components() {
        let before = Board::default();
        let after = Board::default();
        let (value, warning) = immediate_value(&before, &after, 2, true, Side::Player);
        assert_eq!(value, 2.0 * IMMEDIATE_WEIGHT + EXTRA_TURN_BONUS);
        assert!(warning.is_none());
    }
}
