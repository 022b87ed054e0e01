//! Per-move evaluation pipeline
//!
//! [`analyze_moves`] produces one [`MoveAnalysis`] per legal source area.
//! Each candidate is scored by simulating it, adding the immediate and
//! extra-turn terms, four strategic delta bonuses, the opponent-threat
//! deduction, and a discounted look-ahead value, then normalizing the
//! total into [-100, 100] with the sign communicating safety.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::board::{Board, Side};
use crate::eval::{average_piece_value, board_presence, flexibility, perfect_move_count};
use crate::rules::{execute_move, legal_sources, total_score};
use crate::search::alphabeta::{
    immediate_value, lookahead, DISCOUNT_FACTOR, MAX_DEPTH,
};
use crate::search::threat::Warning;

/// Weight on the board-presence delta.
const PRESENCE_WEIGHT: f64 = 5.0;
/// Weight on the future-perfect-moves delta.
const PERFECT_MOVES_WEIGHT: f64 = 20.0;
/// Weight on the average-piece-value delta.
const PIECE_VALUE_WEIGHT: f64 = 20.0;
/// Weight on the flexibility delta.
const FLEXIBILITY_WEIGHT: f64 = 3.0;

/// Full evaluation of one candidate move.
///
/// Every contributing factor is kept as a numeric field; the explanation
/// string is rendered only at the boundary.
#[derive(Debug, Clone, Serialize)]
pub struct MoveAnalysis {
    /// Source area of the candidate move.
    pub area_id: u8,
    /// Normalized value in [-100, 100]. Non-positive iff a warning is
    /// attached, non-negative otherwise.
    pub total_value: f64,
    /// Points the move scores immediately.
    pub immediate_points: u32,
    /// Whether the move earns an extra turn.
    pub extra_turn: bool,
    /// Change in the mover's board presence.
    pub presence_delta: i32,
    /// Change in the mover's count of extra-turn-yielding sources.
    pub perfect_moves_delta: i32,
    /// Change in the mean piece value across the mover's territory.
    pub piece_value_delta: f64,
    /// Change in the mover's count of legal sources.
    pub flexibility_delta: i32,
    /// Discounted look-ahead value of the resulting position.
    pub future_value: f64,
    /// Threat warning, from this move or forced further down the line.
    pub warning: Option<Warning>,
}

impl MoveAnalysis {
    /// Renders the factor-by-factor explanation of this evaluation.
    ///
    /// Every factor is reported, in pipeline order, even when its delta
    /// is zero; the extra-turn marker appears only when earned.
    #[must_use]
    pub fn explanation(&self) -> String {
        let mut parts = Vec::new();
        let plural = if self.immediate_points == 1 { "" } else { "s" };
        parts.push(format!("gains {} point{plural}", self.immediate_points));
        if self.extra_turn {
            parts.push("EXTRA TURN".to_string());
        }
        parts.push(format!("board presence {:+}", self.presence_delta));
        parts.push(format!("perfect moves {:+}", self.perfect_moves_delta));
        parts.push(format!("avg piece value {:+.2}", self.piece_value_delta));
        parts.push(format!("flexibility {:+}", self.flexibility_delta));
        parts.push(format!("future value {:.1}", self.future_value));
        let mut text = parts.join(", ");
        if let Some(warning) = self.warning {
            text.push_str(" WARNING: ");
            text.push_str(warning.message());
        }
        text
    }
}

impl fmt::Display for MoveAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "area {}: {:.1} ({})",
            self.area_id,
            self.total_value,
            self.explanation()
        )
    }
}

/// Clamp into [-100, 100]; a penalized move can never present as
/// positive, a clean move never as negative.
fn normalize(raw: f64, penalized: bool) -> f64 {
    let clamped = raw.clamp(-100.0, 100.0);
    if penalized {
        clamped.min(0.0)
    } else {
        clamped.max(0.0)
    }
}

/// Evaluates every legal move for `side`, with the default search depth
/// and discount.
///
/// Pure and read-only over `board`. Returns one entry per legal source in
/// area order, or an empty list when the side is stuck. Output is not
/// sorted; callers rank by `total_value` descending.
#[must_use]
pub fn analyze_moves(board: &Board, side: Side) -> Vec<MoveAnalysis> {
    analyze_moves_with(board, side, MAX_DEPTH, DISCOUNT_FACTOR)
}

/// [`analyze_moves`] with explicit depth and discount.
pub(crate) fn analyze_moves_with(
    board: &Board,
    side: Side,
    max_depth: u8,
    discount: f64,
) -> Vec<MoveAnalysis> {
    let is_first = board.is_first(side);
    let presence_before = board_presence(board, side) as i32;
    let perfect_before = perfect_move_count(board, side) as i32;
    let value_before = average_piece_value(board, side);
    let flexibility_before = flexibility(board, side) as i32;

    let mut analyses = Vec::new();
    for id in legal_sources(board, side) {
        let Ok(outcome) = execute_move(id, board, side) else {
            continue;
        };
        let after = &outcome.board;

        let immediate_points = total_score(&outcome.scored, is_first);
        let (local, own_warning) =
            immediate_value(board, after, immediate_points, outcome.extra_turn, side);

        let presence_delta = board_presence(after, side) as i32 - presence_before;
        let perfect_moves_delta = perfect_move_count(after, side) as i32 - perfect_before;
        let piece_value_delta = average_piece_value(after, side) - value_before;
        let flexibility_delta = flexibility(after, side) as i32 - flexibility_before;

        let next = if outcome.extra_turn {
            side
        } else {
            side.opponent()
        };
        let deeper = lookahead(
            after,
            next,
            side,
            max_depth.saturating_sub(1),
            f64::NEG_INFINITY,
            f64::INFINITY,
            discount,
        );
        let future_value = discount * deeper.value;

        let raw = local
            + f64::from(presence_delta) * PRESENCE_WEIGHT
            + f64::from(perfect_moves_delta) * PERFECT_MOVES_WEIGHT
            + piece_value_delta * PIECE_VALUE_WEIGHT
            + f64::from(flexibility_delta) * FLEXIBILITY_WEIGHT
            + future_value;

        let warning = own_warning.or(deeper.warning);
        let total_value = normalize(raw, warning.is_some());
        trace!(
            area = id,
            raw,
            total_value,
            ?warning,
            "candidate move evaluated"
        );

        analyses.push(MoveAnalysis {
            area_id: id,
            total_value,
            immediate_points,
            extra_turn: outcome.extra_turn,
            presence_delta,
            perfect_moves_delta,
            piece_value_delta,
            flexibility_delta,
            future_value,
            warning,
        });
    }
    analyses
}
