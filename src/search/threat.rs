//! Opponent-threat detection
//!
//! A candidate move is penalized when it hands the other side an
//! opportunity it did not already have. Opportunities are counted by
//! simulating every legal move the other side could make, once on the
//! board before the candidate and once after; only an increase counts.

use serde::Serialize;

use crate::board::{Board, Side};
use crate::rules::{execute_move, legal_sources};

/// Why a move is considered dangerous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Warning {
    /// The move opens a new extra-turn opportunity for the other side.
    GrantsExtraTurn,
    /// The move opens a new scoring opportunity for the other side.
    GrantsScoring,
}

impl Warning {
    /// Flat deduction applied to the move's raw value.
    #[must_use]
    pub fn deduction(self) -> f64 {
        match self {
            Warning::GrantsExtraTurn => -100.0,
            Warning::GrantsScoring => -80.0,
        }
    }

    /// Human-readable warning text.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Warning::GrantsExtraTurn => "grants opponent an extra move",
            Warning::GrantsScoring => "grants opponent scoring opportunity",
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Opportunities {
    extra_turns: usize,
    scoring: usize,
}

/// Count how many of `side`'s legal moves would earn an extra turn or
/// score at least one piece.
fn opportunities(board: &Board, side: Side) -> Opportunities {
    let mut found = Opportunities::default();
    for id in legal_sources(board, side) {
        if let Ok(outcome) = execute_move(id, board, side) {
            if outcome.extra_turn {
                found.extra_turns += 1;
            }
            if !outcome.scored.is_empty() {
                found.scoring += 1;
            }
        }
    }
    found
}

/// Compares the other side's opportunities on the `before` and `after`
/// boards of a candidate move by `side`.
///
/// Returns a warning only when the move *newly creates* an opportunity:
/// pre-existing threats are never blamed on the current move. Extra-turn
/// threats dominate scoring threats.
#[must_use]
pub fn opponent_threat_penalty(before: &Board, after: &Board, side: Side) -> Option<Warning> {
    let rival = side.opponent();
    let was = opportunities(before, rival);
    let now = opportunities(after, rival);
    if now.extra_turns > was.extra_turns {
        Some(Warning::GrantsExtraTurn)
    } else if now.scoring > was.scoring {
        Some(Warning::GrantsScoring)
    } else {
        None
    }
}
