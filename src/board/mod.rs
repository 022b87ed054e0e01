//! Board representation for Mandragora Mania

pub mod board;
pub mod patterns;
pub mod piece;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Area, Board};
pub use patterns::BoardPattern;
pub use piece::{Piece, PieceColor, PieceKind};

use serde::{Deserialize, Serialize};

/// Number of playable areas (ids 1..=8)
pub const PLAYABLE_AREAS: usize = 8;

/// Base position id for the player side
pub const PLAYER_BASE: u8 = 0;
/// Base position id for the opponent side
pub const OPPONENT_BASE: u8 = 9;

/// The two sides of the game.
///
/// The labels are path-relative: `Player` is the side whose base is
/// position 0, `Opponent` the side whose base is position 9. Which of
/// them moved first in the game is a separate per-game flag carried by
/// [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Base position id for this side (0 or 9)
    #[inline]
    pub fn base_id(self) -> u8 {
        match self {
            Side::Player => PLAYER_BASE,
            Side::Opponent => OPPONENT_BASE,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

/// Which side may move from an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Eligibility {
    Player,
    Opponent,
    Both,
}

impl Eligibility {
    /// Check whether `side` may move from an area with this eligibility
    #[inline]
    pub fn permits(self, side: Side) -> bool {
        match self {
            Eligibility::Both => true,
            Eligibility::Player => side == Side::Player,
            Eligibility::Opponent => side == Side::Opponent,
        }
    }
}

/// Eligibility of a playable area id in the fixed board layout: 1, 3 and
/// 5 belong to the player, 6, 7 and 8 to the opponent, 2 and 4 are shared.
#[must_use]
pub fn eligibility_of(id: u8) -> Eligibility {
    match id {
        1 | 3 | 5 => Eligibility::Player,
        6 | 7 | 8 => Eligibility::Opponent,
        _ => Eligibility::Both,
    }
}
