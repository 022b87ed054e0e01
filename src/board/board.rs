//! Board state: playable areas plus the two base stores

use serde::{Deserialize, Serialize};

use super::patterns::BoardPattern;
use super::piece::Piece;
use super::{eligibility_of, Eligibility, Side, PLAYABLE_AREAS};
use crate::rules::score_value;

/// One playable area.
///
/// `pieces` is an ordered stack: the last-pushed piece is the first one
/// distributed when the area is moved from (LIFO).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: u8,
    pub eligibility: Eligibility,
    pub pieces: Vec<Piece>,
}

impl Area {
    pub fn new(id: u8, eligibility: Eligibility, pieces: Vec<Piece>) -> Self {
        Self {
            id,
            eligibility,
            pieces,
        }
    }
}

/// Full board state at a point in time.
///
/// A board is a pure value: cloning gives an independent snapshot, which
/// the search relies on so hypothetical branches never alias each other.
/// The two bases never hold pieces in transit — a piece arriving at its
/// mover's base is banked into that side's `scored` store immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    areas: Vec<Area>,
    scored: [Vec<Piece>; 2],
    first_mover: Side,
}

impl Board {
    /// Build a board from a starting pattern.
    ///
    /// `first_mover` records which side moves first in this game; it fixes
    /// the scoring lens for both sides for the whole game.
    pub fn from_pattern(pattern: &BoardPattern, first_mover: Side) -> Self {
        Self {
            areas: pattern.areas.clone(),
            scored: [Vec::new(), Vec::new()],
            first_mover,
        }
    }

    /// Get a playable area by id (1..=8)
    #[inline]
    pub fn area(&self, id: u8) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    #[inline]
    pub(crate) fn area_mut(&mut self, id: u8) -> Option<&mut Area> {
        self.areas.iter_mut().find(|a| a.id == id)
    }

    /// All playable areas, in their enumeration order
    #[inline]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Pieces already banked into `side`'s base
    #[inline]
    pub fn scored(&self, side: Side) -> &[Piece] {
        &self.scored[side.index()]
    }

    #[inline]
    pub(crate) fn bank(&mut self, side: Side, piece: Piece) {
        self.scored[side.index()].push(piece);
    }

    /// Number of pieces banked into `side`'s base
    #[inline]
    pub fn base_count(&self, side: Side) -> usize {
        self.scored[side.index()].len()
    }

    /// Which side moved first in this game
    #[inline]
    pub fn first_mover(&self) -> Side {
        self.first_mover
    }

    /// Whether `side` is the first mover of this game
    #[inline]
    pub fn is_first(&self, side: Side) -> bool {
        side == self.first_mover
    }

    /// Total pieces still in play (in playable areas, not yet banked)
    #[inline]
    pub fn pieces_in_play(&self) -> usize {
        self.areas.iter().map(|a| a.pieces.len()).sum()
    }

    /// Total pieces in existence: in play plus banked on both sides.
    /// Invariant over the lifetime of a game.
    #[inline]
    pub fn total_pieces(&self) -> usize {
        self.pieces_in_play() + self.scored[0].len() + self.scored[1].len()
    }

    /// Final point total for `side` under its first/second-player lens
    pub fn final_score(&self, side: Side) -> u32 {
        let is_first = self.is_first(side);
        self.scored(side)
            .iter()
            .map(|p| score_value(p, is_first))
            .sum()
    }

    /// Winner by final score, or `None` on a tie
    pub fn winner(&self) -> Option<Side> {
        let player = self.final_score(Side::Player);
        let opponent = self.final_score(Side::Opponent);
        match player.cmp(&opponent) {
            std::cmp::Ordering::Greater => Some(Side::Player),
            std::cmp::Ordering::Less => Some(Side::Opponent),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            areas: (1..=PLAYABLE_AREAS as u8)
                .map(|id| Area::new(id, eligibility_of(id), Vec::new()))
                .collect(),
            scored: [Vec::new(), Vec::new()],
            first_mover: Side::Player,
        }
    }
}
