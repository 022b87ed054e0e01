//! Piece kinds and colors

use serde::{Deserialize, Serialize};

/// The five piece kinds.
///
/// `Mandragora` is the common low-value kind; the four named kinds are
/// worth more, with their exact value depending on whether the side that
/// banks them moved first in the game (see [`crate::rules::score_value`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Mandragora,
    Korrigan,
    Pachypodium,
    Citrullus,
    Adenium,
}

/// Cosmetic piece color, carried through from the starting pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    Pink,
    Green,
    Black,
    White,
}

/// An immutable game piece.
///
/// Pieces carry no identity beyond kind and color; equality is structural.
/// They are created at pattern setup and only ever relocated between area
/// stacks or banked into a side's base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    #[inline]
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// A plain white Mandragora, the filler piece of every pattern
    #[inline]
    pub fn mandragora() -> Self {
        Self::new(PieceKind::Mandragora, PieceColor::White)
    }
}
