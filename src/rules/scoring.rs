//! Point values for banked pieces.
//!
//! The common Mandragora is always worth 1. The four valuable kinds are
//! worth more to the side that moved *second* in the game, which is what
//! the `is_first_player` lens switches on. The flag is fixed per game; it
//! is not the turn flag.

use crate::board::{Piece, PieceKind};

/// Point value of a single banked piece.
///
/// | kind                   | first player | second player |
/// |------------------------|--------------|---------------|
/// | Mandragora             | 1            | 1             |
/// | Korrigan, Pachypodium  | 2            | 3             |
/// | Citrullus, Adenium     | 3            | 4             |
#[inline]
pub fn score_value(piece: &Piece, is_first_player: bool) -> u32 {
    match piece.kind {
        PieceKind::Mandragora => 1,
        PieceKind::Korrigan | PieceKind::Pachypodium => {
            if is_first_player {
                2
            } else {
                3
            }
        }
        PieceKind::Citrullus | PieceKind::Adenium => {
            if is_first_player {
                3
            } else {
                4
            }
        }
    }
}

/// Total point value of a collection of pieces under one lens
pub fn total_score(pieces: &[Piece], is_first_player: bool) -> u32 {
    pieces
        .iter()
        .map(|p| score_value(p, is_first_player))
        .sum()
}
