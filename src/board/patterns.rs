//! Named starting layouts.
//!
//! Patterns are configuration, not rules: the engine consumes whichever
//! pattern the caller picks to seed a [`Board`](super::Board), and callers
//! may author additional patterns as data (they round-trip through serde).
//!
//! Every standard pattern places three pieces in each of the eight playable
//! areas — 24 pieces total — with the fixed eligibility layout: areas 1, 3
//! and 5 belong to the player, 6, 7 and 8 to the opponent, and 2 and 4 are
//! shared.

use serde::{Deserialize, Serialize};

use super::board::Area;
use super::eligibility_of;
use super::piece::{Piece, PieceColor, PieceKind};

/// A named starting layout for the eight playable areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPattern {
    pub id: String,
    pub name: String,
    pub areas: Vec<Area>,
}

impl BoardPattern {
    /// The five standard patterns, A through E
    pub fn standard() -> Vec<BoardPattern> {
        vec![
            pattern_a(),
            pattern_b(),
            pattern_c(),
            pattern_d(),
            pattern_e(),
        ]
    }

    /// Look up a standard pattern by id (e.g. `"pattern-c"`)
    pub fn by_id(id: &str) -> Option<BoardPattern> {
        Self::standard().into_iter().find(|p| p.id == id)
    }
}

fn area(id: u8, pieces: Vec<Piece>) -> Area {
    Area::new(id, eligibility_of(id), pieces)
}

/// Three plain white Mandragoras
fn plain() -> Vec<Piece> {
    vec![Piece::mandragora(); 3]
}

/// Valuable piece in the middle: Mandragora, X, Mandragora
fn centered(kind: PieceKind, color: PieceColor) -> Vec<Piece> {
    vec![
        Piece::mandragora(),
        Piece::new(kind, color),
        Piece::mandragora(),
    ]
}

/// Valuable pieces on the outside: X, Mandragora, X
fn flanked(kind: PieceKind, color: PieceColor) -> Vec<Piece> {
    vec![
        Piece::new(kind, color),
        Piece::mandragora(),
        Piece::new(kind, color),
    ]
}

fn pattern_a() -> BoardPattern {
    BoardPattern {
        id: "pattern-a".into(),
        name: "Pattern A".into(),
        areas: vec![
            area(1, centered(PieceKind::Citrullus, PieceColor::Green)),
            area(2, plain()),
            area(3, flanked(PieceKind::Pachypodium, PieceColor::Black)),
            area(4, plain()),
            area(5, plain()),
            area(6, centered(PieceKind::Adenium, PieceColor::Pink)),
            area(7, flanked(PieceKind::Korrigan, PieceColor::Black)),
            area(8, plain()),
        ],
    }
}

fn pattern_b() -> BoardPattern {
    BoardPattern {
        id: "pattern-b".into(),
        name: "Pattern B".into(),
        areas: vec![
            area(1, plain()),
            area(2, centered(PieceKind::Citrullus, PieceColor::Green)),
            area(3, plain()),
            area(4, centered(PieceKind::Adenium, PieceColor::Pink)),
            area(5, flanked(PieceKind::Pachypodium, PieceColor::Black)),
            area(6, plain()),
            area(7, plain()),
            area(8, flanked(PieceKind::Korrigan, PieceColor::Black)),
        ],
    }
}

fn pattern_c() -> BoardPattern {
    BoardPattern {
        id: "pattern-c".into(),
        name: "Pattern C".into(),
        areas: vec![
            area(1, plain()),
            area(2, centered(PieceKind::Citrullus, PieceColor::Green)),
            area(3, flanked(PieceKind::Pachypodium, PieceColor::Black)),
            area(4, centered(PieceKind::Adenium, PieceColor::Pink)),
            area(5, plain()),
            area(6, plain()),
            area(7, flanked(PieceKind::Korrigan, PieceColor::Black)),
            area(8, plain()),
        ],
    }
}

fn pattern_d() -> BoardPattern {
    BoardPattern {
        id: "pattern-d".into(),
        name: "Pattern D".into(),
        areas: vec![
            area(1, plain()),
            area(
                2,
                vec![
                    Piece::new(PieceKind::Pachypodium, PieceColor::Black),
                    Piece::mandragora(),
                    Piece::new(PieceKind::Korrigan, PieceColor::Black),
                ],
            ),
            area(3, centered(PieceKind::Citrullus, PieceColor::Green)),
            area(4, flanked(PieceKind::Korrigan, PieceColor::Black)),
            area(5, plain()),
            area(6, plain()),
            area(7, centered(PieceKind::Adenium, PieceColor::Pink)),
            area(8, plain()),
        ],
    }
}

fn pattern_e() -> BoardPattern {
    BoardPattern {
        id: "pattern-e".into(),
        name: "Pattern E".into(),
        areas: vec![
            area(1, flanked(PieceKind::Pachypodium, PieceColor::Black)),
            area(2, plain()),
            area(3, centered(PieceKind::Citrullus, PieceColor::Green)),
            area(4, plain()),
            area(5, plain()),
            area(6, flanked(PieceKind::Korrigan, PieceColor::Black)),
            area(7, centered(PieceKind::Adenium, PieceColor::Pink)),
            area(8, plain()),
        ],
    }
}
