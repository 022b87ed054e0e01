//! Mandragora Mania game engine
//!
//! A complete rules-and-AI core for Mandragora Mania, a two-player
//! mancala-style stacking game:
//! - 8 playable areas plus one base per side, with two shared areas
//! - Fixed directional movement paths, one per side, with LIFO sowing
//! - Pieces landing in the mover's base score immediately; landing the
//!   final piece there earns an extra turn
//! - Asymmetric piece values keyed on which side moved first
//!
//! # Architecture
//!
//! - [`board`]: Areas, pieces, board state, and the standard starting
//!   patterns
//! - [`rules`]: Movement paths, move validity and execution, scoring
//! - [`eval`]: Strategic metrics and phase-aware static evaluation
//! - [`search`]: Threat detection, alpha-beta look-ahead, move analysis
//! - [`engine`]: The [`Analyzer`] facade with ranked recommendations
//!
//! # Quick Start
//!
//! ```
//! use mandragora::{Analyzer, Board, BoardPattern, Side};
//! use mandragora::rules::execute_move;
//!
//! let patterns = BoardPattern::standard();
//! let mut board = Board::from_pattern(&patterns[0], Side::Player);
//!
//! let analyzer = Analyzer::new();
//! if let Some(best) = analyzer.best_move(&board, Side::Player) {
//!     let outcome = execute_move(best.area_id, &board, Side::Player).unwrap();
//!     board = outcome.board;
//!     println!("played area {}, scored {} pieces", best.area_id, outcome.scored.len());
//! }
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Area, Board, BoardPattern, Piece, PieceColor, PieceKind, Side};
pub use engine::{Analyzer, AnalyzerConfig};
pub use error::InvalidMove;
pub use search::{analyze_moves, MoveAnalysis, Warning};
