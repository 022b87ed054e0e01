//! Analyzer facade tying the rule engine and search together
//!
//! This module provides the main entry point for move recommendation. The
//! analyzer evaluates every legal move through the full pipeline (immediate
//! scoring, strategic deltas, opponent-threat penalty, bounded look-ahead)
//! and ranks the results.
//!
//! # Example
//!
//! ```
//! use mandragora::{Analyzer, Board, BoardPattern, Side};
//!
//! let patterns = BoardPattern::standard();
//! let board = Board::from_pattern(&patterns[0], Side::Player);
//!
//! let analyzer = Analyzer::new();
//! if let Some(best) = analyzer.best_move(&board, Side::Player) {
//!     println!("play area {}: {}", best.area_id, best.explanation());
//! }
//! ```

use tracing::debug;

use crate::board::{Board, Side};
use crate::search::analyzer::analyze_moves_with;
use crate::search::{MoveAnalysis, DISCOUNT_FACTOR, MAX_DEPTH};

/// Tunable search parameters.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    /// Total look-ahead depth in plies, root move included.
    pub max_depth: u8,
    /// Weight applied to each deeper ply's value.
    pub discount: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            discount: DISCOUNT_FACTOR,
        }
    }
}

/// Move recommendation engine.
///
/// Stateless between calls: each analysis is a pure function of the board
/// and the side to move, so one analyzer can serve any number of games.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with the default depth and discount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with explicit search parameters.
    #[must_use]
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Evaluate every legal move for `side`, in area order.
    #[must_use]
    pub fn analyze(&self, board: &Board, side: Side) -> Vec<MoveAnalysis> {
        let analyses =
            analyze_moves_with(board, side, self.config.max_depth, self.config.discount);
        debug!(
            ?side,
            candidates = analyses.len(),
            depth = self.config.max_depth,
            "analysis complete"
        );
        analyses
    }

    /// Evaluate and rank: highest value first, ties broken by area order.
    #[must_use]
    pub fn ranked(&self, board: &Board, side: Side) -> Vec<MoveAnalysis> {
        let mut analyses = self.analyze(board, side);
        // Stable sort keeps area-id enumeration order within equal values.
        analyses.sort_by(|a, b| {
            b.total_value
                .partial_cmp(&a.total_value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        analyses
    }

    /// The recommended move, or `None` when `side` has no legal move.
    #[must_use]
    pub fn best_move(&self, board: &Board, side: Side) -> Option<MoveAnalysis> {
        self.ranked(board, side).into_iter().next()
    }
}
