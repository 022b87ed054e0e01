//! Error taxonomy for the rule engine

use thiserror::Error;

use crate::board::Side;

/// A move that violates the rule engine's preconditions.
///
/// Callers are expected to pre-check with
/// [`is_valid_move`](crate::rules::is_valid_move); hitting one of these in
/// normal operation is a contract violation, not a recoverable game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("area {0} does not exist")]
    NoSuchArea(u8),
    #[error("area {0} has no pieces to move")]
    EmptyArea(u8),
    #[error("area {area} is not open to {side:?}")]
    WrongSide { area: u8, side: Side },
}
