//! Movement paths and distribution pattern calculation.
//!
//! Each side sows along its own fixed cyclic path. The two paths cross at
//! the shared areas 2 and 4 and contain their own base exactly once; the
//! other side's base never appears, so a sown piece can only ever reach
//! its mover's base.

use crate::board::Side;

/// Player path; position 0 is the player's base
pub const PLAYER_PATH: [u8; 11] = [1, 2, 3, 4, 5, 0, 6, 4, 7, 2, 8];

/// Opponent path; position 9 is the opponent's base
pub const OPPONENT_PATH: [u8; 11] = [6, 4, 7, 2, 8, 9, 1, 2, 3, 4, 5];

/// Movement path for a side
#[inline]
pub fn path_for(side: Side) -> &'static [u8; 11] {
    match side {
        Side::Player => &PLAYER_PATH,
        Side::Opponent => &OPPONENT_PATH,
    }
}

/// Compute the ordered destinations for sowing `piece_count` pieces
/// from `area_id` along `side`'s path.
///
/// The source is located at its *first* occurrence in the path (shared
/// areas appear twice); each piece then advances one step, wrapping
/// cyclically. With enough pieces the wrap revisits the source area —
/// that is an ordinary landing, not an error.
///
/// Returns an empty pattern for `piece_count == 0`.
pub fn distribution_pattern(area_id: u8, piece_count: usize, side: Side) -> Vec<u8> {
    if piece_count == 0 {
        return Vec::new();
    }

    let path = path_for(side);
    let Some(start) = path.iter().position(|&id| id == area_id) else {
        return Vec::new();
    };

    let mut pattern = Vec::with_capacity(piece_count);
    let mut index = start;
    for _ in 0..piece_count {
        index = (index + 1) % path.len();
        pattern.push(path[index]);
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{OPPONENT_BASE, PLAYER_BASE};

    #[test]
    fn test_paths_contain_own_base_once() {
        assert_eq!(
            PLAYER_PATH.iter().filter(|&&id| id == PLAYER_BASE).count(),
            1
        );
        assert_eq!(
            OPPONENT_PATH
                .iter()
                .filter(|&&id| id == OPPONENT_BASE)
                .count(),
            1
        );
        assert!(!PLAYER_PATH.contains(&OPPONENT_BASE));
        assert!(!OPPONENT_PATH.contains(&PLAYER_BASE));
    }

    #[test]
    fn test_shared_areas_2_and_4_appear_twice_per_path() {
        for id in 1..=8u8 {
            let in_player = PLAYER_PATH.iter().filter(|&&p| p == id).count();
            let in_opponent = OPPONENT_PATH.iter().filter(|&&p| p == id).count();
            let expected = if id == 2 || id == 4 { 2 } else { 1 };
            assert_eq!(in_player, expected, "area {id} in player path");
            assert_eq!(in_opponent, expected, "area {id} in opponent path");
        }
    }

    #[test]
    fn test_pattern_length_matches_count() {
        for count in 0..15 {
            let pattern = distribution_pattern(1, count, Side::Player);
            assert_eq!(pattern.len(), count);
        }
    }

    #[test]
    fn test_single_piece_from_area_5_hits_player_base() {
        assert_eq!(distribution_pattern(5, 1, Side::Player), vec![PLAYER_BASE]);
    }

    #[test]
    fn test_single_piece_from_area_8_hits_opponent_base() {
        assert_eq!(
            distribution_pattern(8, 1, Side::Opponent),
            vec![OPPONENT_BASE]
        );
    }

    #[test]
    fn test_basic_player_sequence() {
        assert_eq!(distribution_pattern(1, 4, Side::Player), vec![2, 3, 4, 5]);
        assert_eq!(
            distribution_pattern(5, 6, Side::Player),
            vec![0, 6, 4, 7, 2, 8]
        );
    }

    #[test]
    fn test_wraparound() {
        // Area 8 is the last element of the player path
        assert_eq!(distribution_pattern(8, 3, Side::Player), vec![1, 2, 3]);

        // A full lap lands the final piece back on the source
        let lap = distribution_pattern(1, PLAYER_PATH.len(), Side::Player);
        assert_eq!(lap.len(), PLAYER_PATH.len());
        assert_eq!(*lap.last().unwrap(), 1);
    }

    #[test]
    fn test_shared_area_uses_first_occurrence() {
        // Area 4 first appears at index 3 of the player path, not index 7
        assert_eq!(
            distribution_pattern(4, 4, Side::Player),
            vec![5, 0, 6, 4],
            "sowing from a shared area starts from its first path position"
        );
        // Area 2 first appears at index 3 of the opponent path
        assert_eq!(distribution_pattern(2, 2, Side::Opponent), vec![8, 9]);
    }
}
