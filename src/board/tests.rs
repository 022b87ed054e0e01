use super::*;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Player.opponent(), Side::Opponent);
    assert_eq!(Side::Opponent.opponent(), Side::Player);
}

#[test]
fn test_side_base_ids() {
    assert_eq!(Side::Player.base_id(), PLAYER_BASE);
    assert_eq!(Side::Opponent.base_id(), OPPONENT_BASE);
    assert_eq!(PLAYER_BASE, 0);
    assert_eq!(OPPONENT_BASE, 9);
}

#[test]
fn test_eligibility_permits() {
    assert!(Eligibility::Both.permits(Side::Player));
    assert!(Eligibility::Both.permits(Side::Opponent));
    assert!(Eligibility::Player.permits(Side::Player));
    assert!(!Eligibility::Player.permits(Side::Opponent));
    assert!(Eligibility::Opponent.permits(Side::Opponent));
    assert!(!Eligibility::Opponent.permits(Side::Player));
}

#[test]
fn test_standard_patterns_shape() {
    let patterns = BoardPattern::standard();
    assert_eq!(patterns.len(), 5);

    for pattern in &patterns {
        let ids: Vec<u8> = pattern.areas.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8], "{}", pattern.name);

        for area in &pattern.areas {
            assert_eq!(
                area.pieces.len(),
                3,
                "{} area {} should start with 3 pieces",
                pattern.name,
                area.id
            );
            let expected = match area.id {
                1 | 3 | 5 => Eligibility::Player,
                6 | 7 | 8 => Eligibility::Opponent,
                _ => Eligibility::Both,
            };
            assert_eq!(area.eligibility, expected);
        }
    }
}

#[test]
fn test_pattern_lookup() {
    assert!(BoardPattern::by_id("pattern-a").is_some());
    assert!(BoardPattern::by_id("pattern-e").is_some());
    assert!(BoardPattern::by_id("pattern-z").is_none());
}

#[test]
fn test_board_from_pattern() {
    let pattern = BoardPattern::by_id("pattern-a").unwrap();
    let board = Board::from_pattern(&pattern, Side::Player);

    assert_eq!(board.pieces_in_play(), 24);
    assert_eq!(board.total_pieces(), 24);
    assert_eq!(board.base_count(Side::Player), 0);
    assert_eq!(board.base_count(Side::Opponent), 0);
    assert!(board.is_first(Side::Player));
    assert!(!board.is_first(Side::Opponent));
}

#[test]
fn test_board_winner_tie() {
    let board = Board::default();
    assert_eq!(board.winner(), None, "empty scores should tie");
}

#[test]
fn test_pattern_serde_round_trip() {
    let pattern = BoardPattern::by_id("pattern-c").unwrap();
    let json = serde_json::to_string(&pattern).unwrap();
    let back: BoardPattern = serde_json::from_str(&json).unwrap();
    assert_eq!(pattern, back);
}
