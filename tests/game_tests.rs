use connect_four::{GameSession, GameStatus, MoveError, Player, TurnOutcome, TOTAL_CELLS};

/// Column order that fills the whole board, X first, without ever forming
/// four in a row.
const DRAW_SEQUENCE: [usize; 42] = [
    2, 0, 2, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 2, 1, 4, 2, 2, 3, 2, 3, 3, 3, 3, 6, 3, 6, 4, 4, 4, 4,
    5, 4, 5, 5, 5, 5, 6, 6, 6, 5, 6,
];

#[test]
fn test_session_starts_with_requested_player() {
    let session = GameSession::new(Player::O);
    assert_eq!(session.current_player(), Player::O);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.moves(), 0);

    assert_eq!(GameSession::default().current_player(), Player::X);
}

#[test]
fn test_players_alternate_after_each_move() {
    let mut session = GameSession::default();
    assert_eq!(
        session.play_turn(3).unwrap(),
        TurnOutcome::Placed { row: 5, col: 3 }
    );
    assert_eq!(session.current_player(), Player::O);
    assert_eq!(
        session.play_turn(3).unwrap(),
        TurnOutcome::Placed { row: 4, col: 3 }
    );
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.moves(), 2);
}

#[test]
fn test_full_column_keeps_the_same_player() {
    let mut session = GameSession::default();
    for _ in 0..6 {
        session.play_turn(0).unwrap();
    }
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.play_turn(0), Err(MoveError::ColumnFull));
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.moves(), 6);
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_invalid_column_keeps_the_same_player() {
    let mut session = GameSession::default();
    assert_eq!(session.play_turn(9), Err(MoveError::InvalidColumn));
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_vertical_win_ends_the_game() {
    let mut session = GameSession::default();
    for col in [0, 1, 0, 1, 0, 1] {
        assert!(matches!(
            session.play_turn(col).unwrap(),
            TurnOutcome::Placed { .. }
        ));
    }
    assert_eq!(
        session.play_turn(0).unwrap(),
        TurnOutcome::Won {
            player: Player::X,
            row: 2,
            col: 0
        }
    );
    assert_eq!(session.status(), GameStatus::Won(Player::X));
    // winner stays current, nothing more is accepted
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.play_turn(4), Err(MoveError::GameOver));
    assert_eq!(session.moves(), 7);
}

#[test]
fn test_second_player_can_win() {
    let mut session = GameSession::default();
    for col in [6, 0, 6, 1, 5, 2, 6] {
        session.play_turn(col).unwrap();
    }
    assert!(matches!(
        session.play_turn(3).unwrap(),
        TurnOutcome::Won {
            player: Player::O,
            ..
        }
    ));
    assert_eq!(session.status(), GameStatus::Won(Player::O));
}

#[test]
fn test_full_board_without_winner_is_a_draw() {
    let mut session = GameSession::default();
    let (last, rest) = DRAW_SEQUENCE.split_last().unwrap();
    for &col in rest {
        assert!(matches!(
            session.play_turn(col).unwrap(),
            TurnOutcome::Placed { .. }
        ));
    }
    assert_eq!(
        session.play_turn(*last).unwrap(),
        TurnOutcome::Draw { row: 0, col: 6 }
    );
    assert_eq!(session.status(), GameStatus::Draw);
    assert_eq!(session.moves(), TOTAL_CELLS);
    assert!(session.board().is_full());
    assert_eq!(session.play_turn(0), Err(MoveError::GameOver));
}
