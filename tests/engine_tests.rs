//! GameEngine tests - rules, scenarios and lifecycle

use tui_tictactoe::core::{combo_count, GameEngine, GameError, GameStatus};
use tui_tictactoe::types::{Color, Move, Player, Position};

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Play moves with alternating labels the way a UI would.
fn play_sequence(engine: &mut GameEngine, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        let mv = Move::new(row, col, engine.current_player().label.clone());
        assert!(engine.is_valid_move(&mv), "move at ({}, {}) should be valid", row, col);
        engine.process_move(mv).unwrap();
        if !engine.has_winner() && !engine.is_tied() {
            engine.toggle_player();
        }
    }
}

#[test]
fn test_row_win_scenario() {
    let mut engine = GameEngine::new(3).unwrap();
    play_sequence(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert!(engine.has_winner());
    assert!(!engine.is_tied());
    assert_eq!(engine.winning_combo(), &[p(0, 0), p(0, 1), p(0, 2)]);
    assert_eq!(engine.current_player().label, "X");
}

#[test]
fn test_tie_scenario() {
    let mut engine = GameEngine::new(3).unwrap();
    play_sequence(
        &mut engine,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert!(engine.is_tied());
    assert!(!engine.has_winner());
    assert!(engine.winning_combo().is_empty());
    assert_eq!(engine.status(), GameStatus::Tied);
}

#[test]
fn test_offset_diagonal_on_large_board() {
    let mut offset = GameEngine::new(5).unwrap();
    for i in 1..=3 {
        offset.process_move(Move::new(i, i, "X")).unwrap();
    }
    assert!(offset.has_winner());
    assert_eq!(offset.winning_combo(), &[p(1, 1), p(2, 2), p(3, 3)]);

    let mut corner = GameEngine::new(5).unwrap();
    for i in 0..3 {
        corner.process_move(Move::new(i, i, "X")).unwrap();
    }
    assert!(corner.has_winner());
    assert_eq!(corner.winning_combo(), &[p(0, 0), p(1, 1), p(2, 2)]);
}

#[test]
fn test_anti_diagonal_near_edge() {
    let mut engine = GameEngine::new(6).unwrap();
    for (row, col) in [(3, 5), (4, 4), (5, 3)] {
        engine.process_move(Move::new(row, col, "O")).unwrap();
    }
    assert!(engine.has_winner());
    assert_eq!(engine.winning_combo(), &[p(3, 5), p(4, 4), p(5, 3)]);
}

#[test]
fn test_every_combo_wins_on_its_own() {
    for size in [3, 4, 5, 7] {
        let template = GameEngine::new(size).unwrap();
        assert_eq!(template.winning_combos().len(), combo_count(size));
        for combo in template.winning_combos() {
            let mut engine = GameEngine::new(size).unwrap();
            for pos in combo {
                assert!(!engine.has_winner());
                engine.process_move(Move::at(*pos, "O")).unwrap();
            }
            assert!(engine.has_winner(), "{:?} on {}x{}", combo, size, size);
            assert_eq!(engine.winning_combo(), combo.as_slice());
        }
    }
}

#[test]
fn test_mixed_line_does_not_win() {
    let mut engine = GameEngine::new(4).unwrap();
    engine.process_move(Move::new(0, 0, "X")).unwrap();
    engine.process_move(Move::new(0, 1, "O")).unwrap();
    engine.process_move(Move::new(0, 2, "X")).unwrap();
    engine.process_move(Move::new(0, 3, "X")).unwrap();
    assert!(!engine.has_winner());
}

#[test]
fn test_no_moves_accepted_after_win() {
    let mut engine = GameEngine::new(4).unwrap();
    play_sequence(&mut engine, &[(0, 0), (3, 3), (1, 0), (3, 2), (2, 0)]);
    assert!(engine.has_winner());

    for row in 0..4 {
        for col in 0..4 {
            assert!(!engine.is_valid_move(&Move::new(row, col, "O")));
        }
    }
}

#[test]
fn test_occupied_cell_is_invalid_for_either_label() {
    let mut engine = GameEngine::new(3).unwrap();
    engine.process_move(Move::new(1, 1, "X")).unwrap();
    assert!(!engine.is_valid_move(&Move::new(1, 1, "X")));
    assert!(!engine.is_valid_move(&Move::new(1, 1, "O")));
    assert!(engine.is_valid_move(&Move::new(1, 2, "X")));
}

#[test]
fn test_is_valid_move_ignores_label_mismatch() {
    let engine = GameEngine::new(3).unwrap();
    assert_eq!(engine.current_player().label, "X");
    assert!(engine.is_valid_move(&Move::new(0, 0, "O")));
}

#[test]
fn test_reset_keeps_scores() {
    let mut engine = GameEngine::new(3).unwrap();
    play_sequence(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    engine.increment_score("X");
    engine.toggle_player();
    engine.set_current_player_color(Color::Yellow);

    engine.reset_game();

    assert!(!engine.has_winner());
    assert!(engine.winning_combo().is_empty());
    assert_eq!(engine.board().played_count(), 0);
    assert_eq!(engine.current_player(), &Player::x());
    assert_eq!(engine.next_player(), &Player::o());
    assert_eq!(engine.score("X"), 1);
    assert_eq!(engine.score("O"), 0);
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_scores_only_change_through_increment() {
    let mut engine = GameEngine::new(3).unwrap();
    play_sequence(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(engine.score("X"), 0);

    engine.increment_score("O");
    engine.increment_score("O");
    assert_eq!(engine.score("O"), 2);
    assert_eq!(engine.scores().total(), 2);
}

#[test]
fn test_new_board_size_means_fresh_scores() {
    let mut engine = GameEngine::new(3).unwrap();
    engine.increment_score("X");
    let engine = GameEngine::new(4).unwrap();
    assert_eq!(engine.score("X"), 0);
}

#[test]
fn test_invalid_sizes_and_coordinates() {
    assert!(matches!(GameEngine::new(1), Err(GameError::InvalidBoardSize { .. })));
    assert!(matches!(GameEngine::new(13), Err(GameError::InvalidBoardSize { .. })));

    let mut engine = GameEngine::new(3).unwrap();
    assert!(matches!(
        engine.process_move(Move::new(0, 7, "X")),
        Err(GameError::OutOfBounds { row: 0, col: 7, size: 3 })
    ));
}

#[test]
fn test_full_board_with_winner_is_not_a_tie() {
    let mut engine = GameEngine::new(3).unwrap();
    // X fills the last cell and completes the bottom row.
    let layout = [
        ["X", "O", "X"],
        ["O", "O", "X"],
        ["X", "X", ""],
    ];
    for (row, labels) in layout.iter().enumerate() {
        for (col, label) in labels.iter().enumerate() {
            if !label.is_empty() {
                engine.process_move(Move::new(row, col, *label)).unwrap();
            }
        }
    }
    assert!(!engine.has_winner());
    engine.process_move(Move::new(2, 2, "X")).unwrap();
    assert!(engine.board().is_full());
    assert!(engine.has_winner());
    assert!(!engine.is_tied());
}
