use polytoe::{Game, GameError, GameState, Player, Position, ScriptedInput};

fn game_with(size: usize) -> Game {
    let players = (0..size - 1).map(|i| {
        let mark = (b'A' + i as u8) as char;
        Player::human(i as u64 + 1, mark.to_string(), mark)
    });
    Game::builder()
        .with_size(size)
        .with_players(players)
        .build()
        .unwrap()
}

fn play(game: &mut Game, positions: &[(usize, usize)]) {
    let mut input = ScriptedInput::new(positions.iter().copied());
    for _ in positions {
        game.make_move(&mut input).unwrap();
    }
}

#[test]
fn test_undo_on_empty_history_is_a_no_op() {
    let mut game = game_with(3);
    let board_before = game.board().clone();

    let result = game.undo();

    assert!(matches!(result, Err(GameError::NothingToUndo)));
    assert!(result.unwrap_err().is_recoverable());
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.check_status(), GameState::InProgress);
    assert_eq!(game.next_player_index(), 0);
    assert_eq!(game.statistics().empty_undos, 1);
}

#[test]
fn test_undo_first_move_wraps_turn_index() {
    for size in 3..=5 {
        let mut game = game_with(size);
        play(&mut game, &[(0, 0)]);
        assert_eq!(game.next_player_index(), 1);

        let undone = game.undo().unwrap();

        assert_eq!(undone.position(), Position::new(0, 0));
        assert_eq!(game.next_player_index(), 0);
        assert!(game.board().cell_at(0, 0).unwrap().is_empty());
        assert!(game.board().cell_at(0, 0).unwrap().owner().is_none());
    }
}

#[test]
fn test_undo_after_full_round_wraps_to_last_player() {
    let mut game = game_with(4);
    play(&mut game, &[(0, 0), (1, 1), (2, 2)]);
    assert_eq!(game.next_player_index(), 0);

    game.undo().unwrap();

    assert_eq!(game.next_player_index(), 2);
    assert_eq!(game.current_player().name(), "C");
}

#[test]
fn test_undo_then_redo_restores_board() {
    let mut game = game_with(3);
    play(&mut game, &[(0, 0), (1, 1), (2, 1)]);
    let board_before = game.board().clone();
    let moves_before = game.moves().to_vec();
    let last = *game.moves().last().unwrap();

    game.undo().unwrap();
    assert_eq!(game.moves().len(), game.board().filled_count());
    game.apply_move(last).unwrap();

    assert_eq!(game.board(), &board_before);
    assert_eq!(game.moves(), moves_before.as_slice());
    assert_eq!(game.next_player_index(), 1);
}

#[test]
fn test_undo_unwinds_strategy_counters() {
    let mut game = game_with(3);
    // A: (0,0), (0,1); B: (1,0), (1,1)
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1)]);

    // Take back B's (1,1) and A's (0,1); A then plays elsewhere in row 0
    game.undo().unwrap();
    game.undo().unwrap();
    play(&mut game, &[(2, 2), (2, 0)]);
    assert_eq!(game.check_status(), GameState::InProgress);

    // Row 0 needs two more A marks now, so (0,2) alone must not win
    play(&mut game, &[(0, 2)]);
    assert_eq!(game.check_status(), GameState::InProgress);

    play(&mut game, &[(2, 1), (0, 1)]);
    assert_eq!(game.check_status(), GameState::Winner);
}

#[test]
fn test_undo_reopens_won_game() {
    let mut game = game_with(3);
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    assert_eq!(game.check_status(), GameState::Winner);

    let winning_move = game.undo().unwrap();

    assert_eq!(game.check_status(), GameState::InProgress);
    assert!(game.winner().is_none());
    assert_eq!(game.current_player().name(), "A");

    // Replaying the same move wins again
    let outcome = game.apply_move(winning_move).unwrap();
    assert_eq!(outcome.state, GameState::Winner);
    assert_eq!(game.winner().map(|p| p.name()), Some("A"));
}

#[test]
fn test_undo_reopens_drawn_game() {
    let mut game = game_with(3);
    play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ],
    );
    assert_eq!(game.check_status(), GameState::Draw);

    game.undo().unwrap();

    assert_eq!(game.check_status(), GameState::InProgress);
    assert_eq!(game.moves().len(), 8);
    assert!(game.board().cell_at(2, 1).unwrap().is_empty());
}

#[test]
fn test_undo_everything() {
    let mut game = game_with(4);
    play(&mut game, &[(0, 0), (3, 3), (1, 2), (2, 1), (0, 3)]);

    while game.undo().is_ok() {
        assert_eq!(game.moves().len(), game.board().filled_count());
        assert!(game.next_player_index() < game.players().len());
    }

    assert_eq!(game.board().filled_count(), 0);
    assert_eq!(game.next_player_index(), 0);
    assert_eq!(game.statistics().undos, 5);
}
