use polytoe::{
    BotDifficulty, ColumnStrategy, Game, GameConfig, GameError, GameState, Player,
    PlayerCountRule, PlayerId, RowStrategy, Symbol,
};

fn humans(marks: &[char]) -> Vec<Player> {
    marks
        .iter()
        .enumerate()
        .map(|(i, &mark)| Player::human(i as u64 + 1, format!("P{}", i + 1), mark))
        .collect()
}

#[test]
fn test_build_valid_game() {
    let game = Game::builder()
        .with_size(3)
        .with_player(Player::human(1, "Alice", 'X'))
        .with_player(Player::bot(2, "Bot", 'O', BotDifficulty::Easy))
        .build()
        .expect("two players on 3x3 with one bot is valid");

    assert_eq!(game.check_status(), GameState::InProgress);
    assert!(game.winner().is_none());
    assert!(game.moves().is_empty());
    assert_eq!(game.next_player_index(), 0);
    assert_eq!(game.current_player().name(), "Alice");
    assert_eq!(game.board().size(), 3);
    assert_eq!(game.board().filled_count(), 0);
}

#[test]
fn test_default_strategies_when_none_given() {
    let game = Game::builder().with_players(humans(&['X', 'O'])).build().unwrap();

    assert_eq!(game.strategy_names(), vec!["row", "column", "diagonal"]);
}

#[test]
fn test_explicit_strategies_keep_order() {
    let game = Game::builder()
        .with_players(humans(&['X', 'O']))
        .with_strategy(ColumnStrategy::new())
        .with_strategy(RowStrategy::new())
        .build()
        .unwrap();

    assert_eq!(game.strategy_names(), vec!["column", "row"]);
}

#[test]
fn test_player_count_must_be_size_minus_one() {
    for size in 3..=6 {
        for count in 1..=size + 1 {
            let marks: Vec<char> = ('a'..='z').take(count).collect();
            let result = Game::builder()
                .with_size(size)
                .with_players(humans(&marks))
                .build();

            if count == size - 1 {
                assert!(result.is_ok(), "size {} with {} players", size, count);
            } else {
                match result {
                    Err(GameError::PlayerCount { expected, actual }) => {
                        assert_eq!(expected, (size - 1).to_string());
                        assert_eq!(actual, count);
                    }
                    other => panic!("expected PlayerCount error, got {:?}", other.err()),
                }
            }
        }
    }
}

#[test]
fn test_duplicate_symbol_rejected() {
    let result = Game::builder()
        .with_size(4)
        .with_players(humans(&['X', 'O', 'X']))
        .build();

    match result {
        Err(GameError::DuplicateSymbol(symbol)) => assert_eq!(symbol, Symbol::new('X')),
        other => panic!("expected DuplicateSymbol, got {:?}", other.err()),
    }
}

#[test]
fn test_more_than_one_bot_rejected() {
    let result = Game::builder()
        .with_size(4)
        .with_player(Player::human(1, "Alice", 'X'))
        .with_player(Player::bot(2, "Bot A", 'O', BotDifficulty::Easy))
        .with_player(Player::bot(3, "Bot B", 'Z', BotDifficulty::Hard))
        .build();

    assert!(matches!(result, Err(GameError::TooManyBots { count: 2 })));
}

#[test]
fn test_validation_order_bot_count_first() {
    // Wrong count, duplicate symbols and two bots: the bot check reports first
    let result = Game::builder()
        .with_size(3)
        .with_player(Player::bot(1, "Bot A", 'X', BotDifficulty::Easy))
        .with_player(Player::bot(2, "Bot B", 'X', BotDifficulty::Easy))
        .with_player(Player::human(3, "Carol", 'X'))
        .build();
    assert!(matches!(result, Err(GameError::TooManyBots { .. })));

    // Wrong count and duplicate symbols: the count check reports before symbols
    let result = Game::builder()
        .with_size(3)
        .with_players(humans(&['X', 'X', 'X']))
        .build();
    assert!(matches!(result, Err(GameError::PlayerCount { .. })));
}

#[test]
fn test_board_too_small() {
    let result = Game::builder()
        .with_size(2)
        .with_min_board_size(3)
        .with_players(humans(&['X']))
        .build();
    assert!(matches!(
        result,
        Err(GameError::BoardTooSmall { size: 2, min: 3 })
    ));

    let config = GameConfig::default().with_board_size(2).with_min_board_size(2);
    let result = Game::builder()
        .with_config(config)
        .with_players(humans(&['X']))
        .build();
    assert!(result.is_ok());
}

#[test]
fn test_small_boards_accepted_by_default() {
    // Only bot count, player count and symbols decide by default
    let game = Game::builder()
        .with_size(2)
        .with_player(Player::human(1, "A", 'X'))
        .build()
        .expect("2x2 with one player passes every default check");

    assert_eq!(game.board().size(), 2);
    assert_eq!(game.check_status(), GameState::InProgress);
}

#[test]
fn test_duplicate_player_id_rejected() {
    let result = Game::builder()
        .with_player(Player::human(7, "Alice", 'X'))
        .with_player(Player::human(7, "Bob", 'O'))
        .build();

    match result {
        Err(GameError::DuplicatePlayerId(id)) => assert_eq!(id, PlayerId(7)),
        other => panic!("expected DuplicatePlayerId, got {:?}", other.err()),
    }

    // Symbol clashes are reported before id clashes
    let result = Game::builder()
        .with_player(Player::human(7, "Alice", 'X'))
        .with_player(Player::human(7, "Bob", 'X'))
        .build();
    assert!(matches!(result, Err(GameError::DuplicateSymbol(_))));
}

#[test]
fn test_configurable_player_count_rule() {
    let result = Game::builder()
        .with_size(5)
        .with_player_count_rule(PlayerCountRule::Between { min: 2, max: 3 })
        .with_players(humans(&['X', 'O']))
        .build();
    assert!(result.is_ok());

    let result = Game::builder()
        .with_size(5)
        .with_player_count_rule(PlayerCountRule::Exactly(2))
        .with_players(humans(&['X', 'O', 'Z']))
        .build();
    assert!(matches!(
        result,
        Err(GameError::PlayerCount { actual: 3, .. })
    ));
}

#[test]
fn test_no_players_rejected() {
    let result = Game::builder()
        .with_player_count_rule(PlayerCountRule::Exactly(0))
        .build();

    assert!(matches!(result, Err(GameError::PlayerCount { actual: 0, .. })));
}

#[test]
fn test_configuration_errors_are_not_recoverable() {
    let err = Game::builder()
        .with_players(humans(&['X', 'X']))
        .build()
        .unwrap_err();

    assert!(!err.is_recoverable());
    assert!(err.to_string().contains('X'));
}
