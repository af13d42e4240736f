//! Console Tic-Tac-Toe
//!
//! A human (X) plays an easy bot (O) on a 3x3 board. Before every turn you
//! can take back the previous move.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example tic_tac_toe
//! ```

use std::io::{self, BufReader};

use polytoe::{BotDifficulty, ConsoleInput, Game, GameError, GameState, Player};

fn main() -> Result<(), GameError> {
    // Initialize logging
    env_logger::init();

    println!("N-Player Tic-Tac-Toe");
    println!("====================");
    println!();

    let mut game = Game::builder()
        .with_size(3)
        .with_player(Player::human(1, "You", 'X'))
        .with_player(Player::bot(2, "Bot", 'O', BotDifficulty::Easy))
        .build()?;

    let mut input = ConsoleInput::new(BufReader::new(io::stdin()), io::stdout());

    while game.check_status() == GameState::InProgress {
        println!("{}", game.board());

        if !game.moves().is_empty() && input.confirm("Do you want to undo? (y/n)")? {
            match game.undo() {
                Ok(mv) => println!("Took back {}", mv),
                Err(err) => println!("{}", err),
            }
            continue;
        }

        match game.make_move(&mut input) {
            Ok(outcome) => {
                let name = game
                    .player(outcome.mv.player())
                    .map_or("Someone", |player| player.name());
                println!("{} played {}", name, outcome.mv.position());
            }
            Err(err) if err.is_recoverable() => println!("{}. Please try again.", err),
            Err(err) => return Err(err),
        }
    }

    println!("{}", game.board());
    match game.winner() {
        Some(winner) => println!("Winner is: {}", winner),
        None => println!("Game has drawn"),
    }
    println!("{}", game.statistics().summary());

    Ok(())
}
