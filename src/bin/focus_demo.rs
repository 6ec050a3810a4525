//! Replays a short opening and prints the board.
//!
//! Set `RUST_LOG=debug` to see each move as the engine logs it.

use focus_engine::core::PieceColor;
use focus_engine::rules::FocusGame;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut game = FocusGame::new(("PlayerA", PieceColor::RED), ("PlayerB", PieceColor::GREEN))?;

    game.move_piece("PlayerA", (0, 0), (0, 1), 1)?;
    game.move_piece("PlayerB", (1, 0), (1, 1), 1)?;
    game.move_piece("PlayerA", (0, 1), (0, 3), 2)?;
    game.move_piece("PlayerB", (1, 1), (1, 3), 2)?;
    let outcome = game.move_piece("PlayerA", (0, 3), (1, 3), 1)?;

    println!("{}", outcome);
    print!("{}", game.board());
    for player in game.players() {
        println!(
            "{} ({}): {} reserve(s), {} capture(s)",
            player.name(),
            player.color(),
            player.reserves(),
            player.captures()
        );
    }
    println!("next turn: {}", game.active_turn());

    Ok(())
}
