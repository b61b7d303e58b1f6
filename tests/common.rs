//! Test utilities shared by the integration tests.

use doorway::adventure::{AdventureError, Game, GameOptions, RoomTable, ScriptedInput, Transcript};

/// Commands that take the player from the start straight out of the building.
#[allow(dead_code)]
pub const WINNING_ROUTE: [&str; 7] = [
    "west",
    "take key",
    "east",
    "north",
    "east",
    "open window",
    "east",
];

/// A game that does not ask for a name.
#[allow(dead_code)]
pub fn named_game(name: &str) -> Game {
    let options = GameOptions {
        player_name: Some(name.to_string()),
        max_turns: None,
    };
    Game::with_options(RoomTable::standard(), options)
}

/// Step `game` through `commands` until it finishes or the script runs out.
#[allow(dead_code)]
pub fn drive(game: &mut Game, commands: &[&str]) -> (Transcript, Result<(), AdventureError>) {
    let mut input = ScriptedInput::new(commands.iter().copied());
    let mut out = Transcript::new();
    let result = game.run_rooms(&mut input, &mut out);
    (out, result)
}
