//! The building: rooms, player progress and the loop that drives them.
//!
//! Four rooms and one way out. The player starts in an empty room, finds a
//! key in the room to the west, unlocks the north door, opens the window and
//! steps outside. Everything that changes during a run lives in
//! [`PlayerStatus`]; rooms are fixed and are looked up through [`RoomTable`].

pub mod errors;
pub mod game;
pub mod io;
pub mod rooms;
pub mod types;

pub use errors::AdventureError;
pub use game::{Game, GameOptions, GameSummary, NAME_PROMPT, PATH_LIMIT};
pub use io::{
    prompt_non_empty, ConsoleSink, InputSource, OutputSink, ReaderInput, ScriptedInput, Severity, StdinInput,
    Transcript, INVALID_INPUT,
};
pub use rooms::{Room, RoomTable, COMMAND_PROMPT, UNRECOGNIZED};
pub use types::*;
