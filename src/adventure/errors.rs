use thiserror::Error;

use super::types::RoomId;

/// Errors that can stop a game run. Bad commands are not errors: rooms
/// report them to the player and keep them where they are.
#[derive(Debug, Error)]
pub enum AdventureError {
    /// Wrapper around IO errors from the console or a script file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input source ran dry before the player reached the exit.
    #[error("input closed before the game finished")]
    InputClosed,

    /// The room table has no entry for a room the player walked into.
    #[error("no room registered for {0:?}")]
    MissingRoom(RoomId),

    /// A player name supplied up front failed validation.
    #[error("invalid player name: {0}")]
    InvalidName(#[from] crate::validation::NameError),

    /// The configured turn limit was exceeded.
    #[error("turn limit of {0} reached")]
    TurnLimit(u32),
}
