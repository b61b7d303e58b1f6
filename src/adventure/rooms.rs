//! The rooms of the building and how each one reacts to commands.
//!
//! Each room is a variant of [`Room`]. Rooms hold no state of their own: the
//! door layout is fixed and everything that changes lives in
//! [`PlayerStatus`]. [`RoomTable`] maps room ids onto rooms and is handed to
//! the game loop when it starts.

use log::debug;
use std::collections::HashMap;

use super::errors::AdventureError;
use super::io::{prompt_non_empty, InputSource, OutputSink};
use super::types::{Door, DoorLayout, PlayerStatus, RoomId, BUILDING_KEY};
use crate::logutil::escape_log;

pub const COMMAND_PROMPT: &str = "Please enter a command.";
pub const UNRECOGNIZED: &str = "Unrecognized command.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Room {
    /// Room A: empty, locked door north, open door west. Also the start room.
    Empty,
    /// Room B: the table with the key.
    Table,
    /// Room C: bright room with the window out.
    Window,
}

impl Room {
    pub fn id(self) -> RoomId {
        match self {
            Room::Empty => RoomId::A,
            Room::Table => RoomId::B,
            Room::Window => RoomId::C,
        }
    }

    pub fn layout(self) -> DoorLayout {
        match self {
            Room::Empty => DoorLayout::new(Door::Locked, Door::Absent, Door::Absent, Door::Open),
            Room::Table => DoorLayout::new(Door::Absent, Door::Absent, Door::Open, Door::Absent),
            // The east "door" is the window.
            Room::Window => DoorLayout::new(Door::Absent, Door::Open, Door::Locked, Door::Absent),
        }
    }

    /// Describe the room, unless the player is already standing in it.
    pub fn describe(self, status: &PlayerStatus, out: &mut dyn OutputSink) {
        if status.current_room == self.id() {
            return;
        }
        match self {
            Room::Empty => out.info(
                "You are in an empty room. There are doors on the north and west walls of this room.",
            ),
            Room::Table => {
                out.info("You go through the west door. You are in a room with a table.");
                if !status.has_key(BUILDING_KEY) {
                    out.info("On the table there is a key.");
                }
                out.info("There is a door on the east wall of this room.");
            }
            Room::Window => out.info(
                "You are in a bright room. There is a door on the south wall of this room and a window on the east wall.",
            ),
        }
    }

    /// Match `command` literally against this room's verbs and return where
    /// the player ends up.
    pub fn process_command(
        self,
        command: &str,
        status: &mut PlayerStatus,
        out: &mut dyn OutputSink,
    ) -> RoomId {
        match (self, command) {
            (Room::Empty, "west") => RoomId::B,
            (Room::Empty, "north") => {
                if status.has_key(BUILDING_KEY) {
                    out.info("You unlock the north door with the key and go through the door.");
                    RoomId::C
                } else {
                    out.error("You try to open the north door, but it is locked.");
                    RoomId::A
                }
            }
            (Room::Table, "east") => RoomId::A,
            (Room::Table, "take key") => {
                if status.add_key(BUILDING_KEY) {
                    out.info("You take the key from the table.");
                } else {
                    out.error("You already have the key.");
                }
                RoomId::B
            }
            (Room::Window, "south") => RoomId::A,
            (Room::Window, "east") => {
                if status.window_open {
                    out.info("You step out from the open window.");
                    RoomId::Exit
                } else {
                    out.error("The window is closed.");
                    RoomId::C
                }
            }
            (Room::Window, "open window") => {
                if status.window_open {
                    out.error("The window is already open.");
                } else {
                    out.info("You open the window.");
                    status.window_open = true;
                }
                RoomId::C
            }
            _ => {
                out.error(UNRECOGNIZED);
                self.id()
            }
        }
    }

    /// Describe, record the entry, read one command and dispatch it.
    pub fn enter(
        self,
        status: &mut PlayerStatus,
        input: &mut dyn InputSource,
        out: &mut dyn OutputSink,
    ) -> Result<RoomId, AdventureError> {
        if status.current_room != self.id() {
            debug!("entering {:?}, openings {:?}", self.id(), self.layout().openings());
        }
        self.describe(status, out);
        status.current_room = self.id();
        let command = prompt_non_empty(input, out, COMMAND_PROMPT)?;
        let next = self.process_command(&command, status, out);
        debug!(
            "room {:?} command={} -> {:?}",
            self.id(),
            escape_log(&command),
            next
        );
        Ok(next)
    }
}

/// Lookup from room id to room. `Exit` has no entry: reaching it ends the game.
#[derive(Debug, Clone)]
pub struct RoomTable {
    rooms: HashMap<RoomId, Room>,
}

impl Default for RoomTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RoomTable {
    /// The building: Start behaves exactly like room A.
    pub fn standard() -> Self {
        let rooms = HashMap::from([
            (RoomId::Start, Room::Empty),
            (RoomId::A, Room::Empty),
            (RoomId::B, Room::Table),
            (RoomId::C, Room::Window),
        ]);
        Self { rooms }
    }

    pub fn from_rooms(rooms: HashMap<RoomId, Room>) -> Self {
        Self { rooms }
    }

    pub fn get(&self, id: RoomId) -> Result<Room, AdventureError> {
        self.rooms
            .get(&id)
            .copied()
            .ok_or(AdventureError::MissingRoom(id))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
