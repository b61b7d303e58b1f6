use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Name of the key lying on the table in room B.
pub const BUILDING_KEY: &str = "key";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RoomId {
    Start,
    A,
    B,
    C,
    Exit,
}

impl RoomId {
    /// Every id, in the order the building is laid out.
    pub const ALL: [RoomId; 5] = [RoomId::Start, RoomId::A, RoomId::B, RoomId::C, RoomId::Exit];

    pub fn is_terminal(self) -> bool {
        self == RoomId::Exit
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Door {
    Open,
    Locked,
    #[default]
    Absent,
}

/// What sits in each wall of a room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DoorLayout {
    pub north: Door,
    pub south: Door,
    pub east: Door,
    pub west: Door,
}

impl DoorLayout {
    pub const fn new(north: Door, south: Door, east: Door, west: Door) -> Self {
        Self { north, south, east, west }
    }

    pub fn door(&self, direction: Direction) -> Door {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Walls that have a door or window in them, locked or not.
    pub fn openings(&self) -> Vec<Direction> {
        [Direction::North, Direction::South, Direction::East, Direction::West]
            .into_iter()
            .filter(|d| self.door(*d) != Door::Absent)
            .collect()
    }
}

/// The player's progress through the building.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStatus {
    pub current_room: RoomId,
    pub keys: BTreeSet<String>,
    pub window_open: bool,
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self {
            current_room: RoomId::Start,
            keys: BTreeSet::new(),
            window_open: false,
        }
    }
}

impl PlayerStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key to the key ring. Returns false when it was already held.
    pub fn add_key(&mut self, key: &str) -> bool {
        self.keys.insert(key.to_string())
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Returns false when the key was not held.
    pub fn remove_key(&mut self, key: &str) -> bool {
        self.keys.remove(key)
    }
}
