//! The game loop: greet the player, walk rooms until the exit, say goodbye.

use log::{debug, info};
use serde::Serialize;

use super::errors::AdventureError;
use super::io::{prompt_non_empty, InputSource, OutputSink};
use super::rooms::RoomTable;
use super::types::{PlayerStatus, RoomId};
use crate::config::GameConfig;
use crate::validation::validate_player_name;

pub const NAME_PROMPT: &str = "Please enter your name.";

/// Most rooms kept in [`Game::path`]; older entries are dropped first.
pub const PATH_LIMIT: usize = 1024;

/// Knobs for a single run.
#[derive(Debug, Clone, Default)]
pub struct GameOptions {
    /// Skip the name prompt and use this name.
    pub player_name: Option<String>,
    /// Stop with [`AdventureError::TurnLimit`] after this many commands.
    pub max_turns: Option<u32>,
}

impl From<&GameConfig> for GameOptions {
    fn from(cfg: &GameConfig) -> Self {
        Self {
            player_name: cfg.player_name.clone(),
            max_turns: cfg.max_turns,
        }
    }
}

/// What a finished run looked like.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub player_name: String,
    pub turns: u32,
    /// See [`Game::path`].
    pub path: Vec<RoomId>,
    pub status: PlayerStatus,
}

pub struct Game {
    rooms: RoomTable,
    status: PlayerStatus,
    options: GameOptions,
    current: RoomId,
    turns: u32,
    path: Vec<RoomId>,
}

impl Game {
    pub fn new(rooms: RoomTable) -> Self {
        Self::with_options(rooms, GameOptions::default())
    }

    pub fn with_options(rooms: RoomTable, options: GameOptions) -> Self {
        Self {
            rooms,
            status: PlayerStatus::new(),
            options,
            current: RoomId::Start,
            turns: 0,
            path: vec![RoomId::Start],
        }
    }

    pub fn status(&self) -> &PlayerStatus {
        &self.status
    }

    /// Where the loop will go next. `Exit` once the game is over.
    pub fn current_room(&self) -> RoomId {
        self.current
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Start, then every room entered, then `Exit` if it was reached.
    /// Only the last [`PATH_LIMIT`] entries are kept.
    pub fn path(&self) -> &[RoomId] {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_terminal()
    }

    /// Enter the current room once: describe it, read a command, move.
    pub fn step(
        &mut self,
        input: &mut dyn InputSource,
        out: &mut dyn OutputSink,
    ) -> Result<RoomId, AdventureError> {
        if self.is_finished() {
            return Ok(self.current);
        }
        if let Some(max) = self.options.max_turns {
            if self.turns >= max {
                return Err(AdventureError::TurnLimit(max));
            }
        }

        let room = self.rooms.get(self.current)?;
        let next = room.enter(&mut self.status, input, out)?;
        self.turns += 1;
        self.record(room.id());
        if next.is_terminal() {
            self.record(next);
        }
        if next != room.id() {
            debug!("turn {}: {:?} -> {:?}", self.turns, room.id(), next);
        }
        self.current = next;
        Ok(next)
    }

    /// Step until the player is outside.
    pub fn run_rooms(
        &mut self,
        input: &mut dyn InputSource,
        out: &mut dyn OutputSink,
    ) -> Result<(), AdventureError> {
        while !self.is_finished() {
            self.step(input, out)?;
        }
        Ok(())
    }

    /// Play a whole session, from the welcome to the congratulations.
    pub fn run(
        mut self,
        input: &mut dyn InputSource,
        out: &mut dyn OutputSink,
    ) -> Result<GameSummary, AdventureError> {
        out.info("Welcome to the text adventure!");
        let player_name = self.resolve_name(input, out)?;
        info!("Game started for {}", player_name);

        out.info(&format!("Hello, {}.", player_name));
        out.info("You are in a building. Your goal is to exit this building.");

        self.run_rooms(input, out)?;

        out.info("You have exited the building. You win!");
        out.info(&format!("Congratulations, {}!", player_name));
        info!("Game finished for {} after {} turns", player_name, self.turns);

        Ok(GameSummary {
            player_name,
            turns: self.turns,
            path: self.path,
            status: self.status,
        })
    }

    fn record(&mut self, id: RoomId) {
        if self.path.len() == PATH_LIMIT {
            self.path.remove(0);
        }
        self.path.push(id);
    }

    fn resolve_name(
        &self,
        input: &mut dyn InputSource,
        out: &mut dyn OutputSink,
    ) -> Result<String, AdventureError> {
        if let Some(name) = &self.options.player_name {
            return Ok(validate_player_name(name)?);
        }
        prompt_non_empty(input, out, NAME_PROMPT)
    }
}
