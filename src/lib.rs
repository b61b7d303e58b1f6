//! # Doorway - a very small text adventure
//!
//! The player wakes up inside a building with four rooms and has to get out.
//! Commands are typed one per line and matched literally: `west`, `east`,
//! `north`, `south`, `take key`, `open window`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doorway::adventure::{ConsoleSink, Game, RoomTable, StdinInput};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut input = StdinInput::new();
//!     let mut out = ConsoleSink::stdout(false);
//!     let summary = Game::new(RoomTable::standard()).run(&mut input, &mut out)?;
//!     println!("{} got out in {} turns", summary.player_name, summary.turns);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`adventure`] - Rooms, player status, input/output collaborators and the game loop
//! - [`config`] - TOML configuration
//! - [`validation`] - Player name checks
//! - [`logutil`] - Escaping player input for log lines
//!
//! ## Map
//!
//! ```text
//!            ┌─────────┐
//!            │    C    │ window (east) → outside
//!            └────┬────┘
//!                 │ locked door
//! ┌─────────┐┌────┴────┐
//! │    B    ││    A    │ ← start
//! │  (key)  ├┤         │
//! └─────────┘└─────────┘
//! ```

pub mod adventure;
pub mod config;
pub mod logutil;
pub mod validation;
