//! Coin Chase - a single-screen terminal arcade game
//!
//! Core modules:
//! - `state`: the per-tick game core (movement, collision, scoring, timer)
//! - `input`: held-key set and movement mapping
//! - `entities`: the fox and the coin
//! - `config`: timer variant and key-alias options
//! - `game`: the terminal shell (frame loop, drawing, screens)

pub mod config;
pub mod constants;
pub mod entities;
pub mod game;
pub mod input;
pub mod rendering;
pub mod state;
pub mod terminal_io;
pub mod types;

pub use config::{GameConfig, TimerMode};
pub use game::Game;
pub use input::KeyState;
pub use state::GameState;
