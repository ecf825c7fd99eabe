//! Flappy - terminal arcade game library
//!
//! Exposes the simulation, persistence and terminal renderer for the binary
//! and for tests.

pub mod core;
pub mod input;
pub mod session;
pub mod sim;
pub mod ui;
pub mod utils;

pub use crate::core::{ConfigError, GameConfig};
pub use input::{InputQueue, InputResult};
pub use session::GameSession;
pub use sim::{FlappyGame, GameEvent, GameInput, GameSnapshot, GameState, Renderer};
pub use utils::persistence::{JsonScoreStore, MemoryScoreStore, ScoreStore};
