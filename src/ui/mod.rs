//! Terminal presentation. Reads snapshots only; never mutates the game.

pub mod flappy_scene;
pub mod game_common;

pub use flappy_scene::{render_flappy, TerminalRenderer};
