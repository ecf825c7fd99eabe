//! Flappy simulation: entities, physics, pipes, collisions and the state machine.
//!
//! A bird falls under gravity and is pushed upward by flaps while pipe pairs
//! scroll in from the right. Passing a pipe scores a point; touching a pipe
//! or the ground ends the run.

pub mod collision;
pub mod logic;
pub mod obstacles;
pub mod physics;
pub mod snapshot;
pub mod types;

pub use collision::Collision;
pub use logic::{FlappyGame, GameEvent, GameInput};
pub use obstacles::{ObstacleManager, ObstacleUpdate};
pub use snapshot::{BirdView, GameSnapshot, PipeView, Renderer};
pub use types::{Bird, Cloud, GameState, Pipe, Rect};
