//! Read-only view of the simulation handed to renderers once per frame.

use super::types::{Cloud, GameState, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct BirdView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub rotation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipeView {
    pub id: String,
    pub top: Rect,
    pub bottom: Rect,
    pub passed: bool,
}

/// Everything a renderer needs; nothing flows back into the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub state: GameState,
    pub world_width: f64,
    pub world_height: f64,
    pub ground_height: f64,
    pub bird: BirdView,
    /// Pipes in spawn (left-to-right) order.
    pub pipes: Vec<PipeView>,
    pub clouds: Vec<Cloud>,
    pub score: u32,
    pub best: u32,
}

impl GameSnapshot {
    pub fn floor_y(&self) -> f64 {
        self.world_height - self.ground_height
    }
}

/// A presentation backend.
pub trait Renderer {
    type Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error>;
}
