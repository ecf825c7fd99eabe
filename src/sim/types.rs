//! Simulation entities: the bird, pipe pairs and background clouds.

use crate::core::config::GameConfig;
use crate::core::constants::{CLOUD_WRAP_MARGIN, DEFAULT_CLOUDS};

/// Which phase of a run the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the first flap. Nothing moves.
    Ready,
    /// Physics, pipes and collisions are live.
    Playing,
    /// Run ended; waiting for an explicit reset.
    GameOver,
}

/// Axis-aligned rectangle in world coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The player-controlled circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Fixed horizontal position of the center.
    pub x: f64,
    /// Vertical position of the center.
    pub y: f64,
    pub radius: f64,
    /// Vertical velocity in px/s (positive = downward).
    pub velocity: f64,
    /// Display-only tilt in radians, derived from velocity.
    pub rotation: f64,
}

impl Bird {
    /// A bird at the configured start position, at rest.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: config.bird_start_y(),
            radius: config.bird_radius,
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    pub fn top(&self) -> f64 {
        self.y - self.radius
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.radius
    }

    /// Leftmost point of the circle; pipes are scored against this edge.
    pub fn left(&self) -> f64 {
        self.x - self.radius
    }
}

/// A top/bottom obstacle pair sharing one horizontal position.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub id: String,
    /// Left edge of both rectangles.
    pub x: f64,
    pub width: f64,
    /// Bottom edge of the top rectangle (top of the gap).
    pub top_end: f64,
    /// Top edge of the bottom rectangle (bottom of the gap).
    pub bottom_start: f64,
    /// Whether this pipe has already been counted toward the score.
    pub passed: bool,
}

impl Pipe {
    /// Build a pipe whose gap of height `gap` is centered on `gap_center`.
    pub fn new(id: String, x: f64, width: f64, gap_center: f64, gap: f64) -> Self {
        let top_end = gap_center - gap / 2.0;
        Self {
            id,
            x,
            width,
            top_end,
            bottom_start: top_end + gap,
            passed: false,
        }
    }

    /// Trailing (right) edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn gap_height(&self) -> f64 {
        self.bottom_start - self.top_end
    }

    pub fn gap_center(&self) -> f64 {
        (self.top_end + self.bottom_start) / 2.0
    }

    /// Rectangle from the ceiling down to the top of the gap.
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.top_end.max(0.0))
    }

    /// Rectangle from the bottom of the gap down to the ground.
    pub fn bottom_rect(&self, floor_y: f64) -> Rect {
        Rect::new(
            self.x,
            self.bottom_start,
            self.width,
            (floor_y - self.bottom_start).max(0.0),
        )
    }
}

/// Background decoration. Never collides with anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Cloud {
    /// Drift left and wrap around to the right edge once off-screen.
    pub fn drift(&mut self, dx: f64, world_width: f64) {
        self.x -= dx;
        if self.x < -CLOUD_WRAP_MARGIN {
            self.x = world_width + CLOUD_WRAP_MARGIN;
        }
    }
}

/// The reference sky layout.
pub fn default_clouds() -> Vec<Cloud> {
    DEFAULT_CLOUDS
        .iter()
        .map(|&(x, y, radius)| Cloud { x, y, radius })
        .collect()
}
