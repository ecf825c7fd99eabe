//! The game state machine: Ready -> Playing -> GameOver -> (reset) -> Ready.

use super::collision::{detect_terminal, resolve_ceiling, Collision};
use super::obstacles::ObstacleManager;
use super::physics;
use super::snapshot::{BirdView, GameSnapshot, PipeView};
use super::types::{default_clouds, Bird, Cloud, GameState};
use crate::core::config::{ConfigError, GameConfig};
use crate::core::tick::clamp_dt;
use rand::Rng;

/// Logical player inputs. Device mapping lives in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Flap,
    Reset,
}

/// Something observable that happened during an input or a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// First flap in Ready; the run is now live.
    Started,
    /// Flap while already playing.
    Flapped,
    PipeSpawned { id: String },
    /// A pipe was passed; `score` is the new total.
    Scored { score: u32 },
    /// The bird touched the ceiling and was pushed back.
    CeilingBump,
    Crashed(Collision),
    /// Emitted exactly once per run, right after the crash.
    GameOver {
        score: u32,
        best: u32,
        new_best: bool,
    },
    Reset,
}

/// Complete simulation context. Owned by the host loop; no globals.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    config: GameConfig,
    pub state: GameState,
    pub bird: Bird,
    pub obstacles: ObstacleManager,
    pub clouds: Vec<Cloud>,
    pub score: u32,
    pub best: u32,
}

impl FlappyGame {
    /// Validate `config` and build a game in the Ready state.
    pub fn new(config: GameConfig, best: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let bird = Bird::new(&config);
        Ok(Self {
            config,
            state: GameState::Ready,
            bird,
            obstacles: ObstacleManager::new(),
            clouds: default_clouds(),
            score: 0,
            best,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reinitialize the run and return to Ready, whatever the current state.
    ///
    /// Best score and clouds are kept.
    pub fn reset(&mut self) {
        self.state = GameState::Ready;
        self.bird = Bird::new(&self.config);
        self.obstacles.reset();
        self.score = 0;
        log::debug!("game reset");
    }

    /// Apply one input according to the current state.
    ///
    /// Flap in GameOver and Reset outside GameOver are ignored.
    pub fn process_input(&mut self, input: GameInput) -> Option<GameEvent> {
        match (self.state, input) {
            (GameState::Ready, GameInput::Flap) => {
                self.state = GameState::Playing;
                physics::flap(&mut self.bird, &self.config);
                log::info!("run started (best {})", self.best);
                Some(GameEvent::Started)
            }
            (GameState::Playing, GameInput::Flap) => {
                physics::flap(&mut self.bird, &self.config);
                Some(GameEvent::Flapped)
            }
            (GameState::GameOver, GameInput::Reset) => {
                self.reset();
                Some(GameEvent::Reset)
            }
            _ => None,
        }
    }

    /// Advance by `dt` seconds (clamped to the configured maximum).
    ///
    /// Only Playing advances the simulation. Clouds drift in every state.
    pub fn tick<R: Rng>(&mut self, dt: f64, rng: &mut R) -> Vec<GameEvent> {
        let dt = clamp_dt(dt, self.config.max_frame_dt);
        let mut events = Vec::new();

        let drift = self.config.cloud_drift_speed * dt;
        for cloud in &mut self.clouds {
            cloud.drift(drift, self.config.world_width);
        }

        if self.state != GameState::Playing {
            return events;
        }

        // Physics before pipes before collision: collisions see post-move positions.
        physics::integrate(&mut self.bird, &self.config, dt);

        let update = self
            .obstacles
            .update(dt, &self.bird, &self.config, rng);
        if let Some(id) = update.spawned {
            events.push(GameEvent::PipeSpawned { id });
        }
        for _ in 0..update.newly_passed {
            self.score += 1;
            events.push(GameEvent::Scored { score: self.score });
        }

        if resolve_ceiling(&mut self.bird) {
            events.push(GameEvent::CeilingBump);
        }

        let floor_y = self.config.floor_y();
        if let Some(collision) = detect_terminal(&self.bird, self.obstacles.pipes(), floor_y) {
            if collision == Collision::Ground {
                self.bird.y = floor_y - self.bird.radius;
            }
            events.push(GameEvent::Crashed(collision));
            events.push(self.game_over());
        }

        events
    }

    fn game_over(&mut self) -> GameEvent {
        self.state = GameState::GameOver;
        let new_best = self.score > self.best;
        self.best = self.best.max(self.score);
        log::info!(
            "game over: score {} best {}{}",
            self.score,
            self.best,
            if new_best { " (new best)" } else { "" }
        );
        GameEvent::GameOver {
            score: self.score,
            best: self.best,
            new_best,
        }
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> GameSnapshot {
        let floor_y = self.config.floor_y();
        GameSnapshot {
            state: self.state,
            world_width: self.config.world_width,
            world_height: self.config.world_height,
            ground_height: self.config.ground_height,
            bird: BirdView {
                x: self.bird.x,
                y: self.bird.y,
                radius: self.bird.radius,
                rotation: self.bird.rotation,
            },
            pipes: self
                .obstacles
                .pipes()
                .iter()
                .map(|p| PipeView {
                    id: p.id.clone(),
                    top: p.top_rect(),
                    bottom: p.bottom_rect(floor_y),
                    passed: p.passed,
                })
                .collect(),
            clouds: self.clouds.clone(),
            score: self.score,
            best: self.best,
        }
    }
}
