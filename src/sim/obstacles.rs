//! Pipe spawning, scrolling, scoring and removal.

use super::types::{Bird, Pipe};
use crate::core::config::GameConfig;
use crate::core::rng::{pipe_id, random_range};
use rand::Rng;

/// What happened to the pipe collection during one update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObstacleUpdate {
    /// Id of the pipe spawned this tick, if any.
    pub spawned: Option<String>,
    /// Pipes whose trailing edge crossed the bird this tick.
    pub newly_passed: u32,
    /// Pipes dropped off the left edge this tick.
    pub removed: usize,
}

/// Owns the live pipes in spawn order (which is also left-to-right order).
#[derive(Debug, Clone, Default)]
pub struct ObstacleManager {
    pipes: Vec<Pipe>,
    /// Milliseconds since the last spawn.
    since_last_spawn_ms: f64,
    /// Passed pipes that have since been removed.
    retired_passed: u32,
}

impl ObstacleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all pipes and restart the spawn timer.
    pub fn reset(&mut self) {
        self.pipes.clear();
        self.since_last_spawn_ms = 0.0;
        self.retired_passed = 0;
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn since_last_spawn_ms(&self) -> f64 {
        self.since_last_spawn_ms
    }

    /// Number of pipes passed this run, including ones already removed.
    pub fn passed_count(&self) -> u32 {
        self.retired_passed + self.pipes.iter().filter(|p| p.passed).count() as u32
    }

    /// Place an already-built pipe at the end of the queue.
    ///
    /// Pipes must be pushed in left-to-right order.
    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push(pipe);
    }

    /// Spawn one pipe just past the right edge with a random gap position.
    pub fn spawn<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> &Pipe {
        let (min_center, max_center) = config.gap_center_range();
        let center = random_range(rng, min_center, max_center);
        let pipe = Pipe::new(
            pipe_id(rng),
            config.world_width + config.spawn_offset_x,
            config.pipe_width,
            center,
            config.pipe_gap,
        );
        log::debug!(
            "spawned pipe {} with gap {:.1}..{:.1}",
            pipe.id,
            pipe.top_end,
            pipe.bottom_start
        );
        self.pipes.push(pipe);
        &self.pipes[self.pipes.len() - 1]
    }

    /// Advance the pipes by `dt` seconds.
    ///
    /// Spawns at most one pipe per call even if `dt` covers several spawn
    /// intervals; the accumulator restarts from zero rather than carrying the
    /// remainder. Callers keep `dt` small, so this only matters after stalls.
    pub fn update<R: Rng>(
        &mut self,
        dt: f64,
        bird: &Bird,
        config: &GameConfig,
        rng: &mut R,
    ) -> ObstacleUpdate {
        let mut result = ObstacleUpdate::default();

        self.since_last_spawn_ms += dt * 1000.0;
        if self.since_last_spawn_ms >= config.pipe_interval_ms {
            self.since_last_spawn_ms = 0.0;
            result.spawned = Some(self.spawn(config, rng).id.clone());
        }

        let dx = config.pipe_speed * dt;
        let bird_left = bird.left();
        for pipe in &mut self.pipes {
            pipe.x -= dx;
            if !pipe.passed && pipe.right() < bird_left {
                pipe.passed = true;
                result.newly_passed += 1;
            }
        }

        let cutoff = -config.despawn_margin;
        let before = self.pipes.len();
        let mut retired = 0;
        self.pipes.retain(|p| {
            let keep = p.right() >= cutoff;
            if !keep && p.passed {
                retired += 1;
            }
            keep
        });
        self.retired_passed += retired;
        result.removed = before - self.pipes.len();

        result
    }
}
