//! Per-frame orchestration for a host loop.
//!
//! A [`GameSession`] owns the game, the score store, the RNG and the input
//! queue. The host pushes inputs as they arrive and calls [`GameSession::frame`]
//! once per rendered frame.

use crate::core::config::{ConfigError, GameConfig};
use crate::core::tick::TickSource;
use crate::input::InputQueue;
use crate::sim::{FlappyGame, GameEvent, GameInput, GameSnapshot};
use crate::utils::persistence::ScoreStore;
use rand::Rng;

pub struct GameSession<S: ScoreStore, R: Rng> {
    game: FlappyGame,
    store: S,
    rng: R,
    inputs: InputQueue,
}

impl<S: ScoreStore, R: Rng> GameSession<S, R> {
    /// Validate the config and read the persisted best score once.
    pub fn new(config: GameConfig, store: S, rng: R) -> Result<Self, ConfigError> {
        let best = store.load();
        let game = FlappyGame::new(config, best)?;
        log::info!("session started with best score {}", best);
        Ok(Self {
            game,
            store,
            rng,
            inputs: InputQueue::new(),
        })
    }

    pub fn game(&self) -> &FlappyGame {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Queue an input for the next frame.
    pub fn push_input(&mut self, input: GameInput) {
        self.inputs.push(input);
    }

    /// Apply queued inputs in arrival order, then advance by `dt` seconds.
    ///
    /// Persists the best score on every game-over event. A failed write is
    /// logged and otherwise ignored.
    pub fn frame(&mut self, dt: f64) -> Vec<GameEvent> {
        let mut events: Vec<GameEvent> = Vec::new();
        for input in self.inputs.drain() {
            events.extend(self.game.process_input(input));
        }
        events.extend(self.game.tick(dt, &mut self.rng));

        for event in &events {
            if let GameEvent::GameOver { best, .. } = event {
                if let Err(e) = self.store.save(*best) {
                    log::warn!("could not save best score {}: {}", best, e);
                }
            }
        }

        events
    }

    /// Pull `dt` from a tick source and run one frame.
    pub fn run_frame<T: TickSource>(&mut self, ticks: &mut T) -> Vec<GameEvent> {
        let dt = ticks.next_dt();
        self.frame(dt)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }
}
