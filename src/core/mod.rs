//! Configuration, constants, randomness and timing shared by the simulation.

pub mod config;
pub mod constants;
pub mod rng;
pub mod tick;

pub use config::{ConfigError, GameConfig};
pub use tick::{clamp_dt, FixedStep, MonotonicClock, ScriptedTicks, TickSource};
