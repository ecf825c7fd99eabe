//! Sources of per-frame elapsed time.
//!
//! The simulation never reads a clock itself. The host owns a [`TickSource`]
//! and hands the resulting `dt` to the session each frame, which lets tests
//! feed synthetic time.

use std::collections::VecDeque;
use std::time::Instant;

/// Clamp a raw frame delta (seconds) into `[0, max_dt]`.
///
/// Negative or NaN deltas are treated as zero.
pub fn clamp_dt(dt: f64, max_dt: f64) -> f64 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max_dt)
    }
}

/// Something that yields the elapsed time since the previous tick.
pub trait TickSource {
    /// Seconds elapsed since the last call.
    fn next_dt(&mut self) -> f64;
}

/// Wall-clock tick source backed by a monotonic [`Instant`].
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    last: Instant,
    max_dt: f64,
}

impl MonotonicClock {
    pub fn new(max_dt: f64) -> Self {
        Self {
            last: Instant::now(),
            max_dt,
        }
    }
}

impl TickSource for MonotonicClock {
    fn next_dt(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        clamp_dt(dt, self.max_dt)
    }
}

/// Always yields the same delta.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    pub dt: f64,
}

impl FixedStep {
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }
}

impl TickSource for FixedStep {
    fn next_dt(&mut self) -> f64 {
        self.dt
    }
}

/// Replays a fixed list of deltas, then yields zero.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTicks {
    deltas: VecDeque<f64>,
}

impl ScriptedTicks {
    pub fn new(deltas: impl IntoIterator<Item = f64>) -> Self {
        Self {
            deltas: deltas.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.deltas.len()
    }
}

impl TickSource for ScriptedTicks {
    fn next_dt(&mut self) -> f64 {
        self.deltas.pop_front().unwrap_or(0.0)
    }
}
