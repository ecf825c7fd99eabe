//! Vertical motion of the bird.

use super::types::Bird;
use crate::core::config::GameConfig;

/// New velocity after `dt` seconds of gravity, capped at `max_fall_speed`.
///
/// There is no upward cap: a flap can send the bird up as fast as the
/// impulse allows.
pub fn apply_gravity(velocity: f64, gravity: f64, max_fall_speed: f64, dt: f64) -> f64 {
    (velocity + gravity * dt).min(max_fall_speed)
}

/// Display tilt for a given vertical velocity.
pub fn rotation_for(velocity: f64, reference_speed: f64) -> f64 {
    velocity.atan2(reference_speed)
}

/// Advance the bird by `dt` seconds: gravity, then position, then tilt.
pub fn integrate(bird: &mut Bird, config: &GameConfig, dt: f64) {
    bird.velocity = apply_gravity(bird.velocity, config.gravity, config.max_fall_speed, dt);
    bird.y += bird.velocity * dt;
    bird.rotation = rotation_for(bird.velocity, config.rotation_reference_speed);
}

/// Replace the bird's velocity with the flap impulse. Flaps never stack.
pub fn flap(bird: &mut Bird, config: &GameConfig) {
    bird.velocity = config.flap_impulse;
}
