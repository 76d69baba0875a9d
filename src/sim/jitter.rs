//! Random speed drift, bounded per axis

use rand::Rng;

use super::state::Ball;
use crate::consts::{JITTER_AMPLITUDE, MIN_SPEED, SPEED_LIMIT};

/// Per-axis speed bounds and jitter strength
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLimits {
    /// Ceiling on |dx| and |dy|
    pub max: f32,
    /// Floor on |dx| and |dy|
    pub min: f32,
    /// Multiplier on `sample - 0.5`
    pub jitter: f32,
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self {
            max: SPEED_LIMIT,
            min: MIN_SPEED,
            jitter: JITTER_AMPLITUDE,
        }
    }
}

impl SpeedLimits {
    /// Clamp to the ceiling, then push anything slower than the floor out to it.
    ///
    /// Exact zero goes to `-min`.
    pub fn bound(&self, v: f32) -> f32 {
        let v = v.clamp(-self.max, self.max);
        if v.abs() < self.min {
            if v > 0.0 { self.min } else { -self.min }
        } else {
            v
        }
    }
}

/// Apply jitter from two unit samples in `[0, 1)`, one per axis
pub fn apply_speed_jitter(ball: &mut Ball, limits: &SpeedLimits, sample_x: f32, sample_y: f32) {
    ball.vel.x = limits.bound(ball.vel.x + (sample_x - 0.5) * limits.jitter);
    ball.vel.y = limits.bound(ball.vel.y + (sample_y - 0.5) * limits.jitter);
}

/// Draw one sample for `dx` then one for `dy` and apply them
pub fn update_ball_speed<R: Rng>(ball: &mut Ball, limits: &SpeedLimits, rng: &mut R) {
    let sample_x: f32 = rng.random();
    let sample_y: f32 = rng.random();
    apply_speed_jitter(ball, limits, sample_x, sample_y);
}
