//! Ball vs grid collision
//!
//! A ball probes eight points on its circumference each frame. Any probe that
//! lands on a cell not yet in the ball's secondary color claims that cell and
//! bounces the ball along the probe's dominant axis.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;

use super::grid::Grid;
use super::state::Ball;

/// Unit probe directions at 0, π/4, π/2, ... 7π/4.
///
/// Written out exactly so diagonal probes have identical |x| and |y|.
pub const SAMPLE_DIRECTIONS: [Vec2; 8] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Vec2::new(0.0, 1.0),
    Vec2::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Vec2::new(-1.0, 0.0),
    Vec2::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    Vec2::new(0.0, -1.0),
    Vec2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

/// Grid cell containing a surface point (floor division, so negatives map below 0)
#[inline]
pub fn cell_at(point: Vec2, cell_size: f32) -> (i32, i32) {
    (
        (point.x / cell_size).floor() as i32,
        (point.y / cell_size).floor() as i32,
    )
}

/// Probe the grid around `ball`, claiming cells and reversing velocity.
///
/// Probes run in order against the grid as left by earlier probes, so two
/// probes landing in the same cell claim it once. Returns the number of cells
/// claimed.
pub fn detect_collision(ball: &mut Ball, grid: &mut Grid, cell_size: f32) -> usize {
    let radius = cell_size / 2.0;
    let mut claimed = 0;

    for dir in SAMPLE_DIRECTIONS {
        let (gx, gy) = cell_at(ball.pos + dir * radius, cell_size);

        let Some(color) = grid.get(gx, gy) else {
            continue;
        };
        if color == ball.secondary {
            continue;
        }

        grid.set_cell(gx, gy, ball.secondary);
        claimed += 1;

        // Strict comparison: diagonal probes reverse dy
        if dir.x.abs() > dir.y.abs() {
            ball.vel.x = -ball.vel.x;
        } else {
            ball.vel.y = -ball.vel.y;
        }
    }

    claimed
}
