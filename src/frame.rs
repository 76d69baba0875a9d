//! One animation frame: draw, then advance each ball
//!
//! Hosts call [`run_frame`] once per display refresh (or in a plain loop when
//! headless). Everything a frame touches is passed in; nothing is global.

use rand::Rng;

use crate::renderer::{Canvas, draw_ball, draw_grid};
use crate::sim::{SimState, tick_ball};

/// Summary of a completed frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Index of the frame just run (0-based)
    pub frame: u64,
    /// Cells repainted across all balls
    pub cells_claimed: usize,
    /// Wall bounces across all balls (a corner counts once)
    pub wall_contacts: usize,
}

/// Run a full frame: clear, paint the grid, then draw and tick each ball in order.
///
/// A ball is drawn at its position from before its own update; the grid is
/// painted before any ball changes it.
pub fn run_frame<C, R>(state: &mut SimState, canvas: &mut C, rng: &mut R) -> FrameReport
where
    C: Canvas + ?Sized,
    R: Rng,
{
    let SimState {
        arena,
        limits,
        grid,
        balls,
        frame,
    } = state;

    canvas.clear();
    draw_grid(canvas, grid, arena.cell_size);

    let mut report = FrameReport {
        frame: *frame,
        ..Default::default()
    };

    for ball in balls.iter_mut() {
        draw_ball(canvas, ball, arena.cell_size);
        let result = tick_ball(ball, grid, arena, limits, rng);
        report.cells_claimed += result.claimed;
        if result.wall.any() {
            report.wall_contacts += 1;
        }
    }

    *frame += 1;
    report
}
