//! Per-ball simulation step
//!
//! One call advances a single ball by one frame. Order matters: the grid
//! probe and wall check both act on the velocity used for this frame's move,
//! and jitter only affects the next frame.

use rand::Rng;

use super::collision::detect_collision;
use super::grid::Grid;
use super::jitter::{SpeedLimits, update_ball_speed};
use super::state::{Arena, Ball};
use super::wall::{WallContact, check_wall_collision};

/// What happened to one ball during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallTick {
    /// Cells repainted to the ball's secondary color
    pub claimed: usize,
    pub wall: WallContact,
}

/// Advance one ball: grid collision, wall bounce, move, jitter
pub fn tick_ball<R: Rng>(
    ball: &mut Ball,
    grid: &mut Grid,
    arena: &Arena,
    limits: &SpeedLimits,
    rng: &mut R,
) -> BallTick {
    let claimed = detect_collision(ball, grid, arena.cell_size);
    let wall = check_wall_collision(ball, arena);
    ball.integrate();
    update_ball_speed(ball, limits, rng);

    if claimed > 0 || wall.any() {
        log::trace!(
            "{:?} ball claimed {} cells, wall {:?}, now at {:?}",
            ball.primary,
            claimed,
            wall,
            ball.pos
        );
    }

    BallTick { claimed, wall }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PaletteColor;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_tick_moves_by_pre_jitter_velocity() {
        let arena = Arena::from_surface(600, 600, 25);
        let mut grid = Grid::for_arena(&arena);
        let limits = SpeedLimits::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = Ball::new(
            Vec2::new(450.0, 300.0),
            Vec2::new(7.0, -7.0),
            PaletteColor::LightBall,
            PaletteColor::Dark,
        );

        let result = tick_ball(&mut ball, &mut grid, &arena, &limits, &mut rng);

        // Surrounded by cells already dark: nothing to claim, no wall nearby
        assert_eq!(result, BallTick::default());
        assert_eq!(ball.pos, Vec2::new(457.0, 293.0));
        assert!((ball.vel.x - 7.0).abs() <= 0.05);
        assert!((ball.vel.y + 7.0).abs() <= 0.05);
    }

    #[test]
    fn test_tick_wall_bounce_then_move() {
        let arena = Arena::from_surface(600, 600, 25);
        let mut grid = Grid::for_arena(&arena);
        let limits = SpeedLimits::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut ball = Ball::new(
            Vec2::new(15.0, 300.0),
            Vec2::new(-6.0, 6.0),
            PaletteColor::DarkBall,
            PaletteColor::Light,
        );

        let result = tick_ball(&mut ball, &mut grid, &arena, &limits, &mut rng);

        assert!(result.wall.horizontal);
        assert_eq!(ball.pos, Vec2::new(21.0, 306.0));
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_tick_claims_enemy_cell_and_bounces() {
        let arena = Arena::from_surface(600, 600, 25);
        let mut grid = Grid::for_arena(&arena);
        let limits = SpeedLimits::default();
        let mut rng = Pcg32::seed_from_u64(3);
        // Dark ball centered in cell (11,12); only its 0° probe reaches column 12
        let mut ball = Ball::new(
            Vec2::new(287.5, 312.5),
            Vec2::new(7.0, 7.0),
            PaletteColor::DarkBall,
            PaletteColor::Light,
        );

        let result = tick_ball(&mut ball, &mut grid, &arena, &limits, &mut rng);

        assert_eq!(result.claimed, 1);
        assert!(!result.wall.any());
        assert_eq!(grid.get(12, 12), Some(PaletteColor::Light));
        assert_eq!(ball.pos, Vec2::new(280.5, 319.5));
    }
}
