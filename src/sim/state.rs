//! Simulation state and core types
//!
//! Everything a frame reads or writes lives in [`SimState`], owned by the host.

use glam::Vec2;

use super::grid::Grid;
use super::jitter::SpeedLimits;
use crate::settings::Settings;

/// The four colors a cell or ball can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    /// Left-half background ("day")
    Light,
    /// Right-half background ("night")
    Dark,
    /// Ball that starts on the light side
    LightBall,
    /// Ball that starts on the dark side
    DarkBall,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 4] = [
        PaletteColor::Light,
        PaletteColor::Dark,
        PaletteColor::LightBall,
        PaletteColor::DarkBall,
    ];

    /// Index into a four-entry color table
    pub fn index(self) -> usize {
        match self {
            PaletteColor::Light => 0,
            PaletteColor::Dark => 1,
            PaletteColor::LightBall => 2,
            PaletteColor::DarkBall => 3,
        }
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    /// Fill color when drawn
    pub primary: PaletteColor,
    /// Color painted onto the cells it touches
    pub secondary: PaletteColor,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, primary: PaletteColor, secondary: PaletteColor) -> Self {
        Self {
            pos,
            vel,
            primary,
            secondary,
        }
    }

    /// Advance position by one frame of velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// Grid-aligned playing field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub cell_size: f32,
}

impl Arena {
    /// Build an arena from a surface size in whole units.
    ///
    /// A surface that is not an exact multiple of `cell_size` is truncated to
    /// the largest tiled area; the leftover strip is neither simulated nor drawn.
    pub fn from_surface(width: u32, height: u32, cell_size: u32) -> Self {
        let columns = width / cell_size;
        let rows = height / cell_size;
        if width % cell_size != 0 || height % cell_size != 0 {
            log::warn!(
                "Surface {}x{} does not tile by {}, using {}x{}",
                width,
                height,
                cell_size,
                columns * cell_size,
                rows * cell_size
            );
        }
        Self {
            width: (columns * cell_size) as f32,
            height: (rows * cell_size) as f32,
            cell_size: cell_size as f32,
        }
    }

    pub fn columns(&self) -> usize {
        (self.width / self.cell_size) as usize
    }

    pub fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize
    }

    /// Balls are drawn and collide with this radius
    pub fn ball_radius(&self) -> f32 {
        self.cell_size / 2.0
    }

    /// Whether a point keeps a ball fully inside the arena
    pub fn contains_ball(&self, pos: Vec2) -> bool {
        let r = self.ball_radius();
        pos.x >= r && pos.x <= self.width - r && pos.y >= r && pos.y <= self.height - r
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    pub arena: Arena,
    pub limits: SpeedLimits,
    pub grid: Grid,
    /// Iterated in order every frame; never reordered
    pub balls: Vec<Ball>,
    /// Frames completed so far
    pub frame: u64,
}

impl SimState {
    /// Fresh state: split grid and one ball per half on opposite diagonals
    pub fn new(arena: Arena, limits: SpeedLimits, start_speed: f32) -> Self {
        let grid = Grid::for_arena(&arena);
        let mid_y = arena.height / 2.0;

        let balls = vec![
            Ball::new(
                Vec2::new(arena.width / 4.0, mid_y),
                Vec2::new(start_speed, -start_speed),
                PaletteColor::LightBall,
                PaletteColor::Dark,
            ),
            Ball::new(
                Vec2::new(arena.width * 3.0 / 4.0, mid_y),
                Vec2::new(-start_speed, start_speed),
                PaletteColor::DarkBall,
                PaletteColor::Light,
            ),
        ];

        Self {
            arena,
            limits,
            grid,
            balls,
            frame: 0,
        }
    }

    /// Validate settings and build the initial state from them
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        settings.validate()?;
        let arena = Arena::from_surface(
            settings.surface_width,
            settings.surface_height,
            settings.cell_size,
        );
        let limits = SpeedLimits {
            max: settings.speed_limit,
            min: settings.min_speed,
            jitter: settings.jitter,
        };
        Ok(Self::new(arena, limits, settings.start_speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_exact_tiling() {
        let arena = Arena::from_surface(600, 400, 25);
        assert_eq!(arena.width, 600.0);
        assert_eq!(arena.height, 400.0);
        assert_eq!(arena.columns(), 24);
        assert_eq!(arena.rows(), 16);
        assert_eq!(arena.ball_radius(), 12.5);
    }

    #[test]
    fn test_arena_truncates_partial_cells() {
        let arena = Arena::from_surface(610, 599, 25);
        assert_eq!(arena.width, 600.0);
        assert_eq!(arena.height, 575.0);
        assert_eq!(arena.columns(), 24);
        assert_eq!(arena.rows(), 23);
    }

    #[test]
    fn test_initial_balls_claim_opposite_half() {
        let arena = Arena::from_surface(600, 600, 25);
        let state = SimState::new(arena, SpeedLimits::default(), 7.0);
        assert_eq!(state.balls.len(), 2);

        for ball in &state.balls {
            let x = (ball.pos.x / arena.cell_size).floor() as i32;
            let y = (ball.pos.y / arena.cell_size).floor() as i32;
            let home = state.grid.get(x, y).unwrap();
            assert_ne!(home, ball.secondary);
            assert!(matches!(
                ball.secondary,
                PaletteColor::Light | PaletteColor::Dark
            ));
        }

        assert_eq!(state.balls[0].pos, Vec2::new(150.0, 300.0));
        assert_eq!(state.balls[0].vel, Vec2::new(7.0, -7.0));
        assert_eq!(state.balls[1].pos, Vec2::new(450.0, 300.0));
        assert_eq!(state.balls[1].vel, Vec2::new(-7.0, 7.0));
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_from_settings_rejects_invalid() {
        let settings = Settings {
            cell_size: 0,
            ..Default::default()
        };
        assert!(SimState::from_settings(&settings).is_err());
        assert!(SimState::from_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_palette_indices_distinct() {
        let mut seen = [false; 4];
        for color in PaletteColor::ALL {
            assert!(!seen[color.index()]);
            seen[color.index()] = true;
        }
    }
}
