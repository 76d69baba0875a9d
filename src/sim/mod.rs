//! Deterministic simulation module
//!
//! All simulation logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Injected RNG only
//! - Stable ball order
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod jitter;
pub mod state;
pub mod tick;
pub mod wall;

pub use collision::{SAMPLE_DIRECTIONS, detect_collision};
pub use grid::Grid;
pub use jitter::{SpeedLimits, apply_speed_jitter, update_ball_speed};
pub use state::{Arena, Ball, PaletteColor, SimState};
pub use tick::{BallTick, tick_ball};
pub use wall::{WallContact, check_wall_collision};
