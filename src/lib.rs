//! Pong Wars - two balls fighting over a grid of day and night cells
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, balls, collisions, jitter)
//! - `frame`: Per-frame sequencing of drawing and simulation
//! - `renderer`: Canvas seam, vertex batching and the WebGPU pipeline
//! - `settings`: Startup configuration

pub mod frame;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use frame::{FrameReport, run_frame};
pub use settings::{Palette, Settings};

/// Simulation configuration constants
pub mod consts {
    /// Edge length of one grid cell (also the ball diameter)
    pub const CELL_SIZE: f32 = 25.0;

    /// Default surface size; must tile exactly by `CELL_SIZE`
    pub const SURFACE_WIDTH: u32 = 600;
    pub const SURFACE_HEIGHT: u32 = 600;

    /// Per-axis speed ceiling (units/frame)
    pub const SPEED_LIMIT: f32 = 10.0;
    /// Per-axis speed floor (units/frame)
    pub const MIN_SPEED: f32 = 5.0;
    /// Scale applied to `uniform[0,1) - 0.5` each frame (about ±0.05)
    pub const JITTER_AMPLITUDE: f32 = 0.1;
    /// Initial per-axis speed of both balls
    pub const BALL_START_SPEED: f32 = 7.0;

    /// Triangles per ball circle
    pub const CIRCLE_SEGMENTS: u32 = 24;

    /// Frames the native headless runner simulates (one minute at 60 Hz)
    pub const HEADLESS_FRAMES: u64 = 3600;
}
