//! Drawing seam between the frame loop and a concrete surface

use glam::Vec2;

use super::shapes;
use super::vertex::{ColorTable, Vertex};
use crate::consts::CIRCLE_SEGMENTS;
use crate::sim::{Ball, Grid, PaletteColor};

/// A 2D surface in simulation units, origin top-left, y down
pub trait Canvas {
    /// Discard everything drawn so far this frame
    fn clear(&mut self);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: PaletteColor);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: PaletteColor);
}

/// Paint every cell as a filled square
pub fn draw_grid<C: Canvas + ?Sized>(canvas: &mut C, grid: &Grid, cell_size: f32) {
    let size = Vec2::splat(cell_size);
    for (x, y, color) in grid.iter() {
        canvas.fill_rect(Vec2::new(x as f32, y as f32) * cell_size, size, color);
    }
}

/// Paint a ball in its primary color
pub fn draw_ball<C: Canvas + ?Sized>(canvas: &mut C, ball: &Ball, cell_size: f32) {
    canvas.fill_circle(ball.pos, cell_size / 2.0, ball.primary);
}

/// Batches draw calls into a triangle list for the GPU pipeline
#[derive(Debug, Clone)]
pub struct VertexCanvas {
    colors: ColorTable,
    vertices: Vec<Vertex>,
}

impl VertexCanvas {
    pub fn new(colors: ColorTable) -> Self {
        Self {
            colors,
            vertices: Vec::new(),
        }
    }

    /// Triangles drawn since the last clear
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Canvas for VertexCanvas {
    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: PaletteColor) {
        let rgba = self.colors.rgba(color);
        self.vertices.extend(shapes::rect(origin, size, rgba));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: PaletteColor) {
        let rgba = self.colors.rgba(color);
        self.vertices
            .extend(shapes::circle(center, radius, rgba, CIRCLE_SEGMENTS));
    }
}

/// Discards all drawing (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self) {}
    fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, _color: PaletteColor) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: PaletteColor) {}
}
