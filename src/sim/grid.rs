//! Cell grid covering the arena

use super::state::{Arena, PaletteColor};

/// Fixed-size grid of palette colors, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<PaletteColor>,
}

impl Grid {
    /// Columns strictly left of the midpoint get `light`, the rest `dark`
    pub fn new(columns: usize, rows: usize, light: PaletteColor, dark: PaletteColor) -> Self {
        let midpoint = columns as f32 / 2.0;
        let mut cells = Vec::with_capacity(columns * rows);
        for _ in 0..rows {
            for x in 0..columns {
                cells.push(if (x as f32) < midpoint { light } else { dark });
            }
        }
        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Grid tiling the arena, light on the left and dark on the right
    pub fn for_arena(arena: &Arena) -> Self {
        Self::new(
            arena.columns(),
            arena.rows(),
            PaletteColor::Light,
            PaletteColor::Dark,
        )
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.columns || y >= self.rows {
            return None;
        }
        Some(y * self.columns + x)
    }

    /// Color at a cell, `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<PaletteColor> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Recolor a cell; coordinates outside the grid are ignored
    pub fn set_cell(&mut self, x: i32, y: i32, color: PaletteColor) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = color;
        }
    }

    /// Number of cells currently holding `color`
    pub fn count(&self, color: PaletteColor) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Cells with their grid coordinates, row by row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, PaletteColor)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i % columns, i / columns, c))
    }
}
