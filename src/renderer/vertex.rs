//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::settings::{Palette, parse_hex_color};
use crate::sim::PaletteColor;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// RGBA for each palette entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTable {
    rgba: [[f32; 4]; 4],
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            rgba: [
                [0.902, 0.902, 0.902, 1.0], // #e6e6e6
                [0.259, 0.259, 0.267, 1.0], // #424244
                [0.882, 0.373, 0.373, 1.0], // #e15f5f
                [0.373, 0.643, 0.882, 1.0], // #5fa4e1
            ],
        }
    }
}

impl ColorTable {
    /// Resolve every hex entry of a palette
    pub fn from_palette(palette: &Palette) -> anyhow::Result<Self> {
        let mut rgba = [[0.0; 4]; 4];
        for color in PaletteColor::ALL {
            rgba[color.index()] = parse_hex_color(palette.hex(color))?;
        }
        Ok(Self { rgba })
    }

    #[inline]
    pub fn rgba(&self, color: PaletteColor) -> [f32; 4] {
        self.rgba[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_matches_default_palette() {
        let parsed = ColorTable::from_palette(&Palette::default()).unwrap();
        let fallback = ColorTable::default();
        for color in PaletteColor::ALL {
            let (a, b) = (parsed.rgba(color), fallback.rgba(color));
            for i in 0..4 {
                assert!((a[i] - b[i]).abs() < 0.001, "{:?} channel {}", color, i);
            }
        }
    }

    #[test]
    fn test_bad_palette_rejected() {
        let palette = Palette {
            dark: "#12345".to_string(),
            ..Default::default()
        };
        assert!(ColorTable::from_palette(&palette).is_err());
    }
}
