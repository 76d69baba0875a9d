//! Rendering module
//!
//! The frame loop draws through [`Canvas`]; [`VertexCanvas`] batches those
//! calls into triangles that [`RenderState`] presents with WebGPU.

pub mod canvas;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, NullCanvas, VertexCanvas, draw_ball, draw_grid};
pub use pipeline::RenderState;
pub use vertex::{ColorTable, Vertex};
