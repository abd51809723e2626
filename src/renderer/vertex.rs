//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

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

/// Convert an 8-bit RGB triple to an opaque vertex color
pub fn rgb(c: [u8; 3]) -> [f32; 4] {
    [
        c[0] as f32 / 255.0,
        c[1] as f32 / 255.0,
        c[2] as f32 / 255.0,
        1.0,
    ]
}

/// Colors for game elements (8-bit sRGB)
pub mod colors {
    pub const BACKGROUND: [u8; 3] = [0, 0, 0];
    pub const GRID: [u8; 3] = [20, 20, 20];
    pub const FLOOR: [u8; 3] = [255, 255, 255];
    pub const BUMPER: [u8; 3] = [255, 255, 0];
    pub const HUD_TEXT: [u8; 3] = [100, 100, 100];
    pub const SCORE: [u8; 3] = [255, 255, 0];
    pub const GAME_OVER: [u8; 3] = [255, 0, 0];
    pub const PROMPT: [u8; 3] = [255, 255, 255];
}
