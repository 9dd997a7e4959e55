//! Vertex types for the lit wheel mesh

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// 3D vertex with normal, linear color and emissive strength
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
    pub emissive: f32,
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, color: [f32; 4], emissive: f32) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color,
            emissive,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const F32: wgpu::BufferAddress = std::mem::size_of::<f32>() as wgpu::BufferAddress;
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 3 * F32,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 6 * F32,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: 10 * F32,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Convert one sRGB channel to linear
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// 0xRRGGBB (sRGB) to linear RGBA
pub fn hex_color(hex: u32) -> [f32; 4] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [channel(16), channel(8), channel(0), 1.0]
}

/// Colors for scene elements (sRGB hex)
pub mod colors {
    pub const BACKGROUND: u32 = 0x667eea;
    pub const BASE: u32 = 0xffffff;
    pub const MARKER: u32 = 0xffffff;
    pub const GOLD: u32 = 0xffd700;
    pub const SEGMENTS: [u32; 8] = [
        0xff6b6b, 0xf093fb, 0x4ecdc4, 0xffe66d, 0xa8e6cf, 0xff8c94, 0xc7ceea, 0xffd3b6,
    ];
    pub const KEY_LIGHT: u32 = 0xffffff;
    pub const FILL_LIGHT: u32 = 0xf093fb;
    pub const POINT_LIGHT: u32 = 0xf5576c;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 11 * 4);
    }

    #[test]
    fn test_hex_color_extremes() {
        let white = hex_color(0xffffff);
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-5));
        assert_eq!(hex_color(0x000000), [0.0, 0.0, 0.0, 1.0]);
        let c = hex_color(0x808080);
        // Mid grey is darker in linear space
        assert!(c[0] > 0.2 && c[0] < 0.23);
    }
}
