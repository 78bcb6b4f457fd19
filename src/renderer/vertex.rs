//! Flat-colored 2D vertex and the fixed palette

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Position (screen pixels until uploaded, NDC on the GPU) plus RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(point: Vec2, color: [f32; 4]) -> Self {
        Self::new(point.x, point.y, color)
    }

    /// Map from screen pixels (origin top-left, y down) to normalized device
    /// coordinates (-1 to 1, y up)
    pub fn to_ndc(self, screen: (f32, f32)) -> Self {
        let (w, h) = screen;
        let [x, y] = self.position;
        Self::new(x / w * 2.0 - 1.0, 1.0 - y / h * 2.0, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Fixed colors; balls carry their own
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: [f32; 4] = rgb(0, 0, 0);
    pub const PADDLE: [f32; 4] = rgb(255, 255, 255);
    pub const TEXT: [f32; 4] = rgb(255, 255, 255);
    pub const TEXT_ACCENT: [f32; 4] = rgb(0, 255, 180);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ndc_corners() {
        let screen = (800.0, 600.0);
        let ndc = |x, y| Vertex::new(x, y, colors::TEXT).to_ndc(screen).position;

        assert_eq!(ndc(0.0, 0.0), [-1.0, 1.0]);
        assert_eq!(ndc(800.0, 600.0), [1.0, -1.0]);
        assert_eq!(ndc(400.0, 300.0), [0.0, 0.0]);
    }

    #[test]
    fn test_palette_matches_ball_color_conversion() {
        use crate::sim::Rgb;

        assert_eq!(colors::TEXT_ACCENT, Rgb::TEAL.to_rgba());
        assert_eq!(colors::PADDLE, Rgb::WHITE.to_rgba());
    }

    #[test]
    fn test_layout_stride() {
        assert_eq!(Vertex::desc().array_stride, 24);
    }
}
