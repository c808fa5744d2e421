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
}

/// Raw bytes for a GPU vertex buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const SHIP: [f32; 4] = [0.9, 0.9, 1.0, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 0.85, 0.3, 1.0];
    pub const ASTEROID_LARGE: [f32; 4] = [0.6, 0.55, 0.5, 1.0];
    pub const ASTEROID_MEDIUM: [f32; 4] = [0.7, 0.65, 0.55, 1.0];
    pub const ASTEROID_SMALL: [f32; 4] = [0.8, 0.75, 0.6, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.02, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_bytes_layout() {
        let vertices = [Vertex::new(1.0, 2.0, colors::SHIP); 2];
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(as_bytes(&vertices).len(), 48);
    }
}
