//! GPU-ready vertex layout and the game palette

use bytemuck::{Pod, Zeroable};

/// Screen-space position plus RGBA, 24 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Bytes per vertex in an uploaded buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of `color` within a vertex
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Palette shared by screens and sprite fallbacks
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GRAY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const MAGENTA: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    /// Half-transparent black drawn under pause / game over text
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.5];

    pub const PLAYER: [f32; 4] = [0.0, 0.39, 1.0, 1.0];
    pub const ENEMY_BASIC: [f32; 4] = CYAN;
    pub const ENEMY_FAST: [f32; 4] = YELLOW;
    pub const ENEMY_TANK: [f32; 4] = MAGENTA;
    pub const PLAYER_BULLET: [f32; 4] = YELLOW;
    pub const ENEMY_BULLET: [f32; 4] = RED;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_packed() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 8);
        let v = Vertex::new(1.0, 2.0, colors::WHITE);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), Vertex::STRIDE);
    }
}
