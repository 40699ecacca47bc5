//! Shape generation for 2D primitives
//!
//! Turns recorded draw commands into triangle lists in pixel space. Text is
//! left to the font collaborator and produces no geometry.

use glam::Vec2;

use super::display_list::{DisplayList, DrawCommand};
use super::fallback_color;
use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect`
pub fn rect(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Four bands along the inside of `outer`
pub fn rect_outline(outer: Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(outer.width() / 2.0).min(outer.height() / 2.0);
    if t <= 0.0 {
        return Vec::new();
    }
    let inner_h = outer.height() - 2.0 * t;
    let bands = [
        Rect::new(outer.left(), outer.top(), outer.width(), t),
        Rect::new(outer.left(), outer.bottom() - t, outer.width(), t),
        Rect::new(outer.left(), outer.top() + t, t, inner_h),
        Rect::new(outer.right() - t, outer.top() + t, t, inner_h),
    ];
    let mut vertices = Vec::with_capacity(bands.len() * 6);
    for band in bands {
        vertices.extend_from_slice(&rect(band, color));
    }
    vertices
}

/// Triangulate a whole frame. `viewport` is the surface size used for clears.
pub fn tessellate(list: &DisplayList, viewport: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(list.len() * 6);
    for command in list.commands() {
        match command {
            DrawCommand::Clear(color) => {
                // A clear discards everything submitted before it
                vertices.clear();
                vertices.extend_from_slice(&rect(
                    Rect::new(0.0, 0.0, viewport.x, viewport.y),
                    *color,
                ));
            }
            DrawCommand::FillRect { rect: r, color } => {
                vertices.extend_from_slice(&rect(*r, *color));
            }
            DrawCommand::StrokeRect {
                rect: r,
                thickness,
                color,
            } => {
                vertices.extend(rect_outline(*r, *thickness, *color));
            }
            // Textured sprites go through the sprite batch; this pass only
            // emits the flat-color stand-in
            DrawCommand::Blit { sprite, rect: r } => {
                vertices.extend_from_slice(&rect(*r, fallback_color(*sprite)));
            }
            DrawCommand::Text { .. } => {}
        }
    }
    vertices
}

/// Map pixel coordinates (origin top-left, +y down) to clip space
pub fn to_clip_space(vertices: &mut [Vertex], viewport: Vec2) {
    for v in vertices {
        v.position = [
            v.position[0] / viewport.x * 2.0 - 1.0,
            1.0 - v.position[1] / viewport.y * 2.0,
        ];
    }
}

/// Raw bytes ready for a vertex buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Align, Canvas, colors};
    use crate::sim::Sprite;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_rect_corners() {
        let v = rect(Rect::new(10.0, 20.0, 30.0, 40.0), colors::WHITE);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_outline_bands() {
        assert_eq!(rect_outline(Rect::new(0.0, 0.0, 400.0, 30.0), 2.0, colors::WHITE).len(), 24);
        assert!(rect_outline(Rect::new(0.0, 0.0, 400.0, 30.0), 0.0, colors::WHITE).is_empty());
    }

    #[test]
    fn test_tessellate_frame() {
        let mut list = DisplayList::with_sprites([Sprite::Player]);
        list.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), colors::RED);
        list.clear(colors::BACKGROUND);
        list.blit(Sprite::Player, Rect::new(375.0, 500.0, 50.0, 40.0));
        list.text("LEVEL 1", Vec2::new(400.0, 10.0), Align::MidTop, 24.0, colors::CYAN);

        let vertices = tessellate(&list, VIEWPORT);
        // Clear quad + player quad; the earlier fill was discarded, text is skipped
        assert_eq!(vertices.len(), 12);
        assert_eq!(vertices[0].color, colors::BACKGROUND);
        assert_eq!(vertices[6].color, colors::PLAYER);
        assert_eq!(as_bytes(&vertices).len(), 12 * Vertex::STRIDE);
    }

    #[test]
    fn test_clip_space_corners() {
        let mut v = [Vertex::new(0.0, 0.0, colors::WHITE), Vertex::new(800.0, 600.0, colors::WHITE)];
        to_clip_space(&mut v, VIEWPORT);
        assert_eq!(v[0].position, [-1.0, 1.0]);
        assert_eq!(v[1].position, [1.0, -1.0]);
    }
}
