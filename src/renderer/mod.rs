//! Rendering surface
//!
//! The simulation never draws. Screens describe a frame through the `Canvas`
//! trait; a platform backend implements it, and `DisplayList` records it
//! headlessly. Missing sprite art always degrades to a solid rectangle.

pub mod display_list;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::sim::{EnemyKind, Rect, Sprite, World};

pub use display_list::{DisplayList, DrawCommand};
pub use vertex::{Vertex, colors};

/// RGBA color, components in 0..=1
pub type Rgba = [f32; 4];

/// Which point of the text box `at` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    TopLeft,
    TopRight,
    MidTop,
    Center,
}

/// Font sizes used by the screens
pub mod font {
    pub const TITLE: f32 = 64.0;
    pub const LARGE: f32 = 48.0;
    pub const OPTION: f32 = 36.0;
    pub const HUD: f32 = 24.0;
    pub const SMALL: f32 = 18.0;
}

/// Drawable surface handed to screens once per frame
pub trait Canvas {
    fn clear(&mut self, color: Rgba);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Rectangle border of the given thickness, drawn inside `rect`
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Rgba);

    /// Whether art for `sprite` is loaded
    fn has_sprite(&self, sprite: Sprite) -> bool;

    fn blit(&mut self, sprite: Sprite, rect: Rect);

    fn text(&mut self, text: &str, at: Vec2, align: Align, size: f32, color: Rgba);
}

/// Solid color drawn when a sprite's art is unavailable
pub fn fallback_color(sprite: Sprite) -> Rgba {
    match sprite {
        Sprite::Player => colors::PLAYER,
        Sprite::Enemy(EnemyKind::Basic) => colors::ENEMY_BASIC,
        Sprite::Enemy(EnemyKind::Fast) => colors::ENEMY_FAST,
        Sprite::Enemy(EnemyKind::Tank) => colors::ENEMY_TANK,
        Sprite::PlayerBullet => colors::PLAYER_BULLET,
        Sprite::EnemyBullet => colors::ENEMY_BULLET,
    }
}

pub fn draw_sprite(canvas: &mut dyn Canvas, sprite: Sprite, rect: Rect) {
    if canvas.has_sprite(sprite) {
        canvas.blit(sprite, rect);
    } else {
        canvas.fill_rect(rect, fallback_color(sprite));
    }
}

/// Draw every live, visible entity in world draw order
pub fn draw_world(canvas: &mut dyn Canvas, world: &World) {
    for entity in world.entities().filter(|e| e.is_alive()) {
        if let Some(sprite) = entity.sprite() {
            draw_sprite(canvas, sprite, entity.bounds());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_missing_art_falls_back_to_fill() {
        let mut list = DisplayList::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        draw_sprite(&mut list, Sprite::Enemy(EnemyKind::Tank), rect);
        assert_eq!(
            list.commands(),
            &[DrawCommand::FillRect {
                rect,
                color: colors::ENEMY_TANK
            }]
        );
    }

    #[test]
    fn test_loaded_art_is_blitted() {
        let mut list = DisplayList::with_sprites([Sprite::Player]);
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        draw_sprite(&mut list, Sprite::Player, rect);
        draw_sprite(&mut list, Sprite::PlayerBullet, rect);
        assert_eq!(
            list.commands(),
            &[
                DrawCommand::Blit {
                    sprite: Sprite::Player,
                    rect
                },
                DrawCommand::FillRect {
                    rect,
                    color: colors::PLAYER_BULLET
                },
            ]
        );
    }

    #[test]
    fn test_draw_world_skips_hidden_player() {
        let settings = Settings::default();
        let mut world = World::new(&settings);
        world.player.take_damage();

        let mut list = DisplayList::new();
        draw_world(&mut list, &world);
        // Fresh invulnerability window starts on a hidden slice
        assert!(list.commands().is_empty());
    }
}
