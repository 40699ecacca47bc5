//! Headless canvas that records draw commands

use std::collections::HashSet;

use glam::Vec2;

use super::{Align, Canvas, Rgba};
use crate::sim::{Rect, Sprite};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    StrokeRect {
        rect: Rect,
        thickness: f32,
        color: Rgba,
    },
    Blit {
        sprite: Sprite,
        rect: Rect,
    },
    Text {
        text: String,
        at: Vec2,
        align: Align,
        size: f32,
        color: Rgba,
    },
}

/// One frame's worth of draw commands, in submission order
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    sprites: HashSet<Sprite>,
}

impl DisplayList {
    /// A list with no sprite art loaded; every sprite uses its fallback color
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sprites(sprites: impl IntoIterator<Item = Sprite>) -> Self {
        Self {
            commands: Vec::new(),
            sprites: sprites.into_iter().collect(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop recorded commands, keeping the loaded sprite set
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Every string drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

impl Canvas for DisplayList {
    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            thickness,
            color,
        });
    }

    fn has_sprite(&self, sprite: Sprite) -> bool {
        self.sprites.contains(&sprite)
    }

    fn blit(&mut self, sprite: Sprite, rect: Rect) {
        self.commands.push(DrawCommand::Blit { sprite, rect });
    }

    fn text(&mut self, text: &str, at: Vec2, align: Align, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            at,
            align,
            size,
            color,
        });
    }
}
