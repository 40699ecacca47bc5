//! Per-frame input snapshot
//!
//! The platform layer fills one `InputFrame` per tick: discrete key presses
//! for one-shot actions plus the set of keys currently held for movement.

use std::collections::HashSet;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    W,
    S,
    Space,
    Enter,
    Escape,
    P,
    R,
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    /// Keys that went down this frame, in arrival order
    pub pressed: Vec<Key>,
    /// Keys currently held
    pub held: HashSet<Key>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event (also marks the key as held)
    pub fn press(&mut self, key: Key) {
        self.pressed.push(key);
        self.held.insert(key);
    }

    pub fn hold(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn left_held(&self) -> bool {
        self.is_held(Key::Left) || self.is_held(Key::A)
    }

    pub fn right_held(&self) -> bool {
        self.is_held(Key::Right) || self.is_held(Key::D)
    }

    /// Forget this frame's presses, keep held keys for the next frame
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_marks_held() {
        let mut input = InputFrame::new();
        input.press(Key::A);
        assert!(input.was_pressed(Key::A));
        assert!(input.left_held());
        assert!(!input.right_held());
    }

    #[test]
    fn test_end_frame_keeps_held() {
        let mut input = InputFrame::new();
        input.press(Key::Right);
        input.end_frame();
        assert!(!input.was_pressed(Key::Right));
        assert!(input.right_held());
        input.release(Key::Right);
        assert!(!input.right_held());
    }
}
