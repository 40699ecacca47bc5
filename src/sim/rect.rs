//! Axis-aligned bounding boxes
//!
//! Screen space: origin at the top-left, +y points down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Build a rectangle of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Midpoint of the top edge
    pub fn top_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.top())
    }

    /// Midpoint of the bottom edge
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.bottom())
    }

    /// Strict overlap test; rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Shift horizontally so the box stays within `[min_x, max_x]`
    pub fn clamp_x(&mut self, min_x: f32, max_x: f32) {
        if self.left() < min_x {
            self.pos.x = min_x;
        }
        if self.right() > max_x {
            self.pos.x = max_x - self.size.x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 40.0, 30.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 50.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 50.0);
        assert_eq!(r.bottom_center(), Vec2::new(30.0, 50.0));
        assert_eq!(r.top_center(), Vec2::new(30.0, 20.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(100.0, 50.0), Vec2::new(5.0, 15.0));
        assert_eq!(r.center(), Vec2::new(100.0, 50.0));
        assert_eq!(r.top(), 42.5);
    }

    #[test]
    fn test_clamp_x() {
        let mut r = Rect::new(-12.0, 0.0, 50.0, 40.0);
        r.clamp_x(0.0, 800.0);
        assert_eq!(r.left(), 0.0);

        let mut r = Rect::new(790.0, 0.0, 50.0, 40.0);
        r.clamp_x(0.0, 800.0);
        assert_eq!(r.right(), 800.0);
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn prop_clamp_keeps_box_inside(x in -2000.0f32..2000.0, w in 1.0f32..200.0) {
            let mut r = Rect::new(x, 0.0, w, 10.0);
            r.clamp_x(0.0, 800.0);
            prop_assert!(r.left() >= 0.0);
            prop_assert!(r.right() <= 800.0 + 1e-3);
        }
    }
}
