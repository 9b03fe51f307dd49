//! Axis-aligned rectangles for overlap testing
//!
//! World space has y growing downhill, so `top < bottom` for a well-formed rect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self::new(
            center.x - half.x,
            center.y - half.y,
            center.x + half.x,
            center.y + half.y,
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// True if the two rectangles overlap; touching edges count as overlap
pub fn intersect_two_rects(a: &Rect, b: &Rect) -> bool {
    !(b.left > a.right || b.right < a.left || b.top > a.bottom || b.bottom < a.top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = Rect::centered(Vec2::new(10.0, 20.0), Vec2::new(4.0, 8.0));
        assert_eq!(rect, Rect::new(8.0, 16.0, 12.0, 24.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 8.0);
    }

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert!(intersect_two_rects(&a, &b));
        assert!(intersect_two_rects(&b, &a));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 60.0, 60.0);
        assert!(intersect_two_rects(&outer, &inner));
        assert!(intersect_two_rects(&inner, &outer));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert!(intersect_two_rects(&a, &b));
    }

    #[test]
    fn test_separated_rects_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Right of a
        assert!(!intersect_two_rects(&a, &Rect::new(11.0, 0.0, 20.0, 10.0)));
        // Below a
        assert!(!intersect_two_rects(&a, &Rect::new(0.0, 10.5, 10.0, 20.0)));
        // Above-left of a
        assert!(!intersect_two_rects(&a, &Rect::new(-20.0, -20.0, -1.0, -1.0)));
    }
}
