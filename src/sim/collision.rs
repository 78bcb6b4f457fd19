//! Axis-aligned collision helpers
//!
//! The playfield is a plain rectangle in screen coordinates (origin top-left,
//! y grows downward), so everything here is a handful of comparisons.

use glam::Vec2;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Point containment, half-open: the right and bottom edges are outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// True if a circle touches or crosses the left or right screen edge
#[inline]
pub fn touches_side_wall(center: Vec2, radius: f32, screen_width: f32) -> bool {
    center.x - radius <= 0.0 || center.x + radius >= screen_width
}

/// True if a circle touches or crosses the top screen edge
#[inline]
pub fn touches_ceiling(center: Vec2, radius: f32) -> bool {
    center.y - radius <= 0.0
}

/// True once the whole circle is below the bottom screen edge
#[inline]
pub fn below_floor(center: Vec2, radius: f32, screen_height: f32) -> bool {
    center.y - radius > screen_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(340.0, 560.0, 120.0, 20.0);

        assert!(rect.contains(Vec2::new(340.0, 560.0)));
        assert!(rect.contains(Vec2::new(459.9, 579.9)));
        // Right and bottom edges are excluded
        assert!(!rect.contains(Vec2::new(460.0, 570.0)));
        assert!(!rect.contains(Vec2::new(400.0, 580.0)));
        assert!(!rect.contains(Vec2::new(339.9, 570.0)));
    }

    #[test]
    fn test_side_walls() {
        assert!(touches_side_wall(Vec2::new(30.0, 100.0), 30.0, 800.0));
        assert!(touches_side_wall(Vec2::new(775.0, 100.0), 30.0, 800.0));
        assert!(!touches_side_wall(Vec2::new(400.0, 100.0), 30.0, 800.0));
    }

    #[test]
    fn test_ceiling_and_floor() {
        assert!(touches_ceiling(Vec2::new(400.0, 30.0), 30.0));
        assert!(!touches_ceiling(Vec2::new(400.0, 31.0), 30.0));

        // Ball is only gone once its top edge has left the screen
        assert!(!below_floor(Vec2::new(400.0, 630.0), 30.0, 600.0));
        assert!(below_floor(Vec2::new(400.0, 630.5), 30.0, 600.0));
    }
}
