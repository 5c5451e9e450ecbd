//! Screen-space geometry for hit testing
//!
//! Entities are axis-aligned boxes in integer screen units (y grows downward).
//! Some entities collide with the ellipse inscribed in their box instead of
//! the box itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in screen space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Horizontal midpoint
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True once the box has scrolled fully past the left edge
    #[inline]
    pub fn is_off_screen_left(&self) -> bool {
        self.right() < 0
    }

    /// Interior overlap test (touching edges do not intersect)
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Grow the box by `pad` on every side
    pub fn inflate(&self, pad: i32) -> Rect {
        Rect::new(
            self.x - pad,
            self.y - pad,
            self.width + pad * 2,
            self.height + pad * 2,
        )
    }
}

/// Collision outline of an entity, relative to its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitShape {
    /// The bounding box itself
    Rect,
    /// Ellipse inscribed in the bounding box
    Ellipse,
}

impl HitShape {
    /// Test this shape (laid out in `bounds`) against a plain rectangle
    pub fn intersects_rect(self, bounds: &Rect, other: &Rect) -> bool {
        match self {
            HitShape::Rect => bounds.intersects(other),
            HitShape::Ellipse => ellipse_intersects_rect(bounds, other),
        }
    }
}

/// Test whether the ellipse inscribed in `ellipse_bounds` overlaps `rect`
///
/// Scaling space by the ellipse radii turns the ellipse into a unit circle and
/// keeps the rectangle axis-aligned, so the closest rectangle point to the
/// centre can be found by clamping per axis.
pub fn ellipse_intersects_rect(ellipse_bounds: &Rect, rect: &Rect) -> bool {
    if ellipse_bounds.is_empty() || rect.is_empty() {
        return false;
    }

    let radii = Vec2::new(
        ellipse_bounds.width as f32 / 2.0,
        ellipse_bounds.height as f32 / 2.0,
    );
    let center = Vec2::new(ellipse_bounds.x as f32, ellipse_bounds.y as f32) + radii;

    let min = Vec2::new(rect.x as f32, rect.y as f32);
    let max = Vec2::new(rect.right() as f32, rect.bottom() as f32);
    let closest = center.clamp(min, max);

    let normalized = (closest - center) / radii;
    normalized.length_squared() < 1.0
}
