//! Drawing seam
//!
//! The game never talks to a window directly. Everything visible is pushed
//! through a `Surface`, which a host backend implements. This module only
//! decides *what* to draw: a sprite when one is loaded, otherwise a solid
//! placeholder shape.

pub mod drawable;

pub use drawable::{Drawable, heart_slot, placeholder};

use crate::assets::Sprite;
use crate::sim::Rect;

/// RGBA, each channel 0.0..=1.0
pub type Color = [f32; 4];

/// Placeholder outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rect,
    Oval,
}

/// Solid stand-in for a missing sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placeholder {
    pub shape: Shape,
    pub color: Color,
}

/// Render target implemented by a backend
pub trait Surface {
    /// Blit `sprite` scaled into `dest`
    fn draw_sprite(&mut self, sprite: &Sprite, dest: Rect);
    /// Fill `dest` with a solid shape
    fn fill(&mut self, shape: Shape, dest: Rect, color: Color);
    /// Outline an oval inscribed in `dest`
    fn stroke_oval(&mut self, dest: Rect, color: Color);
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const PLAYER: Color = [0.0, 1.0, 0.0, 1.0];
    pub const ASTEROID: Color = [0.25, 0.25, 0.25, 1.0];
    pub const ENEMY: Color = [1.0, 0.78, 0.0, 1.0];
    pub const LIFE_PICKUP: Color = [1.0, 0.0, 0.0, 1.0];
    pub const SHIELD_PICKUP: Color = [0.0, 0.0, 1.0, 1.0];
    pub const PROJECTILE: Color = [1.0, 1.0, 0.0, 1.0];
    pub const GROUND: Color = [0.5, 0.5, 0.5, 1.0];
    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const SHIELD_RING: Color = [0.0, 1.0, 1.0, 1.0];
    pub const FULL_HEART: Color = [1.0, 0.0, 0.0, 1.0];
    pub const EMPTY_HEART: Color = [0.5, 0.5, 0.5, 1.0];
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sprite { name: String, dest: Rect },
    Fill { shape: Shape, dest: Rect, color: Color },
    StrokeOval { dest: Rect, color: Color },
}

/// Surface that just remembers what was drawn (headless runs and tests)
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_sprite(&mut self, sprite: &Sprite, dest: Rect) {
        self.calls.push(DrawCall::Sprite {
            name: sprite.name.clone(),
            dest,
        });
    }

    fn fill(&mut self, shape: Shape, dest: Rect, color: Color) {
        self.calls.push(DrawCall::Fill { shape, dest, color });
    }

    fn stroke_oval(&mut self, dest: Rect, color: Color) {
        self.calls.push(DrawCall::StrokeOval { dest, color });
    }
}
