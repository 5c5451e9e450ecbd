//! Shared entity contract and the scrolling ground

use super::geometry::{HitShape, Rect};
use crate::consts::GROUND_SPEED;

/// Anything that lives in the play field and advances once per tick
pub trait Entity {
    /// Bounding box in screen space
    fn rect(&self) -> Rect;

    /// Outline used by the collision engine
    fn hit_shape(&self) -> HitShape {
        HitShape::Rect
    }

    /// Advance one tick
    fn update(&mut self);

    /// Whether the entity has left the visible area to the left
    fn is_off_screen(&self) -> bool {
        self.rect().is_off_screen_left()
    }
}

/// One tile of the endlessly scrolling floor
///
/// Two tiles placed side by side wrap around forever; ground is never
/// despawned.
#[derive(Debug, Clone)]
pub struct Ground {
    pub rect: Rect,
}

impl Ground {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }

    /// The pair of tiles covering the panel floor
    pub fn tiles(panel_width: i32, panel_height: i32, ground_height: i32) -> [Ground; 2] {
        let y = panel_height - ground_height;
        [
            Ground::new(0, y, panel_width, ground_height),
            Ground::new(panel_width, y, panel_width, ground_height),
        ]
    }
}

impl Entity for Ground {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self) {
        self.rect.x -= GROUND_SPEED;
        if self.rect.x <= -self.rect.width {
            // Back to the right of the sibling tile
            self.rect.x = self.rect.width;
        }
    }

    fn is_off_screen(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_wraps() {
        let mut tile = Ground::new(-695, 700, 700, 100);
        tile.update();
        assert_eq!(tile.rect.x, 700);
        assert!(!tile.is_off_screen());
    }

    #[test]
    fn test_ground_pair_stays_contiguous() {
        let mut tiles = Ground::tiles(700, 800, 100);
        for _ in 0..1000 {
            for tile in &mut tiles {
                tile.update();
            }
            let gap = (tiles[0].rect.x - tiles[1].rect.x).abs();
            assert_eq!(gap, 700);
        }
    }
}
