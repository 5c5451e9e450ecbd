//! Player-fired projectiles

use super::entity::Entity;
use super::geometry::Rect;
use crate::consts::{PROJECTILE_HEIGHT, PROJECTILE_SPEED, PROJECTILE_WIDTH};

#[derive(Debug, Clone)]
pub struct Projectile {
    pub rect: Rect,
}

impl Projectile {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
        }
    }
}

impl Entity for Projectile {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self) {
        self.rect.x += PROJECTILE_SPEED;
    }
}

/// Live projectiles; not timer driven, filled by the shoot intent
#[derive(Debug, Clone)]
pub struct Projectiles {
    panel_width: i32,
    projectiles: Vec<Projectile>,
}

impl Projectiles {
    pub fn new(panel_width: i32) -> Self {
        Self {
            panel_width,
            projectiles: Vec::new(),
        }
    }

    pub fn add(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn as_slice(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    /// Remove and return the projectile at `index`
    pub fn remove(&mut self, index: usize) -> Projectile {
        self.projectiles.remove(index)
    }

    /// Advance every projectile and drop those outside the panel
    pub fn tick(&mut self) {
        for projectile in &mut self.projectiles {
            projectile.update();
        }
        let panel_width = self.panel_width;
        self.projectiles
            .retain(|p| p.rect.x <= panel_width && !p.rect.is_off_screen_left());
    }
}
