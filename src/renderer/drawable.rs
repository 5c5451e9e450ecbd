//! Sprite-or-placeholder selection for every visible object

use super::{Placeholder, Shape, Surface, colors};
use crate::assets::{Assets, SpriteKey};
use crate::consts::{HEART_SIZE, HUD_PADDING, SHIELD_GAP};
use crate::sim::{
    Asteroid, Enemy, GameState, Ground, Hud, Pickup, PickupKind, Player, Projectile, Rect,
    Spawner,
};

/// Placeholder shape and color used when `key` has no sprite
pub fn placeholder(key: SpriteKey) -> Placeholder {
    let (shape, color) = match key {
        SpriteKey::Player | SpriteKey::PlayerCollided => (Shape::Rect, colors::PLAYER),
        SpriteKey::Asteroid => (Shape::Rect, colors::ASTEROID),
        SpriteKey::Enemy => (Shape::Rect, colors::ENEMY),
        SpriteKey::LifePickup => (Shape::Oval, colors::LIFE_PICKUP),
        SpriteKey::ShieldPickup => (Shape::Oval, colors::SHIELD_PICKUP),
        SpriteKey::Projectile => (Shape::Rect, colors::PROJECTILE),
        SpriteKey::Ground => (Shape::Rect, colors::GROUND),
        SpriteKey::Background => (Shape::Rect, colors::BACKGROUND),
        SpriteKey::FullHeart => (Shape::Rect, colors::FULL_HEART),
        SpriteKey::EmptyHeart => (Shape::Rect, colors::EMPTY_HEART),
    };
    Placeholder { shape, color }
}

fn draw_keyed(surface: &mut dyn Surface, assets: &Assets, key: SpriteKey, dest: Rect) {
    match assets.sprite(key) {
        Some(sprite) => surface.draw_sprite(sprite, dest),
        None => {
            let p = placeholder(key);
            surface.fill(p.shape, dest, p.color);
        }
    }
}

/// Anything that knows how to put itself on a `Surface`
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface, assets: &Assets);
}

impl Drawable for Player {
    fn draw(&self, surface: &mut dyn Surface, assets: &Assets) {
        let key = if self.collided() && !self.shield_active() {
            SpriteKey::PlayerCollided
        } else {
            SpriteKey::Player
        };
        draw_keyed(surface, assets, key, self.rect);
        if self.shield_active() {
            surface.stroke_oval(self.rect.inflate(SHIELD_GAP), colors::SHIELD_RING);
        }
    }
}

impl Drawable for Asteroid {
    fn draw(&self, surface: &mut dyn Surface, assets: &Assets) {
        draw_keyed(surface, assets, SpriteKey::Asteroid, self.rect);
    }
}

impl Drawable for Enemy {
    fn draw(&self, surface: &mut dyn Surface, assets: &Assets) {
        draw_keyed(surface, assets, SpriteKey::Enemy, self.rect);
    }
}

impl Drawable for Pickup {
    fn draw(&self, surface: &mut dyn Surface, assets: &Assets) {
        if !self.active {
            return;
        }
        let key = match self.kind {
            PickupKind::ExtraLife => SpriteKey::LifePickup,
            PickupKind::Shield => SpriteKey::ShieldPickup,
        };
        draw_keyed(surface, assets, key, self.rect);
    }
}

impl Drawable for Projectile {
    fn draw(&self, surface: &mut dyn Surface, assets: &Assets) {
        draw_keyed(surface, assets, SpriteKey::Projectile, self.rect);
    }
}

impl Drawable for Ground {
    fn draw(&self, surface: &mut dyn Surface, assets: &Assets) {
        draw_keyed(surface, assets, SpriteKey::Ground, self.rect);
    }
}

/// Slot `index` of the lives indicator, counted leftwards from the right edge
pub fn heart_slot(panel_width: i32, index: u8) -> Rect {
    let x = panel_width - (i32::from(index) + 1) * (HEART_SIZE + HUD_PADDING);
    Rect::new(x, HUD_PADDING, HEART_SIZE, HEART_SIZE)
}

/// One heart per life slot: full below the current lives, empty above
fn draw_hearts(hud: &Hud, panel_width: i32, surface: &mut dyn Surface, assets: &Assets) {
    for i in 0..hud.max_lives {
        let key = if i < hud.lives {
            SpriteKey::FullHeart
        } else {
            SpriteKey::EmptyHeart
        };
        draw_keyed(surface, assets, key, heart_slot(panel_width, i));
    }
}

impl Drawable for GameState {
    /// Background, lives, hazards, pickups, shots, ground, then the player on top
    fn draw(&self, surface: &mut dyn Surface, assets: &Assets) {
        let area = self.area();
        let screen = Rect::new(0, 0, area.panel_width, area.panel_height);
        draw_keyed(surface, assets, SpriteKey::Background, screen);
        draw_hearts(&self.hud(), area.panel_width, surface, assets);

        for asteroid in self.asteroids.entities() {
            asteroid.draw(surface, assets);
        }
        for enemy in self.enemies.entities() {
            enemy.draw(surface, assets);
        }
        for pickup in self.pickups.entities() {
            pickup.draw(surface, assets);
        }
        for projectile in self.projectiles.as_slice() {
            projectile.draw(surface, assets);
        }
        for ground in &self.grounds {
            ground.draw(surface, assets);
        }
        self.player.draw(surface, assets);
    }
}
