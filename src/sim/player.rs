//! The player's UFO: gravity, jumps, lives and timed effects

use super::entity::Entity;
use super::geometry::Rect;
use super::projectiles::Projectile;
use crate::consts::{
    COLLIDED_FLASH_MS, GRAVITY, JUMP_STRENGTH, MAX_LIVES, MAX_VELOCITY_Y, PLAYER_HEIGHT,
    PLAYER_WIDTH,
};

/// The controlled entity
///
/// Shield and collided flags expire at wall-clock deadlines. Deadlines are
/// resolved by `expire_timers`, which the tick calls before anything else.
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub velocity_y: i32,
    lives: u8,
    shield_active: bool,
    shield_until: Option<u64>,
    collided: bool,
    collided_until: Option<u64>,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            velocity_y: 0,
            lives: MAX_LIVES,
            shield_active: false,
            shield_until: None,
            collided: false,
            collided_until: None,
        }
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn max_lives(&self) -> u8 {
        MAX_LIVES
    }

    pub fn shield_active(&self) -> bool {
        self.shield_active
    }

    /// Cosmetic hit flag (selects the damaged sprite)
    pub fn collided(&self) -> bool {
        self.collided
    }

    /// Jump: negative impulse, never above the top edge
    pub fn jump(&mut self) {
        self.velocity_y = JUMP_STRENGTH;
        self.rect.y = self.rect.y.max(0);
    }

    /// Raise the shield for `duration_ms` from `now_ms`, replacing any
    /// remaining time from an earlier shield
    pub fn activate_shield(&mut self, duration_ms: u64, now_ms: u64) {
        self.shield_active = true;
        self.shield_until = Some(now_ms + duration_ms);
        log::debug!("Shield up until {}ms", now_ms + duration_ms);
    }

    /// Lose a life unless shielded
    pub fn decrease_lives(&mut self) {
        if !self.shield_active {
            self.lives = self.lives.saturating_sub(1);
        }
    }

    /// Gain a life, capped at `MAX_LIVES`
    pub fn add_life(&mut self) {
        self.lives = (self.lives + 1).min(MAX_LIVES);
    }

    /// Set the hit flag; setting it starts a short independent reset timer
    pub fn set_collided(&mut self, collided: bool, now_ms: u64) {
        self.collided = collided;
        self.collided_until = collided.then_some(now_ms + COLLIDED_FLASH_MS);
    }

    /// Resolve any deadlines that have passed by `now_ms`
    pub fn expire_timers(&mut self, now_ms: u64) {
        if self.shield_until.is_some_and(|t| now_ms >= t) {
            self.shield_active = false;
            self.shield_until = None;
            log::debug!("Shield expired");
        }
        if self.collided_until.is_some_and(|t| now_ms >= t) {
            self.collided = false;
            self.collided_until = None;
        }
    }

    /// Projectile leaving the muzzle (front edge, vertical middle)
    pub fn shoot(&self) -> Projectile {
        Projectile::new(self.rect.x + PLAYER_WIDTH, self.rect.y + PLAYER_HEIGHT / 2)
    }
}

impl Entity for Player {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self) {
        self.velocity_y = (self.velocity_y + GRAVITY).min(MAX_VELOCITY_Y);
        self.rect.y += self.velocity_y;
    }

    fn is_off_screen(&self) -> bool {
        false
    }
}
