//! Power-up pickups

use rand::Rng;
use rand_pcg::Pcg32;

use super::entity::Entity;
use super::geometry::{HitShape, Rect};
use super::player::Player;
use super::spawner::{Advance, SpawnArea, SpawnTimer, Spawner, SpawnerKind, draw_in};
use crate::consts::{PICKUP_SIZE, PICKUP_SPAWN_MS, PICKUP_SPEED, SHIELD_DURATION_MS};

/// Effect granted on collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    /// One extra life, up to the maximum
    ExtraLife,
    /// Temporary invulnerability
    Shield,
}

/// A collectible power-up
#[derive(Debug, Clone)]
pub struct Pickup {
    pub rect: Rect,
    pub kind: PickupKind,
    /// False once collected or scrolled off-screen; never reactivates
    pub active: bool,
}

impl Pickup {
    pub fn new(x: i32, y: i32, kind: PickupKind) -> Self {
        Self {
            rect: Rect::new(x, y, PICKUP_SIZE, PICKUP_SIZE),
            kind,
            active: true,
        }
    }

    /// Apply the effect to `player` and deactivate. No-op once inactive.
    pub fn collect(&mut self, player: &mut Player, now_ms: u64) -> bool {
        if !self.active {
            return false;
        }
        match self.kind {
            PickupKind::ExtraLife => player.add_life(),
            PickupKind::Shield => player.activate_shield(SHIELD_DURATION_MS, now_ms),
        }
        self.active = false;
        true
    }
}

impl Entity for Pickup {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn hit_shape(&self) -> HitShape {
        HitShape::Ellipse
    }

    fn update(&mut self) {
        self.rect.x -= PICKUP_SPEED;
        if self.rect.is_off_screen_left() {
            self.active = false;
        }
    }
}

/// Spawner for power-ups
#[derive(Debug, Clone)]
pub struct PickupSpawner {
    area: SpawnArea,
    pickups: Vec<Pickup>,
    timer: SpawnTimer,
}

impl PickupSpawner {
    pub fn new(area: SpawnArea) -> Self {
        Self {
            area,
            pickups: Vec::new(),
            timer: SpawnTimer::new(PICKUP_SPAWN_MS),
        }
    }

    /// Insert a pickup at the right edge at height `y`
    pub fn spawn_at(&mut self, y: i32, kind: PickupKind) {
        self.pickups.push(Pickup::new(self.area.panel_width, y, kind));
    }

    /// Pickups that are still collectible (and drawn)
    pub fn active(&self) -> impl Iterator<Item = &Pickup> {
        self.pickups.iter().filter(|p| p.active)
    }
}

impl Spawner for PickupSpawner {
    type Item = Pickup;

    fn kind(&self) -> SpawnerKind {
        SpawnerKind::Pickups
    }

    fn timer(&self) -> &SpawnTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut SpawnTimer {
        &mut self.timer
    }

    fn entities(&self) -> &[Pickup] {
        &self.pickups
    }

    fn entities_mut(&mut self) -> &mut Vec<Pickup> {
        &mut self.pickups
    }

    fn spawn(&mut self, rng: &mut Pcg32) {
        let y = draw_in(rng, 0, self.area.floor_for(PICKUP_SIZE));
        let kind = if rng.random_bool(0.5) {
            PickupKind::ExtraLife
        } else {
            PickupKind::Shield
        };
        self.spawn_at(y, kind);
        log::debug!("{kind:?} pickup spawned at y {y}");
    }
}

impl Advance for PickupSpawner {}
