//! Collision detection and resolution
//!
//! Damage checks (asteroids, ground, enemies) share one cooldown window so
//! overlapping hazards in the same tick, or in quick succession, cost a single
//! life. Pickup collection and projectile hits run every tick regardless.

use super::asteroids::Asteroid;
use super::enemies::EnemySquadron;
use super::entity::Entity;
use super::geometry::Rect;
use super::pickups::Pickup;
use super::player::Player;
use super::projectiles::Projectiles;
use super::spawner::Spawner;
use crate::consts::COLLISION_COOLDOWN_MS;

/// Which damage sources overlapped the player this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamageReport {
    pub asteroid: bool,
    pub ground: bool,
    pub enemy: bool,
}

impl DamageReport {
    pub fn any(&self) -> bool {
        self.asteroid || self.ground || self.enemy
    }
}

/// Outcome of one collision pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Set when a damaging hit was applied this tick
    pub damage: Option<DamageReport>,
    /// Pickups collected this tick
    pub pickups_collected: usize,
    /// Enemies destroyed by projectiles this tick
    pub enemies_destroyed: usize,
}

/// Everything the engine looks at in one pass
pub struct CollisionFrame<'a> {
    pub player: &'a mut Player,
    pub asteroids: &'a [Asteroid],
    pub enemies: &'a mut EnemySquadron,
    pub pickups: &'a mut [Pickup],
    pub projectiles: &'a mut Projectiles,
    /// Top of the ground strip
    pub ground_y: i32,
    /// Where the player is put back after touching the ground
    pub player_start_y: i32,
}

/// Collision engine with the shared damage cooldown
#[derive(Debug, Clone, Default)]
pub struct CollisionEngine {
    last_damage_ms: Option<u64>,
}

impl CollisionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time of the last applied damaging collision
    pub fn last_damage_ms(&self) -> Option<u64> {
        self.last_damage_ms
    }

    /// Whether damage checks run at `now_ms`
    pub fn cooldown_over(&self, now_ms: u64) -> bool {
        match self.last_damage_ms {
            Some(last) => now_ms.saturating_sub(last) >= COLLISION_COOLDOWN_MS,
            None => true,
        }
    }

    /// Run every collision check for this tick
    pub fn process(&mut self, frame: CollisionFrame<'_>, now_ms: u64) -> CollisionOutcome {
        let mut outcome = CollisionOutcome::default();

        if self.cooldown_over(now_ms) {
            let player_rect = frame.player.rect;
            let report = DamageReport {
                asteroid: hits_any(frame.asteroids, &player_rect),
                ground: player_rect.bottom() >= frame.ground_y,
                enemy: hits_any(frame.enemies.entities(), &player_rect),
            };

            if report.any() {
                self.last_damage_ms = Some(now_ms);
                frame.player.decrease_lives();
                frame.player.set_collided(true, now_ms);
                if report.ground {
                    frame.player.rect.y = frame.player_start_y;
                }
                log::debug!(
                    "Player hit ({:?}), lives now {}",
                    report,
                    frame.player.lives()
                );
                outcome.damage = Some(report);
            }
        }

        outcome.pickups_collected = collect_pickups(frame.player, frame.pickups, now_ms);
        outcome.enemies_destroyed = resolve_projectile_hits(frame.projectiles, frame.enemies);
        outcome
    }
}

/// True if any entity's hit shape overlaps `target`
fn hits_any<E: Entity>(entities: &[E], target: &Rect) -> bool {
    entities
        .iter()
        .any(|e| e.hit_shape().intersects_rect(&e.rect(), target))
}

/// Apply and deactivate every active pickup touching the player
fn collect_pickups(player: &mut Player, pickups: &mut [Pickup], now_ms: u64) -> usize {
    let player_rect = player.rect;
    let mut collected = 0;
    for pickup in pickups.iter_mut().filter(|p| p.active) {
        if pickup.hit_shape().intersects_rect(&pickup.rect, &player_rect)
            && pickup.collect(player, now_ms)
        {
            log::debug!("{:?} pickup collected", pickup.kind);
            collected += 1;
        }
    }
    collected
}

/// Each projectile destroys at most the first enemy it overlaps
fn resolve_projectile_hits(projectiles: &mut Projectiles, enemies: &mut EnemySquadron) -> usize {
    let mut destroyed = 0;
    let mut i = 0;
    while i < projectiles.len() {
        let shot = projectiles.as_slice()[i].rect;
        let hit = enemies
            .entities()
            .iter()
            .position(|enemy| enemy.rect.intersects(&shot));
        match hit {
            Some(enemy_index) => {
                projectiles.remove(i);
                enemies.remove(enemy_index);
                destroyed += 1;
            }
            None => i += 1,
        }
    }
    if destroyed > 0 {
        log::debug!("Projectiles destroyed {destroyed} enemies");
    }
    destroyed
}
