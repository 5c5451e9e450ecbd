//! Patrolling enemy ships

use rand_pcg::Pcg32;

use super::entity::Entity;
use super::geometry::Rect;
use super::spawner::{Advance, SpawnArea, SpawnTimer, Spawner, SpawnerKind, draw_in};
use crate::consts::{ENEMY_SIZE, ENEMY_SPAWN_MS, ENEMY_SPEED_X, ENEMY_SPEED_Y};

/// Enemy that drifts left while bouncing between vertical bounds
#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    pub min_y: i32,
    pub max_y: i32,
    pub moving_down: bool,
}

impl Enemy {
    pub fn new(x: i32, y: i32, area: &SpawnArea) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            min_y: 0,
            max_y: area.floor_for(ENEMY_SIZE),
            moving_down: true,
        }
    }
}

impl Entity for Enemy {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self) {
        self.rect.x -= ENEMY_SPEED_X;
        if self.moving_down {
            self.rect.y += ENEMY_SPEED_Y;
            if self.rect.y >= self.max_y {
                self.moving_down = false;
            }
        } else {
            self.rect.y -= ENEMY_SPEED_Y;
            if self.rect.y <= self.min_y {
                self.moving_down = true;
            }
        }
    }
}

/// Spawner for enemy ships
#[derive(Debug, Clone)]
pub struct EnemySquadron {
    area: SpawnArea,
    enemies: Vec<Enemy>,
    timer: SpawnTimer,
}

impl EnemySquadron {
    pub fn new(area: SpawnArea) -> Self {
        Self {
            area,
            enemies: Vec::new(),
            timer: SpawnTimer::new(ENEMY_SPAWN_MS),
        }
    }

    /// Insert an enemy at the right edge at height `y`
    pub fn spawn_at(&mut self, y: i32) {
        self.enemies
            .push(Enemy::new(self.area.panel_width, y, &self.area));
    }

    /// Remove and return the enemy at `index`
    pub fn remove(&mut self, index: usize) -> Enemy {
        self.enemies.remove(index)
    }
}

impl Spawner for EnemySquadron {
    type Item = Enemy;

    fn kind(&self) -> SpawnerKind {
        SpawnerKind::Enemies
    }

    fn timer(&self) -> &SpawnTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut SpawnTimer {
        &mut self.timer
    }

    fn entities(&self) -> &[Enemy] {
        &self.enemies
    }

    fn entities_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    fn spawn(&mut self, rng: &mut Pcg32) {
        let y = draw_in(rng, 0, self.area.floor_for(ENEMY_SIZE));
        self.spawn_at(y);
        log::debug!("Enemy spawned at y {y}");
    }
}

impl Advance for EnemySquadron {}
