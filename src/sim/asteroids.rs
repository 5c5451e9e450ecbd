//! Paired asteroid hazards and the speed ramp
//!
//! Asteroids spawn as a top/bottom pair with a fixed gap between them. Each
//! member scores one raw point the first time its midpoint reaches the
//! player, and every `SPEED_RAMP_EVERY` raw points all asteroids speed up.

use rand_pcg::Pcg32;

use super::entity::Entity;
use super::geometry::{HitShape, Rect};
use super::score::ScoreLedger;
use super::spawner::{SpawnArea, SpawnTimer, Spawner, SpawnerKind, draw_in};
use crate::consts::{
    ASTEROID_GAP, ASTEROID_SPAWN_MS, ASTEROID_START_SPEED, ASTEROID_WIDTH, SPEED_RAMP_EVERY,
};

/// One member of an asteroid pair
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub rect: Rect,
    pub speed: i32,
    /// Set once the asteroid has crossed the player's x-position
    pub has_passed: bool,
}

impl Asteroid {
    pub fn new(x: i32, y: i32, width: i32, height: i32, speed: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            speed,
            has_passed: false,
        }
    }
}

impl Entity for Asteroid {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn hit_shape(&self) -> HitShape {
        HitShape::Ellipse
    }

    fn update(&mut self) {
        self.rect.x -= self.speed;
    }
}

/// Spawner for asteroid pairs
#[derive(Debug, Clone)]
pub struct AsteroidField {
    area: SpawnArea,
    asteroid_height: i32,
    speed: i32,
    /// Raw score that last triggered a speed-up
    last_ramp_score: u64,
    asteroids: Vec<Asteroid>,
    timer: SpawnTimer,
}

impl AsteroidField {
    pub fn new(area: SpawnArea) -> Self {
        Self {
            area,
            asteroid_height: area.panel_height * 2 / 3,
            speed: ASTEROID_START_SPEED,
            last_ramp_score: 0,
            asteroids: Vec::new(),
            timer: SpawnTimer::new(ASTEROID_SPAWN_MS),
        }
    }

    /// Shared horizontal speed of every live asteroid
    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn asteroid_height(&self) -> i32 {
        self.asteroid_height
    }

    /// Insert a pair with the top member at `top_y`
    pub fn spawn_pair_at(&mut self, top_y: i32) {
        let bottom_y = top_y + self.asteroid_height + ASTEROID_GAP;
        let x = self.area.panel_width;
        for y in [top_y, bottom_y] {
            self.asteroids.push(Asteroid::new(
                x,
                y,
                ASTEROID_WIDTH,
                self.asteroid_height,
                self.speed,
            ));
        }
        log::debug!("Asteroid pair spawned (top y {top_y}, speed {})", self.speed);
    }

    /// Advance, score passes against `player_x`, ramp speed, then cull
    pub fn tick_scoring(&mut self, player_x: i32, score: &mut ScoreLedger) {
        for i in 0..self.asteroids.len() {
            self.asteroids[i].update();

            let asteroid = &mut self.asteroids[i];
            if !asteroid.has_passed && asteroid.rect.center_x() <= player_x {
                asteroid.has_passed = true;
                score.increase();
                self.ramp_speed(score.current());
            }
        }
        self.cull();
    }

    /// Bump the shared speed once per multiple of `SPEED_RAMP_EVERY`
    fn ramp_speed(&mut self, raw_score: u64) {
        if raw_score % SPEED_RAMP_EVERY != 0 || raw_score == self.last_ramp_score {
            return;
        }
        self.last_ramp_score = raw_score;
        self.speed += 1;
        for asteroid in &mut self.asteroids {
            asteroid.speed = self.speed;
        }
        log::info!("Asteroid speed raised to {} at score {}", self.speed, raw_score);
    }
}

impl Spawner for AsteroidField {
    type Item = Asteroid;

    fn kind(&self) -> SpawnerKind {
        SpawnerKind::Asteroids
    }

    fn timer(&self) -> &SpawnTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut SpawnTimer {
        &mut self.timer
    }

    fn entities(&self) -> &[Asteroid] {
        &self.asteroids
    }

    fn entities_mut(&mut self) -> &mut Vec<Asteroid> {
        &mut self.asteroids
    }

    fn spawn(&mut self, rng: &mut Pcg32) {
        let top_y = draw_in(rng, -self.asteroid_height, -self.area.ground_height);
        self.spawn_pair_at(top_y);
    }
}
