//! Timer-driven entity factories
//!
//! Every spawner owns a collection of one entity kind plus a periodic
//! `SpawnTimer`. The timer only stores its next deadline; the simulation tick
//! polls it, so spawning always happens on the simulation thread and a
//! stopped timer can never fire again.

use rand_pcg::Pcg32;

use super::entity::Entity;

/// Periodic spawn deadline, polled once per tick
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: u64,
    next_due: Option<u64>,
}

impl SpawnTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            next_due: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the timer; the first spawn lands one interval from `now`.
    /// Calling this while running keeps the existing schedule.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(now_ms + self.interval_ms);
        true
    }

    /// Disarm the timer. No spawn fires after this returns.
    pub fn stop(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    /// Returns true when a spawn is due at `now`, rescheduling the next one.
    ///
    /// Missed intervals are coalesced into a single firing.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let behind = now_ms - due;
        self.next_due = Some(if behind >= self.interval_ms {
            now_ms + self.interval_ms
        } else {
            due + self.interval_ms
        });
        true
    }
}

/// Playable area the spawners place entities into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnArea {
    pub panel_width: i32,
    pub panel_height: i32,
    pub ground_height: i32,
}

impl SpawnArea {
    /// Lowest y (exclusive) an entity's top edge may take while staying above ground
    pub fn floor_for(&self, entity_height: i32) -> i32 {
        self.panel_height - self.ground_height - entity_height
    }
}

/// Which spawner a lifecycle event concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnerKind {
    Asteroids,
    Enemies,
    Pickups,
}

/// Factory + container for one entity kind
pub trait Spawner {
    type Item: Entity;

    fn kind(&self) -> SpawnerKind;

    fn timer(&self) -> &SpawnTimer;
    fn timer_mut(&mut self) -> &mut SpawnTimer;

    fn entities(&self) -> &[Self::Item];
    fn entities_mut(&mut self) -> &mut Vec<Self::Item>;

    /// Create one spawn event's worth of entities
    fn spawn(&mut self, rng: &mut Pcg32);

    /// Drop entities that have scrolled past the left edge
    fn cull(&mut self) -> usize {
        let entities = self.entities_mut();
        let before = entities.len();
        entities.retain(|e| !e.is_off_screen());
        let removed = before - entities.len();
        if removed > 0 {
            log::debug!("{:?}: culled {} off-screen", self.kind(), removed);
        }
        removed
    }

    fn start(&mut self, now_ms: u64) {
        if self.timer_mut().start(now_ms) {
            log::info!("{:?} spawner started", self.kind());
        }
    }

    fn stop(&mut self) {
        if self.timer_mut().stop() {
            log::info!("{:?} spawner stopped", self.kind());
        }
    }

    fn is_running(&self) -> bool {
        self.timer().is_running()
    }

    /// Spawn if the timer is due. Returns whether a spawn happened.
    fn poll_spawn(&mut self, now_ms: u64, rng: &mut Pcg32) -> bool {
        if self.timer_mut().poll(now_ms) {
            self.spawn(rng);
            true
        } else {
            false
        }
    }
}

/// Spawners whose entities move on their own, with nothing to account for
/// as they pass the player
///
/// `AsteroidField` has no `Advance` impl. It only moves through
/// `AsteroidField::tick_scoring`, which also scores passes and ramps speed.
///
/// ```compile_fail
/// use ufo_dash::sim::{Advance, AsteroidField, SpawnArea};
///
/// let mut field = AsteroidField::new(SpawnArea {
///     panel_width: 700,
///     panel_height: 800,
///     ground_height: 100,
/// });
/// field.tick();
/// ```
pub trait Advance: Spawner {
    /// Advance every entity, then cull the ones that left the screen
    fn tick(&mut self) {
        for entity in self.entities_mut().iter_mut() {
            entity.update();
        }
        self.cull();
    }
}

/// Uniform draw in `[low, high)`, collapsing to `low` when the range is empty
pub(crate) fn draw_in(rng: &mut Pcg32, low: i32, high: i32) -> i32 {
    use rand::Rng;

    if high > low {
        rng.random_range(low..high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_timer_first_fire_after_interval() {
        let mut timer = SpawnTimer::new(2000);
        assert!(timer.start(1000));
        assert!(!timer.poll(2999));
        assert!(timer.poll(3000));
        assert!(!timer.poll(3001));
        assert!(timer.poll(5000));
    }

    #[test]
    fn test_timer_start_is_idempotent() {
        let mut timer = SpawnTimer::new(2000);
        assert!(timer.start(0));
        assert!(!timer.start(1500));
        // Schedule from the first start is kept
        assert!(timer.poll(2000));
    }

    #[test]
    fn test_timer_stop_cancels_pending() {
        let mut timer = SpawnTimer::new(2000);
        timer.start(0);
        assert!(timer.stop());
        assert!(!timer.stop());
        assert!(!timer.poll(10_000));
        assert!(!timer.is_running());
    }

    #[test]
    fn test_timer_coalesces_missed_intervals() {
        let mut timer = SpawnTimer::new(1000);
        timer.start(0);
        assert!(timer.poll(5500));
        assert!(!timer.poll(5600));
        assert!(timer.poll(6500));
    }

    #[test]
    fn test_draw_in_empty_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(draw_in(&mut rng, 5, 5), 5);
        for _ in 0..100 {
            let v = draw_in(&mut rng, -10, 10);
            assert!((-10..10).contains(&v));
        }
    }
}
