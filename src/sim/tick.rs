//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one 60 Hz step.

use super::collision::{CollisionFrame, CollisionOutcome};
use super::entity::Entity;
use super::spawner::{Advance, Spawner};
use super::state::{GamePhase, GameState};

/// Input commands gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (space while playing)
    pub jump: bool,
    /// Fire a projectile (enter while playing)
    pub shoot: bool,
    /// Leave the title screen
    pub start: bool,
    /// Play again after game over
    pub restart: bool,
}

/// Advance the game state by one tick at wall-clock time `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) -> Option<CollisionOutcome> {
    if input.start {
        state.start();
    }
    if input.restart {
        state.restart();
    }
    if input.jump {
        state.jump();
    }
    if input.shoot {
        state.shoot();
    }

    // Title and game over screens have no simulation
    if state.phase != GamePhase::Playing {
        return None;
    }

    state.time_ticks += 1;

    // One-shot player timers (shield, hit flash)
    state.player.expire_timers(now_ms);

    update_spawners(state, now_ms);

    // Entities
    state.player.update();
    let player_x = state.player.rect.x;
    state.asteroids.tick_scoring(player_x, &mut state.score);
    for ground in &mut state.grounds {
        ground.update();
    }
    state.pickups.tick();
    state.enemies.tick();
    state.projectiles.tick();

    let ground_y = state.ground_y();
    let player_start_y = state.player_start_y();
    let outcome = state.collisions.process(
        CollisionFrame {
            player: &mut state.player,
            asteroids: state.asteroids.entities(),
            enemies: &mut state.enemies,
            pickups: state.pickups.entities_mut(),
            projectiles: &mut state.projectiles,
            ground_y,
            player_start_y,
        },
        now_ms,
    );

    if state.player.lives() == 0 {
        state.enter_game_over();
    }

    Some(outcome)
}

/// Start/stop spawner timers and run any spawns that are due
fn update_spawners(state: &mut GameState, now_ms: u64) {
    state.asteroids.start(now_ms);
    state.enemies.start(now_ms);

    // Power-ups only show up on the last life
    if state.player.lives() == 1 {
        state.pickups.start(now_ms);
    } else {
        state.pickups.stop();
    }

    let rng = &mut state.rng;
    state.asteroids.poll_spawn(now_ms, rng);
    state.enemies.poll_spawn(now_ms, rng);
    state.pickups.poll_spawn(now_ms, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ASTEROID_SPAWN_MS, PICKUP_SPAWN_MS};
    use crate::platform::Intent;
    use crate::persistence::MemoryScoreStore;
    use crate::settings::Settings;

    fn game() -> GameState {
        GameState::new(
            &Settings::default(),
            Box::new(MemoryScoreStore::default()),
            12345,
        )
    }

    #[test]
    fn test_tick_title_to_playing() {
        let mut state = game();
        assert!(tick(&mut state, &TickInput::default(), 0).is_none());
        assert_eq!(state.phase, GamePhase::Title);

        let input = TickInput {
            start: true,
            ..Default::default()
        };
        assert!(tick(&mut state, &input, 16).is_some());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.asteroids.is_running());
        assert!(state.enemies.is_running());
        assert!(!state.pickups.is_running());
    }

    #[test]
    fn test_asteroids_spawn_on_interval() {
        let mut state = game();
        state.start();
        let idle = TickInput::default();
        tick(&mut state, &idle, 0);
        state.player.rect.y = 100;
        tick(&mut state, &idle, ASTEROID_SPAWN_MS - 1);
        assert!(state.asteroids.entities().is_empty());
        state.player.rect.y = 100;
        tick(&mut state, &idle, ASTEROID_SPAWN_MS);
        assert_eq!(state.asteroids.entities().len(), 2);
    }

    #[test]
    fn test_pickup_spawner_tracks_last_life() {
        let mut state = game();
        state.start();
        let idle = TickInput::default();

        state.player.decrease_lives();
        state.player.decrease_lives();
        tick(&mut state, &idle, 0);
        assert!(state.pickups.is_running());

        state.player.add_life();
        state.player.rect.y = 100;
        tick(&mut state, &idle, 16);
        assert!(!state.pickups.is_running());
    }

    #[test]
    fn test_pickup_spawns_after_dropping_to_last_life() {
        let mut state = game();
        state.start();
        let idle = TickInput::default();

        state.player.decrease_lives();
        state.player.decrease_lives();
        tick(&mut state, &idle, 0);
        state.player.rect.y = 100;
        tick(&mut state, &idle, PICKUP_SPAWN_MS - 1);
        assert!(state.pickups.entities().is_empty());

        state.player.rect.y = 100;
        tick(&mut state, &idle, PICKUP_SPAWN_MS);
        assert_eq!(state.pickups.entities().len(), 1);
    }

    #[test]
    fn test_stopped_pickup_spawner_never_fires() {
        let mut state = game();
        state.start();
        let idle = TickInput::default();

        state.player.decrease_lives();
        state.player.decrease_lives();
        tick(&mut state, &idle, 0);
        state.player.add_life();
        // Well past the pickup deadline
        state.player.rect.y = 100;
        tick(&mut state, &idle, 10_000);
        assert!(state.pickups.entities().is_empty());
    }

    #[test]
    fn test_last_life_lost_ends_game() {
        let mut state = game();
        state.start();
        state.player.decrease_lives();
        state.player.decrease_lives();
        // Drop the player onto the ground
        state.player.rect.y = state.ground_y();

        let outcome = tick(&mut state, &TickInput::default(), 0).expect("playing tick");
        assert!(outcome.damage.is_some());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.final_score.is_some());
        assert!(!state.asteroids.is_running());

        // Game over freezes the simulation
        assert!(tick(&mut state, &TickInput::default(), 16).is_none());
    }

    #[test]
    fn test_jump_before_physics() {
        let mut state = game();
        state.start();
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        let y = state.player.rect.y;
        tick(&mut state, &input, 0);
        assert_eq!(state.player.velocity_y, -14);
        assert_eq!(state.player.rect.y, y - 14);
    }

    #[test]
    fn test_intents_then_idle_tick_match_tick_input() {
        let mut routed = game();
        routed.handle_intent(Intent::Start);
        tick(&mut routed, &TickInput::default(), 0);
        routed.handle_intent(Intent::Jump);
        routed.handle_intent(Intent::Shoot);
        tick(&mut routed, &TickInput::default(), 16);

        let mut flagged = game();
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut flagged, &start, 0);
        let act = TickInput {
            jump: true,
            shoot: true,
            ..Default::default()
        };
        tick(&mut flagged, &act, 16);

        assert_eq!(routed.phase, GamePhase::Playing);
        assert_eq!(routed.player.rect, flagged.player.rect);
        assert_eq!(routed.player.velocity_y, flagged.player.velocity_y);
        assert_eq!(routed.projectiles.len(), 1);
        assert_eq!(flagged.projectiles.len(), 1);
    }
}
