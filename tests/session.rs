//! Whole-session scenarios driven through the public API

use ufo_dash::platform::{Clock, ManualClock};
use ufo_dash::sim::{
    Asteroid, GamePhase, GameState, Pickup, PickupKind, Spawner, TickInput, tick,
};
use ufo_dash::{FileScoreStore, MemoryScoreStore, ScoreStore, Settings};

fn playing(store: MemoryScoreStore) -> GameState {
    let mut state = GameState::new(&Settings::default(), Box::new(store), 7);
    assert!(state.start());
    state
}

/// Keep the player hovering at its start height so gravity and the ground
/// stay out of the way
fn hover(state: &mut GameState) {
    state.player.rect.y = state.player_start_y();
    state.player.velocity_y = 0;
}

/// Asteroid sitting right on top of the player after its next update
fn asteroid_on_player(state: &GameState) -> Asteroid {
    let p = state.player.rect;
    Asteroid::new(p.x + 5, p.y - 10, 110, 90, 5)
}

#[test]
fn last_life_shield_blocks_damage() {
    let clock = ManualClock::new(0);
    let mut state = playing(MemoryScoreStore::default());
    let idle = TickInput::default();
    state.player.decrease_lives();
    state.player.decrease_lives();
    assert_eq!(state.player.lives(), 1);

    // Asteroid far above the player, about to cross its x-position
    state
        .asteroids
        .entities_mut()
        .push(Asteroid::new(35, -1000, 110, 533, 5));
    hover(&mut state);
    tick(&mut state, &idle, clock.now_ms());
    assert_eq!(state.score.current(), 1);
    assert_eq!(state.score.displayed_current(), 0);
    assert!(state.pickups.is_running());

    // Shield pickup right on the player
    let p = state.player.rect;
    state
        .pickups
        .entities_mut()
        .push(Pickup::new(p.x + 5, p.y, PickupKind::Shield));
    clock.advance(16);
    hover(&mut state);
    let outcome = tick(&mut state, &idle, clock.now_ms()).expect("playing");
    assert_eq!(outcome.pickups_collected, 1);
    assert!(state.player.shield_active());
    assert!(state.pickups.active().next().is_none());

    // Hazard overlap while shielded costs nothing
    let hazard = asteroid_on_player(&state);
    state.asteroids.entities_mut().push(hazard);
    clock.advance(16);
    hover(&mut state);
    let outcome = tick(&mut state, &idle, clock.now_ms()).expect("playing");
    assert!(outcome.damage.is_some_and(|d| d.asteroid));
    assert_eq!(outcome.pickups_collected, 0);
    assert_eq!(state.player.lives(), 1);
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn hazard_and_ground_in_one_tick_cost_one_life() {
    let mut state = playing(MemoryScoreStore::default());
    state.player.rect.y = state.ground_y() - 40;
    let hazard = asteroid_on_player(&state);
    state.asteroids.entities_mut().push(hazard);

    let outcome = tick(&mut state, &TickInput::default(), 0).expect("playing");
    let report = outcome.damage.expect("damage");
    assert!(report.asteroid && report.ground);
    assert_eq!(state.player.lives(), 2);
    assert_eq!(state.player.rect.y, state.player_start_y());
}

#[test]
fn cooldown_separates_damage() {
    let mut state = playing(MemoryScoreStore::default());
    let idle = TickInput::default();

    let hit_at = |state: &mut GameState, now: u64| {
        state.asteroids.entities_mut().clear();
        hover(state);
        let hazard = asteroid_on_player(state);
        state.asteroids.entities_mut().push(hazard);
        tick(state, &idle, now);
    };

    hit_at(&mut state, 0);
    assert_eq!(state.player.lives(), 2);
    hit_at(&mut state, 999);
    assert_eq!(state.player.lives(), 2);
    hit_at(&mut state, 1000);
    assert_eq!(state.player.lives(), 1);
}

#[test]
fn restart_resets_session_but_keeps_best() {
    let store = MemoryScoreStore::default();
    let mut state = playing(store.clone());
    for _ in 0..9 {
        state.score.increase();
    }
    state.enemies.spawn_at(100);
    state.shoot();

    // Lose the remaining lives one cooldown apart
    for (i, now) in [0u64, 1000, 2000].into_iter().enumerate() {
        state.player.rect.y = state.ground_y();
        tick(&mut state, &TickInput::default(), now);
        assert_eq!(usize::from(state.player.lives()), 2 - i);
    }
    assert_eq!(state.phase, GamePhase::GameOver);
    let final_score = state.final_score.expect("snapshot");
    assert_eq!((final_score.score, final_score.best), (4, 4));

    let restart = TickInput {
        restart: true,
        ..Default::default()
    };
    tick(&mut state, &restart, 3000);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.player.lives(), 3);
    assert_eq!(state.score.current(), 0);
    assert_eq!(state.score.best(), 9);
    assert_eq!(store.best(), 9);
    assert!(state.enemies.entities().is_empty());
    assert!(state.projectiles.is_empty());
    assert!(state.asteroids.entities().is_empty());
}

#[test]
fn projectile_destroys_enemy() {
    let mut state = playing(MemoryScoreStore::default());
    hover(&mut state);
    let muzzle = state.player.shoot().rect;
    state.enemies.spawn_at(muzzle.y - 20);
    state.enemies.entities_mut()[0].rect.x = muzzle.right() + 5;

    let shoot = TickInput {
        shoot: true,
        ..Default::default()
    };
    let outcome = tick(&mut state, &shoot, 0).expect("playing");
    assert_eq!(outcome.enemies_destroyed, 1);
    assert!(state.enemies.entities().is_empty());
    assert!(state.projectiles.is_empty());
}

#[test]
fn best_score_survives_a_fresh_session() {
    let dir = std::env::temp_dir().join(format!("ufo-dash-session-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("mkdir");
    let path = dir.join("bestScore.json");
    let settings = Settings {
        score_file: Some(path.clone()),
        ..Settings::default()
    };

    let mut state = GameState::new(&settings, Box::new(settings.score_store()), 1);
    state.start();
    for _ in 0..6 {
        state.score.increase();
    }

    let fresh = GameState::new(&settings, Box::new(settings.score_store()), 2);
    assert_eq!(fresh.score.best(), 6);
    assert_eq!(fresh.hud().best, 3);
    assert_eq!(FileScoreStore::new(&path).load_best_score(), 6);
    let _ = std::fs::remove_dir_all(&dir);
}
