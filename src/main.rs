//! UFO Dash entry point
//!
//! Headless native runner: drives the simulation at a fixed rate from the
//! wall clock, with an autopilot pressing keys in place of a player.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ufo_dash::assets::{Assets, DirAssetLoader};
use ufo_dash::consts::ASTEROID_GAP;
use ufo_dash::platform::{Clock, Flow, Key, SystemClock, intent_for};
use ufo_dash::renderer::{Drawable, RecordingSurface};
use ufo_dash::settings::SETTINGS_FILE;
use ufo_dash::sim::{GamePhase, GameState, Spawner, TickInput, tick};
use ufo_dash::Settings;

/// Ticks between autopilot shots
const SHOT_EVERY_TICKS: u64 = 45;
/// How far below the gap centre the autopilot lets the player sink
const JUMP_SLACK: i32 = 20;

/// Key-pressing stand-in for a human
struct Autopilot {
    quit_after_ms: u64,
    restarts_left: u32,
}

impl Autopilot {
    fn new(quit_after_ms: u64) -> Self {
        Self {
            quit_after_ms,
            restarts_left: 1,
        }
    }

    /// Keys to press this frame
    fn keys(&mut self, state: &GameState, now_ms: u64) -> Vec<Key> {
        if now_ms >= self.quit_after_ms {
            return vec![Key::Escape];
        }
        match state.phase {
            GamePhase::Title => vec![Key::Space],
            GamePhase::GameOver if self.restarts_left > 0 => {
                self.restarts_left -= 1;
                vec![Key::R]
            }
            GamePhase::GameOver => vec![Key::Escape],
            GamePhase::Playing => {
                let mut keys = Vec::new();
                if Self::should_jump(state) {
                    keys.push(Key::Space);
                }
                if state.time_ticks % SHOT_EVERY_TICKS == 0 {
                    keys.push(Key::Enter);
                }
                keys
            }
        }
    }

    fn should_jump(state: &GameState) -> bool {
        let player = &state.player;
        if player.velocity_y < 0 {
            return false;
        }
        // Aim for the gap of the nearest pair still ahead
        let target = state
            .asteroids
            .entities()
            .iter()
            .filter(|a| !a.has_passed && a.rect.y < 0)
            .min_by_key(|a| a.rect.x)
            .map(|top| top.rect.bottom() + ASTEROID_GAP / 2)
            .unwrap_or(state.area().panel_height / 3);
        let center = player.rect.y + player.rect.height / 2;
        let near_ground = player.rect.bottom() + player.velocity_y * 2 >= state.ground_y();
        center > target + JUMP_SLACK || near_ground
    }
}

fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() {
    env_logger::init();
    log::info!("UFO Dash (headless) starting...");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
    let settings = Settings::load(&settings_path);

    let seed = settings.seed.unwrap_or_else(seed_from_time);
    let store = settings.score_store();
    log::info!("Seed: {seed}, best score file: {}", store.path().display());

    let assets = Assets::load(&mut DirAssetLoader::new(&settings.asset_dir));
    let mut state = GameState::new(&settings, Box::new(store), seed);
    let mut surface = RecordingSurface::new();
    let mut autopilot = Autopilot::new(settings.demo_seconds * 1000);

    let clock = SystemClock::new();
    let tick_ms = settings.tick_ms();
    let mut next_frame = 0;
    let mut runs = 0u32;

    'frames: loop {
        let now = clock.now_ms();
        if now < next_frame {
            thread::sleep(Duration::from_millis(next_frame - now));
            continue;
        }
        next_frame = now + tick_ms;

        for key in autopilot.keys(&state, now) {
            let Some(intent) = intent_for(state.phase, key) else {
                continue;
            };
            if state.handle_intent(intent) == Flow::Quit {
                break 'frames;
            }
        }

        let was_playing = state.phase == GamePhase::Playing;
        tick(&mut state, &TickInput::default(), now);

        surface.clear();
        state.draw(&mut surface, &assets);

        if state.phase == GamePhase::Playing && state.time_ticks % u64::from(settings.frame_rate) == 0 {
            let hud = state.hud();
            log::debug!(
                "lives {}/{} score {} best {} ({} draw calls)",
                hud.lives,
                hud.max_lives,
                hud.score,
                hud.best,
                surface.calls.len()
            );
        }

        if was_playing && state.phase == GamePhase::GameOver {
            runs += 1;
            if let Some(final_score) = state.final_score {
                log::info!(
                    "Run {runs}: score {} (best {})",
                    final_score.score,
                    final_score.best
                );
            }
        }
    }

    let hud = state.hud();
    log::info!(
        "Quit after {runs} finished run(s); score {} best {}",
        hud.score,
        hud.best
    );
}
