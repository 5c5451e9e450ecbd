//! Game state and phase transitions
//!
//! `GameState` is the single owner of every simulation object; spawners,
//! collisions and input all mutate it from the one simulation thread.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::asteroids::AsteroidField;
use super::collision::CollisionEngine;
use super::enemies::EnemySquadron;
use super::entity::Ground;
use super::pickups::PickupSpawner;
use super::player::Player;
use super::projectiles::Projectiles;
use super::score::ScoreLedger;
use super::spawner::{SpawnArea, Spawner};
use crate::persistence::ScoreStore;
use crate::platform::{Flow, Intent};
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Title,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Scores frozen on entry to game over (display units)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub score: u64,
    pub best: u64,
}

/// Values a heads-up display shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub lives: u8,
    pub max_lives: u8,
    pub score: u64,
    pub best: u64,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Snapshot taken when the last run ended
    pub final_score: Option<FinalScore>,
    /// Simulation tick counter (Playing ticks only)
    pub time_ticks: u64,
    pub player: Player,
    pub asteroids: AsteroidField,
    pub enemies: EnemySquadron,
    pub pickups: PickupSpawner,
    pub projectiles: Projectiles,
    pub grounds: [Ground; 2],
    pub collisions: CollisionEngine,
    pub score: ScoreLedger,
    area: SpawnArea,
    player_x: i32,
    player_start_y: i32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a game sitting on the title screen
    pub fn new(settings: &Settings, store: Box<dyn ScoreStore>, seed: u64) -> Self {
        let area = settings.spawn_area();
        let player_x = settings.player_x();
        let player_start_y = settings.player_start_y();
        Self {
            phase: GamePhase::Title,
            final_score: None,
            time_ticks: 0,
            player: Player::new(player_x, player_start_y),
            asteroids: AsteroidField::new(area),
            enemies: EnemySquadron::new(area),
            pickups: PickupSpawner::new(area),
            projectiles: Projectiles::new(area.panel_width),
            grounds: Ground::tiles(area.panel_width, area.panel_height, area.ground_height),
            collisions: CollisionEngine::new(),
            score: ScoreLedger::new(store),
            area,
            player_x,
            player_start_y,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn area(&self) -> SpawnArea {
        self.area
    }

    /// Top edge of the ground strip
    pub fn ground_y(&self) -> i32 {
        self.area.panel_height - self.area.ground_height
    }

    pub fn player_start_y(&self) -> i32 {
        self.player_start_y
    }

    /// Title -> Playing
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Title {
            return false;
        }
        self.phase = GamePhase::Playing;
        log::info!("Game started");
        true
    }

    /// GameOver -> Playing with a fresh session
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        self.reset_session();
        self.phase = GamePhase::Playing;
        log::info!("Game restarted (best {})", self.score.displayed_best());
        true
    }

    pub fn jump(&mut self) {
        if self.phase == GamePhase::Playing {
            self.player.jump();
        }
    }

    pub fn shoot(&mut self) {
        if self.phase == GamePhase::Playing {
            let shot = self.player.shoot();
            self.projectiles.add(shot);
        }
    }

    /// Route one intent to its method
    pub fn handle_intent(&mut self, intent: Intent) -> Flow {
        match intent {
            Intent::Jump => self.jump(),
            Intent::Shoot => self.shoot(),
            Intent::Start => {
                self.start();
            }
            Intent::Restart => {
                self.restart();
            }
            Intent::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    pub fn hud(&self) -> Hud {
        Hud {
            lives: self.player.lives(),
            max_lives: self.player.max_lives(),
            score: self.score.displayed_current(),
            best: self.score.displayed_best(),
        }
    }

    /// Playing -> GameOver, freezing the displayed scores
    pub(crate) fn enter_game_over(&mut self) {
        self.stop_spawners();
        let final_score = FinalScore {
            score: self.score.displayed_current(),
            best: self.score.displayed_best(),
        };
        self.final_score = Some(final_score);
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {} (best {})",
            final_score.score,
            final_score.best
        );
    }

    fn stop_spawners(&mut self) {
        self.asteroids.stop();
        self.enemies.stop();
        self.pickups.stop();
    }

    /// New player, empty collections, zero score; best score kept
    fn reset_session(&mut self) {
        self.stop_spawners();
        let area = self.area;
        self.player = Player::new(self.player_x, self.player_start_y);
        self.asteroids = AsteroidField::new(area);
        self.enemies = EnemySquadron::new(area);
        self.pickups = PickupSpawner::new(area);
        self.projectiles = Projectiles::new(area.panel_width);
        self.grounds = Ground::tiles(area.panel_width, area.panel_height, area.ground_height);
        self.collisions = CollisionEngine::new();
        self.score.start_new_session();
        self.final_score = None;
        self.time_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryScoreStore;

    fn game() -> GameState {
        GameState::new(&Settings::default(), Box::new(MemoryScoreStore::default()), 1)
    }

    #[test]
    fn test_starts_on_title() {
        let mut state = game();
        assert_eq!(state.phase, GamePhase::Title);
        assert!(!state.restart());
        assert!(state.start());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.start());
    }

    #[test]
    fn test_inputs_ignored_outside_playing() {
        let mut state = game();
        state.shoot();
        state.jump();
        assert!(state.projectiles.is_empty());
        assert_eq!(state.player.velocity_y, 0);
    }

    #[test]
    fn test_shoot_adds_projectile() {
        let mut state = game();
        state.start();
        assert_eq!(state.handle_intent(Intent::Shoot), Flow::Continue);
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_quit_from_any_phase() {
        let mut state = game();
        assert_eq!(state.handle_intent(Intent::Quit), Flow::Quit);
        state.start();
        assert_eq!(state.handle_intent(Intent::Quit), Flow::Quit);
    }

    #[test]
    fn test_game_over_snapshot_and_restart() {
        let mut state = game();
        state.start();
        for _ in 0..6 {
            state.score.increase();
        }
        state.enter_game_over();
        assert_eq!(
            state.final_score,
            Some(FinalScore { score: 3, best: 3 })
        );

        assert!(state.restart());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.lives(), state.player.max_lives());
        assert_eq!(state.score.current(), 0);
        assert_eq!(state.score.best(), 6);
        assert!(state.final_score.is_none());
    }
}
