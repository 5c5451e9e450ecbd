//! UFO Dash - A side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (spawners, player physics, collisions, game state)
//! - `persistence`: Best score load/save
//! - `settings`: Panel geometry and runtime configuration
//! - `platform`: Clock and input intents
//! - `assets`: Sprite loading with placeholder fallback
//! - `renderer`: Drawing seam (shapes and sprites onto a `Surface`)

pub mod assets;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use persistence::{FileScoreStore, MemoryScoreStore, ScoreStore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default panel dimensions
    pub const PANEL_WIDTH: i32 = 700;
    pub const PANEL_HEIGHT: i32 = 800;
    /// Simulation ticks per second
    pub const FRAME_RATE: u32 = 60;

    /// Player defaults
    pub const PLAYER_WIDTH: i32 = 90;
    pub const PLAYER_HEIGHT: i32 = 70;
    pub const MAX_LIVES: u8 = 3;
    /// Downward acceleration per tick
    pub const GRAVITY: i32 = 1;
    /// Upward impulse applied by a jump
    pub const JUMP_STRENGTH: i32 = -15;
    /// Terminal fall velocity
    pub const MAX_VELOCITY_Y: i32 = 15;
    /// How long the collided sprite stays up (ms)
    pub const COLLIDED_FLASH_MS: u64 = 200;
    /// Space between the player and the shield ring
    pub const SHIELD_GAP: i32 = 10;

    /// Asteroid (paired hazard) defaults
    pub const ASTEROID_WIDTH: i32 = 110;
    pub const ASTEROID_GAP: i32 = 250;
    pub const ASTEROID_START_SPEED: i32 = 5;
    /// Raw score multiple that bumps asteroid speed
    pub const SPEED_RAMP_EVERY: u64 = 5;
    pub const ASTEROID_SPAWN_MS: u64 = 2000;

    /// Enemy (moving hazard) defaults
    pub const ENEMY_SIZE: i32 = 60;
    pub const ENEMY_SPEED_X: i32 = 5;
    pub const ENEMY_SPEED_Y: i32 = 8;
    pub const ENEMY_SPAWN_MS: u64 = 4000;

    /// Pickup defaults
    pub const PICKUP_SIZE: i32 = 60;
    pub const PICKUP_SPEED: i32 = 5;
    pub const PICKUP_SPAWN_MS: u64 = 2000;
    pub const SHIELD_DURATION_MS: u64 = 5000;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: i32 = 20;
    pub const PROJECTILE_HEIGHT: i32 = 10;
    pub const PROJECTILE_SPEED: i32 = 10;

    /// Ground scroll speed
    pub const GROUND_SPEED: i32 = 5;

    /// Lives indicator: square hearts along the top-right corner
    pub const HEART_SIZE: i32 = 60;
    pub const HUD_PADDING: i32 = 10;

    /// Minimum time between two damaging collisions (ms)
    pub const COLLISION_COOLDOWN_MS: u64 = 1000;
    /// Raw score points per displayed point
    pub const SCORE_DIVISOR: u64 = 2;
}
