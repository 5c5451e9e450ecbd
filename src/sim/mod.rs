//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Time comes in as milliseconds, never read from the system
//! - No rendering or platform dependencies

pub mod asteroids;
pub mod collision;
pub mod enemies;
pub mod entity;
pub mod geometry;
pub mod pickups;
pub mod player;
pub mod projectiles;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use asteroids::{Asteroid, AsteroidField};
pub use collision::{CollisionEngine, CollisionFrame, CollisionOutcome, DamageReport};
pub use enemies::{Enemy, EnemySquadron};
pub use entity::{Entity, Ground};
pub use geometry::{HitShape, Rect, ellipse_intersects_rect};
pub use pickups::{Pickup, PickupKind, PickupSpawner};
pub use player::Player;
pub use projectiles::{Projectile, Projectiles};
pub use score::ScoreLedger;
pub use spawner::{Advance, SpawnArea, SpawnTimer, Spawner, SpawnerKind};
pub use state::{FinalScore, GamePhase, GameState, Hud};
pub use tick::{TickInput, tick};
