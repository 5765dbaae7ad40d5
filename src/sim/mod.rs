//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{COLLISION_THRESHOLD, any_enemy_hits_player, enemy_hits_player};
pub use state::{Bounds, Enemy, GamePhase, GameState};
pub use tick::{spawn_enemy, tick};
