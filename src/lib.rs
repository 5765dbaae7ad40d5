//! Tilt Dodge - a tilt-controlled falling-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, game state)
//! - `input`: Tilt sensor stream and the per-sample player update
//! - `runner`: Fixed-timestep driver for the three periodic handlers
//! - `snapshot`: Read-only state projection for the view layer
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod runner;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use runner::{ControlEvent, Runner};
pub use snapshot::{Observer, Snapshot};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (~60 Hz)
    pub const TICK_INTERVAL_MS: f32 = 16.0;
    /// Period between sensor samples
    pub const SENSOR_INTERVAL_MS: f32 = 40.0;
    /// Period between enemy spawns
    pub const SPAWN_INTERVAL_MS: f32 = 800.0;
    /// Maximum catch-up steps per timer per runner advance
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player circle diameter
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Enemy circle diameter
    pub const ENEMY_SIZE: f32 = 35.0;
    /// Vertical inset of the player from the bottom edge
    pub const PLAYER_BOTTOM_INSET: f32 = 140.0;

    /// Horizontal pixels moved per unit of tilt
    pub const TILT_SENSITIVITY: f32 = 22.0;
    /// Fall speed stamped onto spawns at the start of a round
    pub const BASE_ENEMY_SPEED: f32 = 6.0;
    /// Speed added at each difficulty ramp
    pub const SPEED_RAMP_STEP: f32 = 0.4;
    /// Score units between difficulty ramps
    pub const SPEED_RAMP_WINDOW: u64 = 300;

    /// Internal score units per displayed score point
    pub const SCORE_DISPLAY_DIVISOR: u64 = 10;
}
