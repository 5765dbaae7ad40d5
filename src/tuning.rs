//! Data-driven game balance
//!
//! Every scalar that shapes how a round feels lives here, so a host can
//! retune the game without a rebuild. `Default` is the shipped balance.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal pixels moved per unit of tilt per sample
    pub sensitivity: f32,
    /// Fall speed stamped onto spawns at round start
    pub base_speed: f32,
    /// Speed added at each difficulty ramp
    pub ramp_step: f32,
    /// Score units between difficulty ramps
    pub ramp_window: u64,
    /// Period between enemy spawns, milliseconds
    pub spawn_interval_ms: f32,
    /// Period between sensor samples, milliseconds
    pub sensor_interval_ms: f32,
    /// Period between simulation ticks, milliseconds
    pub tick_interval_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            sensitivity: TILT_SENSITIVITY,
            base_speed: BASE_ENEMY_SPEED,
            ramp_step: SPEED_RAMP_STEP,
            ramp_window: SPEED_RAMP_WINDOW,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            sensor_interval_ms: SENSOR_INTERVAL_MS,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// Parse a JSON override; fields left out keep the shipped balance.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
