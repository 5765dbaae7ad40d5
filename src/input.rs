//! Tilt input
//!
//! The device motion sensor is modeled as a subscription-style stream of
//! lateral tilt samples polled on a fixed cadence. A source that never
//! yields a sample (sensor missing, permission denied) just leaves the
//! player parked; there is no error path. Dropping the source ends the
//! subscription.

use crate::consts::PLAYER_SIZE;
use crate::sim::{GamePhase, GameState};
use crate::tuning::Tuning;

/// One lateral tilt reading, nominally in `[-1, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltSample {
    pub x: f32,
}

/// A subscription to the device tilt sensor.
///
/// `poll` returns the sample for this sensor period, or `None` when there
/// is nothing new. The current state is visible so synthetic sources can
/// steer; a hardware-backed source will ignore it.
pub trait TiltSource {
    fn poll(&mut self, state: &GameState) -> Option<TiltSample>;
}

/// Apply one tilt sample to the player position.
///
/// Tilt is inverted so tilting right moves right, scaled by the
/// sensitivity, and clamped to keep the circle on screen. Samples arriving
/// after game over are discarded.
pub fn apply_tilt(state: &mut GameState, tuning: &Tuning, sample: TiltSample) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    let delta = -sample.x * tuning.sensitivity;
    state.player_x = (state.player_x + delta).clamp(0.0, state.bounds.player_max_x());
}

/// Synthetic tilt source that plays the game by itself.
///
/// Dodges sideways from the nearest enemy still above the player's row and
/// drifts back toward the center when nothing threatens. Used by the demo
/// binary and soak tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoTilt;

impl TiltSource for AutoTilt {
    fn poll(&mut self, state: &GameState) -> Option<TiltSample> {
        let player = state.player_center();
        let threat = state
            .enemies
            .iter()
            .filter(|e| e.center().y <= player.y)
            .min_by(|a, b| {
                let da = a.center().distance_squared(player);
                let db = b.center().distance_squared(player);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });

        // steer in screen coordinates: positive moves right
        let steer = match threat {
            Some(e) if (e.center().x - player.x).abs() < PLAYER_SIZE * 2.0 => {
                if e.center().x >= player.x { -1.0 } else { 1.0 }
            }
            _ => {
                let center = state.bounds.player_start_x();
                ((center - state.player_x) * 0.01).clamp(-0.3, 0.3)
            }
        };

        // the sensor axis is inverted relative to screen direction
        Some(TiltSample { x: -steer })
    }
}
