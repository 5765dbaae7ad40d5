//! Cooperative driver for the three periodic handlers
//!
//! Owns the game state. The sensor sampler, the spawner, and the
//! simulation tick fire from fixed-period accumulators on one logical
//! thread; each firing runs to completion before the next, so every
//! read-modify-write over the state is atomic relative to the other
//! timers. A missed deadline only makes the game visually slower.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;
use crate::input::{TiltSource, apply_tilt};
use crate::sim::{GamePhase, GameState, spawn_enemy, tick};
use crate::snapshot::Observer;
use crate::tuning::Tuning;

/// Gesture events delivered by the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Screen tap: restarts the game when it is over, ignored otherwise
    Tap,
}

/// Fixed-timestep driver owning the game state.
///
/// Dropping the runner drops the tilt source with it, ending the sensor
/// subscription.
pub struct Runner<S, O> {
    state: GameState,
    tuning: Tuning,
    source: S,
    observer: O,
    sensor_acc_ms: f32,
    spawn_acc_ms: f32,
    tick_acc_ms: f32,
}

impl<S: TiltSource, O: Observer> Runner<S, O> {
    /// Take ownership of the state and arm all three timers
    pub fn new(state: GameState, tuning: Tuning, source: S, observer: O) -> Self {
        Self {
            state,
            tuning,
            source,
            observer,
            sensor_acc_ms: 0.0,
            spawn_acc_ms: 0.0,
            tick_acc_ms: 0.0,
        }
    }

    /// Read-only view of the owned state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Feed a gesture from the view layer
    pub fn handle_event(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Tap => {
                if self.state.phase == GamePhase::GameOver {
                    self.state.restart(&self.tuning);
                    log::info!("restarted (seed {})", self.state.seed);
                    self.observer.state_changed(&self.state);
                }
            }
        }
    }

    /// Advance wall-clock time and fire every handler that has come due.
    ///
    /// Handlers fire in cadence order: sensor, spawner, simulation tick.
    /// The observer is notified after every firing that mutated the state;
    /// while the game is over the handlers are no-ops and the view hears
    /// nothing until the restart tap.
    pub fn advance(&mut self, elapsed: Duration) {
        // a long stall (backgrounded app, debugger) must not turn into an
        // unbounded catch-up burst
        let ms = (elapsed.as_secs_f32() * 1000.0).min(100.0);
        self.sensor_acc_ms += ms;
        self.spawn_acc_ms += ms;
        self.tick_acc_ms += ms;

        let mut steps = 0;
        while self.sensor_acc_ms >= self.tuning.sensor_interval_ms && steps < MAX_SUBSTEPS {
            self.sensor_acc_ms -= self.tuning.sensor_interval_ms;
            steps += 1;
            // the stream keeps delivering during game over; those samples
            // are discarded
            if let Some(sample) = self.source.poll(&self.state) {
                if self.state.phase == GamePhase::Playing {
                    apply_tilt(&mut self.state, &self.tuning, sample);
                    self.observer.state_changed(&self.state);
                }
            }
        }

        let mut steps = 0;
        while self.spawn_acc_ms >= self.tuning.spawn_interval_ms && steps < MAX_SUBSTEPS {
            self.spawn_acc_ms -= self.tuning.spawn_interval_ms;
            steps += 1;
            if self.state.phase == GamePhase::Playing {
                spawn_enemy(&mut self.state);
                self.observer.state_changed(&self.state);
            }
        }

        let mut steps = 0;
        while self.tick_acc_ms >= self.tuning.tick_interval_ms && steps < MAX_SUBSTEPS {
            self.tick_acc_ms -= self.tuning.tick_interval_ms;
            steps += 1;
            if self.state.phase == GamePhase::Playing {
                tick(&mut self.state, &self.tuning);
                self.observer.state_changed(&self.state);
            }
        }
    }
}
