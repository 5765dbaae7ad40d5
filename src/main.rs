//! Tilt Dodge entry point
//!
//! Runs the game headless with the autopilot tilt source and logs what the
//! view layer would draw. A real app embeds the library behind a renderer
//! and a device motion sensor; here the time base is fast-forwarded so a
//! demo run finishes in moments regardless of how long the autopilot
//! survives.

use std::time::Duration;

use tilt_dodge::input::AutoTilt;
use tilt_dodge::runner::{ControlEvent, Runner};
use tilt_dodge::sim::{Bounds, GamePhase, GameState};
use tilt_dodge::snapshot::{Observer, Snapshot};
use tilt_dodge::tuning::Tuning;

/// Logs score changes and the game-over overlay, as a view would draw them
#[derive(Default)]
struct LogView {
    last_displayed: Option<u64>,
}

impl Observer for LogView {
    fn state_changed(&mut self, state: &GameState) {
        let snap = Snapshot::capture(state);
        if self.last_displayed != Some(snap.displayed_score) {
            self.last_displayed = Some(snap.displayed_score);
            log::info!("score: {}", snap.displayed_score);
        }
        if let Some(overlay) = &snap.overlay {
            log::info!(
                "{} - {} - final score {}",
                overlay.title,
                overlay.prompt,
                overlay.final_score
            );
        }
        if log::log_enabled!(log::Level::Trace) {
            match serde_json::to_string(&snap) {
                Ok(json) => log::trace!("frame: {json}"),
                Err(e) => log::warn!("frame serialization failed: {e}"),
            }
        }
    }
}

fn main() {
    env_logger::init();

    // Geometry a phone would report; the host reads it once at startup.
    let bounds = Bounds::new(390.0, 844.0);
    let tuning = Tuning::default();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    log::info!("Tilt Dodge starting (seed {seed})");

    let state = GameState::new(bounds, seed, &tuning);
    let mut runner = Runner::new(state, tuning, AutoTilt, LogView::default());

    // Play a few autopiloted rounds, restarting on the tap the view would
    // deliver, with a cap in case the autopilot refuses to die.
    let slice = Duration::from_millis(16);
    let mut simulated = Duration::ZERO;
    let mut rounds = 0;
    while rounds < 3 && simulated < Duration::from_secs(180) {
        runner.advance(slice);
        simulated += slice;

        if runner.state().phase == GamePhase::GameOver {
            rounds += 1;
            if rounds < 3 {
                runner.handle_event(ControlEvent::Tap);
            }
        }
    }

    log::info!(
        "Tilt Dodge done: {rounds} rounds over {:.1} s of game time",
        simulated.as_secs_f32()
    );
}
