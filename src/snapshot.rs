//! Read-only state projections for the view layer
//!
//! The view renders after every mutation and never mutates anything
//! itself. Snapshots are plain serde values, so a view living in another
//! process can consume them as JSON just as well as an embedded one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SCORE_DISPLAY_DIVISOR;
use crate::sim::{GamePhase, GameState};

/// Title shown on the game-over overlay
pub const OVERLAY_TITLE: &str = "GAME OVER";
/// Restart prompt shown on the game-over overlay
pub const OVERLAY_PROMPT: &str = "Tap to Restart";

/// One enemy as the view draws it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
}

/// Contents of the game-over overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub title: String,
    pub prompt: String,
    pub final_score: u64,
}

/// Everything the view layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player top-left corner
    pub player_pos: Vec2,
    pub enemies: Vec<EnemyView>,
    /// Score as shown to the player: internal ticks divided by 10
    pub displayed_score: u64,
    /// Present only while the game is over
    pub overlay: Option<Overlay>,
}

impl Snapshot {
    /// Project the current state for rendering
    pub fn capture(state: &GameState) -> Self {
        let displayed_score = state.score / SCORE_DISPLAY_DIVISOR;
        Self {
            player_pos: Vec2::new(state.player_x, state.player_y),
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView { id: e.id, pos: e.pos })
                .collect(),
            displayed_score,
            overlay: (state.phase == GamePhase::GameOver).then(|| Overlay {
                title: OVERLAY_TITLE.to_owned(),
                prompt: OVERLAY_PROMPT.to_owned(),
                final_score: displayed_score,
            }),
        }
    }
}

/// Callback notified after every state mutation
pub trait Observer {
    fn state_changed(&mut self, state: &GameState);
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn state_changed(&mut self, _state: &GameState) {}
}
