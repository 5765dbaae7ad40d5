//! Collision detection between the player and enemy circles
//!
//! Both sprites are circles, so a hit is just center distance against the
//! sum of the radii.

use glam::Vec2;

use super::state::{Enemy, GameState};
use crate::consts::{ENEMY_SIZE, PLAYER_SIZE};

/// Center distance below which the player and an enemy overlap
pub const COLLISION_THRESHOLD: f32 = (PLAYER_SIZE + ENEMY_SIZE) / 2.0;

/// True if the enemy circle overlaps the player circle
pub fn enemy_hits_player(enemy: &Enemy, player_center: Vec2) -> bool {
    enemy.center().distance(player_center) < COLLISION_THRESHOLD
}

/// True if any live enemy overlaps the player
pub fn any_enemy_hits_player(state: &GameState) -> bool {
    let player = state.player_center();
    state.enemies.iter().any(|e| enemy_hits_player(e, player))
}
