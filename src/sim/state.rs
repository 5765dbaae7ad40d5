//! Game state and core simulation types
//!
//! Everything a round needs to be replayed deterministically lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended by a collision; the state is frozen until restart
    GameOver,
}

/// Screen geometry, read once at startup from the host environment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Rightmost player position that keeps the circle on screen
    pub fn player_max_x(&self) -> f32 {
        self.width - PLAYER_SIZE
    }

    /// Rightmost enemy position that keeps the circle on screen
    pub fn enemy_max_x(&self) -> f32 {
        self.width - ENEMY_SIZE
    }

    /// Enemies at or past this y are fully below the bottom edge
    pub fn cull_y(&self) -> f32 {
        self.height + ENEMY_SIZE
    }

    /// Player spawn position, horizontally centered
    pub fn player_start_x(&self) -> f32 {
        self.width / 2.0 - PLAYER_SIZE / 2.0
    }
}

/// A falling enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Fall speed in pixels per tick, captured from the global speed at
    /// spawn time; ramps never touch enemies already in flight
    pub speed: f32,
}

impl Enemy {
    /// Center of the enemy circle
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(ENEMY_SIZE / 2.0)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    /// Spawner RNG
    pub(crate) rng: Pcg32,
    /// Screen geometry; constant for the life of the state
    pub bounds: Bounds,
    /// Player top-left x, always within `[0, bounds.player_max_x()]`
    pub player_x: f32,
    /// Player top-left y, fixed at init
    pub player_y: f32,
    /// Live enemies, in spawn order
    pub enemies: Vec<Enemy>,
    /// Ticks survived this round
    pub score: u64,
    /// Speed stamped onto future spawns; never decreases within a round
    pub enemy_speed: f32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next enemy ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state for the given screen and seed
    pub fn new(bounds: Bounds, seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            player_x: bounds.player_start_x(),
            player_y: bounds.height - PLAYER_BOTTOM_INSET,
            enemies: Vec::new(),
            score: 0,
            enemy_speed: tuning.base_speed,
            phase: GamePhase::Playing,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new enemy ID, unique within the round
    pub fn next_enemy_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Center of the player circle
    pub fn player_center(&self) -> Vec2 {
        Vec2::new(self.player_x, self.player_y) + Vec2::splat(PLAYER_SIZE / 2.0)
    }

    /// Reset to round-start values and resume play.
    ///
    /// Geometry, seed, the RNG stream, and the id counter carry over; the
    /// enemy list, score, speed, and player position do not.
    pub fn restart(&mut self, tuning: &Tuning) {
        self.player_x = self.bounds.player_start_x();
        self.enemies.clear();
        self.score = 0;
        self.enemy_speed = tuning.base_speed;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
    }
}
