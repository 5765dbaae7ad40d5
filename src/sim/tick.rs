//! Fixed timestep simulation tick and enemy spawning
//!
//! Core game loop that advances the shared state deterministically. One
//! call to [`tick`] is one ~16 ms frame; [`spawn_enemy`] fires on its own
//! slower cadence.

use glam::Vec2;
use rand::Rng;

use super::collision::any_enemy_hits_player;
use super::state::{Enemy, GamePhase, GameState};
use crate::consts::ENEMY_SIZE;
use crate::tuning::Tuning;

/// Advance the game state by one frame.
///
/// The collision verdict is taken before this frame's movement is applied,
/// so it sees the positions the previous frame left behind. The original
/// game evaluated collision against the prior frame's state and the
/// one-frame lag is part of how the game plays; movement and scoring still
/// land on the colliding frame.
pub fn tick(state: &mut GameState, tuning: &Tuning) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    let collided = any_enemy_hits_player(state);

    state.time_ticks += 1;

    // Move enemies down at the speed each captured at spawn, then cull the
    // ones fully below the bottom edge.
    let cull_y = state.bounds.cull_y();
    for enemy in &mut state.enemies {
        enemy.pos.y += enemy.speed;
    }
    state.enemies.retain(|e| e.pos.y < cull_y);

    // Score counts survived frames; the view divides by 10 for display.
    state.score += 1;

    // Difficulty ramp. Score advances by exactly 1 per frame, so the modulo
    // fires once per window; only future spawns pick up the new speed.
    if state.score % tuning.ramp_window == 0 {
        state.enemy_speed += tuning.ramp_step;
        log::debug!(
            "speed ramp to {} at score {}",
            state.enemy_speed,
            state.score
        );
    }

    if collided {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over at score {} with {} enemies live",
            state.score,
            state.enemies.len()
        );
    }
}

/// Spawn one enemy just above the top edge at a random horizontal offset.
///
/// The enemy is stamped with the current global speed and a fresh id. No-op
/// once the run has ended. There is no cap on the live list; culling in
/// [`tick`] keeps it to roughly fall-time over spawn-interval entries.
pub fn spawn_enemy(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    let max_x = state.bounds.enemy_max_x();
    let id = state.next_enemy_id();
    let enemy = Enemy {
        id,
        pos: Vec2::new(state.rng.random_range(0.0..max_x), -ENEMY_SIZE),
        speed: state.enemy_speed,
    };
    log::debug!("spawn #{} at x={:.1} speed={}", id, enemy.pos.x, enemy.speed);
    state.enemies.push(enemy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ENEMY_SIZE, PLAYER_SIZE};
    use crate::sim::COLLISION_THRESHOLD;
    use crate::sim::state::Bounds;
    use proptest::prelude::*;

    fn new_state(seed: u64) -> (GameState, Tuning) {
        let tuning = Tuning::default();
        let state = GameState::new(Bounds::new(390.0, 844.0), seed, &tuning);
        (state, tuning)
    }

    /// Enemy whose circle center sits at `center`
    fn enemy_centered_at(state: &mut GameState, center: Vec2, speed: f32) -> Enemy {
        Enemy {
            id: state.next_enemy_id(),
            pos: center - Vec2::splat(ENEMY_SIZE / 2.0),
            speed,
        }
    }

    #[test]
    fn test_score_counts_frames_and_ramps_once_per_window() {
        let (mut state, tuning) = new_state(1);

        for _ in 0..299 {
            tick(&mut state, &tuning);
        }
        assert_eq!(state.score, 299);
        assert_eq!(state.enemy_speed, tuning.base_speed);

        tick(&mut state, &tuning);
        assert_eq!(state.score, 300);
        let ramped = state.enemy_speed;
        assert!((ramped - (tuning.base_speed + tuning.ramp_step)).abs() < 1e-5);

        tick(&mut state, &tuning);
        assert_eq!(state.score, 301);
        // exactly one ramp across 301 ticks
        assert_eq!(state.enemy_speed, ramped);
    }

    #[test]
    fn test_ramp_only_affects_future_spawns() {
        let (mut state, tuning) = new_state(2);

        spawn_enemy(&mut state);
        let early_speed = state.enemies[0].speed;
        assert_eq!(early_speed, tuning.base_speed);

        state.enemy_speed += tuning.ramp_step;
        spawn_enemy(&mut state);

        assert_eq!(state.enemies[0].speed, early_speed);
        assert_eq!(state.enemies[1].speed, early_speed + tuning.ramp_step);
    }

    #[test]
    fn test_enemies_move_and_get_culled_past_bottom() {
        let (mut state, tuning) = new_state(3);
        let cull_y = state.bounds.cull_y();

        let id = state.next_enemy_id();
        state.enemies.push(Enemy {
            id,
            pos: Vec2::new(10.0, cull_y - 6.0),
            speed: 6.0,
        });
        let id = state.next_enemy_id();
        state.enemies.push(Enemy {
            id,
            pos: Vec2::new(10.0, cull_y - 6.1),
            speed: 6.0,
        });

        tick(&mut state, &tuning);

        // first reached cull_y exactly and is gone; second is a hair short
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].id, id);
        assert!((state.enemies[0].pos.y - (cull_y - 0.1)).abs() < 1e-3);
    }

    #[test]
    fn test_spawn_lands_across_the_top_with_unique_ids() {
        let (mut state, _tuning) = new_state(4);
        let max_x = state.bounds.enemy_max_x();

        for _ in 0..50 {
            spawn_enemy(&mut state);
        }

        assert_eq!(state.enemies.len(), 50);
        let mut ids: Vec<u32> = state.enemies.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
        for enemy in &state.enemies {
            assert_eq!(enemy.pos.y, -ENEMY_SIZE);
            assert!(enemy.pos.x >= 0.0 && enemy.pos.x < max_x);
            assert_eq!(enemy.speed, state.enemy_speed);
        }
    }

    #[test]
    fn test_collision_at_player_center_ends_the_run() {
        let (mut state, tuning) = new_state(5);

        let player = state.player_center();
        let enemy = enemy_centered_at(&mut state, player, 6.0);
        state.enemies.push(enemy);

        tick(&mut state, &tuning);

        assert_eq!(state.phase, GamePhase::GameOver);
        // movement and scoring still landed on the colliding frame
        assert_eq!(state.score, 1);
        assert_eq!(state.enemies[0].pos.y, player.y - ENEMY_SIZE / 2.0 + 6.0);
    }

    #[test]
    fn test_collision_verdict_lags_movement_by_one_frame() {
        let (mut state, tuning) = new_state(6);

        // Center distance starts just outside the threshold; this frame's
        // movement brings it inside, but the verdict only lands next frame.
        let player = state.player_center();
        let start = player - Vec2::new(0.0, COLLISION_THRESHOLD + 3.0);
        let enemy = enemy_centered_at(&mut state, start, 6.0);
        state.enemies.push(enemy);

        tick(&mut state, &tuning);
        assert_eq!(state.phase, GamePhase::Playing);

        tick(&mut state, &tuning);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_game_over_freezes_tick_and_spawner() {
        let (mut state, tuning) = new_state(7);

        let player = state.player_center();
        let enemy = enemy_centered_at(&mut state, player, 6.0);
        state.enemies.push(enemy);
        tick(&mut state, &tuning);
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen = state.clone();
        tick(&mut state, &tuning);
        spawn_enemy(&mut state);
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_restart_resumes_spawning_and_ticking() {
        let (mut state, tuning) = new_state(8);

        let player = state.player_center();
        let enemy = enemy_centered_at(&mut state, player, 6.0);
        state.enemies.push(enemy);
        tick(&mut state, &tuning);
        assert_eq!(state.phase, GamePhase::GameOver);

        state.restart(&tuning);
        tick(&mut state, &tuning);
        spawn_enemy(&mut state);

        assert_eq!(state.score, 1);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_determinism_same_seed_same_trajectory() {
        let (mut a, tuning) = new_state(99999);
        let (mut b, _) = new_state(99999);

        for round in 0..400u32 {
            if round % 50 == 0 {
                spawn_enemy(&mut a);
                spawn_enemy(&mut b);
            }
            tick(&mut a, &tuning);
            tick(&mut b, &tuning);
        }

        assert_eq!(a, b);
    }

    #[test]
    fn test_player_radius_matches_view_geometry() {
        // the collision threshold is the sum of the two circle radii
        assert_eq!(COLLISION_THRESHOLD, PLAYER_SIZE / 2.0 + ENEMY_SIZE / 2.0);
    }

    proptest! {
        /// Score and speed never decrease, whatever the interleaving of
        /// spawns and ticks.
        #[test]
        fn prop_score_and_speed_monotonic(ops in proptest::collection::vec(any::<bool>(), 0..600)) {
            let (mut state, tuning) = new_state(42);
            let mut last_score = state.score;
            let mut last_speed = state.enemy_speed;

            for is_tick in ops {
                if is_tick {
                    tick(&mut state, &tuning);
                } else {
                    spawn_enemy(&mut state);
                }
                prop_assert!(state.score >= last_score);
                prop_assert!(state.enemy_speed >= last_speed);
                last_score = state.score;
                last_speed = state.enemy_speed;
            }
        }

        /// Nothing ever survives below the cull line.
        #[test]
        fn prop_no_enemy_below_cull_line(ops in proptest::collection::vec(any::<bool>(), 0..600)) {
            let (mut state, tuning) = new_state(43);
            let cull_y = state.bounds.cull_y();

            for is_tick in ops {
                if is_tick {
                    tick(&mut state, &tuning);
                } else {
                    spawn_enemy(&mut state);
                }
                prop_assert!(state.enemies.iter().all(|e| e.pos.y < cull_y));
            }
        }
    }
}
