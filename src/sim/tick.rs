//! Fixed timestep simulation tick
//!
//! One call advances the session by a single ~16ms step. The pass order is
//! load-bearing: it decides which of several possible collisions wins a tick
//! and keeps the compaction invariant (every pass sees the entities that were
//! active at tick start).

use glam::Vec2;
use rand::Rng;

use super::state::{GameMode, GameState};
use super::{collision, level, spawn};
use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::input::{Action, InputState};

/// Advance the game state by one tick
///
/// No-op unless the session is in `Playing`. Buffered fire presses are
/// drained here so entity mutation stays inside the update step.
pub fn tick(state: &mut GameState, input: &mut InputState, rng: &mut impl Rng) {
    if state.mode != GameMode::Playing {
        return;
    }

    state.enemy_spawn_timer += 1;
    state.power_up_timer += 1;
    state.level_timer += 1;
    state.last_hit_timer += 1;

    level::advance_level(state);
    level::apply_idle_penalty(state);
    if state.mode != GameMode::Playing {
        return;
    }

    move_player(state, input);
    for _ in 0..input.take_shots() {
        let muzzle = state.player.pos + Vec2::new(0.0, state.player.size);
        state.spawn_bullet(muzzle);
    }
    move_bullets(state);

    spawn::spawn_due_enemy(state, rng);
    collision::enemy_pass(state);
    if state.mode != GameMode::Playing {
        return;
    }

    collision::bullet_enemy_pass(state);
    spawn::spawn_due_power_up(state, rng);
    collision::power_up_pass(state);

    state.compact();
}

/// Apply held directions, clamped to the playfield
fn move_player(state: &mut GameState, input: &InputState) {
    let player = &mut state.player;
    if input.is_held(Action::Left) {
        player.pos.x -= player.speed;
    }
    if input.is_held(Action::Right) {
        player.pos.x += player.speed;
    }
    if input.is_held(Action::Up) {
        player.pos.y += player.speed;
    }
    if input.is_held(Action::Down) {
        player.pos.y -= player.speed;
    }
    player.pos.x = player.pos.x.clamp(player.size, PLAYFIELD_WIDTH - player.size);
    player.pos.y = player.pos.y.clamp(player.size, PLAYFIELD_HEIGHT - player.size);
}

fn move_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        if bullet.active {
            bullet.pos.y += bullet.speed;
            if bullet.pos.y > PLAYFIELD_HEIGHT {
                bullet.active = false;
            }
        }
    }
}
