//! Timer-driven entity generators
//!
//! Two independent generators, each comparing a free-running tick counter
//! against a threshold and resetting it when it fires. The enemy interval is
//! owned by the level controller; the power-up interval is fixed.

use rand::Rng;

use super::state::GameState;
use crate::consts::POWER_UP_INTERVAL;

/// Spawn an enemy if the spawn timer has run past the current interval
pub fn spawn_due_enemy(state: &mut GameState, rng: &mut impl Rng) {
    if state.enemy_spawn_timer > state.enemy_spawn_interval {
        state.spawn_enemy(rng);
        state.enemy_spawn_timer = 0;
    }
}

/// Spawn a power-up if its timer has run past the fixed interval
pub fn spawn_due_power_up(state: &mut GameState, rng: &mut impl Rng) {
    if state.power_up_timer > POWER_UP_INTERVAL {
        state.spawn_power_up(rng);
        state.power_up_timer = 0;
    }
}
