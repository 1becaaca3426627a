//! Difficulty progression and the no-kill penalty
//!
//! Two small timer-driven rules that run at the top of each Playing tick:
//! the level advance (every 15 seconds, up to level 3) and the idle penalty
//! (a life forfeited after 5 seconds without a kill). Both life-loss paths
//! funnel through [`GameState::lose_life`].

use super::state::GameState;
use crate::consts::*;

/// Enemy spawn interval for a difficulty level: 60, 35, 10 ticks
pub fn spawn_interval_for(level: u32) -> u32 {
    BASE_SPAWN_INTERVAL - (level - 1) * SPAWN_INTERVAL_STEP
}

/// Advance the level every [`LEVEL_UP_TICKS`] ticks
///
/// At the level cap the timer still resets on schedule but the level and
/// spawn interval stay put.
pub fn advance_level(state: &mut GameState) {
    if state.level_timer >= LEVEL_UP_TICKS {
        if state.level < MAX_LEVEL {
            state.level += 1;
            state.enemy_spawn_interval = spawn_interval_for(state.level);
            log::info!(
                "level up: level={} spawn_interval={}",
                state.level,
                state.enemy_spawn_interval
            );
        }
        state.level_timer = 0;
    }
}

/// Forfeit a life after [`IDLE_PENALTY_TICKS`] ticks without a kill
pub fn apply_idle_penalty(state: &mut GameState) {
    if state.last_hit_timer >= IDLE_PENALTY_TICKS && state.player.lives > 0 {
        state.lose_life();
        state.last_hit_timer = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameMode;

    #[test]
    fn test_spawn_interval_table() {
        assert_eq!(spawn_interval_for(1), 60);
        assert_eq!(spawn_interval_for(2), 35);
        assert_eq!(spawn_interval_for(3), 10);
    }

    #[test]
    fn test_level_caps_at_three_but_timer_still_resets() {
        let mut state = GameState::new();
        state.reset_session();
        state.level = 3;
        state.enemy_spawn_interval = spawn_interval_for(3);
        state.level_timer = LEVEL_UP_TICKS;

        advance_level(&mut state);
        assert_eq!(state.level, 3);
        assert_eq!(state.enemy_spawn_interval, 10);
        assert_eq!(state.level_timer, 0);
    }

    #[test]
    fn test_idle_penalty_takes_one_life_and_rearms() {
        let mut state = GameState::new();
        state.reset_session();
        state.last_hit_timer = IDLE_PENALTY_TICKS;

        apply_idle_penalty(&mut state);
        assert_eq!(state.player.lives, 2);
        assert_eq!(state.last_hit_timer, 0);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_idle_penalty_on_last_life_ends_session() {
        let mut state = GameState::new();
        state.reset_session();
        state.player.lives = 1;
        state.last_hit_timer = IDLE_PENALTY_TICKS;

        apply_idle_penalty(&mut state);
        assert_eq!(state.player.lives, 0);
        assert_eq!(state.mode, GameMode::GameOver);
    }
}
