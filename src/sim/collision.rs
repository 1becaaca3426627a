//! Movement-and-collision passes
//!
//! Every entity collides as a circle: a hit is a center distance below a
//! fixed threshold, regardless of the drawn shape. The three passes must run
//! in the order enemy -> bullet -> power-up; that order decides priority when
//! several collisions could fire in one tick. Deactivation is visible to
//! later passes immediately (the `active` flag), but removal waits for the
//! end-of-tick compaction.

use glam::Vec2;

use super::state::{GameMode, GameState};
use crate::consts::*;

/// Circle-vs-circle hit test on entity centers
#[inline]
pub fn within(a: Vec2, b: Vec2, threshold: f32) -> bool {
    a.distance(b) < threshold
}

/// Move enemies down and resolve contact with the player
///
/// Each contact costs a life through the shared funnel; the session can end
/// mid-pass.
pub fn enemy_pass(state: &mut GameState) {
    let player_pos = state.player.pos;
    let threshold = state.player.size + ENEMY_HIT_PADDING;

    let mut contacts = 0u32;
    for enemy in &mut state.enemies {
        if !enemy.active {
            continue;
        }
        enemy.pos.y -= enemy.speed;
        if enemy.pos.y < -ENEMY_DESPAWN_MARGIN {
            enemy.active = false;
            continue;
        }
        if within(enemy.pos, player_pos, threshold) {
            enemy.active = false;
            contacts += 1;
        }
    }

    for _ in 0..contacts {
        state.lose_life();
        if state.mode != GameMode::Playing {
            break;
        }
    }
}

/// Resolve bullet-enemy hits
///
/// A bullet is consumed by at most one enemy and vice versa: each bullet
/// stops at its first still-active match. Enemies already deactivated
/// earlier in the tick are skipped. Every kill scores and re-arms the idle
/// penalty timer.
pub fn bullet_enemy_pass(state: &mut GameState) {
    let mut kills = 0u32;
    for bullet in &mut state.bullets {
        if !bullet.active {
            continue;
        }
        for enemy in &mut state.enemies {
            if !enemy.active {
                continue;
            }
            if within(bullet.pos, enemy.pos, BULLET_HIT_RADIUS) {
                bullet.active = false;
                enemy.active = false;
                kills += 1;
                break;
            }
        }
    }

    if kills > 0 {
        state.player.score += kills * KILL_SCORE;
        state.last_hit_timer = 0;
    }
}

/// Move power-ups down and resolve pickup
///
/// Pickup grants a capped extra life and scores, and does NOT touch the idle
/// penalty timer.
pub fn power_up_pass(state: &mut GameState) {
    let player_pos = state.player.pos;
    let threshold = state.player.size + PICKUP_PADDING;

    let mut picked = 0u32;
    for power_up in &mut state.power_ups {
        if !power_up.active {
            continue;
        }
        power_up.pos.y -= power_up.speed;
        if power_up.pos.y < -POWER_UP_DESPAWN_MARGIN {
            power_up.active = false;
            continue;
        }
        if within(power_up.pos, player_pos, threshold) {
            power_up.active = false;
            picked += 1;
        }
    }

    for _ in 0..picked {
        state.grant_life();
        state.player.score += PICKUP_SCORE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, Enemy, EnemyKind, PowerUp};

    fn playing_state() -> GameState {
        let mut state = GameState::new();
        state.reset_session();
        state
    }

    fn enemy_at(x: f32, y: f32) -> Enemy {
        Enemy {
            pos: Vec2::new(x, y),
            speed: 0.0,
            kind: EnemyKind::Circle,
            active: true,
        }
    }

    #[test]
    fn test_enemy_contact_costs_a_life() {
        let mut state = playing_state();
        let p = state.player.pos;
        state.enemies.push(enemy_at(p.x + 10.0, p.y));

        enemy_pass(&mut state);
        assert!(!state.enemies[0].active);
        assert_eq!(state.player.lives, 2);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_enemy_contact_on_last_life_ends_session() {
        let mut state = playing_state();
        state.player.lives = 1;
        let p = state.player.pos;
        state.enemies.push(enemy_at(p.x, p.y + 5.0));

        enemy_pass(&mut state);
        assert_eq!(state.player.lives, 0);
        assert_eq!(state.mode, GameMode::GameOver);
    }

    #[test]
    fn test_enemy_below_bound_despawns_without_contact() {
        let mut state = playing_state();
        let mut enemy = enemy_at(100.0, -29.0);
        enemy.speed = 5.0;
        state.enemies.push(enemy);

        enemy_pass(&mut state);
        assert!(!state.enemies[0].active);
        assert_eq!(state.player.lives, 3);
    }

    #[test]
    fn test_bullet_consumes_only_first_enemy() {
        let mut state = playing_state();
        state.bullets.push(Bullet {
            pos: Vec2::new(100.0, 200.0),
            speed: BULLET_SPEED,
            active: true,
        });
        state.enemies.push(enemy_at(100.0, 205.0));
        state.enemies.push(enemy_at(105.0, 200.0));

        bullet_enemy_pass(&mut state);
        assert!(!state.bullets[0].active);
        assert!(!state.enemies[0].active);
        assert!(state.enemies[1].active);
        assert_eq!(state.player.score, KILL_SCORE);
    }

    #[test]
    fn test_bullet_skips_enemy_deactivated_earlier_in_tick() {
        let mut state = playing_state();
        state.bullets.push(Bullet {
            pos: Vec2::new(100.0, 200.0),
            speed: BULLET_SPEED,
            active: true,
        });
        let mut dead = enemy_at(100.0, 205.0);
        dead.active = false;
        state.enemies.push(dead);

        bullet_enemy_pass(&mut state);
        assert!(state.bullets[0].active);
        assert_eq!(state.player.score, 0);
    }

    #[test]
    fn test_kill_rearms_idle_penalty_timer() {
        let mut state = playing_state();
        state.last_hit_timer = 250;
        state.bullets.push(Bullet {
            pos: Vec2::new(50.0, 50.0),
            speed: BULLET_SPEED,
            active: true,
        });
        state.enemies.push(enemy_at(50.0, 60.0));

        bullet_enemy_pass(&mut state);
        assert_eq!(state.last_hit_timer, 0);
    }

    #[test]
    fn test_pickup_grants_capped_life_and_score_without_timer_reset() {
        let mut state = playing_state();
        state.player.lives = 5;
        state.last_hit_timer = 123;
        let p = state.player.pos;
        state.power_ups.push(PowerUp {
            pos: Vec2::new(p.x, p.y + 5.0),
            speed: 0.0,
            active: true,
        });

        power_up_pass(&mut state);
        assert!(!state.power_ups[0].active);
        assert_eq!(state.player.lives, 5);
        assert_eq!(state.player.score, PICKUP_SCORE);
        assert_eq!(state.last_hit_timer, 123);
    }

    #[test]
    fn test_empty_collections_are_noops() {
        let mut state = playing_state();
        enemy_pass(&mut state);
        bullet_enemy_pass(&mut state);
        power_up_pass(&mut state);
        assert_eq!(state.player.lives, 3);
        assert_eq!(state.player.score, 0);
    }
}
