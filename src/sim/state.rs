//! Game state and core simulation types
//!
//! All session state lives in [`GameState`]; nothing simulation-related is
//! process-global. Entities carry an `active` flag and are purged once per
//! tick by [`GameState::compact`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Top-level mode governing which subsystems run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen, waiting for confirm input
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Collision radius proxy; also used to clamp movement to the playfield
    pub size: f32,
    /// Movement speed in units per tick
    pub speed: f32,
    pub lives: u8,
    pub score: u32,
}

impl Player {
    fn spawn() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            lives: START_LIVES,
            score: 0,
        }
    }
}

/// A player bullet, travelling straight up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub speed: f32,
    pub active: bool,
}

/// Enemy body shape, chosen uniformly at spawn
///
/// The renderer dispatches on this; collision treats every kind as a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Circle,
    Triangle,
    Square,
    Diamond,
}

impl EnemyKind {
    pub fn sample(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..4) {
            0 => EnemyKind::Circle,
            1 => EnemyKind::Triangle,
            2 => EnemyKind::Square,
            _ => EnemyKind::Diamond,
        }
    }
}

/// A descending enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Fall speed in units per tick, rolled at spawn from the current level
    pub speed: f32,
    pub kind: EnemyKind,
    pub active: bool,
}

/// A falling extra-life pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub speed: f32,
    pub active: bool,
}

/// Complete session state
///
/// Mutated only by the per-tick update and by the reset transition; the
/// renderer gets shared access only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,

    /// Current difficulty level, 1..=3, non-decreasing within a session
    pub level: u32,
    /// Ticks between enemy spawns; recomputed on level advance
    pub enemy_spawn_interval: u32,

    // Free-running tick counters, each reset on the event it guards
    pub level_timer: u32,
    pub enemy_spawn_timer: u32,
    pub power_up_timer: u32,
    pub last_hit_timer: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Menu-start defaults; gameplay state is (re-)armed by [`reset_session`]
    ///
    /// [`reset_session`]: GameState::reset_session
    pub fn new() -> Self {
        Self {
            mode: GameMode::Menu,
            player: Player::spawn(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            level: 1,
            enemy_spawn_interval: BASE_SPAWN_INTERVAL,
            level_timer: 0,
            enemy_spawn_timer: 0,
            power_up_timer: 0,
            last_hit_timer: 0,
        }
    }

    /// Full session reset and transition into `Playing`
    ///
    /// Applied atomically between ticks, from the Menu/GameOver confirm input.
    pub fn reset_session(&mut self) {
        self.player = Player::spawn();
        self.bullets.clear();
        self.enemies.clear();
        self.power_ups.clear();
        self.level = 1;
        self.enemy_spawn_interval = BASE_SPAWN_INTERVAL;
        self.level_timer = 0;
        self.enemy_spawn_timer = 0;
        self.power_up_timer = 0;
        self.last_hit_timer = 0;
        self.mode = GameMode::Playing;
        log::info!("session start: lives={}, level=1", self.player.lives);
    }

    /// Push a bullet at the given muzzle position
    pub fn spawn_bullet(&mut self, origin: Vec2) {
        self.bullets.push(Bullet {
            pos: origin,
            speed: BULLET_SPEED,
            active: true,
        });
    }

    /// Spawn an enemy at the top bound with level-scaled speed and random kind
    pub fn spawn_enemy(&mut self, rng: &mut impl Rng) {
        // x sums two independent draws and is not uniform across the field
        let x = (rng.random_range(0..PLAYFIELD_WIDTH as u32 - 40) + rng.random_range(0..20)) as f32;
        let speed = ENEMY_BASE_SPEED
            + rng.random_range(0..3) as f32
            + self.level as f32 * ENEMY_LEVEL_SPEED_BONUS;
        let kind = EnemyKind::sample(rng);
        log::debug!("enemy spawn: x={x:.0} speed={speed:.1} kind={kind:?}");
        self.enemies.push(Enemy {
            pos: Vec2::new(x, PLAYFIELD_HEIGHT),
            speed,
            kind,
            active: true,
        });
    }

    /// Spawn a power-up at the top bound, uniform in x within margins
    pub fn spawn_power_up(&mut self, rng: &mut impl Rng) {
        let x = (rng.random_range(0..PLAYFIELD_WIDTH as u32 - 40) + 20) as f32;
        log::debug!("power-up spawn: x={x:.0}");
        self.power_ups.push(PowerUp {
            pos: Vec2::new(x, PLAYFIELD_HEIGHT),
            speed: POWER_UP_SPEED,
            active: true,
        });
    }

    /// Drop all inactive entities, preserving relative order of survivors
    ///
    /// Runs exactly once per `Playing` tick, after all movement and collision
    /// passes, so each tick's passes see the full set that was active at tick
    /// start.
    pub fn compact(&mut self) {
        self.bullets.retain(|b| b.active);
        self.enemies.retain(|e| e.active);
        self.power_ups.retain(|p| p.active);
    }

    /// Shared life-loss funnel for the collision and idle-penalty paths
    ///
    /// Clamps at zero and flips the mode to `GameOver` the moment lives run
    /// out.
    pub fn lose_life(&mut self) {
        self.player.lives = self.player.lives.saturating_sub(1);
        if self.player.lives == 0 {
            self.mode = GameMode::GameOver;
            log::info!("game over: score={}", self.player.score);
        }
    }

    /// Grant an extra life, capped at [`MAX_LIVES`]
    pub fn grant_life(&mut self) {
        if self.player.lives < MAX_LIVES {
            self.player.lives += 1;
        }
    }
}
