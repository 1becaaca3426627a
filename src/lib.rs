//! Space Defender - a wave-survival arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, scoring, leveling)
//! - `render`: Read-only draw-list building and software rasterization primitives
//! - `input`: Logical input actions and held-key tracking
//! - `engine`: Session facade wiring input, simulation and RNG together
//!
//! The windowing shell is an external collaborator: it forwards debounced
//! key events, calls [`Engine::update`] at ~60 Hz and reads the current
//! state (or a built [`render::Frame`]) to draw.

pub mod engine;
pub mod input;
pub mod render;
pub mod sim;

pub use engine::Engine;
pub use input::{Action, InputState};
pub use sim::{GameMode, GameState};

/// Game configuration constants
pub mod consts {
    /// Logical playfield dimensions, origin at bottom-left
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SPAWN_X: f32 = PLAYFIELD_WIDTH / 2.0;
    pub const PLAYER_SPAWN_Y: f32 = 50.0;
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const START_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 5;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 10.0;

    /// Enemy defaults
    pub const ENEMY_BASE_SPEED: f32 = 2.0;
    /// Additional fall speed per difficulty level
    pub const ENEMY_LEVEL_SPEED_BONUS: f32 = 0.5;
    /// Enemies despawn this far below the bottom bound
    pub const ENEMY_DESPAWN_MARGIN: f32 = 30.0;

    /// Power-up defaults
    pub const POWER_UP_SPEED: f32 = 1.5;
    pub const POWER_UP_DESPAWN_MARGIN: f32 = 20.0;
    /// Ticks between power-up spawns (5 seconds at 60 Hz)
    pub const POWER_UP_INTERVAL: u32 = 300;

    /// Enemy spawn cadence: interval = BASE - (level - 1) * STEP
    pub const BASE_SPAWN_INTERVAL: u32 = 60;
    pub const SPAWN_INTERVAL_STEP: u32 = 25;

    /// Difficulty progression
    pub const MAX_LEVEL: u32 = 3;
    /// Ticks between level advances (15 seconds at 60 Hz)
    pub const LEVEL_UP_TICKS: u32 = 900;
    /// Ticks without a kill before a life is forfeited (5 seconds at 60 Hz)
    pub const IDLE_PENALTY_TICKS: u32 = 300;

    /// Collision thresholds (all entities collide as circles)
    pub const BULLET_HIT_RADIUS: f32 = 20.0;
    pub const ENEMY_HIT_PADDING: f32 = 15.0;
    pub const PICKUP_PADDING: f32 = 10.0;

    /// Scoring
    pub const KILL_SCORE: u32 = 10;
    pub const PICKUP_SCORE: u32 = 20;
}
