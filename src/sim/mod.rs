//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick` per ~16ms scheduler callback)
//! - Seeded RNG only, injected by the caller
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod spawn;
pub mod state;
pub mod tick;

pub use state::{Bullet, Enemy, EnemyKind, GameMode, GameState, Player, PowerUp};
pub use tick::tick;
