//! Session facade
//!
//! Owns the game state, the held-input set and the RNG, and exposes the
//! narrow surface the shell drives: edge-triggered key events, the ~60 Hz
//! update step and read-only state access for drawing. Mode transitions
//! (start, restart, quit request) are applied here, between ticks, so a
//! session reset is always atomic with respect to the update step.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::input::{Action, InputState};
use crate::render::{Frame, build_frame};
use crate::sim::{self, GameMode, GameState};

pub struct Engine {
    state: GameState,
    input: InputState,
    rng: Pcg32,
    quit: bool,
}

impl Engine {
    /// Fresh engine in Menu mode
    ///
    /// The seed fixes every random draw of the session; tests pass a
    /// constant, the shell typically passes wall-clock time.
    pub fn new(seed: u64) -> Self {
        log::info!("engine init: seed={seed}");
        Self {
            state: GameState::new(),
            input: InputState::default(),
            rng: Pcg32::seed_from_u64(seed),
            quit: false,
        }
    }

    /// Back to Menu-start defaults, keeping the RNG stream
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.input.clear();
        self.quit = false;
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self) {
        sim::tick(&mut self.state, &mut self.input, &mut self.rng);
    }

    /// Read-only state access for the renderer and HUD
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Build this frame's draw lists; pure read
    pub fn frame(&self) -> Frame {
        build_frame(&self.state)
    }

    /// Edge event: a logical key went down
    pub fn key_down(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit = true,
            Action::Fire | Action::Confirm => match self.state.mode {
                GameMode::Menu | GameMode::GameOver => self.state.reset_session(),
                GameMode::Playing => self.input.queue_shot(),
            },
            _ => self.input.press(action),
        }
    }

    /// Edge event: a logical key went up
    pub fn key_up(&mut self, action: Action) {
        match action {
            Action::Left | Action::Right | Action::Up | Action::Down => {
                self.input.release(action);
            }
            _ => {}
        }
    }

    /// True once a quit input was seen; the shell owns process exit
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::START_LIVES;

    #[test]
    fn test_confirm_starts_session_from_menu() {
        let mut engine = Engine::new(1);
        assert_eq!(engine.state().mode, GameMode::Menu);

        engine.key_down(Action::Confirm);
        assert_eq!(engine.state().mode, GameMode::Playing);
        assert_eq!(engine.state().player.lives, START_LIVES);
    }

    #[test]
    fn test_fire_during_play_spawns_bullet_on_next_update() {
        let mut engine = Engine::new(1);
        engine.key_down(Action::Fire);
        assert!(engine.state().bullets.is_empty());

        engine.key_down(Action::Fire);
        engine.update();
        assert_eq!(engine.state().bullets.len(), 1);
    }

    #[test]
    fn test_restart_from_game_over_resets_everything() {
        let mut engine = Engine::new(1);
        engine.key_down(Action::Confirm);
        // Run the session into the ground via the idle penalty
        for _ in 0..100_000 {
            if engine.state().mode != GameMode::Playing {
                break;
            }
            engine.update();
        }
        assert_eq!(engine.state().mode, GameMode::GameOver);

        engine.key_down(Action::Fire);
        assert_eq!(engine.state().mode, GameMode::Playing);
        assert_eq!(engine.state().player.score, 0);
        assert_eq!(engine.state().player.lives, START_LIVES);
        assert!(engine.state().enemies.is_empty());
    }

    #[test]
    fn test_quit_is_flagged_not_acted_on() {
        let mut engine = Engine::new(1);
        assert!(!engine.quit_requested());
        engine.key_down(Action::Quit);
        assert!(engine.quit_requested());
        // Engine state is untouched; the shell decides when to exit
        assert_eq!(engine.state().mode, GameMode::Menu);
    }

    #[test]
    fn test_held_directions_release() {
        let mut engine = Engine::new(1);
        engine.key_down(Action::Confirm);
        engine.key_down(Action::Right);
        let x0 = engine.state().player.pos.x;
        engine.update();
        assert!(engine.state().player.pos.x > x0);

        engine.key_up(Action::Right);
        let x1 = engine.state().player.pos.x;
        engine.update();
        assert_eq!(engine.state().player.pos.x, x1);
    }
}
