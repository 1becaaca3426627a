//! Logical input actions and held-key tracking
//!
//! The windowing shell maps physical keys to [`Action`]s and forwards
//! debounced edge events; the engine owns the held-direction set. Firing is
//! buffered so the entity store is only touched from the update step.

/// Closed set of logical input actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    /// Shoot while playing
    Fire,
    /// Start/restart from the menu and game-over screens
    Confirm,
    Quit,
}

impl Action {
    pub const COUNT: usize = 7;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Currently-pressed actions plus buffered fire presses
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [bool; Action::COUNT],
    /// Fire presses seen since the last tick; one bullet per press
    queued_shots: u32,
}

impl InputState {
    pub fn press(&mut self, action: Action) {
        self.held[action.index()] = true;
    }

    pub fn release(&mut self, action: Action) {
        self.held[action.index()] = false;
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    /// Buffer one fire press for the next update
    pub fn queue_shot(&mut self) {
        self.queued_shots += 1;
    }

    /// Drain buffered fire presses
    pub fn take_shots(&mut self) -> u32 {
        std::mem::take(&mut self.queued_shots)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_track_held_set() {
        let mut input = InputState::default();
        input.press(Action::Left);
        input.press(Action::Up);
        assert!(input.is_held(Action::Left));
        assert!(input.is_held(Action::Up));
        assert!(!input.is_held(Action::Right));

        input.release(Action::Left);
        assert!(!input.is_held(Action::Left));
        assert!(input.is_held(Action::Up));
    }

    #[test]
    fn test_queued_shots_drain_once() {
        let mut input = InputState::default();
        input.queue_shot();
        input.queue_shot();
        assert_eq!(input.take_shots(), 2);
        assert_eq!(input.take_shots(), 0);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut input = InputState::default();
        input.press(Action::Down);
        input.queue_shot();
        input.clear();
        assert!(!input.is_held(Action::Down));
        assert_eq!(input.take_shots(), 0);
    }
}
