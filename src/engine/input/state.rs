// Held-action state and per-tick snapshots

use super::action::Action;

/// Immutable view of the input for a single tick.
///
/// Taken once per tick so every character updated in that tick sees the same
/// held keys, regardless of host events arriving in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
    /// `Up` went from held to released since the previous snapshot
    pub jump_released: bool,
}

/// Currently held actions plus the jump-release edge.
///
/// State is keyed by logical action only: two keys bound to the same action
/// are indistinguishable and the last event wins.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [bool; 4],
    jump_released: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    /// Whether the jump-release edge is armed and not yet taken
    pub fn jump_released(&self) -> bool {
        self.jump_released
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        self.held[action.index()] = true;
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        let was_held = self.held[action.index()];
        self.held[action.index()] = false;

        if action == Action::Up && was_held {
            self.jump_released = true;
        }
    }

    /// Copy the held state and take the jump-release edge
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = self.peek();
        self.jump_released = false;
        snapshot
    }

    /// Copy the held state without taking the edge
    pub fn peek(&self) -> InputSnapshot {
        InputSnapshot {
            right: self.is_held(Action::Right),
            left: self.is_held(Action::Left),
            up: self.is_held(Action::Up),
            down: self.is_held(Action::Down),
            jump_released: self.jump_released,
        }
    }

    /// Drop all held actions and the pending edge
    pub fn reset(&mut self) {
        self.held = [false; 4];
        self.jump_released = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        input.press(Action::Right);
        assert!(input.is_held(Action::Right));
        assert!(!input.is_held(Action::Left));

        input.release(Action::Right);
        assert!(!input.is_held(Action::Right));
    }

    #[test]
    fn test_releasing_held_up_raises_edge() {
        let mut input = InputState::new();
        input.press(Action::Up);
        input.release(Action::Up);
        assert!(input.jump_released());
    }

    #[test]
    fn test_releasing_unheld_up_does_not_raise_edge() {
        let mut input = InputState::new();
        input.release(Action::Up);
        assert!(!input.jump_released());
    }

    #[test]
    fn test_releasing_other_actions_does_not_raise_edge() {
        let mut input = InputState::new();
        input.press(Action::Left);
        input.release(Action::Left);
        assert!(!input.jump_released());
    }

    #[test]
    fn test_snapshot_takes_edge_once() {
        let mut input = InputState::new();
        input.press(Action::Up);
        input.release(Action::Up);

        let first = input.snapshot();
        assert!(first.jump_released);
        assert!(!first.up);

        let second = input.snapshot();
        assert!(!second.jump_released);
    }

    #[test]
    fn test_peek_keeps_edge() {
        let mut input = InputState::new();
        input.press(Action::Up);
        input.release(Action::Up);

        assert!(input.peek().jump_released);
        assert!(input.jump_released());
    }

    #[test]
    fn test_snapshot_reflects_held_actions() {
        let mut input = InputState::new();
        input.press(Action::Left);
        input.press(Action::Down);

        let snapshot = input.snapshot();
        assert!(snapshot.left && snapshot.down);
        assert!(!snapshot.right && !snapshot.up);
    }

    #[test]
    fn test_reset() {
        let mut input = InputState::new();
        input.press(Action::Up);
        input.press(Action::Right);
        input.release(Action::Up);
        input.reset();

        assert_eq!(input.peek(), InputSnapshot::default());
        assert!(!input.jump_released());
    }
}
