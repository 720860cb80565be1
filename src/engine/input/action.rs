// Logical action definitions and default key mappings

use winit::keyboard::KeyCode;

/// Logical actions a character responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Right,
    Left,
    Up,
    Down,
}

impl Action {
    /// All actions, in the order they are stored in [`super::InputState`]
    pub const ALL: [Action; 4] = [Action::Right, Action::Left, Action::Up, Action::Down];

    /// Slot of this action in a fixed-size held-state array
    pub fn index(self) -> usize {
        match self {
            Action::Right => 0,
            Action::Left => 1,
            Action::Up => 2,
            Action::Down => 3,
        }
    }
}

/// Default bindings: arrow keys plus the WASD equivalents
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::ArrowRight, Action::Right),
        (KeyCode::KeyD, Action::Right),
        (KeyCode::ArrowLeft, Action::Left),
        (KeyCode::KeyA, Action::Left),
        (KeyCode::ArrowUp, Action::Up),
        (KeyCode::KeyW, Action::Up),
        (KeyCode::ArrowDown, Action::Down),
        (KeyCode::KeyS, Action::Down),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_action_indices_are_distinct() {
        let indices: HashSet<usize> = Action::ALL.iter().map(|a| a.index()).collect();
        assert_eq!(indices.len(), Action::ALL.len());
        assert!(indices.iter().all(|i| *i < Action::ALL.len()));
    }

    #[test]
    fn test_every_action_has_two_default_keys() {
        let bindings = default_bindings();
        for action in Action::ALL {
            let count = bindings.iter().filter(|(_, a)| *a == action).count();
            assert_eq!(count, 2, "{:?} should have arrow + letter key", action);
        }
    }

    #[test]
    fn test_no_duplicate_default_keys() {
        let mut seen = HashSet::new();
        for (key, _) in default_bindings() {
            assert!(seen.insert(key), "Duplicate key {:?} in default bindings", key);
        }
    }
}
